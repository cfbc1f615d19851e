//! Interface session state feature.
//!
//! [`WorkspaceController`] is the in-process embedding of one user's
//! management session: the selected brand, the derived document list, the
//! search filter, modal visibility, and in-flight mutation flags. It has no
//! HTTP surface of its own; front ends built on this crate drive it
//! directly and render from its state snapshots.

pub mod models;
pub mod services;

pub use models::{Notification, NotificationKind, UploadMode, WorkspaceState};
pub use services::WorkspaceController;
