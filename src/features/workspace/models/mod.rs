mod session;

pub use session::{Notification, NotificationKind, UploadMode, WorkspaceState};
