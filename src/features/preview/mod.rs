//! Document preview feature.
//!
//! Builds the descriptor the embedded PDF viewer needs: the content URL
//! with a `#page=N&zoom=Z` fragment. Rendering itself is delegated to the
//! viewer; this feature only owns the page/zoom rules.

pub mod dtos;
pub mod handlers;
pub mod routes;
pub mod services;

pub use routes::routes;
pub use services::PreviewService;
