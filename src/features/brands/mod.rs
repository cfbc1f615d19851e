//! Retail brand enumeration feature.
//!
//! Brands partition the document collection tenant-style. The set is fixed
//! at compile time; this feature exposes it read-only for brand pickers.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/brands` | List all brands with display labels |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;

pub use models::Brand;
pub use routes::routes;
