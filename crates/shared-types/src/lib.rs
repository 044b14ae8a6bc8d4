pub mod auth;
pub mod error;
pub mod models;
pub mod requests;
pub mod stats;

pub use auth::*;
pub use error::*;
pub use models::*;
pub use requests::*;
pub use stats::*;
