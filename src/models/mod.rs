// Wire models shared with the backend
pub mod auth;
pub mod plan;
pub mod stats;
pub mod tenant;

pub use auth::*;
pub use plan::*;
pub use stats::*;
pub use tenant::*;
