pub mod api_client;
pub mod auth_service;
pub mod plan_service;
pub mod tenant_service;

pub use api_client::ApiError;
