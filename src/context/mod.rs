pub mod auth;
pub mod toast;

pub use auth::{use_session, AuthProvider, Session};
pub use toast::{use_toasts, ToastProvider, Toasts};
