// Shared utils
pub mod browser;
pub mod format;
pub mod subscription;

pub use browser::*;
pub use format::*;
pub use subscription::*;
