mod app_error;

pub use app_error::AppError;

/// Result type shared by queries and handlers.
pub type Result<T> = std::result::Result<T, AppError>;
