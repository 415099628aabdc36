use thiserror::Error;

pub type Result<T> = std::result::Result<T, DockError>;

#[derive(Debug, Error)]
pub enum DockError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    /// The window vanished between the client-list read and the property
    /// query. Absorbed during reconciliation; never fatal.
    #[error("Stale window handle: {0}")]
    StaleWindow(String),
    #[error("Display server error: {0}")]
    Backend(String),
}
