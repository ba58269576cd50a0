use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Credential file error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Browser storage unavailable: {0}")]
    Unavailable(String),
}
