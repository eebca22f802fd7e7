#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to persist state: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode state: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("import rejected: {0}")]
    InvalidImport(String),
}
