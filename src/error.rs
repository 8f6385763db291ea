#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("Failed to write header: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid C identifier for {field}: {value:?}")]
    InvalidIdentifier { field: &'static str, value: String },
}
