/// Errors that can occur in Vitae operations.
#[derive(Debug, thiserror::Error)]
pub enum VitaeError {
    #[error("I/O error: {0}")]
    Io(String),

    #[error("pattern error: {0}")]
    Pattern(String),
}

impl From<std::io::Error> for VitaeError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}
