use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MappingError {
    #[error("mapping has {sources} source names but {targets} target names")]
    LengthMismatch { sources: usize, targets: usize },
}

pub type Result<T> = std::result::Result<T, MappingError>;
