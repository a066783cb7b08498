use thiserror::Error;

#[derive(Error, Debug)]
pub enum CpviewError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("reading checkpoint metadata failed: {0}")]
    MetadataRead(String),

    #[error("parsing checkpoint metadata failed: {0}")]
    MetadataParse(String),

    #[error("unknown container manager found: {0}")]
    UnknownManager(String),

    #[error("calculating checkpoint size failed: {0}")]
    Traversal(String),

    #[error("unable to display checkpointing statistics: {0}")]
    Statistics(String),
}

pub type Result<T> = std::result::Result<T, CpviewError>;
