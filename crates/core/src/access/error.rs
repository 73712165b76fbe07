use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AccessError {
    #[error("invalid access link: {0}")]
    InvalidLink(String),

    #[error("access link has no key parameter")]
    MissingKey,
}
