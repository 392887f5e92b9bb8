//! Errors raised by catalog derivations.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("no catalog service is registered under id {0:?}")]
    UnknownService(String),
    #[error("required field {0:?} is empty")]
    MissingField(&'static str),
    #[error("a catalog service with id {0:?} already exists")]
    DuplicateService(String),
    #[error("invalid catalog configuration: {0}")]
    InvalidConfig(String),
}
