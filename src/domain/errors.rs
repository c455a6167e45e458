use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Entity not found")]
    NotFound,
    #[error("Path id {path} does not match body id {body:?}")]
    IdMismatch { path: i32, body: Option<i32> },
    #[error("Internal error: {0}")]
    Internal(String),
}
