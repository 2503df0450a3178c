use thiserror::Error;

use crate::infrastructure::auth::AuthError;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Credential(#[from] AuthError),
    #[error("Faltan campos requeridos")]
    MissingRequiredField,
    #[error("storage write failure: {0}")]
    StorageWriteFailure(String),
}
