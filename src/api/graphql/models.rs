use async_graphql::{InputObject, SimpleObject};

use crate::{
    domain::models::{FollowLink, FollowRequest},
    services::errors::ServiceError,
};

#[derive(Debug, SimpleObject)]
pub struct HealthCheck {
    pub status: String,
    pub server_time: String,
}

#[derive(Debug, InputObject)]
pub struct SeguirCreadorInput {
    pub usuarios_idusuario: i32,
    pub creadores_idcreador: i32,
}

impl From<SeguirCreadorInput> for FollowRequest {
    fn from(input: SeguirCreadorInput) -> Self {
        Self {
            usuarios_idusuario: input.usuarios_idusuario,
            creadores_idcreador: input.creadores_idcreador,
        }
    }
}

#[derive(Debug, SimpleObject)]
pub struct SeguirCreadorPayload {
    pub success: bool,
    pub usuarios_idusuario: Option<i32>,
    pub creadores_idcreador: Option<i32>,
}

/// Collapses every failure kind into the uniform negative payload; the
/// caller cannot tell a bad token from a storage outage.
impl From<Result<FollowLink, ServiceError>> for SeguirCreadorPayload {
    fn from(result: Result<FollowLink, ServiceError>) -> Self {
        match result {
            Ok(link) => Self {
                success: true,
                usuarios_idusuario: Some(link.usuarios_idusuario),
                creadores_idcreador: Some(link.creadores_idcreador),
            },
            Err(_) => Self {
                success: false,
                usuarios_idusuario: None,
                creadores_idcreador: None,
            },
        }
    }
}
