use std::sync::Arc;

use axum::http::HeaderMap;

use crate::{
    domain::models::{FollowLink, FollowRequest},
    infrastructure::{
        auth::{self, JwtKeys},
        state::AppState,
        store::FollowStore,
    },
};

use super::errors::ServiceError;

#[derive(Clone)]
pub struct FollowService {
    store: Arc<dyn FollowStore>,
    keys: JwtKeys,
}

impl FollowService {
    pub fn new(store: Arc<dyn FollowStore>, keys: JwtKeys) -> Self {
        Self { store, keys }
    }

    pub fn from_state(state: &AppState) -> Self {
        Self::new(Arc::clone(&state.follows), state.jwt_keys.clone())
    }

    /// Links a user to a creator. The decoded caller id is not cross-checked
    /// against the requested `usuarios_idusuario`.
    pub async fn seguir_creador(
        &self,
        headers: &HeaderMap,
        request: FollowRequest,
    ) -> Result<FollowLink, ServiceError> {
        let _caller = auth::authenticate_bearer(headers, &self.keys)?;

        if !request.has_required_fields() {
            return Err(ServiceError::MissingRequiredField);
        }

        self.store
            .insert_follow(request.usuarios_idusuario, request.creadores_idcreador)
            .await
            .map_err(|err| ServiceError::StorageWriteFailure(err.to_string()))?;

        Ok(FollowLink {
            usuarios_idusuario: request.usuarios_idusuario,
            creadores_idcreador: request.creadores_idcreador,
        })
    }
}
