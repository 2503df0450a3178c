use async_graphql::{Context, Object};
use axum::http::HeaderMap;

use super::models::{SeguirCreadorInput, SeguirCreadorPayload};
use crate::services::follows::FollowService;

#[derive(Default)]
pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Registra que un usuario sigue a un creador.
    async fn seguir_creador(
        &self,
        ctx: &Context<'_>,
        input: SeguirCreadorInput,
    ) -> SeguirCreadorPayload {
        let service = ctx.data_unchecked::<FollowService>();
        let headers = ctx.data_opt::<HeaderMap>().cloned().unwrap_or_default();

        service.seguir_creador(&headers, input.into()).await.into()
    }
}
