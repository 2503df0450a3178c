use async_trait::async_trait;
use parking_lot::RwLock;

use super::db::PgPool;

/// Persistence seam for follow relationships. The insert returns the stored
/// creator id, which the caller reads back and discards.
#[async_trait]
pub trait FollowStore: Send + Sync {
    async fn insert_follow(&self, usuario_id: i32, creador_id: i32) -> anyhow::Result<i32>;
}

pub struct PgFollowStore {
    pool: PgPool,
}

impl PgFollowStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FollowStore for PgFollowStore {
    async fn insert_follow(&self, usuario_id: i32, creador_id: i32) -> anyhow::Result<i32> {
        let creador = sqlx::query_scalar::<_, i32>(
            "INSERT INTO lista_seguidos (usuarios_idusuario, creadores_idcreador)
             VALUES ($1, $2)
             RETURNING creadores_idcreador",
        )
        .bind(usuario_id)
        .bind(creador_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(creador)
    }
}

/// Recording store for tests; keeps inserted pairs in insertion order.
#[derive(Default)]
pub struct MemoryFollowStore {
    rows: RwLock<Vec<(i32, i32)>>,
}

impl MemoryFollowStore {
    pub fn rows(&self) -> Vec<(i32, i32)> {
        self.rows.read().clone()
    }
}

#[async_trait]
impl FollowStore for MemoryFollowStore {
    async fn insert_follow(&self, usuario_id: i32, creador_id: i32) -> anyhow::Result<i32> {
        self.rows.write().push((usuario_id, creador_id));
        Ok(creador_id)
    }
}
