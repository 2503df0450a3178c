use async_graphql::Object;
use chrono::Local;

use super::models::HealthCheck;

#[derive(Default)]
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Verifica estado del servicio.
    async fn health(&self) -> HealthCheck {
        HealthCheck {
            status: "OPERATIONAL".to_string(),
            server_time: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        }
    }

    /// Endpoint de prueba.
    async fn hola(&self) -> String {
        "Mundo".to_string()
    }
}
