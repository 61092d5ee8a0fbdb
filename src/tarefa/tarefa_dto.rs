use chrono::{DateTime, Utc};
use serde::Deserialize;
use utoipa::ToSchema;

use super::tarefa_models::EnumStatusTarefa;

/// Payload accepted by POST /tarefa and PUT /tarefa/{id}. Any caller-supplied
/// id is ignored; the store assigns ids.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct TarefaRequest {
    pub titulo: Option<String>,
    pub descricao: Option<String>,
    pub data: Option<DateTime<Utc>>,
    #[serde(default)]
    pub status: EnumStatusTarefa,
}

impl TarefaRequest {
    /// The one validated invariant: `data` must be present and must not be
    /// the minimum sentinel. Returns the usable value, or `None` when empty.
    pub fn data_valida(&self) -> Option<DateTime<Utc>> {
        self.data.filter(|d| *d != DateTime::<Utc>::MIN_UTC)
    }
}
