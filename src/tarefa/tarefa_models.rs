use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Closed status set for a tarefa. Stored as TEXT, variant name as-is.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema,
)]
pub enum EnumStatusTarefa {
    #[default]
    Pendente,
    Finalizado,
}

impl std::fmt::Display for EnumStatusTarefa {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EnumStatusTarefa::Pendente => write!(f, "Pendente"),
            EnumStatusTarefa::Finalizado => write!(f, "Finalizado"),
        }
    }
}

/// A tarefa row. `titulo` is deliberately nullable: the store does not
/// enforce it, and multiple rows may share the same titulo.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Tarefa {
    pub id: i64,
    pub titulo: Option<String>,
    pub descricao: Option<String>,
    pub data: DateTime<Utc>,
    pub status: EnumStatusTarefa,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_display() {
        assert_eq!(EnumStatusTarefa::Pendente.to_string(), "Pendente");
        assert_eq!(EnumStatusTarefa::Finalizado.to_string(), "Finalizado");
    }

    #[test]
    fn test_status_default_is_pendente() {
        assert_eq!(EnumStatusTarefa::default(), EnumStatusTarefa::Pendente);
    }

    #[test]
    fn test_status_serde() {
        assert_eq!(
            serde_json::to_string(&EnumStatusTarefa::Finalizado).unwrap(),
            "\"Finalizado\""
        );
        let status: EnumStatusTarefa = serde_json::from_str("\"Pendente\"").unwrap();
        assert_eq!(status, EnumStatusTarefa::Pendente);
    }
}
