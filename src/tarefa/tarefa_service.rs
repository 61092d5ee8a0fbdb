use chrono::{DateTime, Utc};

use crate::error::{AppError, Result};

use super::{
    tarefa_dto::TarefaRequest,
    tarefa_models::{EnumStatusTarefa, Tarefa},
    tarefa_repository::TarefaRepository,
};

/// Service layer for tarefa business logic: validates the single date
/// invariant and maps missing rows to `NotFound`.
#[derive(Clone)]
pub struct TarefaService {
    repo: TarefaRepository,
}

impl TarefaService {
    pub fn new(repo: TarefaRepository) -> Self {
        Self { repo }
    }

    pub async fn obter_por_id(&self, id: i64) -> Result<Tarefa> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Tarefa de Id: {id} não encontrada.")))
    }

    pub async fn obter_todos(&self) -> Result<Vec<Tarefa>> {
        self.repo.find_all().await
    }

    pub async fn obter_por_titulo(&self, titulo: &str) -> Result<Tarefa> {
        self.repo.find_first_by_titulo(titulo).await?.ok_or_else(|| {
            AppError::NotFound(format!("Tarefa com o titulo: {titulo} não encontrada."))
        })
    }

    pub async fn obter_por_data(&self, data: DateTime<Utc>) -> Result<Tarefa> {
        self.repo.find_first_by_data(data).await?.ok_or_else(|| {
            AppError::NotFound(format!("Tarefa com a data: {data} não encontrada."))
        })
    }

    pub async fn obter_por_status(&self, status: EnumStatusTarefa) -> Result<Tarefa> {
        self.repo.find_first_by_status(status).await?.ok_or_else(|| {
            AppError::NotFound(format!("Tarefa com o status: {status} não encontrada."))
        })
    }

    pub async fn criar(&self, payload: TarefaRequest) -> Result<Tarefa> {
        let data = payload.data_valida().ok_or_else(data_vazia)?;
        self.repo
            .create(
                payload.titulo.as_deref(),
                payload.descricao.as_deref(),
                data,
                payload.status,
            )
            .await
    }

    /// Full-record replace; the id never changes. Existence is checked
    /// before the date invariant, so a missing id answers 404 even when the
    /// payload date is also empty.
    pub async fn atualizar(&self, id: i64, payload: TarefaRequest) -> Result<()> {
        self.obter_por_id(id).await?;
        let data = payload.data_valida().ok_or_else(data_vazia)?;
        self.repo
            .update(
                id,
                payload.titulo.as_deref(),
                payload.descricao.as_deref(),
                data,
                payload.status,
            )
            .await?;
        Ok(())
    }

    pub async fn deletar(&self, id: i64) -> Result<()> {
        let rows_affected = self.repo.delete(id).await?;
        if rows_affected == 0 {
            return Err(AppError::NotFound(format!(
                "Tarefa de Id: {id} não encontrada."
            )));
        }
        Ok(())
    }
}

fn data_vazia() -> AppError {
    AppError::BadRequest("A data da tarefa não pode ser vazia".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;

    fn data(s: &str) -> Option<DateTime<Utc>> {
        Some(s.parse().unwrap())
    }

    fn payload(titulo: &str, data: Option<DateTime<Utc>>) -> TarefaRequest {
        TarefaRequest {
            titulo: Some(titulo.to_string()),
            descricao: None,
            data,
            status: EnumStatusTarefa::Pendente,
        }
    }

    async fn service() -> TarefaService {
        TarefaService::new(TarefaRepository::new(db::test_pool().await))
    }

    #[tokio::test]
    async fn test_criar_rejects_empty_data_and_persists_nothing() {
        let service = service().await;

        let err = service.criar(payload("Comprar leite", None)).await;
        assert!(matches!(err, Err(AppError::BadRequest(_))));

        let err = service
            .criar(payload("Comprar leite", Some(DateTime::<Utc>::MIN_UTC)))
            .await;
        assert!(matches!(err, Err(AppError::BadRequest(_))));

        assert!(service.obter_todos().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_obter_por_id_maps_missing_row_to_not_found() {
        let service = service().await;
        match service.obter_por_id(42).await {
            Err(AppError::NotFound(msg)) => {
                assert_eq!(msg, "Tarefa de Id: 42 não encontrada.");
            }
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_atualizar_checks_existence_before_data() {
        let service = service().await;

        // Missing id answers 404 even though the payload date is empty too.
        let err = service.atualizar(1, payload("Estudar", None)).await;
        assert!(matches!(err, Err(AppError::NotFound(_))));

        let created = service
            .criar(payload("Estudar", data("2024-01-01T00:00:00Z")))
            .await
            .unwrap();

        let err = service.atualizar(created.id, payload("Estudar", None)).await;
        assert!(matches!(err, Err(AppError::BadRequest(_))));

        // The failed update must not have touched the row.
        let stored = service.obter_por_id(created.id).await.unwrap();
        assert_eq!(stored.data, data("2024-01-01T00:00:00Z").unwrap());
    }

    #[tokio::test]
    async fn test_deletar_is_permanent() {
        let service = service().await;
        let created = service
            .criar(payload("Apagar", data("2024-01-01T00:00:00Z")))
            .await
            .unwrap();

        service.deletar(created.id).await.unwrap();
        assert!(matches!(
            service.deletar(created.id).await,
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            service.obter_por_id(created.id).await,
            Err(AppError::NotFound(_))
        ));
    }
}
