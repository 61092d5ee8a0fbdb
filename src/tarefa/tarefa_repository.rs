use crate::{db::DbPool, error::Result};
use chrono::{DateTime, Utc};

use super::tarefa_models::{EnumStatusTarefa, Tarefa};

#[derive(Clone)]
pub struct TarefaRepository {
    pool: DbPool,
}

impl TarefaRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Tarefa>> {
        let tarefa = sqlx::query_as::<_, Tarefa>("SELECT * FROM tarefas WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(tarefa)
    }

    pub async fn find_all(&self) -> Result<Vec<Tarefa>> {
        let tarefas = sqlx::query_as::<_, Tarefa>("SELECT * FROM tarefas ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(tarefas)
    }

    // The by-titulo/data/status lookups return the first match only,
    // mirroring the original single-record contract. Titulo is not unique.
    pub async fn find_first_by_titulo(&self, titulo: &str) -> Result<Option<Tarefa>> {
        let tarefa = sqlx::query_as::<_, Tarefa>(
            "SELECT * FROM tarefas WHERE titulo = $1 ORDER BY id LIMIT 1",
        )
        .bind(titulo)
        .fetch_optional(&self.pool)
        .await?;
        Ok(tarefa)
    }

    pub async fn find_first_by_data(&self, data: DateTime<Utc>) -> Result<Option<Tarefa>> {
        let tarefa =
            sqlx::query_as::<_, Tarefa>("SELECT * FROM tarefas WHERE data = $1 ORDER BY id LIMIT 1")
                .bind(data)
                .fetch_optional(&self.pool)
                .await?;
        Ok(tarefa)
    }

    pub async fn find_first_by_status(&self, status: EnumStatusTarefa) -> Result<Option<Tarefa>> {
        let tarefa = sqlx::query_as::<_, Tarefa>(
            "SELECT * FROM tarefas WHERE status = $1 ORDER BY id LIMIT 1",
        )
        .bind(status)
        .fetch_optional(&self.pool)
        .await?;
        Ok(tarefa)
    }

    pub async fn create(
        &self,
        titulo: Option<&str>,
        descricao: Option<&str>,
        data: DateTime<Utc>,
        status: EnumStatusTarefa,
    ) -> Result<Tarefa> {
        let tarefa = sqlx::query_as::<_, Tarefa>(
            "INSERT INTO tarefas (titulo, descricao, data, status)
             VALUES ($1, $2, $3, $4)
             RETURNING *",
        )
        .bind(titulo)
        .bind(descricao)
        .bind(data)
        .bind(status)
        .fetch_one(&self.pool)
        .await?;

        Ok(tarefa)
    }

    /// Full replace of every column except id.
    pub async fn update(
        &self,
        id: i64,
        titulo: Option<&str>,
        descricao: Option<&str>,
        data: DateTime<Utc>,
        status: EnumStatusTarefa,
    ) -> Result<u64> {
        let result = sqlx::query(
            "UPDATE tarefas SET titulo = $1, descricao = $2, data = $3, status = $4
             WHERE id = $5",
        )
        .bind(titulo)
        .bind(descricao)
        .bind(data)
        .bind(status)
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    pub async fn delete(&self, id: i64) -> Result<u64> {
        let result = sqlx::query("DELETE FROM tarefas WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
