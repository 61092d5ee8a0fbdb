use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::{error::Result, state::AppState};

use super::{
    tarefa_dto::TarefaRequest,
    tarefa_models::{EnumStatusTarefa, Tarefa},
};

#[derive(Deserialize)]
pub struct TituloParams {
    titulo: String,
}

#[derive(Deserialize)]
pub struct DataParams {
    data: DateTime<Utc>,
}

#[derive(Deserialize)]
pub struct StatusParams {
    status: EnumStatusTarefa,
}

/// Get a single tarefa by id
#[utoipa::path(
    get,
    path = "/tarefa/{id}",
    params(("id" = i64, Path, description = "Tarefa id")),
    responses(
        (status = 200, description = "Tarefa found", body = Tarefa),
        (status = 404, description = "Tarefa not found")
    ),
    tag = "tarefa"
)]
pub async fn obter_por_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Tarefa>> {
    let tarefa = state.tarefa_service.obter_por_id(id).await?;
    Ok(Json(tarefa))
}

/// List every tarefa
#[utoipa::path(
    get,
    path = "/tarefa/ObterTodos",
    responses(
        (status = 200, description = "All tarefas, possibly empty", body = [Tarefa])
    ),
    tag = "tarefa"
)]
pub async fn obter_todos(State(state): State<AppState>) -> Result<Json<Vec<Tarefa>>> {
    let tarefas = state.tarefa_service.obter_todos().await?;
    Ok(Json(tarefas))
}

/// First tarefa with an exactly matching titulo
#[utoipa::path(
    get,
    path = "/tarefa/ObterPorTitulo",
    params(("titulo" = String, Query, description = "Exact titulo to match")),
    responses(
        (status = 200, description = "First matching tarefa", body = Tarefa),
        (status = 404, description = "No tarefa with that titulo")
    ),
    tag = "tarefa"
)]
pub async fn obter_por_titulo(
    State(state): State<AppState>,
    Query(params): Query<TituloParams>,
) -> Result<Json<Tarefa>> {
    let tarefa = state.tarefa_service.obter_por_titulo(&params.titulo).await?;
    Ok(Json(tarefa))
}

/// First tarefa with an exactly matching data
#[utoipa::path(
    get,
    path = "/tarefa/ObterPorData",
    params(("data" = String, Query, description = "Exact data to match (RFC 3339)")),
    responses(
        (status = 200, description = "First matching tarefa", body = Tarefa),
        (status = 404, description = "No tarefa with that data")
    ),
    tag = "tarefa"
)]
pub async fn obter_por_data(
    State(state): State<AppState>,
    Query(params): Query<DataParams>,
) -> Result<Json<Tarefa>> {
    let tarefa = state.tarefa_service.obter_por_data(params.data).await?;
    Ok(Json(tarefa))
}

/// First tarefa with an exactly matching status
#[utoipa::path(
    get,
    path = "/tarefa/ObterPorStatus",
    params(("status" = EnumStatusTarefa, Query, description = "Status to match")),
    responses(
        (status = 200, description = "First matching tarefa", body = Tarefa),
        (status = 404, description = "No tarefa with that status")
    ),
    tag = "tarefa"
)]
pub async fn obter_por_status(
    State(state): State<AppState>,
    Query(params): Query<StatusParams>,
) -> Result<Json<Tarefa>> {
    let tarefa = state.tarefa_service.obter_por_status(params.status).await?;
    Ok(Json(tarefa))
}

/// Create a tarefa; the store assigns the id
#[utoipa::path(
    post,
    path = "/tarefa",
    request_body = TarefaRequest,
    responses(
        (status = 201, description = "Tarefa created, Location points at it", body = Tarefa),
        (status = 400, description = "Empty data")
    ),
    tag = "tarefa"
)]
pub async fn criar(
    State(state): State<AppState>,
    Json(payload): Json<TarefaRequest>,
) -> Result<impl IntoResponse> {
    let tarefa = state.tarefa_service.criar(payload).await?;
    let location = format!("/tarefa/{}", tarefa.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(tarefa),
    ))
}

/// Replace every field of an existing tarefa except its id
#[utoipa::path(
    put,
    path = "/tarefa/{id}",
    params(("id" = i64, Path, description = "Tarefa id")),
    request_body = TarefaRequest,
    responses(
        (status = 200, description = "Tarefa replaced"),
        (status = 400, description = "Empty data"),
        (status = 404, description = "Tarefa not found")
    ),
    tag = "tarefa"
)]
pub async fn atualizar(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<TarefaRequest>,
) -> Result<StatusCode> {
    state.tarefa_service.atualizar(id, payload).await?;
    Ok(StatusCode::OK)
}

/// Delete a tarefa permanently
#[utoipa::path(
    delete,
    path = "/tarefa/{id}",
    params(("id" = i64, Path, description = "Tarefa id")),
    responses(
        (status = 204, description = "Tarefa deleted"),
        (status = 404, description = "Tarefa not found")
    ),
    tag = "tarefa"
)]
pub async fn deletar(State(state): State<AppState>, Path(id): Path<i64>) -> Result<StatusCode> {
    state.tarefa_service.deletar(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
