use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

use super::tarefa_handlers;

/// The `/tarefa` sub-router. Static segments are registered alongside the
/// `/:id` capture; the router gives them priority.
pub fn tarefa_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(tarefa_handlers::criar))
        .route("/ObterTodos", get(tarefa_handlers::obter_todos))
        .route("/ObterPorTitulo", get(tarefa_handlers::obter_por_titulo))
        .route("/ObterPorData", get(tarefa_handlers::obter_por_data))
        .route("/ObterPorStatus", get(tarefa_handlers::obter_por_status))
        .route(
            "/:id",
            get(tarefa_handlers::obter_por_id)
                .put(tarefa_handlers::atualizar)
                .delete(tarefa_handlers::deletar),
        )
}
