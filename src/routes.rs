use axum::Router;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    state::AppState,
    tarefa::{self, EnumStatusTarefa, Tarefa, TarefaRequest},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        tarefa::tarefa_handlers::obter_por_id,
        tarefa::tarefa_handlers::obter_todos,
        tarefa::tarefa_handlers::obter_por_titulo,
        tarefa::tarefa_handlers::obter_por_data,
        tarefa::tarefa_handlers::obter_por_status,
        tarefa::tarefa_handlers::criar,
        tarefa::tarefa_handlers::atualizar,
        tarefa::tarefa_handlers::deletar,
    ),
    components(schemas(Tarefa, TarefaRequest, EnumStatusTarefa)),
    tags((name = "tarefa", description = "Tarefa CRUD endpoints"))
)]
struct ApiDoc;

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .nest("/tarefa", tarefa::routes::tarefa_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
