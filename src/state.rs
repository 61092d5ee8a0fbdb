use crate::tarefa::TarefaService;

#[derive(Clone)]
pub struct AppState {
    pub tarefa_service: TarefaService,
}
