pub mod routes;
pub mod tarefa_dto;
pub mod tarefa_handlers;
pub mod tarefa_models;
pub mod tarefa_repository;
pub mod tarefa_service;

pub use tarefa_dto::TarefaRequest;
pub use tarefa_models::{EnumStatusTarefa, Tarefa};
pub use tarefa_repository::TarefaRepository;
pub use tarefa_service::TarefaService;
