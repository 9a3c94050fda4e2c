/// Use cases module containing application business logic orchestration
mod submit_dependencies;

pub use submit_dependencies::SubmitDependenciesUseCase;
