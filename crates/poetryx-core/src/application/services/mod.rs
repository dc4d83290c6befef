//! Application services.

pub mod poetry_service;
pub mod project_service;

pub use poetry_service::PoetryService;
pub use project_service::ProjectService;
