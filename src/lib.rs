// Biblioteca raíz del crate `smartbunk`.
// Reexporta el asignador de inasistencias, los modelos y el servidor HTTP.
pub mod algorithm;
pub mod api_json;
pub mod config;
pub mod error;
pub mod excel;
pub mod models;
pub mod server;
mod server_handlers;

pub use algorithm::{allocate, allocate_checked, allocate_report, allocate_with_default};
pub use error::AllocationError;
pub use models::{AllocationReport, AllocationResult, RequiredPercentage, SubjectRecord, SubjectStatus};

/// Ejecuta el servidor HTTP (reexport para facilitar uso desde `main`)
pub use server::run_server;
