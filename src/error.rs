use thiserror::Error;

/// Errores de validación del asignador de inasistencias.
///
/// Solo los produce la ruta validada (`allocate_checked`); `allocate` nunca
/// falla y resuelve los casos degenerados sin señalizarlos.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AllocationError {
    #[error("required percentage must be in (0, 1], got {0}")]
    InvalidPercentage(f64),
    #[error("subject at position {0} has an empty label")]
    EmptySubject(usize),
    #[error("subject '{0}' appears more than once")]
    DuplicateSubject(String),
    #[error("subject '{subject}' attended {attend} lectures out of {total}")]
    AttendExceedsTotal {
        subject: String,
        attend: u64,
        total: u64,
    },
}
