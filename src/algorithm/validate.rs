use std::collections::HashSet;
use crate::error::AllocationError;
use crate::models::SubjectRecord;

/// Revisa que los registros sean coherentes antes de asignar:
/// etiquetas no vacías y únicas, y `attend <= total` (lo que también descarta
/// asistencias en asignaturas sin clases dictadas).
pub fn validate_records(subjects: &[SubjectRecord]) -> Result<(), AllocationError> {
    let mut seen: HashSet<&str> = HashSet::new();
    for (i, s) in subjects.iter().enumerate() {
        if s.subject.trim().is_empty() {
            return Err(AllocationError::EmptySubject(i));
        }
        if !seen.insert(s.subject.as_str()) {
            return Err(AllocationError::DuplicateSubject(s.subject.clone()));
        }
        if s.attend > s.total {
            return Err(AllocationError::AttendExceedsTotal {
                subject: s.subject.clone(),
                attend: s.attend,
                total: s.total,
            });
        }
    }
    Ok(())
}
