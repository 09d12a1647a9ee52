use crate::algorithm::capacity::floor_count;
use crate::models::{RequiredPercentage, SubjectAnalysis, SubjectRecord};

/// Mayor `x` tal que `attend / (total + x) >= required`, truncado y nunca negativo.
pub fn max_safe_bunks(attend: u64, total: u64, required: RequiredPercentage) -> u64 {
    floor_count(attend as f64 / required.value() - total as f64)
}

/// Analiza una asignatura. Las asignaturas sin clases dictadas no tienen
/// porcentaje actual y quedan fuera del reparto (`None`).
pub fn analyze_subject(record: &SubjectRecord, required: RequiredPercentage) -> Option<SubjectAnalysis> {
    if record.total == 0 {
        return None;
    }

    let current_percent = record.attend as f64 / record.total as f64;
    Some(SubjectAnalysis {
        subject: record.subject.clone(),
        attend: record.attend,
        total: record.total,
        buffer: current_percent - required.value(),
        max_safe_bunks: max_safe_bunks(record.attend, record.total, required),
    })
}
