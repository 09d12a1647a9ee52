// Asignador de inasistencias ("bunks") por asignatura.
// Declarar submódulos (archivos en la carpeta `src/algorithm`), uno por etapa.
pub mod capacity;
pub mod analysis;
pub mod distribute;
pub mod redistribute;
pub mod validate;

use std::collections::HashMap;
use log::debug;
use crate::error::AllocationError;
use crate::models::{
    AllocationReport, AllocationResult, RequiredPercentage, SubjectAnalysis, SubjectRecord, SubjectStatus,
};

pub use analysis::{analyze_subject, max_safe_bunks};
pub use capacity::{total_bunks_available, totals, Totals};
pub use distribute::{distribute_proportionally, Candidate};
pub use redistribute::{fill_pass, redistribute_leftover};
pub use validate::validate_records;

/// Estado interno de una ejecución, compartido por `allocate` y `allocate_report`.
struct Outcome {
    totals: Totals,
    pool: u64,
    unallocated: u64,
    /// etiqueta -> inasistencias asignadas; con etiquetas repetidas gana la primera
    allocations: HashMap<String, u64>,
}

fn run(subjects: &[SubjectRecord], required: RequiredPercentage) -> Outcome {
    let totals = capacity::totals(subjects);
    if totals.conducted == 0 {
        debug!("no lectures conducted across {} subjects; nothing to allocate", subjects.len());
        return Outcome { totals, pool: 0, unallocated: 0, allocations: HashMap::new() };
    }

    let pool = capacity::total_bunks_available(totals, required);
    let analyses: Vec<SubjectAnalysis> = subjects.iter().filter_map(|s| analysis::analyze_subject(s, required)).collect();
    let refs: Vec<&SubjectAnalysis> = analyses.iter().collect();
    debug!(
        "attended {} of {} lectures at {:.2} required: pool of {} bunks, {} subjects analyzed",
        totals.attended, totals.conducted, required.value(), pool, analyses.len()
    );

    let distributed = distribute::distribute_proportionally(&refs, pool);
    let distributed_total = distributed.iter().fold(0u64, |acc, c| acc.saturating_add(c.allocated_bunks));
    let leftover = pool.saturating_sub(distributed_total);
    let (distributed, unallocated) = redistribute::redistribute_leftover(distributed, leftover);

    let mut allocations: HashMap<String, u64> = HashMap::with_capacity(distributed.len());
    for c in distributed.iter() {
        allocations.entry(c.subject.to_string()).or_insert(c.allocated_bunks);
    }

    Outcome { totals, pool, unallocated, allocations }
}

/// Calcula cuántas inasistencias puede tomar el estudiante en cada asignatura
/// sin bajar del porcentaje requerido.
///
/// Devuelve un resultado por asignatura de entrada, en el mismo orden,
/// incluyendo las que reciben 0. No valida la entrada: asignaturas con
/// `total == 0` reciben 0 y un porcentaje fuera de (0, 1] produce resultados
/// degenerados sin entrar en pánico. Las etiquetas deberían ser únicas; si se
/// repiten, todas reciben la asignación de la primera.
pub fn allocate(subjects: &[SubjectRecord], required: RequiredPercentage) -> Vec<AllocationResult> {
    let outcome = run(subjects, required);
    subjects
        .iter()
        .map(|s| AllocationResult {
            subject: s.subject.clone(),
            allocated_bunks: outcome.allocations.get(&s.subject).copied().unwrap_or(0),
        })
        .collect()
}

/// `allocate` con el porcentaje por defecto (75%).
pub fn allocate_with_default(subjects: &[SubjectRecord]) -> Vec<AllocationResult> {
    allocate(subjects, RequiredPercentage::default())
}

/// Versión validada: rechaza porcentajes fuera de (0, 1], etiquetas vacías o
/// repetidas y registros con más asistencias que clases dictadas.
pub fn allocate_checked(subjects: &[SubjectRecord], required: f64) -> Result<Vec<AllocationResult>, AllocationError> {
    let required = RequiredPercentage::new(required)?;
    validate::validate_records(subjects)?;
    Ok(allocate(subjects, required))
}

/// Igual que `allocate` pero devuelve el detalle de cada etapa y el
/// porcentaje proyectado por asignatura.
pub fn allocate_report(subjects: &[SubjectRecord], required: RequiredPercentage) -> AllocationReport {
    let outcome = run(subjects, required);

    let statuses: Vec<SubjectStatus> = subjects
        .iter()
        .map(|s| {
            let allocated_bunks = outcome.allocations.get(&s.subject).copied().unwrap_or(0);
            let ratio = |den: u64| if den == 0 { None } else { Some(s.attend as f64 / den as f64) };
            SubjectStatus {
                subject: s.subject.clone(),
                attend: s.attend,
                total: s.total,
                current_percent: ratio(s.total),
                max_safe_bunks: if s.total == 0 { 0 } else { analysis::max_safe_bunks(s.attend, s.total, required) },
                allocated_bunks,
                projected_percent: ratio(s.total.saturating_add(allocated_bunks)),
            }
        })
        .collect();

    // suma por fila: con etiquetas repetidas cada fila cuenta su asignación
    let allocated_total = statuses.iter().fold(0u64, |acc, s| acc.saturating_add(s.allocated_bunks));

    AllocationReport {
        required_percentage: required.value(),
        total_attended: outcome.totals.attended,
        total_conducted: outcome.totals.conducted,
        total_bunks_available: outcome.pool,
        allocated_total,
        unallocated: outcome.unallocated,
        subjects: statuses,
    }
}
