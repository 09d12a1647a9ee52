// Estructuras de datos principales

use serde::{Deserialize, Serialize};
use crate::error::AllocationError;

/// Porcentaje de asistencia usado cuando el llamador no entrega uno.
pub const DEFAULT_REQUIRED_PERCENTAGE: f64 = 0.75;

/// Registro de asistencia de una asignatura tal como lo entrega el host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectRecord {
    pub subject: String,
    pub attend: u64,
    pub total: u64,
}

impl SubjectRecord {
    pub fn new(subject: impl Into<String>, attend: u64, total: u64) -> Self {
        SubjectRecord { subject: subject.into(), attend, total }
    }
}

/// Fracción mínima de asistencia (0.0 - 1.0).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequiredPercentage(f64);

impl RequiredPercentage {
    /// Valida que el valor sea finito y esté en (0, 1].
    pub fn new(value: f64) -> Result<Self, AllocationError> {
        if value.is_finite() && value > 0.0 && value <= 1.0 {
            Ok(RequiredPercentage(value))
        } else {
            Err(AllocationError::InvalidPercentage(value))
        }
    }

    /// Envuelve cualquier valor sin validarlo. Fuera de (0, 1] los resultados
    /// son degenerados pero el cálculo no entra en pánico.
    pub fn unchecked(value: f64) -> Self {
        RequiredPercentage(value)
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl Default for RequiredPercentage {
    fn default() -> Self {
        RequiredPercentage(DEFAULT_REQUIRED_PERCENTAGE)
    }
}

/// Análisis transitorio de una asignatura con clases dictadas (`total > 0`).
#[derive(Debug, Clone, PartialEq)]
pub struct SubjectAnalysis {
    pub subject: String,
    pub attend: u64,
    pub total: u64,
    /// Asistencia actual menos el porcentaje requerido; negativo si ya está bajo.
    pub buffer: f64,
    pub max_safe_bunks: u64,
}

/// Resultado por asignatura, en el mismo orden de la entrada.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocationResult {
    pub subject: String,
    #[serde(rename = "allocatedBunks")]
    pub allocated_bunks: u64,
}

/// Estado proyectado de una asignatura tras tomar las inasistencias asignadas.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubjectStatus {
    pub subject: String,
    pub attend: u64,
    pub total: u64,
    pub current_percent: Option<f64>,
    pub max_safe_bunks: u64,
    pub allocated_bunks: u64,
    pub projected_percent: Option<f64>,
}

/// Resumen completo de una ejecución del asignador.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AllocationReport {
    pub required_percentage: f64,
    pub total_attended: u64,
    pub total_conducted: u64,
    pub total_bunks_available: u64,
    /// Suma de `allocated_bunks` sobre `subjects` (una vez por fila).
    pub allocated_total: u64,
    /// Unidades del pool global que ninguna asignatura podía absorber.
    pub unallocated: u64,
    pub subjects: Vec<SubjectStatus>,
}
