use log::debug;
use crate::algorithm::capacity::floor_count;
use crate::models::SubjectAnalysis;

/// Asignatura que participa del reparto, con su asignación actual y su techo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate<'a> {
    pub subject: &'a str,
    pub allocated_bunks: u64,
    pub max_safe_bunks: u64,
}

impl Candidate<'_> {
    pub fn headroom(&self) -> u64 {
        self.max_safe_bunks.saturating_sub(self.allocated_bunks)
    }

    pub fn is_saturated(&self) -> bool {
        self.allocated_bunks >= self.max_safe_bunks
    }
}

/// Reparte `pool` entre las asignaturas con holgura positiva, proporcional a
/// su holgura y sin superar el techo de cada una. El orden de salida es el de
/// `analyses`.
pub fn distribute_proportionally<'a>(analyses: &[&'a SubjectAnalysis], pool: u64) -> Vec<Candidate<'a>> {
    let safe: Vec<&SubjectAnalysis> = analyses.iter().copied().filter(|a| a.buffer > 0.0).collect();
    let buffer_sum: f64 = safe.iter().map(|a| a.buffer).sum();
    debug!("proportional distribution: {} safe subjects, buffer sum {:.4}, pool {}", safe.len(), buffer_sum, pool);

    safe.into_iter()
        .map(|a| {
            let weight = a.buffer / buffer_sum;
            let tentative = floor_count(weight * pool as f64);
            Candidate {
                subject: a.subject.as_str(),
                allocated_bunks: tentative.min(a.max_safe_bunks),
                max_safe_bunks: a.max_safe_bunks,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analysis(subject: &str, buffer: f64, max_safe_bunks: u64) -> SubjectAnalysis {
        SubjectAnalysis { subject: subject.to_string(), attend: 0, total: 0, buffer, max_safe_bunks }
    }

    #[test]
    fn test_reparto_proporcional() {
        let a = analysis("A", 0.05, 3);
        let b = analysis("B", 0.15, 4);
        let out = distribute_proportionally(&[&a, &b], 7);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].subject, "A");
        assert_eq!(out[0].allocated_bunks, 1);
        assert_eq!(out[1].allocated_bunks, 4);
    }

    #[test]
    fn test_respeta_techo() {
        let a = analysis("A", 0.2, 1);
        let out = distribute_proportionally(&[&a], 10);
        assert_eq!(out[0].allocated_bunks, 1);
        assert!(out[0].is_saturated());
    }

    #[test]
    fn test_excluye_sin_holgura() {
        let a = analysis("A", -0.1, 0);
        let b = analysis("B", 0.0, 0);
        let c = analysis("C", 0.1, 5);
        let out = distribute_proportionally(&[&a, &b, &c], 2);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].subject, "C");
        assert_eq!(out[0].allocated_bunks, 2);
    }

    #[test]
    fn test_sin_asignaturas_seguras() {
        let a = analysis("A", -0.15, 0);
        assert!(distribute_proportionally(&[&a], 4).is_empty());
    }
}
