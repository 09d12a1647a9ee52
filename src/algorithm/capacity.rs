use crate::models::{RequiredPercentage, SubjectRecord};

/// Sumas globales de clases asistidas y dictadas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Totals {
    pub attended: u64,
    pub conducted: u64,
}

pub fn totals(subjects: &[SubjectRecord]) -> Totals {
    subjects.iter().fold(Totals::default(), |acc, s| Totals {
        attended: acc.attended.saturating_add(s.attend),
        conducted: acc.conducted.saturating_add(s.total),
    })
}

/// Trunca hacia abajo y lleva a 0 los valores negativos o NaN.
/// Los infinitos positivos saturan en `u64::MAX`.
pub(crate) fn floor_count(x: f64) -> u64 {
    let f = x.floor();
    if f.is_nan() || f <= 0.0 { 0 } else { f as u64 }
}

/// Pool global de inasistencias: cuántas clases más puede perder el registro
/// combinado manteniendo la razón combinada sobre el porcentaje requerido.
///
/// Debe llamarse solo con `totals.conducted > 0`; el caso 0 lo corta antes
/// el orquestador.
pub fn total_bunks_available(totals: Totals, required: RequiredPercentage) -> u64 {
    let p = required.value();
    let max_bunks = (totals.attended as f64 - p * totals.conducted as f64) / p;
    floor_count(max_bunks)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_totals_suma() {
        let subjects = vec![SubjectRecord::new("A", 40, 50), SubjectRecord::new("B", 18, 20)];
        assert_eq!(totals(&subjects), Totals { attended: 58, conducted: 70 });
        assert_eq!(totals(&[]), Totals::default());
    }

    #[test]
    fn test_pool_global() {
        let t = Totals { attended: 58, conducted: 70 };
        // (58 - 52.5) / 0.75 = 7.33
        assert_eq!(total_bunks_available(t, RequiredPercentage::default()), 7);
    }

    #[test]
    fn test_pool_nunca_negativo() {
        let t = Totals { attended: 30, conducted: 50 };
        assert_eq!(total_bunks_available(t, RequiredPercentage::default()), 0);
    }

    #[test]
    fn test_floor_count_bordes() {
        assert_eq!(floor_count(6.99), 6);
        assert_eq!(floor_count(-0.5), 0);
        assert_eq!(floor_count(f64::NAN), 0);
        assert_eq!(floor_count(f64::INFINITY), u64::MAX);
    }
}
