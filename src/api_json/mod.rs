use serde::{Deserialize, Serialize};
use crate::algorithm::{allocate, allocate_checked, allocate_report};
use crate::config::Config;
use crate::error::AllocationError;
use crate::models::{AllocationReport, AllocationResult, RequiredPercentage, SubjectRecord};

/// Parámetros de entrada del asignador
///
/// # Estructura del JSON esperado:
/// ```json
/// {
///   "subjects": [
///     { "subject": "Calculo 1", "attend": 40, "total": 50 },
///     { "subject": "Fisica", "attend": 18, "total": 20 }
///   ],
///   "required_percentage": 0.75
/// }
/// ```
///
/// # Campos:
/// - `subjects`: registros de asistencia; las etiquetas deben ser únicas
/// - `required_percentage`: fracción mínima (opcional; si falta se usa la del servidor)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocateRequest {
    #[serde(default)]
    pub subjects: Vec<SubjectRecord>,
    #[serde(default, alias = "requiredPercentage")]
    pub required_percentage: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocateResponse {
    pub status: String,
    pub results: Vec<AllocationResult>,
}

pub fn parse_json_input(json_str: &str) -> Result<AllocateRequest, serde_json::Error> {
    serde_json::from_str::<AllocateRequest>(json_str)
}

/// Parsea la lista liviana del GET: `"Calculo 1:40:50,Fisica:18:20"`.
/// La etiqueta puede contener `:`; se separan los dos últimos campos.
pub fn parse_subject_list(s: &str) -> Result<Vec<SubjectRecord>, Box<dyn std::error::Error>> {
    let mut out = Vec::new();
    for item in s.split(',').map(|p| p.trim()).filter(|p| !p.is_empty()) {
        let mut parts = item.rsplitn(3, ':');
        let (total, attend, subject) = match (parts.next(), parts.next(), parts.next()) {
            (Some(t), Some(a), Some(name)) => (t, a, name),
            _ => return Err(format!("expected 'subject:attend:total', got '{}'", item).into()),
        };
        let attend: u64 = attend.trim().parse().map_err(|e| format!("invalid attend in '{}': {}", item, e))?;
        let total: u64 = total.trim().parse().map_err(|e| format!("invalid total in '{}': {}", item, e))?;
        out.push(SubjectRecord::new(subject.trim(), attend, total));
    }
    Ok(out)
}

fn required_for(request: &AllocateRequest, cfg: &Config) -> f64 {
    request.required_percentage.unwrap_or(cfg.required_percentage.value())
}

/// Ejecuta la asignación según la configuración: en modo estricto valida la
/// entrada, si no calcula sobre lo que venga.
pub fn run_request(request: &AllocateRequest, cfg: &Config) -> Result<Vec<AllocationResult>, AllocationError> {
    let required = required_for(request, cfg);
    if cfg.strict {
        allocate_checked(&request.subjects, required)
    } else {
        Ok(allocate(&request.subjects, RequiredPercentage::unchecked(required)))
    }
}

/// Igual que `run_request` pero devuelve el reporte completo.
pub fn run_report(request: &AllocateRequest, cfg: &Config) -> Result<AllocationReport, AllocationError> {
    let required = required_for(request, cfg);
    let required = if cfg.strict {
        let p = RequiredPercentage::new(required)?;
        crate::algorithm::validate_records(&request.subjects)?;
        p
    } else {
        RequiredPercentage::unchecked(required)
    };
    Ok(allocate_report(&request.subjects, required))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_json_completo() {
        let json_data = r#"
        {
            "subjects": [
                { "subject": "Calculo 1", "attend": 40, "total": 50 },
                { "subject": "Fisica", "attend": 18, "total": 20 }
            ],
            "required_percentage": 0.8
        }
        "#;

        let req = parse_json_input(json_data).expect("Debe parsear JSON");
        assert_eq!(req.subjects.len(), 2);
        assert_eq!(req.subjects[0], SubjectRecord::new("Calculo 1", 40, 50));
        assert_eq!(req.required_percentage, Some(0.8));
    }

    #[test]
    fn test_parse_json_sin_porcentaje() {
        let req = parse_json_input(r#"{"subjects": []}"#).expect("Debe parsear JSON");
        assert!(req.subjects.is_empty());
        assert!(req.required_percentage.is_none());

        let req = parse_json_input(r#"{"subjects": [], "requiredPercentage": 0.6}"#).unwrap();
        assert_eq!(req.required_percentage, Some(0.6));
    }

    #[test]
    fn test_parse_json_rechaza_negativos() {
        assert!(parse_json_input(r#"{"subjects": [{"subject": "A", "attend": -1, "total": 5}]}"#).is_err());
    }

    #[test]
    fn test_parse_subject_list() {
        let v = parse_subject_list("Calculo 1:40:50, Fisica:18:20,").unwrap();
        assert_eq!(v, vec![SubjectRecord::new("Calculo 1", 40, 50), SubjectRecord::new("Fisica", 18, 20)]);

        let v = parse_subject_list("Lab: Redes:3:4").unwrap();
        assert_eq!(v[0].subject, "Lab: Redes");

        assert!(parse_subject_list("Fisica:18").is_err());
        assert!(parse_subject_list("Fisica:x:20").is_err());
        assert!(parse_subject_list("").unwrap().is_empty());
    }

    #[test]
    fn test_run_request_estricto_y_permisivo() {
        let req = AllocateRequest {
            subjects: vec![SubjectRecord::new("A", 40, 50), SubjectRecord::new("A", 18, 20)],
            required_percentage: None,
        };
        let strict = Config::default();
        assert_eq!(run_request(&req, &strict), Err(AllocationError::DuplicateSubject("A".to_string())));

        let lax = Config { strict: false, ..Config::default() };
        assert_eq!(run_request(&req, &lax).unwrap().len(), 2);
    }
}
