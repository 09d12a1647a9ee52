use actix_web::{HttpResponse, Responder};
use serde_json::json;
use crate::api_json::AllocateRequest;
use crate::models::SubjectRecord;

pub async fn help_handler() -> impl Responder {
    let example = AllocateRequest {
        subjects: vec![SubjectRecord::new("Calculo 1", 40, 50), SubjectRecord::new("Fisica", 18, 20)],
        required_percentage: Some(0.75),
    };

    let help = json!({
        "description": "API para calcular cuántas clases se pueden faltar por asignatura sin bajar del porcentaje de asistencia requerido. POST /allocate acepta un JSON (ver 'post_example'); GET /allocate acepta una lista liviana en query.",
        "post_example": example,
        "get_example_query": "/allocate?subjects=Calculo%201:40:50,Fisica:18:20&required=0.75",
        "report": "POST /allocate/report acepta el mismo JSON y devuelve el pool global, los techos por asignatura y el porcentaje proyectado.",
        "note": "required_percentage es opcional (0 < p <= 1); si falta se usa el valor configurado del servidor."
    });

    HttpResponse::Ok().json(help)
}
