use std::collections::HashMap;
use actix_web::{web, HttpResponse, Responder};
use log::{info, warn};
use serde_json::json;
use crate::api_json::{parse_json_input, parse_subject_list, run_report, run_request, AllocateRequest, AllocateResponse};
use crate::config::Config;

fn parse_body(body: web::Json<serde_json::Value>) -> Result<AllocateRequest, HttpResponse> {
    let body_value = body.into_inner();
    let json_str = match serde_json::to_string(&body_value) {
        Ok(s) => s,
        Err(e) => return Err(HttpResponse::BadRequest().json(json!({"error": format!("invalid JSON body: {}", e)}))),
    };

    parse_json_input(&json_str).map_err(|e| {
        warn!("rejected allocation request: {}", e);
        HttpResponse::BadRequest().json(json!({"error": format!("failed to parse input: {}", e)}))
    })
}

fn respond(request: &AllocateRequest, cfg: &Config) -> HttpResponse {
    match run_request(request, cfg) {
        Ok(results) => {
            info!("allocated bunks for {} subjects", results.len());
            HttpResponse::Ok().json(AllocateResponse { status: "ok".to_string(), results })
        }
        Err(e) => {
            warn!("rejected allocation request: {}", e);
            HttpResponse::BadRequest().json(json!({"status": "error", "error": e.to_string()}))
        }
    }
}

/// POST /allocate
pub async fn allocate_handler(cfg: web::Data<Config>, body: web::Json<serde_json::Value>) -> impl Responder {
    match parse_body(body) {
        Ok(request) => respond(&request, &cfg),
        Err(resp) => resp,
    }
}

/// GET /allocate?subjects=Calculo 1:40:50,Fisica:18:20&required=0.75
/// Versión liviana: `subjects` es una lista separada por comas de
/// `asignatura:asistidas:dictadas`.
pub async fn allocate_get_handler(cfg: web::Data<Config>, query: web::Query<HashMap<String, String>>) -> impl Responder {
    let qm = query.into_inner();
    let subjects = match qm.get("subjects").map(|s| parse_subject_list(s)) {
        Some(Ok(v)) => v,
        Some(Err(e)) => return HttpResponse::BadRequest().json(json!({"error": format!("invalid subjects: {}", e)})),
        None => return HttpResponse::BadRequest().json(json!({"error": "subjects is required in query"})),
    };

    let required_percentage = match qm.get("required").filter(|s| !s.trim().is_empty()) {
        Some(raw) => match raw.trim().parse::<f64>() {
            Ok(p) => Some(p),
            Err(e) => return HttpResponse::BadRequest().json(json!({"error": format!("invalid required: {}", e)})),
        },
        None => None,
    };

    respond(&AllocateRequest { subjects, required_percentage }, &cfg)
}

/// POST /allocate/report
pub async fn report_handler(cfg: web::Data<Config>, body: web::Json<serde_json::Value>) -> impl Responder {
    let request = match parse_body(body) {
        Ok(r) => r,
        Err(resp) => return resp,
    };

    match run_report(&request, &cfg) {
        Ok(report) => {
            info!("report for {} subjects: {} of {} bunks allocated", report.subjects.len(), report.allocated_total, report.total_bunks_available);
            HttpResponse::Ok().json(report)
        }
        Err(e) => {
            warn!("rejected report request: {}", e);
            HttpResponse::BadRequest().json(json!({"status": "error", "error": e.to_string()}))
        }
    }
}
