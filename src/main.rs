// --- Smart Bunk Management System - Archivo principal ---
//
// Sin argumentos levanta la API HTTP. Con la ruta de una planilla de
// asistencia imprime la asignación en JSON y termina.

use smartbunk::config::Config;
use smartbunk::api_json::{run_request, AllocateRequest};
use smartbunk::run_server;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // .env primero para que RUST_LOG también pueda venir de ahí
    let _ = dotenv::dotenv();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let config = Config::from_env();

    if let Some(path) = std::env::args().nth(1) {
        let subjects = smartbunk::excel::read_attendance(&path)?;
        log::info!("{} subjects read from {}", subjects.len(), path);
        // misma política que la API: en modo estricto se valida la planilla
        let request = AllocateRequest { subjects, required_percentage: None };
        let results = run_request(&request, &config)?;
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    log::info!("=== Smart Bunk Management System (API) ===");
    run_server(config).await?;
    Ok(())
}
