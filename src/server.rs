use actix_web::{web, App, HttpServer};
use log::info;
use crate::config::Config;
use crate::server_handlers::{allocate_get_handler, allocate_handler, help_handler, report_handler};

/// Registra las rutas de la API; compartido por `run_server` y los tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/allocate", web::post().to(allocate_handler))
        .route("/allocate", web::get().to(allocate_get_handler))
        .route("/allocate/report", web::post().to(report_handler))
        .route("/help", web::get().to(help_handler));
}

pub async fn run_server(config: Config) -> std::io::Result<()> {
    let bind_addr = config.bind.clone();
    info!("listening on http://{} (required percentage {:.2}, strict {})", bind_addr, config.required_percentage.value(), config.strict);

    let data = web::Data::new(config);
    HttpServer::new(move || App::new().app_data(data.clone()).configure(configure))
        .bind(bind_addr)?
        .run()
        .await
}
