use actix_files::Files;
use actix_web::{HttpResponse, web};
use chrono::{DateTime, Utc};
use log::info;
use serde::Serialize;
use serde_json::json;
use shared::{CellType, ModelInfo, cell_profiles};
use std::str::FromStr;

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

pub struct ServerStatus {
    pub started_at: DateTime<Utc>,
}

impl ServerStatus {
    pub fn now() -> Self {
        Self {
            started_at: Utc::now(),
        }
    }
}

pub fn configure_routes(cfg: &mut web::ServiceConfig, frontend_dir: String) {
    configure_api(cfg);
    cfg.service(Files::new("/", frontend_dir).index_file("index.html"));
}

pub fn configure_api(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/api/health").route(web::get().to(health)))
        .service(web::resource("/api/model").route(web::get().to(model_info)))
        .service(web::resource("/api/cells").route(web::get().to(list_cells)))
        .service(web::resource("/api/cells/{name}").route(web::get().to(get_cell)));
}

async fn health(status: web::Data<ServerStatus>) -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "ok",
        "started_at": status.started_at.to_rfc3339(),
    }))
}

async fn model_info() -> HttpResponse {
    HttpResponse::Ok().json(ModelInfo::mobilenet_v2())
}

async fn list_cells() -> HttpResponse {
    HttpResponse::Ok().json(cell_profiles())
}

async fn get_cell(path: web::Path<String>) -> HttpResponse {
    let name = path.into_inner();
    match CellType::from_str(&name) {
        Ok(cell) => {
            info!("Serving profile for {}", cell);
            HttpResponse::Ok().json(cell.profile())
        }
        Err(_) => HttpResponse::NotFound().json(ErrorResponse {
            error: format!("Unknown cell type: {}", name),
        }),
    }
}
