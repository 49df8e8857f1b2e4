mod handlers;
mod state;

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use tracing::info;
use tracing_actix_web::TracingLogger;

use crate::config::InputRanges;
pub use state::AppState;

pub async fn start_server(port: u16, ranges: InputRanges) -> std::io::Result<()> {
    let data = web::Data::new(AppState::new(ranges));

    info!("Starting reservoir volumetrics server on http://localhost:{port}");

    HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .wrap(Cors::permissive())
            .app_data(data.clone())
            .route("/api/calculate", web::post().to(handlers::calculate))
            .route("/api/ranges", web::get().to(handlers::ranges))
    })
    .bind(("127.0.0.1", port))?
    .run()
    .await
}
