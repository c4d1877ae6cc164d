//! Backend entry point.

use actix_web::{App, HttpServer};

use portcullis_server::security::security_filter_chain;
use portcullis_server::configure_app;

const DEFAULT_BIND: &str = "127.0.0.1:8080";

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let bind = std::env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND.to_string());
    log::info!("listening on http://{}", bind);
    log::info!("public:    GET  /api/hello");
    log::info!("public:    POST /api/user/{{last_name}}/{{first_name}}");
    log::info!("public:    GET  /api/user/{{id}}");
    log::info!("protected: GET  /api/secured (HTTP Basic, try foo/bar)");

    HttpServer::new(|| {
        App::new()
            .wrap(security_filter_chain())
            .configure(configure_app)
    })
    .bind(bind)?
    .run()
    .await
}
