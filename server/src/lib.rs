//! Backend application protected by a declarative security filter chain.

pub mod handlers;
pub mod security;

use actix_web::web;

use crate::handlers::user::UserStore;

/// Registers application state and routes.
pub fn configure_app(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::Data::new(UserStore::new()))
        .service(handlers::hello::hello)
        .service(handlers::user::create_user)
        .service(handlers::user::get_user)
        .service(handlers::secured::secured);
}
