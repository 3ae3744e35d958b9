// Route exports
pub mod lenders;

use actix_web::web;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(lenders::configure);
}
