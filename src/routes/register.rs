use crate::handlers::registration;
use actix_web::web;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/register", web::post().to(registration::register_team));
}
