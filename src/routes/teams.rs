use crate::handlers::teams;
use actix_web::web;

pub fn configure(cfg: &mut web::ServiceConfig) {
    // The recycle-bin paths go first so "deleted" is never taken for an id.
    cfg.service(
        web::scope("/teams")
            .route("", web::get().to(teams::get_teams))
            .route("/deleted", web::get().to(teams::get_deleted_teams))
            .route(
                "/deleted/{id}/members",
                web::get().to(teams::get_deleted_team_members),
            )
            .route("/{id}", web::delete().to(teams::soft_delete_team))
            .route("/{id}/members", web::get().to(teams::get_team_members))
            .route("/{id}/restore", web::post().to(teams::restore_team))
            .route(
                "/{id}/permanent",
                web::delete().to(teams::permanently_delete_team),
            ),
    );
}
