use actix_web::{HttpResponse, Result, web};

use crate::handlers::shared::ApiResponse;
use crate::services::{LifecycleService, QueryService};

// Listing handlers
pub async fn get_teams(service: web::Data<QueryService>) -> Result<HttpResponse> {
    match service.list_teams().await {
        Ok(teams) => Ok(ApiResponse::success(teams)),
        Err(err) => {
            log::error!("Fetch teams error: {}", err);
            Ok(ApiResponse::internal_error("Failed to fetch teams."))
        }
    }
}

pub async fn get_team_members(
    path: web::Path<i64>,
    service: web::Data<QueryService>,
) -> Result<HttpResponse> {
    let team_id = path.into_inner();

    match service.list_members(team_id).await {
        Ok(members) => Ok(ApiResponse::success(members)),
        Err(err) => {
            log::error!("Fetch members error for team {}: {}", team_id, err);
            Ok(ApiResponse::internal_error("Failed to fetch team members."))
        }
    }
}

pub async fn get_deleted_teams(service: web::Data<QueryService>) -> Result<HttpResponse> {
    match service.list_deleted().await {
        Ok(teams) => Ok(ApiResponse::success(teams)),
        Err(err) => {
            log::error!("Fetch deleted teams error: {}", err);
            Ok(ApiResponse::internal_error("Failed to fetch deleted teams."))
        }
    }
}

pub async fn get_deleted_team_members(
    path: web::Path<i64>,
    service: web::Data<QueryService>,
) -> Result<HttpResponse> {
    let team_id = path.into_inner();

    match service.list_deleted_members(team_id).await {
        Ok(members) => Ok(ApiResponse::success(members)),
        Err(err) => {
            log::error!("Fetch deleted members error for team {}: {}", team_id, err);
            Ok(ApiResponse::internal_error("Failed to fetch team members."))
        }
    }
}

// Lifecycle handlers. An id that matches nothing still answers with success;
// only the message tells the two cases apart.
pub async fn soft_delete_team(
    path: web::Path<i64>,
    service: web::Data<LifecycleService>,
) -> Result<HttpResponse> {
    let team_id = path.into_inner();

    match service.soft_delete(team_id).await {
        Ok(0) => Ok(ApiResponse::ok_message("No active team found; nothing was deleted.")),
        Ok(_) => Ok(ApiResponse::ok_message("Team and members moved to recycle bin.")),
        Err(err) => {
            log::error!("Soft delete error for team {}: {}", team_id, err);
            Ok(ApiResponse::internal_error("Failed to delete team."))
        }
    }
}

pub async fn restore_team(
    path: web::Path<i64>,
    service: web::Data<LifecycleService>,
) -> Result<HttpResponse> {
    let team_id = path.into_inner();

    match service.restore(team_id).await {
        Ok(0) => Ok(ApiResponse::ok_message(
            "No deleted team found; nothing was restored.",
        )),
        Ok(_) => Ok(ApiResponse::ok_message("Team and members restored successfully.")),
        Err(err) => {
            log::error!("Restore error for team {}: {}", team_id, err);
            Ok(ApiResponse::internal_error("Failed to restore team."))
        }
    }
}

pub async fn permanently_delete_team(
    path: web::Path<i64>,
    service: web::Data<LifecycleService>,
) -> Result<HttpResponse> {
    let team_id = path.into_inner();

    match service.permanently_delete(team_id).await {
        Ok(0) => Ok(ApiResponse::ok_message("No team found; nothing was deleted.")),
        Ok(_) => Ok(ApiResponse::ok_message("Team permanently deleted.")),
        Err(err) => {
            log::error!("Permanent delete error for team {}: {}", team_id, err);
            Ok(ApiResponse::internal_error(
                "Failed to permanently delete team.",
            ))
        }
    }
}
