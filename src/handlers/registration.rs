use actix_web::{HttpResponse, Result, web};

use crate::database::models::{RegisterTeamInput, RegistrationResponse};
use crate::error::AppError;
use crate::handlers::shared::ApiResponse;
use crate::services::RegistrationService;

/// Register a new team and its members
pub async fn register_team(
    service: web::Data<RegistrationService>,
    input: web::Json<RegisterTeamInput>,
) -> Result<HttpResponse> {
    match service.register(input.into_inner()).await {
        Ok(team_id) => Ok(ApiResponse::created(
            RegistrationResponse { team_id },
            "Team registered successfully!",
        )),
        Err(err @ AppError::ValidationError(_)) => Err(err.into()),
        Err(err) => {
            log::error!("Registration error: {}", err);
            Ok(ApiResponse::internal_error("Registration failed."))
        }
    }
}
