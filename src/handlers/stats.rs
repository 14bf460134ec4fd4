use actix_web::{HttpResponse, Result, web};

use crate::handlers::shared::ApiResponse;
use crate::services::QueryService;

/// Get dashboard statistics
pub async fn get_stats(service: web::Data<QueryService>) -> Result<HttpResponse> {
    match service.get_stats().await {
        Ok(stats) => Ok(ApiResponse::success(stats)),
        Err(err) => {
            log::error!("Stats fetch error: {}", err);
            Ok(ApiResponse::internal_error("Failed to fetch stats."))
        }
    }
}
