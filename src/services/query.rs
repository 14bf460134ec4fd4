use sqlx::SqlitePool;

use crate::database::{
    models::{DeletedTeam, RegistrationStats, TeamMember, TeamStatus, TeamWithMemberCount},
    repositories::{stats as stats_repo, team as team_repo},
};
use crate::error::AppError;

/// Read-only views over the registrations. Reads take no locks and may
/// interleave with concurrent writes.
#[derive(Clone)]
pub struct QueryService {
    pool: SqlitePool,
}

impl QueryService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn get_stats(&self) -> Result<RegistrationStats, AppError> {
        Ok(stats_repo::get_registration_stats(&self.pool).await?)
    }

    /// Active teams, newest first, each with its member count.
    pub async fn list_teams(&self) -> Result<Vec<TeamWithMemberCount>, AppError> {
        Ok(team_repo::list_active_teams(&self.pool).await?)
    }

    /// Members of an active team, leader first. Empty for unknown or
    /// deleted teams.
    pub async fn list_members(&self, team_id: i64) -> Result<Vec<TeamMember>, AppError> {
        Ok(team_repo::list_members(&self.pool, team_id, TeamStatus::Active).await?)
    }

    /// The recycle bin, most recently deleted first.
    pub async fn list_deleted(&self) -> Result<Vec<DeletedTeam>, AppError> {
        Ok(team_repo::list_deleted_teams(&self.pool).await?)
    }

    pub async fn list_deleted_members(&self, team_id: i64) -> Result<Vec<TeamMember>, AppError> {
        Ok(team_repo::list_members(&self.pool, team_id, TeamStatus::Deleted).await?)
    }
}
