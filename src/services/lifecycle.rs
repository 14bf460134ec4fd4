use chrono::Utc;
use sqlx::SqlitePool;

use crate::database::{
    models::TeamStatus, repositories::team as team_repo, transaction::DatabaseTransaction,
};
use crate::error::AppError;

/// Moves teams between the active list, the recycle bin, and oblivion.
///
/// Every transition is a status-guarded statement run in its own
/// transaction, so a team and its members always change state together. Each
/// operation returns the number of teams affected; asking for a transition
/// the team is not in a position to make (unknown id, wrong state) is a
/// no-op that returns 0.
#[derive(Clone)]
pub struct LifecycleService {
    pool: SqlitePool,
}

impl LifecycleService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Active -> Deleted
    pub async fn soft_delete(&self, team_id: i64) -> Result<u64, AppError> {
        let affected = DatabaseTransaction::run(&self.pool, |tx| {
            Box::pin(async move {
                let affected = team_repo::transition_status(
                    tx,
                    team_id,
                    TeamStatus::Active,
                    TeamStatus::Deleted,
                    Some(Utc::now()),
                )
                .await?;
                Ok(affected)
            })
        })
        .await?;

        log_transition("moved to recycle bin", team_id, affected);
        Ok(affected)
    }

    /// Deleted -> Active. Fails with a uniqueness violation, leaving the team
    /// in the bin, when an active team has taken its name or contact email.
    pub async fn restore(&self, team_id: i64) -> Result<u64, AppError> {
        let affected = DatabaseTransaction::run(&self.pool, |tx| {
            Box::pin(async move {
                let affected = team_repo::transition_status(
                    tx,
                    team_id,
                    TeamStatus::Deleted,
                    TeamStatus::Active,
                    None,
                )
                .await?;
                Ok(affected)
            })
        })
        .await?;

        log_transition("restored", team_id, affected);
        Ok(affected)
    }

    /// Deleted -> Purged
    pub async fn purge(&self, team_id: i64) -> Result<u64, AppError> {
        self.erase(team_id, Some(TeamStatus::Deleted)).await
    }

    /// Active -> Purged, skipping the recycle bin.
    pub async fn hard_delete(&self, team_id: i64) -> Result<u64, AppError> {
        self.erase(team_id, Some(TeamStatus::Active)).await
    }

    /// Erases the team from whichever state it is in.
    pub async fn permanently_delete(&self, team_id: i64) -> Result<u64, AppError> {
        self.erase(team_id, None).await
    }

    async fn erase(&self, team_id: i64, status: Option<TeamStatus>) -> Result<u64, AppError> {
        let affected = DatabaseTransaction::run(&self.pool, |tx| {
            Box::pin(async move { Ok(team_repo::delete_team(tx, team_id, status).await?) })
        })
        .await?;

        log_transition("permanently deleted", team_id, affected);
        Ok(affected)
    }
}

fn log_transition(action: &str, team_id: i64, affected: u64) {
    if affected > 0 {
        log::info!("Team {} {}", team_id, action);
    } else {
        log::debug!("Team {} not {}: no matching team", team_id, action);
    }
}
