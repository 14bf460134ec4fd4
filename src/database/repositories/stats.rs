use sqlx::SqlitePool;

use crate::database::models::{DomainCount, RegistrationStats, TeamStatus};

// Counts cover active teams only; the recycle bin is not part of the totals.
pub async fn get_registration_stats(pool: &SqlitePool) -> Result<RegistrationStats, sqlx::Error> {
    let total_teams: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM teams WHERE status = ?")
        .bind(TeamStatus::Active)
        .fetch_one(pool)
        .await?;

    let total_participants: i64 = sqlx::query_scalar(
        r#"
            SELECT
                COUNT(*)
            FROM
                team_members m
                INNER JOIN teams t ON t.id = m.team_id
            WHERE
                t.status = ?
        "#,
    )
    .bind(TeamStatus::Active)
    .fetch_one(pool)
    .await?;

    let domain_distribution = sqlx::query_as::<_, DomainCount>(
        r#"
            SELECT
                selected_domain AS domain,
                COUNT(*) AS count
            FROM
                teams
            WHERE
                status = ?
            GROUP BY
                selected_domain
            ORDER BY
                selected_domain
        "#,
    )
    .bind(TeamStatus::Active)
    .fetch_all(pool)
    .await?;

    Ok(RegistrationStats {
        total_teams,
        total_participants,
        domain_distribution,
    })
}
