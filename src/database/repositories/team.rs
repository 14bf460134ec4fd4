use chrono::{DateTime, Utc};
use sqlx::{Sqlite, SqlitePool, Transaction};

use crate::database::models::{
    DeletedTeam, NewTeam, NewTeamMember, Team, TeamMember, TeamStatus, TeamWithMemberCount,
};

const TEAM_COLUMNS: &str = r#"
    t.id,
    t.team_name,
    t.selected_domain,
    t.selected_problem,
    t.institution,
    t.contact_email,
    t.contact_phone,
    t.project_description,
    t.tech_stack,
    t.created_at,
    t.updated_at
"#;

const MEMBER_COLUMNS: &str = r#"
    m.id,
    m.team_id,
    m.member_name,
    m.member_email,
    m.member_phone,
    m.role,
    m.skills,
    m.experience_level,
    m.created_at
"#;

// Team writes
pub async fn insert_team(
    tx: &mut Transaction<'_, Sqlite>,
    team: &NewTeam,
    now: DateTime<Utc>,
) -> Result<i64, sqlx::Error> {
    let id = sqlx::query_scalar::<_, i64>(
        r#"
            INSERT INTO
                teams (
                    team_name,
                    selected_domain,
                    selected_problem,
                    institution,
                    contact_email,
                    contact_phone,
                    project_description,
                    tech_stack,
                    status,
                    created_at,
                    updated_at
                )
            VALUES
                (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING
                id
        "#,
    )
    .bind(&team.team_name)
    .bind(&team.selected_domain)
    .bind(&team.selected_problem)
    .bind(&team.institution)
    .bind(&team.contact_email)
    .bind(&team.contact_phone)
    .bind(&team.project_description)
    .bind(&team.tech_stack)
    .bind(TeamStatus::Active)
    .bind(now)
    .bind(now)
    .fetch_one(&mut **tx)
    .await?;

    Ok(id)
}

pub async fn insert_member(
    tx: &mut Transaction<'_, Sqlite>,
    team_id: i64,
    member: &NewTeamMember,
    now: DateTime<Utc>,
) -> Result<i64, sqlx::Error> {
    let id = sqlx::query_scalar::<_, i64>(
        r#"
            INSERT INTO
                team_members (
                    team_id,
                    member_name,
                    member_email,
                    member_phone,
                    role,
                    skills,
                    experience_level,
                    created_at
                )
            VALUES
                (?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING
                id
        "#,
    )
    .bind(team_id)
    .bind(&member.name)
    .bind(&member.email)
    .bind(&member.phone)
    .bind(&member.role)
    .bind(&member.skills)
    .bind(member.experience_level)
    .bind(now)
    .fetch_one(&mut **tx)
    .await?;

    Ok(id)
}

/// Moves a team from `from` to `to`, stamping `deleted_at` (cleared when
/// `deleted_at` is `None`). Returns the number of team rows that changed,
/// which is 0 when the team is absent or not in `from`.
pub async fn transition_status(
    tx: &mut Transaction<'_, Sqlite>,
    id: i64,
    from: TeamStatus,
    to: TeamStatus,
    deleted_at: Option<DateTime<Utc>>,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        r#"
            UPDATE
                teams
            SET
                status = ?,
                deleted_at = ?
            WHERE
                id = ?
                AND status = ?
        "#,
    )
    .bind(to)
    .bind(deleted_at)
    .bind(id)
    .bind(from)
    .execute(&mut **tx)
    .await?;

    Ok(result.rows_affected())
}

/// Erases a team and its members. With `status` set only a team in that
/// state is touched; `None` erases it whatever its state.
pub async fn delete_team(
    tx: &mut Transaction<'_, Sqlite>,
    id: i64,
    status: Option<TeamStatus>,
) -> Result<u64, sqlx::Error> {
    sqlx::query(
        r#"
            DELETE FROM team_members
            WHERE
                team_id IN (
                    SELECT
                        id
                    FROM
                        teams
                    WHERE
                        id = ?
                        AND (? IS NULL OR status = ?)
                )
        "#,
    )
    .bind(id)
    .bind(status)
    .bind(status)
    .execute(&mut **tx)
    .await?;

    let result = sqlx::query(
        r#"
            DELETE FROM teams
            WHERE
                id = ?
                AND (? IS NULL OR status = ?)
        "#,
    )
    .bind(id)
    .bind(status)
    .bind(status)
    .execute(&mut **tx)
    .await?;

    Ok(result.rows_affected())
}

// Team reads
pub async fn find_team(
    pool: &SqlitePool,
    id: i64,
    status: TeamStatus,
) -> Result<Option<Team>, sqlx::Error> {
    let team = sqlx::query_as::<_, Team>(&format!(
        r#"
            SELECT
                {TEAM_COLUMNS}
            FROM
                teams t
            WHERE
                t.id = ?
                AND t.status = ?
        "#
    ))
    .bind(id)
    .bind(status)
    .fetch_optional(pool)
    .await?;

    Ok(team)
}

pub async fn list_active_teams(pool: &SqlitePool) -> Result<Vec<TeamWithMemberCount>, sqlx::Error> {
    let teams = sqlx::query_as::<_, TeamWithMemberCount>(&format!(
        r#"
            SELECT
                {TEAM_COLUMNS},
                COUNT(m.id) AS member_count
            FROM
                teams t
                LEFT JOIN team_members m ON m.team_id = t.id
            WHERE
                t.status = ?
            GROUP BY
                t.id
            ORDER BY
                t.created_at DESC,
                t.id DESC
        "#
    ))
    .bind(TeamStatus::Active)
    .fetch_all(pool)
    .await?;

    Ok(teams)
}

pub async fn list_deleted_teams(pool: &SqlitePool) -> Result<Vec<DeletedTeam>, sqlx::Error> {
    let teams = sqlx::query_as::<_, DeletedTeam>(&format!(
        r#"
            SELECT
                {TEAM_COLUMNS},
                t.deleted_at
            FROM
                teams t
            WHERE
                t.status = ?
            ORDER BY
                t.deleted_at DESC,
                t.id DESC
        "#
    ))
    .bind(TeamStatus::Deleted)
    .fetch_all(pool)
    .await?;

    Ok(teams)
}

/// Members of a team in the given state, leader first, then by role name.
pub async fn list_members(
    pool: &SqlitePool,
    team_id: i64,
    status: TeamStatus,
) -> Result<Vec<TeamMember>, sqlx::Error> {
    let members = sqlx::query_as::<_, TeamMember>(&format!(
        r#"
            SELECT
                {MEMBER_COLUMNS}
            FROM
                team_members m
                INNER JOIN teams t ON t.id = m.team_id
            WHERE
                m.team_id = ?
                AND t.status = ?
            ORDER BY
                CASE
                    WHEN m.role = 'Team Leader' THEN 0
                    ELSE 1
                END,
                m.role,
                m.id
        "#
    ))
    .bind(team_id)
    .bind(status)
    .fetch_all(pool)
    .await?;

    Ok(members)
}

/// Counts teams in every state.
pub async fn count_all_teams(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM teams")
        .fetch_one(pool)
        .await
}
