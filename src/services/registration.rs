use chrono::Utc;
use sqlx::SqlitePool;

use crate::database::{
    models::{
        DEFAULT_MEMBER_ROLE, ExperienceLevel, MemberInput, NewTeam, NewTeamMember,
        RegisterTeamInput, TEAM_LEADER_ROLE,
    },
    repositories::team as team_repo,
    transaction::DatabaseTransaction,
};
use crate::error::AppError;

/// Creates a team and its members as one unit.
#[derive(Clone)]
pub struct RegistrationService {
    pool: SqlitePool,
}

impl RegistrationService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Validates `input` and persists the team with every well-formed member
    /// in a single transaction. Returns the new team's id.
    pub async fn register(&self, input: RegisterTeamInput) -> Result<i64, AppError> {
        let (team, members) = validate_registration(input)?;
        let team_name = team.team_name.clone();

        let team_id = DatabaseTransaction::run(&self.pool, |tx| {
            Box::pin(async move {
                let now = Utc::now();
                let team_id = team_repo::insert_team(tx, &team, now).await?;

                for member in &members {
                    team_repo::insert_member(tx, team_id, member, now).await?;
                }

                Ok(team_id)
            })
        })
        .await?;

        log::info!("Registered team '{}' with id {}", team_name, team_id);
        Ok(team_id)
    }

    /// Inserts the sample team when the store holds no teams at all, active or
    /// deleted. Returns the sample team's id when it was created.
    pub async fn seed_sample_data(&self) -> Result<Option<i64>, AppError> {
        if team_repo::count_all_teams(&self.pool).await? > 0 {
            log::debug!("Store already holds teams, skipping sample data");
            return Ok(None);
        }

        let team_id = self.register(sample_registration()).await?;
        log::info!("Sample data added (team id {})", team_id);
        Ok(Some(team_id))
    }
}

/// Checks presence of the required fields. Blank strings count as absent but
/// non-blank values are kept exactly as submitted. Member entries without a
/// name or an email are dropped rather than rejected.
pub fn validate_registration(
    input: RegisterTeamInput,
) -> Result<(NewTeam, Vec<NewTeamMember>), AppError> {
    let team_name = present(input.team_name);
    let selected_domain = present(input.selected_domain);
    let selected_problem = present(input.selected_problem);
    let contact_email = present(input.contact_email);
    let team_members = input.team_members.unwrap_or_default();

    let missing: Vec<&str> = [
        ("teamName", team_name.is_none()),
        ("selectedDomain", selected_domain.is_none()),
        ("selectedProblem", selected_problem.is_none()),
        ("contactEmail", contact_email.is_none()),
        ("teamMembers", team_members.is_empty()),
    ]
    .into_iter()
    .filter_map(|(field, is_missing)| is_missing.then_some(field))
    .collect();

    let (Some(team_name), Some(selected_domain), Some(selected_problem), Some(contact_email)) =
        (team_name, selected_domain, selected_problem, contact_email)
    else {
        return Err(missing_fields(&missing));
    };
    if team_members.is_empty() {
        return Err(missing_fields(&missing));
    }

    let mut members = Vec::with_capacity(team_members.len());
    for member in team_members {
        if let Some(member) = to_new_member(member)? {
            members.push(member);
        }
    }

    let team = NewTeam {
        team_name,
        selected_domain,
        selected_problem,
        institution: present(input.institution),
        contact_email,
        contact_phone: present(input.contact_phone),
        project_description: present(input.project_description),
        tech_stack: present(input.tech_stack),
    };

    Ok((team, members))
}

fn missing_fields(fields: &[&str]) -> AppError {
    AppError::validation(format!("Missing required fields: {}", fields.join(", ")))
}

fn to_new_member(input: MemberInput) -> Result<Option<NewTeamMember>, AppError> {
    let (Some(name), Some(email)) = (present(input.name), present(input.email)) else {
        return Ok(None);
    };

    let experience_level = match present(input.experience) {
        Some(level) => level.trim().parse::<ExperienceLevel>().map_err(AppError::validation)?,
        None => ExperienceLevel::default(),
    };

    Ok(Some(NewTeamMember {
        name,
        email,
        phone: present(input.phone),
        role: present(input.role).unwrap_or_else(|| DEFAULT_MEMBER_ROLE.to_string()),
        skills: present(input.skills),
        experience_level,
    }))
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn sample_registration() -> RegisterTeamInput {
    let member = |name: &str,
                  email: &str,
                  phone: &str,
                  role: &str,
                  skills: &str,
                  level: ExperienceLevel| {
        MemberInput {
            name: Some(name.to_string()),
            email: Some(email.to_string()),
            phone: Some(phone.to_string()),
            role: Some(role.to_string()),
            skills: Some(skills.to_string()),
            experience: Some(level.to_string()),
        }
    };

    RegisterTeamInput {
        team_name: Some("Code Warriors".to_string()),
        selected_domain: Some("Artificial Intelligence & Machine Learning (AI/ML)".to_string()),
        selected_problem: Some("Mental Health Chatbot".to_string()),
        institution: Some("Tech University".to_string()),
        contact_email: Some("codewarriors@example.com".to_string()),
        contact_phone: Some("+1234567890".to_string()),
        project_description: Some(
            "An AI-powered chatbot to provide mental health support".to_string(),
        ),
        tech_stack: Some("Python, TensorFlow, React, Node.js".to_string()),
        team_members: Some(vec![
            member(
                "John Doe",
                "john@example.com",
                "+1234567891",
                TEAM_LEADER_ROLE,
                "Python, Machine Learning",
                ExperienceLevel::Advanced,
            ),
            member(
                "Jane Smith",
                "jane@example.com",
                "+1234567892",
                DEFAULT_MEMBER_ROLE,
                "React, Frontend",
                ExperienceLevel::Intermediate,
            ),
            member(
                "Bob Johnson",
                "bob@example.com",
                "+1234567893",
                DEFAULT_MEMBER_ROLE,
                "Node.js, Backend",
                ExperienceLevel::Intermediate,
            ),
        ]),
    }
}
