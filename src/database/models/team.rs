use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::macros::string_enum;

pub const TEAM_LEADER_ROLE: &str = "Team Leader";
pub const DEFAULT_MEMBER_ROLE: &str = "Member";

string_enum! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum TeamStatus {
        Active => "active",
        Deleted => "deleted",
    }
}

string_enum! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
    pub enum ExperienceLevel {
        Beginner => "Beginner",
        #[default]
        Intermediate => "Intermediate",
        Advanced => "Advanced",
    }
}

/// A team row as the admin dashboard sees it. Lifecycle columns are kept out
/// so a team reads the same before a soft-delete and after its restore.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Team {
    pub id: i64,
    pub team_name: String,
    pub selected_domain: String,
    pub selected_problem: String,
    pub institution: Option<String>,
    pub contact_email: String,
    pub contact_phone: Option<String>,
    pub project_description: Option<String>,
    pub tech_stack: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct TeamWithMemberCount {
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub team: Team,
    pub member_count: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct DeletedTeam {
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub team: Team,
    pub deleted_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct TeamMember {
    pub id: i64,
    pub team_id: i64,
    pub member_name: String,
    pub member_email: String,
    pub member_phone: Option<String>,
    pub role: String,
    pub skills: Option<String>,
    pub experience_level: ExperienceLevel,
    pub created_at: DateTime<Utc>,
}

impl TeamMember {
    pub fn is_leader(&self) -> bool {
        self.role == TEAM_LEADER_ROLE
    }
}

/// Registration payload as posted by the public form. Every field is optional
/// here; presence is checked by the registration service.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterTeamInput {
    pub team_name: Option<String>,
    pub selected_domain: Option<String>,
    pub selected_problem: Option<String>,
    pub institution: Option<String>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub project_description: Option<String>,
    pub tech_stack: Option<String>,
    pub team_members: Option<Vec<MemberInput>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MemberInput {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub role: Option<String>,
    pub skills: Option<String>,
    /// Free text so a blank value can fall back to the default level.
    pub experience: Option<String>,
}

/// Validated team fields, ready to insert.
#[derive(Debug, Clone)]
pub struct NewTeam {
    pub team_name: String,
    pub selected_domain: String,
    pub selected_problem: String,
    pub institution: Option<String>,
    pub contact_email: String,
    pub contact_phone: Option<String>,
    pub project_description: Option<String>,
    pub tech_stack: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewTeamMember {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub role: String,
    pub skills: Option<String>,
    pub experience_level: ExperienceLevel,
}

impl NewTeamMember {
    pub fn is_leader(&self) -> bool {
        self.role == TEAM_LEADER_ROLE
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationResponse {
    pub team_id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_experience_level_text_forms() {
        assert_eq!(ExperienceLevel::default(), ExperienceLevel::Intermediate);
        assert_eq!("advanced".parse::<ExperienceLevel>(), Ok(ExperienceLevel::Advanced));
        assert!("Guru".parse::<ExperienceLevel>().is_err());
        assert_eq!(ExperienceLevel::Beginner.to_string(), "Beginner");
        assert_eq!(
            serde_json::to_string(&ExperienceLevel::Advanced).unwrap(),
            "\"Advanced\""
        );
    }

    #[test]
    fn test_register_input_uses_camel_case() {
        let input: RegisterTeamInput = serde_json::from_value(serde_json::json!({
            "teamName": "Rustaceans",
            "selectedDomain": "Systems",
            "contactEmail": "crabs@example.com",
            "teamMembers": [{ "name": "Ferris", "email": "ferris@example.com", "experience": "Beginner" }]
        }))
        .unwrap();

        assert_eq!(input.team_name.as_deref(), Some("Rustaceans"));
        assert_eq!(input.selected_problem, None);
        let members = input.team_members.unwrap();
        assert_eq!(members[0].experience.as_deref(), Some("Beginner"));
        assert_eq!(TeamStatus::Deleted.as_str(), "deleted");
    }
}
