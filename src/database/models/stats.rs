use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationStats {
    pub total_teams: i64,
    pub total_participants: i64,
    pub domain_distribution: Vec<DomainCount>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct DomainCount {
    pub domain: String,
    pub count: i64,
}
