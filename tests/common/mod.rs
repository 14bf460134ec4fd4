#![allow(dead_code)]

use std::env;

use anyhow::Result;
use fake::Fake;
use fake::faker::company::en::CompanyName;
use fake::faker::internet::en::SafeEmail;
use fake::faker::name::en::Name;
use sqlx::SqlitePool;
use tempfile::TempDir;

use hackreg::database::init_database;
use hackreg::database::models::{MemberInput, RegisterTeamInput};
use hackreg::{AppState, Config, LifecycleService, QueryService, RegistrationService};

/// An isolated store in a temporary directory, plus the services over it.
pub struct TestContext {
    pub pool: SqlitePool,
    pub config: Config,
    pub state: AppState,
    _temp_dir: TempDir,
}

impl TestContext {
    pub async fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let database_url = format!("sqlite:{}/test.db", temp_dir.path().display());

        let config = Config {
            database_url: database_url.clone(),
            database_max_connections: 5,
            host: "127.0.0.1".to_string(),
            port: 0,
            environment: "test".to_string(),
            cors_allowed_origin: None,
            seed_sample_data: false,
        };

        let pool = init_database(&database_url, config.database_max_connections).await?;
        let state = AppState::new(pool.clone());

        Ok(TestContext {
            pool,
            config,
            state,
            _temp_dir: temp_dir,
        })
    }

    pub fn registration(&self) -> &RegistrationService {
        &self.state.registration_service
    }

    pub fn query(&self) -> &QueryService {
        &self.state.query_service
    }

    pub fn lifecycle(&self) -> &LifecycleService {
        &self.state.lifecycle_service
    }

    /// Registers a generated team with a leader and `extra_members` members.
    pub async fn register_team(&self, extra_members: usize) -> i64 {
        self.registration()
            .register(MockData::team(extra_members))
            .await
            .expect("Failed to register test team")
    }

    pub async fn count(&self, table: &str) -> i64 {
        let query = format!("SELECT COUNT(*) FROM {}", table);
        sqlx::query_scalar::<_, i64>(&query)
            .fetch_one(&self.pool)
            .await
            .expect("Failed to count records")
    }

    pub async fn team_status(&self, team_id: i64) -> Option<String> {
        sqlx::query_scalar::<_, String>("SELECT status FROM teams WHERE id = ?")
            .bind(team_id)
            .fetch_optional(&self.pool)
            .await
            .expect("Failed to read team status")
    }
}

// Mock data generators
pub struct MockData;

impl MockData {
    pub fn leader() -> MemberInput {
        MemberInput {
            name: Some(Name().fake()),
            email: Some(SafeEmail().fake()),
            phone: Some("+15550000000".to_string()),
            role: Some("Team Leader".to_string()),
            skills: Some("Rust, SQL".to_string()),
            experience: Some("Advanced".to_string()),
        }
    }

    pub fn member() -> MemberInput {
        MemberInput {
            name: Some(Name().fake()),
            email: Some(SafeEmail().fake()),
            ..Default::default()
        }
    }

    pub fn team(extra_members: usize) -> RegisterTeamInput {
        let name: String = CompanyName().fake();
        let suffix = uuid::Uuid::new_v4().simple().to_string();

        let mut members = vec![Self::leader()];
        members.extend((0..extra_members).map(|_| Self::member()));

        RegisterTeamInput {
            team_name: Some(format!("{} {}", name, &suffix[..8])),
            selected_domain: Some("Web Development".to_string()),
            selected_problem: Some("Campus event discovery".to_string()),
            institution: Some("Tech University".to_string()),
            contact_email: Some(format!("team-{}@example.com", suffix)),
            contact_phone: Some("+15551234567".to_string()),
            project_description: Some("A tool that helps".to_string()),
            tech_stack: Some("Rust, actix-web".to_string()),
            team_members: Some(members),
        }
    }

    pub fn team_in_domain(domain: &str, extra_members: usize) -> RegisterTeamInput {
        RegisterTeamInput {
            selected_domain: Some(domain.to_string()),
            ..Self::team(extra_members)
        }
    }
}

pub fn setup_test_env() {
    unsafe {
        env::set_var("RUST_LOG", "debug");
    }
    let _ = env_logger::builder().is_test(true).try_init();
}
