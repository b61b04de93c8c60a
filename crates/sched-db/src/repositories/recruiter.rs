//! PostgreSQL implementation of RecruiterRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use sched_core::entities::Recruiter;
use sched_core::error::DomainError;
use sched_core::traits::{RecruiterRepository, RepoResult};

use crate::models::RecruiterModel;

use super::error::{map_db_error, map_unique_violation, recruiter_not_found};

/// PostgreSQL implementation of RecruiterRepository
#[derive(Clone)]
pub struct PgRecruiterRepository {
    pool: PgPool,
}

impl PgRecruiterRepository {
    /// Create a new PgRecruiterRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RecruiterRepository for PgRecruiterRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Recruiter>> {
        let result = sqlx::query_as::<_, RecruiterModel>(
            r#"
            SELECT id, name, email, timezone, meet_access_token, meet_refresh_token
            FROM recruiters
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Recruiter::from))
    }

    #[instrument(skip(self))]
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<Recruiter>> {
        let result = sqlx::query_as::<_, RecruiterModel>(
            r#"
            SELECT id, name, email, timezone, meet_access_token, meet_refresh_token
            FROM recruiters
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Recruiter::from))
    }

    #[instrument(skip(self))]
    async fn email_exists(&self, email: &str) -> RepoResult<bool> {
        let exists: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM recruiters WHERE email = $1)")
                .bind(email)
                .fetch_one(&self.pool)
                .await
                .map_err(map_db_error)?;

        Ok(exists.0)
    }

    #[instrument(skip(self))]
    async fn create(
        &self,
        name: &str,
        email: &str,
        timezone: Option<&str>,
    ) -> RepoResult<Recruiter> {
        let result = sqlx::query_as::<_, RecruiterModel>(
            r#"
            INSERT INTO recruiters (name, email, timezone)
            VALUES ($1, $2, $3)
            RETURNING id, name, email, timezone, meet_access_token, meet_refresh_token
            "#,
        )
        .bind(name)
        .bind(email)
        .bind(timezone)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::EmailAlreadyRegistered))?;

        Ok(Recruiter::from(result))
    }

    #[instrument(skip(self))]
    async fn update_timezone(&self, id: i64, timezone: &str) -> RepoResult<()> {
        let result = sqlx::query("UPDATE recruiters SET timezone = $2 WHERE id = $1")
            .bind(id)
            .bind(timezone)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(recruiter_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self, access_token, refresh_token))]
    async fn update_meet_tokens(
        &self,
        id: i64,
        access_token: &str,
        refresh_token: &str,
    ) -> RepoResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE recruiters
            SET meet_access_token = $2, meet_refresh_token = $3
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(access_token)
        .bind(refresh_token)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(recruiter_not_found(id));
        }

        Ok(())
    }
}
