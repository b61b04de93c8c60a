//! PostgreSQL implementation of InvitationRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::instrument;

use sched_core::entities::Invitation;
use sched_core::traits::{InvitationRepository, RepoResult};

use crate::models::InvitationModel;

use super::error::map_db_error;

/// PostgreSQL implementation of InvitationRepository
#[derive(Clone)]
pub struct PgInvitationRepository {
    pool: PgPool,
}

impl PgInvitationRepository {
    /// Create a new PgInvitationRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl InvitationRepository for PgInvitationRepository {
    #[instrument(skip(self, token))]
    async fn create(
        &self,
        recruiter_id: i64,
        token: &str,
        expiration: DateTime<Utc>,
    ) -> RepoResult<Invitation> {
        let result = sqlx::query_as::<_, InvitationModel>(
            r#"
            INSERT INTO invitations (recruiter_id, token, expiration)
            VALUES ($1, $2, $3)
            RETURNING id, recruiter_id, token, used, cancel_count, expiration
            "#,
        )
        .bind(recruiter_id)
        .bind(token)
        .bind(expiration)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Invitation::from(result))
    }

    #[instrument(skip(self, token))]
    async fn find_by_token(&self, token: &str) -> RepoResult<Option<Invitation>> {
        let result = sqlx::query_as::<_, InvitationModel>(
            r#"
            SELECT id, recruiter_id, token, used, cancel_count, expiration
            FROM invitations
            WHERE token = $1
            "#,
        )
        .bind(token)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Invitation::from))
    }
}
