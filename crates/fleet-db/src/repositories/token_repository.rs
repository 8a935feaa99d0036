//! Token repository. Each identity owns at most one token
//! (`auth_tokens.identity_id` is UNIQUE); issuance is get-or-create.

use crate::{DbError, Result as DbErrorResult};

use fleet_core::{AuthToken, ErrorLocation};

use std::panic::Location;

use chrono::DateTime;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

pub struct TokenRepository {
    pool: SqlitePool,
}

impl TokenRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, token: &AuthToken) -> DbErrorResult<()> {
        let identity_id = token.identity_id.to_string();
        let created_at = token.created_at.timestamp();

        sqlx::query("INSERT INTO auth_tokens (key, identity_id, created_at) VALUES (?, ?, ?)")
            .bind(&token.key)
            .bind(&identity_id)
            .bind(created_at)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    pub async fn find_by_key(&self, key: &str) -> DbErrorResult<Option<AuthToken>> {
        let row = sqlx::query("SELECT key, identity_id, created_at FROM auth_tokens WHERE key = ?")
            .bind(key)
            .fetch_optional(&self.pool)
            .await?;

        row.map(|r| map_token_row(&r)).transpose()
    }

    pub async fn find_by_identity(&self, identity_id: Uuid) -> DbErrorResult<Option<AuthToken>> {
        let identity_id_str = identity_id.to_string();

        let row = sqlx::query(
            "SELECT key, identity_id, created_at FROM auth_tokens WHERE identity_id = ?",
        )
        .bind(identity_id_str)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| map_token_row(&r)).transpose()
    }

    /// Return the identity's token, creating one from `candidate_key` if none
    /// exists yet. A concurrent creator winning the race is handled by
    /// re-reading the row that beat us.
    pub async fn get_or_create(
        &self,
        identity_id: Uuid,
        candidate_key: &str,
    ) -> DbErrorResult<AuthToken> {
        if let Some(token) = self.find_by_identity(identity_id).await? {
            return Ok(token);
        }

        let token = AuthToken::new(candidate_key.to_string(), identity_id);

        match self.create(&token).await {
            Ok(()) => Ok(token),
            Err(DbError::UniqueViolation { .. }) => self
                .find_by_identity(identity_id)
                .await?
                .ok_or_else(|| DbError::Initialization {
                    message: format!("Token for identity {} vanished after conflict", identity_id),
                    location: ErrorLocation::from(Location::caller()),
                }),
            Err(e) => Err(e),
        }
    }
}

fn map_token_row(row: &SqliteRow) -> DbErrorResult<AuthToken> {
    let identity_id: String = row.try_get("identity_id")?;
    let created_at: i64 = row.try_get("created_at")?;

    Ok(AuthToken {
        key: row.try_get("key")?,
        identity_id: Uuid::parse_str(&identity_id).map_err(|e| DbError::Initialization {
            message: format!("Invalid UUID in auth_tokens.identity_id: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?,
        created_at: DateTime::from_timestamp(created_at, 0).ok_or_else(|| {
            DbError::Initialization {
                message: "Invalid timestamp in auth_tokens.created_at".to_string(),
                location: ErrorLocation::from(Location::caller()),
            }
        })?,
    })
}
