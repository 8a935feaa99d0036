//! Identity repository for CRUD operations on identity records.
//!
//! Uniqueness of `car_id`, `email`, and `phone_number` is carried by the
//! UNIQUE constraints in the schema. `create` and `update` never pre-check
//! for duplicates; a losing writer gets `DbError::UniqueViolation` naming
//! the colliding column.

use crate::{DbError, Result as DbErrorResult};

use fleet_core::{ErrorLocation, Identity};

use std::panic::Location;

use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

const IDENTITY_COLUMNS: &str = "id, car_id, email, phone_number, password_hash, \
     is_active, is_staff, is_superuser, created_at, updated_at";

pub struct IdentityRepository {
    pool: SqlitePool,
}

impl IdentityRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a new identity. Exactly one row or a constraint error;
    /// never a partial record.
    pub async fn create(&self, identity: &Identity) -> DbErrorResult<()> {
        let id = identity.id.to_string();
        let created_at = identity.created_at.timestamp();
        let updated_at = identity.updated_at.timestamp();

        sqlx::query(
            r#"
                INSERT INTO identities (
                    id, car_id, email, phone_number, password_hash,
                    is_active, is_staff, is_superuser, created_at, updated_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&id)
        .bind(&identity.car_id)
        .bind(&identity.email)
        .bind(&identity.phone_number)
        .bind(&identity.password_hash)
        .bind(identity.is_active)
        .bind(identity.is_staff)
        .bind(identity.is_superuser)
        .bind(created_at)
        .bind(updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<Identity>> {
        let id_str = id.to_string();

        let row = sqlx::query(&format!(
            "SELECT {} FROM identities WHERE id = ?",
            IDENTITY_COLUMNS
        ))
        .bind(id_str)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| map_identity_row(&r)).transpose()
    }

    /// Exact-match lookup on the login key.
    pub async fn find_by_car_id(&self, car_id: &str) -> DbErrorResult<Option<Identity>> {
        let row = sqlx::query(&format!(
            "SELECT {} FROM identities WHERE car_id = ?",
            IDENTITY_COLUMNS
        ))
        .bind(car_id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| map_identity_row(&r)).transpose()
    }

    pub async fn find_by_email(&self, email: &str) -> DbErrorResult<Option<Identity>> {
        let row = sqlx::query(&format!(
            "SELECT {} FROM identities WHERE email = ?",
            IDENTITY_COLUMNS
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| map_identity_row(&r)).transpose()
    }

    pub async fn find_by_phone(&self, phone_number: &str) -> DbErrorResult<Option<Identity>> {
        let row = sqlx::query(&format!(
            "SELECT {} FROM identities WHERE phone_number = ?",
            IDENTITY_COLUMNS
        ))
        .bind(phone_number)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| map_identity_row(&r)).transpose()
    }

    /// Persist changed fields of an existing identity.
    pub async fn update(&self, identity: &Identity) -> DbErrorResult<()> {
        let id = identity.id.to_string();
        let updated_at = identity.updated_at.timestamp();

        sqlx::query(
            r#"
                UPDATE identities
                SET car_id = ?, email = ?, phone_number = ?, password_hash = ?,
                    is_active = ?, is_staff = ?, is_superuser = ?, updated_at = ?
                WHERE id = ?
            "#,
        )
        .bind(&identity.car_id)
        .bind(&identity.email)
        .bind(&identity.phone_number)
        .bind(&identity.password_hash)
        .bind(identity.is_active)
        .bind(identity.is_staff)
        .bind(identity.is_superuser)
        .bind(updated_at)
        .bind(&id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// The only state transition: active -> inactive.
    pub async fn deactivate(&self, id: Uuid) -> DbErrorResult<()> {
        let id_str = id.to_string();
        let updated_at = Utc::now().timestamp();

        sqlx::query("UPDATE identities SET is_active = 0, updated_at = ? WHERE id = ?")
            .bind(updated_at)
            .bind(id_str)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

fn map_identity_row(row: &SqliteRow) -> DbErrorResult<Identity> {
    let id: String = row.try_get("id")?;
    let created_at: i64 = row.try_get("created_at")?;
    let updated_at: i64 = row.try_get("updated_at")?;

    Ok(Identity {
        id: Uuid::parse_str(&id).map_err(|e| DbError::Initialization {
            message: format!("Invalid UUID in identities.id: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?,
        car_id: row.try_get("car_id")?,
        email: row.try_get("email")?,
        phone_number: row.try_get("phone_number")?,
        password_hash: row.try_get("password_hash")?,
        is_active: row.try_get("is_active")?,
        is_staff: row.try_get("is_staff")?,
        is_superuser: row.try_get("is_superuser")?,
        created_at: DateTime::from_timestamp(created_at, 0).ok_or_else(|| {
            DbError::Initialization {
                message: "Invalid timestamp in identities.created_at".to_string(),
                location: ErrorLocation::from(Location::caller()),
            }
        })?,
        updated_at: DateTime::from_timestamp(updated_at, 0).ok_or_else(|| {
            DbError::Initialization {
                message: "Invalid timestamp in identities.updated_at".to_string(),
                location: ErrorLocation::from(Location::caller()),
            }
        })?,
    })
}
