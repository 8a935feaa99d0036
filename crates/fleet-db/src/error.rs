use fleet_core::ErrorLocation;

use std::panic::Location;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("SQLx error: {source} {location}")]
    Sqlx {
        source: sqlx::Error,
        location: ErrorLocation,
    },

    #[error("Migration error: {message} {location}")]
    Migration {
        message: String,
        location: ErrorLocation,
    },

    #[error("Database initialization failed: {message} {location}")]
    Initialization {
        message: String,
        location: ErrorLocation,
    },

    #[error("Unique constraint violated on column '{column}' {location}")]
    UniqueViolation {
        column: String,
        location: ErrorLocation,
    },
}

impl From<sqlx::Error> for DbError {
    #[track_caller]
    fn from(source: sqlx::Error) -> Self {
        let location = ErrorLocation::from(Location::caller());

        if let sqlx::Error::Database(ref db_err) = source {
            if db_err.is_unique_violation() {
                if let Some(column) = unique_violation_column(db_err.message()) {
                    return Self::UniqueViolation { column, location };
                }
            }
        }

        Self::Sqlx { source, location }
    }
}

/// SQLite reports unique violations as
/// "UNIQUE constraint failed: <table>.<column>".
fn unique_violation_column(message: &str) -> Option<String> {
    let rest = message.split("UNIQUE constraint failed: ").nth(1)?;
    let qualified = rest.split(',').next()?.trim();
    let column = qualified.rsplit('.').next()?;

    if column.is_empty() {
        return None;
    }

    Some(column.to_string())
}

pub type Result<T> = std::result::Result<T, DbError>;
