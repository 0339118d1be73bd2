//! Error taxonomy for the query gateway
//!
//! Zero matching rows is not an error: single-row lookups return
//! `Ok(None)` and list queries return an empty `Vec`. Everything the store
//! rejects is either a constraint violation (the caller sent bad data) or a
//! transport failure (the store could not answer).

use sqlx::error::ErrorKind;
use thiserror::Error;

/// SQLSTATE `datatype_mismatch`
const DATATYPE_MISMATCH: &str = "42804";

/// SQLSTATE class prefix for `data_exception` (bad text representation,
/// numeric out of range, string too long, ...)
const DATA_EXCEPTION_CLASS: &str = "22";

/// Result alias for gateway operations
pub type DbResult<T> = Result<T, DbError>;

/// Database error type
#[derive(Debug, Error)]
pub enum DbError {
    /// The store refused the statement because of the data it carried.
    #[error("{violation} violation{}: {message}", constraint_suffix(.constraint))]
    Constraint {
        violation: Violation,
        constraint: Option<String>,
        message: String,
    },

    /// Connection, pool, protocol or decode failure.
    #[error("database error: {0}")]
    Transport(#[source] sqlx::Error),

    /// Connection settings could not be turned into connect options.
    #[error("configuration error: {reason}")]
    Config { reason: String },
}

fn constraint_suffix(constraint: &Option<String>) -> String {
    constraint
        .as_deref()
        .map(|name| format!(" on '{}'", name))
        .unwrap_or_default()
}

/// Kind of constraint the store enforced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    Unique,
    ForeignKey,
    NotNull,
    Check,
    /// Value could not be stored in the column type (class 22 / 42804).
    InvalidValue,
}

impl Violation {
    /// Classify a database-reported error, `None` if it is not caused by the
    /// submitted data.
    pub fn classify(kind: ErrorKind, code: Option<&str>) -> Option<Self> {
        match kind {
            ErrorKind::UniqueViolation => return Some(Self::Unique),
            ErrorKind::ForeignKeyViolation => return Some(Self::ForeignKey),
            ErrorKind::NotNullViolation => return Some(Self::NotNull),
            ErrorKind::CheckViolation => return Some(Self::Check),
            _ => {}
        }

        let code = code?;
        if code.starts_with(DATA_EXCEPTION_CLASS) || code == DATATYPE_MISMATCH {
            Some(Self::InvalidValue)
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unique => "unique",
            Self::ForeignKey => "foreign key",
            Self::NotNull => "not-null",
            Self::Check => "check",
            Self::InvalidValue => "invalid value",
        }
    }
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coarse error class for callers mapping failures onto responses
/// (constraint → 4xx, transport/config → 5xx).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    Constraint,
    Transport,
    Config,
}

impl DbError {
    /// Create a config error
    pub fn config(reason: impl Into<String>) -> Self {
        Self::Config {
            reason: reason.into(),
        }
    }

    pub fn class(&self) -> ErrorClass {
        match self {
            Self::Constraint { .. } => ErrorClass::Constraint,
            Self::Transport(_) => ErrorClass::Transport,
            Self::Config { .. } => ErrorClass::Config,
        }
    }

    /// True for duplicate-key failures such as registering a taken email.
    pub fn is_unique_violation(&self) -> bool {
        matches!(
            self,
            Self::Constraint {
                violation: Violation::Unique,
                ..
            }
        )
    }

    /// Emit the error at a level matching its class.
    pub(crate) fn trace(&self, operation: &'static str) {
        match self.class() {
            ErrorClass::Constraint => tracing::warn!(operation, error = %self, "statement rejected"),
            ErrorClass::Transport | ErrorClass::Config => {
                tracing::error!(operation, error = %self, "query failed")
            }
        }
    }
}

impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            let code = db_err.code();
            if let Some(violation) = Violation::classify(db_err.kind(), code.as_deref()) {
                return Self::Constraint {
                    violation,
                    constraint: db_err.constraint().map(str::to_owned),
                    message: db_err.message().to_owned(),
                };
            }
        }

        Self::Transport(err)
    }
}
