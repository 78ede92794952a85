use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use renteria_core::error::CoreError;
use renteria_db::repositories::{GuardError, TagError};
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `renteria_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

/// The duplicate-name guard speaks the same conflict language as the domain.
impl From<GuardError> for AppError {
    fn from(err: GuardError) -> Self {
        match err {
            GuardError::Duplicate {
                entity,
                field,
                value,
            } => AppError::Core(CoreError::Duplicate {
                entity,
                field,
                value,
            }),
            GuardError::Database(db) => AppError::Database(db),
        }
    }
}

/// Tag-association failures map onto the domain taxonomy.
impl From<TagError> for AppError {
    fn from(err: TagError) -> Self {
        match err {
            TagError::TargetNotFound { entity, id } => {
                AppError::Core(CoreError::NotFound { entity, id })
            }
            TagError::UnknownTags(ids) => AppError::Core(CoreError::UnknownTags(ids)),
            TagError::NotAssociated { tag_id } => {
                AppError::Core(CoreError::NotAssociated { tag_id })
            }
            TagError::Database(db) => AppError::Database(db),
        }
    }
}

/// DTO validation failures surface as 400 with the validator's message.
impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::Core(CoreError::Validation(err.to_string()))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} with id {id} not found"),
                ),
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                CoreError::Duplicate { .. } => {
                    (StatusCode::CONFLICT, "CONFLICT", core.to_string())
                }
                CoreError::UnknownTags(ids) => (
                    StatusCode::BAD_REQUEST,
                    "UNKNOWN_TAGS",
                    format!("Unknown tag ids: {ids:?}"),
                ),
                CoreError::NotAssociated { tag_id } => (
                    StatusCode::BAD_REQUEST,
                    "NOT_ASSOCIATED",
                    format!("Tag {tag_id} is not associated with the target"),
                ),
                CoreError::Unauthorized(msg) => {
                    (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg.clone())
                }
                CoreError::Forbidden(msg) => (StatusCode::FORBIDDEN, "FORBIDDEN", msg.clone()),
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "INTERNAL_ERROR",
                        "An internal error occurred".to_string(),
                    )
                }
            },

            // --- Database errors ---
            AppError::Database(err) => classify_sqlx_error(err),

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Classify a sqlx error into an HTTP status, error code, and message.
///
/// - `RowNotFound` maps to 404.
/// - Unique constraint violations (constraint name starting with `uq_`) map
///   to 409: a writer that raced past the duplicate-name guard still gets
///   the same conflict answer.
/// - Foreign-key violations map to 400 (the request named a missing row).
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Resource not found".to_string(),
        ),
        sqlx::Error::Database(db_err) => {
            // PostgreSQL unique constraint violation: error code 23505
            if db_err.code().as_deref() == Some("23505") {
                let constraint = db_err.constraint().unwrap_or("unknown");
                if constraint.starts_with("uq_") {
                    return (
                        StatusCode::CONFLICT,
                        "CONFLICT",
                        format!("Duplicate value violates unique constraint: {constraint}"),
                    );
                }
            }
            // Foreign-key violation: error code 23503
            if db_err.code().as_deref() == Some("23503") {
                return (
                    StatusCode::BAD_REQUEST,
                    "INVALID_REFERENCE",
                    "A referenced row does not exist".to_string(),
                );
            }
            tracing::error!(error = %db_err, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            )
        }
        other => {
            tracing::error!(error = %other, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(err: AppError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn core_errors_map_to_expected_statuses() {
        assert_eq!(
            status_of(AppError::Core(CoreError::NotFound { entity: "Category", id: 9 })),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_of(AppError::Core(CoreError::Duplicate {
                entity: "Tag",
                field: "name",
                value: "4x4".into(),
            })),
            StatusCode::CONFLICT
        );
        assert_eq!(
            status_of(AppError::Core(CoreError::UnknownTags(vec![2]))),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(AppError::Core(CoreError::NotAssociated { tag_id: 3 })),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(AppError::Core(CoreError::Forbidden("nope".into()))),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            status_of(AppError::Core(CoreError::Unauthorized("who".into()))),
            StatusCode::UNAUTHORIZED
        );
    }

    #[test]
    fn guard_duplicate_becomes_conflict() {
        let err = GuardError::Duplicate {
            entity: "Store",
            field: "name",
            value: "Downtown".into(),
        };
        assert_eq!(status_of(AppError::from(err)), StatusCode::CONFLICT);
    }

    #[test]
    fn tag_errors_become_domain_errors() {
        assert_eq!(
            status_of(AppError::from(TagError::UnknownTags(vec![7, 8]))),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(AppError::from(TagError::TargetNotFound { entity: "Model", id: 1 })),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_of(AppError::from(TagError::NotAssociated { tag_id: 5 })),
            StatusCode::BAD_REQUEST
        );
    }
}
