//! Startup-time admin seeding.
//!
//! The public registration endpoints only create client and franchisee
//! accounts, so the first admin has to come from somewhere. When
//! `ADMIN_EMAIL` and `ADMIN_PASSWORD` are both set, an admin account is
//! created at startup if that email is still free.

use renteria_core::roles::ROLE_ADMIN;
use renteria_db::models::user::CreateUser;
use renteria_db::repositories::UserRepo;
use renteria_db::DbPool;

use crate::auth::password::hash_password;
use crate::error::{AppError, AppResult};

/// Ensure the configured admin account exists. Idempotent; a no-op when the
/// env vars are absent or the email is already registered.
pub async fn ensure_admin(pool: &DbPool) -> AppResult<()> {
    let (Ok(email), Ok(password)) = (
        std::env::var("ADMIN_EMAIL"),
        std::env::var("ADMIN_PASSWORD"),
    ) else {
        tracing::debug!("ADMIN_EMAIL/ADMIN_PASSWORD not set, skipping admin bootstrap");
        return Ok(());
    };

    if UserRepo::find_by_email(pool, &email).await?.is_some() {
        tracing::debug!("Admin bootstrap: account already exists");
        return Ok(());
    }

    let password_hash = hash_password(&password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let user = UserRepo::create(
        pool,
        &CreateUser {
            email,
            password_hash,
            name: "Administrator".to_string(),
            role: ROLE_ADMIN,
        },
    )
    .await?;

    tracing::info!(user_id = user.id, "Admin account bootstrapped");
    Ok(())
}
