//! # API crate — shared fullstack server functions for Linkpage
//!
//! This crate defines every Dioxus server function the Linkpage frontends call,
//! along with the supporting modules they depend on.
//!
//! ## Modules
//!
//! | Module | Feature gate | Purpose |
//! |--------|-------------|---------|
//! | [`auth`] | — | Session key and data types; the session itself is established by an external collaborator |
//! | [`db`] | — | PostgreSQL connection pool (lazy `OnceCell` singleton) |
//! | [`models`] | — | Database models (`User`, `Page`, `PageLink`) and their client-safe projections |
//! | [`profile`] | — | The typed profile-update request, its outcome type, and pure field validation |
//!
//! ## Server functions exposed here
//!
//! Every public `async fn` in this file is a Dioxus server function, annotated with
//! `#[get(...)]` or `#[post(...)]` and compiled twice: once with full server logic
//! (behind `#[cfg(feature = "server")]`) and once as a thin client stub that simply
//! forwards the call over HTTP.
//!
//! - **Session**: `get_current_user`
//! - **Profile**: `update_user`
//! - **Shared pages**: `get_page_by_slug`

use dioxus::prelude::*;

pub mod auth;
pub mod db;
pub mod models;
pub mod profile;

pub use models::{PageInfo, PageLinkInfo, SharedPage, UserInfo};
pub use profile::{ProfileUpdate, UpdateOutcome};

/// Get the current authenticated user from the session.
#[cfg(feature = "server")]
#[get("/api/auth/me", session: tower_sessions::Session)]
pub async fn get_current_user() -> Result<Option<UserInfo>, ServerFnError> {
    use crate::db::get_pool;
    use crate::models::User;

    let user_id: Option<String> = session
        .get(auth::SESSION_USER_ID_KEY)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let Some(user_id) = user_id else {
        return Ok(None);
    };

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let user_uuid = uuid::Uuid::parse_str(&user_id)
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let user: Option<User> = sqlx::query_as("SELECT * FROM users WHERE id = $1")
        .bind(user_uuid)
        .fetch_optional(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(user.map(|u| u.to_info()))
}

#[cfg(not(feature = "server"))]
#[get("/api/auth/me")]
pub async fn get_current_user() -> Result<Option<UserInfo>, ServerFnError> {
    Ok(None)
}

/// Update the current user's profile.
///
/// Field validation failures come back as a structured
/// `UpdateOutcome { success: false, error: Some(..) }` so the client can show the
/// message verbatim; infrastructure failures (no session, database down) surface as
/// `ServerFnError` and the client treats them as unexpected.
#[cfg(feature = "server")]
#[post("/api/users/update", session: tower_sessions::Session)]
pub async fn update_user(update: ProfileUpdate) -> Result<UpdateOutcome, ServerFnError> {
    use crate::db::get_pool;

    let user_id: Option<String> = session
        .get(auth::SESSION_USER_ID_KEY)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let Some(user_id) = user_id else {
        return Err(ServerFnError::new("Not authenticated"));
    };

    let user_uuid = uuid::Uuid::parse_str(&user_id)
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    if let Err(msg) = profile::validate_profile_update(&update) {
        return Ok(UpdateOutcome::failure(msg));
    }

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let name = update.name.map(|n| n.trim().to_string());
    let email = update.email.map(|e| e.trim().to_lowercase());

    let result = sqlx::query(
        "UPDATE users SET
            name = COALESCE($2, name),
            email = COALESCE($3, email),
            avatar = COALESCE($4, avatar),
            updated_at = now()
         WHERE id = $1",
    )
    .bind(user_uuid)
    .bind(&name)
    .bind(&email)
    .bind(&update.avatar)
    .execute(pool)
    .await;

    match result {
        Ok(_) => Ok(UpdateOutcome::success()),
        Err(sqlx::Error::Database(db)) if db.is_unique_violation() => {
            Ok(UpdateOutcome::failure("That email is already in use"))
        }
        Err(e) => Err(ServerFnError::new(e.to_string())),
    }
}

#[cfg(not(feature = "server"))]
#[post("/api/users/update")]
pub async fn update_user(update: ProfileUpdate) -> Result<UpdateOutcome, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Look up a shared page by its public slug, with its links and owner profile.
///
/// Returns `Ok(None)` when no page has the slug. Non-public pages come back as a
/// blank marker (`public == false`, no page content, no links, no owner details),
/// so nothing private leaks to the anonymous viewer.
#[cfg(feature = "server")]
#[get("/api/pages/:slug")]
pub async fn get_page_by_slug(slug: String) -> Result<Option<SharedPage>, ServerFnError> {
    use crate::db::get_pool;
    use crate::models::{Page, PageLink, User};

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let page: Option<Page> = sqlx::query_as("SELECT * FROM pages WHERE slug = $1")
        .bind(&slug)
        .fetch_optional(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let Some(page) = page else {
        return Ok(None);
    };

    if !page.public {
        return Ok(Some(SharedPage {
            page: PageInfo::not_public(&page.slug),
            links: Vec::new(),
            owner_name: String::new(),
            owner_avatar: None,
        }));
    }

    let links: Vec<PageLink> =
        sqlx::query_as("SELECT * FROM page_links WHERE page_id = $1 ORDER BY position, id")
            .bind(page.id)
            .fetch_all(pool)
            .await
            .map_err(|e| ServerFnError::new(e.to_string()))?;

    let owner: Option<User> = sqlx::query_as("SELECT * FROM users WHERE id = $1")
        .bind(page.user_id)
        .fetch_optional(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let (owner_name, owner_avatar) = match owner {
        Some(user) => (user.to_info().display_name().to_string(), user.avatar),
        None => (String::new(), None),
    };

    Ok(Some(SharedPage {
        page: page.to_info(),
        links: links.into_iter().map(|l| l.to_info()).collect(),
        owner_name,
        owner_avatar,
    }))
}

#[cfg(not(feature = "server"))]
#[get("/api/pages/:slug")]
pub async fn get_page_by_slug(slug: String) -> Result<Option<SharedPage>, ServerFnError> {
    Ok(None)
}
