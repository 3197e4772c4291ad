//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub const LINKPAGE_CSS: Asset = asset!("/assets/linkpage.css");

mod auth;
pub use auth::{use_auth, AuthProvider, AuthState};

mod toast;
pub use toast::{use_toasts, Toast, ToastHost, ToastLevel, ToastProvider, Toasts};

mod account;
pub use account::{AccountCard, AccountCardBody, AccountCardFooter, UpdateEmailCard, UpdateNameCard};

mod avatar;
pub use avatar::UpdateAvatarCard;

pub mod views;
