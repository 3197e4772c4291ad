use dioxus::prelude::*;

use crate::{use_auth, UpdateAvatarCard, UpdateEmailCard, UpdateNameCard};

/// Shared account settings view: the avatar, name, and email cards, seeded
/// from the session user.
#[component]
pub fn AccountView() -> Element {
    let auth = use_auth();
    let state = auth();

    if state.loading {
        return rsx! {
            div { class: "view-page", p { class: "form-help", "Loading..." } }
        };
    }

    let Some(user) = state.user else {
        return rsx! {
            div {
                class: "view-page",
                h1 { class: "view-title", "Account" }
                p { "You need to be signed in to manage your account." }
            }
        };
    };

    rsx! {
        document::Link { rel: "stylesheet", href: crate::LINKPAGE_CSS }
        div {
            class: "view-page",
            h1 { class: "view-title", "Account" }

            UpdateAvatarCard { avatar: user.avatar.clone().unwrap_or_default() }
            UpdateNameCard { name: user.name.clone().unwrap_or_default() }
            UpdateEmailCard { email: user.email.clone() }
        }
    }
}
