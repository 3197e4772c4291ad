//! Account settings cards: shared card scaffolding plus the one-field
//! name and email forms. The avatar card lives in [`crate::avatar`].

use api::{ProfileUpdate, UpdateOutcome};
use dioxus::prelude::*;

use crate::toast::{show_toast, ToastLevel, Toasts};
use crate::use_toasts;

/// Card shell with a header and description; the body and footer come in
/// as children (usually wrapped in a `form`).
#[component]
pub fn AccountCard(header: String, description: String, children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: crate::LINKPAGE_CSS }
        div {
            class: "account-card",
            div {
                class: "account-card-header",
                h2 { "{header}" }
                p { "{description}" }
            }
            {children}
        }
    }
}

#[component]
pub fn AccountCardBody(children: Element) -> Element {
    rsx! {
        div {
            class: "account-card-body",
            {children}
        }
    }
}

#[component]
pub fn AccountCardFooter(#[props(default)] description: String, children: Element) -> Element {
    rsx! {
        div {
            class: "account-card-footer",
            if !description.is_empty() {
                p { class: "form-help", "{description}" }
            }
            {children}
        }
    }
}

/// Map a remote update result onto the toast surface.
///
/// A structured server error message is shown verbatim; a transport or otherwise
/// unexpected failure gets the generic message. Local form state is never touched
/// here, so the user can retry after any error.
pub(crate) fn outcome_feedback(
    toasts: Signal<Toasts>,
    result: Result<UpdateOutcome, ServerFnError>,
    success_title: &str,
) {
    let (level, title, description) = feedback_message(result, success_title);
    show_toast(toasts, level, &title, description.as_deref());
}

pub(crate) fn feedback_message(
    result: Result<UpdateOutcome, ServerFnError>,
    success_title: &str,
) -> (ToastLevel, String, Option<String>) {
    match result {
        Ok(outcome) if outcome.success => (ToastLevel::Success, success_title.to_string(), None),
        Ok(outcome) => (
            ToastLevel::Error,
            "Error".to_string(),
            Some(
                outcome
                    .error
                    .unwrap_or_else(|| "An unexpected error occurred".to_string()),
            ),
        ),
        Err(_) => (
            ToastLevel::Error,
            "Error".to_string(),
            Some("An unexpected error occurred".to_string()),
        ),
    }
}

/// One-field card for updating the display name.
#[component]
pub fn UpdateNameCard(name: String) -> Element {
    let mut value = use_signal(move || name.clone());
    let mut saving = use_signal(|| false);
    let toasts = use_toasts();

    let handle_submit = move |_: FormEvent| {
        if saving() {
            return;
        }
        saving.set(true);
        spawn(async move {
            let update = ProfileUpdate {
                name: Some(value()),
                ..Default::default()
            };
            let result = api::update_user(update).await;
            outcome_feedback(toasts, result, "Updated Name");
            saving.set(false);
        });
    };

    rsx! {
        AccountCard {
            header: "Name",
            description: "Your name is displayed on your public page.",
            form {
                onsubmit: handle_submit,
                AccountCardBody {
                    input {
                        r#type: "text",
                        name: "name",
                        value: value(),
                        oninput: move |evt: FormEvent| value.set(evt.value()),
                    }
                }
                AccountCardFooter {
                    button {
                        r#type: "submit",
                        class: "primary",
                        disabled: saving() || value().trim().is_empty(),
                        if saving() { "Saving..." } else { "Update Name" }
                    }
                }
            }
        }
    }
}

/// One-field card for updating the account email.
#[component]
pub fn UpdateEmailCard(email: String) -> Element {
    let mut value = use_signal(move || email.clone());
    let mut saving = use_signal(|| false);
    let toasts = use_toasts();

    let handle_submit = move |_: FormEvent| {
        if saving() {
            return;
        }
        saving.set(true);
        spawn(async move {
            let update = ProfileUpdate {
                email: Some(value()),
                ..Default::default()
            };
            let result = api::update_user(update).await;
            outcome_feedback(toasts, result, "Updated Email");
            saving.set(false);
        });
    };

    rsx! {
        AccountCard {
            header: "Email",
            description: "The email address associated with your account.",
            form {
                onsubmit: handle_submit,
                AccountCardBody {
                    input {
                        r#type: "email",
                        name: "email",
                        value: value(),
                        oninput: move |evt: FormEvent| value.set(evt.value()),
                    }
                }
                AccountCardFooter {
                    button {
                        r#type: "submit",
                        class: "primary",
                        disabled: saving() || value().trim().is_empty(),
                        if saving() { "Saving..." } else { "Update Email" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_outcome_is_success_toast() {
        let (level, title, description) =
            feedback_message(Ok(UpdateOutcome::success()), "Updated Profile Picture");
        assert_eq!(level, ToastLevel::Success);
        assert_eq!(title, "Updated Profile Picture");
        assert!(description.is_none());
    }

    #[test]
    fn test_structured_error_is_shown_verbatim() {
        let (level, _, description) =
            feedback_message(Ok(UpdateOutcome::failure("X")), "Updated Name");
        assert_eq!(level, ToastLevel::Error);
        assert_eq!(description.as_deref(), Some("X"));
    }

    #[test]
    fn test_transport_failure_is_generic() {
        let (level, _, description) =
            feedback_message(Err(ServerFnError::new("connection reset")), "Updated Name");
        assert_eq!(level, ToastLevel::Error);
        assert_eq!(description.as_deref(), Some("An unexpected error occurred"));
    }
}
