//! Transient toast notifications.
//!
//! The fire-and-forget notification surface used by the settings cards: a context
//! signal holding the visible stack, push helpers, and a host component that renders
//! the stack and removes each toast after a few seconds.

use dioxus::prelude::*;

const DISMISS_AFTER_SECS: u64 = 5;

#[derive(Clone, Debug, PartialEq)]
pub enum ToastLevel {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub level: ToastLevel,
    pub title: String,
    pub description: Option<String>,
}

/// The visible toast stack. Pure so the push/dismiss logic is testable
/// without a renderer.
#[derive(Clone, Debug, Default)]
pub struct Toasts {
    pub entries: Vec<Toast>,
    next_id: u64,
}

impl Toasts {
    /// Add a toast and return its id.
    pub fn push(&mut self, level: ToastLevel, title: &str, description: Option<&str>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.entries.push(Toast {
            id,
            level,
            title: title.to_string(),
            description: description.map(str::to_string),
        });
        id
    }

    /// Remove a toast by id. Ignores ids that were already dismissed.
    pub fn dismiss(&mut self, id: u64) {
        self.entries.retain(|t| t.id != id);
    }
}

/// Get the toast stack signal.
pub fn use_toasts() -> Signal<Toasts> {
    use_context::<Signal<Toasts>>()
}

/// Push a toast and schedule its auto-dismiss.
pub fn show_toast(
    mut toasts: Signal<Toasts>,
    level: ToastLevel,
    title: &str,
    description: Option<&str>,
) {
    let id = toasts.write().push(level, title, description);
    spawn(async move {
        sleep_secs(DISMISS_AFTER_SECS).await;
        toasts.write().dismiss(id);
    });
}

#[cfg(target_arch = "wasm32")]
async fn sleep_secs(secs: u64) {
    gloo_timers::future::sleep(std::time::Duration::from_secs(secs)).await;
}

#[cfg(not(target_arch = "wasm32"))]
async fn sleep_secs(secs: u64) {
    tokio::time::sleep(std::time::Duration::from_secs(secs)).await;
}

/// Provider component owning the toast stack.
/// Wrap your app with this component so cards can call [`show_toast`].
#[component]
pub fn ToastProvider(children: Element) -> Element {
    let toasts = use_signal(Toasts::default);
    use_context_provider(|| toasts);

    rsx! {
        {children}
        ToastHost {}
    }
}

/// Renders the visible toast stack in a fixed corner.
#[component]
pub fn ToastHost() -> Element {
    let mut toasts = use_toasts();

    rsx! {
        document::Link { rel: "stylesheet", href: crate::LINKPAGE_CSS }
        div {
            class: "toast-host",
            for toast in toasts().entries.iter().cloned() {
                div {
                    class: match toast.level {
                        ToastLevel::Success => "toast toast-success",
                        ToastLevel::Error => "toast toast-error",
                    },
                    div {
                        class: "toast-body",
                        span { class: "toast-title", "{toast.title}" }
                        if let Some(ref description) = toast.description {
                            span { class: "toast-description", "{description}" }
                        }
                    }
                    button {
                        class: "toast-dismiss",
                        onclick: move |_| toasts.write().dismiss(toast.id),
                        "×"
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
    fn test_push_assigns_increasing_ids() {
        let mut toasts = Toasts::default();
        let a = toasts.push(ToastLevel::Success, "Saved", None);
        let b = toasts.push(ToastLevel::Error, "Error", Some("boom"));
        assert!(b > a);
        assert_eq!(toasts.entries.len(), 2);
    }

    #[test]
    fn test_dismiss_removes_only_matching_toast() {
        let mut toasts = Toasts::default();
        let a = toasts.push(ToastLevel::Success, "One", None);
        let b = toasts.push(ToastLevel::Success, "Two", None);
        toasts.dismiss(a);
        assert_eq!(toasts.entries.len(), 1);
        assert_eq!(toasts.entries[0].id, b);

        // Dismissing twice is harmless.
        toasts.dismiss(a);
        assert_eq!(toasts.entries.len(), 1);
    }
}
