use dioxus::prelude::*;

/// Public "link in bio" page for a slug: owner avatar and name, the page
/// description, and the saved links.
#[component]
pub fn SharePageView(slug: String) -> Element {
    let page = use_resource(move || {
        let slug = slug.clone();
        async move { api::get_page_by_slug(slug).await }
    });

    let body = match &*page.read_unchecked() {
        None => rsx! {
            p { class: "share-status", "Loading..." }
        },
        Some(Err(e)) => {
            tracing::error!("failed to load shared page: {e}");
            rsx! {
                p { class: "share-status", "Something went wrong. Please try again." }
            }
        }
        Some(Ok(None)) => rsx! {
            p { class: "share-status", "Page not found" }
        },
        Some(Ok(Some(shared))) if !shared.page.public => rsx! {
            p { class: "share-status", "This page is not public" }
        },
        Some(Ok(Some(shared))) => {
            let shared = shared.clone();
            rsx! {
                header {
                    class: "share-header",
                    div {
                        class: "share-avatar",
                        if let Some(ref avatar) = shared.owner_avatar {
                            img { src: "{avatar}", alt: "{shared.owner_name}" }
                        }
                    }
                    h1 { "{shared.page.name}" }
                    if let Some(ref description) = shared.page.description {
                        p { "{description}" }
                    }
                }
                nav {
                    class: "share-links",
                    for link in shared.links.iter() {
                        a {
                            key: "{link.id}",
                            class: "share-link",
                            href: "{link.url}",
                            span { "{link.title}" }
                        }
                    }
                }
            }
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: crate::LINKPAGE_CSS }
        main {
            class: "share-page",
            {body}
        }
    }
}
