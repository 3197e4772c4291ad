use dioxus::prelude::*;

use ui::views::SharePageView;

#[component]
pub fn Share(slug: String) -> Element {
    rsx! {
        SharePageView { slug }
    }
}
