use dioxus::prelude::*;

use ui::views::AccountView;

#[component]
pub fn Account() -> Element {
    rsx! {
        AccountView {}
    }
}
