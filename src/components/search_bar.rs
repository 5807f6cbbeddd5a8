//! Search Bar Component

use leptos::prelude::*;

use crate::store::{store_search, use_listing_store};

/// Keyword search; an empty submit clears the search
#[component]
pub fn SearchBar() -> impl IntoView {
    let store = use_listing_store();
    let (text, set_text) = signal(String::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        store_search(&store, &text.get_untracked());
    };

    view! {
        <form class="search-box" on:submit=on_submit>
            <input
                type="search"
                id="searchInput"
                placeholder="ابحث عن طعام..."
                prop:value=move || text.get()
                on:input=move |ev| set_text.set(event_target_value(&ev))
            />
            <button type="submit" class="search-btn">
                <i class="fas fa-search"></i>
            </button>
        </form>
    }
}
