//! Food List Component
//!
//! Binds the rendered `ListingView` to `#foodList` and `#emptyState`.

use food_listing::{render, Filter, ListingView};
use leptos::prelude::*;

use super::FoodCardView;
use crate::context::use_app_context;
use crate::store::{use_listing_store, ListingStateStoreFields};

#[component]
pub fn FoodList() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_listing_store();
    let role = ctx.role();

    // Search results ignore the filter buttons
    let listing = Memo::new(move |_| {
        store.snapshot().with(|snapshot| {
            let filter = if snapshot.is_search() {
                Filter::All
            } else {
                store.filter().get()
            };
            render(&snapshot.items, role, filter)
        })
    });

    let error = move || store.snapshot().with(|snapshot| snapshot.error.clone());
    let show_empty = move || error().is_none() && listing.with(|view| *view == ListingView::Empty);

    view! {
        <div id="foodList" class="food-list">
            {move || match error() {
                Some(message) => view! { <p class="error-text">{message}</p> }.into_any(),
                None => view! {
                    <For
                        each=move || listing.with(|view| view.cards().to_vec())
                        key=|card| (card.id, card.order_id, card.status.clone(), card.time_left.clone())
                        children=move |card| view! { <FoodCardView card=card /> }
                    />
                }
                .into_any(),
            }}
        </div>
        <div
            id="emptyState"
            class="empty-state"
            style:display=move || if show_empty() { "block" } else { "none" }
        >
            <i class="fas fa-utensils"></i>
            <h3>"لا يوجد طعام في هذا القسم"</h3>
            <p>"جرّب فلتراً آخر أو عد لاحقاً"</p>
        </div>
    }
}
