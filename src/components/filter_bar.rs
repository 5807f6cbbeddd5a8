//! Filter Bar Component
//!
//! One button per filter with the count from the last load cycle.

use food_listing::Filter;
use leptos::prelude::*;

use crate::store::{store_select_filter, use_listing_store, ListingStateStoreFields};

fn filter_label(filter: Filter) -> &'static str {
    match filter {
        Filter::All => "الكل",
        Filter::Available => "متاح",
        Filter::Reserved => "محجوز",
        Filter::Delivered => "تم التوزيع",
        Filter::Expired => "منتهي الصلاحية",
    }
}

/// Filter buttons (`data-filter` attribute per button)
#[component]
pub fn FilterBar() -> impl IntoView {
    let store = use_listing_store();

    view! {
        <div class="filter-buttons">
            {Filter::ALL
                .into_iter()
                .map(|filter| {
                    let button_class = move || {
                        if store.filter().get() == filter && store.keyword().with(Option::is_none) {
                            "filter-btn active"
                        } else {
                            "filter-btn"
                        }
                    };
                    let count = move || store.snapshot().with(|snapshot| snapshot.counts.get(filter));

                    view! {
                        <button
                            class=button_class
                            data-filter=filter.as_str()
                            on:click=move |_| store_select_filter(&store, filter)
                        >
                            {filter_label(filter)}
                            " "
                            <span class="filter-count">{count}</span>
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
