//! Listing State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use food_listing::{Filter, ListingSnapshot};
use leptos::prelude::*;
use reactive_stores::Store;

/// Page state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct ListingState {
    /// Latest accepted load cycle; replaced wholesale, never patched
    pub snapshot: ListingSnapshot,
    /// Active filter button
    pub filter: Filter,
    /// Search keyword, `None` when not searching
    pub keyword: Option<String>,
}

/// Type alias for the store
pub type ListingStore = Store<ListingState>;

/// Get the listing store from context
pub fn use_listing_store() -> ListingStore {
    expect_context::<ListingStore>()
}

/// Replace the snapshot unless a newer load cycle has started since
pub fn store_accept_snapshot(store: &ListingStore, snapshot: ListingSnapshot, is_current: bool) {
    if is_current {
        store.snapshot().set(snapshot);
    } else {
        tracing::debug!(token = ?snapshot.token, "discarding stale listing snapshot");
    }
}

/// Switch filter button, leaving search mode
pub fn store_select_filter(store: &ListingStore, filter: Filter) {
    store.keyword().set(None);
    store.filter().set(filter);
}

/// Start or clear a search
pub fn store_search(store: &ListingStore, keyword: &str) {
    let keyword = keyword.trim();
    store
        .keyword()
        .set((!keyword.is_empty()).then(|| keyword.to_string()));
}
