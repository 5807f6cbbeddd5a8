//! Main Application Component
//!
//! Root component that wires the listing engine to the page.

use food_listing::{HttpApi, ListingLoader};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;
use tracing::info;

use crate::components::{FilterBar, FoodList, SearchBar};
use crate::config::load_config;
use crate::context::AppContext;
use crate::session::load_session;
use crate::store::{store_accept_snapshot, ListingState, ListingStateStoreFields};

/// Main application component
#[component]
pub fn App() -> impl IntoView {
    let config = load_config();
    let session = load_session();
    info!(
        role = session.role().as_str(),
        logged_in = session.is_logged_in(),
        base_url = %config.api_base_url,
        "listing page starting"
    );

    let refresh_ms = u32::try_from(config.refresh_interval().as_millis()).unwrap_or(u32::MAX);
    let loader = ListingLoader::new(HttpApi::new(&config, &session));

    let ctx = AppContext::new(loader, session, config, signal(0u32));
    provide_context(ctx);

    let store = Store::new(ListingState::default());
    provide_context(store);

    // Reload whenever the filter, keyword or reload trigger changes
    Effect::new(move |_| {
        ctx.reload_trigger.track();
        let filter = store.filter().get();
        let keyword = store.keyword().get();

        let loader = ctx.loader();
        let session = ctx.session();
        spawn_local(async move {
            let snapshot = loader.load(&session, filter, keyword.as_deref()).await;
            let is_current = loader.generations().is_current(snapshot.token);
            store_accept_snapshot(&store, snapshot, is_current);
        });
    });

    // Periodic refresh for the time-left labels and new donations
    spawn_local(async move {
        loop {
            TimeoutFuture::new(refresh_ms).await;
            ctx.reload();
        }
    });

    view! {
        <main class="food-available-page">
            <section class="page-header">
                <h1>"الطعام المتاح"</h1>
                <p>"تبرعات الطعام من الفنادق والمطاعم"</p>
            </section>
            <div class="controls">
                <SearchBar />
                <FilterBar />
            </div>
            <FoodList />
        </main>
    }
}
