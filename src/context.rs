//! Application Context
//!
//! Shared state provided via Leptos Context API.

use std::rc::Rc;

use food_listing::{HttpApi, ListingConfig, ListingLoader, Role, Session};
use leptos::prelude::*;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    loader: StoredValue<Rc<ListingLoader<HttpApi>>, LocalStorage>,
    session: StoredValue<Session>,
    config: StoredValue<ListingConfig>,
    /// Trigger to reload the listing from backend - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to reload the listing from backend - write
    set_reload_trigger: WriteSignal<u32>,
}

impl AppContext {
    pub fn new(
        loader: ListingLoader<HttpApi>,
        session: Session,
        config: ListingConfig,
        reload_trigger: (ReadSignal<u32>, WriteSignal<u32>),
    ) -> Self {
        Self {
            loader: StoredValue::new_local(Rc::new(loader)),
            session: StoredValue::new(session),
            config: StoredValue::new(config),
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
        }
    }

    pub fn loader(&self) -> Rc<ListingLoader<HttpApi>> {
        self.loader.get_value()
    }

    pub fn session(&self) -> Session {
        self.session.get_value()
    }

    pub fn role(&self) -> Role {
        self.session.with_value(Session::role)
    }

    pub fn reservation_notes(&self) -> String {
        self.config.with_value(|config| config.reservation_notes.clone())
    }

    /// Trigger a reload of the listing
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
