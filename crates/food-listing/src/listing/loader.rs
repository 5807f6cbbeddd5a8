//! Listing Orchestrator
//!
//! Runs one load cycle: plan, fetch, reconcile, and package an immutable
//! snapshot. Every cycle takes a generation token up front so the caller
//! can drop results that a newer cycle has superseded.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::NaiveDateTime;
use futures::future::join_all;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::enrich::enrich_orders;
use super::plan::{plan, Filter, QueryPlan};
use super::view_model::{from_food, from_order, UnifiedListItem};
use crate::api::MarketplaceApi;
use crate::domain::{now_local, FoodRecord, OrderStatus, Session, UiStatus};
use crate::error::ApiResult;

/// Identifies one load cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct LoadToken(u64);

/// Monotonic counter of issued load cycles, shared by clones
#[derive(Debug, Clone, Default)]
pub struct LoadGenerations {
    latest: Arc<AtomicU64>,
}

impl LoadGenerations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new cycle, superseding all earlier ones
    pub fn begin(&self) -> LoadToken {
        LoadToken(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_current(&self, token: LoadToken) -> bool {
        self.latest.load(Ordering::SeqCst) == token.0
    }
}

/// Item counts shown on the filter badges
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterCounts {
    pub all: usize,
    pub available: usize,
    pub reserved: usize,
    pub delivered: usize,
    pub expired: usize,
}

impl FilterCounts {
    pub fn tally(items: &[UnifiedListItem]) -> Self {
        let mut counts = FilterCounts { all: items.len(), ..Default::default() };
        for item in items {
            match item.status {
                UiStatus::Available => counts.available += 1,
                UiStatus::Reserved => counts.reserved += 1,
                UiStatus::Delivered => counts.delivered += 1,
                UiStatus::Expired => counts.expired += 1,
            }
        }
        counts
    }

    pub fn get(&self, filter: Filter) -> usize {
        match filter {
            Filter::All => self.all,
            Filter::Available => self.available,
            Filter::Reserved => self.reserved,
            Filter::Delivered => self.delivered,
            Filter::Expired => self.expired,
        }
    }
}

/// Result of one load cycle
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ListingSnapshot {
    pub token: LoadToken,
    pub filter: Filter,
    pub keyword: Option<String>,
    pub items: Vec<UnifiedListItem>,
    pub counts: FilterCounts,
    /// User-facing message when the cycle failed
    pub error: Option<String>,
}

impl ListingSnapshot {
    pub fn is_search(&self) -> bool {
        self.keyword.is_some()
    }
}

/// Load-cycle driver over any [`MarketplaceApi`]
pub struct ListingLoader<A> {
    api: A,
    generations: LoadGenerations,
}

impl<A: MarketplaceApi> ListingLoader<A> {
    pub fn new(api: A) -> Self {
        Self { api, generations: LoadGenerations::new() }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn generations(&self) -> &LoadGenerations {
        &self.generations
    }

    /// Run a full load cycle. Never fails: errors end up in the snapshot.
    pub async fn load(&self, session: &Session, filter: Filter, keyword: Option<&str>) -> ListingSnapshot {
        let token = self.generations.begin();
        let query = plan(filter, keyword, session.role());
        debug!(?token, ?query, role = session.role().as_str(), "starting listing load");

        let now = now_local();
        let result = self.execute(&query, session, now).await;

        let keyword = match query {
            QueryPlan::Search(keyword) => Some(keyword),
            _ => None,
        };
        Self::finish(token, filter, keyword, result)
    }

    async fn execute(&self, query: &QueryPlan, session: &Session, now: NaiveDateTime) -> ApiResult<Vec<UnifiedListItem>> {
        match query {
            QueryPlan::Search(keyword) => Ok(food_items(self.api.search_food(keyword).await?, now)),
            QueryPlan::AvailableFood => self.available_items(now).await,
            QueryPlan::HotelFood(status) => {
                let Some(hotel_id) = self.resolve_hotel(session).await else {
                    return self.available_items(now).await;
                };
                let foods = self.api.get_food_by_hotel_and_status(hotel_id, *status).await?;
                Ok(food_items(foods, now))
            }
            QueryPlan::CharityOrders { statuses, include_available } => {
                let Some(charity_id) = self.resolve_charity(session).await else {
                    return self.available_items(now).await;
                };

                let batches = join_all(
                    statuses.iter().map(|status| self.order_items(charity_id, *status, now)),
                )
                .await;
                let mut items = Vec::new();
                for batch in batches {
                    items.extend(batch?);
                }
                if *include_available {
                    items.extend(self.available_items(now).await?);
                }
                Ok(items)
            }
        }
    }

    async fn available_items(&self, now: NaiveDateTime) -> ApiResult<Vec<UnifiedListItem>> {
        Ok(food_items(self.api.get_all_available_food().await?, now))
    }

    async fn order_items(&self, charity_id: u64, status: OrderStatus, now: NaiveDateTime) -> ApiResult<Vec<UnifiedListItem>> {
        let orders = self.api.get_orders_by_charity_and_status(charity_id, status).await?;
        let enriched = enrich_orders(&self.api, orders).await;
        Ok(enriched
            .iter()
            .filter_map(|order| {
                let item = from_order(order, now);
                if item.is_none() {
                    warn!(order_id = order.order.id, "skipping order without a food reference");
                }
                item
            })
            .collect())
    }

    /// Charity profile of the session user. Any failure degrades the cycle
    /// to available food only.
    async fn resolve_charity(&self, session: &Session) -> Option<u64> {
        let user_id = session.user_id()?;
        match self.api.get_charity_by_user_id(user_id).await {
            Ok(profile) => Some(profile.id),
            Err(err) => {
                warn!(user_id, %err, "no charity profile, showing available food only");
                None
            }
        }
    }

    /// Hotel profile of the session user, same degrade policy as charities
    async fn resolve_hotel(&self, session: &Session) -> Option<u64> {
        let user_id = session.user_id()?;
        match self.api.get_hotel_by_user_id(user_id).await {
            Ok(profile) => Some(profile.id),
            Err(err) => {
                warn!(user_id, %err, "no hotel profile, showing available food only");
                None
            }
        }
    }

    fn finish(
        token: LoadToken,
        filter: Filter,
        keyword: Option<String>,
        result: ApiResult<Vec<UnifiedListItem>>,
    ) -> ListingSnapshot {
        let (items, error) = match result {
            Ok(items) => (items, None),
            Err(err) => {
                warn!(?token, %err, "listing load failed");
                (Vec::new(), Some(format!("Could not load food listings: {}", err)))
            }
        };
        let counts = FilterCounts::tally(&items);
        info!(?token, items = counts.all, failed = error.is_some(), "listing load finished");

        ListingSnapshot { token, filter, keyword, items, counts, error }
    }
}

fn food_items(foods: Vec<FoodRecord>, now: NaiveDateTime) -> Vec<UnifiedListItem> {
    foods.iter().map(|food| from_food(food, now)).collect()
}
