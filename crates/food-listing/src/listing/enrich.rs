//! Order Enrichment Join
//!
//! Orders often arrive without the food's description. Every order with a
//! food reference gets its own concurrent `get_food_by_id`; a failed fetch
//! leaves that one order unenriched.

use futures::future::join_all;
use tracing::warn;

use crate::api::MarketplaceApi;
use crate::domain::{EnrichedOrder, OrderRecord};

/// Backfill absent order metadata from the referenced food records.
/// Output has the input's length and order.
pub async fn enrich_orders<A>(api: &A, orders: Vec<OrderRecord>) -> Vec<EnrichedOrder>
where
    A: MarketplaceApi + ?Sized,
{
    join_all(orders.into_iter().map(|order| enrich_one(api, order))).await
}

async fn enrich_one<A>(api: &A, mut order: OrderRecord) -> EnrichedOrder
where
    A: MarketplaceApi + ?Sized,
{
    let Some(food_id) = order.food_ref() else {
        return EnrichedOrder::unenriched(order);
    };

    match api.get_food_by_id(food_id).await {
        Ok(food) => {
            order.backfill_from(&food);
            EnrichedOrder { order, food: Some(food) }
        }
        Err(err) => {
            warn!(order_id = order.id, food_id, %err, "could not enrich order");
            EnrichedOrder::unenriched(order)
        }
    }
}
