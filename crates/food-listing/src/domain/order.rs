//! Order Entity
//!
//! A charity's reservation of a food listing. Orders reference their food
//! by `foodId` or by an embedded `food` object, and may or may not carry
//! copies of the food's descriptive fields.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::date::{normalize, RawDate};
use super::food::FoodRecord;
use super::status::{map_order_status, OrderStatus, UiStatus};

/// Order record (read-only to this client)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRecord {
    #[serde(alias = "orderId")]
    pub id: u64,
    #[serde(default)]
    pub food_id: Option<u64>,
    #[serde(default)]
    pub food: Option<FoodRecord>,
    #[serde(default)]
    pub charity_id: Option<u64>,
    #[serde(default)]
    pub charity_name: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub pickup_time: Option<RawDate>,

    // Embedded food metadata, present on some endpoints only
    #[serde(default, alias = "title")]
    pub food_title: Option<String>,
    #[serde(default)]
    pub hotel_name: Option<String>,
    #[serde(default)]
    pub hotel_address: Option<String>,
    #[serde(default)]
    pub hotel_phone: Option<String>,
    #[serde(default)]
    pub quantity: Option<i64>,
}

impl OrderRecord {
    /// The referenced food id, from `foodId` or the embedded food object
    pub fn food_ref(&self) -> Option<u64> {
        self.food_id.or_else(|| self.food.as_ref().map(|food| food.id))
    }

    pub fn lifecycle(&self) -> Option<OrderStatus> {
        self.status.as_deref().and_then(OrderStatus::parse)
    }

    pub fn ui_status(&self) -> UiStatus {
        map_order_status(self.status.as_deref())
    }

    pub fn pickup(&self) -> Option<NaiveDateTime> {
        normalize(self.pickup_time.as_ref())
    }

    /// Fill absent metadata from `food`. Populated fields are never touched.
    pub fn backfill_from(&mut self, food: &FoodRecord) {
        fill(&mut self.food_title, &food.title);
        fill(&mut self.hotel_name, &food.hotel_name);
        fill(&mut self.hotel_address, &food.hotel_address);
        fill(&mut self.hotel_phone, &food.hotel_phone);
        fill(&mut self.quantity, &food.quantity);
    }
}

fn fill<T: Clone>(slot: &mut Option<T>, source: &Option<T>) {
    if slot.is_none() {
        slot.clone_from(source);
    }
}

/// An order after the enrichment join, with the fetched food kept for fallback
#[derive(Debug, Clone, PartialEq)]
pub struct EnrichedOrder {
    pub order: OrderRecord,
    pub food: Option<FoodRecord>,
}

impl EnrichedOrder {
    pub fn unenriched(order: OrderRecord) -> Self {
        Self { order, food: None }
    }

    /// Fetched food first, embedded food second
    pub fn food_details(&self) -> Option<&FoodRecord> {
        self.food.as_ref().or(self.order.food.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_food_ref_from_id_or_embedded() {
        let by_id: OrderRecord = serde_json::from_str(r#"{"id": 1, "foodId": 9}"#).unwrap();
        assert_eq!(by_id.food_ref(), Some(9));

        let embedded: OrderRecord = serde_json::from_str(r#"{"orderId": 2, "food": {"id": 11}}"#).unwrap();
        assert_eq!(embedded.id, 2);
        assert_eq!(embedded.food_ref(), Some(11));

        let dangling: OrderRecord = serde_json::from_str(r#"{"id": 3}"#).unwrap();
        assert_eq!(dangling.food_ref(), None);
    }

    #[test]
    fn test_backfill_keeps_present_fields() {
        let mut order = OrderRecord {
            id: 1,
            food_id: Some(5),
            food_title: Some("Order title".to_string()),
            ..Default::default()
        };
        let food = FoodRecord {
            id: 5,
            title: Some("Food title".to_string()),
            hotel_name: Some("Hotel".to_string()),
            quantity: Some(12),
            ..Default::default()
        };

        order.backfill_from(&food);
        assert_eq!(order.food_title.as_deref(), Some("Order title"));
        assert_eq!(order.hotel_name.as_deref(), Some("Hotel"));
        assert_eq!(order.quantity, Some(12));
        assert_eq!(order.hotel_phone, None);

        let once = order.clone();
        order.backfill_from(&food);
        assert_eq!(order, once);
    }

    #[test]
    fn test_lifecycle() {
        let order: OrderRecord = serde_json::from_str(r#"{"id": 1, "status": "PICKED_UP"}"#).unwrap();
        assert_eq!(order.lifecycle(), Some(OrderStatus::PickedUp));
        assert_eq!(order.ui_status(), UiStatus::Delivered);
    }
}
