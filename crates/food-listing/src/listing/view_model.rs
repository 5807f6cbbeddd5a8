//! View Model Builder
//!
//! Maps raw food records and enriched orders into the single card shape the
//! renderer consumes. Every absent field gets a placeholder.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::{format_display, time_remaining, EnrichedOrder, FoodRecord, OrderStatus, UiStatus};

pub const NO_TITLE: &str = "No title";
pub const NOT_SPECIFIED: &str = "Not specified";
pub const NO_VALUE: &str = "—";

/// One card on the listing, rebuilt on every load
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnifiedListItem {
    /// Food id
    pub id: u64,
    /// Present only for items built from an order
    pub order_id: Option<u64>,
    pub name: String,
    pub category: String,
    pub quantity: String,
    pub location: String,
    pub donor_name: String,
    pub donor_phone: String,
    pub expiry: String,
    pub time_left: String,
    pub status: UiStatus,
    pub reserved_by: Option<String>,
}

fn quantity_label(quantity: Option<i64>) -> String {
    quantity
        .map(|n| format!("{} meals", n))
        .unwrap_or_else(|| NOT_SPECIFIED.to_string())
}

fn expiry_label(value: Option<NaiveDateTime>) -> String {
    value.map(format_display).unwrap_or_else(|| NOT_SPECIFIED.to_string())
}

fn or_placeholder(value: Option<&String>, placeholder: &str) -> String {
    value
        .filter(|v| !v.trim().is_empty())
        .cloned()
        .unwrap_or_else(|| placeholder.to_string())
}

/// The order's own value unless blank, else the food's
fn first_present<'a>(own: Option<&'a String>, fallback: Option<&'a String>) -> Option<&'a String> {
    own.filter(|v| !v.trim().is_empty()).or(fallback)
}

/// Build a card from a food record
pub fn from_food(food: &FoodRecord, now: NaiveDateTime) -> UnifiedListItem {
    let deadline = food.deadline();

    UnifiedListItem {
        id: food.id,
        order_id: None,
        name: or_placeholder(food.title.as_ref(), NO_TITLE),
        category: or_placeholder(food.category.as_ref(), NO_VALUE),
        quantity: quantity_label(food.quantity),
        location: or_placeholder(food.hotel_address.as_ref(), NOT_SPECIFIED),
        donor_name: or_placeholder(food.hotel_name.as_ref(), NO_VALUE),
        donor_phone: food.hotel_phone.clone().unwrap_or_default(),
        expiry: expiry_label(deadline),
        time_left: time_remaining(deadline, now),
        status: food.ui_status(),
        reserved_by: None,
    }
}

/// Build a card from an enriched order. `None` when the order references
/// no food at all.
///
/// The category slot carries the English lifecycle label, while the
/// filterable status stays in the UI vocabulary.
pub fn from_order(enriched: &EnrichedOrder, now: NaiveDateTime) -> Option<UnifiedListItem> {
    let order = &enriched.order;
    let food_id = order.food_ref()?;
    let food = enriched.food_details();

    let lifecycle = order.lifecycle().unwrap_or(OrderStatus::Confirmed);
    let status = order.ui_status();
    let deadline = food.and_then(FoodRecord::deadline);
    let time_left = if status == UiStatus::Reserved {
        time_remaining(deadline, now)
    } else {
        lifecycle.display_label().to_string()
    };

    Some(UnifiedListItem {
        id: food_id,
        order_id: Some(order.id),
        name: or_placeholder(
            first_present(order.food_title.as_ref(), food.and_then(|f| f.title.as_ref())),
            NO_TITLE,
        ),
        category: lifecycle.display_label().to_string(),
        quantity: quantity_label(order.quantity.or_else(|| food.and_then(|f| f.quantity))),
        location: or_placeholder(
            first_present(order.hotel_address.as_ref(), food.and_then(|f| f.hotel_address.as_ref())),
            NOT_SPECIFIED,
        ),
        donor_name: or_placeholder(
            first_present(order.hotel_name.as_ref(), food.and_then(|f| f.hotel_name.as_ref())),
            NO_VALUE,
        ),
        donor_phone: first_present(order.hotel_phone.as_ref(), food.and_then(|f| f.hotel_phone.as_ref()))
            .cloned()
            .unwrap_or_default(),
        expiry: expiry_label(order.pickup().or(deadline)),
        time_left,
        status,
        reserved_by: order.charity_name.clone().filter(|name| !name.trim().is_empty()),
    })
}
