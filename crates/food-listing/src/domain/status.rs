//! Status Mapper
//!
//! Backend lifecycle enums for food and orders, and the four-way UI status
//! vocabulary they collapse into.

use chrono::{Local, NaiveDateTime, TimeDelta};
use serde::{Deserialize, Serialize};

/// Label shown once a deadline has passed
pub const EXPIRED_LABEL: &str = "Expired";

/// Simplified status shown to users and used for filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UiStatus {
    Available,
    Reserved,
    Delivered,
    Expired,
}

impl UiStatus {
    pub const ALL: [UiStatus; 4] = [
        UiStatus::Available,
        UiStatus::Reserved,
        UiStatus::Delivered,
        UiStatus::Expired,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            UiStatus::Available => "available",
            UiStatus::Reserved => "reserved",
            UiStatus::Delivered => "delivered",
            UiStatus::Expired => "expired",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        UiStatus::ALL.into_iter().find(|status| status.as_str() == s)
    }
}

/// Food lifecycle as stored by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FoodStatus {
    Available,
    Reserved,
    Completed,
    PickedUp,
    Expired,
    Cancelled,
}

impl FoodStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            FoodStatus::Available => "AVAILABLE",
            FoodStatus::Reserved => "RESERVED",
            FoodStatus::Completed => "COMPLETED",
            FoodStatus::PickedUp => "PICKED_UP",
            FoodStatus::Expired => "EXPIRED",
            FoodStatus::Cancelled => "CANCELLED",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_uppercase().as_str() {
            "AVAILABLE" => Some(FoodStatus::Available),
            "RESERVED" => Some(FoodStatus::Reserved),
            "COMPLETED" => Some(FoodStatus::Completed),
            "PICKED_UP" => Some(FoodStatus::PickedUp),
            "EXPIRED" => Some(FoodStatus::Expired),
            "CANCELLED" => Some(FoodStatus::Cancelled),
            _ => None,
        }
    }
}

/// Order lifecycle. CONFIRMED, PICKED_UP and CANCELLED are the only values
/// the backend emits for orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Confirmed,
    PickedUp,
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Confirmed => "CONFIRMED",
            OrderStatus::PickedUp => "PICKED_UP",
            OrderStatus::Cancelled => "CANCELLED",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_uppercase().as_str() {
            "CONFIRMED" => Some(OrderStatus::Confirmed),
            "PICKED_UP" => Some(OrderStatus::PickedUp),
            "CANCELLED" => Some(OrderStatus::Cancelled),
            _ => None,
        }
    }

    /// English lifecycle label shown on order cards
    pub fn display_label(&self) -> &'static str {
        match self {
            OrderStatus::Confirmed => "Reserved",
            OrderStatus::PickedUp => "Completed",
            OrderStatus::Cancelled => "Cancelled",
        }
    }
}

/// Unknown or absent food statuses are treated as available.
pub fn map_food_status(raw: Option<&str>) -> UiStatus {
    match raw.and_then(FoodStatus::parse) {
        Some(FoodStatus::Reserved) => UiStatus::Reserved,
        Some(FoodStatus::Completed | FoodStatus::PickedUp) => UiStatus::Delivered,
        Some(FoodStatus::Expired | FoodStatus::Cancelled) => UiStatus::Expired,
        Some(FoodStatus::Available) | None => UiStatus::Available,
    }
}

/// Orders are never available: anything not picked up or cancelled is reserved.
pub fn map_order_status(raw: Option<&str>) -> UiStatus {
    match raw.and_then(OrderStatus::parse) {
        Some(OrderStatus::PickedUp) => UiStatus::Delivered,
        Some(OrderStatus::Cancelled) => UiStatus::Expired,
        Some(OrderStatus::Confirmed) | None => UiStatus::Reserved,
    }
}

pub fn now_local() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Human-readable time left until `target`, relative to `now`.
pub fn time_remaining(target: Option<NaiveDateTime>, now: NaiveDateTime) -> String {
    let Some(target) = target else {
        return EXPIRED_LABEL.to_string();
    };
    let left = target - now;
    if left <= TimeDelta::zero() {
        return EXPIRED_LABEL.to_string();
    }

    let minutes = left.num_minutes();
    let (hours, minutes) = (minutes / 60, minutes % 60);
    if hours >= 1 {
        format!("{}h {}m remaining", hours, minutes)
    } else {
        format!("{}m remaining", minutes)
    }
}

/// Same as [`time_remaining`] against the wall clock at call time.
pub fn time_remaining_now(target: Option<NaiveDateTime>) -> String {
    time_remaining(target, now_local())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn noon() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap().and_hms_opt(12, 0, 0).unwrap()
    }

    #[test]
    fn test_food_status_mapping() {
        assert_eq!(map_food_status(Some("AVAILABLE")), UiStatus::Available);
        assert_eq!(map_food_status(Some("reserved")), UiStatus::Reserved);
        assert_eq!(map_food_status(Some("COMPLETED")), UiStatus::Delivered);
        assert_eq!(map_food_status(Some("PICKED_UP")), UiStatus::Delivered);
        assert_eq!(map_food_status(Some("EXPIRED")), UiStatus::Expired);
        assert_eq!(map_food_status(Some("CANCELLED")), UiStatus::Expired);
    }

    #[test]
    fn test_food_status_defaults_to_available() {
        assert_eq!(map_food_status(None), UiStatus::Available);
        assert_eq!(map_food_status(Some("")), UiStatus::Available);
        assert_eq!(map_food_status(Some("ON_HOLD")), UiStatus::Available);
    }

    #[test]
    fn test_order_status_mapping() {
        assert_eq!(map_order_status(Some("PICKED_UP")), UiStatus::Delivered);
        assert_eq!(map_order_status(Some("CANCELLED")), UiStatus::Expired);
        assert_eq!(map_order_status(Some("CONFIRMED")), UiStatus::Reserved);
    }

    #[test]
    fn test_order_status_defaults_to_reserved() {
        assert_eq!(map_order_status(None), UiStatus::Reserved);
        // Legacy order vocabulary is not recognized
        assert_eq!(OrderStatus::parse("PENDING"), None);
        assert_eq!(map_order_status(Some("COMPLETED")), UiStatus::Reserved);
        assert_eq!(map_order_status(Some("AVAILABLE")), UiStatus::Reserved);
    }

    #[test]
    fn test_time_remaining_hours_and_minutes() {
        let target = noon() + TimeDelta::minutes(65);
        assert_eq!(time_remaining(Some(target), noon()), "1h 5m remaining");
    }

    #[test]
    fn test_time_remaining_minutes_only() {
        let target = noon() + TimeDelta::minutes(5);
        assert_eq!(time_remaining(Some(target), noon()), "5m remaining");
    }

    #[test]
    fn test_time_remaining_expired() {
        let past = noon() - TimeDelta::minutes(1);
        assert_eq!(time_remaining(Some(past), noon()), EXPIRED_LABEL);
        assert_eq!(time_remaining(Some(noon()), noon()), EXPIRED_LABEL);
        assert_eq!(time_remaining(None, noon()), EXPIRED_LABEL);
    }

    #[test]
    fn test_status_strings() {
        assert_eq!(UiStatus::parse("delivered"), Some(UiStatus::Delivered));
        assert_eq!(UiStatus::parse("pending"), None);
        assert_eq!(FoodStatus::parse(" picked_up "), Some(FoodStatus::PickedUp));
        assert_eq!(OrderStatus::PickedUp.as_str(), "PICKED_UP");
        assert_eq!(OrderStatus::Cancelled.display_label(), "Cancelled");
    }
}
