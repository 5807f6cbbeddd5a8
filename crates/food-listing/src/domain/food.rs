//! Food Entity
//!
//! A donated food listing. Backend variants disagree on field names, so
//! every descriptive field accepts its known aliases.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::date::{normalize, RawDate};
use super::status::{map_food_status, UiStatus};

/// Food listing record (read-only to this client)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodRecord {
    pub id: u64,
    #[serde(default, alias = "name", alias = "foodTitle")]
    pub title: Option<String>,
    #[serde(default, rename = "type", alias = "category", alias = "foodType")]
    pub category: Option<String>,
    #[serde(default)]
    pub quantity: Option<i64>,
    #[serde(default, alias = "expiryDate", alias = "expiry")]
    pub available_until: Option<RawDate>,
    #[serde(default, alias = "restaurantName", alias = "restaurant")]
    pub hotel_name: Option<String>,
    #[serde(default, alias = "location", alias = "address")]
    pub hotel_address: Option<String>,
    #[serde(default, alias = "restaurantPhone", alias = "phone")]
    pub hotel_phone: Option<String>,
    /// Raw lifecycle value; unknown values are kept, not rejected
    #[serde(default)]
    pub status: Option<String>,
}

impl FoodRecord {
    pub fn new(id: u64, title: &str) -> Self {
        Self {
            id,
            title: Some(title.to_string()),
            ..Default::default()
        }
    }

    pub fn ui_status(&self) -> UiStatus {
        map_food_status(self.status.as_deref())
    }

    pub fn deadline(&self) -> Option<NaiveDateTime> {
        normalize(self.available_until.as_ref())
    }
}

/// Charity profile linked to a user account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharityProfile {
    pub id: u64,
    #[serde(default, alias = "charityName")]
    pub name: Option<String>,
}

/// Hotel profile linked to a user account. Its `id` scopes the hotel's food
/// queries and differs from the user id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelProfile {
    pub id: u64,
    #[serde(default, alias = "hotelName")]
    pub name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_canonical_names() {
        let json = r#"{
            "id": 7,
            "title": "Pasta with meat",
            "type": "Main dishes",
            "quantity": 50,
            "availableUntil": [2024, 3, 15, 9, 30, 0],
            "hotelName": "Brothers Restaurant",
            "hotelAddress": "Irbid",
            "hotelPhone": "0777777777",
            "status": "AVAILABLE"
        }"#;
        let food: FoodRecord = serde_json::from_str(json).unwrap();
        assert_eq!(food.id, 7);
        assert_eq!(food.category.as_deref(), Some("Main dishes"));
        assert_eq!(food.quantity, Some(50));
        assert_eq!(food.ui_status(), UiStatus::Available);
        assert!(food.deadline().is_some());
    }

    #[test]
    fn test_decode_aliased_names() {
        let json = r#"{
            "id": 8,
            "name": "Chicken sandwiches",
            "category": "Fast food",
            "expiryDate": "2023-12-21",
            "restaurantName": "Fast Meals",
            "location": "Amman",
            "restaurantPhone": "0788888888"
        }"#;
        let food: FoodRecord = serde_json::from_str(json).unwrap();
        assert_eq!(food.title.as_deref(), Some("Chicken sandwiches"));
        assert_eq!(food.category.as_deref(), Some("Fast food"));
        assert_eq!(food.hotel_name.as_deref(), Some("Fast Meals"));
        assert_eq!(food.hotel_address.as_deref(), Some("Amman"));
        assert_eq!(food.hotel_phone.as_deref(), Some("0788888888"));
        assert_eq!(food.status, None);
        assert_eq!(food.ui_status(), UiStatus::Available);
    }

    #[test]
    fn test_unknown_status_is_kept() {
        let food: FoodRecord = serde_json::from_str(r#"{"id": 1, "status": "ON_HOLD"}"#).unwrap();
        assert_eq!(food.status.as_deref(), Some("ON_HOLD"));
        assert_eq!(food.title, None);
    }

    #[test]
    fn test_hotel_profile_accepts_hotel_name_alias() {
        let hotel: HotelProfile = serde_json::from_str(r#"{"id": 4, "hotelName": "Grand Amman"}"#).unwrap();
        assert_eq!(hotel.id, 4);
        assert_eq!(hotel.name.as_deref(), Some("Grand Amman"));
    }
}
