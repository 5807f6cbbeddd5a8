//! Query plan selection
//!
//! Which backend queries a load cycle issues, from the active filter, the
//! search keyword and the session role.

use serde::{Deserialize, Serialize};

use crate::domain::{FoodStatus, OrderStatus, Role, UiStatus};

/// Filter buttons on the listing page (`data-filter` values)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Filter {
    #[default]
    All,
    Available,
    Reserved,
    Delivered,
    Expired,
}

impl Filter {
    pub const ALL: [Filter; 5] = [
        Filter::All,
        Filter::Available,
        Filter::Reserved,
        Filter::Delivered,
        Filter::Expired,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Filter::All => "all",
            Filter::Available => "available",
            Filter::Reserved => "reserved",
            Filter::Delivered => "delivered",
            Filter::Expired => "expired",
        }
    }

    /// Unknown attribute values fall back to `All`
    pub fn from_attr(value: &str) -> Self {
        Filter::ALL
            .into_iter()
            .find(|filter| filter.as_str() == value.trim())
            .unwrap_or_default()
    }

    /// The UI status this filter narrows to; `None` shows everything
    pub fn status(&self) -> Option<UiStatus> {
        match self {
            Filter::All => None,
            Filter::Available => Some(UiStatus::Available),
            Filter::Reserved => Some(UiStatus::Reserved),
            Filter::Delivered => Some(UiStatus::Delivered),
            Filter::Expired => Some(UiStatus::Expired),
        }
    }
}

/// Backend queries for one load cycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryPlan {
    Search(String),
    AvailableFood,
    HotelFood(FoodStatus),
    /// Charity's own orders per status, optionally unioned with available food
    CharityOrders {
        statuses: Vec<OrderStatus>,
        include_available: bool,
    },
}

/// Pick the queries for a filter, keyword and role
pub fn plan(filter: Filter, keyword: Option<&str>, role: Role) -> QueryPlan {
    if let Some(keyword) = keyword.map(str::trim).filter(|k| !k.is_empty()) {
        return QueryPlan::Search(keyword.to_string());
    }

    match (filter, role) {
        (Filter::Available, _) => QueryPlan::AvailableFood,

        (Filter::Reserved, Role::Hotel) => QueryPlan::HotelFood(FoodStatus::Reserved),
        (Filter::Delivered, Role::Hotel) => QueryPlan::HotelFood(FoodStatus::Completed),

        (Filter::Reserved, Role::Charity) => QueryPlan::CharityOrders {
            statuses: vec![OrderStatus::Confirmed],
            include_available: false,
        },
        (Filter::Delivered, Role::Charity) => QueryPlan::CharityOrders {
            statuses: vec![OrderStatus::PickedUp],
            include_available: false,
        },
        (Filter::All | Filter::Expired, Role::Charity) => QueryPlan::CharityOrders {
            statuses: vec![OrderStatus::Confirmed, OrderStatus::PickedUp, OrderStatus::Cancelled],
            include_available: true,
        },

        _ => QueryPlan::AvailableFood,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_wins_for_every_role() {
        for role in [Role::Guest, Role::Hotel, Role::Charity] {
            for filter in Filter::ALL {
                assert_eq!(
                    plan(filter, Some("  rice "), role),
                    QueryPlan::Search("rice".to_string())
                );
            }
        }
    }

    #[test]
    fn test_blank_keyword_is_ignored() {
        assert_eq!(plan(Filter::All, Some("   "), Role::Guest), QueryPlan::AvailableFood);
    }

    #[test]
    fn test_guest_always_sees_available_food() {
        for filter in Filter::ALL {
            assert_eq!(plan(filter, None, Role::Guest), QueryPlan::AvailableFood);
        }
    }

    #[test]
    fn test_hotel_plans() {
        assert_eq!(plan(Filter::All, None, Role::Hotel), QueryPlan::AvailableFood);
        assert_eq!(plan(Filter::Available, None, Role::Hotel), QueryPlan::AvailableFood);
        assert_eq!(
            plan(Filter::Reserved, None, Role::Hotel),
            QueryPlan::HotelFood(FoodStatus::Reserved)
        );
        assert_eq!(
            plan(Filter::Delivered, None, Role::Hotel),
            QueryPlan::HotelFood(FoodStatus::Completed)
        );
    }

    #[test]
    fn test_charity_plans() {
        assert_eq!(plan(Filter::Available, None, Role::Charity), QueryPlan::AvailableFood);
        assert_eq!(
            plan(Filter::Reserved, None, Role::Charity),
            QueryPlan::CharityOrders { statuses: vec![OrderStatus::Confirmed], include_available: false }
        );
        assert_eq!(
            plan(Filter::Delivered, None, Role::Charity),
            QueryPlan::CharityOrders { statuses: vec![OrderStatus::PickedUp], include_available: false }
        );
        let union = QueryPlan::CharityOrders {
            statuses: vec![OrderStatus::Confirmed, OrderStatus::PickedUp, OrderStatus::Cancelled],
            include_available: true,
        };
        assert_eq!(plan(Filter::All, None, Role::Charity), union);
        assert_eq!(plan(Filter::Expired, None, Role::Charity), union);
    }

    #[test]
    fn test_filter_attr() {
        assert_eq!(Filter::from_attr("delivered"), Filter::Delivered);
        assert_eq!(Filter::from_attr("bogus"), Filter::All);
        assert_eq!(Filter::Expired.status(), Some(UiStatus::Expired));
        assert_eq!(Filter::All.status(), None);
    }
}
