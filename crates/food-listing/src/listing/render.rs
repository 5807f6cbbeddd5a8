//! Renderer
//!
//! Pure function from the snapshot's items and the viewer's role to a
//! declarative description of the cards. The UI layer binds it to the DOM.

use serde::{Deserialize, Serialize};

use super::dispatch::Action;
use super::plan::Filter;
use super::view_model::{UnifiedListItem, NO_VALUE};
use crate::domain::{Role, UiStatus};

/// What the list container should show
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ListingView {
    /// Nothing matched: clear the list and show the empty placeholder
    Empty,
    Cards(Vec<FoodCard>),
}

impl ListingView {
    pub fn cards(&self) -> &[FoodCard] {
        match self {
            ListingView::Empty => &[],
            ListingView::Cards(cards) => cards,
        }
    }
}

/// A rendered food card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodCard {
    pub id: u64,
    pub order_id: Option<u64>,
    pub status: String,
    pub status_label: String,
    pub status_class: String,
    pub title: String,
    pub category: String,
    pub quantity: String,
    pub location: String,
    pub donor_name: String,
    pub donor_phone: String,
    pub expiry: String,
    pub time_left: String,
    pub expiry_warning: bool,
    pub actions: Vec<ActionButton>,
}

/// A button on a card. Disabled placeholders carry no action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionButton {
    pub label: String,
    pub icon: String,
    pub class: String,
    pub action: Option<Action>,
}

impl ActionButton {
    fn active(label: &str, icon: &str, class: &str, action: Action) -> Self {
        Self {
            label: label.to_string(),
            icon: icon.to_string(),
            class: class.to_string(),
            action: Some(action),
        }
    }

    fn placeholder(label: &str, icon: &str) -> Self {
        Self {
            label: label.to_string(),
            icon: icon.to_string(),
            class: "btn-disabled".to_string(),
            action: None,
        }
    }

    pub fn enabled(&self) -> bool {
        self.action.is_some()
    }
}

/// Status badge text and style
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusPresentation {
    pub label: String,
    pub class: String,
}

/// Badge for a raw UI status string. Unrecognized values pass through as
/// the label.
pub fn status_presentation(status: &str, reserved_by: Option<&str>) -> StatusPresentation {
    let (label, class) = match UiStatus::parse(status) {
        Some(UiStatus::Available) => ("متاح للطلب".to_string(), "status-available"),
        Some(UiStatus::Reserved) => match reserved_by {
            Some(by) => (format!("محجوز - {}", by), "status-reserved"),
            None => ("محجوز".to_string(), "status-reserved"),
        },
        Some(UiStatus::Delivered) => ("تم التوزيع".to_string(), "status-delivered"),
        Some(UiStatus::Expired) => ("منتهي الصلاحية".to_string(), "status-expired"),
        None => (status.to_string(), "status-unknown"),
    };
    StatusPresentation { label, class: class.to_string() }
}

fn contact_button(item: &UnifiedListItem) -> ActionButton {
    ActionButton::active(
        "اتصل بالمطعم",
        "fas fa-phone",
        "btn-cancel",
        Action::ContactDonor { phone: item.donor_phone.clone() },
    )
}

fn actions_for(item: &UnifiedListItem, role: Role) -> Vec<ActionButton> {
    match item.status {
        // Shown to every role; the dispatcher rejects non-charities
        UiStatus::Available => vec![
            ActionButton::active(
                "حجز الطعام",
                "fas fa-shopping-cart",
                "btn-reserve",
                Action::Reserve { food_id: item.id },
            ),
            contact_button(item),
        ],
        UiStatus::Reserved => match (role, item.order_id) {
            (Role::Charity, Some(order_id)) => vec![ActionButton::active(
                "تأكيد الاستلام",
                "fas fa-check",
                "btn-reserve",
                Action::ConfirmPickup { order_id },
            )],
            _ => vec![
                ActionButton::placeholder("محجوز حالياً", "fas fa-user-clock"),
                contact_button(item),
            ],
        },
        UiStatus::Delivered => vec![ActionButton::placeholder("تم التوصيل", "fas fa-check-circle")],
        UiStatus::Expired => vec![ActionButton::placeholder("غير متاح", "fas fa-exclamation-triangle")],
    }
}

fn card(item: &UnifiedListItem, role: Role) -> FoodCard {
    let presentation = status_presentation(item.status.as_str(), item.reserved_by.as_deref());
    let donor_phone = if item.donor_phone.trim().is_empty() {
        NO_VALUE.to_string()
    } else {
        item.donor_phone.clone()
    };

    FoodCard {
        id: item.id,
        order_id: item.order_id,
        status: item.status.as_str().to_string(),
        status_label: presentation.label,
        status_class: presentation.class,
        title: item.name.clone(),
        category: item.category.clone(),
        quantity: item.quantity.clone(),
        location: item.location.clone(),
        donor_name: item.donor_name.clone(),
        donor_phone,
        expiry: item.expiry.clone(),
        time_left: item.time_left.clone(),
        expiry_warning: item.status == UiStatus::Expired,
        actions: actions_for(item, role),
    }
}

/// Render the items visible under `filter` for `role`
pub fn render(items: &[UnifiedListItem], role: Role, filter: Filter) -> ListingView {
    let cards: Vec<FoodCard> = items
        .iter()
        .filter(|item| filter.status().map_or(true, |status| item.status == status))
        .map(|item| card(item, role))
        .collect();

    if cards.is_empty() {
        ListingView::Empty
    } else {
        ListingView::Cards(cards)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: u64, status: UiStatus, order_id: Option<u64>) -> UnifiedListItem {
        UnifiedListItem {
            id,
            order_id,
            name: format!("Food {}", id),
            category: "Main dishes".to_string(),
            quantity: "10 meals".to_string(),
            location: "Amman".to_string(),
            donor_name: "Hotel".to_string(),
            donor_phone: "0777777777".to_string(),
            expiry: "2024-03-15 09:30".to_string(),
            time_left: "1h 5m remaining".to_string(),
            status,
            reserved_by: None,
        }
    }

    fn only_card(view: ListingView) -> FoodCard {
        match view {
            ListingView::Cards(mut cards) if cards.len() == 1 => cards.remove(0),
            other => panic!("expected one card, got {:?}", other),
        }
    }

    #[test]
    fn test_reserved_order_for_charity_confirms_pickup() {
        let items = [item(1, UiStatus::Reserved, Some(77))];
        let card = only_card(render(&items, Role::Charity, Filter::All));
        assert_eq!(card.actions.len(), 1);
        assert_eq!(card.actions[0].action, Some(Action::ConfirmPickup { order_id: 77 }));
    }

    #[test]
    fn test_reserved_order_for_hotel_is_placeholder() {
        let items = [item(1, UiStatus::Reserved, Some(77))];
        let card = only_card(render(&items, Role::Hotel, Filter::All));
        assert!(!card.actions[0].enabled());
        assert_eq!(card.actions[0].class, "btn-disabled");
        assert_eq!(
            card.actions[1].action,
            Some(Action::ContactDonor { phone: "0777777777".to_string() })
        );
    }

    #[test]
    fn test_reserved_food_without_order_for_charity_is_placeholder() {
        let items = [item(1, UiStatus::Reserved, None)];
        let card = only_card(render(&items, Role::Charity, Filter::Reserved));
        assert!(!card.actions[0].enabled());
    }

    #[test]
    fn test_available_offers_reserve_to_everyone() {
        for role in [Role::Guest, Role::Hotel, Role::Charity] {
            let card = only_card(render(&[item(5, UiStatus::Available, None)], role, Filter::All));
            assert_eq!(card.actions[0].action, Some(Action::Reserve { food_id: 5 }));
            assert_eq!(card.status_class, "status-available");
        }
    }

    #[test]
    fn test_delivered_and_expired_have_no_actions() {
        let items = [item(1, UiStatus::Delivered, Some(2)), item(3, UiStatus::Expired, None)];
        let view = render(&items, Role::Charity, Filter::All);
        for card in view.cards() {
            assert_eq!(card.actions.len(), 1);
            assert!(!card.actions[0].enabled());
        }
        assert!(view.cards()[1].expiry_warning);
    }

    #[test]
    fn test_filter_and_empty_state() {
        let items = [item(1, UiStatus::Available, None), item(2, UiStatus::Delivered, None)];
        assert_eq!(render(&items, Role::Guest, Filter::Delivered).cards().len(), 1);
        assert_eq!(render(&items, Role::Guest, Filter::Reserved), ListingView::Empty);
        assert_eq!(render(&[], Role::Guest, Filter::All), ListingView::Empty);
    }

    #[test]
    fn test_status_presentation() {
        assert_eq!(status_presentation("reserved", Some("Al-Birr")).label, "محجوز - Al-Birr");
        assert_eq!(status_presentation("delivered", None).class, "status-delivered");
        let unknown = status_presentation("on_hold", None);
        assert_eq!(unknown.label, "on_hold");
        assert_eq!(unknown.class, "status-unknown");
    }

    #[test]
    fn test_missing_phone_shows_placeholder() {
        let mut no_phone = item(1, UiStatus::Available, None);
        no_phone.donor_phone = String::new();
        let card = only_card(render(&[no_phone], Role::Guest, Filter::All));
        assert_eq!(card.donor_phone, NO_VALUE);
    }
}
