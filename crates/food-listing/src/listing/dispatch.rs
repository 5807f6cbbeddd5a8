//! Action dispatcher
//!
//! Card buttons carry typed [`Action`]s; this is the single place they are
//! turned into backend calls. Role checks run before any request.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::api::{MarketplaceApi, ReservationRequest};
use crate::domain::{OrderRecord, OrderStatus, Role, Session};
use crate::error::ActionError;

/// A user action on a card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    Reserve { food_id: u64 },
    ConfirmPickup { order_id: u64 },
    ContactDonor { phone: String },
}

/// What a successful action produced
#[derive(Debug, Clone, PartialEq)]
pub enum ActionOutcome {
    Reserved(OrderRecord),
    PickupConfirmed { order_id: u64 },
    /// Navigate to this `tel:` link
    Call { href: String },
}

impl ActionOutcome {
    /// Whether the listing should reload afterwards
    pub fn needs_reload(&self) -> bool {
        !matches!(self, ActionOutcome::Call { .. })
    }
}

impl Action {
    /// Synchronous authorization, checked before confirm dialogs and requests
    pub fn authorize(&self, session: &Session) -> Result<(), ActionError> {
        match self {
            Action::Reserve { .. } => {
                if !session.is_logged_in() {
                    return Err(ActionError::NotLoggedIn);
                }
                if session.role() != Role::Charity {
                    return Err(ActionError::Forbidden(
                        "Reservations are available to charities only".to_string(),
                    ));
                }
                Ok(())
            }
            Action::ConfirmPickup { .. } => {
                if !session.is_logged_in() {
                    return Err(ActionError::NotLoggedIn);
                }
                if session.role() != Role::Charity {
                    return Err(ActionError::Forbidden(
                        "Only the reserving charity can confirm pickup".to_string(),
                    ));
                }
                Ok(())
            }
            Action::ContactDonor { phone } => {
                if phone.trim().is_empty() {
                    return Err(ActionError::MissingPhone);
                }
                Ok(())
            }
        }
    }
}

/// Run `action` for `session`
pub async fn dispatch<A>(
    api: &A,
    session: &Session,
    action: &Action,
    notes: &str,
) -> Result<ActionOutcome, ActionError>
where
    A: MarketplaceApi + ?Sized,
{
    action.authorize(session)?;

    match action {
        Action::Reserve { food_id } => {
            let user_id = session.user_id().ok_or(ActionError::NotLoggedIn)?;
            let charity = api.get_charity_by_user_id(user_id).await?;
            let request = ReservationRequest {
                food_id: *food_id,
                charity_id: charity.id,
                notes: notes.to_string(),
            };
            let order = api.reserve_food(&request).await?;
            info!(food_id, order_id = order.id, "food reserved");
            Ok(ActionOutcome::Reserved(order))
        }
        Action::ConfirmPickup { order_id } => {
            api.update_order_status(*order_id, OrderStatus::PickedUp).await?;
            info!(order_id, "pickup confirmed");
            Ok(ActionOutcome::PickupConfirmed { order_id: *order_id })
        }
        Action::ContactDonor { phone } => Ok(ActionOutcome::Call {
            href: format!("tel:{}", phone.trim()),
        }),
    }
}
