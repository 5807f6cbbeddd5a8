//! Domain Layer
//!
//! Backend records as this client sees them, plus the pure mappings the
//! listing is built from. No I/O here.

mod date;
mod food;
mod order;
mod role;
mod status;

pub use date::{format_display, normalize, RawDate};
pub use food::{CharityProfile, FoodRecord, HotelProfile};
pub use order::{EnrichedOrder, OrderRecord};
pub use role::{Role, Session};
pub use status::{
    map_food_status, map_order_status, now_local, time_remaining, time_remaining_now, FoodStatus,
    OrderStatus, UiStatus, EXPIRED_LABEL,
};
