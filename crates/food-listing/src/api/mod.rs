//! Marketplace API Layer
//!
//! The backend contract the listing consumes, and its HTTP implementation.
//! Futures are `?Send`: the same code runs on the browser's single thread
//! and on a current-thread runtime in tests.

mod envelope;
mod http;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::{CharityProfile, FoodRecord, FoodStatus, HotelProfile, OrderRecord, OrderStatus};
use crate::error::ApiResult;

pub use envelope::{decode_list, decode_one, error_message, ApiResponse};
pub use http::HttpApi;

/// Body of a reservation request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationRequest {
    pub food_id: u64,
    pub charity_id: u64,
    pub notes: String,
}

/// Backend operations used by the listing page
#[async_trait(?Send)]
pub trait MarketplaceApi {
    async fn get_all_available_food(&self) -> ApiResult<Vec<FoodRecord>>;

    async fn search_food(&self, keyword: &str) -> ApiResult<Vec<FoodRecord>>;

    async fn get_food_by_hotel_and_status(
        &self,
        hotel_id: u64,
        status: FoodStatus,
    ) -> ApiResult<Vec<FoodRecord>>;

    async fn get_food_by_id(&self, id: u64) -> ApiResult<FoodRecord>;

    async fn reserve_food(&self, request: &ReservationRequest) -> ApiResult<OrderRecord>;

    async fn get_orders_by_charity_and_status(
        &self,
        charity_id: u64,
        status: OrderStatus,
    ) -> ApiResult<Vec<OrderRecord>>;

    async fn update_order_status(&self, order_id: u64, status: OrderStatus) -> ApiResult<()>;

    async fn get_charity_by_user_id(&self, user_id: &str) -> ApiResult<CharityProfile>;

    async fn get_hotel_by_user_id(&self, user_id: &str) -> ApiResult<HotelProfile>;
}
