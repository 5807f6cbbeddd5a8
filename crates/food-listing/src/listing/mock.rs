//! In-memory [`MarketplaceApi`] for tests. Records every call.

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};

use async_trait::async_trait;

use crate::api::{MarketplaceApi, ReservationRequest};
use crate::domain::{CharityProfile, FoodRecord, FoodStatus, HotelProfile, OrderRecord, OrderStatus};
use crate::error::{ApiError, ApiResult};

#[derive(Default)]
pub struct MockApi {
    pub available: Vec<FoodRecord>,
    pub search_results: Vec<FoodRecord>,
    pub hotel_food: HashMap<FoodStatus, Vec<FoodRecord>>,
    pub foods: HashMap<u64, FoodRecord>,
    pub failing_foods: HashSet<u64>,
    pub orders: HashMap<OrderStatus, Vec<OrderRecord>>,
    pub charity: Option<CharityProfile>,
    pub hotel: Option<HotelProfile>,
    pub offline: bool,
    calls: RefCell<Vec<String>>,
}

impl MockApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_food(mut self, food: FoodRecord) -> Self {
        self.foods.insert(food.id, food);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: String) -> ApiResult<()> {
        self.calls.borrow_mut().push(call);
        if self.offline {
            return Err(ApiError::Network("connection refused".to_string()));
        }
        Ok(())
    }
}

#[async_trait(?Send)]
impl MarketplaceApi for MockApi {
    async fn get_all_available_food(&self) -> ApiResult<Vec<FoodRecord>> {
        self.record("available".to_string())?;
        Ok(self.available.clone())
    }

    async fn search_food(&self, keyword: &str) -> ApiResult<Vec<FoodRecord>> {
        self.record(format!("search:{}", keyword))?;
        Ok(self.search_results.clone())
    }

    async fn get_food_by_hotel_and_status(&self, hotel_id: u64, status: FoodStatus) -> ApiResult<Vec<FoodRecord>> {
        self.record(format!("hotel:{}:{}", hotel_id, status.as_str()))?;
        Ok(self.hotel_food.get(&status).cloned().unwrap_or_default())
    }

    async fn get_food_by_id(&self, id: u64) -> ApiResult<FoodRecord> {
        self.record(format!("food:{}", id))?;
        if self.failing_foods.contains(&id) {
            return Err(ApiError::Status { status: 500, message: "boom".to_string() });
        }
        self.foods
            .get(&id)
            .cloned()
            .ok_or_else(|| ApiError::NotFound(format!("food {}", id)))
    }

    async fn reserve_food(&self, request: &ReservationRequest) -> ApiResult<OrderRecord> {
        self.record(format!("reserve:{}:{}", request.food_id, request.charity_id))?;
        Ok(OrderRecord {
            id: 900,
            food_id: Some(request.food_id),
            charity_id: Some(request.charity_id),
            status: Some(OrderStatus::Confirmed.as_str().to_string()),
            ..Default::default()
        })
    }

    async fn get_orders_by_charity_and_status(&self, charity_id: u64, status: OrderStatus) -> ApiResult<Vec<OrderRecord>> {
        self.record(format!("orders:{}:{}", charity_id, status.as_str()))?;
        Ok(self.orders.get(&status).cloned().unwrap_or_default())
    }

    async fn update_order_status(&self, order_id: u64, status: OrderStatus) -> ApiResult<()> {
        self.record(format!("update:{}:{}", order_id, status.as_str()))
    }

    async fn get_charity_by_user_id(&self, user_id: &str) -> ApiResult<CharityProfile> {
        self.record(format!("charity:{}", user_id))?;
        self.charity
            .clone()
            .ok_or_else(|| ApiError::NotFound("charity profile".to_string()))
    }

    async fn get_hotel_by_user_id(&self, user_id: &str) -> ApiResult<HotelProfile> {
        self.record(format!("hotel-profile:{}", user_id))?;
        self.hotel
            .clone()
            .ok_or_else(|| ApiError::NotFound("hotel profile".to_string()))
    }
}
