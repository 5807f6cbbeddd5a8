//! HTTP implementation of [`MarketplaceApi`] over reqwest.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, StatusCode, Url};
use serde_json::Value;
use tracing::debug;

use super::envelope::{decode_list, decode_one, error_message};
use super::{MarketplaceApi, ReservationRequest};
use crate::config::ListingConfig;
use crate::domain::{
    CharityProfile, FoodRecord, FoodStatus, HotelProfile, OrderRecord, OrderStatus, Session,
};
use crate::error::{ApiError, ApiResult};

/// REST client bound to one session's credentials
#[derive(Debug, Clone)]
pub struct HttpApi {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl HttpApi {
    pub fn new(config: &ListingConfig, session: &Session) -> Self {
        Self {
            client: Client::new(),
            base_url: config.api_base_url.clone(),
            token: session.token().map(str::to_string),
        }
    }

    /// Base URL extended by `segments`, each percent-encoded as one path segment
    fn endpoint(&self, segments: &[&str]) -> ApiResult<Url> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| ApiError::InvalidUrl(format!("{}: {}", self.base_url, e)))?;
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidUrl(self.base_url.clone()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn send(&self, request: RequestBuilder) -> ApiResult<Value> {
        let request = match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        };
        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;
        debug!(status = status.as_u16(), bytes = text.len(), "api response");

        if !status.is_success() {
            let body: Value = serde_json::from_str(&text).unwrap_or(Value::Null);
            let message = error_message(&body).unwrap_or_else(|| {
                status.canonical_reason().unwrap_or("request failed").to_string()
            });
            if status == StatusCode::NOT_FOUND {
                return Err(ApiError::NotFound(message));
            }
            return Err(ApiError::Status { status: status.as_u16(), message });
        }

        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn get(&self, segments: &[&str]) -> ApiResult<Value> {
        self.send(self.client.get(self.endpoint(segments)?)).await
    }
}

#[async_trait(?Send)]
impl MarketplaceApi for HttpApi {
    async fn get_all_available_food(&self) -> ApiResult<Vec<FoodRecord>> {
        decode_list(self.get(&["foods", "available"]).await?)
    }

    async fn search_food(&self, keyword: &str) -> ApiResult<Vec<FoodRecord>> {
        let request = self
            .client
            .get(self.endpoint(&["foods", "search"])?)
            .query(&[("keyword", keyword)]);
        decode_list(self.send(request).await?)
    }

    async fn get_food_by_hotel_and_status(
        &self,
        hotel_id: u64,
        status: FoodStatus,
    ) -> ApiResult<Vec<FoodRecord>> {
        let hotel_id = hotel_id.to_string();
        decode_list(self.get(&["foods", "hotel", &hotel_id, "status", status.as_str()]).await?)
    }

    async fn get_food_by_id(&self, id: u64) -> ApiResult<FoodRecord> {
        decode_one(self.get(&["foods", &id.to_string()]).await?)
    }

    async fn reserve_food(&self, request: &ReservationRequest) -> ApiResult<OrderRecord> {
        let builder = self.client.post(self.endpoint(&["orders", "reserve"])?).json(request);
        decode_one(self.send(builder).await?)
    }

    async fn get_orders_by_charity_and_status(
        &self,
        charity_id: u64,
        status: OrderStatus,
    ) -> ApiResult<Vec<OrderRecord>> {
        let charity_id = charity_id.to_string();
        decode_list(self.get(&["orders", "charity", &charity_id, "status", status.as_str()]).await?)
    }

    async fn update_order_status(&self, order_id: u64, status: OrderStatus) -> ApiResult<()> {
        let request = self
            .client
            .put(self.endpoint(&["orders", &order_id.to_string(), "status"])?)
            .query(&[("status", status.as_str())]);
        match decode_one::<Value>(self.send(request).await?) {
            Ok(_) | Err(ApiError::MissingData) => Ok(()),
            Err(err) => Err(err),
        }
    }

    async fn get_charity_by_user_id(&self, user_id: &str) -> ApiResult<CharityProfile> {
        decode_one(self.get(&["charities", "user", user_id]).await?)
    }

    async fn get_hotel_by_user_id(&self, user_id: &str) -> ApiResult<HotelProfile> {
        decode_one(self.get(&["hotels", "user", user_id]).await?)
    }
}
