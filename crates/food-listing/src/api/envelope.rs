//! Response envelope handling
//!
//! Most endpoints wrap payloads as `{ success, message, data }`, some
//! return the payload bare. Both shapes decode through here.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use crate::error::{ApiError, ApiResult};

/// Wrapped backend response
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse<T> {
    #[serde(default = "default_success")]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    pub data: Option<T>,
}

fn default_success() -> bool {
    true
}

fn is_wrapped(body: &Value) -> bool {
    body.as_object()
        .is_some_and(|object| object.contains_key("data") || object.contains_key("success"))
}

/// Decode a single payload, wrapped or bare
pub fn decode_one<T: DeserializeOwned>(body: Value) -> ApiResult<T> {
    if !is_wrapped(&body) {
        return serde_json::from_value(body).map_err(|e| ApiError::Decode(e.to_string()));
    }

    let response: ApiResponse<T> =
        serde_json::from_value(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    if !response.success {
        return Err(ApiError::Rejected(
            response.message.unwrap_or_else(|| "request was not accepted".to_string()),
        ));
    }
    response.data.ok_or(ApiError::MissingData)
}

/// Decode a list payload; a missing `data` field is an empty list
pub fn decode_list<T: DeserializeOwned>(body: Value) -> ApiResult<Vec<T>> {
    if body.is_null() {
        return Ok(Vec::new());
    }
    match decode_one(body) {
        Err(ApiError::MissingData) => Ok(Vec::new()),
        other => other,
    }
}

/// The `message` of an error body, if any
pub fn error_message(body: &Value) -> Option<String> {
    body.get("message")
        .and_then(Value::as_str)
        .filter(|message| !message.trim().is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FoodRecord;
    use serde_json::json;

    #[test]
    fn test_wrapped_list() {
        let body = json!({"success": true, "message": "ok", "data": [{"id": 1}, {"id": 2}]});
        let foods: Vec<FoodRecord> = decode_list(body).unwrap();
        assert_eq!(foods.len(), 2);
    }

    #[test]
    fn test_bare_list_and_object() {
        let foods: Vec<FoodRecord> = decode_list(json!([{"id": 3}])).unwrap();
        assert_eq!(foods[0].id, 3);

        let food: FoodRecord = decode_one(json!({"id": 4, "title": "Soup"})).unwrap();
        assert_eq!(food.title.as_deref(), Some("Soup"));
    }

    #[test]
    fn test_missing_data() {
        let foods: Vec<FoodRecord> = decode_list(json!({"success": true, "data": null})).unwrap();
        assert!(foods.is_empty());
        let empty: Vec<FoodRecord> = decode_list(Value::Null).unwrap();
        assert!(empty.is_empty());

        let single: ApiResult<FoodRecord> = decode_one(json!({"success": true}));
        assert_eq!(single, Err(ApiError::MissingData));
    }

    #[test]
    fn test_rejected_envelope() {
        let result: ApiResult<Vec<FoodRecord>> =
            decode_list(json!({"success": false, "message": "Food already reserved"}));
        assert_eq!(result, Err(ApiError::Rejected("Food already reserved".to_string())));
    }

    #[test]
    fn test_error_message() {
        assert_eq!(error_message(&json!({"message": "Charity not found"})).as_deref(), Some("Charity not found"));
        assert_eq!(error_message(&json!({"message": " "})), None);
        assert_eq!(error_message(&Value::Null), None);
    }
}
