//! Response-envelope unwrapping.
//!
//! The backend wraps every payload the same way: lists arrive as
//! `{ "data": { "<collection>": [...] } }`, single records as
//! `{ "data": { "<singular>": {...} } }`, and a successful login as
//! `{ "token": "...", "data": { "user": {...} } }`. This module is the
//! one place those shapes are known.

use serde::de::DeserializeOwned;
use serde_json::Value;

use propkit_core::UserProfile;

use crate::ApiError;

/// Parsed `/auth/login` success payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserProfile,
}

/// Unwrap `{ data: { <key>: [...] } }` into a typed collection.
pub fn unwrap_collection<T: DeserializeOwned>(body: Value, key: &str) -> Result<Vec<T>, ApiError> {
    let items = body
        .get("data")
        .and_then(|data| data.get(key))
        .cloned()
        .ok_or_else(|| ApiError::Decode(format!("missing data.{key} collection")))?;

    serde_json::from_value(items)
        .map_err(|e| ApiError::Decode(format!("data.{key} did not decode: {e}")))
}

/// Unwrap `{ data: { <key>: {...} } }` into a typed record.
pub fn unwrap_record<T: DeserializeOwned>(body: Value, key: &str) -> Result<T, ApiError> {
    let record = body
        .get("data")
        .and_then(|data| data.get(key))
        .cloned()
        .ok_or_else(|| ApiError::Decode(format!("missing data.{key} record")))?;

    serde_json::from_value(record)
        .map_err(|e| ApiError::Decode(format!("data.{key} did not decode: {e}")))
}

/// Parse the login envelope: token at the top level, user under `data`.
pub fn parse_login(body: Value) -> Result<LoginResponse, ApiError> {
    let token = body
        .get("token")
        .and_then(Value::as_str)
        .map(str::to_owned)
        .ok_or_else(|| ApiError::Decode("login response is missing token".to_string()))?;

    let user = unwrap_record::<UserProfile>(body, "user")?;

    Ok(LoginResponse { token, user })
}

/// Best-effort extraction of a server-provided error message.
pub fn error_message(body: &Value, fallback: &str) -> String {
    body.get("message")
        .and_then(Value::as_str)
        .map(str::to_owned)
        .unwrap_or_else(|| fallback.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use propkit_core::Tenant;
    use serde_json::json;

    #[test]
    fn collection_unwraps_through_data_envelope() {
        let body = json!({
            "data": {
                "tenants": [{
                    "id": "018f2a3e-5c1d-7a00-8000-000000000010",
                    "fullName": "Naledi M",
                    "phone": "+27 82 111 2222",
                }]
            }
        });

        let tenants: Vec<Tenant> = unwrap_collection(body, "tenants").unwrap();
        assert_eq!(tenants.len(), 1);
        assert_eq!(tenants[0].full_name, "Naledi M");
    }

    #[test]
    fn missing_collection_key_is_a_decode_error() {
        let body = json!({ "data": {} });
        let err = unwrap_collection::<Tenant>(body, "tenants").unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn login_envelope_parses_token_and_user() {
        let body = json!({
            "token": "tok-abc",
            "data": {
                "user": {
                    "id": "018f2a3e-5c1d-7a00-8000-000000000001",
                    "fullName": "Ada Stone",
                    "email": "ada@example.com",
                    "role": "STAFF",
                    "status": "ACTIVE",
                }
            }
        });

        let login = parse_login(body).unwrap();
        assert_eq!(login.token, "tok-abc");
        assert_eq!(login.user.email, "ada@example.com");
    }

    #[test]
    fn error_message_falls_back_when_absent() {
        assert_eq!(
            error_message(&json!({ "message": "lease overlaps" }), "request failed"),
            "lease overlaps"
        );
        assert_eq!(error_message(&json!({}), "request failed"), "request failed");
    }
}
