use contracts::shared::error::DashboardError;
use contracts::shared::normalize::{extract_message, normalize_record};
use contracts::system::auth::{LoginRequest, LoginResponse, UserInfo};
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

const RESOURCE: &str = "account";

/// Login with email and password
pub async fn login(email: String, password: String) -> Result<LoginResponse, DashboardError> {
    let request = LoginRequest { email, password };

    let response = Request::post(&api_url("/users/api/users/login"))
        .json(&request)
        .map_err(|e| DashboardError::network(RESOURCE, e))?
        .send()
        .await
        .map_err(|e| DashboardError::network(RESOURCE, e))?;

    if !response.ok() {
        let status = response.status();
        let message = response
            .json::<serde_json::Value>()
            .await
            .ok()
            .as_ref()
            .and_then(extract_message);
        return Err(match status {
            400 | 401 | 404 => DashboardError::Rejected {
                resource: RESOURCE.to_string(),
                message: message.unwrap_or_else(|| "Invalid email or password".to_string()),
            },
            status => DashboardError::from_status(RESOURCE, status),
        });
    }

    let body: serde_json::Value = response
        .json()
        .await
        .map_err(|e| DashboardError::decode(RESOURCE, e))?;
    normalize_record(RESOURCE, body)
}

/// Get current user info
pub async fn get_current_user(access_token: &str) -> Result<UserInfo, DashboardError> {
    let response = Request::get(&api_url("/users/api/users/me"))
        .header("Authorization", &format!("Bearer {}", access_token))
        .send()
        .await
        .map_err(|e| DashboardError::network(RESOURCE, e))?;

    if !response.ok() {
        return Err(DashboardError::from_status(RESOURCE, response.status()));
    }

    let body: serde_json::Value = response
        .json()
        .await
        .map_err(|e| DashboardError::decode(RESOURCE, e))?;
    normalize_record(RESOURCE, body)
}
