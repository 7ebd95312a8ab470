//! Fetch boundary: authenticated JSON requests whose responses are
//! normalized into typed records, and failures into [`DashboardError`].

use contracts::shared::error::DashboardError;
use contracts::shared::normalize::{extract_message, normalize_collection, normalize_record};
use contracts::shared::select_option::SelectOption;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::shared::api_utils::api_url;
use crate::system::auth::storage;

fn with_auth(builder: RequestBuilder) -> RequestBuilder {
    match storage::get_access_token() {
        Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
        None => builder,
    }
}

async fn read_json(resource: &str, response: Response) -> Result<Value, DashboardError> {
    if !response.ok() {
        let status = response.status();
        // Conflicts and bad requests usually explain themselves.
        if matches!(status, 400 | 409 | 422) {
            if let Some(message) = response
                .json::<Value>()
                .await
                .ok()
                .as_ref()
                .and_then(extract_message)
            {
                return Err(DashboardError::Rejected {
                    resource: resource.to_string(),
                    message,
                });
            }
        }
        return Err(DashboardError::from_status(resource, status));
    }
    response
        .json::<Value>()
        .await
        .map_err(|e| DashboardError::decode(resource, e))
}

async fn get_json(resource: &str, path: &str) -> Result<Value, DashboardError> {
    let response = with_auth(Request::get(&api_url(path)))
        .send()
        .await
        .map_err(|e| DashboardError::network(resource, e))?;
    read_json(resource, response).await
}

/// GET a collection and normalize whatever envelope the API used.
pub async fn get_collection<T: DeserializeOwned>(
    resource: &str,
    path: &str,
) -> Result<Vec<T>, DashboardError> {
    let body = get_json(resource, path).await?;
    normalize_collection(resource, body)
}

/// GET a collection and convert each record into a dropdown option.
pub async fn get_options<T>(resource: &str, path: &str) -> Result<Vec<SelectOption>, DashboardError>
where
    T: DeserializeOwned + Into<SelectOption>,
{
    let rows: Vec<T> = get_collection(resource, path).await?;
    Ok(rows.into_iter().map(Into::into).collect())
}

pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    resource: &str,
    path: &str,
    body: &B,
) -> Result<T, DashboardError> {
    let response = with_auth(Request::post(&api_url(path)))
        .json(body)
        .map_err(|e| DashboardError::decode(resource, e))?
        .send()
        .await
        .map_err(|e| DashboardError::network(resource, e))?;
    let value = read_json(resource, response).await?;
    normalize_record(resource, value)
}

pub async fn patch_json<B: Serialize, T: DeserializeOwned>(
    resource: &str,
    path: &str,
    body: &B,
) -> Result<T, DashboardError> {
    let response = with_auth(Request::patch(&api_url(path)))
        .json(body)
        .map_err(|e| DashboardError::decode(resource, e))?
        .send()
        .await
        .map_err(|e| DashboardError::network(resource, e))?;
    let value = read_json(resource, response).await?;
    normalize_record(resource, value)
}
