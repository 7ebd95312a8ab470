use contracts::domain::a005_dealer::form::DealerPayload;
use contracts::domain::a005_dealer::Dealer;
use contracts::shared::error::DashboardError;
use contracts::shared::select_option::SelectOption;
use serde_json::Value;

use crate::shared::http::{get_collection, get_options, post_json};

const DEALERS_PATH: &str = "/users/api/users/dealers";

pub async fn fetch_dealers() -> Result<Vec<Dealer>, DashboardError> {
    get_collection("dealers", DEALERS_PATH).await
}

pub async fn dealer_options() -> Result<Vec<SelectOption>, DashboardError> {
    get_options::<Dealer>("dealers", DEALERS_PATH).await
}

pub async fn create_dealer(payload: &DealerPayload) -> Result<(), DashboardError> {
    let _: Value = post_json("dealer", "/users/api/users/dealer", payload).await?;
    Ok(())
}
