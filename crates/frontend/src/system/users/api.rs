use contracts::shared::error::DashboardError;
use contracts::system::users::AppUser;

use crate::shared::http::get_collection;

/// End-user accounts; employees and dealers come from their own domain APIs.
pub async fn fetch_app_users() -> Result<Vec<AppUser>, DashboardError> {
    get_collection("users", "/users/api/users").await
}
