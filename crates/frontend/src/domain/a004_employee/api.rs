use contracts::domain::a004_employee::{Employee, EmployeePayload};
use contracts::shared::error::DashboardError;
use contracts::shared::select_option::SelectOption;
use serde_json::Value;

use crate::shared::http::{get_collection, get_options, post_json};

const EMPLOYEES_PATH: &str = "/users/api/users/employee/get-all-employees";

pub async fn fetch_employees() -> Result<Vec<Employee>, DashboardError> {
    get_collection("employees", EMPLOYEES_PATH).await
}

pub async fn employee_options() -> Result<Vec<SelectOption>, DashboardError> {
    get_options::<Employee>("employees", EMPLOYEES_PATH).await
}

pub async fn create_employee(payload: &EmployeePayload) -> Result<(), DashboardError> {
    let _: Value = post_json("employee", "/users/api/users/create-Employee", payload).await?;
    Ok(())
}
