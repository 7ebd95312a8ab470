/// Human-readable tab title for a tab key; "Untitled" for unknown keys.
pub fn tab_label_for_key(key: &str) -> &'static str {
    match key {
        "a001_category" => "Categories",
        "a002_product" => "Products",
        "a002_product_new" => "Add Product",
        "a003_ticket" => "Support Tickets",
        "a004_employee_new" => "Add Employee",
        "a005_dealer" => "Dealers",
        "a005_dealer_new" => "Add Dealer",
        "sys_users" => "User Management",
        _ => "Untitled",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_and_unknown_keys() {
        assert_eq!(tab_label_for_key("a002_product_new"), "Add Product");
        assert_eq!(tab_label_for_key("sys_users"), "User Management");
        assert_eq!(tab_label_for_key("nope"), "Untitled");
    }
}
