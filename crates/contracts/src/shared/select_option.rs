use serde::{Deserialize, Serialize};

/// A selectable value in a dropdown (category, brand, model, variant, dealer...).
///
/// `parent_id` links the option to its upstream selection when the option set
/// is scoped, e.g. a model belongs to a brand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub id: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
}

impl SelectOption {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            parent_id: None,
        }
    }

    pub fn with_parent(mut self, parent_id: impl Into<String>) -> Self {
        self.parent_id = Some(parent_id.into());
        self
    }
}

/// Converts a fetched collection into dropdown options.
pub fn to_options<T, I>(items: I) -> Vec<SelectOption>
where
    I: IntoIterator<Item = T>,
    T: Into<SelectOption>,
{
    items.into_iter().map(Into::into).collect()
}

/// Finds the label for `id`, if present.
pub fn label_for<'a>(options: &'a [SelectOption], id: &str) -> Option<&'a str> {
    options
        .iter()
        .find(|o| o.id == id)
        .map(|o| o.label.as_str())
}
