//! Order payload

use serde::Serialize;

/// Order request body
///
/// Ingredient ids are opaque catalog references and are sent as given.
/// `None` leaves the `ingredients` key out of the body entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Order {
    #[serde(skip_serializing_if = "Option::is_none")]
    ingredients: Option<Vec<String>>,
}

impl Order {
    pub fn new<I, S>(ingredients: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            ingredients: Some(ingredients.into_iter().map(Into::into).collect()),
        }
    }

    /// Order without any ingredient list
    pub fn without_ingredients() -> Self {
        Self { ingredients: None }
    }

    pub fn ingredients(&self) -> &[String] {
        self.ingredients.as_deref().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_keeps_ingredient_order() {
        let order = Order::new(["b", "a", "c"]);
        assert_eq!(order.ingredients(), ["b", "a", "c"]);
        assert_eq!(
            serde_json::to_value(&order).unwrap(),
            serde_json::json!({ "ingredients": ["b", "a", "c"] })
        );
    }

    #[test]
    fn test_order_without_ingredients_omits_key() {
        let order = Order::without_ingredients();
        assert!(order.ingredients().is_empty());
        assert_eq!(serde_json::to_string(&order).unwrap(), "{}");
    }

    #[test]
    fn test_empty_order_sends_empty_list() {
        let order = Order::new(Vec::<String>::new());
        assert_eq!(
            serde_json::to_string(&order).unwrap(),
            r#"{"ingredients":[]}"#
        );
    }
}
