use serde::{Deserialize, Deserializer, Serialize};

/// A row of the `products` table.
///
/// Every field falls back to its zero value when absent or `null` in a
/// request body, and `created_at` is stored verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(default)]
pub struct Product {
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub is_available: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub bar_code: String,
    #[serde(deserialize_with = "null_as_default")]
    pub category: String,
    #[serde(deserialize_with = "null_as_default")]
    pub created_at: String,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Product {
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_fields_default_to_zero_values() {
        let product: Product = serde_json::from_value(json!({ "name": "Widget" })).unwrap();

        assert_eq!(product.id, 0);
        assert_eq!(product.name, "Widget");
        assert!(!product.is_available);
        assert!(product.bar_code.is_empty());
    }

    #[test]
    fn serializes_with_wire_field_names() {
        let product = Product {
            id: 7,
            name: "Widget".to_string(),
            is_available: true,
            bar_code: "123".to_string(),
            category: "tools".to_string(),
            created_at: "2024-01-01".to_string(),
        };

        assert_eq!(
            serde_json::to_value(&product).unwrap(),
            json!({
                "id": 7,
                "name": "Widget",
                "is_available": true,
                "bar_code": "123",
                "category": "tools",
                "created_at": "2024-01-01"
            })
        );
    }

    #[test]
    fn null_fields_keep_zero_values() {
        let product: Product = serde_json::from_value(json!({
            "id": null,
            "name": null,
            "is_available": null,
            "bar_code": "123"
        }))
        .unwrap();

        assert_eq!(product.id, 0);
        assert!(product.name.is_empty());
        assert!(!product.is_available);
        assert_eq!(product.bar_code, "123");
    }

    #[test]
    fn wrong_field_type_is_rejected() {
        let result = serde_json::from_value::<Product>(json!({ "is_available": "yes" }));
        assert!(result.is_err());
    }
}
