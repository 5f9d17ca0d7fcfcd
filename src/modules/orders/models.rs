use serde::{de::IgnoredAny, Deserialize, Deserializer, Serialize};

/// `null` decodes like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Codes are minted server-side; whatever arrives on the wire is dropped.
fn discard_code<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    IgnoredAny::deserialize(deserializer)?;
    Ok(String::new())
}

/// Delivery address. Every field is free text and may be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    #[serde(default, deserialize_with = "null_as_default")]
    pub street: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub house_number: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub city: String,
}

/// One pizza as composed by the customer.
///
/// Ingredient names are not checked against the catalog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Pizza {
    #[serde(default, deserialize_with = "null_as_default")]
    pub ingredients: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub price: f64,
}

/// Customer order.
///
/// `code` is assigned by the order registry and never read from the wire;
/// any incoming value, `null` included, decodes as an empty code.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(default, deserialize_with = "discard_code")]
    pub code: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub first_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub last_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub address: Address,
    #[serde(default, deserialize_with = "null_as_default")]
    pub phone_number: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub pizzas: Vec<Pizza>,
}

impl Order {
    /// Sum of all pizza prices
    pub fn total_price(&self) -> f64 {
        self.pizzas.iter().map(|pizza| pizza.price).sum()
    }
}
