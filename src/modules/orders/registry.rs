use std::collections::HashMap;

use tokio::sync::RwLock;
use uuid::Uuid;

use super::models::Order;

/// In-memory store of registered orders, keyed by order code.
///
/// The registry is the only place codes are minted. Code generation and
/// insertion share one write lock, so concurrent registrations never see
/// each other half-done.
#[derive(Default)]
pub struct OrderRegistry {
    orders: RwLock<HashMap<String, Order>>,
}

impl OrderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `order` under a freshly generated code and return that code.
    ///
    /// Any code already on the order is overwritten. Contents are not validated.
    pub async fn register(&self, mut order: Order) -> String {
        let mut orders = self.orders.write().await;
        let code = Uuid::new_v4().to_string();
        order.code = code.clone();
        orders.insert(code.clone(), order);
        code
    }

    /// Exact-match lookup; `None` when no order carries `code`.
    pub async fn lookup(&self, code: &str) -> Option<Order> {
        let orders = self.orders.read().await;
        orders.get(code).cloned()
    }

    pub async fn len(&self) -> usize {
        self.orders.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.orders.read().await.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::Arc;

    use super::*;
    use crate::modules::orders::models::{Address, Pizza};

    fn sample_order() -> Order {
        Order {
            code: String::new(),
            first_name: "Ann".to_string(),
            last_name: "Lee".to_string(),
            address: Address {
                street: "Main".to_string(),
                house_number: "5".to_string(),
                city: "Metropolis".to_string(),
            },
            phone_number: "555-1234".to_string(),
            pizzas: vec![Pizza {
                ingredients: vec!["Sauce".to_string(), "Cheese".to_string()],
                price: 9.5,
            }],
        }
    }

    #[tokio::test]
    async fn register_then_lookup_round_trip() {
        let registry = OrderRegistry::new();
        let code = registry.register(sample_order()).await;

        assert!(!code.is_empty());
        let stored = registry.lookup(&code).await.expect("order stored");
        assert_eq!(stored.code, code);
        assert_eq!(
            Order {
                code: String::new(),
                ..stored
            },
            sample_order()
        );
    }

    #[tokio::test]
    async fn client_supplied_code_is_overwritten() {
        let registry = OrderRegistry::new();
        let order = Order {
            code: "my-own-code".to_string(),
            ..sample_order()
        };

        let code = registry.register(order).await;

        assert_ne!(code, "my-own-code");
        assert!(registry.lookup("my-own-code").await.is_none());
        assert_eq!(registry.lookup(&code).await.unwrap().code, code);
    }

    #[tokio::test]
    async fn unknown_code_is_absent() {
        let registry = OrderRegistry::new();
        assert!(registry.lookup("does-not-exist").await.is_none());

        let code = registry.register(sample_order()).await;
        assert!(registry.lookup(&format!("{code} ")).await.is_none());
        assert!(registry.lookup(&code[..8]).await.is_none());
    }

    #[tokio::test]
    async fn sequential_codes_are_unique() {
        let registry = OrderRegistry::new();
        let mut codes = HashSet::new();
        for _ in 0..100 {
            assert!(codes.insert(registry.register(sample_order()).await));
        }
        assert_eq!(registry.len().await, 100);
    }

    #[tokio::test]
    async fn empty_order_is_accepted() {
        let registry = OrderRegistry::new();
        assert!(registry.is_empty().await);

        let code = registry.register(Order::default()).await;
        assert!(!registry.is_empty().await);
        assert!(registry.lookup(&code).await.unwrap().pizzas.is_empty());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_registrations_are_not_lost() {
        let registry = Arc::new(OrderRegistry::new());

        let handles: Vec<_> = (0..64)
            .map(|i| {
                let registry = Arc::clone(&registry);
                tokio::spawn(async move {
                    let order = Order {
                        phone_number: format!("555-{i:04}"),
                        ..sample_order()
                    };
                    (i, registry.register(order).await)
                })
            })
            .collect();

        let mut codes = HashSet::new();
        for handle in handles {
            let (i, code) = handle.await.unwrap();
            let stored = registry.lookup(&code).await.unwrap();
            assert_eq!(stored.phone_number, format!("555-{i:04}"));
            codes.insert(code);
        }

        assert_eq!(codes.len(), 64);
        assert_eq!(registry.len().await, 64);
    }
}
