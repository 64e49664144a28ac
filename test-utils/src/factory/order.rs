//! Order factory for creating embedded order documents.

/// Factory for creating test orders with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::order::OrderFactory;
///
/// let order = OrderFactory::new()
///     .product_name("Keyboard")
///     .price(49.5)
///     .quantity(2)
///     .build();
/// ```
pub struct OrderFactory {
    product_name: String,
    price: f64,
    quantity: i64,
}

impl OrderFactory {
    /// Creates a new OrderFactory with default values.
    ///
    /// Defaults:
    /// - product_name: `"Product"`
    /// - price: `1.0`
    /// - quantity: `1`
    pub fn new() -> Self {
        Self {
            product_name: "Product".to_string(),
            price: 1.0,
            quantity: 1,
        }
    }

    pub fn product_name(mut self, product_name: impl Into<String>) -> Self {
        self.product_name = product_name.into();
        self
    }

    pub fn price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    pub fn quantity(mut self, quantity: i64) -> Self {
        self.quantity = quantity;
        self
    }

    /// Builds the order document.
    pub fn build(self) -> entity::order::Model {
        entity::order::Model {
            product_name: self.product_name,
            price: self.price,
            quantity: self.quantity,
        }
    }
}

impl Default for OrderFactory {
    fn default() -> Self {
        Self::new()
    }
}

/// Creates an order with the given price and quantity.
///
/// Shorthand for `OrderFactory::new().price(price).quantity(quantity).build()`.
pub fn create_order(price: f64, quantity: i64) -> entity::order::Model {
    OrderFactory::new().price(price).quantity(quantity).build()
}
