//! Store orchestration layer
//!
//! Owns the product and customer registries. Cart, basket and checkout
//! operations validate every product and quantity involved before any stock
//! moves.

use crate::customer::check_address;
use crate::product::ensure_quantity;
use crate::{Basket, BasketLine, Cart, Customer, OrderReceipt, Product, Purchase, StoreConfig};
use chrono::Utc;
use entity_core::{Email, Error, Metrics, Registry, Result};
use indexmap::IndexMap;
use patterns::PaymentProcessor;
use rust_decimal::Decimal;
use uuid::Uuid;

/// In-memory online store
#[derive(Debug)]
pub struct Store {
    /// Catalog by product name
    products: Registry<Product>,

    /// Customers by e-mail
    customers: Registry<Customer>,

    /// Operation counters (if enabled)
    metrics: Option<Metrics>,

    /// Configuration
    config: StoreConfig,
}

impl Store {
    /// Create store with configuration
    pub fn new(config: StoreConfig) -> Self {
        Self {
            products: Registry::new(),
            customers: Registry::new(),
            metrics: None,
            config,
        }
    }

    /// Record operation outcomes in `metrics`
    pub fn with_metrics(mut self, metrics: Metrics) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// Store name
    pub fn name(&self) -> &str {
        &self.config.name
    }

    /// Store configuration
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Add a product to the catalog
    pub fn register_product(&mut self, product: Product) -> Result<()> {
        let product = self.products.register(product)?;
        tracing::info!(product = product.name(), stock = product.stock(), "Product registered");
        Ok(())
    }

    /// Add a customer; the address must meet the configured minimum length
    pub fn register_customer(&mut self, customer: Customer) -> Result<()> {
        check_address(customer.address(), self.config.min_address_len)?;
        let customer = self.customers.register(customer)?;
        tracing::info!(customer = %customer.email(), "Customer registered");
        Ok(())
    }

    /// Look up a product
    pub fn product(&self, name: &str) -> Result<&Product> {
        self.products.find(&name.to_string())
    }

    /// Look up a customer
    pub fn customer(&self, email: &str) -> Result<&Customer> {
        self.customers.find(&Email::parse(email)?)
    }

    /// All products in registration order
    pub fn products(&self) -> impl ExactSizeIterator<Item = &Product> + '_ {
        self.products.list()
    }

    /// All customers in registration order
    pub fn customers(&self) -> impl ExactSizeIterator<Item = &Customer> + '_ {
        self.customers.list()
    }

    /// Change a customer's delivery address
    pub fn update_address(&mut self, email: &str, address: &str) -> Result<()> {
        let min_len = self.config.min_address_len;
        self.customers
            .find_mut(&Email::parse(email)?)?
            .set_address(address, min_len)
    }

    /// Change a product's unit price (carts keep the price they reserved at)
    pub fn set_price(&mut self, name: &str, price: Decimal) -> Result<()> {
        self.products.find_mut(&name.to_string())?.set_price(price)
    }

    /// Put units of a product in stock, returning the new stock
    pub fn restock(&mut self, name: &str, quantity: u32) -> Result<u32> {
        let result = self
            .products
            .find_mut(&name.to_string())
            .and_then(|product| product.add_stock(quantity));

        self.observe("restock", &result);
        result
    }

    /// Take units of a product out of stock, returning the new stock
    pub fn remove_stock(&mut self, name: &str, quantity: u32) -> Result<u32> {
        let result = self
            .products
            .find_mut(&name.to_string())
            .and_then(|product| product.remove_stock(quantity));

        self.observe("remove_stock", &result);
        if let Err(err) = &result {
            tracing::warn!(product = name, quantity, kind = %err.kind(), "Stock removal rejected: {}", err);
        }
        result
    }

    /// Empty cart priced with the configured shipping rate
    pub fn new_cart(&self) -> Cart {
        Cart::new(self.config.shipping_rate_per_kg)
    }

    /// Reserve `quantity` units of a product in a cart
    ///
    /// Adding a product already in the cart reserves only the extra units
    /// and keeps the original unit price.
    pub fn add_to_cart(&mut self, cart: &mut Cart, name: &str, quantity: u32) -> Result<()> {
        let result = self
            .products
            .find_mut(&name.to_string())
            .and_then(|product| {
                product.check_remove(quantity)?;
                cart.check_reserve(name, quantity)?;
                product.remove_stock(quantity)?;
                cart.reserve(product, quantity)
            });

        self.observe("add_to_cart", &result);
        match &result {
            Ok(()) => tracing::info!(product = name, quantity, "Added to cart"),
            Err(err) => tracing::warn!(product = name, quantity, kind = %err.kind(), "Add to cart rejected: {}", err),
        }
        result
    }

    /// Drop a product from a cart, returning its units to stock
    pub fn remove_from_cart(&mut self, cart: &mut Cart, name: &str) -> Result<()> {
        let quantity = cart
            .line(name)
            .map(|line| line.quantity)
            .ok_or_else(|| Error::not_found("cart line", name))?;

        self.products.find_mut(&name.to_string())?.add_stock(quantity)?;
        cart.release(name);

        tracing::info!(product = name, quantity, "Removed from cart");
        Ok(())
    }

    /// Return every reserved unit to stock and empty the cart
    pub fn clear_cart(&mut self, cart: &mut Cart) -> Result<()> {
        for line in cart.lines() {
            self.products.find(&line.product)?.check_add(line.quantity)?;
        }

        for line in cart.drain() {
            self.products.find_mut(&line.product)?.add_stock(line.quantity)?;
        }
        Ok(())
    }

    /// Pay for a cart and record the purchase in the customer's history
    ///
    /// Reserved stock stays taken. On failure the cart is left as it was.
    pub fn checkout(
        &mut self,
        email: &str,
        cart: &mut Cart,
        processor: &PaymentProcessor,
    ) -> Result<Purchase> {
        let result = self.execute_checkout(email, cart, processor);

        self.observe("checkout", &result);
        match &result {
            Ok(purchase) => tracing::info!(
                order = %purchase.order_id,
                customer = email,
                total = %purchase.total,
                "Checkout completed"
            ),
            Err(err) => tracing::warn!(customer = email, kind = %err.kind(), "Checkout rejected: {}", err),
        }
        result
    }

    fn execute_checkout(
        &mut self,
        email: &str,
        cart: &mut Cart,
        processor: &PaymentProcessor,
    ) -> Result<Purchase> {
        let email = Email::parse(email)?;
        self.customers.find(&email)?;

        if cart.is_empty() {
            return Err(Error::validation("cart is empty"));
        }

        let subtotal = cart.subtotal();
        let shipping = cart.shipping();
        let discount = cart.discount();
        let total = cart.total();
        let payment = processor.process(total)?;

        let purchase = Purchase {
            order_id: Uuid::now_v7(),
            lines: cart.drain(),
            subtotal,
            shipping,
            discount,
            total,
            payment,
            purchased_at: Utc::now(),
        };

        self.customers.find_mut(&email)?.record_purchase(purchase.clone());
        Ok(purchase)
    }

    /// Put a product in a basket after checking, not reserving, its stock
    ///
    /// The check counts units of the same product already in the basket.
    pub fn add_to_basket(&self, basket: &mut Basket, name: &str, quantity: u32) -> Result<()> {
        ensure_quantity(quantity)?;
        let product = self.product(name)?;

        let wanted = basket
            .quantity_of(name)
            .checked_add(quantity)
            .ok_or_else(|| Error::validation("basket quantity overflow"))?;
        product.check_remove(wanted)?;

        basket.push(name, quantity);
        Ok(())
    }

    /// Take stock for every basket line at once
    ///
    /// Quantities of the same product are summed and checked against the
    /// current stock before any product changes.
    pub fn place_order(&mut self, basket: &mut Basket) -> Result<OrderReceipt> {
        let result = self.execute_order(basket);

        self.observe("place_order", &result);
        match &result {
            Ok(order) => tracing::info!(order = %order.order_id, total = %order.total, "Order placed"),
            Err(err) => tracing::warn!(kind = %err.kind(), "Order rejected: {}", err),
        }
        result
    }

    fn execute_order(&mut self, basket: &mut Basket) -> Result<OrderReceipt> {
        if basket.is_empty() {
            return Err(Error::validation("basket is empty"));
        }

        // Step 1: merge lines per product
        let mut wanted: IndexMap<&str, u32> = IndexMap::new();
        for line in basket.lines() {
            let entry = wanted.entry(line.product.as_str()).or_insert(0);
            *entry = entry
                .checked_add(line.quantity)
                .ok_or_else(|| Error::validation("basket quantity overflow"))?;
        }

        // Step 2: validate every product
        let mut total = Decimal::ZERO;
        for (name, quantity) in &wanted {
            let product = self.product(name)?;
            product.check_remove(*quantity)?;
            total += product.price() * Decimal::from(*quantity);
        }

        // Step 3: commit
        let mut lines = Vec::with_capacity(wanted.len());
        for (name, quantity) in wanted {
            self.products.find_mut(&name.to_string())?.remove_stock(quantity)?;
            lines.push(BasketLine {
                product: name.to_string(),
                quantity,
            });
        }

        basket.clear();
        Ok(OrderReceipt {
            order_id: Uuid::now_v7(),
            lines,
            total,
        })
    }

    fn observe<T>(&self, operation: &str, result: &Result<T>) {
        if let Some(metrics) = &self.metrics {
            metrics.observe(operation, result);
        }
    }
}
