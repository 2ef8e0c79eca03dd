//! Shopping cart lines and purchase summaries.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{orders::OrderDetail, products::Product};

/// One cart entry referencing a product and a quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub product_id: i64,
    pub name: String,
    pub price: Decimal,

    #[serde(default)]
    pub image: Option<String>,

    /// Always at least 1; merged rather than duplicated per product.
    pub quantity: u32,
}

impl CartLine {
    /// Line subtotal (`price × quantity`).
    #[must_use]
    pub fn subtotal(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}

/// Errors produced by cart mutations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CartError {
    #[error("no cart line at index {index} (cart has {len})")]
    LineOutOfRange { index: usize, len: usize },
}

/// Ordered collection of cart lines, at most one line per product.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Add one unit of `product`: merge into the existing line for the same
    /// product, or append a fresh line with quantity 1.
    pub fn add(&mut self, product: &Product) {
        if let Some(line) = self
            .lines
            .iter_mut()
            .find(|line| line.product_id == product.id)
        {
            line.quantity = line.quantity.saturating_add(1);

            return;
        }

        self.lines.push(CartLine {
            product_id: product.id,
            name: product.nombre.clone(),
            price: product.precio,
            image: product.imagen.clone(),
            quantity: 1,
        });
    }

    /// Remove and return the line at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::LineOutOfRange`] when `index` is past the end.
    pub fn remove(&mut self, index: usize) -> Result<CartLine, CartError> {
        if index >= self.lines.len() {
            return Err(CartError::LineOutOfRange {
                index,
                len: self.lines.len(),
            });
        }

        Ok(self.lines.remove(index))
    }

    /// Apply `delta` to the quantity at `index`, clamping at a minimum of 1.
    /// Returns the resulting quantity.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::LineOutOfRange`] when `index` is past the end.
    pub fn change_quantity(&mut self, index: usize, delta: i32) -> Result<u32, CartError> {
        let len = self.lines.len();

        let line = self
            .lines
            .get_mut(index)
            .ok_or(CartError::LineOutOfRange { index, len })?;

        let next = i64::from(line.quantity) + i64::from(delta);

        line.quantity = u32::try_from(next.max(1)).unwrap_or(u32::MAX);

        Ok(line.quantity)
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Sum of all line subtotals.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.lines.iter().map(CartLine::subtotal).sum()
    }

    /// Build the order-confirmation detail rows and their grand total.
    #[must_use]
    pub fn purchase_details(&self) -> (Decimal, Vec<OrderDetail>) {
        let detalles: Vec<OrderDetail> = self
            .lines
            .iter()
            .map(|line| OrderDetail {
                producto_id: line.product_id,
                cantidad: line.quantity,
                subtotal: line.subtotal(),
            })
            .collect();

        let total = detalles.iter().map(|detalle| detalle.subtotal).sum();

        (total, detalles)
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::products::ProductStatus;

    use super::*;

    fn product(id: i64, nombre: &str, precio: Decimal) -> Product {
        Product {
            id,
            nombre: nombre.to_string(),
            descripcion: None,
            precio,
            stock: Some(10),
            categoria: None,
            imagen: None,
            estado: ProductStatus::Activo,
        }
    }

    #[test]
    fn adding_same_product_twice_merges_into_one_line() {
        let mut cart = Cart::new();
        let cafe = product(1, "Café", Decimal::from(45));

        cart.add(&cafe);
        cart.add(&cafe);

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.lines()[0].quantity, 2);
    }

    #[test]
    fn adding_different_products_appends_in_order() {
        let mut cart = Cart::new();

        cart.add(&product(1, "Café", Decimal::from(45)));
        cart.add(&product(2, "Pan", Decimal::from(3)));

        assert_eq!(cart.len(), 2);
        assert_eq!(cart.lines()[0].name, "Café");
        assert_eq!(cart.lines()[1].name, "Pan");
    }

    #[test]
    fn change_quantity_never_drops_below_one() -> TestResult {
        let mut cart = Cart::new();

        cart.add(&product(1, "Café", Decimal::from(45)));

        let quantity = cart.change_quantity(0, -100)?;

        assert_eq!(quantity, 1);

        let quantity = cart.change_quantity(0, -1)?;

        assert_eq!(quantity, 1);

        Ok(())
    }

    #[test]
    fn change_quantity_applies_positive_delta() -> TestResult {
        let mut cart = Cart::new();

        cart.add(&product(1, "Café", Decimal::from(45)));

        let quantity = cart.change_quantity(0, 3)?;

        assert_eq!(quantity, 4);

        Ok(())
    }

    #[test]
    fn change_quantity_out_of_range_is_an_error() {
        let mut cart = Cart::new();

        let result = cart.change_quantity(0, 1);

        assert_eq!(result, Err(CartError::LineOutOfRange { index: 0, len: 0 }));
    }

    #[test]
    fn remove_deletes_exactly_the_indexed_line() -> TestResult {
        let mut cart = Cart::new();

        cart.add(&product(1, "Café", Decimal::from(45)));
        cart.add(&product(2, "Pan", Decimal::from(3)));

        let removed = cart.remove(0)?;

        assert_eq!(removed.product_id, 1);
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.lines()[0].product_id, 2);

        Ok(())
    }

    #[test]
    fn remove_out_of_range_is_an_error() {
        let mut cart = Cart::new();

        let result = cart.remove(2);

        assert_eq!(result, Err(CartError::LineOutOfRange { index: 2, len: 0 }));
    }

    #[test]
    fn purchase_details_compute_subtotals_and_total() -> TestResult {
        let mut cart = Cart::new();

        cart.add(&product(1, "Café", Decimal::from(10)));
        cart.change_quantity(0, 1)?;
        cart.add(&product(2, "Pan", Decimal::from(5)));

        let (total, detalles) = cart.purchase_details();

        assert_eq!(total, Decimal::from(25));
        assert_eq!(detalles.len(), 2);
        assert_eq!(detalles[0].cantidad, 2);
        assert_eq!(detalles[0].subtotal, Decimal::from(20));
        assert_eq!(detalles[1].subtotal, Decimal::from(5));

        Ok(())
    }

    #[test]
    fn clear_empties_the_cart() {
        let mut cart = Cart::new();

        cart.add(&product(1, "Café", Decimal::from(45)));
        cart.clear();

        assert!(cart.is_empty());
        assert_eq!(cart.total(), Decimal::ZERO);
    }

    #[test]
    fn cart_round_trips_through_json() -> TestResult {
        let mut cart = Cart::new();

        cart.add(&product(1, "Café", Decimal::from(45)));
        cart.add(&product(2, "Pan", Decimal::from(3)));

        let encoded = serde_json::to_string(&cart)?;
        let decoded: Cart = serde_json::from_str(&encoded)?;

        assert_eq!(decoded, cart);

        Ok(())
    }
}
