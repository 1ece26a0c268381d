//! Cart commands.

use naked_pineapple_basket::{Basket, LineItem};
use naked_pineapple_core::{Color, Product, ProductId, Quantity, UnitPrice};
use tracing::info;

use super::CommandError;

/// Line item fields as given on the command line.
#[derive(Debug)]
pub struct LineInput {
    pub product_id: ProductId,
    pub name: String,
    pub price: UnitPrice,
    pub image_url: String,
    pub color: Option<Color>,
    /// When non-empty, `color` must be one of these.
    pub offered_colors: Vec<Color>,
    pub quantity: u32,
}

impl LineInput {
    fn into_line_item(self) -> Result<LineItem, CommandError> {
        let quantity = Quantity::new(self.quantity)?;
        if self.offered_colors.is_empty() {
            return Ok(LineItem::new(
                self.product_id,
                self.name,
                self.price,
                self.image_url,
                quantity,
                self.color,
            ));
        }

        let product = Product {
            id: self.product_id,
            name: self.name,
            price: self.price,
            image_url: self.image_url,
            colors: self.offered_colors,
        };
        Ok(LineItem::from_product(&product, self.color, quantity)?)
    }
}

/// Add a line to the cart.
///
/// # Errors
///
/// Returns an error if the quantity is zero or the color is not offered.
pub fn add(basket: &mut Basket, input: LineInput) -> Result<(), CommandError> {
    let line = input.into_line_item()?;
    info!(product_id = %line.product_id, quantity = line.quantity.get(), "Adding to cart");
    basket.cart_mut().add_item(line);
    Ok(())
}

/// Remove a product, or a single color of it.
pub fn remove(basket: &mut Basket, product_id: &ProductId, color: Option<&Color>) {
    match color {
        Some(color) => basket.cart_mut().remove_variant(product_id, Some(color)),
        None => basket.cart_mut().remove_item(product_id),
    }
}

/// Set the quantity of a product, or of a single color of it.
pub fn set_quantity(
    basket: &mut Basket,
    product_id: &ProductId,
    color: Option<&Color>,
    quantity: i64,
) {
    match color {
        Some(color) => basket
            .cart_mut()
            .set_variant_quantity(product_id, Some(color), quantity),
        None => basket.cart_mut().set_quantity(product_id, quantity),
    }
}
