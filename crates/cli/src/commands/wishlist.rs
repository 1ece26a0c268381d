//! Wishlist commands.

use naked_pineapple_basket::{Basket, WishlistItem};
use naked_pineapple_core::{Color, ProductId, Quantity, UnitPrice};
use tracing::info;

use super::CommandError;

/// Save a product to the wishlist.
///
/// Returns `false` if the product was already saved.
pub fn add(
    basket: &mut Basket,
    product_id: ProductId,
    name: String,
    price: UnitPrice,
    image_url: String,
) -> bool {
    let item = WishlistItem::new(product_id.clone(), name, price, image_url);
    let saved = basket.wishlist_mut().add_item(item);
    if !saved {
        info!(%product_id, "Already on wishlist");
    }
    saved
}

/// Move a saved product into the cart.
///
/// # Errors
///
/// Returns an error if the quantity is zero or the product is not saved.
pub fn move_to_cart(
    basket: &mut Basket,
    product_id: &ProductId,
    color: Option<Color>,
    quantity: u32,
) -> Result<(), CommandError> {
    let quantity = Quantity::new(quantity)?;
    if !basket.move_to_cart(product_id, color, quantity) {
        return Err(CommandError::NotOnWishlist(product_id.clone()));
    }
    info!(%product_id, "Moved to cart");
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_move_missing_product() {
        let mut basket = Basket::detached();
        let id = ProductId::parse("hat").unwrap();
        let err = move_to_cart(&mut basket, &id, None, 1).unwrap_err();
        assert_eq!(err.to_string(), "Product hat is not on the wishlist");
    }

    #[test]
    fn test_add_then_move() {
        let mut basket = Basket::detached();
        let id = ProductId::parse("hat").unwrap();
        assert!(add(
            &mut basket,
            id.clone(),
            "Hat".to_string(),
            UnitPrice::parse("15").unwrap(),
            "img".to_string(),
        ));
        assert!(!add(
            &mut basket,
            id.clone(),
            "Other Hat".to_string(),
            UnitPrice::parse("99").unwrap(),
            "img".to_string(),
        ));
        assert_eq!(basket.wishlist().get(&id).unwrap().name, "Hat");
        move_to_cart(&mut basket, &id, None, 3).unwrap();
        assert_eq!(basket.cart().total_item_count(), 3);
        assert!(basket.wishlist().is_empty());
    }
}
