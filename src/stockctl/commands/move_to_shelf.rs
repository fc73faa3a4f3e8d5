use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, StockError};
use crate::input::InputSource;
use crate::model::{InventoryEntry, Location, Product, ShelfItem};
use crate::store::{Shelf, Warehouse};

use super::helpers::{read_amount, read_price, read_product_id};

pub fn run<I: InputSource>(
    warehouse: &mut Warehouse,
    shelf: &mut Shelf,
    input: &mut I,
) -> Result<CmdResult> {
    let id = read_product_id(input, "ID of the product to move: ")?;
    let quantity = read_amount(input, "Quantity to move: ")?;

    let stock = warehouse.find_mut(&id).ok_or_else(|| StockError::NotFound {
        id: id.clone(),
        location: Location::Warehouse,
    })?;

    let available = stock.product().quantity();
    if available < quantity {
        return Err(StockError::InsufficientQuantity {
            requested: quantity,
            available,
            location: Location::Warehouse,
        });
    }

    match shelf.find_mut(&id) {
        // An entry with the same id accumulates quantity; its price is kept.
        Some(existing) => {
            let merged = existing.product().quantity() + quantity;
            existing.product_mut().set_quantity(merged)?;
        }
        None => {
            let price = read_price(input, "Price of the product: ")?;
            let product = Product::new(
                id.clone(),
                stock.product().sector(),
                stock.product().name(),
                quantity,
            )?;
            shelf.add(ShelfItem::new(product, price)?);
        }
    }

    stock.product_mut().set_quantity(available - quantity)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success("Product moved to the shelf."));
    Ok(result)
}
