use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, StockError};
use crate::input::InputSource;
use crate::model::{InventoryEntry, Location, ProductId};
use crate::store::{Shelf, Warehouse};

use super::helpers::{read_amount, read_product_id};

pub fn run<I: InputSource>(
    warehouse: &mut Warehouse,
    shelf: &mut Shelf,
    location: Location,
    input: &mut I,
) -> Result<CmdResult> {
    let id = read_product_id(input, "ID of the product to remove from: ")?;
    let quantity = read_amount(input, "Quantity to remove: ")?;

    match location {
        Location::Warehouse => decrement(warehouse.find_mut(&id), id, quantity, location)?,
        Location::Shelf => decrement(shelf.find_mut(&id), id, quantity, location)?,
    }

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success("Quantity removed."));
    Ok(result)
}

fn decrement<T: InventoryEntry>(
    entry: Option<&mut T>,
    id: ProductId,
    quantity: f64,
    location: Location,
) -> Result<()> {
    let entry = entry.ok_or(StockError::NotFound { id, location })?;
    let available = entry.product().quantity();
    if available < quantity {
        return Err(StockError::InsufficientQuantity {
            requested: quantity,
            available,
            location,
        });
    }
    entry.product_mut().set_quantity(available - quantity)
}
