use crate::commands::{CmdMessage, CmdResult, ListedItem};
use crate::error::{Result, StockError};
use crate::input::InputSource;
use crate::model::Location;
use crate::store::{Shelf, Warehouse};

use super::helpers::read_product_id;

pub fn run<I: InputSource>(
    warehouse: &Warehouse,
    shelf: &Shelf,
    location: Location,
    input: &mut I,
) -> Result<CmdResult> {
    let id = read_product_id(input, "ID of the product to search for: ")?;

    let found = match location {
        Location::Warehouse => warehouse.find(&id).cloned().map(ListedItem::Stock),
        Location::Shelf => shelf.find(&id).cloned().map(ListedItem::Shelf),
    }
    .ok_or(StockError::NotFound { id, location })?;

    let mut result = CmdResult::default().with_listed_items(vec![found]);
    result.add_message(CmdMessage::info("Product found."));
    Ok(result)
}
