use crate::commands::{CmdMessage, CmdResult, ListedItem};
use crate::error::Result;
use crate::model::Location;
use crate::store::{Shelf, Warehouse};

pub fn run(warehouse: &Warehouse, shelf: &Shelf, location: Location) -> Result<CmdResult> {
    let listed: Vec<ListedItem> = match location {
        Location::Warehouse => warehouse
            .items()
            .iter()
            .cloned()
            .map(ListedItem::Stock)
            .collect(),
        Location::Shelf => shelf.items().iter().cloned().map(ListedItem::Shelf).collect(),
    };

    let mut result = CmdResult::default();
    let header = match (location, listed.is_empty()) {
        (Location::Warehouse, true) => "No products in the warehouse.",
        (Location::Warehouse, false) => "Products in the warehouse:",
        (Location::Shelf, true) => "No products on the shelf.",
        (Location::Shelf, false) => "Products on the shelf:",
    };
    result.add_message(CmdMessage::info(header));
    Ok(result.with_listed_items(listed))
}
