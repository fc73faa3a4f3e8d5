use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::input::InputSource;
use crate::model::Location;
use crate::store::{Shelf, Warehouse};

use super::helpers::read_product_id;

pub fn run<I: InputSource>(
    warehouse: &mut Warehouse,
    shelf: &mut Shelf,
    location: Location,
    input: &mut I,
) -> Result<CmdResult> {
    let id = read_product_id(input, "ID of the product to delete: ")?;

    // An absent id deletes nothing; the operation still reports success.
    match location {
        Location::Warehouse => {
            if let Some(index) = warehouse.position(&id) {
                warehouse.remove_at(index);
            }
        }
        Location::Shelf => {
            if let Some(index) = shelf.position(&id) {
                shelf.remove_at(index);
            }
        }
    }

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Product deleted from the {}.",
        location
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::add;
    use crate::input::ScriptedInput;
    use crate::model::ProductId;

    fn id(s: &str) -> ProductId {
        s.parse().unwrap()
    }

    fn warehouse_with_duplicates() -> Warehouse {
        let mut warehouse = Warehouse::new();
        for stack in ["900001", "900002"] {
            let mut input = ScriptedInput::new(["123456", stack, "A", "Widget", "10"]);
            add::run(&mut warehouse, &mut input).unwrap();
        }
        warehouse
    }

    #[test]
    fn deletes_only_the_first_matching_entry() {
        let mut warehouse = warehouse_with_duplicates();
        let mut shelf = Shelf::new();
        let mut input = ScriptedInput::new(["123456"]);

        run(&mut warehouse, &mut shelf, Location::Warehouse, &mut input).unwrap();

        assert_eq!(warehouse.len(), 1);
        assert_eq!(
            warehouse.find(&id("123456")).unwrap().stack_id().as_str(),
            "900002"
        );
    }

    #[test]
    fn missing_id_deletes_nothing_and_still_succeeds() {
        let mut warehouse = warehouse_with_duplicates();
        let mut shelf = Shelf::new();
        let mut input = ScriptedInput::new(["999999"]);

        let result = run(&mut warehouse, &mut shelf, Location::Warehouse, &mut input).unwrap();

        assert_eq!(warehouse.len(), 2);
        assert_eq!(result.messages.len(), 1);
    }

    #[test]
    fn deletes_from_the_shelf_without_touching_the_warehouse() {
        let mut warehouse = warehouse_with_duplicates();
        let mut shelf = Shelf::new();
        let product =
            crate::model::Product::new(id("123456"), "A", "Widget", 4.0).unwrap();
        shelf.add(crate::model::ShelfItem::new(product, 3.5).unwrap());

        let mut input = ScriptedInput::new(["123456"]);
        run(&mut warehouse, &mut shelf, Location::Shelf, &mut input).unwrap();

        assert!(shelf.is_empty());
        assert_eq!(warehouse.len(), 2);
    }

    #[test]
    fn rejects_a_malformed_id() {
        let mut warehouse = warehouse_with_duplicates();
        let mut shelf = Shelf::new();
        let mut input = ScriptedInput::new(["12345"]);

        assert!(run(&mut warehouse, &mut shelf, Location::Warehouse, &mut input).is_err());
        assert_eq!(warehouse.len(), 2);
    }
}
