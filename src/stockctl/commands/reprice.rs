use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, StockError};
use crate::input::InputSource;
use crate::model::Location;
use crate::store::Shelf;

use super::helpers::{read_price, read_product_id};

pub fn run<I: InputSource>(shelf: &mut Shelf, input: &mut I) -> Result<CmdResult> {
    let id = read_product_id(input, "ID of the product to reprice: ")?;
    let price = read_price(input, "New price: ")?;

    let item = shelf.find_mut(&id).ok_or(StockError::NotFound {
        id,
        location: Location::Shelf,
    })?;
    item.set_price(price)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success("Product price updated."));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::ScriptedInput;
    use crate::model::{Product, ProductId, ShelfItem};

    fn id(s: &str) -> ProductId {
        s.parse().unwrap()
    }

    fn shelf_with_widget() -> Shelf {
        let mut shelf = Shelf::new();
        let product = Product::new(id("123456"), "A", "Widget", 4.0).unwrap();
        shelf.add(ShelfItem::new(product, 3.5).unwrap());
        shelf
    }

    #[test]
    fn updates_the_price_of_the_matching_entry() {
        let mut shelf = shelf_with_widget();
        let mut input = ScriptedInput::new(["123456", "5.25"]);

        run(&mut shelf, &mut input).unwrap();

        assert_eq!(shelf.find(&id("123456")).unwrap().price(), 5.25);
    }

    #[test]
    fn rejects_zero_price_and_leaves_price_unchanged() {
        let mut shelf = shelf_with_widget();
        let mut input = ScriptedInput::new(["123456", "0"]);

        let err = run(&mut shelf, &mut input).unwrap_err();

        assert!(matches!(err, StockError::Validation(_)));
        assert_eq!(shelf.find(&id("123456")).unwrap().price(), 3.5);
    }

    #[test]
    fn reports_not_found_for_an_unknown_id() {
        let mut shelf = Shelf::new();
        let mut input = ScriptedInput::new(["123456", "5.25"]);

        let err = run(&mut shelf, &mut input).unwrap_err();
        assert!(matches!(err, StockError::NotFound { .. }));
    }
}
