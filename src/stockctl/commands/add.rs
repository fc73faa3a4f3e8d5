use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::input::InputSource;
use crate::model::{Product, StockItem};
use crate::store::Warehouse;

use super::helpers::{read_number, read_product_id, read_required, read_stack_id};

pub fn run<I: InputSource>(warehouse: &mut Warehouse, input: &mut I) -> Result<CmdResult> {
    let id = read_product_id(input, "Product ID: ")?;
    let stack_id = read_stack_id(input, "Stack ID where the product is stored: ")?;
    let sector = read_required(input, "Product sector: ", "sector")?;
    let name = read_required(input, "Product name: ", "name")?;
    let quantity = read_number(input, "Quantity to store: ")?;

    let product = Product::new(id, sector, name, quantity)?;
    warehouse.add(StockItem::new(product, stack_id));

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success("Product added to the warehouse."));
    Ok(result)
}
