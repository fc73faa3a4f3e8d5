//! Menu loop and terminal output for the binary.
//!
//! This is the only layer that writes to stdout/stderr directly. Data
//! errors are printed and the loop continues; I/O errors on the input
//! stream are the one fatal path.

use stockctl::api::StockApi;
use stockctl::error::{Result, StockError};
use stockctl::input::InputSource;
use stockctl::model::Location;

mod menu;
mod print;
mod styles;

use menu::MenuChoice;

pub(crate) fn run_loop<I: InputSource>(api: &mut StockApi, input: &mut I) -> Result<()> {
    loop {
        print::print_menu();
        let line = input.read_line("\nPick an option: ")?;

        let Some(choice) = menu::parse(&line) else {
            print::print_invalid_option();
            continue;
        };

        let outcome = match choice {
            MenuChoice::Exit => {
                println!("\nDone.");
                return Ok(());
            }
            MenuChoice::AddToWarehouse => api.add_to_warehouse(input),
            MenuChoice::MoveToShelf => api.move_to_shelf(input),
            MenuChoice::SearchWarehouse => api.search(Location::Warehouse, input),
            MenuChoice::SearchShelf => api.search(Location::Shelf, input),
            MenuChoice::Reprice => api.reprice(input),
            MenuChoice::RemoveFromWarehouse => api.remove_quantity(Location::Warehouse, input),
            MenuChoice::RemoveFromShelf => api.remove_quantity(Location::Shelf, input),
            MenuChoice::DeleteFromWarehouse => api.delete(Location::Warehouse, input),
            MenuChoice::DeleteFromShelf => api.delete(Location::Shelf, input),
            MenuChoice::ListWarehouse => api.list(Location::Warehouse),
            MenuChoice::ListShelf => api.list(Location::Shelf),
        };

        match outcome {
            Ok(result) => {
                print::print_messages(&result.messages);
                print::print_items(&result.listed_items);
            }
            Err(StockError::Io(err)) => return Err(StockError::Io(err)),
            Err(err) => print::print_error(&err),
        }
    }
}
