//! # API Facade
//!
//! [`StockApi`] is a thin facade over the command layer and the single
//! entry point for all operations, regardless of the UI driving them. It
//! owns both containers, dispatches each call to the matching command
//! module, and returns structured result types. No business logic, no
//! terminal I/O, no presentation concerns live here.

use crate::commands;
use crate::error::Result;
use crate::input::InputSource;
use crate::model::Location;
use crate::store::{Shelf, Warehouse};

/// The main facade for stock operations.
///
/// Field prompting runs through the injected [`InputSource`], so any
/// client that can supply lines of input can drive the full operation set.
#[derive(Debug, Default)]
pub struct StockApi {
    warehouse: Warehouse,
    shelf: Shelf,
}

impl StockApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_to_warehouse<I: InputSource>(&mut self, input: &mut I) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.warehouse, input)
    }

    pub fn move_to_shelf<I: InputSource>(&mut self, input: &mut I) -> Result<commands::CmdResult> {
        commands::move_to_shelf::run(&mut self.warehouse, &mut self.shelf, input)
    }

    pub fn search<I: InputSource>(
        &self,
        location: Location,
        input: &mut I,
    ) -> Result<commands::CmdResult> {
        commands::search::run(&self.warehouse, &self.shelf, location, input)
    }

    pub fn reprice<I: InputSource>(&mut self, input: &mut I) -> Result<commands::CmdResult> {
        commands::reprice::run(&mut self.shelf, input)
    }

    pub fn remove_quantity<I: InputSource>(
        &mut self,
        location: Location,
        input: &mut I,
    ) -> Result<commands::CmdResult> {
        commands::remove_quantity::run(&mut self.warehouse, &mut self.shelf, location, input)
    }

    pub fn delete<I: InputSource>(
        &mut self,
        location: Location,
        input: &mut I,
    ) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.warehouse, &mut self.shelf, location, input)
    }

    pub fn list(&self, location: Location) -> Result<commands::CmdResult> {
        commands::list::run(&self.warehouse, &self.shelf, location)
    }
}

pub use commands::{CmdMessage, CmdResult, ListedItem, MessageLevel};
