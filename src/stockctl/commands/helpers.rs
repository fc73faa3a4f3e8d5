//! Shared field-reading helpers for the command layer.
//!
//! Each helper shows one prompt, reads one line and validates it, so every
//! operation fails before any container state is touched.

use crate::error::{Result, StockError};
use crate::input::InputSource;
use crate::model::{self, ProductId, StackId};

pub fn read_product_id<I: InputSource>(input: &mut I, prompt: &str) -> Result<ProductId> {
    input.read_line(prompt)?.parse()
}

pub fn read_stack_id<I: InputSource>(input: &mut I, prompt: &str) -> Result<StackId> {
    input.read_line(prompt)?.parse()
}

pub fn read_required<I: InputSource>(input: &mut I, prompt: &str, field: &str) -> Result<String> {
    let value = input.read_line(prompt)?;
    if value.trim().is_empty() {
        return Err(StockError::Validation(format!(
            "The {} cannot be empty.",
            field
        )));
    }
    Ok(value)
}

pub fn read_number<I: InputSource>(input: &mut I, prompt: &str) -> Result<f64> {
    let raw = input.read_line(prompt)?;
    raw.parse::<f64>()
        .map_err(|_| StockError::Validation(format!("'{}' is not a number.", raw)))
}

/// A strictly positive amount, as used by the move and remove operations.
pub fn read_amount<I: InputSource>(input: &mut I, prompt: &str) -> Result<f64> {
    let amount = read_number(input, prompt)?;
    if !amount.is_finite() || amount <= 0.0 {
        return Err(StockError::Validation(
            "The quantity must be greater than zero.".to_string(),
        ));
    }
    Ok(amount)
}

/// A strictly positive price.
pub fn read_price<I: InputSource>(input: &mut I, prompt: &str) -> Result<f64> {
    let price = read_number(input, prompt)?;
    model::validate_price(price)?;
    Ok(price)
}
