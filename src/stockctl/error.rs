use thiserror::Error;

use crate::model::{Location, ProductId};

#[derive(Error, Debug)]
pub enum StockError {
    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Product {id} not found in the {location}")]
    NotFound { id: ProductId, location: Location },

    #[error("Cannot take {requested} from the {location}: only {available} stored")]
    InsufficientQuantity {
        requested: f64,
        available: f64,
        location: Location,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, StockError>;
