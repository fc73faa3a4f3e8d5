use std::fmt;
use std::str::FromStr;

use crate::error::{Result, StockError};

/// Which container an operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Location {
    Warehouse,
    Shelf,
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::Warehouse => write!(f, "warehouse"),
            Location::Shelf => write!(f, "shelf"),
        }
    }
}

/// Six-digit product identifier.
///
/// Multiple entries may share an id; lookups resolve to the first match.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProductId(String);

impl ProductId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for ProductId {
    type Err = StockError;

    fn from_str(s: &str) -> Result<Self> {
        if !is_six_digits(s) {
            return Err(StockError::Validation(
                "The ID must be exactly 6 numeric digits.".to_string(),
            ));
        }
        Ok(Self(s.to_string()))
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Six-digit identifier of the stack a warehouse entry is stored on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackId(String);

impl StackId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for StackId {
    type Err = StockError;

    fn from_str(s: &str) -> Result<Self> {
        if !is_six_digits(s) {
            return Err(StockError::Validation(
                "The ID must be exactly 6 numeric digits.".to_string(),
            ));
        }
        Ok(Self(s.to_string()))
    }
}

impl fmt::Display for StackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn is_six_digits(s: &str) -> bool {
    s.len() == 6 && s.bytes().all(|b| b.is_ascii_digit())
}

fn validate_sector(sector: &str) -> Result<()> {
    if sector.trim().is_empty() {
        return Err(StockError::Validation(
            "The sector cannot be empty.".to_string(),
        ));
    }
    Ok(())
}

fn validate_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(StockError::Validation(
            "The name cannot be empty.".to_string(),
        ));
    }
    Ok(())
}

fn validate_quantity(quantity: f64) -> Result<()> {
    if !quantity.is_finite() || quantity < 0.0 {
        return Err(StockError::Validation(
            "The quantity must be zero or greater.".to_string(),
        ));
    }
    Ok(())
}

pub(crate) fn validate_price(price: f64) -> Result<()> {
    if !price.is_finite() || price <= 0.0 {
        return Err(StockError::Validation(
            "The price must be greater than zero.".to_string(),
        ));
    }
    Ok(())
}

/// The fields shared by warehouse and shelf entries.
///
/// Id, sector and name are fixed at construction; quantity changes only
/// through [`Product::set_quantity`], which re-checks the non-negative rule.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    id: ProductId,
    sector: String,
    name: String,
    quantity: f64,
}

impl Product {
    pub fn new(
        id: ProductId,
        sector: impl Into<String>,
        name: impl Into<String>,
        quantity: f64,
    ) -> Result<Self> {
        let sector = sector.into();
        let name = name.into();
        validate_sector(&sector)?;
        validate_name(&name)?;
        validate_quantity(quantity)?;
        Ok(Self {
            id,
            sector,
            name,
            quantity,
        })
    }

    pub fn id(&self) -> &ProductId {
        &self.id
    }

    pub fn sector(&self) -> &str {
        &self.sector
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn quantity(&self) -> f64 {
        self.quantity
    }

    pub fn set_quantity(&mut self, quantity: f64) -> Result<()> {
        validate_quantity(quantity)?;
        self.quantity = quantity;
        Ok(())
    }
}

/// Uniform access to the product core embedded in a container entry.
pub trait InventoryEntry {
    fn product(&self) -> &Product;
    fn product_mut(&mut self) -> &mut Product;
}

/// One warehouse entry: a product plus the stack it sits on.
#[derive(Debug, Clone, PartialEq)]
pub struct StockItem {
    product: Product,
    stack_id: StackId,
}

impl StockItem {
    pub fn new(product: Product, stack_id: StackId) -> Self {
        Self { product, stack_id }
    }

    pub fn stack_id(&self) -> &StackId {
        &self.stack_id
    }
}

impl InventoryEntry for StockItem {
    fn product(&self) -> &Product {
        &self.product
    }

    fn product_mut(&mut self) -> &mut Product {
        &mut self.product
    }
}

impl fmt::Display for StockItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Product ID: {}", self.product.id())?;
        writeln!(f, "Stack ID: {}", self.stack_id)?;
        writeln!(f, "Name: {}", self.product.name())?;
        writeln!(f, "Sector: {}", self.product.sector())?;
        write!(f, "Quantity in the warehouse: {}", self.product.quantity())
    }
}

/// One shelf entry: a product plus its price.
#[derive(Debug, Clone, PartialEq)]
pub struct ShelfItem {
    product: Product,
    price: f64,
}

impl ShelfItem {
    pub fn new(product: Product, price: f64) -> Result<Self> {
        validate_price(price)?;
        Ok(Self { product, price })
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn set_price(&mut self, price: f64) -> Result<()> {
        validate_price(price)?;
        self.price = price;
        Ok(())
    }
}

impl InventoryEntry for ShelfItem {
    fn product(&self) -> &Product {
        &self.product
    }

    fn product_mut(&mut self) -> &mut Product {
        &mut self.product
    }
}

impl fmt::Display for ShelfItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Product ID: {}", self.product.id())?;
        writeln!(f, "Name: {}", self.product.name())?;
        writeln!(f, "Price: {}", self.price)?;
        writeln!(f, "Sector: {}", self.product.sector())?;
        write!(f, "Quantity on the shelf: {}", self.product.quantity())
    }
}
