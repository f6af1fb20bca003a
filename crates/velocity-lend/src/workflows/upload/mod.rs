//! Customer inventory-export import: parses a CSV of SKU lines and derives
//! the velocity inputs the scoring engine needs.

mod parser;

pub use parser::SkuRow;

use crate::workflows::sku::SkuIdentifiers;
use std::io::Read;
use std::path::Path;

/// Fallback turnover ratio when the export carries no usable inventory value.
pub const DEFAULT_INVENTORY_TURNS: f64 = 4.0;

/// Cost-of-goods approximation applied when deriving turns from declared
/// revenue instead of per-unit costs.
const COGS_TO_REVENUE_RATIO: f64 = 0.7;

#[derive(Debug)]
pub enum UploadImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    Empty,
}

impl std::fmt::Display for UploadImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UploadImportError::Io(err) => write!(f, "failed to read customer export: {}", err),
            UploadImportError::Csv(err) => write!(f, "invalid customer CSV data: {}", err),
            UploadImportError::Empty => write!(f, "customer export held no inventory rows"),
        }
    }
}

impl std::error::Error for UploadImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            UploadImportError::Io(err) => Some(err),
            UploadImportError::Csv(err) => Some(err),
            UploadImportError::Empty => None,
        }
    }
}

impl From<std::io::Error> for UploadImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for UploadImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

pub struct CustomerUploadImporter;

impl CustomerUploadImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<UploadSnapshot, UploadImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<UploadSnapshot, UploadImportError> {
        let rows = parser::parse_rows(reader)?;
        if rows.is_empty() {
            return Err(UploadImportError::Empty);
        }
        Ok(UploadSnapshot { rows })
    }
}

/// Parsed export with the aggregates needed to derive inventory velocity.
#[derive(Debug, Clone)]
pub struct UploadSnapshot {
    rows: Vec<SkuRow>,
}

impl UploadSnapshot {
    pub fn rows(&self) -> &[SkuRow] {
        &self.rows
    }

    /// Current inventory value at cost.
    pub fn inventory_value(&self) -> f64 {
        self.rows
            .iter()
            .map(|row| row.on_hand_units * row.unit_cost)
            .sum()
    }

    /// Annualized cost of goods sold implied by the monthly unit movement.
    pub fn annual_cogs(&self) -> f64 {
        self.rows
            .iter()
            .map(|row| row.monthly_units * row.unit_cost)
            .sum::<f64>()
            * 12.0
    }

    /// Derive inventory turns, guarding every degenerate ratio:
    /// cost-based when the export carries costs, revenue-ratio based when only
    /// declared revenue is available, and the fixed default otherwise.
    pub fn derived_turns(&self, declared_revenue: Option<f64>) -> f64 {
        let inventory_value = self.inventory_value();
        if inventory_value <= 0.0 {
            return DEFAULT_INVENTORY_TURNS;
        }

        let cogs = self.annual_cogs();
        if cogs > 0.0 {
            return cogs / inventory_value;
        }

        match declared_revenue {
            Some(revenue) if revenue > 0.0 => revenue * COGS_TO_REVENUE_RATIO / inventory_value,
            _ => DEFAULT_INVENTORY_TURNS,
        }
    }

    /// First row's identifiers, for feeding the SKU-matching demo.
    pub fn lead_identifiers(&self) -> Option<SkuIdentifiers> {
        self.rows.first().map(|row| SkuIdentifiers {
            erp_code: row.erp_code.clone(),
            warehouse_code: row.warehouse_code.clone(),
            storefront_slug: row.storefront_slug.clone(),
            product_name: row.product_name.clone(),
        })
    }
}
