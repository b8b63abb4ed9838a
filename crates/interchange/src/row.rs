use serde::{Deserialize, Serialize};
use thiserror::Error;

use stockbook_core::LedgerError;

/// Ingestion column labels, matched case-insensitively and in any order.
pub const LABEL_NAME: &str = "Product Name";
pub const LABEL_QUANTITY: &str = "Quantity";
pub const LABEL_UNIT_PRICE: &str = "Price per Unit";

/// Per-row import failure.
///
/// Each row's outcome is independent; one row's failure never aborts its
/// siblings. Messages are written for end users, not transports.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ImportError {
    #[error("missing required column '{0}'")]
    MissingColumn(&'static str),

    #[error("column '{column}' has invalid value '{value}': expected a non-negative integer")]
    InvalidNumber { column: &'static str, value: String },

    #[error(transparent)]
    Ledger(#[from] LedgerError),
}

/// A validated ingestion row, ready to submit to the ledger.
///
/// Validation happens here, **before** submission, so a rejected row never
/// burns a product id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRow {
    pub name: String,
    pub quantity: u64,
    pub unit_price: u64,
}

impl ProductRow {
    /// Parse one labeled row.
    ///
    /// Labels are matched after trimming and lowercasing; field order is
    /// irrelevant. When a label repeats, the last occurrence wins.
    pub fn parse<'a, I>(fields: I) -> Result<Self, ImportError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut name: Option<&str> = None;
        let mut quantity: Option<&str> = None;
        let mut unit_price: Option<&str> = None;

        for (label, value) in fields {
            match label.trim().to_lowercase().as_str() {
                "product name" => name = Some(value),
                "quantity" => quantity = Some(value),
                "price per unit" => unit_price = Some(value),
                _ => {}
            }
        }

        let name = name
            .ok_or(ImportError::MissingColumn(LABEL_NAME))?
            .trim()
            .to_string();
        let quantity = parse_count(LABEL_QUANTITY, quantity)?;
        let unit_price = parse_count(LABEL_UNIT_PRICE, unit_price)?;

        Ok(Self {
            name,
            quantity,
            unit_price,
        })
    }
}

fn parse_count(column: &'static str, value: Option<&str>) -> Result<u64, ImportError> {
    let raw = value.ok_or(ImportError::MissingColumn(column))?.trim();

    raw.parse::<u64>().map_err(|_| ImportError::InvalidNumber {
        column,
        value: raw.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_labels_case_insensitively_in_any_order() {
        let row = ProductRow::parse([
            ("price per unit", "5"),
            ("PRODUCT NAME", "Widget"),
            ("  Quantity ", "10"),
        ])
        .unwrap();

        assert_eq!(
            row,
            ProductRow {
                name: "Widget".to_string(),
                quantity: 10,
                unit_price: 5,
            }
        );
    }

    #[test]
    fn missing_column_is_reported_by_canonical_label() {
        let err = ProductRow::parse([("Product Name", "Widget"), ("Quantity", "10")]).unwrap_err();
        assert_eq!(err, ImportError::MissingColumn(LABEL_UNIT_PRICE));
        assert_eq!(err.to_string(), "missing required column 'Price per Unit'");
    }

    #[test]
    fn negative_quantity_is_rejected() {
        let err = ProductRow::parse([
            ("Product Name", "Widget"),
            ("Quantity", "-3"),
            ("Price per Unit", "5"),
        ])
        .unwrap_err();

        assert_eq!(
            err,
            ImportError::InvalidNumber {
                column: LABEL_QUANTITY,
                value: "-3".to_string(),
            }
        );
    }

    #[test]
    fn non_numeric_price_is_rejected() {
        let err = ProductRow::parse([
            ("Product Name", "Widget"),
            ("Quantity", "3"),
            ("Price per Unit", "five"),
        ])
        .unwrap_err();

        assert!(matches!(err, ImportError::InvalidNumber { .. }));
    }

    #[test]
    fn unknown_columns_are_ignored() {
        let row = ProductRow::parse([
            ("Product Name", "Widget"),
            ("Quantity", "1"),
            ("Price per Unit", "2"),
            ("Warehouse", "East"),
        ])
        .unwrap();

        assert_eq!(row.name, "Widget");
    }
}
