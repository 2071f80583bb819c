//! Errors and warnings raised while planning a menu.

use std::fmt::Display;
use thiserror::Error;

/// A quantity string that does not hold a finite number.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum QuantityError {
    #[error("Malformed quantity: {0:?}")]
    Malformed(String),
}

/// Errors from planning operations on a single recipe or selection.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PlanningError {
    /// The recipe's yield is missing, zero, negative or not finite.
    #[error("Recipe {recipe:?} has no usable yield quantity")]
    InvalidYield { recipe: String },

    #[error("Pax must be at least 1, got {0}")]
    InvalidPax(u32),

    #[error("Position {index} is out of range for a selection of {len}")]
    PositionOutOfRange { index: usize, len: usize },
}

/// Problems that do not stop a menu computation.
///
/// Each one is local to a single ingredient line or a single recipe; the rest of the menu is
/// still processed.
#[derive(Debug, Clone, PartialEq)]
pub enum PlanningWarning {
    /// The recipe was left out because its yield cannot be used as a divisor.
    InvalidYield { recipe: String },

    /// The ingredient line counted as zero.
    MalformedQuantity {
        recipe: String,
        sub_recipe: String,
        ingredient: String,
        quantity: String,
    },

    /// Summed under the first unit seen for this ingredient, without conversion.
    UnitMismatch {
        ingredient: String,
        unit: String,
        found: String,
    },
}

impl Display for PlanningWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlanningWarning::InvalidYield { recipe } => {
                write!(f, "{}: no usable yield quantity, recipe skipped", recipe)
            }
            PlanningWarning::MalformedQuantity {
                recipe,
                sub_recipe,
                ingredient,
                quantity,
            } => write!(
                f,
                "{} / {} / {}: quantity {:?} is not a number, counted as 0",
                recipe, sub_recipe, ingredient, quantity
            ),
            PlanningWarning::UnitMismatch {
                ingredient,
                unit,
                found,
            } => write!(
                f,
                "{}: {:?} summed as {:?} without conversion",
                ingredient, found, unit
            ),
        }
    }
}
