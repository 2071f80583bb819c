//! Quantity parsing and scaling.
//!
//! Ingredient quantities are stored as typed text. This is the only place that text becomes
//! a number; everything downstream works with `f64` and formats through [`ScaledQuantity`].

use super::error::{PlanningError, QuantityError};
use crate::model::Recipe;
use serde::Serialize;
use std::fmt::Display;

/// Parses `"0,750"` or `"0.750"` (surrounding whitespace ignored).
///
/// Anything that does not parse to a finite `f64` is rejected, including `"NaN"` and `"inf"`.
pub fn parse_quantity(text: &str) -> Result<f64, QuantityError> {
    let normalized = text.trim().replace(',', ".");
    match normalized.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(QuantityError::Malformed(text.to_string())),
    }
}

/// Parses `text` and multiplies it by `ratio`.
pub fn scale_quantity(text: &str, ratio: f64) -> Result<ScaledQuantity, QuantityError> {
    parse_quantity(text).map(|value| ScaledQuantity(value * ratio))
}

/// `pax / yield` for a recipe.
///
/// A missing, zero, negative or non-finite yield is an error.
pub fn scale_ratio(recipe: &Recipe, pax: u32) -> Result<f64, PlanningError> {
    match recipe.yield_quantity {
        Some(yield_quantity) if yield_quantity.is_finite() && yield_quantity > 0.0 => {
            Ok(f64::from(pax) / yield_quantity)
        }
        _ => Err(PlanningError::InvalidYield {
            recipe: recipe.name.clone(),
        }),
    }
}

/// A scaled amount. Displays whole numbers without decimals and everything else with three.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize)]
#[serde(transparent)]
pub struct ScaledQuantity(pub f64);

impl ScaledQuantity {
    pub fn value(self) -> f64 {
        self.0
    }
}

impl std::ops::Add for ScaledQuantity {
    type Output = ScaledQuantity;

    fn add(self, other: ScaledQuantity) -> ScaledQuantity {
        ScaledQuantity(self.0 + other.0)
    }
}

impl std::ops::AddAssign for ScaledQuantity {
    fn add_assign(&mut self, other: ScaledQuantity) {
        self.0 += other.0;
    }
}

impl Display for ScaledQuantity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let value = self.0;
        if value == 0.0 {
            // -0.0 prints as "-0"
            f.write_str("0")
        } else if value.fract() == 0.0 {
            write!(f, "{:.0}", value)
        } else {
            write!(f, "{:.3}", value)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RecipeId;
    use proptest::prelude::*;

    #[test]
    fn test_comma_decimal_separator() {
        assert_eq!(parse_quantity("0,750").unwrap(), 0.75);
        let scaled = scale_quantity("0,750", 1.0).unwrap();
        assert_eq!(scaled.value(), 0.75);
        assert_eq!(scaled.to_string(), "0.750");
    }

    #[test]
    fn test_whole_results_print_without_decimals() {
        let scaled = scale_quantity("0.500", 2.0).unwrap();
        assert_eq!(scaled.to_string(), "1");
        assert_eq!(ScaledQuantity(12.0).to_string(), "12");
        assert_eq!(ScaledQuantity(-0.0).to_string(), "0");
        assert_eq!(ScaledQuantity(1.0 / 3.0).to_string(), "0.333");
    }

    #[test]
    fn test_rejects_text_and_non_finite_values() {
        for text in ["", "al gusto", "1/2", "NaN", "inf", "2 kg"] {
            assert_eq!(
                parse_quantity(text),
                Err(QuantityError::Malformed(text.to_string())),
                "{:?} should be rejected",
                text
            );
        }
        assert_eq!(parse_quantity(" 3 ").unwrap(), 3.0);
    }

    #[test]
    fn test_ratio_requires_positive_yield() {
        let mut recipe = Recipe::new(RecipeId(1), "Pisto", 4.0);
        assert_eq!(scale_ratio(&recipe, 8).unwrap(), 2.0);

        for bad in [Some(0.0), Some(-2.0), Some(f64::NAN), None] {
            recipe.yield_quantity = bad;
            assert_eq!(
                scale_ratio(&recipe, 8),
                Err(PlanningError::InvalidYield {
                    recipe: "Pisto".to_string()
                })
            );
        }
    }

    #[test]
    fn test_ratio_of_one_keeps_parsed_value() {
        let recipe = Recipe::new(RecipeId(1), "Pisto", 6.0);
        let ratio = scale_ratio(&recipe, 6).unwrap();
        for text in ["0,125", "3", "1.75", "0.333"] {
            assert_eq!(
                scale_quantity(text, ratio).unwrap().value(),
                parse_quantity(text).unwrap()
            );
        }
    }

    proptest! {
        #[test]
        fn prop_scale_is_parse_times_ratio(
            whole in 0u32..10_000,
            thousandths in 0u32..1000,
            comma in any::<bool>(),
            ratio in 0.01f64..100.0,
        ) {
            let separator = if comma { "," } else { "." };
            let text = format!("{}{}{:03}", whole, separator, thousandths);
            let parsed = parse_quantity(&text).unwrap();
            let scaled = scale_quantity(&text, ratio).unwrap().value();
            prop_assert!((scaled - parsed * ratio).abs() <= 1e-9 * (1.0 + (parsed * ratio).abs()));
        }
    }
}
