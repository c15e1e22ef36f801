//! The conversion engine - a stateless two-step pivot through the base unit

use crate::error::ConvertError;
use crate::table::{UnitTable, TABLE};

/// Convert `value` from `from_unit` to `to_unit` within `category`
///
/// Resolves both units against the global table, then pivots through the
/// category's base unit: `base = toBase(value)`, `result = fromBase(base)`.
/// No rounding is applied; zero and negative values convert mechanically,
/// the engine performs no domain-sanity validation beyond existence checks.
pub fn convert(value: f64, from_unit: &str, to_unit: &str, category: &str) -> Result<f64, ConvertError> {
    convert_in(&TABLE, value, from_unit, to_unit, category)
}

/// Same as [`convert`], over an explicit table
pub fn convert_in(
    table: &UnitTable,
    value: f64,
    from_unit: &str,
    to_unit: &str,
    category: &str,
) -> Result<f64, ConvertError> {
    let cat = table
        .category(category)
        .ok_or_else(|| ConvertError::UnknownCategory(category.to_string()))?;

    let from = cat.rule_for(from_unit).ok_or_else(|| ConvertError::UnknownUnit {
        category: category.to_string(),
        unit: from_unit.to_string(),
    })?;
    let to = cat.rule_for(to_unit).ok_or_else(|| ConvertError::UnknownUnit {
        category: category.to_string(),
        unit: to_unit.to_string(),
    })?;

    // A zero scale factor would otherwise turn into a silent infinity
    if !from.is_invertible() {
        return Err(ConvertError::InvalidRule {
            unit: from_unit.to_string(),
        });
    }
    if !to.is_invertible() {
        return Err(ConvertError::InvalidRule {
            unit: to_unit.to_string(),
        });
    }

    // Same unit: hand the value back untouched, bit for bit
    if from_unit == to_unit {
        return Ok(value);
    }

    let base = from.to_base(value);
    Ok(to.from_base(base))
}
