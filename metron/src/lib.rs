//! Metron - category-based unit conversion
//!
//! Converts a numeric value between units of one measurement category by
//! pivoting through the category's base unit. Linear categories use plain
//! scale factors; Temperature uses explicit affine function pairs.
//!
//! Categories:
//! - Area (m², km², acre, hectare, etc.)
//! - Data Transfer Rate (bps, Kbps, Mbps, etc.)
//! - Digital Storage (B, KB, MB, GB, etc.)
//! - Energy (J, cal, Wh, BTU, etc.)
//! - Frequency (Hz, kHz, MHz, etc.)
//! - Fuel Economy (km/L, mpg, L/100km)
//! - Length (m, km, inch, mile, etc.)
//! - Mass (kg, g, lb, oz, etc.)
//! - Plane Angle (degree, radian, grad)
//! - Pressure (Pa, bar, psi, atm, etc.)
//! - Speed (m/s, km/h, mph, knot)
//! - Temperature (C, F, K)
//! - Time (s, min, h, day, etc.)
//! - Volume (L, mL, gal, qt, etc.)
//!
//! The engine is stateless; the table is immutable process-wide data. The
//! session history in [`History`] is a caller-owned container - the engine
//! never reads or writes it.

mod convert;
mod error;
mod history;
mod rule;
mod table;

pub use convert::{convert, convert_in};
pub use error::ConvertError;
pub use history::{ConversionRecord, History, RECENT_WINDOW};
pub use rule::UnitRule;
pub use table::{Category, UnitTable, TABLE};
