//! The unit table - 14 categories of mutually convertible units
//!
//! Process-wide immutable data, constructed once at startup. Each category
//! lists its units in display order with the base unit first; every scale
//! factor is the number of that unit in one base unit. The numeric constants
//! are kept digit-for-digit as established, approximations included - do not
//! recompute them from higher-precision formulas.

use std::sync::LazyLock;

use crate::error::ConvertError;
use crate::rule::UnitRule;

/// Global unit table
pub static TABLE: LazyLock<UnitTable> = LazyLock::new(UnitTable::new);

/// One unit registered under a category
#[derive(Debug, Clone, Copy)]
struct UnitDef {
    name: &'static str,
    rule: UnitRule,
}

/// A named group of mutually convertible units
#[derive(Debug, Clone)]
pub struct Category {
    /// Unique category name (e.g., "Length")
    pub name: &'static str,
    units: Vec<UnitDef>,
}

impl Category {
    pub(crate) fn new(name: &'static str) -> Self {
        Category {
            name,
            units: Vec::new(),
        }
    }

    pub(crate) fn linear(&mut self, name: &'static str, scale: f64) {
        self.units.push(UnitDef {
            name,
            rule: UnitRule::Linear { scale },
        });
    }

    pub(crate) fn affine(
        &mut self,
        name: &'static str,
        to_base: fn(f64) -> f64,
        from_base: fn(f64) -> f64,
    ) {
        self.units.push(UnitDef {
            name,
            rule: UnitRule::Affine { to_base, from_base },
        });
    }

    /// Unit names in display order (base unit first)
    pub fn unit_names(&self) -> Vec<&'static str> {
        self.units.iter().map(|u| u.name).collect()
    }

    /// Look up the rule for a unit in this category
    pub fn rule_for(&self, unit: &str) -> Option<UnitRule> {
        self.units.iter().find(|u| u.name == unit).map(|u| u.rule)
    }
}

/// Registry of all categories and their units
pub struct UnitTable {
    categories: Vec<Category>,
}

impl UnitTable {
    pub fn new() -> Self {
        let mut table = UnitTable {
            categories: Vec::new(),
        };
        table.register_all_categories();
        table
    }

    /// An empty table; tests build malformed categories onto it
    #[cfg(test)]
    pub(crate) fn empty() -> Self {
        UnitTable {
            categories: Vec::new(),
        }
    }

    /// Look up a category by name
    pub fn category(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name == name)
    }

    /// All categories in registration order
    pub fn categories(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter()
    }

    /// Ordered unit names for a category
    pub fn units_for(&self, category: &str) -> Result<Vec<&'static str>, ConvertError> {
        let cat = self
            .category(category)
            .ok_or_else(|| ConvertError::UnknownCategory(category.to_string()))?;
        Ok(cat.unit_names())
    }

    /// Conversion rule for a unit within a category
    pub fn rule_for(&self, category: &str, unit: &str) -> Result<UnitRule, ConvertError> {
        let cat = self
            .category(category)
            .ok_or_else(|| ConvertError::UnknownCategory(category.to_string()))?;
        cat.rule_for(unit).ok_or_else(|| ConvertError::UnknownUnit {
            category: category.to_string(),
            unit: unit.to_string(),
        })
    }

    pub(crate) fn register(&mut self, category: Category) {
        self.categories.push(category);
    }

    fn register_all_categories(&mut self) {
        self.register_area();
        self.register_data_transfer_rate();
        self.register_digital_storage();
        self.register_energy();
        self.register_frequency();
        self.register_fuel_economy();
        self.register_length();
        self.register_mass();
        self.register_plane_angle();
        self.register_pressure();
        self.register_speed();
        self.register_temperature();
        self.register_time();
        self.register_volume();
    }

    fn register_area(&mut self) {
        let mut area = Category::new("Area");
        area.linear("m²", 1.0);
        area.linear("km²", 0.000001);
        area.linear("cm²", 10000.0);
        area.linear("mm²", 1000000.0);
        area.linear("ft²", 10.7639);
        area.linear("in²", 1550.0);
        area.linear("acre", 0.000247105);
        area.linear("hectare", 0.0001);
        self.register(area);
    }

    fn register_data_transfer_rate(&mut self) {
        let mut rate = Category::new("Data Transfer Rate");
        rate.linear("bps", 1.0);
        rate.linear("Kbps", 0.001);
        rate.linear("Mbps", 0.000001);
        rate.linear("Gbps", 0.000000001);
        rate.linear("Tbps", 0.000000000001);
        self.register(rate);
    }

    fn register_digital_storage(&mut self) {
        // Decimal (SI) scaling, not binary 1024-based
        let mut storage = Category::new("Digital Storage");
        storage.linear("B", 1.0);
        storage.linear("KB", 0.001);
        storage.linear("MB", 0.000001);
        storage.linear("GB", 0.000000001);
        storage.linear("TB", 0.000000000001);
        storage.linear("PB", 0.000000000000001);
        self.register(storage);
    }

    fn register_energy(&mut self) {
        let mut energy = Category::new("Energy");
        energy.linear("J", 1.0);
        energy.linear("kJ", 0.001);
        energy.linear("cal", 0.239006);
        energy.linear("kcal", 0.000239006);
        energy.linear("Wh", 0.000277778);
        energy.linear("BTU", 0.000947817);
        self.register(energy);
    }

    fn register_frequency(&mut self) {
        let mut freq = Category::new("Frequency");
        freq.linear("Hz", 1.0);
        freq.linear("kHz", 0.001);
        freq.linear("MHz", 0.000001);
        freq.linear("GHz", 0.000000001);
        freq.linear("THz", 0.000000000001);
        self.register(freq);
    }

    fn register_fuel_economy(&mut self) {
        // L/100km is treated as a plain scale factor, matching the
        // established table even though the physical relation is reciprocal
        let mut fuel = Category::new("Fuel Economy");
        fuel.linear("km/L", 1.0);
        fuel.linear("mpg", 2.35215);
        fuel.linear("L/100km", 100.0);
        self.register(fuel);
    }

    fn register_length(&mut self) {
        let mut length = Category::new("Length");
        length.linear("m", 1.0);
        length.linear("cm", 100.0);
        length.linear("mm", 1000.0);
        length.linear("km", 0.001);
        length.linear("inch", 39.3701);
        length.linear("ft", 3.28084);
        length.linear("yard", 1.09361);
        length.linear("mile", 0.000621371);
        self.register(length);
    }

    fn register_mass(&mut self) {
        // "ton" here is the established alias for 1000 kg, same as metric_ton
        let mut mass = Category::new("Mass");
        mass.linear("kg", 1.0);
        mass.linear("g", 1000.0);
        mass.linear("mg", 1000000.0);
        mass.linear("lb", 2.20462);
        mass.linear("oz", 35.274);
        mass.linear("ton", 0.001);
        mass.linear("metric_ton", 0.001);
        self.register(mass);
    }

    fn register_plane_angle(&mut self) {
        let mut angle = Category::new("Plane Angle");
        angle.linear("degree", 1.0);
        angle.linear("radian", 0.0174533);
        angle.linear("grad", 1.11111);
        self.register(angle);
    }

    fn register_pressure(&mut self) {
        let mut pressure = Category::new("Pressure");
        pressure.linear("Pa", 1.0);
        pressure.linear("kPa", 0.001);
        pressure.linear("bar", 0.00001);
        pressure.linear("psi", 0.000145038);
        pressure.linear("atm", 0.00000986923);
        self.register(pressure);
    }

    fn register_speed(&mut self) {
        let mut speed = Category::new("Speed");
        speed.linear("m/s", 1.0);
        speed.linear("km/h", 3.6);
        speed.linear("mph", 2.23694);
        speed.linear("knot", 1.94384);
        self.register(speed);
    }

    fn register_temperature(&mut self) {
        // Celsius is the implicit base; both directions are explicit since
        // toBase and fromBase are not reciprocal scalings of each other
        let mut temperature = Category::new("Temperature");
        temperature.affine("C", celsius_identity, celsius_identity);
        temperature.affine("F", fahrenheit_to_celsius, celsius_to_fahrenheit);
        temperature.affine("K", kelvin_to_celsius, celsius_to_kelvin);
        self.register(temperature);
    }

    fn register_time(&mut self) {
        let mut time = Category::new("Time");
        time.linear("s", 1.0);
        time.linear("min", 1.0 / 60.0);
        time.linear("h", 1.0 / 3600.0);
        time.linear("day", 1.0 / 86400.0);
        time.linear("week", 1.0 / 604800.0);
        time.linear("month", 1.0 / 2592000.0); // 30 days
        time.linear("year", 1.0 / 31536000.0); // 365 days
        self.register(time);
    }

    fn register_volume(&mut self) {
        let mut volume = Category::new("Volume");
        volume.linear("L", 1.0);
        volume.linear("mL", 1000.0);
        volume.linear("cm³", 1000.0);
        volume.linear("m³", 0.001);
        volume.linear("ft³", 0.0353147);
        volume.linear("gal", 0.264172);
        volume.linear("qt", 1.05669);
        self.register(volume);
    }
}

impl Default for UnitTable {
    fn default() -> Self {
        UnitTable::new()
    }
}

fn celsius_identity(c: f64) -> f64 {
    c
}

fn fahrenheit_to_celsius(f: f64) -> f64 {
    (f - 32.0) * 5.0 / 9.0
}

fn celsius_to_fahrenheit(c: f64) -> f64 {
    c * 9.0 / 5.0 + 32.0
}

fn kelvin_to_celsius(k: f64) -> f64 {
    k - 273.15
}

fn celsius_to_kelvin(c: f64) -> f64 {
    c + 273.15
}
