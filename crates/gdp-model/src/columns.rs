//! Canonical column names of the tidy table.

/// Country display name.
pub const COUNTRY: &str = "country";

/// ISO-like country code.
pub const CODE: &str = "code";

/// Calendar year, cleaned of its bracketed series suffix.
pub const YEAR: &str = "year";

/// GDP per capita.
pub const GDP_CAP: &str = "gdp_cap";

/// Tidy columns in output order.
pub const TIDY_COLUMNS: [&str; 4] = [COUNTRY, CODE, YEAR, GDP_CAP];
