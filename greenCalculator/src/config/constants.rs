// Time Constants
pub const MONTHS_PER_YEAR: f64 = 12.0;

// Electricity Rates (per kWh)
pub const SOLAR_RATE_PER_KWH: f64 = 0.10;
pub const WIND_RATE_PER_KWH: f64 = 0.09;
pub const CONVENTIONAL_RATE_PER_KWH: f64 = 0.14;   // Average grid price

// CO2 Emissions (kg per kWh)
pub const SOLAR_CO2_PER_KWH: f64 = 0.05;
pub const WIND_CO2_PER_KWH: f64 = 0.04;
pub const CONVENTIONAL_CO2_PER_KWH: f64 = 0.85;

// Carbon Absorption
pub const TREE_CO2_ABSORPTION_KG_PER_YEAR: f64 = 22.0;   // One mature tree, per year

// Form Defaults
pub const DEFAULT_MONTHLY_USAGE_KWH: f64 = 1000.0;
