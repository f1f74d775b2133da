use crate::config::constants::*;
use crate::config::energy_source::EnergySource;

/// Cost per kWh for an energy source.
pub const fn calc_rate_per_kwh(source: EnergySource) -> f64 {
    match source {
        EnergySource::Solar => SOLAR_RATE_PER_KWH,
        EnergySource::Wind => WIND_RATE_PER_KWH,
        EnergySource::Conventional => CONVENTIONAL_RATE_PER_KWH,
    }
}

/// CO2 emitted per kWh for an energy source, in kg.
pub const fn calc_co2_per_kwh(source: EnergySource) -> f64 {
    match source {
        EnergySource::Solar => SOLAR_CO2_PER_KWH,
        EnergySource::Wind => WIND_CO2_PER_KWH,
        EnergySource::Conventional => CONVENTIONAL_CO2_PER_KWH,
    }
}

pub fn calc_yearly_usage(monthly_usage: f64) -> f64 {
    monthly_usage * MONTHS_PER_YEAR
}

/// Number of trees absorbing `co2_kg` in a year, to the nearest tree.
///
/// Halves round toward positive infinity, so -2.5 becomes -2 rather than -3.
/// Non-finite input saturates (NaN becomes 0).
pub fn calc_tree_equivalent(co2_kg: f64) -> i64 {
    let trees = co2_kg / TREE_CO2_ABSORPTION_KG_PER_YEAR;
    let floor = trees.floor();
    let rounded = if trees - floor >= 0.5 { floor + 1.0 } else { floor };
    rounded as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn green_sources_are_cheaper_and_cleaner_than_grid() {
        for source in EnergySource::GREEN {
            assert!(calc_rate_per_kwh(source) < CONVENTIONAL_RATE_PER_KWH);
            assert!(calc_co2_per_kwh(source) < CONVENTIONAL_CO2_PER_KWH);
        }
    }

    #[test]
    fn tables_match_published_figures() {
        assert_eq!(calc_rate_per_kwh(EnergySource::Solar), 0.10);
        assert_eq!(calc_rate_per_kwh(EnergySource::Wind), 0.09);
        assert_eq!(calc_rate_per_kwh(EnergySource::Conventional), 0.14);
        assert_eq!(calc_co2_per_kwh(EnergySource::Solar), 0.05);
        assert_eq!(calc_co2_per_kwh(EnergySource::Wind), 0.04);
        assert_eq!(calc_co2_per_kwh(EnergySource::Conventional), 0.85);
    }

    #[test]
    fn tree_rounding_goes_to_nearest() {
        assert_eq!(calc_tree_equivalent(9600.0), 436); // 436.36
        assert_eq!(calc_tree_equivalent(9720.0), 442); // 441.82
        assert_eq!(calc_tree_equivalent(0.0), 0);
    }

    #[test]
    fn tree_rounding_halves_go_up() {
        assert_eq!(calc_tree_equivalent(11.0), 1); // 0.5
        assert_eq!(calc_tree_equivalent(33.0), 2); // 1.5
        assert_eq!(calc_tree_equivalent(-55.0), -2); // -2.5
        assert_eq!(calc_tree_equivalent(-66.0), -3); // -3.0
    }

    #[test]
    fn tree_rounding_saturates_non_finite() {
        assert_eq!(calc_tree_equivalent(f64::NAN), 0);
        assert_eq!(calc_tree_equivalent(f64::INFINITY), i64::MAX);
        assert_eq!(calc_tree_equivalent(f64::NEG_INFINITY), i64::MIN);
    }

    #[test]
    fn yearly_usage_is_twelve_months() {
        assert_eq!(calc_yearly_usage(1000.0), 12000.0);
        assert_eq!(calc_yearly_usage(0.0), 0.0);
    }
}
