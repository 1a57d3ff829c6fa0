use serde::{Deserialize, Serialize};

use super::length::METERS_PER_MILE;
use super::volume::M3_PER_US_GALLON;

/// 연비 단위. 내부 기준은 km/L이다.
///
/// L/100km는 km/L의 역수 척도이므로 0 입력은 무한대로 환산된다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FuelEconomyUnit {
    /// 미국 갤런 기준 mile/gal
    MilesPerGallon,
    LitersPer100Km,
    KmPerLiter,
}

const KM_PER_MILE: f64 = METERS_PER_MILE / 1000.0;

fn to_km_per_liter(value: f64, unit: FuelEconomyUnit) -> f64 {
    match unit {
        FuelEconomyUnit::MilesPerGallon => value * KM_PER_MILE / (M3_PER_US_GALLON * 1000.0),
        FuelEconomyUnit::LitersPer100Km => 100.0 / value,
        FuelEconomyUnit::KmPerLiter => value,
    }
}

fn from_km_per_liter(value: f64, unit: FuelEconomyUnit) -> f64 {
    match unit {
        FuelEconomyUnit::MilesPerGallon => value * (M3_PER_US_GALLON * 1000.0) / KM_PER_MILE,
        FuelEconomyUnit::LitersPer100Km => 100.0 / value,
        FuelEconomyUnit::KmPerLiter => value,
    }
}

/// 연비를 다른 단위로 변환한다.
pub fn convert_fuel_economy(value: f64, from: FuelEconomyUnit, to: FuelEconomyUnit) -> f64 {
    let base = to_km_per_liter(value, from);
    from_km_per_liter(base, to)
}
