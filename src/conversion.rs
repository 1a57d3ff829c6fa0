use thiserror::Error;

use crate::quantity::QuantityKind;
use crate::units::*;

/// 단위 변환 시 발생 가능한 오류.
#[derive(Debug, Error)]
pub enum ConversionError {
    /// 알 수 없는 단위 문자열
    #[error("알 수 없는 단위: {0}")]
    UnknownUnit(String),
    /// 지원하지 않는 물리량
    #[error("지원하지 않는 물리량: {0}")]
    UnknownQuantity(String),
}

/// 문자열로 전달된 단위명을 enum으로 변환한 뒤 지정된 단위로 환산한다.
///
/// 단위 문자열 예시는 `kPa`, `psi`, `m`, `mi`, `gal`, `lb`, `mpg`, `L/100km` 등을 사용할 수 있다.
pub fn convert(
    kind: QuantityKind,
    value: f64,
    from_unit_str: &str,
    to_unit_str: &str,
) -> Result<f64, ConversionError> {
    match kind {
        QuantityKind::Pressure => {
            let from = parse_pressure_unit(from_unit_str)?;
            let to = parse_pressure_unit(to_unit_str)?;
            Ok(convert_pressure(value, from, to))
        }
        QuantityKind::Length => {
            let from = parse_length_unit(from_unit_str)?;
            let to = parse_length_unit(to_unit_str)?;
            Ok(convert_length(value, from, to))
        }
        QuantityKind::Volume => {
            let from = parse_volume_unit(from_unit_str)?;
            let to = parse_volume_unit(to_unit_str)?;
            Ok(convert_volume(value, from, to))
        }
        QuantityKind::Mass => {
            let from = parse_mass_unit(from_unit_str)?;
            let to = parse_mass_unit(to_unit_str)?;
            Ok(convert_mass(value, from, to))
        }
        QuantityKind::FuelEconomy => {
            let from = parse_fuel_economy_unit(from_unit_str)?;
            let to = parse_fuel_economy_unit(to_unit_str)?;
            Ok(convert_fuel_economy(value, from, to))
        }
    }
}

/// 물리량별로 선택 가능한 (표시명, 단위 코드) 목록.
pub fn unit_options(kind: QuantityKind) -> &'static [(&'static str, &'static str)] {
    match kind {
        QuantityKind::Pressure => &[
            ("kPa", "kPa"),
            ("Pa", "Pa"),
            ("MPa", "MPa"),
            ("bar", "bar"),
            ("psi", "psi"),
            ("atm", "atm"),
            ("mH₂O", "mH2O"),
        ],
        QuantityKind::Length => &[
            ("m", "m"),
            ("mm", "mm"),
            ("cm", "cm"),
            ("km", "km"),
            ("inch", "in"),
            ("ft", "ft"),
            ("yd", "yd"),
            ("mile", "mi"),
        ],
        QuantityKind::Volume => &[
            ("m³", "m3"),
            ("L", "l"),
            ("mL", "ml"),
            ("US gal", "gal"),
            ("ft³", "ft3"),
        ],
        QuantityKind::Mass => &[("kg", "kg"), ("g", "g"), ("lb", "lb"), ("oz", "oz")],
        QuantityKind::FuelEconomy => &[
            ("mpg (US)", "mpg"),
            ("L/100km", "L/100km"),
            ("km/L", "km/L"),
        ],
    }
}

pub fn parse_pressure_unit(s: &str) -> Result<PressureUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "pa" | "pascal" => Ok(PressureUnit::Pascal),
        "kpa" | "kilopascal" => Ok(PressureUnit::KiloPascal),
        "mpa" | "megapascal" => Ok(PressureUnit::MegaPascal),
        "bar" => Ok(PressureUnit::Bar),
        "psi" => Ok(PressureUnit::Psi),
        "atm" => Ok(PressureUnit::Atm),
        "mh2o" | "mh₂o" | "mwc" => Ok(PressureUnit::MeterOfWater),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

pub fn parse_length_unit(s: &str) -> Result<LengthUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "m" | "meter" | "metre" => Ok(LengthUnit::Meter),
        "mm" => Ok(LengthUnit::Millimeter),
        "cm" => Ok(LengthUnit::Centimeter),
        "km" => Ok(LengthUnit::Kilometer),
        "in" | "inch" => Ok(LengthUnit::Inch),
        "ft" | "foot" => Ok(LengthUnit::Foot),
        "yd" | "yard" => Ok(LengthUnit::Yard),
        "mi" | "mile" | "miles" => Ok(LengthUnit::Mile),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

pub fn parse_volume_unit(s: &str) -> Result<VolumeUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "m3" | "m^3" => Ok(VolumeUnit::CubicMeter),
        "l" | "liter" | "litre" => Ok(VolumeUnit::Liter),
        "ml" | "milliliter" => Ok(VolumeUnit::Milliliter),
        "gal" | "gallon" | "usgal" => Ok(VolumeUnit::UsGallon),
        "ft3" | "ft^3" | "cuft" => Ok(VolumeUnit::CubicFoot),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

pub fn parse_mass_unit(s: &str) -> Result<MassUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "kg" => Ok(MassUnit::Kilogram),
        "g" => Ok(MassUnit::Gram),
        "lb" | "lbs" => Ok(MassUnit::Pound),
        "oz" => Ok(MassUnit::Ounce),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

pub fn parse_fuel_economy_unit(s: &str) -> Result<FuelEconomyUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "mpg" => Ok(FuelEconomyUnit::MilesPerGallon),
        "l/100km" | "lp100k" => Ok(FuelEconomyUnit::LitersPer100Km),
        "km/l" | "kmpl" => Ok(FuelEconomyUnit::KmPerLiter),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}
