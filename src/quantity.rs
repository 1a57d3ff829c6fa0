use std::str::FromStr;

use crate::conversion::ConversionError;

/// 단위 변환기가 다루는 물리량 종류를 나타낸다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityKind {
    Pressure,
    Length,
    Volume,
    Mass,
    FuelEconomy,
}

impl QuantityKind {
    pub const ALL: [QuantityKind; 5] = [
        QuantityKind::Pressure,
        QuantityKind::Length,
        QuantityKind::Volume,
        QuantityKind::Mass,
        QuantityKind::FuelEconomy,
    ];

    /// 화면 표시용 이름.
    pub fn label(self) -> &'static str {
        match self {
            QuantityKind::Pressure => "압력",
            QuantityKind::Length => "길이",
            QuantityKind::Volume => "체적",
            QuantityKind::Mass => "질량",
            QuantityKind::FuelEconomy => "연비",
        }
    }

    /// 변환기 초기값으로 쓰는 (입력, 출력) 단위 문자열.
    pub fn default_units(self) -> (&'static str, &'static str) {
        match self {
            QuantityKind::Pressure => ("kPa", "psi"),
            QuantityKind::Length => ("mi", "km"),
            QuantityKind::Volume => ("gal", "l"),
            QuantityKind::Mass => ("lb", "kg"),
            QuantityKind::FuelEconomy => ("mpg", "L/100km"),
        }
    }
}

impl FromStr for QuantityKind {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pressure" | "압력" => Ok(QuantityKind::Pressure),
            "length" | "길이" => Ok(QuantityKind::Length),
            "volume" | "체적" => Ok(QuantityKind::Volume),
            "mass" | "weight" | "질량" => Ok(QuantityKind::Mass),
            "fuel" | "fuel-economy" | "fuel_economy" | "연비" => Ok(QuantityKind::FuelEconomy),
            other => Err(ConversionError::UnknownQuantity(other.to_string())),
        }
    }
}
