use serde::{Deserialize, Serialize};

/// 체중 입력(kg/lb)과 변환기에서 쓰는 질량 단위.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MassUnit {
    Kilogram,
    Gram,
    Pound,
    Ounce,
}

impl MassUnit {
    /// 1 단위의 kg 값.
    pub fn kilograms(self) -> f64 {
        match self {
            MassUnit::Kilogram => 1.0,
            MassUnit::Gram => 0.001,
            MassUnit::Pound => 0.453592,
            MassUnit::Ounce => 0.0283495,
        }
    }
}

pub fn convert_mass(value: f64, from: MassUnit, to: MassUnit) -> f64 {
    value * from.kilograms() / to.kilograms()
}
