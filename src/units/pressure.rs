use serde::{Deserialize, Serialize};

/// 압력 단위. 내부 기준은 kPa(게이지)이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PressureUnit {
    Pascal,
    KiloPascal,
    MegaPascal,
    Bar,
    Psi,
    Atm,
    /// 수두 [mH2O]
    MeterOfWater,
}

/// 1 kPa 당 psi. 물 공급 계산의 환산 계수와 동일한 값을 쓴다.
pub const PSI_PER_KPA: f64 = 0.145038;
const KPA_PER_ATM: f64 = 101.325;
const KPA_PER_M_H2O: f64 = 9.80665;

fn to_kpa(value: f64, unit: PressureUnit) -> f64 {
    match unit {
        PressureUnit::Pascal => value / 1000.0,
        PressureUnit::KiloPascal => value,
        PressureUnit::MegaPascal => value * 1000.0,
        PressureUnit::Bar => value * 100.0,
        PressureUnit::Psi => value / PSI_PER_KPA,
        PressureUnit::Atm => value * KPA_PER_ATM,
        PressureUnit::MeterOfWater => value * KPA_PER_M_H2O,
    }
}

fn from_kpa(value_kpa: f64, unit: PressureUnit) -> f64 {
    match unit {
        PressureUnit::Pascal => value_kpa * 1000.0,
        PressureUnit::KiloPascal => value_kpa,
        PressureUnit::MegaPascal => value_kpa / 1000.0,
        PressureUnit::Bar => value_kpa / 100.0,
        PressureUnit::Psi => value_kpa * PSI_PER_KPA,
        PressureUnit::Atm => value_kpa / KPA_PER_ATM,
        PressureUnit::MeterOfWater => value_kpa / KPA_PER_M_H2O,
    }
}

/// 압력을 원하는 단위로 변환한다.
pub fn convert_pressure(value: f64, from: PressureUnit, to: PressureUnit) -> f64 {
    let kpa = to_kpa(value, from);
    from_kpa(kpa, to)
}
