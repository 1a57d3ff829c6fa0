use serde::{Deserialize, Serialize};

/// 국제 마일 [m]
pub(crate) const METERS_PER_MILE: f64 = 1609.344;

/// 변환기와 피트니스 키 입력(cm/in)에서 쓰는 길이 단위.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LengthUnit {
    Meter,
    Millimeter,
    Centimeter,
    Kilometer,
    Inch,
    Foot,
    Yard,
    /// 주행거리계 단위
    Mile,
}

impl LengthUnit {
    /// 1 단위가 몇 미터인지.
    pub fn meters(self) -> f64 {
        match self {
            LengthUnit::Meter => 1.0,
            LengthUnit::Millimeter => 0.001,
            LengthUnit::Centimeter => 0.01,
            LengthUnit::Kilometer => 1000.0,
            LengthUnit::Inch => 0.0254,
            LengthUnit::Foot => 0.3048,
            LengthUnit::Yard => 0.9144,
            LengthUnit::Mile => METERS_PER_MILE,
        }
    }
}

pub fn convert_length(value: f64, from: LengthUnit, to: LengthUnit) -> f64 {
    value * from.meters() / to.meters()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn height_in_inches_to_centimeters() {
        let cm = convert_length(69.0, LengthUnit::Inch, LengthUnit::Centimeter);
        assert!((cm - 175.26).abs() < 1e-9, "cm={cm}");
    }
}
