use std::f64::consts::PI;

use thiserror::Error;

/// 타이어 폭 하한 [mm]
pub const MIN_WIDTH_MM: f64 = 100.0;
/// 편평비 하한
pub const MIN_ASPECT_RATIO: f64 = 30.0;
/// 휠 직경 하한 [in]
pub const MIN_WHEEL_DIAMETER_IN: f64 = 11.0;

/// 타이어 계산/기록 오류.
#[derive(Debug, Error)]
pub enum TireError {
    #[error("{field} 값 {value} 은(는) {minimum} 이상이어야 합니다")]
    BelowMinimum {
        field: &'static str,
        minimum: f64,
        value: f64,
    },
    #[error("기록 파일 오류: {0}")]
    Io(#[from] std::io::Error),
}

/// 타이어 규격 (예: 205/60R15).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TireSpec {
    /// 단면 폭 [mm]
    pub width_mm: f64,
    /// 편평비 [%]
    pub aspect_ratio: f64,
    /// 휠 직경 [in]
    pub wheel_diameter_in: f64,
}

fn check_minimum(field: &'static str, value: f64, minimum: f64) -> Result<f64, TireError> {
    if value >= minimum {
        Ok(value)
    } else {
        Err(TireError::BelowMinimum {
            field,
            minimum,
            value,
        })
    }
}

pub fn validate_width(width_mm: f64) -> Result<f64, TireError> {
    check_minimum("width", width_mm, MIN_WIDTH_MM)
}

pub fn validate_aspect_ratio(aspect_ratio: f64) -> Result<f64, TireError> {
    check_minimum("aspect ratio", aspect_ratio, MIN_ASPECT_RATIO)
}

pub fn validate_wheel_diameter(diameter_in: f64) -> Result<f64, TireError> {
    check_minimum("diameter", diameter_in, MIN_WHEEL_DIAMETER_IN)
}

impl TireSpec {
    pub fn new(width_mm: f64, aspect_ratio: f64, wheel_diameter_in: f64) -> Result<Self, TireError> {
        Ok(Self {
            width_mm: validate_width(width_mm)?,
            aspect_ratio: validate_aspect_ratio(aspect_ratio)?,
            wheel_diameter_in: validate_wheel_diameter(wheel_diameter_in)?,
        })
    }
}

/// 타이어 내부 공기 체적[L].
///
/// v = π·w²·a·(w·a + 2540·d) / 10¹⁰
pub fn tire_volume_liters(spec: &TireSpec) -> f64 {
    let w = spec.width_mm;
    let a = spec.aspect_ratio;
    let d = spec.wheel_diameter_in;
    PI * w * w * a * (w * a + 2540.0 * d) / 10_000_000_000.0
}
