use thiserror::Error;

/// mpg → L/100km 환산 상수 (100 × 3.785411784 / 1.609344)
pub const LP100K_MPG_FACTOR: f64 = 235.215;

/// 연비 계산 오류.
#[derive(Debug, Error, PartialEq)]
pub enum FuelError {
    #[error("연료 사용량은 0보다 커야 합니다: {0}")]
    NonPositiveFuel(f64),
    #[error("종료 주행거리({end})가 시작 주행거리({start})보다 작습니다")]
    OdometerReversed { start: f64, end: f64 },
    #[error("연비는 0보다 커야 합니다: {0}")]
    NonPositiveEfficiency(f64),
}

/// 두 주행거리계 값[mile]과 연료량[US gal]으로 평균 연비[mpg]를 구한다.
pub fn miles_per_gallon(start_miles: f64, end_miles: f64, gallons: f64) -> Result<f64, FuelError> {
    if !(gallons.is_finite() && gallons > 0.0) {
        return Err(FuelError::NonPositiveFuel(gallons));
    }
    if end_miles < start_miles {
        return Err(FuelError::OdometerReversed {
            start: start_miles,
            end: end_miles,
        });
    }
    Ok((end_miles - start_miles) / gallons)
}

/// mpg → L/100km
pub fn lp100k_from_mpg(mpg: f64) -> Result<f64, FuelError> {
    if !(mpg.is_finite() && mpg > 0.0) {
        return Err(FuelError::NonPositiveEfficiency(mpg));
    }
    Ok(LP100K_MPG_FACTOR / mpg)
}
