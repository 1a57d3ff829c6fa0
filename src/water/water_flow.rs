//! 고가 수조에서 주택까지의 물 공급 압력 계산식.
//!
//! 압력 관련 함수는 모두 kPa를 반환하며, 손실은 음수로 표현한다.

use crate::units::PSI_PER_KPA;

/// 물 밀도 [kg/m3]
pub const WATER_DENSITY: f64 = 998.2;
/// 중력 가속도 [m/s2]
pub const EARTH_GRAVITY: f64 = 9.80665;
/// 물의 점성계수 [Pa·s]
pub const WATER_DYNAMIC_VISCOSITY: f64 = 0.0010016;

/// 피팅(45°/90° 엘보) 1개당 경험적 손실 계수.
const FITTING_LOSS_COEFF: f64 = 0.04;
/// 수조 벽 높이 중 수두로 잡는 비율.
const TANK_FILL_RATIO: f64 = 0.75;

/// 탑 높이와 수조 벽 높이로 물기둥 높이[m]를 구한다.
pub fn water_column_height(tower_height: f64, tank_height: f64) -> f64 {
    tower_height + TANK_FILL_RATIO * tank_height
}

/// 물기둥 높이[m]가 만드는 정수압[kPa].
pub fn pressure_gain_from_water_height(height: f64) -> f64 {
    WATER_DENSITY * EARTH_GRAVITY * height / 1000.0
}

/// Darcy-Weisbach 형태의 직관 마찰 손실[kPa].
///
/// * `pipe_diameter` - 내경 [m]
/// * `pipe_length` - 길이 [m]
/// * `friction_factor` - 마찰계수 (무차원)
/// * `fluid_velocity` - 유속 [m/s]
pub fn pressure_loss_from_pipe(
    pipe_diameter: f64,
    pipe_length: f64,
    friction_factor: f64,
    fluid_velocity: f64,
) -> f64 {
    -(friction_factor * pipe_length * WATER_DENSITY * fluid_velocity.powi(2))
        / (2000.0 * pipe_diameter)
}

/// 엘보 등 피팅 개수에 비례하는 손실[kPa].
pub fn pressure_loss_from_fittings(fluid_velocity: f64, quantity_fittings: u32) -> f64 {
    -(FITTING_LOSS_COEFF * WATER_DENSITY * fluid_velocity.powi(2) * f64::from(quantity_fittings))
        / 2000.0
}

/// 관 내 물 흐름의 레이놀즈수.
pub fn reynolds_number(hydraulic_diameter: f64, fluid_velocity: f64) -> f64 {
    WATER_DENSITY * hydraulic_diameter * fluid_velocity / WATER_DYNAMIC_VISCOSITY
}

/// 큰 관에서 작은 관으로 줄어들 때의 축소 손실[kPa].
pub fn pressure_loss_from_pipe_reduction(
    larger_diameter: f64,
    fluid_velocity: f64,
    reynolds_number: f64,
    smaller_diameter: f64,
) -> f64 {
    let k = (0.1 + 50.0 / reynolds_number) * ((larger_diameter / smaller_diameter).powi(4) - 1.0);
    -(k * WATER_DENSITY * fluid_velocity.powi(2)) / 2000.0
}

/// kPa → psi
pub fn kpa_to_psi(pressure: f64) -> f64 {
    pressure * PSI_PER_KPA
}
