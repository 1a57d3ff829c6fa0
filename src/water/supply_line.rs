use thiserror::Error;

use super::water_flow::{
    kpa_to_psi, pressure_gain_from_water_height, pressure_loss_from_fittings,
    pressure_loss_from_pipe, pressure_loss_from_pipe_reduction, reynolds_number,
    water_column_height,
};

/// 물 공급 계산 오류를 표현한다.
#[derive(Debug, Error)]
pub enum WaterFlowError {
    /// 입력값이 잘못된 경우
    #[error("입력 오류: {0}")]
    InvalidInput(&'static str),
}

/// 배관 규격(내경/마찰계수/설계 유속).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PipeSpec {
    /// 내경 [m]
    pub inner_diameter_m: f64,
    /// 마찰계수
    pub friction_factor: f64,
    /// 설계 유속 [m/s]
    pub velocity_m_per_s: f64,
}

/// 수조 → 필지 구간 본관: PVC Schedule 80 (내경 11.294 in)
pub const PVC_SCHED80_SUPPLY: PipeSpec = PipeSpec {
    inner_diameter_m: 0.28687,
    friction_factor: 0.013,
    velocity_m_per_s: 1.65,
};

/// 필지 → 주택 구간 인입관: HDPE SDR11 (내경 1.917 in)
pub const HDPE_SDR11_HOUSEHOLD: PipeSpec = PipeSpec {
    inner_diameter_m: 0.048692,
    friction_factor: 0.018,
    velocity_m_per_s: 1.75,
};

/// 주택 수압 계산 입력.
#[derive(Debug, Clone)]
pub struct HouseSupplyInput {
    /// 급수탑 높이 [m]
    pub tower_height_m: f64,
    /// 수조 벽 높이 [m]
    pub tank_height_m: f64,
    /// 수조에서 필지까지 본관 길이 [m]
    pub supply_length_m: f64,
    /// 본관의 90° 엘보 개수
    pub fitting_count: u32,
    /// 필지에서 주택까지 인입관 길이 [m]
    pub house_length_m: f64,
}

/// 단계별 압력 변화와 최종 수압.
#[derive(Debug, Clone)]
pub struct HouseSupplyResult {
    /// 물기둥 높이 [m]
    pub water_height_m: f64,
    /// 정수압 [kPa]
    pub static_gain_kpa: f64,
    /// 본관 레이놀즈수
    pub reynolds: f64,
    /// 본관 마찰 손실 [kPa]
    pub supply_friction_kpa: f64,
    /// 엘보 손실 [kPa]
    pub fittings_kpa: f64,
    /// 관경 축소 손실 [kPa]
    pub reduction_kpa: f64,
    /// 인입관 마찰 손실 [kPa]
    pub house_friction_kpa: f64,
    /// 주택 수압 [kPa]
    pub pressure_kpa: f64,
    /// 주택 수압 [psi]
    pub pressure_psi: f64,
}

fn is_non_negative(v: f64) -> bool {
    v.is_finite() && v >= 0.0
}

/// 급수탑에서 주택까지 압력을 누적 계산한다.
pub fn house_pressure(input: &HouseSupplyInput) -> Result<HouseSupplyResult, WaterFlowError> {
    if !is_non_negative(input.tower_height_m) || !is_non_negative(input.tank_height_m) {
        return Err(WaterFlowError::InvalidInput("높이는 0 이상이어야 합니다"));
    }
    if !is_non_negative(input.supply_length_m) || !is_non_negative(input.house_length_m) {
        return Err(WaterFlowError::InvalidInput("배관 길이는 0 이상이어야 합니다"));
    }

    let supply = PVC_SCHED80_SUPPLY;
    let house = HDPE_SDR11_HOUSEHOLD;

    let water_height_m = water_column_height(input.tower_height_m, input.tank_height_m);
    let static_gain_kpa = pressure_gain_from_water_height(water_height_m);
    let mut pressure = static_gain_kpa;

    let reynolds = reynolds_number(supply.inner_diameter_m, supply.velocity_m_per_s);
    let supply_friction_kpa = pressure_loss_from_pipe(
        supply.inner_diameter_m,
        input.supply_length_m,
        supply.friction_factor,
        supply.velocity_m_per_s,
    );
    pressure += supply_friction_kpa;

    let fittings_kpa = pressure_loss_from_fittings(supply.velocity_m_per_s, input.fitting_count);
    pressure += fittings_kpa;

    let reduction_kpa = pressure_loss_from_pipe_reduction(
        supply.inner_diameter_m,
        supply.velocity_m_per_s,
        reynolds,
        house.inner_diameter_m,
    );
    pressure += reduction_kpa;

    let house_friction_kpa = pressure_loss_from_pipe(
        house.inner_diameter_m,
        input.house_length_m,
        house.friction_factor,
        house.velocity_m_per_s,
    );
    pressure += house_friction_kpa;

    tracing::debug!(
        water_height_m,
        static_gain_kpa,
        supply_friction_kpa,
        fittings_kpa,
        reduction_kpa,
        house_friction_kpa,
        "house supply pressure stages"
    );

    Ok(HouseSupplyResult {
        water_height_m,
        static_gain_kpa,
        reynolds,
        supply_friction_kpa,
        fittings_kpa,
        reduction_kpa,
        house_friction_kpa,
        pressure_kpa: pressure,
        pressure_psi: kpa_to_psi(pressure),
    })
}
