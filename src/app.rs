use std::path::Path;

use thiserror::Error;

use crate::config::{Config, ConfigError};
use crate::conversion::ConversionError;
use crate::fitness::FitnessError;
use crate::grocery::ReceiptError;
use crate::ui_cli;
use crate::vehicle::{FuelError, TireError};
use crate::water::WaterFlowError;

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    /// 콘솔 입출력 오류
    #[error("입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// 설정 저장/로드 오류
    #[error("설정 오류: {0}")]
    Config(#[from] ConfigError),
    /// 단위 변환 오류
    #[error("단위 변환 오류: {0}")]
    Conversion(#[from] ConversionError),
    /// 물 공급 계산 오류
    #[error("물 공급 계산 오류: {0}")]
    WaterFlow(#[from] WaterFlowError),
    /// 피트니스 계산 오류
    #[error("피트니스 오류: {0}")]
    Fitness(#[from] FitnessError),
    /// 영수증 생성 오류
    #[error("영수증 오류: {0}")]
    Receipt(#[from] ReceiptError),
    /// 연비 계산 오류
    #[error("연비 계산 오류: {0}")]
    Fuel(#[from] FuelError),
    /// 타이어 계산/기록 오류
    #[error("타이어 계산 오류: {0}")]
    Tire(#[from] TireError),
    /// 입력 스트림이 닫힘
    #[error("입력이 종료되었습니다")]
    InputClosed,
}

impl AppError {
    /// 메뉴 루프를 계속할 수 없는 오류인지 여부.
    pub fn is_fatal(&self) -> bool {
        matches!(self, AppError::Io(_) | AppError::Config(_) | AppError::InputClosed)
    }
}

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    WaterSupply,
    Fitness,
    Receipt,
    TireVolume,
    FuelEfficiency,
    UnitConversion,
    Settings,
    Exit,
}

/// 도구 하나를 실행한다. 설정 변경은 호출자가 저장한다.
pub fn run_tool(choice: MenuChoice, config: &mut Config) -> Result<(), AppError> {
    match choice {
        MenuChoice::WaterSupply => ui_cli::handle_water_supply(),
        MenuChoice::Fitness => ui_cli::handle_fitness(config),
        MenuChoice::Receipt => ui_cli::handle_receipt(config),
        MenuChoice::TireVolume => ui_cli::handle_tire_volume(config),
        MenuChoice::FuelEfficiency => ui_cli::handle_fuel_efficiency(),
        MenuChoice::UnitConversion => ui_cli::handle_unit_conversion(),
        MenuChoice::Settings => ui_cli::handle_settings(config),
        MenuChoice::Exit => Ok(()),
    }
}

/// CLI 애플리케이션의 메인 루프를 실행한다.
///
/// 도구 실행 중 오류는 출력 후 메뉴로 돌아가며, 입출력/설정 오류만 루프를 끝낸다.
pub fn run(config: &mut Config, config_path: &Path) -> Result<(), AppError> {
    loop {
        let choice = ui_cli::main_menu()?;
        if choice == MenuChoice::Exit {
            config.save(config_path)?;
            println!("프로그램을 종료합니다. 건강하세요!");
            break;
        }
        match run_tool(choice, config) {
            Ok(()) => {}
            Err(err) if err.is_fatal() => return Err(err),
            Err(err) => {
                tracing::warn!(?choice, error = %err, "tool failed");
                println!("오류: {err}");
            }
        }
        if choice == MenuChoice::Settings {
            config.save(config_path)?;
        }
    }
    Ok(())
}
