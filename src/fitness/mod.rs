//! 운동/식단 기록과 칼로리 계산 모듈 모음.

pub mod activity;
pub mod food;
pub mod profile;
pub mod report;
pub mod session;

pub use activity::*;
pub use food::*;
pub use profile::*;
pub use report::*;
pub use session::*;

use thiserror::Error;

/// 피트니스 계산 오류를 표현한다.
#[derive(Debug, Error, PartialEq)]
pub enum FitnessError {
    #[error("성별은 male 또는 female 이어야 합니다: {0}")]
    UnknownGender(String),
    #[error("알 수 없는 활동 수준: {0}")]
    UnknownActivityLevel(String),
    #[error("알 수 없는 운동 종류: {0}")]
    UnknownExercise(String),
    #[error("알 수 없는 메뉴 동작: {0}")]
    UnknownAction(String),
    /// 음수 시간/체중 등 물리적으로 불가능한 값
    #[error("입력 오류: {0}")]
    InvalidInput(&'static str),
}
