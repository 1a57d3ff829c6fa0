//! 물 공급 관련 계산 모듈 모음.

pub mod supply_line;
pub mod water_flow;

pub use supply_line::*;
pub use water_flow::*;
