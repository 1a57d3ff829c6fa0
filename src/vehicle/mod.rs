//! 차량 관련 계산 모듈 모음.

pub mod fuel_efficiency;
pub mod tire_volume;
pub mod volume_log;

pub use fuel_efficiency::*;
pub use tire_volume::*;
pub use volume_log::*;
