//! 단위 정의 및 변환 모듈 모음.

pub mod fuel_economy;
pub mod length;
pub mod mass;
pub mod pressure;
pub mod volume;

pub use fuel_economy::{convert_fuel_economy, FuelEconomyUnit};
pub use length::{convert_length, LengthUnit};
pub use mass::{convert_mass, MassUnit};
pub use pressure::{convert_pressure, PressureUnit, PSI_PER_KPA};
pub use volume::{convert_volume, VolumeUnit};
