use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::units::{convert_length, convert_mass, LengthUnit, MassUnit};

/// 피트니스 프로필 입력에 쓰는 단위 시스템.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnitSystem {
    /// kg / cm
    Metric,
    /// lb / in
    Imperial,
}

impl UnitSystem {
    pub fn mass_unit(self) -> MassUnit {
        match self {
            UnitSystem::Metric => MassUnit::Kilogram,
            UnitSystem::Imperial => MassUnit::Pound,
        }
    }

    pub fn height_unit(self) -> LengthUnit {
        match self {
            UnitSystem::Metric => LengthUnit::Centimeter,
            UnitSystem::Imperial => LengthUnit::Inch,
        }
    }

    /// 프롬프트에 붙이는 (체중, 키) 단위 표기.
    pub fn labels(self) -> (&'static str, &'static str) {
        match self {
            UnitSystem::Metric => ("kg", "cm"),
            UnitSystem::Imperial => ("lb", "in"),
        }
    }

    /// 입력 체중을 kg으로 환산한다.
    pub fn weight_to_kg(self, value: f64) -> f64 {
        convert_mass(value, self.mass_unit(), MassUnit::Kilogram)
    }

    /// 입력 키를 cm로 환산한다.
    pub fn height_to_cm(self, value: f64) -> f64 {
        convert_length(value, self.height_unit(), LengthUnit::Centimeter)
    }

    pub fn weight_from_kg(self, kg: f64) -> f64 {
        convert_mass(kg, MassUnit::Kilogram, self.mass_unit())
    }

    pub fn height_from_cm(self, cm: f64) -> f64 {
        convert_length(cm, LengthUnit::Centimeter, self.height_unit())
    }
}

/// 영수증 관련 설정.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReceiptSettings {
    pub store_name: String,
    pub products_path: PathBuf,
    pub request_path: PathBuf,
    pub survey_url: String,
}

impl Default for ReceiptSettings {
    fn default() -> Self {
        Self {
            store_name: "Ernesto's Daily Groceries".to_string(),
            products_path: PathBuf::from("products.csv"),
            request_path: PathBuf::from("request.csv"),
            survey_url: "www.ernestosgroceries.com/survey".to_string(),
        }
    }
}

/// 타이어 체적 기록 설정.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TireSettings {
    pub log_path: PathBuf,
}

impl Default for TireSettings {
    fn default() -> Self {
        Self {
            log_path: PathBuf::from("volumes.txt"),
        }
    }
}

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub unit_system: UnitSystem,
    pub receipt: ReceiptSettings,
    pub tire: TireSettings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            unit_system: UnitSystem::Metric,
            receipt: ReceiptSettings::default(),
            tire: TireSettings::default(),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 파일 입출력 오류
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// TOML 역직렬화 오류
    #[error("설정 파싱 오류: {0}")]
    Parse(#[from] toml::de::Error),
    /// TOML 직렬화 오류
    #[error("설정 직렬화 오류: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// 설정 파일을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        tracing::info!(path = %path.display(), "config loaded");
        Ok(cfg)
    } else {
        let cfg = Config::default();
        cfg.save(path)?;
        tracing::info!(path = %path.display(), "default config written");
        Ok(cfg)
    }
}

impl Config {
    /// 설정을 TOML 파일로 저장한다.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}
