use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use chrono::NaiveDate;

use super::{TireError, TireSpec};

/// 기록 한 줄: `YYYY-MM-DD, 폭, 편평비, 직경, 체적`. 규격 값은 정수로 잘라 쓴다.
pub fn format_volume_record(date: NaiveDate, spec: &TireSpec, volume_liters: f64) -> String {
    format!(
        "{}, {}, {}, {}, {:.2}",
        date.format("%Y-%m-%d"),
        spec.width_mm.trunc() as i64,
        spec.aspect_ratio.trunc() as i64,
        spec.wheel_diameter_in.trunc() as i64,
        volume_liters
    )
}

/// 체적 기록 파일에 한 줄을 덧붙인다. 파일이 없으면 만든다.
pub fn append_volume_record(
    path: impl AsRef<Path>,
    date: NaiveDate,
    spec: &TireSpec,
    volume_liters: f64,
) -> Result<(), TireError> {
    let path = path.as_ref();
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(file, "{}", format_volume_record(date, spec, volume_liters))?;
    tracing::info!(path = %path.display(), volume_liters, "tire volume appended");
    Ok(())
}
