use everyday_toolbox::config::{load_or_default, Config, UnitSystem};
use tempfile::TempDir;

#[test]
fn missing_config_is_created_with_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    let cfg = load_or_default(&path).unwrap();
    assert!(path.exists());
    assert_eq!(cfg.unit_system, UnitSystem::Metric);
    assert_eq!(cfg.receipt.store_name, "Ernesto's Daily Groceries");
}

#[test]
fn saved_config_round_trips() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    let mut cfg = Config::default();
    cfg.unit_system = UnitSystem::Imperial;
    cfg.tire.log_path = "garage/volumes.txt".into();
    cfg.save(&path).unwrap();

    let loaded = load_or_default(&path).unwrap();
    assert_eq!(loaded.unit_system, UnitSystem::Imperial);
    assert_eq!(loaded.tire.log_path, cfg.tire.log_path);
}

#[test]
fn partial_config_fills_missing_sections() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "unit_system = \"Imperial\"\n").unwrap();
    let cfg = load_or_default(&path).unwrap();
    assert_eq!(cfg.unit_system, UnitSystem::Imperial);
    assert_eq!(cfg.receipt.survey_url, "www.ernestosgroceries.com/survey");
}

#[test]
fn imperial_profile_values_convert_to_metric() {
    let kg = UnitSystem::Imperial.weight_to_kg(154.0);
    let cm = UnitSystem::Imperial.height_to_cm(69.0);
    assert!((kg - 69.853).abs() < 0.01, "kg={kg}");
    assert!((cm - 175.26).abs() < 0.01, "cm={cm}");
    assert!((UnitSystem::Metric.weight_to_kg(70.0) - 70.0).abs() < 1e-12);
}
