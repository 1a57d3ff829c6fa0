use std::fs;

use chrono::NaiveDate;
use everyday_toolbox::vehicle::{
    append_volume_record, format_volume_record, lp100k_from_mpg, miles_per_gallon,
    tire_volume_liters, validate_aspect_ratio, validate_wheel_diameter, validate_width, FuelError,
    TireError, TireSpec,
};
use tempfile::TempDir;

fn assert_close(actual: f64, expected: f64, tol: f64) {
    assert!(
        (actual - expected).abs() <= tol,
        "actual={actual} expected={expected} tol={tol}"
    );
}

#[test]
fn tire_volume_for_common_sizes() {
    let spec = TireSpec::new(205.0, 60.0, 15.0).unwrap();
    assert_close(tire_volume_liters(&spec), 39.92, 0.01);
    let spec = TireSpec::new(185.0, 50.0, 14.0).unwrap();
    assert_close(tire_volume_liters(&spec), 24.09, 0.01);
}

#[test]
fn tire_minimums_are_inclusive() {
    assert_eq!(validate_width(100.0).unwrap(), 100.0);
    assert_eq!(validate_aspect_ratio(30.0).unwrap(), 30.0);
    assert_eq!(validate_wheel_diameter(11.0).unwrap(), 11.0);

    assert!(matches!(
        validate_width(99.9),
        Err(TireError::BelowMinimum { field: "width", .. })
    ));
    assert!(validate_aspect_ratio(29.0).is_err());
    assert!(validate_wheel_diameter(10.5).is_err());
    assert!(TireSpec::new(205.0, 60.0, 10.0).is_err());
}

#[test]
fn volume_record_truncates_dimensions() {
    let date = NaiveDate::from_ymd_opt(2024, 6, 4).unwrap();
    let spec = TireSpec::new(205.7, 60.2, 15.9).unwrap();
    assert_eq!(
        format_volume_record(date, &spec, 39.924),
        "2024-06-04, 205, 60, 15, 39.92"
    );
}

#[test]
fn volume_log_appends_lines() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("volumes.txt");
    let date = NaiveDate::from_ymd_opt(2024, 6, 4).unwrap();
    let first = TireSpec::new(205.0, 60.0, 15.0).unwrap();
    let second = TireSpec::new(185.0, 50.0, 14.0).unwrap();

    append_volume_record(&path, date, &first, tire_volume_liters(&first)).unwrap();
    append_volume_record(&path, date, &second, tire_volume_liters(&second)).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(
        lines,
        vec!["2024-06-04, 205, 60, 15, 39.92", "2024-06-04, 185, 50, 14, 24.09"]
    );
}

#[test]
fn mpg_and_lp100k() {
    let mpg = miles_per_gallon(30462.0, 30810.0, 11.2).unwrap();
    assert_close(mpg, 31.0714, 0.001);
    assert_close(lp100k_from_mpg(mpg).unwrap(), 7.5702, 0.001);
    assert_close(miles_per_gallon(100.0, 100.0, 2.0).unwrap(), 0.0, 1e-12);
}

#[test]
fn fuel_errors() {
    assert_eq!(
        miles_per_gallon(0.0, 100.0, 0.0),
        Err(FuelError::NonPositiveFuel(0.0))
    );
    assert_eq!(
        miles_per_gallon(500.0, 400.0, 10.0),
        Err(FuelError::OdometerReversed {
            start: 500.0,
            end: 400.0
        })
    );
    assert_eq!(lp100k_from_mpg(0.0), Err(FuelError::NonPositiveEfficiency(0.0)));
}

#[test]
fn nan_fuel_inputs_are_rejected() {
    assert!(matches!(
        miles_per_gallon(0.0, 100.0, f64::NAN),
        Err(FuelError::NonPositiveFuel(_))
    ));
    assert!(matches!(
        lp100k_from_mpg(f64::NAN),
        Err(FuelError::NonPositiveEfficiency(_))
    ));
}
