use everyday_toolbox::conversion::{convert, unit_options, ConversionError};
use everyday_toolbox::quantity::QuantityKind;

fn assert_close(actual: f64, expected: f64, tol: f64) {
    assert!(
        (actual - expected).abs() <= tol,
        "actual={actual} expected={expected} tol={tol}"
    );
}

#[test]
fn pressure_conversions() {
    assert_close(convert(QuantityKind::Pressure, 100.0, "kPa", "psi").unwrap(), 14.5038, 0.001);
    assert_close(convert(QuantityKind::Pressure, 1.0, "bar", "kPa").unwrap(), 100.0, 1e-9);
    assert_close(convert(QuantityKind::Pressure, 10.0, "mH2O", "kPa").unwrap(), 98.0665, 0.01);
}

#[test]
fn fuel_economy_round_trip() {
    let lp100k = convert(QuantityKind::FuelEconomy, 30.0, "mpg", "L/100km").unwrap();
    assert_close(lp100k, 7.8405, 0.001);
    let back = convert(QuantityKind::FuelEconomy, lp100k, "l/100km", "MPG").unwrap();
    assert_close(back, 30.0, 1e-9);
}

#[test]
fn length_volume_mass() {
    assert_close(convert(QuantityKind::Length, 1.0, "mi", "km").unwrap(), 1.609344, 1e-6);
    assert_close(convert(QuantityKind::Volume, 1.0, "gal", "L").unwrap(), 3.785411784, 1e-6);
    assert_close(convert(QuantityKind::Mass, 1.0, "lb", "kg").unwrap(), 0.453592, 1e-6);
}

#[test]
fn unknown_unit_and_quantity() {
    assert!(matches!(
        convert(QuantityKind::Length, 1.0, "furlong", "m"),
        Err(ConversionError::UnknownUnit(ref u)) if u == "furlong"
    ));
    assert!(matches!(
        "energy".parse::<QuantityKind>(),
        Err(ConversionError::UnknownQuantity(_))
    ));
}

#[test]
fn every_listed_unit_parses() {
    for kind in QuantityKind::ALL {
        for (_, code) in unit_options(kind) {
            assert!(convert(kind, 1.0, code, code).is_ok(), "{kind:?} {code}");
        }
        let (from, to) = kind.default_units();
        assert!(convert(kind, 1.0, from, to).is_ok(), "{kind:?} defaults");
    }
}
