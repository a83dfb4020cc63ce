use chrono::TimeZone;
use chrono::Utc;
use rust_decimal::Decimal;

use chart_coords::core::DataPoint;

#[test]
fn data_point_from_decimal_time_is_supported() {
    let time = Utc
        .timestamp_opt(1_700_000_000, 0)
        .single()
        .expect("valid ts");
    let point = DataPoint::from_decimal_time(time, Decimal::new(12345, 2)).expect("point");

    assert!((point.x() - 1_700_000_000.0).abs() <= 1e-6);
    assert!((point.y() - 123.45).abs() <= 1e-9);
}

#[test]
fn data_point_from_decimals_is_supported() {
    let point =
        DataPoint::from_decimals(Decimal::new(-250, 1), Decimal::new(75, 0)).expect("point");

    assert!((point.x() - (-25.0)).abs() <= 1e-9);
    assert!((point.y() - 75.0).abs() <= 1e-9);
}

#[test]
fn millisecond_precision_survives_conversion() {
    let time = Utc
        .timestamp_millis_opt(1_700_000_000_250)
        .single()
        .expect("valid ts");
    let point = DataPoint::from_decimal_time(time, Decimal::ONE).expect("point");

    assert!((point.x() - 1_700_000_000.25).abs() <= 1e-6);
}
