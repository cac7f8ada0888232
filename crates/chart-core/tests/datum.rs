// File: crates/chart-core/tests/datum.rs
// Purpose: Mixed numeric and timestamp coordinates: magnitude, order, display.

use std::cmp::Ordering;

use chart_core::{Datum, Series};
use chrono::{NaiveDate, TimeZone, Utc};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

#[test]
fn numbers_carry_their_value() {
    assert_eq!(Datum::from(5.0).value(), 5.0);
    assert!(Datum::from(5.0).is_finite());
    assert!(!Datum::from(f64::NAN).is_finite());
}

#[test]
fn timestamps_map_to_epoch_seconds() {
    let datum = Datum::from(date(1970, 1, 2));
    assert_eq!(datum.value(), 86_400.0, "one day past the epoch");
    let with_time = Datum::from(Utc.with_ymd_and_hms(1970, 1, 1, 0, 0, 30).unwrap());
    assert_eq!(with_time.value(), 30.0);
}

#[test]
fn numbers_and_timestamps_share_one_order() {
    let epoch = Datum::from(date(1970, 1, 1));
    assert_eq!(epoch.cmp_value(&Datum::from(1.0)), Ordering::Less);
    assert_eq!(Datum::from(86_400.0).cmp_value(&Datum::from(date(1970, 1, 2))), Ordering::Equal);
    assert_eq!(
        Datum::from(date(2024, 1, 2)).cmp_value(&Datum::from(date(2024, 1, 1))),
        Ordering::Greater
    );
}

#[test]
fn display_keeps_dates_readable() {
    assert_eq!(Datum::from(2.5).to_string(), "2.5");
    assert_eq!(Datum::from(5.0).to_string(), "5", "whole numbers drop the fraction");
    assert_eq!(Datum::from(date(2023, 1, 2)).to_string(), "2023-01-02");
    let afternoon = Utc.with_ymd_and_hms(2023, 1, 2, 13, 4, 5).unwrap();
    assert_eq!(Datum::from(afternoon).to_string(), "2023-01-02 13:04:05");
}

#[test]
fn series_sort_dated_points_chronologically() {
    let series = Series::line(vec![
        (date(2024, 3, 1), 3.0),
        (date(2024, 1, 1), 1.0),
        (date(2024, 2, 1), 2.0),
    ])
    .expect("dated series");
    let ys: Vec<f64> = series.y_values().collect();
    assert_eq!(ys, vec![1.0, 2.0, 3.0], "points ordered by date");
    assert_eq!(series.points()[0].x.to_string(), "2024-01-01");
}

#[test]
fn dated_x_against_numeric_y_columns() {
    let series = Series::from_columns(
        chart_core::SeriesKind::Scatter,
        vec![date(2024, 1, 2), date(2024, 1, 1)],
        vec![10.0, 20.0],
    )
    .expect("columns");
    let xs: Vec<f64> = series.x_values().collect();
    assert!(xs[0] < xs[1], "dates sorted ascending");
}
