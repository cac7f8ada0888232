// File: crates/chart-core/tests/quick.rs
// Purpose: One-call constructors split their options between series and chart.

use chart_core::{quick, Chart, ChartError, Color, LineStyle, QuickOptions, SeriesKind, PALETTE};

#[test]
fn quick_line_splits_the_options() {
    let chart = quick::line(
        vec![(1.0, 1.0), (2.0, 4.0)],
        QuickOptions {
            name: Some("scores".into()),
            color: Some(Color::new(10, 20, 30)),
            line_style: Some(LineStyle::Dashed),
            line_width: Some(3.0),
            title: Some("Quick".into()),
            width: Some(800.0),
            x_label: Some("day".into()),
            ..QuickOptions::default()
        },
    )
    .expect("chart");
    assert_eq!(chart.title(), "Quick");
    assert_eq!((chart.width(), chart.height()), (800.0, 500.0), "height keeps its default");
    assert_eq!(chart.x_label(), "day");
    assert_eq!(chart.y_label(), "");
    let series = chart.series_named("scores").expect("series configured");
    assert_eq!(series.kind(), SeriesKind::Line);
    assert_eq!(series.color(), Some(Color::new(10, 20, 30)));
    assert_eq!(series.line_style(), LineStyle::Dashed);
    assert_eq!(series.line_width(), 3.0);
}

#[test]
fn quick_scatter_defaults() {
    let chart = quick::scatter(
        vec![(1.0, 1.0), (2.0, 2.0)],
        QuickOptions { marker_size: Some(8.0), ..QuickOptions::default() },
    )
    .expect("chart");
    let series = &chart.all_series()[0];
    assert_eq!(series.kind(), SeriesKind::Scatter);
    assert_eq!(series.marker_size(), 8.0);
    assert_eq!(series.color(), Some(PALETTE[0]), "unset color falls to the palette");
    assert_eq!(chart.title(), "");
    assert_eq!((chart.width(), chart.height()), (700.0, 500.0));
}

#[test]
fn quick_constructors_propagate_data_errors() {
    let err = quick::line(Vec::<(f64, f64)>::new(), QuickOptions::default())
        .expect_err("empty data");
    assert_eq!(err, ChartError::EmptySeries);
    let err = quick::scatter(
        vec![(1.0, 1.0)],
        QuickOptions { width: Some(-1.0), ..QuickOptions::default() },
    )
    .expect_err("bad size");
    assert!(matches!(err, ChartError::InvalidDimensions { .. }));
}

#[test]
fn quick_chart_renders_like_a_hand_built_one() {
    let chart = quick::line(vec![(1.0, 1.0), (2.0, 4.0), (3.0, 9.0)], QuickOptions::default())
        .expect("chart");
    let scene = chart.create().expect("render");
    assert!(scene.get_by_name("axes").is_some());
    assert!(scene.get_by_name("title").is_some());
    assert!(scene.iter().any(|g| g.name() == Some("series1")));
}
