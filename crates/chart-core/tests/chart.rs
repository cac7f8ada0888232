// File: crates/chart-core/tests/chart.rs
// Purpose: Render pipeline geometry, emission order, and chart state validation.

use chart_core::{
    AxisChart, Chart, ChartError, Color, Graphic, Series, PALETTE,
};

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn sample_chart() -> AxisChart {
    AxisChart::new(Series::line(vec![(1.0, 1.0), (2.0, 4.0), (3.0, 9.0)]).expect("series"))
}

fn index_of(scene: &chart_core::Scene, name: &str) -> usize {
    scene
        .iter()
        .position(|g| g.name() == Some(name))
        .unwrap_or_else(|| panic!("no graphic named {name}"))
}

#[test]
fn axes_rectangle_position_and_size() {
    let scene = sample_chart().render(700.0, 500.0).expect("render");
    match scene.get_by_name("axes").expect("axes rect present") {
        Graphic::Rect(r) => {
            assert!(close(r.x, 70.0) && close(r.y, 50.0), "axes at ({}, {})", r.x, r.y);
            assert!(
                close(r.width, 560.0) && close(r.height, 400.0),
                "axes size {} x {}",
                r.width,
                r.height
            );
            assert_eq!(r.opacity, 0.0, "axes fill must not cover the series");
            assert_eq!(r.line_width, 1.0);
        }
        other => panic!("axes should be a rectangle, got {other:?}"),
    }
}

#[test]
fn margins_follow_the_padding() {
    let mut chart = sample_chart();
    chart.set_horizontal_padding(0.2).expect("valid padding");
    chart.set_vertical_padding(0.05).expect("valid padding");
    let scene = chart.render(700.0, 500.0).expect("render");
    match scene.get_by_name("axes").expect("axes") {
        Graphic::Rect(r) => {
            assert!(close(r.x, 140.0) && close(r.width, 420.0), "x {} w {}", r.x, r.width);
            assert!(close(r.y, 25.0) && close(r.height, 450.0), "y {} h {}", r.y, r.height);
        }
        other => panic!("axes should be a rectangle, got {other:?}"),
    }
}

#[test]
fn padding_outside_open_interval_rejected() {
    let mut chart = sample_chart();
    for bad in [0.0, 0.5, -0.1, 0.75, f64::NAN] {
        let err = chart.set_horizontal_padding(bad).expect_err("padding must be rejected");
        assert!(matches!(err, ChartError::InvalidPadding(_)), "{bad} -> {err}");
    }
    chart.set_vertical_padding(0.49).expect("just inside the interval");
    assert_eq!(chart.vertical_padding(), 0.49);
    assert_eq!(chart.horizontal_padding(), 0.1, "failed sets leave the value alone");
}

#[test]
fn emission_order_grid_series_blocks_title_axes() {
    let scene = sample_chart().render(700.0, 500.0).expect("render");
    let last_grid = scene
        .iter()
        .enumerate()
        .filter(|(_, g)| matches!(g.name(), Some(n) if n.ends_with("-gridline")))
        .map(|(i, _)| i)
        .max()
        .expect("gridlines present by default");
    let first_series = index_of(&scene, "series1");
    assert!(last_grid < first_series, "grid lines sit under the series");
    let last_series = scene
        .iter()
        .enumerate()
        .filter(|(_, g)| g.name() == Some("series1"))
        .map(|(i, _)| i)
        .max()
        .expect("series primitives present");
    let first_block = index_of(&scene, "block-west");
    assert!(last_series < first_block, "blocks cover series overflow");
    assert!(index_of(&scene, "block-south") < index_of(&scene, "title"));
    assert!(index_of(&scene, "title") < index_of(&scene, "axes"));
}

#[test]
fn blocking_rectangles_cover_all_four_margins() {
    let scene = sample_chart().render(700.0, 500.0).expect("render");
    for name in ["block-west", "block-north", "block-east", "block-south"] {
        match scene.get_by_name(name).expect("block present") {
            Graphic::Rect(r) => {
                assert_eq!(r.opacity, 1.0, "{name} must be opaque");
                assert_eq!(r.fill, scene.background, "{name} matches the background");
            }
            other => panic!("{name} should be a rectangle, got {other:?}"),
        }
    }
    match scene.get_by_name("block-west").expect("west block") {
        Graphic::Rect(r) => {
            assert!(close(r.x, 0.0) && close(r.width, 70.0), "west block spans the margin");
            assert!(close(r.height, 500.0), "west block runs full height");
        }
        _ => unreachable!(),
    }
}

#[test]
fn line_series_becomes_connected_segments() {
    let scene = sample_chart().render(700.0, 500.0).expect("render");
    let segments: Vec<&Graphic> =
        scene.iter().filter(|g| g.name() == Some("series1")).collect();
    assert_eq!(segments.len(), 2, "three points make two segments");
    match (segments[0], segments[1]) {
        (Graphic::Line(a), Graphic::Line(b)) => {
            assert_eq!(a.end, b.start, "segments share interior points");
            assert!(close(a.start.0, 70.0 + 560.0 / 3.0), "first x at data x=1");
        }
        other => panic!("line series should emit lines, got {other:?}"),
    }
}

#[test]
fn title_is_centered_in_the_top_margin() {
    let mut chart = sample_chart();
    chart.set_title("Scores");
    let scene = chart.render(700.0, 500.0).expect("render");
    match scene.get_by_name("title").expect("title present") {
        Graphic::Text(t) => {
            assert_eq!(t.content, "Scores");
            assert!(close(t.x, 350.0) && close(t.y, 25.0), "title at ({}, {})", t.x, t.y);
            assert_eq!(t.font_size, 32.0, "title font capped");
        }
        other => panic!("title should be text, got {other:?}"),
    }
}

#[test]
fn axis_labels_sit_half_a_margin_from_the_edge() {
    let mut chart = sample_chart();
    chart.set_x_label("Day");
    chart.set_y_label("Score");
    let scene = chart.render(700.0, 500.0).expect("render");
    match scene.get_by_name("x-label").expect("x label") {
        Graphic::Text(t) => {
            assert!(close(t.x, 350.0) && close(t.y, 475.0), "x label at ({}, {})", t.x, t.y);
            assert_eq!(t.rotation, None);
        }
        other => panic!("x label should be text, got {other:?}"),
    }
    match scene.get_by_name("y-label").expect("y label") {
        Graphic::Text(t) => {
            assert!(close(t.x, 35.0) && close(t.y, 250.0), "y label at ({}, {})", t.x, t.y);
            assert_eq!(t.rotation, Some(270.0), "y label reads bottom-to-top");
        }
        other => panic!("y label should be text, got {other:?}"),
    }
    let bare = sample_chart().render(700.0, 500.0).expect("render");
    assert!(bare.get_by_name("x-label").is_none(), "no label text when unset");
    assert!(bare.get_by_name("y-label").is_none());
}

#[test]
fn tick_labels_and_grid_lines_match_the_derived_ticks() {
    let scene = sample_chart().render(700.0, 500.0).expect("render");
    let x_grid = scene.iter().filter(|g| g.name() == Some("x-gridline")).count();
    let y_grid = scene.iter().filter(|g| g.name() == Some("y-gridline")).count();
    assert_eq!(x_grid, 4, "x range 0..3 ticks at every integer");
    assert_eq!(y_grid, 10, "y range 0..9 ticks at every integer");
    let labels: Vec<&str> = scene
        .iter()
        .filter_map(|g| match g {
            Graphic::Text(t) if t.name.is_none() => Some(t.content.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(labels.len(), 14);
    for want in ["0", "3", "9"] {
        assert!(labels.contains(&want), "missing tick label {want}");
    }
    assert!(!labels.iter().any(|l| l.contains('.')), "integral ticks drop the decimal point");
}

#[test]
fn grid_can_be_disabled_per_axis() {
    let mut chart = sample_chart();
    chart.set_grid(false, true);
    let scene = chart.render(700.0, 500.0).expect("render");
    assert_eq!(scene.iter().filter(|g| g.name() == Some("x-gridline")).count(), 0);
    assert!(scene.iter().any(|g| g.name() == Some("y-gridline")));
    chart.set_grid(false, false);
    let scene = chart.render(700.0, 500.0).expect("render");
    assert!(!scene.iter().any(|g| matches!(g.name(), Some(n) if n.ends_with("-gridline"))));
}

#[test]
fn tick_overrides_replace_the_derived_positions() {
    let mut chart = sample_chart();
    chart.set_x_ticks(vec![2.5, 0.5]).expect("finite ticks");
    assert_eq!(chart.x_ticks().expect("ticks"), vec![0.5, 2.5], "overrides are kept sorted");
    let scene = chart.render(700.0, 500.0).expect("render");
    assert_eq!(scene.iter().filter(|g| g.name() == Some("x-gridline")).count(), 2);
    let labels: Vec<&str> = scene
        .iter()
        .filter_map(|g| match g {
            Graphic::Text(t) if t.name.is_none() => Some(t.content.as_str()),
            _ => None,
        })
        .collect();
    assert!(labels.contains(&"0.5") && labels.contains(&"2.5"));
    chart.clear_x_ticks();
    assert_eq!(chart.x_ticks().expect("ticks").len(), 4, "cleared override derives again");
    let err = chart.set_y_ticks(vec![1.0, f64::NAN]).expect_err("NaN tick");
    assert!(matches!(err, ChartError::NonFiniteTick(_)));
}

#[test]
fn rendering_is_idempotent() {
    let mut chart = sample_chart();
    chart.set_title("Same twice");
    chart.set_legend(true);
    let first = chart.render(700.0, 500.0).expect("render");
    let second = chart.render(700.0, 500.0).expect("render");
    assert_eq!(first, second, "rendering must not mutate chart state");
}

#[test]
fn create_uses_the_default_size() {
    let mut chart = sample_chart();
    let scene = chart.create().expect("render");
    assert_eq!((scene.width, scene.height), (700.0, 500.0));
    chart.set_size(800.0, 600.0).expect("valid size");
    let scene = chart.create().expect("render");
    assert_eq!((scene.width, scene.height), (800.0, 600.0));
    let err = chart.set_size(0.0, 600.0).expect_err("zero width");
    assert!(matches!(err, ChartError::InvalidDimensions { .. }));
}

#[test]
fn limit_setters_validate_against_current_bounds() {
    let mut chart = sample_chart();
    // Derived y range is 0..9.
    assert!(matches!(
        chart.set_y_lower_limit(9.0),
        Err(ChartError::InvalidLimit { lower: _, upper: _ })
    ));
    assert!(matches!(chart.set_y_lower_limit(20.0), Err(ChartError::InvalidLimit { .. })));
    assert!(matches!(chart.set_y_upper_limit(-1.0), Err(ChartError::InvalidLimit { .. })));
    assert!(matches!(
        chart.set_x_upper_limit(f64::INFINITY),
        Err(ChartError::NonFiniteLimit(_))
    ));
    chart.set_y_lower_limit(-5.0).expect("below the derived upper");
    assert_eq!(chart.y_lower_limit(), -5.0);
    chart.clear_y_limits();
    assert_eq!(chart.y_lower_limit(), 0.0, "cleared limits derive again");
}

#[test]
fn stale_limits_surface_at_render_time() {
    let mut chart = AxisChart::new(
        Series::line(vec![(1.0, 1.0), (2.0, 4.0), (3.0, 9.0)])
            .expect("series")
            .with_name("s"),
    );
    chart.set_x_lower_limit(2.0).expect("valid against the data right now");
    let series = chart.series_named_mut("s").expect("named series");
    series.remove_point(2.0, 4.0).expect("remove");
    series.remove_point(3.0, 9.0).expect("remove");
    // Derived x upper is now 2, equal to the stored lower bound.
    let err = chart.render(700.0, 500.0).expect_err("range collapsed");
    assert!(matches!(err, ChartError::DegenerateRange { .. }), "got {err}");
}

#[test]
fn palette_assignment_is_per_chart_and_in_order() {
    let mut chart = sample_chart();
    chart
        .add_series(Series::scatter(vec![(1.0, 2.0)]).expect("series").with_name("b"))
        .expect("add");
    assert_eq!(chart.all_series()[0].color(), Some(PALETTE[0]));
    assert_eq!(chart.all_series()[1].color(), Some(PALETTE[1]));
    let other = sample_chart();
    assert_eq!(
        other.all_series()[0].color(),
        Some(PALETTE[0]),
        "charts assign colors independently"
    );
}

#[test]
fn explicit_series_colors_are_never_reassigned() {
    let custom = Color::new(1, 2, 3);
    let mut chart = AxisChart::new(
        Series::line(vec![(1.0, 1.0), (2.0, 2.0)]).expect("series").with_color(PALETTE[0]),
    );
    chart
        .add_series(Series::line(vec![(1.0, 3.0)]).expect("series").with_name("next"))
        .expect("add");
    assert_eq!(
        chart.series_named("next").expect("series").color(),
        Some(PALETTE[1]),
        "assignment skips colors already in use"
    );
    chart
        .add_series(Series::line(vec![(2.0, 5.0)]).expect("series").with_name("fixed").with_color(custom))
        .expect("add");
    assert_eq!(chart.series_named("fixed").expect("series").color(), Some(custom));
}

#[test]
fn palette_overflow_is_deterministic() {
    let build = || {
        let mut chart = sample_chart();
        for i in 0..9 {
            chart
                .add_series(
                    Series::line(vec![(1.0, i as f64), (2.0, i as f64 + 1.0)])
                        .expect("series")
                        .with_name(format!("s{i}")),
                )
                .expect("add");
        }
        chart
    };
    let chart = build();
    let overflow = chart.all_series()[9].color().expect("assigned");
    assert!(
        !PALETTE.contains(&overflow),
        "the tenth series cannot reuse an in-use palette color"
    );
    assert_eq!(build().all_series()[9].color(), Some(overflow), "same slot, same color");
}

#[test]
fn duplicate_series_names_rejected() {
    let mut chart = AxisChart::new(
        Series::line(vec![(1.0, 1.0), (2.0, 2.0)]).expect("series").with_name("dup"),
    );
    let err = chart
        .add_series(Series::line(vec![(3.0, 3.0)]).expect("series").with_name("dup"))
        .expect_err("duplicate name");
    assert_eq!(err, ChartError::DuplicateSeriesName("dup".to_string()));
    assert_eq!(chart.all_series().len(), 1);
}

#[test]
fn remove_series_returns_it_but_never_empties_the_chart() {
    let mut chart = AxisChart::new(
        Series::line(vec![(1.0, 1.0), (2.0, 2.0)]).expect("series").with_name("a"),
    );
    chart
        .add_series(Series::line(vec![(1.0, 5.0)]).expect("series").with_name("b"))
        .expect("add");
    let removed = chart.remove_series("a").expect("removable");
    assert_eq!(removed.name(), Some("a"));
    assert_eq!(chart.remove_series("a").expect_err("gone"), ChartError::NoSuchSeries("a".into()));
    assert_eq!(chart.remove_series("b").expect_err("sole"), ChartError::RemoveLastSeries);
}

#[test]
fn empty_chart_construction_rejected() {
    let err = AxisChart::from_series(Vec::new()).expect_err("no series");
    assert_eq!(err, ChartError::EmptyChart);
}

#[test]
fn legend_shrinks_the_plot_to_three_quarters() {
    let mut chart = AxisChart::new(
        Series::line(vec![(1.0, 1.0), (2.0, 4.0), (3.0, 9.0)]).expect("series").with_name("a"),
    );
    chart.set_legend(true);
    let scene = chart.render(700.0, 500.0).expect("render");
    match scene.get_by_name("axes").expect("axes") {
        Graphic::Rect(r) => {
            assert!(close(r.x, 52.5) && close(r.width, 420.0), "x {} w {}", r.x, r.width);
        }
        other => panic!("axes should be a rectangle, got {other:?}"),
    }
    assert!(scene.get_by_name("legend-symbol-1").is_some());
    match scene.get_by_name("legend-text-1").expect("legend label") {
        Graphic::Text(t) => assert_eq!(t.content, "a"),
        other => panic!("legend label should be text, got {other:?}"),
    }
}

#[test]
fn legend_rows_skip_unnamed_series() {
    let mut chart = sample_chart(); // unnamed
    chart
        .add_series(Series::scatter(vec![(1.0, 2.0)]).expect("series").with_name("dots"))
        .expect("add");
    chart.set_legend(true);
    let scene = chart.render(700.0, 500.0).expect("render");
    match scene.get_by_name("legend-text-1").expect("one row") {
        Graphic::Text(t) => assert_eq!(t.content, "dots"),
        other => panic!("legend label should be text, got {other:?}"),
    }
    assert!(scene.get_by_name("legend-text-2").is_none(), "unnamed series get no row");
    match scene.get_by_name("legend-symbol-1").expect("symbol") {
        Graphic::Oval(_) => {}
        other => panic!("scatter series sample should be a marker, got {other:?}"),
    }
}

#[test]
fn bar_series_rises_from_the_axis() {
    let chart = AxisChart::new(Series::bar(vec![(1.0, 4.0), (3.0, 8.0)]).expect("series"));
    let scene = chart.render(100.0, 100.0).expect("render");
    let bars: Vec<&Graphic> = scene.iter().filter(|g| g.name() == Some("series1")).collect();
    assert_eq!(bars.len(), 2);
    match bars[0] {
        Graphic::Rect(r) => {
            // x range 0..3 over an 80px area starting at 10; bar one spans 0.5..1.5.
            assert!(close(r.x, 10.0 + 0.5 / 3.0 * 80.0), "bar left at {}", r.x);
            assert!(close(r.width, 80.0 / 3.0), "bar width {}", r.width);
            assert!(close(r.y, 50.0), "bar top {}", r.y);
            assert!(close(r.height, 40.0), "bar height {}", r.height);
        }
        other => panic!("bar series should emit rectangles, got {other:?}"),
    }
}
