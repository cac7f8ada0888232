// File: crates/demo/src/main.rs
// Summary: Demo loads an x/y CSV (or built-in sample data) and renders line, scatter, bar, and pie charts to SVG.

use anyhow::{Context, Result};
use chart_core::{quick, AxisChart, Chart, Datum, PieChart, QuickOptions, Series};
use chrono::{DateTime, Duration, NaiveDate, Utc};
use std::path::{Path, PathBuf};

fn main() -> Result<()> {
    env_logger::init();

    // Accept a CSV path from the CLI or fall back to generated sample data.
    let rows = match std::env::args().nth(1) {
        Some(raw) => {
            let path = Path::new(&raw);
            println!("Using input file: {}", path.display());
            load_xy_csv(path)
                .with_context(|| format!("failed to load CSV '{}'", path.display()))?
        }
        None => {
            println!("No input file given; using built-in sample data.");
            sample_rows()
        }
    };
    println!("Loaded {} rows", rows.len());

    if rows.is_empty() {
        anyhow::bail!("no rows loaded; check headers/delimiter.");
    }

    // 1) Line chart, with a trailing average overlay when there is enough data
    let values = Series::line(rows.clone())?.with_name("values");
    let smoothed = if values.points().len() >= 14 {
        Some(values.moving_average(7)?)
    } else {
        None
    };
    let mut chart_line = AxisChart::new(values);
    if let Some(series) = smoothed {
        chart_line.add_series(series)?;
        chart_line.set_legend(true);
    }
    chart_line.set_title("Values over x");
    chart_line.set_x_label("x");
    chart_line.set_y_label("value");
    save_svg(&chart_line, &out_name("line"))?;

    // 2) Scatter of the raw rows through the one-call helpers
    let chart_scatter = quick::scatter(
        rows.clone(),
        QuickOptions {
            name: Some("samples".into()),
            title: Some("Sample scatter".into()),
            x_label: Some("x".into()),
            y_label: Some("value".into()),
            ..QuickOptions::default()
        },
    )?;
    save_svg(&chart_scatter, &out_name("scatter"))?;

    // 3) Bars sized to the tightest x spacing so neighbours never overlap
    let bars = Series::bar(rows.clone())?;
    let width = bar_width(&bars);
    let mut chart_bar = AxisChart::new(bars.with_bar_width(width).with_name("values"));
    chart_bar.set_title("Values as bars");
    chart_bar.set_x_label("x");
    chart_bar.set_y_label("value");
    save_svg(&chart_bar, &out_name("bar"))?;

    // 4) Pie of the value total split across four equal runs of the rows
    if rows.len() >= 4 && rows.iter().all(|(_, y)| *y > 0.0) {
        let mut totals = [0.0_f64; 4];
        for (i, (_, y)) in rows.iter().enumerate() {
            totals[i * 4 / rows.len()] += y;
        }
        let mut chart_pie = PieChart::new(totals.to_vec())?;
        chart_pie.set_labels(vec![
            "first quarter".into(),
            "second quarter".into(),
            "third quarter".into(),
            "fourth quarter".into(),
        ])?;
        chart_pie.set_title("Value share by quarter of the data");
        chart_pie.set_legend(true);
        save_svg(&chart_pie, &out_name("pie"))?;
    } else {
        println!("Skipping pie: needs at least four rows with positive values.");
    }

    Ok(())
}

/// Render at the chart's default size and write the SVG.
fn save_svg(chart: &dyn Chart, path: &Path) -> Result<()> {
    let scene = chart.create()?;
    chart_render_svg::save(&scene, path)?;
    println!("Wrote {}", path.display());
    Ok(())
}

/// Output file name like target/out/chart_<suffix>.svg
fn out_name(suffix: &str) -> PathBuf {
    let mut out = PathBuf::from("target/out");
    std::fs::create_dir_all(&out).ok();
    out.push(format!("chart_{suffix}.svg"));
    out
}

/// Bars at 80% of the tightest x spacing, so adjacent bars keep a gap.
fn bar_width(series: &Series) -> f64 {
    let xs: Vec<f64> = series.x_values().collect();
    let tightest = xs
        .windows(2)
        .map(|w| w[1] - w[0])
        .filter(|d| *d > 0.0)
        .fold(f64::INFINITY, f64::min);
    if tightest.is_finite() {
        tightest * 0.8
    } else {
        1.0
    }
}

/// Ninety days of drifting daily readings.
fn sample_rows() -> Vec<(Datum, f64)> {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid calendar date");
    (0..90)
        .map(|day| {
            let x = f64::from(day);
            let value = 50.0 + x * 0.4 + (x / 9.0).sin() * 8.0 + (x / 2.3).cos() * 3.0;
            (Datum::from(start + Duration::days(i64::from(day))), value)
        })
        .collect()
}

/// Load x/y rows from a CSV with named columns.
fn load_xy_csv(path: &Path) -> Result<Vec<(Datum, f64)>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    // Inspect headers (log them)
    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.to_lowercase())
        .collect::<Vec<_>>();
    println!("Headers: {:?}", headers);

    let idx = |names: &[&str]| -> Option<usize> {
        for (i, h) in headers.iter().enumerate() {
            for want in names {
                if h == want {
                    return Some(i);
                }
            }
        }
        None
    };

    let i_x = idx(&["x", "time", "timestamp", "date", "datetime", "day"]);
    let i_y = idx(&["y", "value", "close", "count", "amount"]);

    let (i_x, i_y) = match (i_x, i_y) {
        (Some(x), Some(y)) => (x, y),
        _ => {
            println!("Warning: could not find x/y columns; using the first two.");
            (0, 1)
        }
    };

    let mut out = Vec::new();
    let mut skipped = 0_usize;
    for rec in rdr.records() {
        let rec = rec?;
        let x = rec.get(i_x).and_then(parse_datum);
        let y = rec
            .get(i_y)
            .and_then(|s| s.trim().parse::<f64>().ok());
        if let (Some(x), Some(y)) = (x, y) {
            out.push((x, y));
        } else {
            skipped += 1;
        }
    }
    if skipped > 0 {
        println!("Skipped {skipped} rows with unparsable cells");
    }
    Ok(out)
}

/// Numbers first, then `YYYY-MM-DD`, then RFC 3339 with an offset.
fn parse_datum(s: &str) -> Option<Datum> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(v) = s.parse::<f64>() {
        return Some(Datum::from(v));
    }
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(Datum::from(d));
    }
    DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|t| Datum::from(t.with_timezone(&Utc)))
}
