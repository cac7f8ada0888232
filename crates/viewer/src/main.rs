// File: crates/viewer/src/main.rs
// Summary: Desktop gallery that pages through sample charts rendered live in egui.

use chart_core::{AxisChart, ChartError, LineStyle, PieChart, Series, SeriesKind};
use chart_render_egui::ChartView;
use chrono::{Duration, NaiveDate};
use eframe::egui;

fn main() -> Result<(), eframe::Error> {
    env_logger::init();

    let app = match GalleryApp::new() {
        Ok(app) => app,
        Err(err) => {
            eprintln!("failed to build sample charts: {err}");
            std::process::exit(1);
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 600.0])
            .with_min_inner_size([600.0, 400.0])
            .with_title("Meridian chart gallery"),
        ..Default::default()
    };

    eframe::run_native(
        "Meridian charts",
        options,
        Box::new(move |_cc| Ok(Box::new(app))),
    )
}

/// One page of the gallery.
enum Sample {
    Axis(AxisChart),
    Pie(PieChart),
}

struct GalleryApp {
    pages: Vec<(&'static str, Sample)>,
    index: usize,
}

impl GalleryApp {
    fn new() -> Result<Self, ChartError> {
        Ok(Self {
            pages: build_pages()?,
            index: 0,
        })
    }

    fn step(&mut self, delta: isize) {
        let len = self.pages.len() as isize;
        self.index = (self.index as isize + delta).rem_euclid(len) as usize;
    }
}

impl eframe::App for GalleryApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if ctx.input(|i| i.key_pressed(egui::Key::ArrowRight)) {
            self.step(1);
        }
        if ctx.input(|i| i.key_pressed(egui::Key::ArrowLeft)) {
            self.step(-1);
        }

        egui::TopBottomPanel::top("gallery-controls").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button("Previous").clicked() {
                    self.step(-1);
                }
                if ui.button("Next").clicked() {
                    self.step(1);
                }
                let (name, _) = &self.pages[self.index];
                ui.strong(format!("{name} ({}/{})", self.index + 1, self.pages.len()));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.weak("arrow keys switch pages; hover an axis chart to read values");
                });
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            match &self.pages[self.index].1 {
                Sample::Axis(chart) => ui.add(ChartView::with_hover(chart)),
                Sample::Pie(chart) => ui.add(ChartView::new(chart)),
            };
        });
    }
}

// ---- sample pages ----

fn build_pages() -> Result<Vec<(&'static str, Sample)>, ChartError> {
    Ok(vec![
        ("Waves", Sample::Axis(waves()?)),
        ("Noisy trend", Sample::Axis(noisy_trend()?)),
        ("Rainfall", Sample::Axis(rainfall()?)),
        ("Weekly visitors", Sample::Axis(visitors()?)),
        ("Browser share", Sample::Pie(browser_share()?)),
    ])
}

fn waves() -> Result<AxisChart, ChartError> {
    let xs: Vec<f64> = (0..=120).map(|i| f64::from(i) / 10.0).collect();
    let sine: Vec<f64> = xs.iter().map(|x| x.sin()).collect();
    let cosine: Vec<f64> = xs.iter().map(|x| (x / 2.0).cos() * 0.8).collect();

    let mut chart = AxisChart::new(
        Series::from_columns(SeriesKind::Line, xs.clone(), sine)?.with_name("sin x"),
    );
    chart.add_series(
        Series::from_columns(SeriesKind::Line, xs, cosine)?
            .with_name("0.8 cos x/2")
            .with_line_style(LineStyle::Dashed),
    )?;
    chart.set_title("Waves");
    chart.set_x_label("x");
    chart.set_y_label("amplitude");
    chart.set_legend(true);
    Ok(chart)
}

fn noisy_trend() -> Result<AxisChart, ChartError> {
    // Deterministic jitter; a fixed gallery page has no use for an RNG.
    let points: Vec<(f64, f64)> = (0..60)
        .map(|i| {
            let x = f64::from(i);
            let jitter = (x * 12.9898).sin() * 4.0;
            (x, x * 0.6 + 10.0 + jitter)
        })
        .collect();

    let readings = Series::scatter(points)?
        .with_name("readings")
        .with_marker_size(4.0);
    let smoothed = readings.moving_average(7)?.with_line_width(3.0);

    let mut chart = AxisChart::new(readings);
    chart.add_series(smoothed)?;
    chart.set_title("Noisy trend");
    chart.set_x_label("sample");
    chart.set_y_label("reading");
    chart.set_legend(true);
    Ok(chart)
}

fn rainfall() -> Result<AxisChart, ChartError> {
    let months: Vec<f64> = (1..=12).map(f64::from).collect();
    let totals = vec![
        78.0, 61.0, 55.0, 48.0, 36.0, 22.0, 14.0, 19.0, 31.0, 52.0, 70.0, 84.0,
    ];

    let mut chart = AxisChart::new(
        Series::from_columns(SeriesKind::Bar, months, totals)?
            .with_name("monthly total")
            .with_bar_width(0.8),
    );
    chart.set_title("Rainfall");
    chart.set_x_label("month");
    chart.set_y_label("mm");
    Ok(chart)
}

fn visitors() -> Result<AxisChart, ChartError> {
    let start = NaiveDate::from_ymd_opt(2024, 3, 4).expect("valid calendar date");
    let counts = [412.0, 388.0, 431.0, 457.0, 442.0, 501.0, 478.0, 523.0, 547.0, 560.0];
    let points = counts
        .iter()
        .enumerate()
        .map(|(week, count)| (start + Duration::weeks(week as i64), *count));

    let mut chart = AxisChart::new(Series::line(points)?.with_name("visitors"));
    chart.set_title("Weekly visitors");
    chart.set_x_label("week starting");
    chart.set_y_label("visitors");
    Ok(chart)
}

fn browser_share() -> Result<PieChart, ChartError> {
    let mut chart = PieChart::new(vec![64.0, 19.0, 9.0, 5.0, 3.0])?;
    chart.set_labels(vec![
        "Chrome".into(),
        "Safari".into(),
        "Edge".into(),
        "Firefox".into(),
        "Other".into(),
    ])?;
    chart.set_title("Browser share");
    chart.set_legend(true);
    Ok(chart)
}
