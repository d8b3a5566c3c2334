//! End-to-end pipeline tests: series → description → raster/vector output.

#![allow(clippy::unwrap_used)]

use binviz::output::PngEncoder;
use binviz::prelude::*;

const RATES: [f32; 20] = [
    5.1, 4.9, 8.6, 6.2, 5.1, 7.1, 6.7, 6.1, 5.0, 5.0, 5.2, 7.9, 11.1, 5.9, 5.5, 5.6, 6.5, 7.7,
    5.7, 6.7,
];

fn unemployment_chart() -> ChartDescription {
    Histogram::new()
        .data(&RATES)
        .label("Unemployment rate (%) →")
        .color(Rgba::STEEL_BLUE)
        .dimensions(500, 500)
        .build()
        .unwrap()
}

#[test]
fn raster_output_has_ink() {
    let fb = unemployment_chart().to_framebuffer().unwrap();
    assert_eq!((fb.width(), fb.height()), (500, 500));

    let (min, max, mean) = fb.luminance_stats();
    assert!(max > 250.0, "background should stay white");
    assert!(min < 200.0, "bars and axes should leave ink");
    assert!(mean < 255.0);
}

#[test]
fn png_bytes_carry_magic_header() {
    let fb = unemployment_chart().to_framebuffer().unwrap();
    let bytes = PngEncoder::to_bytes(&fb).unwrap();
    assert_eq!(&bytes[0..8], &[137, 80, 78, 71, 13, 10, 26, 10]);
}

#[test]
fn files_round_trip_through_disk() {
    let dir = tempfile::tempdir().unwrap();
    let png_path = dir.path().join("unemployment.png");
    let svg_path = dir.path().join("unemployment.svg");

    let chart = unemployment_chart();
    chart.write_png(&png_path).unwrap();
    chart.write_svg(&svg_path).unwrap();

    let png = std::fs::read(&png_path).unwrap();
    assert_eq!(&png[0..4], &[137, 80, 78, 71]);

    let svg = std::fs::read_to_string(&svg_path).unwrap();
    assert!(svg.starts_with("<svg"));
    assert!(svg.contains("Unemployment rate"));
}

#[test]
fn svg_has_one_tooltip_per_bar() {
    let chart = unemployment_chart();
    let svg = chart.to_svg();
    assert_eq!(svg.matches("<title>").count(), chart.bar_count());
    assert!(svg.contains("≤ x &lt;") || svg.contains("≤ x <"));
}

#[test]
fn empty_series_pipeline_does_not_panic() {
    let chart = Histogram::new().data(&[]).build().unwrap();
    assert_eq!(chart.bar_count(), 0);

    let fb = chart.to_framebuffer().unwrap();
    let bytes = PngEncoder::to_bytes(&fb).unwrap();
    assert!(!bytes.is_empty());

    let svg = chart.to_svg();
    assert!(svg.contains("</svg>"));
}

#[test]
fn normalized_chart_renders_percent_axis() {
    let chart = Histogram::new()
        .data(&RATES)
        .normalize(true)
        .build()
        .unwrap();
    let svg = chart.to_svg();
    assert!(svg.contains('%'), "normalized y axis should label ticks as percentages");
}

#[test]
fn record_series_end_to_end() {
    #[derive(Clone)]
    struct County {
        rate: f32,
    }
    let series: Vec<County> = RATES.iter().map(|&rate| County { rate }).collect();

    let chart = Histogram::from_series(&series)
        .value(|c: &County| c.rate)
        .build()
        .unwrap();

    assert!((chart.frequency_sum() - 20.0).abs() < 1e-3);
    assert!(chart.to_framebuffer().is_ok());
}
