use std::error::Error;
use std::time::Duration;

use minifb::{Key, Window, WindowOptions};
use plotters::prelude::*;
use tracing::info;

const WIDTH: usize = 800;
const HEIGHT: usize = 600;

// Axis bounds for the y range: 5% headroom around the data, a fixed band for
// a constant series, 0..1 when there is nothing finite to scale to.
fn y_bounds(samples: &[f64]) -> (f64, f64) {
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for &v in samples {
        lo = lo.min(v);
        hi = hi.max(v);
    }
    if !lo.is_finite() || !hi.is_finite() {
        return (0.0, 1.0);
    }
    if lo == hi {
        return (lo - 0.5, hi + 0.5);
    }
    let pad = (hi - lo) * 0.05;
    (lo - pad, hi + pad)
}

/// Draw the metric series as a line chart into an RGB888 buffer of `dims`
/// pixels. An empty series renders bare axes.
pub fn render(samples: &[f64], buf: &mut [u8], dims: (u32, u32)) -> Result<(), Box<dyn Error>> {
    let root = BitMapBackend::with_buffer(buf, dims).into_drawing_area();
    root.fill(&WHITE)?;

    let (y_lo, y_hi) = y_bounds(samples);
    let mut chart = ChartBuilder::on(&root)
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(0..samples.len().max(1), y_lo..y_hi)?;

    chart
        .configure_mesh()
        .x_desc("time")
        .y_desc("metric value")
        .draw()?;

    chart.draw_series(LineSeries::new(
        samples.iter().enumerate().map(|(i, &v)| (i, v)),
        &BLUE,
    ))?;

    root.present()?;
    Ok(())
}

/// Plot the metric series in an interactive window. Blocks until the user
/// closes the window or presses Escape.
pub fn show(samples: &[f64]) -> Result<(), Box<dyn Error>> {
    let mut rgb = vec![0u8; WIDTH * HEIGHT * 3];
    render(samples, &mut rgb, (WIDTH as u32, HEIGHT as u32))?;

    // minifb wants 0RGB u32 pixels, one per point.
    let pixels: Vec<u32> = rgb
        .chunks_exact(3)
        .map(|p| (u32::from(p[0]) << 16) | (u32::from(p[1]) << 8) | u32::from(p[2]))
        .collect();

    let mut window = Window::new("outplot", WIDTH, HEIGHT, WindowOptions::default())?;
    window.limit_update_rate(Some(Duration::from_micros(33_300)));

    info!("plot window open, waiting for it to close");
    while window.is_open() && !window.is_key_down(Key::Escape) {
        window.update_with_buffer(&pixels, WIDTH, HEIGHT)?;
    }
    Ok(())
}
