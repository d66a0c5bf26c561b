use std::f64::consts::{FRAC_PI_2, TAU};

use log::warn;
use plotters::prelude::*;
use plotters_canvas::CanvasBackend;
use web_sys::HtmlCanvasElement;
use yew::prelude::*;

use crate::content::ALLOCATIONS;

const CHART_SIZE: u32 = 400;

/// Start and end of each slice as fractions of a full turn.
pub fn slice_bounds(percents: &[u32]) -> Vec<(f64, f64)> {
    let total: u32 = percents.iter().sum();
    if total == 0 {
        return Vec::new();
    }
    let mut start = 0.0;
    percents
        .iter()
        .map(|percent| {
            let end = start + f64::from(*percent) / f64::from(total);
            let bounds = (start, end);
            start = end;
            bounds
        })
        .collect()
}

/// Pie slice as a polygon in pixel space, clockwise from twelve o'clock.
pub fn slice_polygon(center: (i32, i32), radius: f64, start: f64, end: f64) -> Vec<(i32, i32)> {
    let steps = (((end - start) * 120.0).ceil() as usize).max(2);
    let mut points = Vec::with_capacity(steps + 2);
    points.push(center);
    for i in 0..=steps {
        let turn = start + (end - start) * i as f64 / steps as f64;
        let angle = turn * TAU - FRAC_PI_2;
        points.push((
            center.0 + (radius * angle.cos()).round() as i32,
            center.1 + (radius * angle.sin()).round() as i32,
        ));
    }
    points
}

fn draw_chart(canvas: HtmlCanvasElement, dark: bool) -> Result<(), String> {
    let backend = CanvasBackend::with_canvas_object(canvas).ok_or("canvas has no 2d context")?;
    let root = backend.into_drawing_area();
    let background = if dark { RGBColor(17, 24, 39) } else { WHITE };
    root.fill(&background).map_err(|e| format!("{:?}", e))?;

    let (width, height) = root.dim_in_pixel();
    let center = ((width / 2) as i32, (height / 2) as i32);
    let radius = f64::from(width.min(height)) / 2.0 - 8.0;

    let percents: Vec<u32> = ALLOCATIONS.iter().map(|a| a.percent).collect();
    for (allocation, (start, end)) in ALLOCATIONS.iter().zip(slice_bounds(&percents)) {
        let (r, g, b) = allocation.rgb;
        root.draw(&Polygon::new(
            slice_polygon(center, radius, start, end),
            RGBColor(r, g, b).filled(),
        ))
        .map_err(|e| format!("{:?}", e))?;
    }

    // Punch out the middle so it reads as a ring
    root.draw(&Circle::new(center, (radius * 0.55) as i32, background.filled()))
        .map_err(|e| format!("{:?}", e))?;
    root.present().map_err(|e| format!("{:?}", e))?;
    Ok(())
}

#[derive(Properties, PartialEq)]
pub struct TokenChartProps {
    pub dark: bool,
}

#[function_component(TokenChart)]
pub fn token_chart(props: &TokenChartProps) -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with_deps(move |dark| {
            if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                canvas.set_width(CHART_SIZE);
                canvas.set_height(CHART_SIZE);
                if let Err(e) = draw_chart(canvas, *dark) {
                    warn!("Failed to draw token distribution chart: {}", e);
                }
            }
            || ()
        }, props.dark);
    }

    html! {
        <div class="token-chart">
            <canvas
                ref={canvas_ref}
                width={CHART_SIZE.to_string()}
                height={CHART_SIZE.to_string()}
                aria-label="Token Distribution Chart"
            />
        </div>
    }
}
