use crate::axis::{range_end, tick_points, upper_bound, AxisConfig, DisplayMode};
use crate::error::Result;
use crate::{max_extent, Variant, CHART_SIZE, LINE_WIDTH, TICK_LENGTH, TICK_WIDTH};
use plotters::prelude::*;
use tracing::{debug, warn};

pub const HTML_TITLE: &str = "benchmark comparison";

/// Draws one line per variant, input size against time, into an svg document.
/// The axes start at zero and carry a tick at every multiple of the configured spacing.
pub fn render_svg(variants: &[Variant], mode: DisplayMode) -> Result<String> {
    if variants.is_empty() {
        warn!("no variant besides the baseline, the chart will be empty");
    }
    let axis = AxisConfig::from_mode(mode);
    let (xmax, ymax) = max_extent(variants);
    let xmax = xmax as f64;
    let xupper = upper_bound(xmax, axis.x_tick);
    let yupper = upper_bound(ymax, axis.y_tick);
    let xticks = tick_points(xmax, axis.x_tick);
    let yticks = tick_points(ymax, axis.y_tick);
    debug!(
        "x axis 0..{} with {} ticks, y axis 0..{} with {} ticks",
        xupper,
        xticks.len(),
        yupper,
        yticks.len()
    );

    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, CHART_SIZE).into_drawing_area();
        root.fill(&WHITE)?;
        let mut chart = ChartBuilder::on(&root)
            .margin(20)
            .x_label_area_size(60)
            .y_label_area_size(100)
            .build_cartesian_2d(
                (0f64..range_end(xupper, axis.x_tick)).step(axis.x_tick),
                (0f64..range_end(yupper, axis.y_tick)).step(axis.y_tick),
            )?;
        chart
            .configure_mesh()
            .light_line_style(&TRANSPARENT)
            .bold_line_style(RGBColor(220, 220, 220).stroke_width(1))
            .axis_style(BLACK.stroke_width(TICK_WIDTH))
            .set_all_tick_mark_size(TICK_LENGTH)
            .x_labels(xticks.len())
            .y_labels(yticks.len())
            .label_style(("sans-serif", 24))
            .x_desc(axis.x_title)
            .y_desc(axis.y_title)
            .x_label_formatter(&|x: &f64| format!("{}", x))
            .y_label_formatter(&|y: &f64| format!("{}", y))
            .draw()?;

        for (idx, variant) in variants.iter().enumerate() {
            let color = Palette99::pick(idx).to_rgba();
            let line = LineSeries::new(
                variant
                    .measurements
                    .iter()
                    .map(|m| (m.input_size as f64, m.time)),
                color.stroke_width(LINE_WIDTH),
            );
            chart
                .draw_series(line)?
                .label(variant.name.as_str())
                .legend(move |(x, y)| {
                    PathElement::new(vec![(x, y), (x + 30, y)], color.stroke_width(LINE_WIDTH))
                });
        }
        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperLeft)
            .background_style(&WHITE.mix(0.8))
            .border_style(&BLACK)
            .label_font(("sans-serif", 24))
            .draw()?;
        root.present()?;
    }
    Ok(svg)
}

/// Wraps the svg chart in a standalone html page.
pub fn to_html(svg: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html>\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <title>{title}</title>\n\
         <style>body {{ margin: 0; background: #fff; }} svg {{ max-width: 100%; height: auto; }}</style>\n\
         </head>\n\
         <body>\n\
         {svg}\n\
         </body>\n\
         </html>\n",
        title = HTML_TITLE,
        svg = svg
    )
}
