//! Sheet charts
//!
//! Rendered with plotters into an RGB buffer, then encoded as PNG for
//! embedding in the PDF.

use printpdf::image_crate::{DynamicImage, ImageFormat, RgbImage};

use crate::models::MacroPercentages;
use crate::nutrition::{GoalType, WeightPoint};

// ============================================================================
// Colors (RGB 0-255)
// ============================================================================

pub const COLOR_LOSS: (u8, u8, u8) = (242, 66, 54);
pub const COLOR_MAINTENANCE: (u8, u8, u8) = (255, 152, 0);
pub const COLOR_GAIN: (u8, u8, u8) = (76, 175, 80);
pub const COLOR_PROTEIN: (u8, u8, u8) = (46, 134, 171);
pub const COLOR_FAT: (u8, u8, u8) = (241, 143, 1);
pub const COLOR_CARBS: (u8, u8, u8) = (106, 153, 78);

/// Accent color for a goal
pub fn goal_color(goal: GoalType) -> (u8, u8, u8) {
    match goal {
        GoalType::Loss => COLOR_LOSS,
        GoalType::Maintenance => COLOR_MAINTENANCE,
        GoalType::Gain => COLOR_GAIN,
    }
}

fn encode_png(buffer: Vec<u8>, width: u32, height: u32) -> Result<Vec<u8>, String> {
    let img = RgbImage::from_raw(width, height, buffer)
        .ok_or("Failed to create image from buffer")?;

    let mut png_bytes = Vec::new();
    DynamicImage::ImageRgb8(img)
        .write_to(&mut std::io::Cursor::new(&mut png_bytes), ImageFormat::Png)
        .map_err(|e| e.to_string())?;

    Ok(png_bytes)
}

/// Weight projection line chart as PNG bytes
pub fn generate_projection_chart(
    points: &[WeightPoint],
    goal: GoalType,
    width: u32,
    height: u32,
) -> Result<Vec<u8>, String> {
    use plotters::prelude::*;

    if points.is_empty() {
        return Err("No data to chart".to_string());
    }

    let mut buffer = vec![0u8; (width * height * 3) as usize];

    {
        let root = BitMapBackend::with_buffer(&mut buffer, (width, height))
            .into_drawing_area();
        root.fill(&WHITE).map_err(|e| e.to_string())?;

        let w_min = points.iter().map(|p| p.weight_kg).fold(f64::INFINITY, f64::min);
        let w_max = points.iter().map(|p| p.weight_kg).fold(f64::NEG_INFINITY, f64::max);
        let y_min = w_min - 1.0;
        let y_max = w_max + 1.0;
        let last_week = points.last().map(|p| p.week).unwrap_or(0).max(1);

        let (r, g, b) = goal_color(goal);
        let color = RGBColor(r, g, b);

        let mut chart = ChartBuilder::on(&root)
            .margin(20)
            .x_label_area_size(40)
            .y_label_area_size(50)
            .build_cartesian_2d(0u32..last_week, y_min..y_max)
            .map_err(|e| e.to_string())?;

        chart.configure_mesh()
            .x_labels(last_week as usize + 1)
            .x_desc("Weeks")
            .y_desc("Weight (kg)")
            .draw()
            .map_err(|e| e.to_string())?;

        // Shaded area under the projection
        let mut area: Vec<(u32, f64)> = points.iter().map(|p| (p.week, p.weight_kg)).collect();
        if let (Some(first), Some(last)) = (points.first(), points.last()) {
            area.push((last.week, y_min));
            area.push((first.week, y_min));
        }
        chart.draw_series(std::iter::once(Polygon::new(area, color.mix(0.15))))
            .map_err(|e| e.to_string())?;

        chart.draw_series(LineSeries::new(
            points.iter().map(|p| (p.week, p.weight_kg)),
            color.stroke_width(3),
        ))
        .map_err(|e| e.to_string())?
        .label("Projected weight")
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2)));

        chart.draw_series(points.iter().map(|p| {
            Circle::new((p.week, p.weight_kg), 4, color.filled())
        })).map_err(|e| e.to_string())?;

        chart.configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(WHITE)
            .border_style(BLACK)
            .draw()
            .map_err(|e| e.to_string())?;

        root.present().map_err(|e| e.to_string())?;
    }

    encode_png(buffer, width, height)
}

/// Horizontal bar chart of the macro split as PNG bytes
pub fn generate_macro_chart(
    percentages: &MacroPercentages,
    width: u32,
    height: u32,
) -> Result<Vec<u8>, String> {
    use plotters::prelude::*;

    if percentages.total() <= 0.0 {
        return Err("No macronutrient calories to chart".to_string());
    }

    let bars = [
        ("Carbs", percentages.carbs, COLOR_CARBS),
        ("Fat", percentages.fat, COLOR_FAT),
        ("Protein", percentages.protein, COLOR_PROTEIN),
    ];

    let mut buffer = vec![0u8; (width * height * 3) as usize];

    {
        let root = BitMapBackend::with_buffer(&mut buffer, (width, height))
            .into_drawing_area();
        root.fill(&WHITE).map_err(|e| e.to_string())?;

        let mut chart = ChartBuilder::on(&root)
            .margin(20)
            .x_label_area_size(40)
            .y_label_area_size(20)
            .build_cartesian_2d(0f64..100f64, 0f64..bars.len() as f64)
            .map_err(|e| e.to_string())?;

        chart.configure_mesh()
            .disable_y_mesh()
            .y_label_formatter(&|_| String::new())
            .x_desc("% of calories")
            .draw()
            .map_err(|e| e.to_string())?;

        chart.draw_series(bars.iter().enumerate().map(|(i, (_, value, (r, g, b)))| {
            let y = i as f64;
            Rectangle::new([(0.0, y + 0.2), (*value, y + 0.8)], RGBColor(*r, *g, *b).filled())
        })).map_err(|e| e.to_string())?;

        chart.draw_series(bars.iter().enumerate().map(|(i, (name, value, _))| {
            // Keep the label inside the plot when the bar is long
            let x = if *value > 75.0 { 2.0 } else { value + 1.0 };
            Text::new(
                format!("{} {:.1}%", name, value),
                (x, i as f64 + 0.5),
                ("sans-serif", 18).into_font(),
            )
        })).map_err(|e| e.to_string())?;

        root.present().map_err(|e| e.to_string())?;
    }

    encode_png(buffer, width, height)
}
