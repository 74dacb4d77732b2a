//! PDF rendering of a nutrition sheet
//!
//! Two A4 portrait pages: profile, energy and macro tables on the first;
//! weight projection, macro split chart, advice and contact footer on the
//! second.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use chrono::NaiveDate;
use printpdf::*;

use super::chart::{
    generate_macro_chart, generate_projection_chart, goal_color, COLOR_CARBS, COLOR_FAT,
    COLOR_PROTEIN,
};
use super::config::ReportConfig;
use super::ReportError;
use crate::models::{Evaluation, NutritionResults};
use crate::nutrition::{compute_macros, project_weight, PROJECTION_WEEKS};

// ============================================================================
// Layout and colors
// ============================================================================

const PAGE_WIDTH: f32 = 210.0;
const PAGE_HEIGHT: f32 = 297.0;
const MARGIN_LEFT: f32 = 15.0;
const MARGIN_RIGHT: f32 = PAGE_WIDTH - 15.0;

const COLOR_PRIMARY: (u8, u8, u8) = (46, 134, 171);
const COLOR_BLACK: (u8, u8, u8) = (0, 0, 0);
const COLOR_GRAY: (u8, u8, u8) = (128, 128, 128);
const COLOR_LIGHT_GRAY: (u8, u8, u8) = (220, 220, 220);
const COLOR_ERROR: (u8, u8, u8) = (255, 0, 0);

const CHART_DPI: f32 = 150.0;

fn rgb_to_printpdf(color: (u8, u8, u8)) -> Color {
    Color::Rgb(Rgb::new(
        color.0 as f32 / 255.0,
        color.1 as f32 / 255.0,
        color.2 as f32 / 255.0,
        None,
    ))
}

fn add_text(
    layer: &PdfLayerReference,
    font: &IndirectFontRef,
    text: &str,
    x: f32,
    y: f32,
    size: f32,
    color: (u8, u8, u8),
) {
    layer.set_fill_color(rgb_to_printpdf(color));
    layer.use_text(text, size, Mm(x), Mm(y), font);
}

fn add_rule(layer: &PdfLayerReference, y: f32, color: (u8, u8, u8), width: f32) {
    layer.set_outline_color(rgb_to_printpdf(color));
    layer.set_outline_thickness(width);

    let line = Line {
        points: vec![
            (Point::new(Mm(MARGIN_LEFT), Mm(y)), false),
            (Point::new(Mm(MARGIN_RIGHT), Mm(y)), false),
        ],
        is_closed: false,
    };
    layer.add_line(line);
}

/// Chart height on the page for a pixel height at [`CHART_DPI`]
fn chart_height_mm(height_px: u32) -> f32 {
    height_px as f32 / CHART_DPI * 25.4
}

/// Embed PNG bytes with the top edge at `y`; returns the height used
fn embed_chart(
    layer: &PdfLayerReference,
    font: &IndirectFontRef,
    chart: Result<Vec<u8>, String>,
    height_px: u32,
    y: f32,
) -> f32 {
    let embedded = chart.and_then(|png_bytes| {
        printpdf::image_crate::load_from_memory(&png_bytes).map_err(|e| e.to_string())
    });

    match embedded {
        Ok(dynamic_image) => {
            let height = chart_height_mm(height_px);
            let transform = ImageTransform {
                translate_x: Some(Mm(MARGIN_LEFT)),
                translate_y: Some(Mm(y - height)),
                dpi: Some(CHART_DPI),
                ..Default::default()
            };
            Image::from_dynamic_image(&dynamic_image).add_to_layer(layer.clone(), transform);
            height + 5.0
        }
        Err(e) => {
            tracing::warn!(error = %e, "Chart generation failed");
            add_text(layer, font, &format!("Chart generation error: {}", e), MARGIN_LEFT, y - 5.0, 9.0, COLOR_ERROR);
            10.0
        }
    }
}

struct Fonts {
    regular: IndirectFontRef,
    bold: IndirectFontRef,
}

// ============================================================================
// Page 1
// ============================================================================

fn section_title(layer: &PdfLayerReference, fonts: &Fonts, title: &str, y: f32) -> f32 {
    add_text(layer, &fonts.bold, title, MARGIN_LEFT, y, 12.0, COLOR_PRIMARY);
    y - 7.0
}

fn render_header(layer: &PdfLayerReference, fonts: &Fonts, config: &ReportConfig, date: NaiveDate) -> f32 {
    let mut y = PAGE_HEIGHT - 20.0;

    add_text(layer, &fonts.bold, "NUTRITION SHEET", MARGIN_LEFT, y, 20.0, COLOR_PRIMARY);
    add_text(layer, &fonts.bold, &config.coach.name, 125.0, y, 11.0, COLOR_BLACK);
    y -= 6.0;

    add_text(layer, &fonts.regular, &format!("Prepared on {}", date.format("%d/%m/%Y")), MARGIN_LEFT, y, 10.0, COLOR_GRAY);
    add_text(layer, &fonts.regular, &config.coach.title, 125.0, y, 9.0, COLOR_GRAY);
    y -= 8.0;

    add_rule(layer, y, COLOR_PRIMARY, 1.0);
    y - 10.0
}

fn render_profile(layer: &PdfLayerReference, fonts: &Fonts, evaluation: &Evaluation, mut y: f32) -> f32 {
    let profile = &evaluation.profile;
    let params = &evaluation.parameters;
    let echo = evaluation.echo();

    y = section_title(layer, fonts, "CLIENT PROFILE", y);

    let left = [
        ("Name", profile.full_name()),
        ("Age", format!("{} years", profile.age())),
        ("Height", format!("{} cm", profile.height_cm())),
        ("Weight", format!("{:.1} kg", profile.weight_kg())),
        ("Sex", profile.sex().display_name().to_string()),
    ];
    let mut right = vec![
        ("Formula", params.formula().display_name().to_string()),
        ("Activity", format!("x{}", params.activity_factor())),
        ("", echo.activity_label.to_string()),
        ("Protein", format!("{} g/kg", params.protein_g_per_kg())),
        ("Fat", format!("{} g/kg", params.fat_g_per_kg())),
    ];
    if let Some(body_fat) = profile.body_fat_pct() {
        right.push(("Body fat", format!("{:.1} %", body_fat)));
    }

    let rows = left.len().max(right.len());
    for i in 0..rows {
        if let Some((label, value)) = left.get(i) {
            add_text(layer, &fonts.bold, label, MARGIN_LEFT, y, 10.0, COLOR_BLACK);
            add_text(layer, &fonts.regular, value, MARGIN_LEFT + 25.0, y, 10.0, COLOR_BLACK);
        }
        if let Some((label, value)) = right.get(i) {
            add_text(layer, &fonts.bold, label, 105.0, y, 10.0, COLOR_BLACK);
            add_text(layer, &fonts.regular, value, 130.0, y, 10.0, COLOR_BLACK);
        }
        y -= 5.5;
    }

    y -= 2.0;
    add_text(layer, &fonts.bold, "Goal", MARGIN_LEFT, y, 10.0, COLOR_BLACK);
    add_text(layer, &fonts.bold, evaluation.goal.display_name(), MARGIN_LEFT + 25.0, y, 10.0, goal_color(evaluation.goal));
    y - 10.0
}

fn render_energy(layer: &PdfLayerReference, fonts: &Fonts, evaluation: &Evaluation, mut y: f32) -> f32 {
    let results = &evaluation.results;
    let adjustment = evaluation.parameters.caloric_adjustment();

    y = section_title(layer, fonts, "ENERGY NEEDS", y);

    let columns = [
        ("Basal metabolism", results.bmr(), "Energy at rest".to_string(), COLOR_BLACK),
        ("Maintenance", results.maintenance_calories(), "With daily activity".to_string(), COLOR_BLACK),
        ("Target", results.target_calories(), format!("{:+} kcal adjustment", adjustment), goal_color(evaluation.goal)),
    ];

    for (i, (label, kcal, note, color)) in columns.iter().enumerate() {
        let x = MARGIN_LEFT + i as f32 * 62.0;
        add_text(layer, &fonts.bold, label, x, y, 10.0, COLOR_GRAY);
        add_text(layer, &fonts.bold, &format!("{:.0} kcal/day", kcal), x, y - 7.0, 14.0, *color);
        add_text(layer, &fonts.regular, note, x, y - 12.5, 8.0, COLOR_GRAY);
    }

    y - 22.0
}

/// One row of a macro table
#[derive(Debug, Clone, Copy, PartialEq)]
struct MacroRow {
    name: &'static str,
    grams: f64,
    kcal: f64,
    percent: f64,
    color: (u8, u8, u8),
}

/// Figures printed in a macro table, read from a results snapshot
#[derive(Debug, Clone, PartialEq)]
struct MacroTable {
    calories: f64,
    rows: [MacroRow; 3],
    total_kcal: f64,
}

impl MacroTable {
    fn from_results(results: &NutritionResults) -> Self {
        let pct = results.macro_percentages();
        Self {
            calories: results.target_calories(),
            rows: [
                MacroRow {
                    name: "Protein",
                    grams: results.protein_g(),
                    kcal: results.protein_kcal(),
                    percent: pct.protein,
                    color: COLOR_PROTEIN,
                },
                MacroRow {
                    name: "Fat",
                    grams: results.fat_g(),
                    kcal: results.fat_kcal(),
                    percent: pct.fat,
                    color: COLOR_FAT,
                },
                MacroRow {
                    name: "Carbohydrates",
                    grams: results.carbs_g(),
                    kcal: results.carbs_kcal(),
                    percent: pct.carbs,
                    color: COLOR_CARBS,
                },
            ],
            total_kcal: results.total_macro_kcal(),
        }
    }
}

/// Snapshot with maintenance calories as the target
///
/// Same per-kg ratios, assembled and rounded like the engine's own results.
fn maintenance_results(evaluation: &Evaluation) -> NutritionResults {
    let results = &evaluation.results;
    let macros = compute_macros(
        &evaluation.profile,
        &evaluation.parameters,
        results.maintenance_calories(),
    );
    NutritionResults::assemble(
        results.bmr(),
        results.tdee(),
        results.maintenance_calories(),
        &macros,
        results.hydration_ml(),
    )
}

fn render_macro_table(
    layer: &PdfLayerReference,
    fonts: &Fonts,
    title: &str,
    table: &MacroTable,
    mut y: f32,
) -> f32 {
    add_text(layer, &fonts.bold, &format!("{} ({:.0} kcal)", title, table.calories), MARGIN_LEFT, y, 10.0, COLOR_BLACK);
    y -= 6.0;

    let col_x = [MARGIN_LEFT, 60.0, 95.0, 130.0];
    let headers = ["Macronutrient", "Grams", "kcal", "% of calories"];
    for (x, header) in col_x.iter().zip(headers.iter()) {
        add_text(layer, &fonts.bold, header, *x, y, 9.0, COLOR_GRAY);
    }
    y -= 2.0;
    add_rule(layer, y, COLOR_LIGHT_GRAY, 0.5);
    y -= 5.0;

    for row in &table.rows {
        add_text(layer, &fonts.bold, row.name, col_x[0], y, 10.0, row.color);
        add_text(layer, &fonts.regular, &format!("{:.1} g", row.grams), col_x[1], y, 10.0, COLOR_BLACK);
        add_text(layer, &fonts.regular, &format!("{:.0}", row.kcal), col_x[2], y, 10.0, COLOR_BLACK);
        add_text(layer, &fonts.regular, &format!("{:.1} %", row.percent), col_x[3], y, 10.0, COLOR_BLACK);
        y -= 5.5;
    }

    add_rule(layer, y + 3.5, COLOR_LIGHT_GRAY, 0.5);
    y -= 1.0;
    add_text(layer, &fonts.bold, "Total", col_x[0], y, 10.0, COLOR_BLACK);
    add_text(layer, &fonts.bold, &format!("{:.0}", table.total_kcal), col_x[2], y, 10.0, COLOR_BLACK);
    y - 10.0
}

fn render_macros(layer: &PdfLayerReference, fonts: &Fonts, evaluation: &Evaluation, mut y: f32) -> f32 {
    y = section_title(layer, fonts, "MACRONUTRIENTS", y);

    let target = MacroTable::from_results(&evaluation.results);
    y = render_macro_table(layer, fonts, "Daily target", &target, y);

    let maintenance = MacroTable::from_results(&maintenance_results(evaluation));
    render_macro_table(layer, fonts, "At maintenance", &maintenance, y)
}

fn render_hydration(layer: &PdfLayerReference, fonts: &Fonts, evaluation: &Evaluation, mut y: f32) -> f32 {
    y = section_title(layer, fonts, "HYDRATION", y);
    add_text(
        layer,
        &fonts.bold,
        &format!("{:.0} ml of water per day", evaluation.results.hydration_ml()),
        MARGIN_LEFT,
        y,
        12.0,
        COLOR_PRIMARY,
    );
    add_text(
        layer,
        &fonts.regular,
        &format!("About {:.1} liters, more on training days", evaluation.results.hydration_ml() / 1000.0),
        MARGIN_LEFT,
        y - 5.5,
        9.0,
        COLOR_GRAY,
    );
    y - 14.0
}

// ============================================================================
// Page 2
// ============================================================================

fn render_projection(layer: &PdfLayerReference, fonts: &Fonts, evaluation: &Evaluation, mut y: f32) -> f32 {
    let adjustment = evaluation.parameters.caloric_adjustment();
    let points = project_weight(&evaluation.profile, adjustment, PROJECTION_WEEKS);

    y = section_title(layer, fonts, "ESTIMATED WEIGHT CHANGE", y);

    let height_px = 400;
    y -= embed_chart(
        layer,
        &fonts.regular,
        generate_projection_chart(&points, evaluation.goal, 1000, height_px),
        height_px,
        y,
    );

    if let (Some(start), Some(end)) = (points.first(), points.last()) {
        let change = end.weight_kg - start.weight_kg;
        add_text(
            layer,
            &fonts.regular,
            &format!(
                "Current weight: {:.1} kg   Projected after {} weeks: {:.1} kg ({:+.1} kg)",
                start.weight_kg, end.week, end.weight_kg, change
            ),
            MARGIN_LEFT,
            y,
            10.0,
            COLOR_BLACK,
        );
        y -= 5.0;
    }
    add_text(
        layer,
        &fonts.regular,
        "Linear estimate based on 7700 kcal per kg of body mass. Actual progress varies.",
        MARGIN_LEFT,
        y,
        8.0,
        COLOR_GRAY,
    );
    y - 10.0
}

fn render_macro_split(layer: &PdfLayerReference, fonts: &Fonts, evaluation: &Evaluation, mut y: f32) -> f32 {
    y = section_title(layer, fonts, "MACRO SPLIT", y);

    let height_px = 300;
    let shift = embed_chart(
        layer,
        &fonts.regular,
        generate_macro_chart(&evaluation.macro_percentages(), 1000, height_px),
        height_px,
        y,
    );
    y - shift - 5.0
}

fn render_advice(layer: &PdfLayerReference, fonts: &Fonts, evaluation: &Evaluation, mut y: f32) -> f32 {
    y = section_title(layer, fonts, "PERSONALIZED ADVICE", y);

    for tip in &evaluation.advice {
        add_text(layer, &fonts.regular, &format!("- {}", tip), MARGIN_LEFT + 2.0, y, 10.0, COLOR_BLACK);
        y -= 6.0;
    }
    y
}

fn render_footer(layer: &PdfLayerReference, fonts: &Fonts, config: &ReportConfig, date: NaiveDate) {
    let mut y = 25.0;
    add_rule(layer, y + 5.0, COLOR_LIGHT_GRAY, 0.5);

    add_text(layer, &fonts.bold, &config.coach.name, MARGIN_LEFT, y, 10.0, COLOR_PRIMARY);
    add_text(
        layer,
        &fonts.regular,
        &format!("Sheet prepared on {}", date.format("%d/%m/%Y")),
        135.0,
        y,
        9.0,
        COLOR_GRAY,
    );
    y -= 5.0;

    let contacts = config.coach.contacts();
    if !contacts.is_empty() {
        add_text(layer, &fonts.regular, &contacts.join("   "), MARGIN_LEFT, y, 9.0, COLOR_GRAY);
        y -= 5.0;
    }

    add_text(
        layer,
        &fonts.regular,
        "These recommendations are general guidance and do not replace medical advice.",
        MARGIN_LEFT,
        y,
        7.0,
        COLOR_GRAY,
    );
}

// ============================================================================
// Document
// ============================================================================

/// Render the sheet and write it to `output_path`
pub fn render_sheet(
    evaluation: &Evaluation,
    config: &ReportConfig,
    date: NaiveDate,
    output_path: &Path,
) -> Result<(), ReportError> {
    let title = format!("Nutrition Sheet - {}", evaluation.profile.full_name());
    let (doc, page1, layer1) = PdfDocument::new(&title, Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");

    let fonts = Fonts {
        regular: doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| ReportError::Pdf(e.to_string()))?,
        bold: doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(|e| ReportError::Pdf(e.to_string()))?,
    };

    let layer = doc.get_page(page1).get_layer(layer1);
    let mut y = render_header(&layer, &fonts, config, date);
    y = render_profile(&layer, &fonts, evaluation, y);
    y = render_energy(&layer, &fonts, evaluation, y);
    y = render_macros(&layer, &fonts, evaluation, y);
    render_hydration(&layer, &fonts, evaluation, y);

    let (page2, layer2) = doc.add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Charts");
    let layer2 = doc.get_page(page2).get_layer(layer2);
    let mut y2 = PAGE_HEIGHT - 20.0;
    y2 = render_projection(&layer2, &fonts, evaluation, y2);
    y2 = render_macro_split(&layer2, &fonts, evaluation, y2);
    render_advice(&layer2, &fonts, evaluation, y2);
    render_footer(&layer2, &fonts, config, date);

    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let file = File::create(output_path)?;
    let mut writer = BufWriter::new(file);
    doc.save(&mut writer).map_err(|e| ReportError::Pdf(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ParametersCreate, ProfileCreate, SheetRequest, ValidationMode};

    fn evaluation(weight_kg: f64, fat_g_per_kg: f64, caloric_adjustment: i64) -> Evaluation {
        let request = SheetRequest {
            profile: ProfileCreate {
                last_name: "Dupont".to_string(),
                first_name: "Marie".to_string(),
                age: 28,
                height_cm: 165,
                weight_kg,
                sex: "female".to_string(),
                body_fat_pct: None,
            },
            parameters: ParametersCreate {
                formula: "mifflin_st_jeor".to_string(),
                activity_factor: 1.55,
                caloric_adjustment,
                protein_g_per_kg: 1.8,
                fat_g_per_kg,
            },
        };
        request.evaluate(ValidationMode::FailFast).unwrap()
    }

    #[test]
    fn test_target_table_prints_stored_figures() {
        // 54.36 g fat: 489 kcal from full precision, 490 from the rounded grams
        let evaluation = evaluation(60.4, 0.9, 0);
        let results = &evaluation.results;
        let table = MacroTable::from_results(results);
        let pct = results.macro_percentages();

        assert_eq!(table.calories, results.target_calories());
        assert_eq!(table.rows[1].kcal, results.fat_kcal());
        assert_eq!(table.rows[1].kcal, 489.0);
        assert_eq!(table.rows[0].kcal, results.protein_kcal());
        assert_eq!(table.rows[2].kcal, results.carbs_kcal());
        assert_eq!(table.rows[0].grams, results.protein_g());
        assert_eq!(
            [table.rows[0].percent, table.rows[1].percent, table.rows[2].percent],
            [pct.protein, pct.fat, pct.carbs]
        );
        assert_eq!(table.total_kcal, results.total_macro_kcal());
    }

    #[test]
    fn test_maintenance_table_uses_maintenance_calories() {
        let evaluation = evaluation(60.0, 1.0, -300);
        let maintenance = maintenance_results(&evaluation);
        let table = MacroTable::from_results(&maintenance);

        assert_eq!(table.calories, 2062.0);
        assert_eq!(table.rows[0].grams, evaluation.results.protein_g());
        assert_eq!(table.rows[1].grams, evaluation.results.fat_g());
        // The 300 kcal deficit comes out of carbohydrates only
        assert_eq!(table.rows[2].grams, 272.5);
        assert_eq!(table.rows[2].kcal, 1090.0);
    }

    #[test]
    fn test_chart_height_conversion() {
        // 300 px at 150 dpi = 2 in
        assert!((chart_height_mm(300) - 50.8).abs() < 1e-4);
    }
}
