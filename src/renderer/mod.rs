use crate::algebra_error::AlgebraResult;
use crate::primitives::{color::Color10, primitive_scene::PrimitiveScene};
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

// Convert Color10 to hex color string
fn color_to_hex(color: &Color10) -> &'static str {
    match color {
        Color10::Blue => "#1f77b4",
        Color10::Orange => "#ff7f0e",
        Color10::Green => "#2ca02c",
        Color10::Red => "#d62728",
        Color10::Purple => "#9467bd",
        Color10::Brown => "#8c564b",
        Color10::Pink => "#e377c2",
        Color10::Gray => "#7f7f7f",
        Color10::Olive => "#bcbd22",
        Color10::Cyan => "#17becf",
    }
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

// Render a scene into an html file with an inline svg. The y axis points up.
pub fn render_scene(scene: &PrimitiveScene, file_path: impl AsRef<Path>) -> AlgebraResult<()> {
    let file_path = file_path.as_ref();
    // if the directory does not exist, create it
    if let Some(dir) = file_path.parent() {
        if !dir.as_os_str().is_empty() && !dir.exists() {
            fs::create_dir_all(dir)?;
        }
    }
    let mut file = File::create(file_path)?;

    // Pad the view by 5% so strokes on the border stay visible
    let view_box = match scene.bounds() {
        Some(bounds) => {
            let pad = 0.05 * bounds.width().max(bounds.height()).max(1e-6);
            format!(
                "{} {} {} {}",
                bounds.min.x - pad,
                -bounds.max.y - pad,
                bounds.width() + 2.0 * pad,
                bounds.height() + 2.0 * pad
            )
        }
        None => "0 -1 1 1".to_string(),
    };

    let rectangles = scene
        .rectangles
        .iter()
        .map(|(rect, color)| {
            let points = rect
                .corners()
                .iter()
                .map(|p| format!("{},{}", p.x, p.y))
                .collect::<Vec<_>>()
                .join(" ");
            let hex = color_to_hex(color);
            format!(
                "<polygon points=\"{}\" fill=\"{}\" fill-opacity=\"0.35\" stroke=\"{}\" stroke-width=\"1\" vector-effect=\"non-scaling-stroke\"/>",
                points, hex, hex
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let polylines = scene
        .polylines
        .iter()
        .map(|(points, color)| {
            let points = points
                .iter()
                .map(|p| format!("{},{}", p.x, p.y))
                .collect::<Vec<_>>()
                .join(" ");
            format!(
                "<polyline points=\"{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"2\" vector-effect=\"non-scaling-stroke\"/>",
                points,
                color_to_hex(color)
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let lines = scene
        .lines
        .iter()
        .map(|(line, color)| {
            let start = line.start();
            let end = line.end();
            format!(
                "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"{}\" stroke-width=\"1\" vector-effect=\"non-scaling-stroke\"/>",
                start.x,
                start.y,
                end.x,
                end.y,
                color_to_hex(color)
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    // Replace the placeholders with actual data
    let template = include_str!("template.html");
    let page = template
        .replace("/* View box */", &view_box)
        .replace("/* Add rectangles here */", &rectangles)
        .replace("/* Add polylines here */", &polylines)
        .replace("/* Add lines here */", &lines)
        .replace("Debug text goes here...", &escape_html(&scene.debug_text));

    write!(file, "{}", page)?;
    tracing::debug!(path = %file_path.display(), "Rendered scene");
    Ok(())
}
