//! HTML rendering for the finder page.
//!
//! The page is assembled with plain string formatting. Every value that came
//! from the request goes through [`escape`] first.

use std::fmt::Write;
use triangles_grid::{Severity, TriangleDescriptor, ValidationOutcome, CELL_SIZE, COORDINATE_MAX};

const STYLE: &str = include_str!("../static/style.css");

/// Values shown in the two forms.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    pub row: String,
    pub column: String,
    /// x1, y1, x2, y2, x3, y3
    pub vertices: [String; 6],
}

impl FormValues {
    /// Forms pre-filled from a located triangle.
    pub fn from_triangle(triangle: &TriangleDescriptor) -> Self {
        let [a, b, c] = triangle.vertices;
        Self {
            row: triangle.address.row_label(),
            column: triangle.column().to_string(),
            vertices: [a.x, a.y, b.x, b.y, c.x, c.y].map(|n| n.to_string()),
        }
    }
}

/// Everything the page needs to render.
#[derive(Debug, Clone, Default)]
pub struct FinderPage {
    pub form: FormValues,
    pub triangle: Option<TriangleDescriptor>,
    pub outcome: ValidationOutcome,
}

/// Escape text for use in element content and quoted attributes.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

impl FinderPage {
    pub fn render(&self) -> String {
        let mut html = String::new();
        let _ = write!(
            html,
            "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
             <title>Triangle Finder</title>\n<style>{STYLE}</style>\n</head>\n<body>\n\
             <h1>Triangle Finder</h1>\n"
        );

        self.render_errors(&mut html);
        html.push_str("<div class=\"panels\">\n");
        self.render_coordinates_form(&mut html);
        self.render_vertices_form(&mut html);
        html.push_str("</div>\n");
        self.render_result(&mut html);
        render_grid(&mut html, self.triangle.as_ref());
        html.push_str("</body>\n</html>\n");
        html
    }

    fn render_errors(&self, html: &mut String) {
        if self.outcome.is_empty() {
            return;
        }
        html.push_str("<ul class=\"errors\">\n");
        for failure in self.outcome.failures() {
            let class = match failure.severity {
                Severity::Error => "error",
                Severity::Warning => "warning",
                Severity::Info => "info",
            };
            let _ = writeln!(
                html,
                "<li class=\"{class}\" data-field=\"{field}\"><strong>{field}</strong>: {message}</li>",
                field = escape(&failure.field),
                message = escape(&failure.message),
            );
        }
        html.push_str("</ul>\n");
    }

    fn render_coordinates_form(&self, html: &mut String) {
        let _ = write!(
            html,
            "<form class=\"panel\" method=\"get\" action=\"/trianglefinder/findbycoordinates\">\n\
             <h2>Find by row and column</h2>\n\
             <label>Row (A-F) <input name=\"row\" value=\"{row}\" maxlength=\"2\"></label>\n\
             <label>Column (1-12) <input name=\"column\" value=\"{column}\" inputmode=\"numeric\"></label>\n\
             <button type=\"submit\">Find</button>\n</form>\n",
            row = escape(&self.form.row),
            column = escape(&self.form.column),
        );
    }

    fn render_vertices_form(&self, html: &mut String) {
        html.push_str(
            "<form class=\"panel\" method=\"get\" action=\"/trianglefinder/findbyvertices\">\n\
             <h2>Find by vertices</h2>\n",
        );
        for (i, pair) in self.form.vertices.chunks(2).enumerate() {
            let n = i + 1;
            let _ = writeln!(
                html,
                "<label>Vertex {n} <input name=\"x{n}\" value=\"{x}\" inputmode=\"numeric\">\
                 <input name=\"y{n}\" value=\"{y}\" inputmode=\"numeric\"></label>",
                x = escape(&pair[0]),
                y = escape(&pair[1]),
            );
        }
        html.push_str("<button type=\"submit\">Find</button>\n</form>\n");
    }

    fn render_result(&self, html: &mut String) {
        let Some(triangle) = &self.triangle else {
            return;
        };

        let status = if !self.outcome.is_valid() {
            "invalid"
        } else if triangle.is_estimated {
            "estimated"
        } else {
            "exact"
        };

        let _ = write!(
            html,
            "<section class=\"result {status}\">\n<h2>Triangle {address}</h2>\n<p>Vertices: {v1} {v2} {v3}</p>\n",
            address = escape(&triangle.address.to_string()),
            v1 = triangle.vertex1(),
            v2 = triangle.vertex2(),
            v3 = triangle.vertex3(),
        );
        if triangle.is_estimated {
            html.push_str("<p class=\"note\">Vertices were snapped to the nearest grid points.</p>\n");
        }
        html.push_str("</section>\n");
    }
}

/// Inline SVG of the grid with the found triangle filled in.
///
/// X runs down the page (rows), Y runs across (columns). Row A's top edge
/// sits at X = -10 so the drawing starts one cell above the origin.
fn render_grid(html: &mut String, triangle: Option<&TriangleDescriptor>) {
    let top = -CELL_SIZE;
    let bottom = COORDINATE_MAX;
    let right = COORDINATE_MAX;

    let _ = writeln!(
        html,
        "<svg class=\"grid\" viewBox=\"-8 {vb_top} {vb_w} {vb_h}\" width=\"480\" height=\"560\">",
        vb_top = top - 2,
        vb_w = right + 10,
        vb_h = bottom - top + 4,
    );

    for x in (top..=bottom).step_by(CELL_SIZE as usize) {
        let _ = writeln!(html, "<line x1=\"0\" y1=\"{x}\" x2=\"{right}\" y2=\"{x}\"/>");
    }
    for y in (0..=right).step_by(CELL_SIZE as usize) {
        let _ = writeln!(html, "<line x1=\"{y}\" y1=\"{top}\" x2=\"{y}\" y2=\"{bottom}\"/>");
    }
    // every cell is split top-left to bottom-right
    for x in (top..bottom).step_by(CELL_SIZE as usize) {
        for y in (0..right).step_by(CELL_SIZE as usize) {
            let _ = writeln!(
                html,
                "<line class=\"diag\" x1=\"{y}\" y1=\"{x}\" x2=\"{y2}\" y2=\"{x2}\"/>",
                x2 = x + CELL_SIZE,
                y2 = y + CELL_SIZE,
            );
        }
    }
    for (i, label) in ["A", "B", "C", "D", "E", "F"].iter().enumerate() {
        let mid = top + CELL_SIZE * i as i32 + CELL_SIZE / 2;
        let _ = writeln!(html, "<text x=\"-6\" y=\"{mid}\">{label}</text>");
    }

    if let Some(triangle) = triangle {
        let points: Vec<String> = triangle
            .vertices
            .iter()
            .map(|v| format!("{},{}", v.y, v.x))
            .collect();
        let _ = writeln!(html, "<polygon class=\"found\" points=\"{}\"/>", points.join(" "));
    }

    html.push_str("</svg>\n");
}

#[cfg(test)]
mod tests {
    use super::*;
    use triangles_grid::{triangle_at, GridAddress, Row};

    #[test]
    fn escapes_markup() {
        assert_eq!(
            escape("<script>alert(\"x\" & 'y')</script>"),
            "&lt;script&gt;alert(&quot;x&quot; &amp; &#39;y&#39;)&lt;/script&gt;"
        );
    }

    #[test]
    fn blank_page_has_both_forms_and_no_result() {
        let html = FinderPage::default().render();
        assert!(html.contains("action=\"/trianglefinder/findbycoordinates\""));
        assert!(html.contains("action=\"/trianglefinder/findbyvertices\""));
        assert!(!html.contains("class=\"result"));
        assert!(!html.contains("<polygon"));
    }

    #[test]
    fn result_fills_forms_and_highlights() {
        let triangle = triangle_at(GridAddress::new(Row::C, 4));
        let page = FinderPage {
            form: FormValues::from_triangle(&triangle),
            triangle: Some(triangle),
            outcome: ValidationOutcome::new(),
        };
        let html = page.render();

        assert!(html.contains("Triangle C4"));
        assert!(html.contains("name=\"row\" value=\"C\""));
        assert!(html.contains("name=\"y2\" value=\"20\""));
        assert!(html.contains("<polygon class=\"found\" points=\"10,10 20,10 20,20\"/>"));
        assert!(html.contains("class=\"result exact\""));
    }

    #[test]
    fn errors_are_listed_and_escaped() {
        let mut outcome = ValidationOutcome::new();
        outcome.error("Row", "Please Specify Row");
        let page = FinderPage {
            form: FormValues {
                row: "<b>".to_string(),
                ..FormValues::default()
            },
            triangle: None,
            outcome,
        };
        let html = page.render();

        assert!(html.contains("data-field=\"Row\""));
        assert!(html.contains("Please Specify Row"));
        assert!(html.contains("value=\"&lt;b&gt;\""));
        assert!(!html.contains("<b>"));
    }
}
