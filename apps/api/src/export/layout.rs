//! Page and paragraph plans for the two export formats.
//!
//! PDF: US letter, one line of text per baseline, top-down. A new page starts
//! when the next baseline would sit below the bottom limit.
//! Word: narrow margins, one paragraph per line.

use serde::Serialize;

// ────────────────────────────────────────────────────────────────────────────
// PDF
// ────────────────────────────────────────────────────────────────────────────

/// Geometry of the PDF export, in points (1/72 inch), origin bottom-left.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PdfLayout {
    pub page_width_pt: f32,
    pub page_height_pt: f32,
    pub font: String,
    pub font_size_pt: f32,
    pub left_margin_pt: f32,
    /// Baseline of the first line on every page.
    pub top_baseline_pt: f32,
    pub line_spacing_pt: f32,
    /// A baseline below this starts a new page.
    pub bottom_limit_pt: f32,
}

impl Default for PdfLayout {
    fn default() -> Self {
        Self {
            page_width_pt: 612.0,
            page_height_pt: 792.0,
            font: "Helvetica".to_string(),
            font_size_pt: 10.0,
            left_margin_pt: 30.0,
            top_baseline_pt: 770.0,
            line_spacing_pt: 12.0,
            bottom_limit_pt: 40.0,
        }
    }
}

/// A line of text at its drawing position.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacedLine {
    pub x: f32,
    pub y: f32,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PdfPage {
    pub lines: Vec<PlacedLine>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PdfPlan {
    pub layout: PdfLayout,
    pub pages: Vec<PdfPage>,
}

/// Places flattened lines onto pages.
pub fn plan_pdf(lines: &[String], layout: &PdfLayout) -> PdfPlan {
    let mut pages = Vec::new();
    let mut current = PdfPage { lines: Vec::new() };
    let mut y = layout.top_baseline_pt;

    for line in lines {
        if y < layout.bottom_limit_pt {
            pages.push(std::mem::replace(&mut current, PdfPage { lines: Vec::new() }));
            y = layout.top_baseline_pt;
        }
        current.lines.push(PlacedLine {
            x: layout.left_margin_pt,
            y,
            text: line.clone(),
        });
        y -= layout.line_spacing_pt;
    }

    if !current.lines.is_empty() {
        pages.push(current);
    }

    PdfPlan {
        layout: layout.clone(),
        pages,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Word
// ────────────────────────────────────────────────────────────────────────────

/// Section margins of the Word export, in inches.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WordLayout {
    pub margin_top_in: f32,
    pub margin_bottom_in: f32,
    pub margin_left_in: f32,
    pub margin_right_in: f32,
}

impl Default for WordLayout {
    fn default() -> Self {
        Self {
            margin_top_in: 0.5,
            margin_bottom_in: 0.5,
            margin_left_in: 0.5,
            margin_right_in: 0.5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WordPlan {
    pub layout: WordLayout,
    pub paragraphs: Vec<String>,
}

pub fn plan_word(lines: &[String], layout: &WordLayout) -> WordPlan {
    WordPlan {
        layout: layout.clone(),
        paragraphs: lines.to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("line {i}")).collect()
    }

    #[test]
    fn test_first_line_at_top_baseline() {
        let plan = plan_pdf(&lines(2), &PdfLayout::default());
        assert_eq!(plan.pages.len(), 1);
        assert_eq!(plan.pages[0].lines[0].y, 770.0);
        assert_eq!(plan.pages[0].lines[0].x, 30.0);
        assert_eq!(plan.pages[0].lines[1].y, 758.0);
    }

    #[test]
    fn test_sixty_one_lines_fit_one_page() {
        // Baselines 770, 758, ..., 50 are all at or above the 40pt limit.
        let plan = plan_pdf(&lines(61), &PdfLayout::default());
        assert_eq!(plan.pages.len(), 1);
        assert_eq!(plan.pages[0].lines.last().unwrap().y, 50.0);
    }

    #[test]
    fn test_overflow_starts_new_page_at_top() {
        let plan = plan_pdf(&lines(62), &PdfLayout::default());
        assert_eq!(plan.pages.len(), 2);
        assert_eq!(plan.pages[1].lines.len(), 1);
        assert_eq!(plan.pages[1].lines[0].y, 770.0);
        assert_eq!(plan.pages[1].lines[0].text, "line 61");
    }

    #[test]
    fn test_no_lines_no_pages() {
        assert!(plan_pdf(&[], &PdfLayout::default()).pages.is_empty());
    }

    #[test]
    fn test_every_line_placed_once_in_order() {
        let input = lines(150);
        let plan = plan_pdf(&input, &PdfLayout::default());
        let placed: Vec<String> = plan
            .pages
            .iter()
            .flat_map(|p| p.lines.iter().map(|l| l.text.clone()))
            .collect();
        assert_eq!(placed, input);
        assert!(plan
            .pages
            .iter()
            .flat_map(|p| &p.lines)
            .all(|l| l.y >= 40.0));
    }

    #[test]
    fn test_word_plan_has_half_inch_margins() {
        let plan = plan_word(&lines(3), &WordLayout::default());
        assert_eq!(plan.paragraphs.len(), 3);
        assert_eq!(plan.layout.margin_left_in, 0.5);
        assert_eq!(plan.layout.margin_top_in, 0.5);
    }
}
