//! Block pagination: word-wraps paragraphs and flows them onto fixed-size
//! pages.
//!
//! Geometry matches the service's historical output: A4 pages, 72pt margins on
//! the left, right, and top, 18pt at the bottom. The cursor runs top-down in a
//! top-left coordinate space; the PDF writer converts to PDF's bottom-left
//! origin when emitting ops.

use crate::render::document::Block;
use crate::render::font_metrics::get_metrics;
use crate::render::styles::{StyleRole, StyleSet};

pub const PAGE_WIDTH_PT: f32 = 595.28; // A4
pub const PAGE_HEIGHT_PT: f32 = 841.89;
pub const MARGIN_LEFT_PT: f32 = 72.0;
pub const MARGIN_RIGHT_PT: f32 = 72.0;
pub const MARGIN_TOP_PT: f32 = 72.0;
pub const MARGIN_BOTTOM_PT: f32 = 18.0;

const LINE_HEIGHT_FACTOR: f32 = 1.2;

/// One wrapped line placed on a page. `y` is the top edge of the line box,
/// measured from the top of the page.
#[derive(Debug, Clone)]
pub struct PositionedLine {
    pub x: f32,
    pub y: f32,
    pub text: String,
    pub style: StyleRole,
}

#[derive(Debug, Clone, Default)]
pub struct Page {
    pub lines: Vec<PositionedLine>,
}

/// Flows the block sequence onto pages.
///
/// Always yields at least one page, so an empty document still renders a valid
/// single-page PDF. Paragraphs split across page boundaries line by line;
/// spacers only advance the cursor and never force a page of their own.
pub fn paginate(blocks: &[Block], styles: &StyleSet) -> Vec<Page> {
    let usable_width_pt = PAGE_WIDTH_PT - MARGIN_LEFT_PT - MARGIN_RIGHT_PT;
    let bottom_limit = PAGE_HEIGHT_PT - MARGIN_BOTTOM_PT;

    let mut pages = Vec::new();
    let mut current = Page::default();
    let mut y = MARGIN_TOP_PT;

    for block in blocks {
        match block {
            Block::Spacer { height } => {
                y += height;
            }
            Block::Paragraph { text, style } => {
                let para = styles.get(*style);
                let line_height = para.font_size * LINE_HEIGHT_FACTOR;
                let max_width_em = usable_width_pt / para.font_size;
                let lines = get_metrics(para.face).wrap_lines(text, max_width_em);
                if lines.is_empty() {
                    continue;
                }

                // space_before is suppressed at the top of a page, where the
                // margin already provides the gap.
                if y > MARGIN_TOP_PT {
                    y += para.space_before;
                }

                for line in lines {
                    if y + line_height > bottom_limit {
                        pages.push(std::mem::take(&mut current));
                        y = MARGIN_TOP_PT;
                    }
                    current.lines.push(PositionedLine {
                        x: MARGIN_LEFT_PT,
                        y,
                        text: line,
                        style: *style,
                    });
                    y += line_height;
                }

                y += para.space_after;
            }
        }
    }

    if !current.lines.is_empty() || pages.is_empty() {
        pages.push(current);
    }
    pages
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
