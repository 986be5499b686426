//! Resume rendering core: theme → styles → blocks → pages → PDF bytes.
//!
//! One linear pass per request. Everything here is request-scoped; the only
//! process-wide values are the style constants and font-metric tables.

pub mod document;
pub mod font_metrics;
pub mod handlers;
pub mod layout;
pub mod pdf;
pub mod styles;

use anyhow::Result;

use crate::models::resume::{present, ResumeData};
use crate::models::theme::Theme;
use crate::render::styles::StyleSet;

/// Renders resume data under a theme into complete PDF bytes.
///
/// Style derivation degrades rather than fails (see [`styles`]); any fault in
/// block construction or layout propagates — no partial PDF is ever returned.
pub fn render_resume(data: &ResumeData, theme: &Theme) -> Result<Vec<u8>> {
    let styles = StyleSet::from_theme(theme);
    let blocks = document::build_document(data);
    let pages = layout::paginate(&blocks, &styles);

    let title = data
        .personal_info
        .as_ref()
        .and_then(|p| present(&p.full_name))
        .unwrap_or("Resume");

    Ok(pdf::write_pdf(&pages, &styles, title))
}
