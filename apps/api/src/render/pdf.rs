//! PDF serialization: positioned pages → document bytes.
//!
//! Uses printpdf's op-based page model with the built-in base-14 Helvetica
//! faces, so no font assets ship with the service. Font size and fill color
//! ops are only emitted when they change between lines.

use printpdf::matrix::TextMatrix;
use printpdf::ops::Op;
use printpdf::text::TextItem;
use printpdf::{BuiltinFont, Mm, PdfDocument, PdfPage, PdfSaveOptions, Pt, Rgb};

use crate::render::layout::{Page, PAGE_HEIGHT_PT};
use crate::render::styles::{Color, FontFace, StyleSet};

const PAGE_WIDTH_MM: f32 = 210.0; // A4
const PAGE_HEIGHT_MM: f32 = 297.0;

/// Fraction of the font size between the top of the line box and the baseline.
const BASELINE_FACTOR: f32 = 0.8;

fn builtin_font(face: FontFace) -> BuiltinFont {
    match face {
        FontFace::Helvetica => BuiltinFont::Helvetica,
        FontFace::HelveticaBold => BuiltinFont::HelveticaBold,
    }
}

fn to_pdf_color(c: Color) -> printpdf::color::Color {
    printpdf::color::Color::Rgb(Rgb::new(
        c.r as f32 / 255.0,
        c.g as f32 / 255.0,
        c.b as f32 / 255.0,
        None,
    ))
}

/// Serializes the paginated document to PDF bytes.
pub fn write_pdf(pages: &[Page], styles: &StyleSet, title: &str) -> Vec<u8> {
    let mut doc = PdfDocument::new(title);

    for page in pages {
        let mut ops = Vec::new();
        let mut current_face: Option<FontFace> = None;
        let mut current_size: Option<f32> = None;
        let mut current_color: Option<Color> = None;

        ops.push(Op::StartTextSection);
        for line in &page.lines {
            let style = styles.get(line.style);
            let font = builtin_font(style.face);

            if current_color != Some(style.color) {
                ops.push(Op::SetFillColor {
                    col: to_pdf_color(style.color),
                });
                current_color = Some(style.color);
            }
            if current_face != Some(style.face) || current_size != Some(style.font_size) {
                ops.push(Op::SetFontSizeBuiltinFont {
                    size: Pt(style.font_size),
                    font,
                });
                current_face = Some(style.face);
                current_size = Some(style.font_size);
            }

            // Layout positions are top-left origin; PDF text placement wants
            // the baseline in bottom-left coordinates.
            let baseline_y = line.y + style.font_size * BASELINE_FACTOR;
            let pdf_y = PAGE_HEIGHT_PT - baseline_y;
            ops.push(Op::SetTextMatrix {
                matrix: TextMatrix::Translate(Pt(line.x), Pt(pdf_y)),
            });
            ops.push(Op::WriteTextBuiltinFont {
                items: vec![TextItem::Text(line.text.clone())],
                font,
            });
        }
        ops.push(Op::EndTextSection);

        doc.pages
            .push(PdfPage::new(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), ops));
    }

    let mut bytes = Vec::new();
    let mut warnings = Vec::new();
    doc.save_writer(&mut bytes, &PdfSaveOptions::default(), &mut warnings);
    bytes
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
