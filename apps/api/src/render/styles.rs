//! Theme → style derivation.
//!
//! A render request's theme is resolved into a [`Palette`] (per-role color
//! fallback) and then bound into a [`StyleSet`]: the fixed set of named
//! paragraph styles the section builders reference. Font size, weight, and
//! spacing are constants per style name; only the colors come from the theme.
//!
//! Derivation never fails. A malformed color value degrades to that role's
//! default with a warning, so a bad theme still produces a complete PDF.

use tracing::warn;

use crate::models::theme::{
    Theme, DEFAULT_ACCENT, DEFAULT_PRIMARY, DEFAULT_SECONDARY, DEFAULT_TEXT,
};

// ────────────────────────────────────────────────────────────────────────────
// Colors
// ────────────────────────────────────────────────────────────────────────────

/// An sRGB color, 8 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Parses a `#rrggbb` hex string. Returns `None` for anything else — the
/// caller decides the fallback, nothing is thrown away silently.
pub fn parse_hex_color(value: &str) -> Option<Color> {
    let hex = value.strip_prefix('#')?;
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    Some(Color {
        r: u8::from_str_radix(&hex[0..2], 16).ok()?,
        g: u8::from_str_radix(&hex[2..4], 16).ok()?,
        b: u8::from_str_radix(&hex[4..6], 16).ok()?,
    })
}

/// The four theme roles resolved to concrete colors.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub primary: Color,
    pub secondary: Color,
    /// Resolved for parity with the theme contract; no current style binds it.
    #[allow(dead_code)]
    pub accent: Color,
    pub text: Color,
}

impl Palette {
    /// Resolves a theme role by role, falling back to the role's default when
    /// the value is absent or unparsable. Partial themes therefore keep their
    /// valid roles — fallback is never whole-object.
    pub fn resolve(theme: &Theme) -> Palette {
        Palette {
            primary: resolve_role("primary", theme.primary.as_deref(), DEFAULT_PRIMARY),
            secondary: resolve_role("secondary", theme.secondary.as_deref(), DEFAULT_SECONDARY),
            accent: resolve_role("accent", theme.accent.as_deref(), DEFAULT_ACCENT),
            text: resolve_role("text", theme.text.as_deref(), DEFAULT_TEXT),
        }
    }
}

fn resolve_role(role: &str, supplied: Option<&str>, default: &str) -> Color {
    match supplied {
        None => parse_default(default),
        Some(value) => parse_hex_color(value).unwrap_or_else(|| {
            warn!("Theme color '{role}' is not a valid #rrggbb value ({value:?}); using default");
            parse_default(default)
        }),
    }
}

// Defaults are compile-time constants in theme.rs; a parse failure here is a
// programming error, so fall back to black rather than propagate.
fn parse_default(default: &str) -> Color {
    parse_hex_color(default).unwrap_or(Color { r: 0, g: 0, b: 0 })
}

// ────────────────────────────────────────────────────────────────────────────
// Paragraph styles
// ────────────────────────────────────────────────────────────────────────────

/// The two faces the PDF writer embeds (base-14, no font assets).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontFace {
    Helvetica,
    HelveticaBold,
}

/// A named paragraph style: fixed metrics, theme-derived color.
/// All dimensions are in points.
#[derive(Debug, Clone, Copy)]
pub struct ParagraphStyle {
    pub font_size: f32,
    pub face: FontFace,
    pub color: Color,
    pub space_before: f32,
    pub space_after: f32,
}

/// Which named style a block is typeset with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleRole {
    /// Resume title — the candidate's name.
    Title,
    /// EXPERIENCE / EDUCATION / SKILLS section headers.
    SectionHeader,
    /// Per-entry sub-heading: position, degree line, skill category.
    JobTitle,
    /// Company / institution info line.
    Company,
    /// The single contact line under the name.
    Contact,
    /// Plain body text: summary, descriptions, skill items.
    Body,
}

/// The read-only style set for one render. Built once from the resolved
/// palette, never mutated afterwards.
#[derive(Debug, Clone, Copy)]
pub struct StyleSet {
    pub title: ParagraphStyle,
    pub section_header: ParagraphStyle,
    pub job_title: ParagraphStyle,
    pub company: ParagraphStyle,
    pub contact: ParagraphStyle,
    pub body: ParagraphStyle,
}

impl StyleSet {
    pub fn from_palette(palette: Palette) -> StyleSet {
        StyleSet {
            title: ParagraphStyle {
                font_size: 24.0,
                face: FontFace::HelveticaBold,
                color: palette.primary,
                space_before: 0.0,
                space_after: 12.0,
            },
            section_header: ParagraphStyle {
                font_size: 16.0,
                face: FontFace::HelveticaBold,
                color: palette.primary,
                space_before: 16.0,
                space_after: 8.0,
            },
            job_title: ParagraphStyle {
                font_size: 14.0,
                face: FontFace::HelveticaBold,
                color: palette.secondary,
                space_before: 8.0,
                space_after: 2.0,
            },
            company: ParagraphStyle {
                font_size: 12.0,
                face: FontFace::HelveticaBold,
                color: palette.text,
                space_before: 0.0,
                space_after: 4.0,
            },
            contact: ParagraphStyle {
                font_size: 11.0,
                face: FontFace::Helvetica,
                color: palette.secondary,
                space_before: 0.0,
                space_after: 4.0,
            },
            body: ParagraphStyle {
                font_size: 10.0,
                face: FontFace::Helvetica,
                color: palette.text,
                space_before: 0.0,
                space_after: 0.0,
            },
        }
    }

    /// Derives the full style set for a theme in one step.
    pub fn from_theme(theme: &Theme) -> StyleSet {
        StyleSet::from_palette(Palette::resolve(theme))
    }

    pub fn get(&self, role: StyleRole) -> &ParagraphStyle {
        match role {
            StyleRole::Title => &self.title,
            StyleRole::SectionHeader => &self.section_header,
            StyleRole::JobTitle => &self.job_title,
            StyleRole::Company => &self.company,
            StyleRole::Contact => &self.contact,
            StyleRole::Body => &self.body,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
