//! Section builders: resume data → ordered block sequence.
//!
//! Each builder maps one optional section of the input onto typeset blocks.
//! Absent or empty fields suppress their output; joins never leave a stray
//! separator. Entries render in the order supplied — no sorting or filtering
//! beyond the presence checks.

use crate::models::resume::{
    present, EducationEntry, ExperienceEntry, PersonalInfo, ResumeData, SkillGroup,
};
use crate::render::styles::StyleRole;

/// Separator between fields on a single info line (contact, company, institution).
pub const FIELD_SEPARATOR: &str = " | ";
/// Separator between items within a skill category.
pub const ITEM_SEPARATOR: &str = " \u{2022} ";

/// A single typeset unit in the document body.
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Paragraph { text: String, style: StyleRole },
    /// Vertical gap in points.
    Spacer { height: f32 },
}

impl Block {
    fn paragraph(text: impl Into<String>, style: StyleRole) -> Block {
        Block::Paragraph {
            text: text.into(),
            style,
        }
    }

    fn spacer(height: f32) -> Block {
        Block::Spacer { height }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Orchestration
// ────────────────────────────────────────────────────────────────────────────

/// Builds the full document body: header, then experience, education, and
/// skills — fixed order, each section included only when its list is non-empty.
pub fn build_document(data: &ResumeData) -> Vec<Block> {
    let mut blocks = Vec::new();

    let default_personal = PersonalInfo::default();
    let personal = data.personal_info.as_ref().unwrap_or(&default_personal);
    blocks.extend(build_header(personal));

    if data.has_experience() {
        blocks.extend(build_experience(data.experience.as_deref().unwrap_or(&[])));
    }
    if data.has_education() {
        blocks.extend(build_education(data.education.as_deref().unwrap_or(&[])));
    }
    if data.has_skills() {
        blocks.extend(build_skills(data.skills.as_deref().unwrap_or(&[])));
    }

    blocks
}

// ────────────────────────────────────────────────────────────────────────────
// Section builders
// ────────────────────────────────────────────────────────────────────────────

/// Name, contact line, summary, trailing spacer.
pub fn build_header(personal: &PersonalInfo) -> Vec<Block> {
    let mut blocks = Vec::new();

    if let Some(name) = present(&personal.full_name) {
        blocks.push(Block::paragraph(name, StyleRole::Title));
    }

    let mut contact_parts = Vec::new();
    if let Some(email) = present(&personal.email) {
        contact_parts.push(format!("Email: {email}"));
    }
    if let Some(phone) = present(&personal.phone) {
        contact_parts.push(format!("Phone: {phone}"));
    }
    if let Some(location) = present(&personal.location) {
        contact_parts.push(format!("Location: {location}"));
    }
    if let Some(linkedin) = present(&personal.linkedin) {
        contact_parts.push(format!("LinkedIn: {linkedin}"));
    }
    if !contact_parts.is_empty() {
        blocks.push(Block::paragraph(
            contact_parts.join(FIELD_SEPARATOR),
            StyleRole::Contact,
        ));
    }

    if let Some(summary) = present(&personal.summary) {
        blocks.push(Block::spacer(12.0));
        blocks.push(Block::paragraph(summary, StyleRole::Body));
    }

    blocks.push(Block::spacer(20.0));
    blocks
}

/// EXPERIENCE header plus one group of blocks per entry that names a position
/// or a company.
pub fn build_experience(entries: &[ExperienceEntry]) -> Vec<Block> {
    let mut blocks = vec![Block::paragraph("EXPERIENCE", StyleRole::SectionHeader)];

    for entry in entries {
        if present(&entry.position).is_none() && present(&entry.company).is_none() {
            continue;
        }

        if let Some(position) = present(&entry.position) {
            blocks.push(Block::paragraph(position, StyleRole::JobTitle));
        }

        let mut info_parts = Vec::new();
        if let Some(company) = present(&entry.company) {
            info_parts.push(company.to_string());
        }
        if let Some(dates) = date_range(&entry.start_date, &entry.end_date, entry.current) {
            info_parts.push(dates);
        }
        if !info_parts.is_empty() {
            blocks.push(Block::paragraph(
                info_parts.join(FIELD_SEPARATOR),
                StyleRole::Company,
            ));
        }

        if let Some(description) = present(&entry.description) {
            blocks.push(Block::paragraph(description, StyleRole::Body));
        }

        blocks.push(Block::spacer(12.0));
    }

    blocks
}

/// EDUCATION header plus one group of blocks per entry that names a degree or
/// an institution.
pub fn build_education(entries: &[EducationEntry]) -> Vec<Block> {
    let mut blocks = vec![Block::paragraph("EDUCATION", StyleRole::SectionHeader)];

    for entry in entries {
        if present(&entry.degree).is_none() && present(&entry.institution).is_none() {
            continue;
        }

        let mut degree_parts = Vec::new();
        if let Some(degree) = present(&entry.degree) {
            degree_parts.push(degree.to_string());
        }
        if let Some(field) = present(&entry.field) {
            degree_parts.push(format!("in {field}"));
        }
        if !degree_parts.is_empty() {
            blocks.push(Block::paragraph(degree_parts.join(" "), StyleRole::JobTitle));
        }

        let mut info_parts = Vec::new();
        if let Some(institution) = present(&entry.institution) {
            info_parts.push(institution.to_string());
        }
        // No "Present" substitution for education dates.
        if let Some(dates) = date_range(&entry.start_date, &entry.end_date, false) {
            info_parts.push(dates);
        }
        if let Some(gpa) = present(&entry.gpa) {
            info_parts.push(format!("GPA: {gpa}"));
        }
        if !info_parts.is_empty() {
            blocks.push(Block::paragraph(
                info_parts.join(FIELD_SEPARATOR),
                StyleRole::Company,
            ));
        }

        blocks.push(Block::spacer(12.0));
    }

    blocks
}

/// SKILLS header plus category/items pairs. Entries lacking either a category
/// or a non-empty items list are skipped.
pub fn build_skills(entries: &[SkillGroup]) -> Vec<Block> {
    let mut blocks = vec![Block::paragraph("SKILLS", StyleRole::SectionHeader)];

    for entry in entries {
        let Some(category) = present(&entry.category) else {
            continue;
        };
        let Some(items) = entry.items.as_deref().filter(|v| !v.is_empty()) else {
            continue;
        };

        blocks.push(Block::paragraph(category, StyleRole::JobTitle));
        blocks.push(Block::paragraph(items.join(ITEM_SEPARATOR), StyleRole::Body));
        blocks.push(Block::spacer(8.0));
    }

    blocks
}

// ────────────────────────────────────────────────────────────────────────────
// Date range
// ────────────────────────────────────────────────────────────────────────────

/// Formats `start - end`, where `end` is the literal `Present` when `current`
/// is set. Omitted entirely when both sides are empty.
fn date_range(start: &Option<String>, end: &Option<String>, current: bool) -> Option<String> {
    let start = present(start).unwrap_or("");
    let end = if current {
        "Present"
    } else {
        present(end).unwrap_or("")
    };

    if start.is_empty() && end.is_empty() {
        return None;
    }
    Some(format!("{start} - {end}"))
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn text_blocks(blocks: &[Block]) -> Vec<(&str, StyleRole)> {
        blocks
            .iter()
            .filter_map(|b| match b {
                Block::Paragraph { text, style } => Some((text.as_str(), *style)),
                Block::Spacer { .. } => None,
            })
            .collect()
    }

    fn full_personal() -> PersonalInfo {
        PersonalInfo {
            full_name: Some("Jane Doe".to_string()),
            email: Some("jane@example.com".to_string()),
            phone: Some("555-0100".to_string()),
            location: Some("Oslo".to_string()),
            linkedin: Some("linkedin.com/in/janedoe".to_string()),
            summary: Some("Systems engineer.".to_string()),
        }
    }

    // ── date_range ───────────────────────────────────────────────────────────

    #[test]
    fn test_date_range_start_and_end() {
        let range = date_range(&Some("2019".to_string()), &Some("2021".to_string()), false);
        assert_eq!(range.as_deref(), Some("2019 - 2021"));
    }

    #[test]
    fn test_date_range_current_overrides_end_date() {
        let range = date_range(&Some("2020".to_string()), &Some("2023".to_string()), true);
        assert_eq!(
            range.as_deref(),
            Some("2020 - Present"),
            "current must win over any supplied endDate"
        );
    }

    #[test]
    fn test_date_range_both_empty_is_omitted() {
        assert_eq!(date_range(&None, &None, false), None);
        assert_eq!(
            date_range(&Some(String::new()), &Some(String::new()), false),
            None,
            "empty strings count as absent"
        );
    }

    #[test]
    fn test_date_range_current_with_no_dates_still_renders() {
        // `current` makes the end side non-empty, so the range is kept.
        let range = date_range(&None, &None, true);
        assert_eq!(range.as_deref(), Some(" - Present"));
    }

    // ── header ───────────────────────────────────────────────────────────────

    #[test]
    fn test_header_full_personal_info() {
        let blocks = build_header(&full_personal());
        let texts = text_blocks(&blocks);
        assert_eq!(texts[0], ("Jane Doe", StyleRole::Title));
        assert_eq!(
            texts[1],
            (
                "Email: jane@example.com | Phone: 555-0100 | Location: Oslo | \
                 LinkedIn: linkedin.com/in/janedoe",
                StyleRole::Contact
            )
        );
        assert_eq!(texts[2], ("Systems engineer.", StyleRole::Body));
        assert!(
            matches!(blocks.last(), Some(Block::Spacer { .. })),
            "header always ends with a spacer"
        );
    }

    #[test]
    fn test_header_partial_contact_has_no_stray_separator() {
        let personal = PersonalInfo {
            email: Some("a@b.c".to_string()),
            linkedin: Some("li".to_string()),
            ..PersonalInfo::default()
        };
        let blocks = build_header(&personal);
        let texts = text_blocks(&blocks);
        assert_eq!(texts.len(), 1);
        assert_eq!(texts[0].0, "Email: a@b.c | LinkedIn: li");
    }

    #[test]
    fn test_header_empty_personal_info_is_just_a_spacer() {
        let blocks = build_header(&PersonalInfo::default());
        assert_eq!(blocks.len(), 1);
        assert!(matches!(blocks[0], Block::Spacer { .. }));
    }

    // ── experience ───────────────────────────────────────────────────────────

    fn experience_entry() -> ExperienceEntry {
        ExperienceEntry {
            position: Some("Senior Engineer".to_string()),
            company: Some("Acme".to_string()),
            start_date: Some("2020".to_string()),
            end_date: Some("2023".to_string()),
            current: false,
            description: Some("Built things.".to_string()),
        }
    }

    #[test]
    fn test_experience_full_entry() {
        let blocks = build_experience(&[experience_entry()]);
        let texts = text_blocks(&blocks);
        assert_eq!(texts[0], ("EXPERIENCE", StyleRole::SectionHeader));
        assert_eq!(texts[1], ("Senior Engineer", StyleRole::JobTitle));
        assert_eq!(texts[2], ("Acme | 2020 - 2023", StyleRole::Company));
        assert_eq!(texts[3], ("Built things.", StyleRole::Body));
    }

    #[test]
    fn test_experience_current_renders_present() {
        let entry = ExperienceEntry {
            current: true,
            ..experience_entry()
        };
        let blocks = build_experience(&[entry]);
        let texts = text_blocks(&blocks);
        assert_eq!(texts[2].0, "Acme | 2020 - Present");
    }

    #[test]
    fn test_experience_no_dates_no_stray_separator() {
        let entry = ExperienceEntry {
            start_date: None,
            end_date: None,
            ..experience_entry()
        };
        let blocks = build_experience(&[entry]);
        let texts = text_blocks(&blocks);
        assert_eq!(texts[2].0, "Acme", "no date fragment and no ' | ' joined");
    }

    #[test]
    fn test_experience_entry_without_position_or_company_skipped() {
        let entry = ExperienceEntry {
            position: None,
            company: Some(String::new()),
            description: Some("orphan text".to_string()),
            ..ExperienceEntry::default()
        };
        let blocks = build_experience(&[entry]);
        let texts = text_blocks(&blocks);
        assert_eq!(texts.len(), 1, "only the section header remains");
    }

    #[test]
    fn test_experience_preserves_supplied_order() {
        let first = ExperienceEntry {
            position: Some("Second Job".to_string()),
            ..ExperienceEntry::default()
        };
        let second = ExperienceEntry {
            position: Some("First Job".to_string()),
            ..ExperienceEntry::default()
        };
        let blocks = build_experience(&[first, second]);
        let texts = text_blocks(&blocks);
        assert_eq!(texts[1].0, "Second Job");
        assert_eq!(texts[2].0, "First Job");
    }

    // ── education ────────────────────────────────────────────────────────────

    #[test]
    fn test_education_full_entry() {
        let entry = EducationEntry {
            degree: Some("BSc".to_string()),
            field: Some("Computer Science".to_string()),
            institution: Some("MIT".to_string()),
            start_date: Some("2015".to_string()),
            end_date: Some("2019".to_string()),
            gpa: Some("3.9".to_string()),
        };
        let blocks = build_education(&[entry]);
        let texts = text_blocks(&blocks);
        assert_eq!(texts[0], ("EDUCATION", StyleRole::SectionHeader));
        assert_eq!(texts[1], ("BSc in Computer Science", StyleRole::JobTitle));
        assert_eq!(
            texts[2],
            ("MIT | 2015 - 2019 | GPA: 3.9", StyleRole::Company)
        );
    }

    #[test]
    fn test_education_degree_without_field_has_no_suffix() {
        let entry = EducationEntry {
            degree: Some("PhD".to_string()),
            institution: Some("NTNU".to_string()),
            ..EducationEntry::default()
        };
        let blocks = build_education(&[entry]);
        let texts = text_blocks(&blocks);
        assert_eq!(texts[1].0, "PhD");
        assert_eq!(texts[2].0, "NTNU");
    }

    #[test]
    fn test_education_gpa_without_dates_joins_cleanly() {
        let entry = EducationEntry {
            institution: Some("NTNU".to_string()),
            gpa: Some("3.5".to_string()),
            ..EducationEntry::default()
        };
        let blocks = build_education(&[entry]);
        let texts = text_blocks(&blocks);
        assert_eq!(texts[1].0, "NTNU | GPA: 3.5");
    }

    // ── skills ───────────────────────────────────────────────────────────────

    #[test]
    fn test_skills_joins_items_with_bullet() {
        let group = SkillGroup {
            category: Some("Languages".to_string()),
            items: Some(vec!["Rust".to_string(), "Go".to_string(), "C".to_string()]),
        };
        let blocks = build_skills(&[group]);
        let texts = text_blocks(&blocks);
        assert_eq!(texts[0], ("SKILLS", StyleRole::SectionHeader));
        assert_eq!(texts[1], ("Languages", StyleRole::JobTitle));
        assert_eq!(texts[2], ("Rust \u{2022} Go \u{2022} C", StyleRole::Body));
    }

    #[test]
    fn test_skills_skips_incomplete_groups() {
        let no_items = SkillGroup {
            category: Some("Tools".to_string()),
            items: Some(Vec::new()),
        };
        let no_category = SkillGroup {
            category: None,
            items: Some(vec!["Docker".to_string()]),
        };
        let blocks = build_skills(&[no_items, no_category]);
        let texts = text_blocks(&blocks);
        assert_eq!(texts.len(), 1, "only the section header remains");
    }

    // ── orchestration ────────────────────────────────────────────────────────

    #[test]
    fn test_build_document_empty_lists_yield_header_only() {
        let data = ResumeData {
            personal_info: Some(full_personal()),
            experience: Some(Vec::new()),
            education: None,
            skills: Some(Vec::new()),
        };
        let blocks = build_document(&data);
        let texts = text_blocks(&blocks);
        assert!(
            !texts.iter().any(|(t, _)| *t == "EXPERIENCE"
                || *t == "EDUCATION"
                || *t == "SKILLS"),
            "no section headers for empty lists"
        );
        assert_eq!(texts[0].0, "Jane Doe");
    }

    #[test]
    fn test_build_document_section_order_is_fixed() {
        let data = ResumeData {
            personal_info: None,
            experience: Some(vec![experience_entry()]),
            education: Some(vec![EducationEntry {
                degree: Some("BSc".to_string()),
                ..EducationEntry::default()
            }]),
            skills: Some(vec![SkillGroup {
                category: Some("Languages".to_string()),
                items: Some(vec!["Rust".to_string()]),
            }]),
        };
        let blocks = build_document(&data);
        let texts: Vec<&str> = text_blocks(&blocks).into_iter().map(|(t, _)| t).collect();
        let exp = texts.iter().position(|t| *t == "EXPERIENCE").expect("EXPERIENCE");
        let edu = texts.iter().position(|t| *t == "EDUCATION").expect("EDUCATION");
        let skl = texts.iter().position(|t| *t == "SKILLS").expect("SKILLS");
        assert!(exp < edu && edu < skl, "fixed section order");
    }

    #[test]
    fn test_build_document_completely_empty_input() {
        let blocks = build_document(&ResumeData::default());
        assert_eq!(blocks.len(), 1, "just the header's trailing spacer");
        assert!(matches!(blocks[0], Block::Spacer { .. }));
    }
}
