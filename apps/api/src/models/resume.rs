//! Resume data schema as received on the wire.
//!
//! Every field is optional: absence (or an empty string) suppresses the
//! corresponding output instead of failing the request. Wire names are
//! camelCase; deserialization defaults anything missing to `None`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResumeData {
    pub personal_info: Option<PersonalInfo>,
    pub experience: Option<Vec<ExperienceEntry>>,
    pub education: Option<Vec<EducationEntry>>,
    pub skills: Option<Vec<SkillGroup>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalInfo {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub linkedin: Option<String>,
    pub summary: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExperienceEntry {
    pub position: Option<String>,
    pub company: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub current: bool,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EducationEntry {
    pub degree: Option<String>,
    pub field: Option<String>,
    pub institution: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub gpa: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SkillGroup {
    pub category: Option<String>,
    pub items: Option<Vec<String>>,
}

/// Treats `None` and `""` the same way: both suppress output.
pub fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

impl ResumeData {
    pub fn has_experience(&self) -> bool {
        self.experience.as_deref().is_some_and(|v| !v.is_empty())
    }

    pub fn has_education(&self) -> bool {
        self.education.as_deref().is_some_and(|v| !v.is_empty())
    }

    pub fn has_skills(&self) -> bool {
        self.skills.as_deref().is_some_and(|v| !v.is_empty())
    }
}
