use serde::{Deserialize, Serialize};

/// A stored resume document. Every section is optional in the store, so
/// absent sequences deserialize as empty rather than failing the read.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resume {
    #[serde(default)]
    pub skills: Vec<SkillEntry>,
    #[serde(default)]
    pub objective: Option<String>,
    #[serde(default)]
    pub certifications: Vec<CertificationEntry>,
    #[serde(default)]
    pub projects: Vec<ProjectEntry>,
    #[serde(default)]
    pub work_experience: Vec<WorkExperienceEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillEntry {
    pub skill: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificationEntry {
    pub certification_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectEntry {
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkExperienceEntry {
    pub description: String,
}
