use crate::models::job::Job;
use crate::models::resume::Resume;

/// Joins raw text fragments into one lowercase string ready for
/// tokenization. Strips the literal `**` emphasis markers the resume
/// editor embeds in descriptions. Absent fields arrive as empty
/// fragments and fall out in the trim.
pub fn normalize_fragments(fragments: &[&str]) -> String {
    fragments
        .join(" ")
        .replace("**", "")
        .to_lowercase()
        .trim()
        .to_string()
}

/// Builds the synthetic user document: skills, certifications, project
/// descriptions, work-experience descriptions, then the stated objective.
pub fn resume_text(resume: &Resume) -> String {
    let skills = resume
        .skills
        .iter()
        .map(|s| s.skill.as_str())
        .collect::<Vec<_>>()
        .join(" ");
    let certifications = resume
        .certifications
        .iter()
        .map(|c| c.certification_name.as_str())
        .collect::<Vec<_>>()
        .join(" ");
    let projects = resume
        .projects
        .iter()
        .map(|p| p.description.as_str())
        .collect::<Vec<_>>()
        .join(" ");
    let experience = resume
        .work_experience
        .iter()
        .map(|w| w.description.as_str())
        .collect::<Vec<_>>()
        .join(" ");
    let objective = resume.objective.as_deref().unwrap_or("");

    normalize_fragments(&[
        &skills,
        &certifications,
        &projects,
        &experience,
        objective,
    ])
}

/// One comparison document per posting: description then position name.
/// Case folding happens in the tokenizer, so no normalization here.
pub fn job_text(job: &Job) -> String {
    format!("{} {}", job.description, job.position_name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::{ProjectEntry, SkillEntry, WorkExperienceEntry};

    #[test]
    fn test_normalize_lowercases_and_trims() {
        assert_eq!(normalize_fragments(&["  Rust", "Tokio  "]), "rust tokio");
    }

    #[test]
    fn test_normalize_strips_emphasis_markers() {
        assert_eq!(
            normalize_fragments(&["Led **migration** of billing"]),
            "led migration of billing"
        );
    }

    #[test]
    fn test_all_empty_fragments_yield_empty_string() {
        assert_eq!(normalize_fragments(&["", "", ""]), "");
    }

    #[test]
    fn test_resume_text_orders_sections() {
        let resume = Resume {
            skills: vec![SkillEntry {
                skill: "Python".to_string(),
            }],
            objective: Some("Backend role".to_string()),
            projects: vec![ProjectEntry {
                description: "Built a scraper".to_string(),
            }],
            work_experience: vec![WorkExperienceEntry {
                description: "Maintained **APIs**".to_string(),
            }],
            ..Resume::default()
        };

        assert_eq!(
            resume_text(&resume),
            "python  built a scraper maintained apis backend role"
        );
    }

    #[test]
    fn test_empty_resume_yields_empty_text() {
        assert_eq!(resume_text(&Resume::default()), "");
    }

    #[test]
    fn test_job_text_concatenates_description_and_position() {
        let job = Job {
            id: "j1".to_string(),
            company: "Acme".to_string(),
            description: "Looking for a developer".to_string(),
            experience: String::new(),
            job_link: String::new(),
            last_date: String::new(),
            location: String::new(),
            position_name: "Engineer".to_string(),
            start_date: String::new(),
            created_at: chrono::Utc::now(),
        };
        assert_eq!(job_text(&job), "Looking for a developer Engineer");
    }
}
