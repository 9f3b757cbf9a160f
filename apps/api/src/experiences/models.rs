use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A stored job experience. `id` is assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct ExperienceRecord {
    pub id: i64,
    pub job_title: String,
    pub company: String,
    pub responsibilities: String,
    /// Free-text skill keywords; matched by substring. May be empty.
    #[sqlx(rename = "skills")]
    pub skills_tag: String,
}

impl ExperienceRecord {
    /// The (title, company, responsibilities) triple used for presentation de-duplication.
    pub fn content_key(&self) -> (&str, &str, &str) {
        (&self.job_title, &self.company, &self.responsibilities)
    }
}

/// Input for Add Experience.
#[derive(Debug, Clone, Deserialize)]
pub struct NewExperience {
    pub job_title: String,
    pub company: String,
    pub responsibilities: String,
    #[serde(default)]
    pub skills_tag: String,
}

impl NewExperience {
    /// Trims the three required fields and rejects blank title, company or responsibilities.
    pub fn validated(self) -> Result<Self, String> {
        let normalized = Self {
            job_title: self.job_title.trim().to_string(),
            company: self.company.trim().to_string(),
            responsibilities: self.responsibilities.trim().to_string(),
            skills_tag: self.skills_tag,
        };

        if normalized.job_title.is_empty()
            || normalized.company.is_empty()
            || normalized.responsibilities.is_empty()
        {
            return Err("All fields must be filled out.".to_string());
        }

        Ok(normalized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_experience(title: &str, company: &str, responsibilities: &str) -> NewExperience {
        NewExperience {
            job_title: title.to_string(),
            company: company.to_string(),
            responsibilities: responsibilities.to_string(),
            skills_tag: String::new(),
        }
    }

    #[test]
    fn test_validated_trims_fields() {
        let exp = new_experience("  Engineer ", "Acme\n", " Built APIs ")
            .validated()
            .unwrap();
        assert_eq!(exp.job_title, "Engineer");
        assert_eq!(exp.company, "Acme");
        assert_eq!(exp.responsibilities, "Built APIs");
    }

    #[test]
    fn test_blank_required_field_rejected() {
        for (t, c, r) in [("", "Acme", "x"), ("Eng", "   ", "x"), ("Eng", "Acme", "\n")] {
            let err = new_experience(t, c, r).validated().unwrap_err();
            assert_eq!(err, "All fields must be filled out.");
        }
    }

    #[test]
    fn test_skills_tag_defaults_to_empty() {
        let exp: NewExperience = serde_json::from_str(
            r#"{"job_title": "Eng", "company": "Acme", "responsibilities": "Built"}"#,
        )
        .unwrap();
        assert_eq!(exp.skills_tag, "");
    }
}
