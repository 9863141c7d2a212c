use serde::{Deserialize, Serialize};

/// A skill as returned by the resume / job-description extraction endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedSkill {
    pub name: String,
    pub proficiency: Option<String>,
    #[serde(rename = "type")]
    pub skill_type: Option<String>,
}

/// The extraction response shape: `{ "skills": [...] }`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SkillExtraction {
    #[serde(default)]
    pub skills: Vec<ExtractedSkill>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extraction_deserializes_backend_shape() {
        let json = r#"{
            "skills": [
                {"name": "Python", "proficiency": "expert", "type": "technical"},
                {"name": "Public speaking", "proficiency": null, "type": "soft"},
                {"name": "Terraform"}
            ]
        }"#;

        let parsed: SkillExtraction = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.skills.len(), 3);
        assert_eq!(parsed.skills[0].skill_type.as_deref(), Some("technical"));
        assert_eq!(parsed.skills[0].proficiency.as_deref(), Some("expert"));
        assert!(parsed.skills[1].proficiency.is_none());
        assert!(parsed.skills[2].skill_type.is_none());
    }

    #[test]
    fn test_missing_skills_array_is_empty() {
        let parsed: SkillExtraction = serde_json::from_str("{}").unwrap();
        assert!(parsed.skills.is_empty());
    }

    #[test]
    fn test_skill_type_serializes_as_type() {
        let skill = ExtractedSkill {
            name: "Rust".to_string(),
            proficiency: None,
            skill_type: Some("technical".to_string()),
        };
        let value = serde_json::to_value(&skill).unwrap();
        assert_eq!(value["type"], "technical");
    }
}
