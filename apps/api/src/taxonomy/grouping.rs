//! Groups extracted skills by their best-matching interview category.

use serde::Serialize;

use crate::models::skill::ExtractedSkill;
use crate::taxonomy::catalog::lookup_or_fallback;
use crate::taxonomy::classifier::TextClassifier;

#[derive(Debug, Clone, Serialize)]
pub struct SkillGroup {
    pub category: &'static str,
    pub icon: &'static str,
    pub label: &'static str,
    pub skills: Vec<ExtractedSkill>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct SkillGrouping {
    /// In order of first appearance.
    pub groups: Vec<SkillGroup>,
    pub uncategorized: Vec<ExtractedSkill>,
}

/// Buckets each skill under `classifier.best(name)`. Skills keep their input order.
pub fn group_skills(classifier: &dyn TextClassifier, skills: &[ExtractedSkill]) -> SkillGrouping {
    let mut grouping = SkillGrouping::default();

    for skill in skills {
        let Some(category) = classifier.best(&skill.name) else {
            grouping.uncategorized.push(skill.clone());
            continue;
        };

        match grouping.groups.iter_mut().find(|g| g.category == category) {
            Some(group) => group.skills.push(skill.clone()),
            None => {
                let display = lookup_or_fallback(category);
                grouping.groups.push(SkillGroup {
                    category,
                    icon: display.icon,
                    label: display.label,
                    skills: vec![skill.clone()],
                });
            }
        }
    }

    grouping
}
