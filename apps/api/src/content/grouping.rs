use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::models::skill::{Skill, SkillCategory};

/// Skills grouped by category, groups in first-appearance order.
///
/// Serializes as a JSON object whose key order is the group order. A plain
/// `HashMap`/`BTreeMap` would reorder the keys.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SkillsByCategory(Vec<(SkillCategory, Vec<Skill>)>);

#[cfg(test)]
impl SkillsByCategory {
    pub fn categories(&self) -> Vec<SkillCategory> {
        self.0.iter().map(|(c, _)| *c).collect()
    }

    pub fn get(&self, category: SkillCategory) -> Option<&[Skill]> {
        self.0
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, skills)| skills.as_slice())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for SkillsByCategory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (category, skills) in &self.0 {
            map.serialize_entry(category.as_str(), skills)?;
        }
        map.end()
    }
}

/// Stable partition of an already-ordered skill sequence.
///
/// Each category's position is where it first appears in `ranked`, and skills
/// keep their relative order inside a group. No re-sorting happens here.
pub fn group_by_category(ranked: Vec<Skill>) -> SkillsByCategory {
    let mut groups: Vec<(SkillCategory, Vec<Skill>)> = Vec::new();
    for skill in ranked {
        let category = skill.fields.category;
        match groups.iter_mut().find(|(c, _)| *c == category) {
            Some((_, members)) => members.push(skill),
            None => groups.push((category, vec![skill])),
        }
    }
    SkillsByCategory(groups)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::skill::NewSkill;

    fn make_skill(id: i64, name: &str, category: SkillCategory, proficiency: i32) -> Skill {
        Skill {
            id,
            fields: NewSkill::new(name, category, proficiency, "icon"),
        }
    }

    #[test]
    fn test_empty_input_gives_no_groups() {
        let grouped = group_by_category(vec![]);
        assert!(grouped.is_empty());
        assert_eq!(serde_json::to_string(&grouped).unwrap(), "{}");
    }

    #[test]
    fn test_group_order_follows_first_appearance_not_enum_order() {
        let ranked = vec![
            make_skill(1, "Java", SkillCategory::Languages, 78),
            make_skill(2, "SQL", SkillCategory::Database, 80),
            make_skill(3, "C", SkillCategory::Languages, 70),
        ];
        let grouped = group_by_category(ranked);
        assert_eq!(
            grouped.categories(),
            vec![SkillCategory::Languages, SkillCategory::Database]
        );
        let languages: Vec<_> = grouped
            .get(SkillCategory::Languages)
            .unwrap()
            .iter()
            .map(|s| s.fields.name.as_str())
            .collect();
        assert_eq!(languages, vec!["Java", "C"]);
    }

    #[test]
    fn test_members_keep_input_order() {
        // deliberately not proficiency-sorted: grouping must not re-sort
        let ranked = vec![
            make_skill(1, "low", SkillCategory::Backend, 10),
            make_skill(2, "high", SkillCategory::Backend, 99),
        ];
        let grouped = group_by_category(ranked);
        let ids: Vec<_> = grouped
            .get(SkillCategory::Backend)
            .unwrap()
            .iter()
            .map(|s| s.id)
            .collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_serialized_keys_keep_group_order() {
        let ranked = vec![
            make_skill(1, "React Native", SkillCategory::Mobile, 85),
            make_skill(2, "HTML5", SkillCategory::Frontend, 92),
            make_skill(3, "C++", SkillCategory::Languages, 72),
        ];
        let json = serde_json::to_string(&group_by_category(ranked)).unwrap();
        let mobile = json.find("\"MOBILE\"").unwrap();
        let frontend = json.find("\"FRONTEND\"").unwrap();
        let languages = json.find("\"LANGUAGES\"").unwrap();
        assert!(mobile < frontend && frontend < languages, "Got {json}");
    }
}
