//! Lexical skill matching. Case-insensitive and exact, never fuzzy.
//!
//! Two passes over the normalized document, both always run:
//! 1. Caller-supplied requirements, reported back in their original casing.
//! 2. The built-in vocabulary, reported in title case.
//!
//! Single-word skills match against the whitespace-token set; multi-word
//! phrases match by substring containment. The passes are never
//! cross-deduplicated, so a skill matched by both may appear twice under
//! different casings (original vs title case).

use std::collections::HashSet;

use crate::analysis::normalize::normalize;
use crate::analysis::vocabulary::SkillVocabulary;

/// Returns the set of skills present in `text`.
pub fn extract_skills(
    text: &str,
    requirements: &[String],
    vocabulary: &SkillVocabulary,
) -> HashSet<String> {
    let mut found = HashSet::new();
    let document = normalize(text);
    let tokens: HashSet<&str> = document.split_whitespace().collect();

    for requirement in requirements {
        let needle = normalize(requirement);
        let hit = if needle.contains(' ') {
            document.contains(&needle)
        } else {
            tokens.contains(needle.as_str())
        };
        if hit {
            found.insert(requirement.clone());
        }
    }

    // Vocabulary entries are already canonical lower-case.
    for skill in vocabulary.iter() {
        let hit = if skill.contains(' ') {
            document.contains(skill)
        } else {
            tokens.contains(skill)
        };
        if hit {
            found.insert(title_case(skill));
        }
    }

    found
}

/// Title-cases a canonical vocabulary entry for display: an alphabetic
/// character is upper-cased whenever the previous character was not
/// alphabetic ("machine learning" -> "Machine Learning", "node.js" ->
/// "Node.Js").
fn title_case(skill: &str) -> String {
    let mut out = String::with_capacity(skill.len());
    let mut prev_alpha = false;
    for c in skill.chars() {
        if c.is_alphabetic() {
            if prev_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(c);
            prev_alpha = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = "Experienced Python and React developer, strong teamwork";

    fn reqs(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_requirement_token_match_keeps_original_casing() {
        let found = extract_skills(DOC, &reqs(&["Python", "Java"]), &SkillVocabulary::builtin());
        assert!(found.contains("Python"));
        assert!(!found.contains("Java"));
    }

    #[test]
    fn test_vocabulary_matches_are_title_cased() {
        let found = extract_skills(DOC, &[], &SkillVocabulary::builtin());
        assert!(found.contains("Python"));
        assert!(found.contains("React"));
        assert!(found.contains("Teamwork"));
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let found = extract_skills("PYTHON developer", &[], &SkillVocabulary::builtin());
        assert!(found.contains("Python"));
    }

    #[test]
    fn test_multi_word_requirement_matches_by_substring() {
        let found = extract_skills(
            "strong project management skills",
            &reqs(&["Project Management"]),
            &SkillVocabulary::builtin(),
        );
        assert!(found.contains("Project Management"));
    }

    #[test]
    fn test_multi_word_vocabulary_entry_matches_by_substring() {
        let found = extract_skills(
            "built machine learning pipelines",
            &[],
            &SkillVocabulary::builtin(),
        );
        assert!(found.contains("Machine Learning"));
    }

    #[test]
    fn test_partial_token_does_not_match_single_word_skill() {
        // "java" must not match inside "javascript"
        let found = extract_skills("javascript only", &reqs(&["java"]), &SkillVocabulary::builtin());
        assert!(!found.contains("java"));
        assert!(found.contains("Javascript"));
    }

    #[test]
    fn test_requirement_and_vocabulary_casings_are_not_deduplicated() {
        // "python" via the requirement pass and "Python" via the vocabulary
        // pass are different strings; both survive in the result set.
        let found = extract_skills(DOC, &reqs(&["python"]), &SkillVocabulary::builtin());
        assert!(found.contains("python"));
        assert!(found.contains("Python"));
    }

    #[test]
    fn test_both_passes_run_when_requirements_present() {
        let found = extract_skills(DOC, &reqs(&["Python"]), &SkillVocabulary::builtin());
        // React comes from the vocabulary even though only Python was required
        assert!(found.contains("React"));
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("machine learning"), "Machine Learning");
        assert_eq!(title_case("node.js"), "Node.Js");
        assert_eq!(title_case("c++"), "C++");
        assert_eq!(title_case("ci/cd"), "Ci/Cd");
    }
}
