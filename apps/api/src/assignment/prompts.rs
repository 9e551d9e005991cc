// All LLM prompt constants for the assignment pipeline.

use crate::models::profile::ProfileStats;

/// Recommendation prompt template.
/// Replace: {total_solved}, {hard_solved}, {ranking}
///
/// Only the `Character Name:` line is parsed downstream; the remaining
/// wording is free to change.
pub const RECOMMENDATION_PROMPT_TEMPLATE: &str = r#"Based on the following LeetCode profile:

- Total problems solved: {total_solved}
- Hard problems solved: {hard_solved}
- Ranking on LeetCode: {ranking}

Recommend an anime character, male or female, that best represents this user.

You can be creative and use the LeetCode stats to match the character's traits or abilities.
Roast them in one line as well, and pick a different anime character most of the time.
The description should be only 50-60 words, and you can roast them if their profile is not strong.

Return the response in the following format:
Character Name: <character_name>
Description: <brief_description>"#;

/// Rendered in place of a missing ranking.
const UNRANKED: &str = "unranked";

pub fn build_recommendation_prompt(stats: &ProfileStats) -> String {
    let ranking = stats
        .ranking
        .map_or_else(|| UNRANKED.to_string(), |r| r.to_string());

    RECOMMENDATION_PROMPT_TEMPLATE
        .replace("{total_solved}", &stats.total_solved.to_string())
        .replace("{hard_solved}", &stats.hard_solved.to_string())
        .replace("{ranking}", &ranking)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_stats_verbatim() {
        let prompt = build_recommendation_prompt(&ProfileStats::new(412, 37, Some(120456)));

        assert!(prompt.contains("- Total problems solved: 412\n"));
        assert!(prompt.contains("- Hard problems solved: 37\n"));
        assert!(prompt.contains("- Ranking on LeetCode: 120456\n"));
        assert!(!prompt.contains('{'));
    }

    #[test]
    fn test_prompt_is_deterministic() {
        let stats = ProfileStats::new(5, 0, Some(4_000_000));
        assert_eq!(
            build_recommendation_prompt(&stats),
            build_recommendation_prompt(&stats)
        );
    }

    #[test]
    fn test_prompt_requests_both_label_lines() {
        let prompt = build_recommendation_prompt(&ProfileStats::new(1, 1, Some(1)));
        assert!(prompt.contains("Character Name: <character_name>"));
        assert!(prompt.contains("Description: <brief_description>"));
    }

    #[test]
    fn test_prompt_handles_missing_ranking() {
        let prompt = build_recommendation_prompt(&ProfileStats::new(0, 0, None));
        assert!(prompt.contains("- Ranking on LeetCode: unranked\n"));
    }
}
