//! Pulls the character name out of free-form recommendation text.
//!
//! Extraction is a single label match with no fallback: if the model drops the
//! `Character Name:` line, the request fails rather than guessing.

use std::sync::LazyLock;

use regex::Regex;

static CHARACTER_NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)Character Name:[ \t]*(.*)$").expect("valid character name regex")
});
static PARENTHETICAL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\([^)]*\)").expect("valid parenthetical regex"));

/// The lookup service indexes these characters under their short names.
/// Two known mismatches only; do not grow this without evidence from the service.
const NAME_ALIASES: &[(&str, &str)] = &[
    ("Levi Ackerman", "Levi"),
    ("Kiyotaka Ayanokoji", "Ayanokoji"),
];

/// Returns the raw value of the first `Character Name:` line, if any.
/// Markdown emphasis markers (`*`) anywhere in the value are dropped.
pub fn extract_character_name(recommendation: &str) -> Option<String> {
    let captures = CHARACTER_NAME_RE.captures(recommendation)?;
    let value = captures.get(1)?.as_str().replace('*', "");
    let value = value.trim();

    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Strips parenthesized segments, collapses whitespace, then applies the alias table.
pub fn normalize_character_name(raw: &str) -> String {
    let without_parens = PARENTHETICAL_RE.replace_all(raw, " ");
    let cleaned = without_parens.split_whitespace().collect::<Vec<_>>().join(" ");

    match NAME_ALIASES.iter().find(|(full, _)| *full == cleaned) {
        Some((_, short)) => (*short).to_string(),
        None => cleaned,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_and_normalize_levi() {
        let text = "Character Name: Levi Ackerman (Survey Corps)\nDescription: Precise and relentless.";
        let raw = extract_character_name(text).unwrap();
        assert_eq!(raw, "Levi Ackerman (Survey Corps)");
        assert_eq!(normalize_character_name(&raw), "Levi");
    }

    #[test]
    fn test_extract_and_normalize_ayanokoji() {
        let text = "Character Name: Kiyotaka Ayanokoji\nDescription: Hides his strength.";
        let raw = extract_character_name(text).unwrap();
        assert_eq!(normalize_character_name(&raw), "Ayanokoji");
    }

    #[test]
    fn test_extract_missing_label_is_none() {
        let text = "You remind me of Naruto.\nDescription: Never gives up.";
        assert!(extract_character_name(text).is_none());
    }

    #[test]
    fn test_extract_empty_value_does_not_spill_into_next_line() {
        let text = "Character Name:\nDescription: Naruto Uzumaki";
        assert!(extract_character_name(text).is_none());
    }

    #[test]
    fn test_extract_handles_preamble_and_markdown() {
        let text = "Here you go!\n\n**Character Name:** Saitama\r\n**Description:** Bald.";
        assert_eq!(extract_character_name(text).as_deref(), Some("Saitama"));
    }

    #[test]
    fn test_bold_name_followed_by_parenthetical_still_hits_alias() {
        let text = "Character Name: **Levi Ackerman** (Attack on Titan)\nDescription: Tidy.";
        let raw = extract_character_name(text).unwrap();
        assert_eq!(raw, "Levi Ackerman (Attack on Titan)");
        assert_eq!(normalize_character_name(&raw), "Levi");
    }

    #[test]
    fn test_emphasis_only_value_is_none() {
        assert!(extract_character_name("Character Name: ****\n").is_none());
    }

    #[test]
    fn test_extract_takes_first_label() {
        let text = "Character Name: Gon Freecss\nCharacter Name: Killua Zoldyck";
        assert_eq!(extract_character_name(text).as_deref(), Some("Gon Freecss"));
    }

    #[test]
    fn test_normalize_removes_inner_parenthetical() {
        assert_eq!(
            normalize_character_name("Monkey D. (Straw Hat) Luffy"),
            "Monkey D. Luffy"
        );
    }

    #[test]
    fn test_normalize_leaves_unknown_names_alone() {
        assert_eq!(normalize_character_name("  Eren Yeager "), "Eren Yeager");
        assert_eq!(normalize_character_name("Levi"), "Levi");
    }

    #[test]
    fn test_alias_applies_only_to_exact_names() {
        assert_eq!(
            normalize_character_name("Levi Ackerman Jr"),
            "Levi Ackerman Jr"
        );
    }
}
