use crate::models::VocabEntry;
use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

lazy_static! {
    // Generation models like to prefix lines with "1. ", "- " or "・"
    // even when told not to.
    static ref LIST_MARKER: Regex = Regex::new(r"^\s*(?:\d+[.)、]\s*|[-*・]\s*)").unwrap();
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum VocabError {
    /// The submitted text produced zero valid entries; the store is unchanged.
    #[error("no usable lines ({skipped} skipped) - expected one term,translation per line")]
    NothingUsable { skipped: usize },

    /// Same condition for generator output, so the driver can word it differently.
    #[error("generator returned no usable lines ({skipped} skipped) - try again")]
    GeneratorFormat { skipped: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseSummary {
    pub added: usize,
    pub skipped: usize,
}

/// Parse `term,translation` lines into entries.
///
/// Each non-empty line is split on the first comma; both sides are trimmed.
/// Lines without a comma, or with an empty side after trimming, are skipped
/// and counted. Leading list markers are stripped before parsing.
pub fn parse_vocab_lines(raw: &str) -> (Vec<VocabEntry>, usize) {
    let mut entries = Vec::new();
    let mut skipped = 0;

    for line in raw.lines() {
        let line = LIST_MARKER.replace(line, "");
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match line.split_once(',') {
            Some((term, translation)) => {
                let term = term.trim();
                let translation = translation.trim();
                if term.is_empty() || translation.is_empty() {
                    skipped += 1;
                } else {
                    entries.push(VocabEntry::new(term, translation));
                }
            }
            None => skipped += 1,
        }
    }

    (entries, skipped)
}

/// The word list between quiz runs. Content changes only by wholesale
/// replacement; a quiz session keeps its own snapshot, so replacing the
/// store never affects a run already in progress.
#[derive(Debug, Clone)]
pub struct VocabStore {
    entries: Vec<VocabEntry>,
}

impl VocabStore {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Store pre-loaded with a small starter list.
    pub fn with_seed() -> Self {
        Self {
            entries: vec![
                VocabEntry::new("猫", "貓"),
                VocabEntry::new("勉強", "學習"),
                VocabEntry::new("世界", "世界"),
            ],
        }
    }

    pub fn entries(&self) -> &[VocabEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Replace the whole list from manually entered text.
    pub fn replace_from_text(&mut self, raw: &str) -> Result<ParseSummary, VocabError> {
        let (entries, skipped) = parse_vocab_lines(raw);
        if entries.is_empty() {
            return Err(VocabError::NothingUsable { skipped });
        }
        let added = entries.len();
        self.entries = entries;
        Ok(ParseSummary { added, skipped })
    }

    /// Replace the whole list from generator output. The parsing contract is
    /// identical to manual text; only the failure variant differs.
    pub fn replace_from_generated(&mut self, raw: &str) -> Result<ParseSummary, VocabError> {
        let (entries, skipped) = parse_vocab_lines(raw);
        if entries.is_empty() {
            return Err(VocabError::GeneratorFormat { skipped });
        }
        let added = entries.len();
        self.entries = entries;
        Ok(ParseSummary { added, skipped })
    }

    /// Serialize the current list back into editable `term,translation` lines.
    pub fn to_editor_text(&self) -> String {
        self.entries
            .iter()
            .map(|e| format!("{},{}", e.term, e.translation))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for VocabStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_three_cjk_lines() {
        let (entries, skipped) = parse_vocab_lines("猫,貓\n勉強,學習\n約束,約定");
        assert_eq!(skipped, 0);
        assert_eq!(
            entries,
            vec![
                VocabEntry::new("猫", "貓"),
                VocabEntry::new("勉強", "學習"),
                VocabEntry::new("約束", "約定"),
            ]
        );
    }

    #[test]
    fn test_parse_counts_lines_without_separator() {
        let (entries, skipped) = parse_vocab_lines("bad line without separator\n猫,貓");
        assert_eq!(entries, vec![VocabEntry::new("猫", "貓")]);
        assert_eq!(skipped, 1);
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let (entries, skipped) = parse_vocab_lines("  猫 , 貓  ");
        assert_eq!(entries, vec![VocabEntry::new("猫", "貓")]);
        assert_eq!(skipped, 0);
    }

    #[test]
    fn test_parse_splits_on_first_comma_only() {
        let (entries, _) = parse_vocab_lines("猫,貓,にゃん");
        assert_eq!(entries, vec![VocabEntry::new("猫", "貓,にゃん")]);
    }

    #[test]
    fn test_parse_skips_empty_sides() {
        let (entries, skipped) = parse_vocab_lines(",貓\n猫,\n猫,貓");
        assert_eq!(entries, vec![VocabEntry::new("猫", "貓")]);
        assert_eq!(skipped, 2);
    }

    #[test]
    fn test_parse_ignores_blank_lines() {
        let (entries, skipped) = parse_vocab_lines("猫,貓\n\n\n勉強,學習\n");
        assert_eq!(entries.len(), 2);
        assert_eq!(skipped, 0);
    }

    #[test]
    fn test_parse_strips_list_markers() {
        let (entries, skipped) = parse_vocab_lines("1. 猫,貓\n2) 犬,狗\n- 鳥,鳥\n・魚,魚");
        assert_eq!(skipped, 0);
        assert_eq!(entries.len(), 4);
        assert_eq!(entries[0], VocabEntry::new("猫", "貓"));
        assert_eq!(entries[1], VocabEntry::new("犬", "狗"));
    }

    #[test]
    fn test_seed_store() {
        let store = VocabStore::with_seed();
        assert_eq!(store.len(), 3);
        assert_eq!(store.entries()[0], VocabEntry::new("猫", "貓"));
    }

    #[test]
    fn test_replace_from_text_replaces_wholesale() {
        let mut store = VocabStore::with_seed();
        let summary = store.replace_from_text("犬,狗").unwrap();
        assert_eq!(summary, ParseSummary { added: 1, skipped: 0 });
        assert_eq!(store.entries(), &[VocabEntry::new("犬", "狗")]);
    }

    #[test]
    fn test_replace_keeps_store_on_unusable_input() {
        let mut store = VocabStore::with_seed();
        let err = store.replace_from_text("no separators\nhere either").unwrap_err();
        assert_eq!(err, VocabError::NothingUsable { skipped: 2 });
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_replace_from_generated_uses_distinct_error() {
        let mut store = VocabStore::with_seed();
        let err = store.replace_from_generated("garbage").unwrap_err();
        assert_eq!(err, VocabError::GeneratorFormat { skipped: 1 });
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_replace_from_generated_reports_skips() {
        let mut store = VocabStore::new();
        let summary = store
            .replace_from_generated("Here are your words:\n1. 猫,貓\n2. 犬,狗")
            .unwrap();
        assert_eq!(summary.added, 2);
        assert_eq!(summary.skipped, 1);
    }

    #[test]
    fn test_editor_text_round_trip() {
        let store = VocabStore::with_seed();
        let text = store.to_editor_text();
        assert_eq!(text, "猫,貓\n勉強,學習\n世界,世界");

        let mut other = VocabStore::new();
        other.replace_from_text(&text).unwrap();
        assert_eq!(other.entries(), store.entries());
    }
}
