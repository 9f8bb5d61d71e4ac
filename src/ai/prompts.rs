use crate::models::Level;

/// Prompt for a batch of up to 10 `term,translation` vocabulary lines.
/// Topic and level go into the prompt text verbatim; they are not
/// interpreted anywhere else.
pub fn vocab_batch(topic: &str, level: Level) -> String {
    format!(
        "List 10 Japanese vocabulary words about \"{topic}\" at JLPT level {level}. \
         Reply with exactly one word per line in the form \
         japanese,traditional-chinese-translation. \
         No headings, no numbering, no commentary - just the lines.",
        topic = topic,
        level = level.jlpt(),
    )
}

/// Prompt for one short example sentence for a just-answered question.
pub fn example_sentence(term: &str, translation: &str) -> String {
    format!(
        "Write one short, everyday Japanese example sentence using \
         「{term}」 (meaning: {translation}), followed by its Traditional \
         Chinese translation. Keep the whole reply under three lines.",
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vocab_batch_carries_topic_and_level() {
        let prompt = vocab_batch("壽司店", Level::N4);
        assert!(prompt.contains("壽司店"));
        assert!(prompt.contains("N4"));
        assert!(prompt.contains("one word per line"));
    }

    #[test]
    fn test_example_sentence_carries_pair() {
        let prompt = example_sentence("約束", "約定");
        assert!(prompt.contains("「約束」"));
        assert!(prompt.contains("約定"));
    }
}
