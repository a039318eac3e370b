//! Tone handling: fixed boilerplate sentences plus literal, case-insensitive
//! substitution per tone.
//!
//! This is not text generation. The boilerplate is hand-authored once in a
//! neutral professional register; each tone carries an ordered table of
//! `(from, to)` replacements applied over it. User-entered content is never
//! touched.

use modocs_shared::Tone;
use regex::Regex;

/// Where a boilerplate sentence sits in the rendered document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Intro,
    Body,
    Closing,
}

/// The neutral boilerplate for a slot.
pub fn boilerplate(slot: Slot) -> &'static str {
    match slot {
        Slot::Intro => {
            "This document was prepared to present the agreed details clearly and completely."
        }
        Slot::Body => {
            "We present this overview with precise details and consistent formatting to \
             ensure clarity and mutual understanding."
        }
        Slot::Closing => {
            "We appreciate your consideration and look forward to a successful partnership."
        }
    }
}

/// Ordered replacement pairs for a tone. Longer phrases come first so they
/// win over their sub-phrases.
pub fn substitutions(tone: Tone) -> &'static [(&'static str, &'static str)] {
    match tone {
        Tone::Professional => &[],
        Tone::Friendly => &[
            ("we appreciate your consideration", "Thanks so much for your time"),
            ("we present this overview", "Here's everything we discussed, laid out"),
            ("this document was prepared", "We put this together"),
            ("we are pleased", "we're excited"),
            ("look forward to", "can't wait for"),
        ],
        Tone::Formal => &[
            (
                "we appreciate your consideration",
                "The undersigned respectfully acknowledge your consideration",
            ),
            (
                "we present this overview",
                "The undersigned hereby present this overview",
            ),
            (
                "this document was prepared",
                "This instrument has been prepared",
            ),
            ("look forward to", "anticipate"),
            ("we", "the undersigned"),
        ],
        Tone::Casual => &[
            ("we appreciate your consideration", "Thanks for taking a look"),
            ("we present this overview", "Here's the rundown"),
            ("this document was prepared", "This was put together"),
            ("look forward to", "are counting on"),
        ],
    }
}

/// Apply a tone's replacement table to a piece of boilerplate.
/// Matching is case-insensitive and word-bounded; replacement text is
/// inserted literally.
pub fn apply_tone(text: &str, tone: Tone) -> String {
    let mut out = text.to_string();
    for (from, to) in substitutions(tone) {
        // Literal phrase with word boundaries; `from` values are plain words
        // so the escape is belt-and-braces.
        let pattern = format!(r"(?i)\b{}\b", regex::escape(from));
        if let Ok(re) = Regex::new(&pattern) {
            out = re.replace_all(&out, *to).into_owned();
        }
    }
    out
}

/// The slot's boilerplate with the tone's substitutions applied.
pub fn styled(slot: Slot, tone: Tone) -> String {
    apply_tone(boilerplate(slot), tone)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn professional_is_identity() {
        for slot in [Slot::Intro, Slot::Body, Slot::Closing] {
            assert_eq!(styled(slot, Tone::Professional), boilerplate(slot));
        }
    }

    #[test]
    fn formal_replaces_we() {
        let styled = styled(Slot::Body, Tone::Formal);
        assert!(styled.starts_with("The undersigned hereby present"));
        assert!(
            !styled
                .to_lowercase()
                .split_whitespace()
                .any(|word| word == "we")
        );
    }

    #[test]
    fn friendly_contracts_phrases() {
        let styled = styled(Slot::Closing, Tone::Friendly);
        assert!(styled.starts_with("Thanks so much for your time"));
        assert!(styled.contains("can't wait for"));
    }

    #[test]
    fn matching_is_case_insensitive() {
        let out = apply_tone("WE ARE PLEASED to submit this.", Tone::Friendly);
        assert!(out.contains("we're excited"));
    }

    #[test]
    fn word_boundaries_hold() {
        // "we" inside "welcome" must survive the formal substitution.
        let out = apply_tone("We welcome feedback.", Tone::Formal);
        assert!(out.contains("welcome"));
        assert!(out.starts_with("the undersigned"));
    }
}
