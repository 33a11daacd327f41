//! King/queen phonetic confusion pass.
//!
//! Speech recognizers routinely mis-hear "king" and "queen" as nearby
//! tokens ("keen", "clean", "green"). Before category scoring runs, this
//! pass counts sound-alike tokens for each side; whichever side is
//! strictly ahead biases the later scoring toward that category. The token
//! lists are fixed: a generic phonetic algorithm would admit sound-alikes
//! the product never sees from its recognizer.

/// Tokens the recognizer produces when the speaker said "king".
const KING_SOUNDALIKES: &[&str] = &["king", "kings", "keen", "kin", "kim", "kingdom"];

/// Tokens the recognizer produces when the speaker said "queen".
const QUEEN_SOUNDALIKES: &[&str] = &["queen", "queens", "clean", "cream", "green"];

/// Which bed-type category the confusion pass favours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhoneticLean {
    King,
    Queen,
}

/// Count sound-alike tokens on each side and return the side that is
/// strictly ahead, if any. Tokenization splits on every non-alphanumeric
/// character so punctuation never hides a token.
pub fn confusion_lean(phrase: &str) -> Option<PhoneticLean> {
    let mut king = 0usize;
    let mut queen = 0usize;
    for token in phrase.split(|c: char| !c.is_ascii_alphanumeric()) {
        if token.is_empty() {
            continue;
        }
        if KING_SOUNDALIKES.contains(&token) {
            king += 1;
        }
        if QUEEN_SOUNDALIKES.contains(&token) {
            queen += 1;
        }
    }
    match king.cmp(&queen) {
        std::cmp::Ordering::Greater => Some(PhoneticLean::King),
        std::cmp::Ordering::Less => Some(PhoneticLean::Queen),
        std::cmp::Ordering::Equal => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_misheard_king_tokens_lean_king() {
        assert_eq!(confusion_lean("a keen room please"), Some(PhoneticLean::King));
        assert_eq!(confusion_lean("kim size bed"), Some(PhoneticLean::King));
    }

    #[test]
    fn test_misheard_queen_tokens_lean_queen() {
        assert_eq!(confusion_lean("a clean bed"), Some(PhoneticLean::Queen));
        assert_eq!(confusion_lean("green room with cream"), Some(PhoneticLean::Queen));
    }

    #[test]
    fn test_balanced_counts_lean_nowhere() {
        assert_eq!(confusion_lean("king or queen"), None);
        assert_eq!(confusion_lean("no beds mentioned at all"), None);
    }

    #[test]
    fn test_punctuation_does_not_hide_tokens() {
        assert_eq!(confusion_lean("king, please"), Some(PhoneticLean::King));
    }
}
