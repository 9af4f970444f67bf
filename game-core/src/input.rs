/// A recognised keystroke
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Letter(char),
    Submit,
    Delete,
    /// Anything else. Has no observable effect on a round.
    Rejected,
}

/// Classify a raw keyboard key. Case-insensitive, total and pure.
pub fn classify(raw_key: &str) -> Command {
    let key = raw_key.to_uppercase();
    let mut chars = key.chars();

    match (chars.next(), chars.next()) {
        (None, _) => Command::Rejected,
        (Some(ch), None) if ch.is_ascii_uppercase() => Command::Letter(ch),
        (Some(_), None) => Command::Rejected,
        _ => match key.as_str() {
            "ENTER" => Command::Submit,
            "BACKSPACE" | "DELETE" => Command::Delete,
            _ => Command::Rejected,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letters() {
        assert_eq!(classify("a"), Command::Letter('A'));
        assert_eq!(classify("Z"), Command::Letter('Z'));
        assert_eq!(classify("q"), classify("Q"));
    }

    #[test]
    fn test_special_keys() {
        assert_eq!(classify("Enter"), Command::Submit);
        assert_eq!(classify("ENTER"), Command::Submit);
        assert_eq!(classify("Backspace"), Command::Delete);
        assert_eq!(classify("Delete"), Command::Delete);
        assert_eq!(classify("delete"), Command::Delete);
    }

    #[test]
    fn test_rejected_keys() {
        for key in ["!", "1", " ", "", "é", "Shift", "ArrowLeft", "Tab", "AB", "Enter "] {
            assert_eq!(classify(key), Command::Rejected, "key {:?}", key);
        }
    }

    #[test]
    fn test_classification_is_repeatable() {
        for key in ["x", "Enter", "Backspace", "%", "Escape"] {
            assert_eq!(classify(key), classify(key));
        }
    }
}
