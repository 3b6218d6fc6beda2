//! Password strength scoring for the signup form.

/// Highest score [`password_strength`] can return.
pub const MAX_STRENGTH: u8 = 4;

/// Score a password from 0 to [`MAX_STRENGTH`].
///
/// One point each for: at least 8 characters, an ASCII uppercase letter,
/// an ASCII digit, and any character outside `[A-Za-z0-9]`.
pub fn password_strength(password: &str) -> u8 {
    let criteria = [
        password.chars().count() >= 8,
        password.chars().any(|c| c.is_ascii_uppercase()),
        password.chars().any(|c| c.is_ascii_digit()),
        password.chars().any(|c| !c.is_ascii_alphanumeric()),
    ];
    criteria.into_iter().filter(|met| *met).count() as u8
}

/// Colour band of the strength bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StrengthLevel {
    Weak,
    Fair,
    Good,
    Strong,
}

impl StrengthLevel {
    /// Level for a score; a score of 0 has no level and renders no fill.
    pub fn from_score(score: u8) -> Option<Self> {
        match score {
            0 => None,
            1 => Some(StrengthLevel::Weak),
            2 => Some(StrengthLevel::Fair),
            3 => Some(StrengthLevel::Good),
            _ => Some(StrengthLevel::Strong),
        }
    }

    /// Fill colour: red, orange, yellow, green.
    pub fn color(self) -> &'static str {
        match self {
            StrengthLevel::Weak => "#ef4444",
            StrengthLevel::Fair => "#fb923c",
            StrengthLevel::Good => "#facc15",
            StrengthLevel::Strong => "#22c55e",
        }
    }
}

/// Width of the filled part of the bar, in percent.
pub fn strength_fill_percent(score: u8) -> u8 {
    score.min(MAX_STRENGTH) * (100 / MAX_STRENGTH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_scores() {
        assert_eq!(password_strength(""), 0);
        assert_eq!(password_strength("abc"), 0);
        assert_eq!(password_strength("abcdefgh"), 1);
        assert_eq!(password_strength("Abcdefg1"), 3);
        assert_eq!(password_strength("Abcdefg1!"), 4);
        assert_eq!(password_strength("a b"), 1);
    }

    #[test]
    fn test_each_criterion_adds_one() {
        let base = "abc";
        assert_eq!(password_strength(base), 0);
        assert_eq!(password_strength("abcdefghij"), 1);
        assert_eq!(password_strength("Abc"), 1);
        assert_eq!(password_strength("abc1"), 1);
        assert_eq!(password_strength("abc#"), 1);
    }

    #[test]
    fn test_monotonic_as_criteria_accumulate() {
        let steps = ["abc", "abcdefgh", "Abcdefgh", "Abcdefg1", "Abcdef1!"];
        let scores: Vec<u8> = steps.iter().map(|p| password_strength(p)).collect();
        assert!(scores.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(scores, [0, 1, 2, 3, 4]);
        assert!(scores.iter().all(|s| *s <= MAX_STRENGTH));
    }

    #[test]
    fn test_length_counts_characters() {
        // Eight characters but more than eight bytes.
        assert_eq!(password_strength("ééééaaaa"), 2);
    }

    #[test]
    fn test_bar_rendering() {
        assert_eq!(StrengthLevel::from_score(0), None);
        assert_eq!(StrengthLevel::from_score(1), Some(StrengthLevel::Weak));
        assert_eq!(StrengthLevel::from_score(4), Some(StrengthLevel::Strong));
        assert_eq!(strength_fill_percent(0), 0);
        assert_eq!(strength_fill_percent(1), 25);
        assert_eq!(strength_fill_percent(3), 75);
        assert_eq!(strength_fill_percent(4), 100);
    }

    #[test]
    fn test_bar_width_for_typed_passwords() {
        let widths: Vec<u8> = ["abc", "abcdefgh", "Abcdefgh", "Abcdefg1", "Abcdefg1!"]
            .iter()
            .map(|p| strength_fill_percent(password_strength(p)))
            .collect();
        assert_eq!(widths, [0, 25, 50, 75, 100]);
        assert_eq!(strength_fill_percent(u8::MAX), 100);
    }

    #[test]
    fn test_length_counts_scalar_values_not_utf16_units() {
        // Four emoji are eight UTF-16 units but only four characters.
        assert_eq!(password_strength("😀😀😀😀"), 1);
        assert_eq!(password_strength("😀😀😀😀😀😀😀😀"), 2);
    }
}
