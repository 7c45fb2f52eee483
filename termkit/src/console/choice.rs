//! Fixed sets of acceptable answers for choice prompts.

use std::fmt;

use anyhow::{Result, bail};

/// Ordered, non-empty list of distinct answer labels.
///
/// Matching ignores ASCII case and requires the whole input to equal a
/// label; there are no prefix matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChoiceSet<'a> {
    labels: &'a [&'a str],
}

impl ChoiceSet<'static> {
    /// `y` / `n`.
    pub const YES_NO: Self = Self { labels: &["y", "n"] };
    /// `True` / `False`.
    pub const BOOLEAN: Self = Self {
        labels: &["True", "False"],
    };
}

impl<'a> ChoiceSet<'a> {
    /// Build a choice set from caller-supplied labels.
    ///
    /// Rejects an empty set, empty labels, and labels that differ only by case.
    pub fn new(labels: &'a [&'a str]) -> Result<Self> {
        if labels.is_empty() {
            bail!("choice set must contain at least one label");
        }
        for (i, label) in labels.iter().enumerate() {
            if label.is_empty() {
                bail!("choice label {i} is empty");
            }
            if let Some(earlier) = labels[..i].iter().find(|l| l.eq_ignore_ascii_case(label)) {
                bail!("duplicate choice label {label:?} (matches {earlier:?})");
            }
        }
        Ok(Self { labels })
    }

    /// Index of the label equal to `input` ignoring ASCII case.
    pub fn position(&self, input: &str) -> Option<usize> {
        self.labels
            .iter()
            .position(|label| label.eq_ignore_ascii_case(input))
    }
}

/// Labels joined by `/`, e.g. `y/n`.
impl fmt::Display for ChoiceSet<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, label) in self.labels.iter().enumerate() {
            if i > 0 {
                f.write_str("/")?;
            }
            f.write_str(label)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yes_no_matches_any_case() {
        let set = ChoiceSet::YES_NO;
        assert_eq!(set.position("y"), Some(0));
        assert_eq!(set.position("Y"), Some(0));
        assert_eq!(set.position("n"), Some(1));
        assert_eq!(set.position("N"), Some(1));
    }

    #[test]
    fn partial_and_empty_inputs_never_match() {
        let set = ChoiceSet::YES_NO;
        for input in ["Yes", "", "x", " y", "y "] {
            assert_eq!(set.position(input), None, "{input:?} should not match");
        }
    }

    #[test]
    fn boolean_matches_case_insensitively() {
        let set = ChoiceSet::BOOLEAN;
        assert_eq!(set.position("true"), Some(0));
        assert_eq!(set.position("FALSE"), Some(1));
        assert_eq!(set.position("T"), None);
    }

    #[test]
    fn display_joins_labels_with_slash() {
        assert_eq!(ChoiceSet::YES_NO.to_string(), "y/n");
        let labels = ["red", "green", "blue"];
        let set = ChoiceSet::new(&labels).expect("valid set");
        assert_eq!(set.to_string(), "red/green/blue");
    }

    #[test]
    fn new_rejects_case_insensitive_duplicates() {
        let labels = ["Yes", "no", "YES"];
        let err = ChoiceSet::new(&labels).expect_err("duplicate");
        assert!(err.to_string().contains("duplicate choice label"));
    }

    #[test]
    fn new_rejects_empty_sets_and_labels() {
        assert!(ChoiceSet::new(&[]).is_err());
        assert!(ChoiceSet::new(&["a", ""]).is_err());
    }
}
