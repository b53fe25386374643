use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Whether the advertiser personally answers inbound messages.
///
/// Stored and exchanged as the strings `"yes"` / `"no"`. Parsing is exact
/// string equality: `"Yes"`, `"true"` or `"1"` are rejected rather than
/// coerced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnswerMessages {
    Yes,
    No,
}

impl AnswerMessages {
    pub fn is_yes(self) -> bool {
        self == AnswerMessages::Yes
    }
}

impl From<bool> for AnswerMessages {
    fn from(b: bool) -> Self {
        if b {
            AnswerMessages::Yes
        } else {
            AnswerMessages::No
        }
    }
}

impl fmt::Display for AnswerMessages {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnswerMessages::Yes => write!(f, "yes"),
            AnswerMessages::No => write!(f, "no"),
        }
    }
}

impl FromStr for AnswerMessages {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "yes" => Ok(AnswerMessages::Yes),
            "no" => Ok(AnswerMessages::No),
            _ => Err(format!("Unknown answerMessages value: {s} (expected \"yes\" or \"no\")")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_string_match() {
        assert_eq!("yes".parse::<AnswerMessages>().unwrap(), AnswerMessages::Yes);
        assert_eq!("no".parse::<AnswerMessages>().unwrap(), AnswerMessages::No);
    }

    #[test]
    fn test_truthy_strings_rejected() {
        for s in ["Yes", "YES", "true", "1", "", "y"] {
            assert!(s.parse::<AnswerMessages>().is_err(), "{s:?} should not parse");
        }
    }

    #[test]
    fn test_serde_uses_lowercase_strings() {
        let json = serde_json::to_string(&AnswerMessages::Yes).unwrap();
        assert_eq!(json, "\"yes\"");
        let back: AnswerMessages = serde_json::from_str("\"no\"").unwrap();
        assert_eq!(back, AnswerMessages::No);
    }
}
