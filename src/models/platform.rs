use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Hosting platform a question links out to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Platform {
    Leetcode,
    Codechef,
    Codeforces,
}

impl Platform {
    /// All supported platforms.
    pub const ALL: [Platform; 3] = [Self::Leetcode, Self::Codechef, Self::Codeforces];

    /// Returns the wire name for this platform.
    ///
    /// The same string doubles as the pseudo-topic that topic lists may carry
    /// to bias filtering toward one platform (see `catalog::filter_questions`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Leetcode => "LEETCODE",
            Self::Codechef => "CODECHEF",
            Self::Codeforces => "CODEFORCES",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error returned when parsing an unknown platform name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown platform '{0}' (expected LEETCODE, CODECHEF, or CODEFORCES)")]
pub struct ParsePlatformError(pub String);

impl FromStr for Platform {
    type Err = ParsePlatformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "LEETCODE" => Ok(Self::Leetcode),
            "CODECHEF" => Ok(Self::Codechef),
            "CODEFORCES" => Ok(Self::Codeforces),
            _ => Err(ParsePlatformError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn platform_serializes_to_wire_names() {
        let json = serde_json::to_string(&Platform::Leetcode).unwrap();
        assert_eq!(json, r#""LEETCODE""#);

        let back: Platform = serde_json::from_str(r#""CODEFORCES""#).unwrap();
        assert_eq!(back, Platform::Codeforces);
    }

    #[test]
    fn platform_parses_case_insensitively() {
        assert_eq!(
            "leetcode".parse::<Platform>().unwrap(),
            Platform::Leetcode
        );
        assert_eq!(
            "CodeChef".parse::<Platform>().unwrap(),
            Platform::Codechef
        );
    }

    #[test]
    fn platform_rejects_unknown_names() {
        let err = "topcoder".parse::<Platform>().unwrap_err();
        assert!(err.to_string().contains("topcoder"));
    }

    #[test]
    fn platform_wire_name_matches_pseudo_topic() {
        for platform in Platform::ALL {
            assert_eq!(platform.to_string(), platform.as_str());
        }
    }
}
