use crate::error::{Result, StampError};
use std::fmt;
use std::str::FromStr;

/// Release version stamped into build artifacts
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub revision: u64,
}

impl Version {
    /// Create a new version
    pub fn new(major: u64, minor: u64, revision: u64) -> Self {
        Version {
            major,
            minor,
            revision,
        }
    }

    /// Parse a version argument of the form "A.B.C".
    ///
    /// Each component must consist of ASCII digits only, so signs, whitespace
    /// and empty segments are rejected. Leading zeros are dropped by integer
    /// parsing ("01.2.3" -> 1.2.3).
    pub fn parse(input: &str) -> Result<Self> {
        let parts: Vec<&str> = input.split('.').collect();
        if parts.len() != 3 {
            return Err(StampError::version(format!(
                "Invalid version format: '{}' - expected A.B.C",
                input
            )));
        }

        Ok(Version {
            major: parse_component("major", parts[0])?,
            minor: parse_component("minor", parts[1])?,
            revision: parse_component("revision", parts[2])?,
        })
    }
}

fn parse_component(name: &str, segment: &str) -> Result<u64> {
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return Err(StampError::version(format!(
            "Invalid {} version: '{}'",
            name, segment
        )));
    }

    segment.parse::<u64>().map_err(|e| {
        StampError::version(format!("Invalid {} version: '{}' ({})", name, segment, e))
    })
}

impl FromStr for Version {
    type Err = StampError;

    fn from_str(s: &str) -> Result<Self> {
        Version::parse(s)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.revision)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_parse() {
        let v = Version::parse("1.2.3").unwrap();
        assert_eq!(v.major, 1);
        assert_eq!(v.minor, 2);
        assert_eq!(v.revision, 3);
    }

    #[test]
    fn test_version_display_is_canonical() {
        for input in ["0.0.0", "1.2.3", "10.20.30", "9.9.9"] {
            assert_eq!(Version::parse(input).unwrap().to_string(), input);
        }
    }

    #[test]
    fn test_version_leading_zeros_normalized() {
        let v = Version::parse("01.002.3").unwrap();
        assert_eq!(v, Version::new(1, 2, 3));
        assert_eq!(v.to_string(), "1.2.3");
    }

    #[test]
    fn test_version_parse_invalid() {
        let invalid = [
            "", "1", "1.2", "1.2.3.4", "1.2.x", "-1.2.3", "+1.2.3", "1..3", "1.2.",
            " 1.2.3", "1.2.3 ", "v1.2.3", "1.2.3-beta",
        ];
        for input in invalid {
            let err = Version::parse(input).unwrap_err();
            assert!(
                matches!(err, StampError::Version(_)),
                "expected version error for '{}'",
                input
            );
        }
    }

    #[test]
    fn test_version_parse_overflow() {
        assert!(Version::parse("1.2.99999999999999999999999").is_err());
    }

    #[test]
    fn test_version_from_str() {
        let v: Version = "2.0.1".parse().unwrap();
        assert_eq!(v, Version::new(2, 0, 1));
    }

    #[test]
    fn test_error_names_component() {
        let msg = Version::parse("1.x.3").unwrap_err().to_string();
        assert!(msg.contains("minor"));
        assert!(msg.contains("'x'"));
    }
}
