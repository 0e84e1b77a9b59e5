use std::{fmt, str::FromStr};

use crate::config::ConfigError;

/// Path to a record field.
///
/// `ip` names a top-level field, `[src][ip]` names `ip` nested inside `src`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldRef {
    raw: String,
    segments: Vec<String>,
}

impl FieldRef {
    pub fn segments(&self) -> &[String] {
        &self.segments
    }
}

impl FromStr for FieldRef {
    type Err = ConfigError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let invalid = || ConfigError::InvalidFieldRef(raw.to_owned());

        if raw.is_empty() {
            return Err(invalid());
        }

        let segments = if raw.starts_with('[') {
            let mut segments = Vec::new();
            let mut rest = raw;
            while !rest.is_empty() {
                let inner = rest.strip_prefix('[').ok_or_else(invalid)?;
                let end = inner.find(']').ok_or_else(invalid)?;
                let segment = &inner[..end];
                if segment.is_empty() || segment.contains('[') {
                    return Err(invalid());
                }
                segments.push(segment.to_owned());
                rest = &inner[end + 1..];
            }
            segments
        } else if raw.contains(['[', ']']) {
            return Err(invalid());
        } else {
            vec![raw.to_owned()]
        };

        Ok(FieldRef { raw: raw.to_owned(), segments })
    }
}

impl fmt::Display for FieldRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn top_level() {
        let field: FieldRef = "src_ip".parse().unwrap();
        assert_eq!(field.segments(), ["src_ip"]);
        assert_eq!(field.to_string(), "src_ip");
    }

    #[test]
    fn nested() {
        let field: FieldRef = "[src][pubip]".parse().unwrap();
        assert_eq!(field.segments(), ["src", "pubip"]);
        let field: FieldRef = "[ip]".parse().unwrap();
        assert_eq!(field.segments(), ["ip"]);
    }

    #[test]
    fn malformed() {
        for raw in ["", "[]", "[src", "[src]ip", "src]", "a[b]", "[a][]", "[a[b]]"] {
            assert!(
                matches!(raw.parse::<FieldRef>(), Err(ConfigError::InvalidFieldRef(r)) if r == raw),
                "{raw:?} should be rejected"
            );
        }
    }
}
