use std::fmt;

/// Non-fatal notices produced while scanning and rewriting the version
/// source file. These are reported to the user on stderr and never
/// affect the exit status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RewriteWarning {
    /// A field label never occurred in the file; the field was treated
    /// as 0 under the tolerant missing-field policy
    MissingField { label: String },
    /// The full-version line carried a payload that is not a recognizable
    /// composed version; it was regenerated anyway
    StaleFullVersion { payload: String },
}

impl fmt::Display for RewriteWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RewriteWarning::MissingField { label } => {
                write!(f, "Label '{}' not found in file, using 0", label.trim_end())
            }
            RewriteWarning::StaleFullVersion { payload } => {
                write!(
                    f,
                    "Existing full version '{}' is not a composed version, regenerating",
                    payload
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_display() {
        let warning = RewriteWarning::MissingField {
            label: "VERSION_BUILD { ".to_string(),
        };

        let display_msg = warning.to_string();
        assert!(
            display_msg.contains("VERSION_BUILD {"),
            "Message should contain the label, got: {}",
            display_msg
        );
        assert!(
            display_msg.contains("using 0"),
            "Message should state the defaulted value, got: {}",
            display_msg
        );
    }

    #[test]
    fn test_stale_full_version_display() {
        let warning = RewriteWarning::StaleFullVersion {
            payload: "old.garbage".to_string(),
        };

        let display_msg = warning.to_string();
        assert!(
            display_msg.contains("old.garbage"),
            "Message should contain the stale payload, got: {}",
            display_msg
        );
        assert!(
            display_msg.contains("regenerating"),
            "Message should state the line is regenerated, got: {}",
            display_msg
        );
    }
}
