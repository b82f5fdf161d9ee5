use std::fmt;

/// The four integer fields managed in a version source file.
///
/// Follows Semantic Versioning 2.0.0, with the build counter carried as
/// build metadata (`major.minor.patch+build`). Always constructed fresh
/// from the file at the start of a run; the file is the single source of
/// truth and no copy survives across invocations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VersionFields {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
    pub build: u32,
}

impl VersionFields {
    /// Create a new set of version fields
    pub fn new(major: u32, minor: u32, patch: u32, build: u32) -> Self {
        VersionFields {
            major,
            minor,
            patch,
            build,
        }
    }

    /// Copy of these fields with a different build counter
    pub fn with_build(&self, build: u32) -> Self {
        VersionFields { build, ..*self }
    }

    /// Format the composed version string, e.g. `1.4.0+2202`
    pub fn compose(&self) -> String {
        format!("{}.{}.{}+{}", self.major, self.minor, self.patch, self.build)
    }
}

impl fmt::Display for VersionFields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.compose())
    }
}

/// Parses a composed version string back into its four fields.
///
/// The string must be a valid semantic version whose build metadata is a
/// bare decimal counter (e.g. `"1.2.3+99"`). Anything else — missing
/// build metadata, prerelease tags, non-numeric metadata — yields `None`.
///
/// # Example
/// ```ignore
/// assert_eq!(parse_composed("1.2.3+99"), Some(VersionFields::new(1, 2, 3, 99)));
/// assert_eq!(parse_composed("old.garbage"), None);
/// ```
pub fn parse_composed(s: &str) -> Option<VersionFields> {
    let parsed = semver::Version::parse(s).ok()?;
    if !parsed.pre.is_empty() {
        return None;
    }

    let build = parsed.build.as_str().parse::<u32>().ok()?;
    let major = u32::try_from(parsed.major).ok()?;
    let minor = u32::try_from(parsed.minor).ok()?;
    let patch = u32::try_from(parsed.patch).ok()?;

    Some(VersionFields::new(major, minor, patch, build))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose() {
        let v = VersionFields::new(1, 4, 0, 2202);
        assert_eq!(v.compose(), "1.4.0+2202");
    }

    #[test]
    fn test_compose_is_pure() {
        let v = VersionFields::new(0, 0, 0, 0);
        assert_eq!(v.compose(), v.compose());
        assert_eq!(v.compose(), "0.0.0+0");
    }

    #[test]
    fn test_display_matches_compose() {
        let v = VersionFields::new(5, 0, 0, 14);
        assert_eq!(v.to_string(), v.compose());
    }

    #[test]
    fn test_with_build() {
        let v = VersionFields::new(1, 2, 3, 99);
        let bumped = v.with_build(100);
        assert_eq!(bumped, VersionFields::new(1, 2, 3, 100));
        // original untouched
        assert_eq!(v.build, 99);
    }

    #[test]
    fn test_parse_composed_round_trip() {
        let v = VersionFields::new(1, 2, 3, 100);
        assert_eq!(parse_composed(&v.compose()), Some(v));
    }

    #[test]
    fn test_parse_composed_rejects_garbage() {
        assert_eq!(parse_composed("old.garbage"), None);
        assert_eq!(parse_composed(""), None);
        assert_eq!(parse_composed("1.2.3"), None); // no build metadata
        assert_eq!(parse_composed("1.2.3+abc"), None);
        assert_eq!(parse_composed("1.2.3-rc.1+4"), None);
    }
}
