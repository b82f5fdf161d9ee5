//! The version rewrite pass: read the whole source file, bump the build
//! counter, regenerate the optional full-version line, write everything
//! back. The write only happens after the entire transform succeeds, so
//! a parse failure never leaves a half-rewritten file behind.

use std::fs;
use std::path::Path;

use regex::Regex;

use crate::config::{LabelsConfig, MissingFieldPolicy};
use crate::error::{Result, VersionStampError};
use crate::fields;
use crate::version::{self, VersionFields};
use crate::warnings::RewriteWarning;

/// Result of a successful bump-and-rewrite pass
#[derive(Debug, Clone, PartialEq)]
pub struct RewriteOutcome {
    /// The fields as written back, build counter already incremented
    pub version: VersionFields,

    /// The composed version string, e.g. `1.2.3+100`
    pub composed: String,

    /// Quoted payload the full-version line carried before regeneration
    pub previous_full: Option<String>,

    /// Non-fatal notices collected during the pass
    pub warnings: Vec<RewriteWarning>,
}

/// Reads the four version fields fresh from the source file.
///
/// Every line is scanned against every label; when a label occurs on
/// more than one line, the last occurrence wins. Missing labels are
/// resolved according to `policy`.
///
/// # Arguments
/// * `path` - Version source file
/// * `labels` - Label literals anchoring each field
/// * `policy` - What to do when a label never occurs
///
/// # Returns
/// * `Ok((fields, warnings))` - Current field values plus any notices
/// * `Err` - File inaccessible, a payload malformed, or a label missing
///   under [`MissingFieldPolicy::Error`]
pub fn read_fields(
    path: &Path,
    labels: &LabelsConfig,
    policy: MissingFieldPolicy,
) -> Result<(VersionFields, Vec<RewriteWarning>)> {
    let content = read_source(path)?;
    let lines: Vec<&str> = content.lines().collect();
    collect_fields(&lines, labels, policy)
}

/// Increments the build counter in the source file and rewrites it.
///
/// Pipeline: read every line into memory, extract the current fields,
/// transform the recognized lines, write the full line sequence back,
/// compose the final version string. Per line:
/// - build-label line: the integer payload is replaced in place by its
///   exact span with the incremented value;
/// - full-version-label line (when configured): the payload is discarded
///   and the line regenerated as `<label>"<composed>" };`;
/// - anything else passes through unchanged.
///
/// Each emitted line is right-trimmed and terminated with a single
/// newline, so trailing whitespace on unrelated lines is normalized
/// away. Line count and order are preserved.
pub fn bump_and_rewrite(
    path: &Path,
    labels: &LabelsConfig,
    policy: MissingFieldPolicy,
) -> Result<RewriteOutcome> {
    let content = read_source(path)?;
    let lines: Vec<&str> = content.lines().collect();

    let (current, mut warnings) = collect_fields(&lines, labels, policy)?;
    let next = current.with_build(current.build + 1);
    let composed = next.compose();

    let mut previous_full = None;
    let mut rewritten = Vec::with_capacity(lines.len());

    for raw in &lines {
        let line = raw.trim_end();

        if let Some(span) = fields::field_span(&labels.build, line) {
            let old = parse_span(&labels.build, line, span)?;
            let mut updated = String::with_capacity(line.len() + 1);
            updated.push_str(&line[..span.start]);
            updated.push_str(&(old + 1).to_string());
            updated.push_str(&line[span.end..]);
            rewritten.push(updated);
        } else if let Some(prefix_end) = full_label_end(labels, line) {
            if let Some(payload) = quoted_payload(&line[prefix_end..]) {
                if version::parse_composed(&payload).is_none() {
                    warnings.push(RewriteWarning::StaleFullVersion {
                        payload: payload.clone(),
                    });
                }
                previous_full = Some(payload);
            }
            rewritten.push(regenerate_full_line(&line[..prefix_end], &composed));
        } else {
            rewritten.push(line.to_string());
        }
    }

    let mut output = String::with_capacity(content.len() + 1);
    for line in &rewritten {
        output.push_str(line);
        output.push('\n');
    }
    fs::write(path, output)
        .map_err(|e| VersionStampError::file_access(path.display().to_string(), e))?;

    Ok(RewriteOutcome {
        version: next,
        composed,
        previous_full,
        warnings,
    })
}

/// Rebuilds a full-version line from the text up to and including the
/// label: `<prefix>"<composed>" };`. The prior payload does not survive.
pub fn regenerate_full_line(prefix: &str, composed: &str) -> String {
    format!("{}\"{}\" }};", prefix, composed)
}

fn read_source(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .map_err(|e| VersionStampError::file_access(path.display().to_string(), e))
}

/// Byte offset just past the full-version label, or `None` when no full
/// label is configured or the line does not contain it.
fn full_label_end(labels: &LabelsConfig, line: &str) -> Option<usize> {
    let full_label = labels.full.as_deref()?;
    line.find(full_label).map(|pos| pos + full_label.len())
}

fn parse_span(label: &str, line: &str, span: fields::FieldSpan) -> Result<u32> {
    line[span.start..span.end].parse::<u32>().map_err(|_| {
        VersionStampError::malformed_field(format!(
            "'{}' payload is not an integer in line '{}'",
            label.trim_end(),
            line.trim()
        ))
    })
}

fn collect_fields(
    lines: &[&str],
    labels: &LabelsConfig,
    policy: MissingFieldPolicy,
) -> Result<(VersionFields, Vec<RewriteWarning>)> {
    let mut major = None;
    let mut minor = None;
    let mut patch = None;
    let mut build = None;

    for line in lines {
        if let Some(span) = fields::field_span(&labels.major, line) {
            major = Some(parse_span(&labels.major, line, span)?);
        }
        if let Some(span) = fields::field_span(&labels.minor, line) {
            minor = Some(parse_span(&labels.minor, line, span)?);
        }
        if let Some(span) = fields::field_span(&labels.patch, line) {
            patch = Some(parse_span(&labels.patch, line, span)?);
        }
        if let Some(span) = fields::field_span(&labels.build, line) {
            build = Some(parse_span(&labels.build, line, span)?);
        }
    }

    let mut warnings = Vec::new();
    let fields = VersionFields::new(
        resolve_field(major, &labels.major, policy, &mut warnings)?,
        resolve_field(minor, &labels.minor, policy, &mut warnings)?,
        resolve_field(patch, &labels.patch, policy, &mut warnings)?,
        resolve_field(build, &labels.build, policy, &mut warnings)?,
    );

    Ok((fields, warnings))
}

fn resolve_field(
    value: Option<u32>,
    label: &str,
    policy: MissingFieldPolicy,
    warnings: &mut Vec<RewriteWarning>,
) -> Result<u32> {
    match value {
        Some(v) => Ok(v),
        None => match policy {
            MissingFieldPolicy::DefaultZero => {
                warnings.push(RewriteWarning::MissingField {
                    label: label.to_string(),
                });
                Ok(0)
            }
            MissingFieldPolicy::Error => Err(VersionStampError::missing_field(format!(
                "label '{}' not found in file",
                label.trim_end()
            ))),
        },
    }
}

/// First double-quoted payload in `text`, quotes stripped.
fn quoted_payload(text: &str) -> Option<String> {
    if let Ok(re) = Regex::new(r#""([^"]*)""#) {
        if let Some(captures) = re.captures(text) {
            return captures.get(1).map(|m| m.as_str().to_string());
        }
    }
    None
}
