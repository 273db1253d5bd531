//! Parser for `go mod graph` output.
//!
//! Each meaningful line holds a consumer identity and a dependency identity
//! separated by whitespace. Anything else (blank lines, headers, stray
//! diagnostics) is skipped.

use tracing::debug;

use super::types::Relationship;

/// Errors that can occur while parsing module graph text.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// An identity token contained more than one `@` separator.
    #[error("malformed module identity {token:?}: more than one '@'")]
    MalformedIdentity {
        /// The offending token, verbatim.
        token: String,
    },
}

/// Result type alias for parser operations.
pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a single line into a relationship.
///
/// Returns `Ok(None)` for lines that do not hold exactly two tokens.
///
/// # Example
///
/// ```
/// use modscope::parser::parse_line;
///
/// let rel = parse_line("app@v1.0.0 lib@v0.3.0").unwrap().unwrap();
/// assert_eq!(rel.upstream.module.as_str(), "lib");
///
/// assert!(parse_line("").unwrap().is_none());
/// ```
pub fn parse_line(line: &str) -> ParseResult<Option<Relationship>> {
    let mut tokens = line.split_whitespace();
    match (tokens.next(), tokens.next(), tokens.next()) {
        (Some(downstream), Some(upstream), None) => {
            Relationship::from_tokens(downstream, upstream).map(Some)
        }
        _ => Ok(None),
    }
}

/// Parses a whole `go mod graph` listing.
///
/// Relationships are returned in input order and are not deduplicated. The
/// first malformed identity aborts parsing.
///
/// # Example
///
/// ```
/// use modscope::parser::parse_str;
///
/// let output = "app@v1 libA@v1\nlibA@v1 libB@v2\n";
/// let rels = parse_str(output).unwrap();
/// assert_eq!(rels.len(), 2);
/// ```
pub fn parse_str(content: &str) -> ParseResult<Vec<Relationship>> {
    let mut relationships = Vec::new();
    let mut skipped = 0usize;

    for line in content.lines() {
        match parse_line(line)? {
            Some(rel) => relationships.push(rel),
            None => skipped += 1,
        }
    }

    if skipped > 0 {
        debug!(skipped, "skipped lines without exactly two identities");
    }
    Ok(relationships)
}

/// Parses pre-split `(downstream, upstream)` token pairs.
///
/// Records are held to the same rule as lines: each half must be exactly one
/// whitespace-delimited token, otherwise the record is skipped.
pub fn parse_records<I, S>(records: I) -> ParseResult<Vec<Relationship>>
where
    I: IntoIterator<Item = (S, S)>,
    S: AsRef<str>,
{
    let mut relationships = Vec::new();
    let mut skipped = 0usize;

    for (downstream, upstream) in records {
        match (single_token(downstream.as_ref()), single_token(upstream.as_ref())) {
            (Some(downstream), Some(upstream)) => {
                relationships.push(Relationship::from_tokens(downstream, upstream)?);
            }
            _ => skipped += 1,
        }
    }

    if skipped > 0 {
        debug!(skipped, "skipped records without exactly two identities");
    }
    Ok(relationships)
}

/// Returns the only whitespace-delimited token of `value`, if there is exactly one.
fn single_token(value: &str) -> Option<&str> {
    let mut tokens = value.split_whitespace();
    match (tokens.next(), tokens.next()) {
        (Some(token), None) => Some(token),
        _ => None,
    }
}
