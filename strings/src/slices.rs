use thiserror::Error;

/// Failure modes for [`between_marker_and_last`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExtractError {
    /// The marker never occurs in the source string.
    #[error("marker `{0}` not found")]
    MarkerNotFound(String),
    /// The delimiter is absent, or only occurs before the marker ends.
    #[error("no `{0}` after the marker")]
    DelimiterNotFound(char),
}

/// Replace the first and last characters of `name`.
///
/// The interior is kept as-is, character-wise, so multibyte text is safe.
/// Names with fewer than two characters have no interior and collapse to
/// just the two replacement characters.
pub fn replace_ends(name: &str, first: char, last: char) -> String {
    let mut inner = name.chars();
    inner.next();
    inner.next_back();
    format!("{first}{}{last}", inner.as_str())
}

/// Slice `source` between the end of the first `marker` and the last
/// occurrence of `delimiter`, half-open.
///
/// `between_marker_and_last("www.google.com", "www.", '.')` is
/// `Ok("google")`.
pub fn between_marker_and_last<'a>(
    source: &'a str,
    marker: &str,
    delimiter: char,
) -> Result<&'a str, ExtractError> {
    let start = source
        .find(marker)
        .map(|at| at + marker.len())
        .ok_or_else(|| ExtractError::MarkerNotFound(marker.to_string()))?;
    let end = source
        .rfind(delimiter)
        .filter(|&at| at >= start)
        .ok_or(ExtractError::DelimiterNotFound(delimiter))?;
    Ok(&source[start..end])
}
