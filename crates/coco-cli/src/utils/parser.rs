use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("'{0}' is not a number.")]
    NotANumber(String),

    #[error("Consistency must lie between 0.0 and 1.0, got '{0}'.")]
    OutOfRange(String),
}

/// Parses a consistency threshold, a fraction of frames in `[0.0, 1.0]`.
pub fn parse_consistency(s: &str) -> Result<f64, ParseError> {
    let value: f64 = s
        .trim()
        .parse()
        .map_err(|_| ParseError::NotANumber(s.to_string()))?;
    if !(0.0..=1.0).contains(&value) {
        return Err(ParseError::OutOfRange(s.to_string()));
    }
    Ok(value)
}
