//! Parsing of the WKT literals returned by the `wdt:P625` coordinate property
use std::num::ParseFloatError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WktError {
    #[error("unexpected WKT point: {0:?}")]
    UnexpectedPoint(String),
    #[error("invalid coordinate in WKT point {input:?}: {source}")]
    InvalidNumber {
        input: String,
        source: ParseFloatError,
    },
    #[error("coordinate is not a finite number in WKT point {0:?}")]
    NotFinite(String),
}

/// Parse a `Point(<lon> <lat>)` literal into `(longitude, latitude)`
///
/// Only the `Point(` prefix and `)` suffix are stripped, so other geometry types
/// are rejected by the field count rather than structurally.
pub fn parse_point(input: &str) -> Result<(f64, f64), WktError> {
    let inner = input.trim();
    let inner = inner.strip_prefix("Point(").unwrap_or(inner);
    let inner = inner.strip_suffix(')').unwrap_or(inner);

    match inner.split_whitespace().collect::<Vec<_>>().as_slice() {
        [lon, lat] => Ok((parse_coordinate(input, lon)?, parse_coordinate(input, lat)?)),
        _ => Err(WktError::UnexpectedPoint(input.to_owned())),
    }
}

fn parse_coordinate(input: &str, field: &str) -> Result<f64, WktError> {
    let value = field
        .parse::<f64>()
        .map_err(|source| WktError::InvalidNumber {
            input: input.to_owned(),
            source,
        })?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(WktError::NotFinite(input.to_owned()))
    }
}
