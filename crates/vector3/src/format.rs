//! Text form of `Vector3`: `Display` and `FromStr`

use std::fmt;
use std::num::ParseFloatError;
use std::str::FromStr;

use thiserror::Error;

use crate::vector::Vector3;

/// Delimiter pairs accepted around the components
const DELIMITERS: [(char, char); 2] = [('(', ')'), ('[', ']')];

/// Errors produced when parsing a `Vector3` from text
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseVector3Error {
    /// Input did not contain exactly three components
    #[error("expected 3 comma-separated components, found {found}")]
    ComponentCount {
        /// Number of components present in the input
        found: usize,
    },

    /// A component is not a valid `f32`
    #[error("component {index} is not a valid number")]
    InvalidComponent {
        /// Zero-based position of the offending component
        index: usize,
        /// Underlying float parse failure
        #[source]
        source: ParseFloatError,
    },

    /// An opening delimiter without its closing partner, or the reverse
    #[error("unbalanced delimiters around vector components")]
    UnbalancedDelimiters,
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(precision) => write!(
                f,
                "({:.*}, {:.*}, {:.*})",
                precision, self.x, precision, self.y, precision, self.z
            ),
            None => write!(f, "({}, {}, {})", self.x, self.y, self.z),
        }
    }
}

impl FromStr for Vector3 {
    type Err = ParseVector3Error;

    /// Parse `x, y, z`, optionally wrapped in `(...)` or `[...]`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let inner = strip_delimiters(s.trim())?;

        let parts: Vec<&str> = inner.split(',').collect();
        if parts.len() != 3 {
            return Err(ParseVector3Error::ComponentCount { found: parts.len() });
        }

        let mut components = [0.0_f32; 3];
        for (index, (slot, part)) in components.iter_mut().zip(&parts).enumerate() {
            *slot = part
                .trim()
                .parse()
                .map_err(|source| ParseVector3Error::InvalidComponent { index, source })?;
        }

        Ok(components.into())
    }
}

fn strip_delimiters(s: &str) -> Result<&str, ParseVector3Error> {
    for (open, close) in DELIMITERS {
        if let Some(inner) = s.strip_prefix(open).and_then(|rest| rest.strip_suffix(close)) {
            return Ok(inner);
        }
        if s.starts_with(open) || s.ends_with(close) {
            return Err(ParseVector3Error::UnbalancedDelimiters);
        }
    }
    Ok(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let v = Vector3::new(1.0, -2.5, 0.126);
        assert_eq!(v.to_string(), "(1, -2.5, 0.126)");
        assert_eq!(format!("{:.2}", v), "(1.00, -2.50, 0.13)");
    }

    #[test]
    fn test_parse_plain_and_delimited() {
        let expected = Vector3::new(1.0, 2.0, 3.0);

        assert_eq!("1, 2, 3".parse::<Vector3>(), Ok(expected));
        assert_eq!("(1,2,3)".parse::<Vector3>(), Ok(expected));
        assert_eq!("  [ 1.0 , 2.0 , 3.0 ]  ".parse::<Vector3>(), Ok(expected));
        assert_eq!("(-1e2, 0.5, inf)".parse::<Vector3>(), Ok(Vector3::new(-100.0, 0.5, f32::INFINITY)));
    }

    #[test]
    fn test_display_parses_back() {
        let values = [
            Vector3::new(0.1, -7.25, 1.0e-7),
            Vector3::new(f32::MAX, f32::MIN_POSITIVE, -0.0),
            Vector3::new(3.0, 4.0, 0.0).normalized(),
        ];

        for v in values {
            assert_eq!(v.to_string().parse::<Vector3>(), Ok(v));
        }
    }

    #[test]
    fn test_component_count_error() {
        assert_eq!(
            "1, 2".parse::<Vector3>(),
            Err(ParseVector3Error::ComponentCount { found: 2 })
        );
        assert_eq!(
            "(1, 2, 3, 4)".parse::<Vector3>(),
            Err(ParseVector3Error::ComponentCount { found: 4 })
        );
        assert_eq!(
            "".parse::<Vector3>(),
            Err(ParseVector3Error::ComponentCount { found: 1 })
        );
    }

    #[test]
    fn test_invalid_component_error() {
        let err = "1, two, 3".parse::<Vector3>().unwrap_err();

        match &err {
            ParseVector3Error::InvalidComponent { index, .. } => assert_eq!(*index, 1),
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(err.to_string(), "component 1 is not a valid number");
        assert!(std::error::Error::source(&err).is_some());

        assert!(matches!(
            "1, 2, ".parse::<Vector3>(),
            Err(ParseVector3Error::InvalidComponent { index: 2, .. })
        ));
    }

    #[test]
    fn test_unbalanced_delimiters_error() {
        for input in ["(1, 2, 3", "1, 2, 3]", "(1, 2, 3]", "[1, 2, 3)"] {
            assert_eq!(
                input.parse::<Vector3>(),
                Err(ParseVector3Error::UnbalancedDelimiters),
                "input: {input}"
            );
        }
    }
}
