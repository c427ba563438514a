//! Order category: the fixed product-line enumeration.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Category of an order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Category {
    Traditional,
    Special,
    Sweet,
}

impl Category {
    /// All categories, in canonical order.
    pub const ALL: [Category; 3] = [Category::Traditional, Category::Special, Category::Sweet];
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Traditional => write!(f, "Traditional"),
            Category::Special => write!(f, "Special"),
            Category::Sweet => write!(f, "Sweet"),
        }
    }
}

impl FromStr for Category {
    type Err = Error;

    /// Case-insensitive parse of the canonical names.
    fn from_str(s: &str) -> Result<Self, Error> {
        match s.trim().to_ascii_lowercase().as_str() {
            "traditional" => Ok(Category::Traditional),
            "special" => Ok(Category::Special),
            "sweet" => Ok(Category::Sweet),
            _ => Err(Error::UnknownCategory(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(format!("{}", Category::Traditional), "Traditional");
        assert_eq!(format!("{}", Category::Special), "Special");
        assert_eq!(format!("{}", Category::Sweet), "Sweet");
    }

    #[test]
    fn parse_case_insensitive() {
        assert_eq!("sweet".parse::<Category>().unwrap(), Category::Sweet);
        assert_eq!("SPECIAL".parse::<Category>().unwrap(), Category::Special);
        assert_eq!(
            " Traditional ".parse::<Category>().unwrap(),
            Category::Traditional
        );
    }

    #[test]
    fn parse_unknown_fails() {
        let err = "savory".parse::<Category>().unwrap_err();
        assert!(matches!(err, Error::UnknownCategory(_)));
    }

    #[test]
    fn all_covers_every_variant() {
        assert_eq!(Category::ALL.len(), 3);
        for category in Category::ALL {
            let roundtrip: Category = category.to_string().parse().unwrap();
            assert_eq!(roundtrip, category);
        }
    }
}
