use std::{fmt, str::FromStr};

use num_integer::Integer;
use num_traits::Signed;
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

use crate::numbers::{Error, ParseError, Rational};

// always "num/den", integers included, so the output parses back
impl<T: fmt::Display> fmt::Display for Rational<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

impl<T> FromStr for Rational<T>
where
    T: Integer + Signed + Copy + FromStr,
{
    type Err = Error;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let Some((numerator, denominator)) = input.split_once('/') else {
            log::debug!("Rejected rational {input:?}: no separator");
            return Err(ParseError::MissingSeparator(input.to_string()).into());
        };
        let numerator = numerator.parse::<T>().map_err(|_| {
            log::debug!("Rejected rational {input:?}: bad numerator");
            ParseError::InvalidNumerator(numerator.to_string())
        })?;
        let denominator = denominator.parse::<T>().map_err(|_| {
            log::debug!("Rejected rational {input:?}: bad denominator");
            ParseError::InvalidDenominator(denominator.to_string())
        })?;
        Rational::new(numerator, denominator)
    }
}

impl<T> Rational<T>
where
    T: Integer + Signed + Copy + FromStr,
{
    /// Parses `<integer>/<integer>` with no surrounding whitespace.
    pub fn parse(input: &str) -> Result<Self, Error> {
        input.parse()
    }

    /// Replaces `self` with the parsed value. On error `self` is left as it was.
    pub fn parse_into(&mut self, input: &str) -> Result<(), Error> {
        *self = input.parse()?;
        Ok(())
    }
}

impl<T: fmt::Display> Serialize for Rational<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de, T> Deserialize<'de> for Rational<T>
where
    T: Integer + Signed + Copy + FromStr,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(de::Error::custom)
    }
}
