use std::{
    cmp::Ordering,
    ops::{Add, Div, Mul, Sub},
};

use num_integer::Integer;
use num_traits::{One, Signed, Zero};

pub mod error;
#[cfg(test)]
mod proptests;
mod text;

pub use error::{Error, ParseError};

/// A fraction kept in canonical form: positive denominator, numerator and
/// denominator coprime, zero stored as `0/1`.
///
/// Products of numerators and denominators are not checked for overflow, so
/// large operands overflow `T` the same way plain `T` arithmetic does.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rational<T> {
    numerator: T,
    denominator: T,
}

impl<T> Rational<T>
where
    T: Integer + Signed + Copy,
{
    pub fn new(numerator: T, denominator: T) -> Result<Self, Error> {
        if denominator.is_zero() {
            return Err(Error::ZeroDenominator);
        }
        Ok(Self::reduce(numerator, denominator))
    }

    pub fn from_integer(numerator: T) -> Self {
        Rational {
            numerator,
            denominator: T::one(),
        }
    }

    pub fn numerator(&self) -> T {
        self.numerator
    }

    pub fn denominator(&self) -> T {
        self.denominator
    }

    pub fn is_integer(&self) -> bool {
        self.denominator.is_one()
    }

    pub fn checked_div(self, rhs: Self) -> Result<Self, Error> {
        if rhs.is_zero() {
            return Err(Error::DivisionByZero);
        }
        Ok(Self::reduce(
            self.numerator * rhs.denominator,
            self.denominator * rhs.numerator,
        ))
    }

    // denominator must be non-zero
    fn reduce(numerator: T, denominator: T) -> Self {
        let (numerator, denominator) = if denominator.is_negative() {
            (-numerator, -denominator)
        } else {
            (numerator, denominator)
        };
        // gcd(0, d) == d, so zero always lands on 0/1
        let divisor = numerator.gcd(&denominator);
        Rational {
            numerator: numerator / divisor,
            denominator: denominator / divisor,
        }
    }
}

impl<T> Default for Rational<T>
where
    T: Integer + Signed + Copy,
{
    fn default() -> Self {
        Self::zero()
    }
}

impl<T> From<T> for Rational<T>
where
    T: Integer + Signed + Copy,
{
    fn from(numerator: T) -> Self {
        Self::from_integer(numerator)
    }
}

impl<T> Zero for Rational<T>
where
    T: Integer + Signed + Copy,
{
    fn zero() -> Self {
        Self::from_integer(T::zero())
    }

    fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }
}

impl<T> One for Rational<T>
where
    T: Integer + Signed + Copy,
{
    fn one() -> Self {
        Self::from_integer(T::one())
    }
}

impl<T> Add for Rational<T>
where
    T: Integer + Signed + Copy,
{
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::reduce(
            self.numerator * rhs.denominator + rhs.numerator * self.denominator,
            self.denominator * rhs.denominator,
        )
    }
}

impl<T> Sub for Rational<T>
where
    T: Integer + Signed + Copy,
{
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::reduce(
            self.numerator * rhs.denominator - rhs.numerator * self.denominator,
            self.denominator * rhs.denominator,
        )
    }
}

impl<T> Mul for Rational<T>
where
    T: Integer + Signed + Copy,
{
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self::reduce(
            self.numerator * rhs.numerator,
            self.denominator * rhs.denominator,
        )
    }
}

// division is the only operator that can fail, so it yields a Result
impl<T> Div for Rational<T>
where
    T: Integer + Signed + Copy,
{
    type Output = Result<Self, Error>;

    fn div(self, rhs: Self) -> Self::Output {
        self.checked_div(rhs)
    }
}

impl<T> Ord for Rational<T>
where
    T: Integer + Signed + Copy,
{
    // both denominators are positive, so cross-multiplying keeps the direction
    fn cmp(&self, other: &Self) -> Ordering {
        (self.numerator * other.denominator).cmp(&(other.numerator * self.denominator))
    }
}

impl<T> PartialOrd for Rational<T>
where
    T: Integer + Signed + Copy,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
