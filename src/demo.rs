use std::{
    fmt::Display,
    io::{self, Write},
};

use num_integer::Integer;
use num_traits::Signed;

use crate::numbers::Rational;

/// Writes both operands, their sum, difference, product and quotient, then
/// how they compare.
pub fn report<W, T>(out: &mut W, lhs: Rational<T>, rhs: Rational<T>) -> io::Result<()>
where
    W: Write,
    T: Integer + Signed + Copy + Display,
{
    writeln!(out, "r1   = {lhs}")?;
    writeln!(out, "r2   = {rhs}")?;
    writeln!(out, "sum  = {}", lhs + rhs)?;
    writeln!(out, "diff = {}", lhs - rhs)?;
    writeln!(out, "prod = {}", lhs * rhs)?;
    match lhs / rhs {
        Ok(quot) => writeln!(out, "quot = {quot}")?,
        Err(err) => {
            log::error!("Failed to divide {lhs} by {rhs}: {err}");
            writeln!(out, "quot = error: {err}")?
        }
    }
    writeln!(out, "r1 == r2 : {}", lhs == rhs)?;
    writeln!(out, "r1 < r2  : {}", lhs < rhs)?;
    writeln!(out, "r1 > r2  : {}", lhs > rhs)?;
    Ok(())
}
