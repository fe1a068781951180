pub mod config;
pub mod demo;
pub mod numbers;

pub use numbers::{Error, ParseError, Rational};
