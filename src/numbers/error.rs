#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Missing '/' separator in {0:?}")]
    MissingSeparator(String),
    #[error("Invalid numerator: {0:?}")]
    InvalidNumerator(String),
    #[error("Invalid denominator: {0:?}")]
    InvalidDenominator(String),
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Denominator cannot be zero")]
    ZeroDenominator,
    #[error("Division by zero rational")]
    DivisionByZero,
    #[error("Parse error: {0}")]
    ParseError(#[from] ParseError),
}
