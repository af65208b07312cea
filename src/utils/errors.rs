use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolyError {
    #[error("Polynomial division by zero: the divisor has no nonzero term")]
    DivisionByZero,
}
