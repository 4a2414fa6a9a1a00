// error.rs

use thiserror::Error;

/// Everything that can go wrong while parsing or evaluating one line.
/// All variants are recoverable: the session reports them and reads the
/// next line.
#[derive(Clone, PartialEq, Eq, Debug, Error)]
pub enum CalcError {
    #[error("'{0}' is not a number")]
    NotANumber(String),

    #[error("expected an operand, found end of line")]
    MissingOperand,

    #[error("expected end of line, found '{0}'")]
    TrailingInput(String),

    #[error("'{0}' is not a valid history reference")]
    InvalidReference(String),

    #[error("${index} is out of range, history holds {len} entries")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("division by zero")]
    DivisionByZero,

    #[error("factorial of negative number {0}")]
    NegativeFactorial(i64),

    #[error("arithmetic overflow")]
    Overflow,
}
