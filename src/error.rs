use thiserror::Error;

/// Crate-wide error type. Display strings are user facing: the menus print
/// them behind an `Error: ` prefix, so they carry no trailing punctuation.
#[derive(Error, Debug)]
pub enum PracticumError {
    /// Division with a zero divisor.
    #[error("Cannot divide by zero")]
    DivideByZero,

    /// Negative input to an operation defined on non-negative values.
    #[error("Negative numbers not allowed for this operation")]
    NegativeOperand,

    /// Factorial argument beyond the f64 ceiling.
    #[error("Number too large for factorial (max {0})")]
    FactorialLimit(u32),

    /// Negative argument to a recursive/iterative comparison.
    #[error("Operation not defined for negative values")]
    UndefinedForNegative,

    /// Unit code outside the selected category.
    #[error("Invalid unit selected")]
    InvalidUnit,

    /// Range endpoint outside the supported window.
    #[error("Invalid input or out of range (max {0})")]
    RangeOutOfBounds(u32),

    /// Board size of zero rejected by the solver.
    #[error("Board size must be greater than 0")]
    BoardTooSmall,

    /// Board size beyond the solver limit.
    #[error("Board size too large (Max is {0})")]
    BoardTooLarge(usize),

    /// Lookup by id found nothing.
    #[error("Record not found")]
    RecordNotFound,

    /// Malformed on-disk data.
    #[error("parse error: {0}")]
    Parse(String),

    /// Propagated I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
