use thiserror::Error;

pub type Result<T> = std::result::Result<T, SurrealError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SurrealError {
    #[error("divide by zero")]
    DivideByZero,

    /// The quotient is not a whole number; there is no fractional form to fall back to.
    #[error("division is not exact")]
    NotExactDivision,

    /// Comparison reached a sign combination no well-formed chain can produce.
    #[error("unhandled surreal comparison")]
    UnhandledComparison,

    #[error("malformed value: {0}")]
    MalformedValue(String),
}
