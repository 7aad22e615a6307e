use thiserror::Error;

/// The only condition a divider detects. Every other operand combination, including
/// `MIN / -1` for the signed unit, produces a (possibly wrapped) result.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error)]
pub enum DivError {
    #[error("attempt to divide by zero")]
    DivideByZero,
}
