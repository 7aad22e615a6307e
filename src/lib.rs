//! Clock-stepped integer dividers.
//!
//! Two independent state machines are provided, each advanced one clock edge at a time through
//! [`Divider::step`] with a start/done/error handshake:
//!
//! - a restoring divider for unsigned operands, whose results match `/` and `%`
//! - a non-restoring divider for signed operands, which produces some quotient and remainder
//!   satisfying `numerator == denominator * quotient + remainder` (wrapping at the operand width)
//!
//! Both take `2 * N + 2` active steps per division regardless of the operands, and report a zero
//! denominator through the `error` output two steps after `start`.
//!
//! The `impl_restoring` and `impl_non_restoring` macros generate the dividers for any width that
//! has a native integer type of twice the width. With the default `implement` feature, 8, 16, 32,
//! and 64 bit dividers are generated.

#[doc(hidden)]
pub use tracing;

mod error;
mod handshake;

#[macro_use]
mod restoring;

#[macro_use]
mod non_restoring;

#[macro_use]
mod test;

pub use error::DivError;
pub use handshake::{Divider, Inputs, Outputs};
pub use non_restoring::NonRestoringState;
pub use restoring::RestoringState;

#[cfg(feature = "implement")]
mod implement;

#[cfg(feature = "implement")]
pub use self::implement::*;
