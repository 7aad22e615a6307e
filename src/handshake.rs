use core::fmt::Debug;

use crate::DivError;

/// The input pins of a divider, sampled on one clock edge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Inputs<T> {
    /// Synchronous reset. Overrides `enable` and `start`.
    pub reset: bool,
    /// Clock enable. When deasserted the divider holds every register as-is.
    pub enable: bool,
    /// One step pulse requesting a division. Only sampled while the divider is idle.
    pub start: bool,
    pub numerator: T,
    pub denominator: T,
}

impl<T: Default> Inputs<T> {
    /// An enabled clock edge with nothing else asserted.
    pub fn idle() -> Self {
        Inputs {
            enable: true,
            ..Default::default()
        }
    }

    /// An enabled clock edge that starts dividing `numerator` by `denominator`.
    pub fn start(numerator: T, denominator: T) -> Self {
        Inputs {
            reset: false,
            enable: true,
            start: true,
            numerator,
            denominator,
        }
    }

    pub fn reset() -> Self {
        Inputs {
            reset: true,
            ..Default::default()
        }
    }

    /// A clock edge with `enable` deasserted.
    pub fn stall() -> Self {
        Self::default()
    }
}

/// The registered outputs of a divider.
///
/// `quotient` and `remainder` hold the last successful result until the next one (or a reset).
/// `done` and `error` are pulses lasting a single step.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Outputs<T> {
    pub quotient: T,
    pub remainder: T,
    pub error: bool,
    pub done: bool,
}

impl<T: Copy> Outputs<T> {
    /// Returns `None` while `done` is not asserted, otherwise the result of the division that just
    /// finished.
    pub fn result(&self) -> Option<Result<(T, T), DivError>> {
        if !self.done {
            None
        } else if self.error {
            Some(Err(DivError::DivideByZero))
        } else {
            Some(Ok((self.quotient, self.remainder)))
        }
    }
}

/// A clock-stepped divider with a start/done/error handshake.
pub trait Divider {
    /// The integer type of the operands and results.
    type Int: Copy + Default + PartialEq + Debug;

    /// The operand width `N` in bits.
    const BITS: u32;

    /// Number of active steps from the step sampling `start` up to and including the step whose
    /// outputs have `done` asserted. Every one of the `N` iterations takes two steps, plus one
    /// step for loading the operands and one for presenting the result.
    const LATENCY: usize = 2 * Self::BITS as usize + 2;

    /// Same as `LATENCY`, but for a zero denominator.
    const ERROR_LATENCY: usize = 2;

    /// Advances the divider by one clock edge and returns the registered outputs after it.
    fn step(&mut self, inputs: &Inputs<Self::Int>) -> Outputs<Self::Int>;

    /// The registered outputs, as of the last clock edge.
    fn outputs(&self) -> Outputs<Self::Int>;

    /// Returns `true` if a `start` would be sampled on the next active step.
    fn is_idle(&self) -> bool;

    fn reset(&mut self) {
        self.step(&Inputs::reset());
    }

    /// Divides `numerator` by `denominator` through the handshake, clocking the divider until
    /// `done` is raised. A division that is already in flight is clocked to completion first,
    /// and its result discarded.
    fn divide(
        &mut self,
        numerator: Self::Int,
        denominator: Self::Int,
    ) -> Result<(Self::Int, Self::Int), DivError> {
        while !self.is_idle() {
            self.step(&Inputs::idle());
        }
        let mut outputs = self.step(&Inputs::start(numerator, denominator));
        loop {
            if let Some(result) = outputs.result() {
                return result
            }
            outputs = self.step(&Inputs::idle());
        }
    }
}
