// crates/surreal-core/src/number/arith.rs

use std::ops::{Add, Mul, Neg, Sub};

use tracing::{debug, trace};

use crate::error::{Result, SurrealError};
use crate::number::surreal::Surreal;

impl Surreal {
    /// Mirror the chain; magnitude is kept, sign flips.
    pub fn negate(&self) -> Surreal {
        Surreal::from_chain(self.value().mirrored())
    }

    pub fn abs(&self) -> Surreal {
        if self.is_negative() {
            self.negate()
        } else {
            self.clone()
        }
    }

    /// Walk `other` to zero one unit at a time, moving a copy of `self` the
    /// opposite way. Linear in `|other|`.
    pub fn add(&self, other: &Surreal) -> Surreal {
        let mut first = self.clone();
        let mut second = other.clone();
        let upward = second.is_positive();
        while !second.is_zero() {
            if upward {
                first.increment();
                second.decrement();
            } else {
                first.decrement();
                second.increment();
            }
        }
        first
    }

    pub fn subtract(&self, other: &Surreal) -> Surreal {
        Surreal::add(self, &other.negate())
    }

    /// Repeated addition: `|other| - 1` additions of `self` onto `self`,
    /// mirrored at the end when `other` is negative.
    pub fn multiply(&self, other: &Surreal) -> Surreal {
        if self.is_zero() || other.is_zero() {
            return Surreal::zero();
        }
        let negative = other.is_negative();
        let mut remaining = other.clone();
        remaining.step_toward_zero();

        let mut running = self.clone();
        let mut additions = 0u64;
        while !remaining.is_zero() {
            running = Surreal::add(&running, self);
            remaining.step_toward_zero();
            additions += 1;
        }
        trace!(additions, negative, "multiply done");

        if negative {
            running.negate()
        } else {
            running
        }
    }

    /// Exact integer division.
    ///
    /// Builds multiples of `|other|` until one reaches `|self|`. Fails with
    /// [`SurrealError::DivideByZero`] for a zero divisor and with
    /// [`SurrealError::NotExactDivision`] when the multiples step past
    /// `|self|` without landing on it.
    ///
    /// The divisor is checked first, so `0 / 0` is `DivideByZero` rather
    /// than zero.
    pub fn divide(&self, other: &Surreal) -> Result<Surreal> {
        if other.is_zero() {
            debug!("divide by zero");
            return Err(SurrealError::DivideByZero);
        }
        if self.is_zero() {
            return Ok(Surreal::zero());
        }

        let flip = self.sign() != other.sign();
        let target = self.abs();
        let step = other.abs();

        let mut iter = Surreal::zero();
        let mut count = Surreal::zero();
        while target.greater_than(&iter) {
            iter = Surreal::add(&iter, &step);
            count.increment();
        }

        if !target.equal_to(&iter) {
            debug!("division overshot the dividend");
            return Err(SurrealError::NotExactDivision);
        }
        Ok(if flip { count.negate() } else { count })
    }
}

impl Neg for Surreal {
    type Output = Surreal;

    fn neg(self) -> Surreal {
        self.negate()
    }
}

impl Neg for &Surreal {
    type Output = Surreal;

    fn neg(self) -> Surreal {
        self.negate()
    }
}

// `std::ops::Add` is in scope in this module, so `x.add(y)` on an owned
// receiver resolves to the operator; the engine calls `Surreal::add` by path.
macro_rules! binary_op {
    ($trait:ident, $method:ident, $inner:ident) => {
        impl $trait<&Surreal> for &Surreal {
            type Output = Surreal;

            fn $method(self, rhs: &Surreal) -> Surreal {
                Surreal::$inner(self, rhs)
            }
        }

        impl $trait<Surreal> for Surreal {
            type Output = Surreal;

            fn $method(self, rhs: Surreal) -> Surreal {
                Surreal::$inner(&self, &rhs)
            }
        }

        impl $trait<&Surreal> for Surreal {
            type Output = Surreal;

            fn $method(self, rhs: &Surreal) -> Surreal {
                Surreal::$inner(&self, rhs)
            }
        }

        impl $trait<Surreal> for &Surreal {
            type Output = Surreal;

            fn $method(self, rhs: Surreal) -> Surreal {
                Surreal::$inner(self, &rhs)
            }
        }
    };
}

binary_op!(Add, add, add);
binary_op!(Sub, sub, subtract);
binary_op!(Mul, mul, multiply);
