// crates/surreal-core/src/number/compare.rs

use std::cmp::Ordering;

use tracing::warn;

use crate::error::{Result, SurrealError};
use crate::number::sign::Sign;
use crate::number::surreal::Surreal;

/// Step both operands toward zero in lockstep until one of them arrives.
/// Both must stay on the `lean` side of zero the whole way.
fn race(first: &mut Surreal, second: &mut Surreal, lean: Sign) -> Result<()> {
    while !first.is_zero() && !second.is_zero() {
        if first.sign() != lean || second.sign() != lean {
            warn!(?lean, "operand left its side of zero mid-race");
            return Err(SurrealError::UnhandledComparison);
        }
        first.step_toward_zero();
        second.step_toward_zero();
    }
    Ok(())
}

impl Surreal {
    /// `self <= other`, decided by sign and then by racing toward zero.
    ///
    /// Cost is linear in the smaller magnitude. Fails only when the sign
    /// analysis meets a state no well-formed chain produces.
    pub fn try_less_or_equal(&self, other: &Surreal) -> Result<bool> {
        let (a, b) = (self.sign(), other.sign());
        if a.is_non_positive() && b.is_non_negative() {
            return Ok(true);
        }
        if a.is_non_negative() && b.is_non_positive() {
            return Ok(false);
        }

        let mut first = self.clone();
        let mut second = other.clone();
        match (a, b) {
            (Sign::Positive, Sign::Positive) => {
                race(&mut first, &mut second, Sign::Positive)?;
                Ok(first.is_zero())
            }
            (Sign::Negative, Sign::Negative) => {
                race(&mut first, &mut second, Sign::Negative)?;
                Ok(second.is_zero())
            }
            _ => {
                warn!(?a, ?b, "comparison fell through sign analysis");
                Err(SurrealError::UnhandledComparison)
            }
        }
    }

    pub fn less_or_equal(&self, other: &Surreal) -> bool {
        match self.try_less_or_equal(other) {
            Ok(le) => le,
            Err(e) => panic!("{e}"),
        }
    }

    pub fn greater_or_equal(&self, other: &Surreal) -> bool {
        other.less_or_equal(self)
    }

    pub fn less_than(&self, other: &Surreal) -> bool {
        !self.greater_or_equal(other)
    }

    pub fn greater_than(&self, other: &Surreal) -> bool {
        !self.less_or_equal(other)
    }

    pub fn equal_to(&self, other: &Surreal) -> bool {
        self.less_or_equal(other) && self.greater_or_equal(other)
    }
}

impl PartialEq for Surreal {
    fn eq(&self, other: &Surreal) -> bool {
        self.equal_to(other)
    }
}

impl Eq for Surreal {}

impl PartialOrd for Surreal {
    fn partial_cmp(&self, other: &Surreal) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Surreal {
    fn cmp(&self, other: &Surreal) -> Ordering {
        match (self.less_or_equal(other), self.greater_or_equal(other)) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Less,
            _ => Ordering::Greater,
        }
    }
}
