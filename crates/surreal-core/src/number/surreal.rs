// crates/surreal-core/src/number/surreal.rs

use crate::error::Result;
use crate::number::sign::Sign;
use crate::validate::validate_value;
use crate::value::node::Value;

/// A signed integer held as a one-sided surreal chain.
///
/// Left chains are positive, right chains negative, and the chain length is
/// the magnitude. Every constructor keeps that shape, so the raw [`Value`]
/// inside is always well formed.
///
/// Cloning aliases the structure. [`Surreal::increment`] and
/// [`Surreal::decrement`] rebind `self` to a new chain and never touch the
/// shared cells, so clones stay independent.
#[derive(Clone)]
pub struct Surreal {
    value: Value,
}

impl Surreal {
    /// `{{}, {}}`.
    pub fn zero() -> Surreal {
        Surreal {
            value: Value::zero(),
        }
    }

    /// Wrap a hand-built structure after checking that it is an integer chain.
    pub fn from_value(value: Value) -> Result<Surreal> {
        validate_value(&value)?;
        Ok(Surreal { value })
    }

    /// Callers guarantee `value` is already a well-formed chain.
    #[inline]
    pub(crate) fn from_chain(value: Value) -> Surreal {
        Surreal { value }
    }

    #[inline]
    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn into_value(self) -> Value {
        self.value
    }

    #[inline]
    fn sides(&self) -> (&Value, &Value) {
        // A bare `Empty` is never stored; its sides are empty.
        match &self.value {
            Value::Pair(node) => (node.left(), node.right()),
            Value::Empty => (&self.value, &self.value),
        }
    }

    pub fn is_zero(&self) -> bool {
        match self.value.sides() {
            Some((l, r)) => l.is_empty() && r.is_empty(),
            None => false,
        }
    }

    /// The left side is deeper than the right.
    pub fn is_positive(&self) -> bool {
        let (l, r) = self.sides();
        l.deeper_than(r)
    }

    pub fn is_negative(&self) -> bool {
        !self.is_positive() && !self.is_zero()
    }

    pub fn sign(&self) -> Sign {
        if self.is_zero() {
            Sign::Zero
        } else if self.is_positive() {
            Sign::Positive
        } else {
            Sign::Negative
        }
    }

    /// One more: grow a left chain, or peel one level off a right chain.
    pub fn successor(&self) -> Surreal {
        match self.sign() {
            Sign::Zero | Sign::Positive => {
                Surreal::from_chain(Value::pair(self.value.clone(), Value::Empty))
            }
            Sign::Negative => Surreal::from_chain(self.sides().1.clone()),
        }
    }

    /// One less: grow a right chain, or peel one level off a left chain.
    pub fn predecessor(&self) -> Surreal {
        match self.sign() {
            Sign::Zero | Sign::Negative => {
                Surreal::from_chain(Value::pair(Value::Empty, self.value.clone()))
            }
            Sign::Positive => Surreal::from_chain(self.sides().0.clone()),
        }
    }

    pub fn increment(&mut self) {
        *self = self.successor();
    }

    pub fn decrement(&mut self) {
        *self = self.predecessor();
    }

    /// Move one unit toward zero. No-op at zero.
    pub(crate) fn step_toward_zero(&mut self) {
        match self.sign() {
            Sign::Positive => self.decrement(),
            Sign::Negative => self.increment(),
            Sign::Zero => {}
        }
    }
}

impl Default for Surreal {
    fn default() -> Self {
        Surreal::zero()
    }
}
