// crates/surreal-core/src/number/convert.rs

use std::fmt;

use tracing::trace;

use crate::number::surreal::Surreal;

impl Surreal {
    /// `k` successor (or `|k|` predecessor) steps from zero. Linear in `|k|`.
    pub fn from_integer(k: i64) -> Surreal {
        let mut surreal = Surreal::zero();
        let steps = k.unsigned_abs();
        if k > 0 {
            for _ in 0..steps {
                surreal.increment();
            }
        } else {
            for _ in 0..steps {
                surreal.decrement();
            }
        }
        trace!(k, "built chain");
        surreal
    }

    /// Count the unit steps back to zero.
    pub fn to_integer(&self) -> i64 {
        let mut n = self.clone();
        let mut i = 0i64;
        if n.is_negative() {
            while !n.is_zero() {
                n.increment();
                i -= 1;
            }
        } else {
            while !n.is_zero() {
                n.decrement();
                i += 1;
            }
        }
        i
    }

    /// Bracket notation of the underlying chain. Not meant to be parsed back.
    pub fn to_display_string(&self) -> String {
        self.value().to_string()
    }
}

impl From<i64> for Surreal {
    fn from(k: i64) -> Self {
        Surreal::from_integer(k)
    }
}

impl From<&Surreal> for i64 {
    fn from(s: &Surreal) -> Self {
        s.to_integer()
    }
}

impl From<Surreal> for i64 {
    fn from(s: Surreal) -> Self {
        s.to_integer()
    }
}

impl fmt::Display for Surreal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.value(), f)
    }
}

impl fmt::Debug for Surreal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Surreal").field(&self.to_integer()).finish()
    }
}
