use tracing::debug;

use crate::error::{Result, SurrealError};
use crate::value::node::Value;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Lean {
    Left,
    Right,
}

/// Accept exactly the chains that encode integers: `{{}, {}}` at the bottom,
/// and above it a run of pairs that all extend the same side.
pub fn validate_value(v: &Value) -> Result<()> {
    let mut lean: Option<Lean> = None;
    let mut level = 0usize;
    let mut cursor = v;

    loop {
        let Some((left, right)) = cursor.sides() else {
            return Err(reject(format!("bare empty at level {level}")));
        };
        let step = match (left.is_empty(), right.is_empty()) {
            (true, true) => return Ok(()),
            (false, false) => {
                return Err(reject(format!("both sides non-empty at level {level}")));
            }
            (false, true) => Lean::Left,
            (true, false) => Lean::Right,
        };
        if lean.is_some_and(|l| l != step) {
            return Err(reject(format!("chain changes direction at level {level}")));
        }
        lean = Some(step);
        cursor = match step {
            Lean::Left => left,
            Lean::Right => right,
        };
        level += 1;
    }
}

fn reject(reason: String) -> SurrealError {
    debug!(%reason, "rejecting value literal");
    SurrealError::MalformedValue(reason)
}
