use std::fmt;

use crate::value::node::Value;

enum Piece<'a> {
    Text(&'static str),
    Part(&'a Value),
}

/// Bracket notation: `Empty` is `{}`, a pair is `{<left>, <right>}`.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut pending = vec![Piece::Part(self)];
        while let Some(piece) = pending.pop() {
            match piece {
                Piece::Text(s) => f.write_str(s)?,
                Piece::Part(Value::Empty) => f.write_str("{}")?,
                Piece::Part(Value::Pair(node)) => {
                    pending.push(Piece::Text("}"));
                    pending.push(Piece::Part(node.right()));
                    pending.push(Piece::Text(", "));
                    pending.push(Piece::Part(node.left()));
                    pending.push(Piece::Text("{"));
                }
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
