// crates/surreal-core/src/value/node.rs

use std::rc::Rc;

/// Raw `{left, right}` structure underneath every surreal number.
///
/// The type admits arbitrary trees. Only one-sided chains are numbers; see
/// [`crate::validate::validate_value`] and [`crate::Surreal::from_value`].
#[derive(Clone, Default)]
pub enum Value {
    /// "Nothing simpler on this side." Also terminates every chain.
    #[default]
    Empty,
    Pair(Rc<Node>),
}

/// Shared pair cell. Immutable once built; copies of a [`Value`] alias it.
pub struct Node {
    left: Value,
    right: Value,
}

impl Node {
    #[inline]
    pub fn left(&self) -> &Value {
        &self.left
    }

    #[inline]
    pub fn right(&self) -> &Value {
        &self.right
    }
}

impl Value {
    #[inline]
    pub fn empty() -> Value {
        Value::Empty
    }

    #[inline]
    pub fn pair(left: Value, right: Value) -> Value {
        Value::Pair(Rc::new(Node { left, right }))
    }

    /// `{{}, {}}`: both sides empty.
    #[inline]
    pub fn zero() -> Value {
        Value::pair(Value::Empty, Value::Empty)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, Value::Empty)
    }

    /// Both sides, or `None` for `Empty`.
    #[inline]
    pub fn sides(&self) -> Option<(&Value, &Value)> {
        match self {
            Value::Empty => None,
            Value::Pair(node) => Some((&node.left, &node.right)),
        }
    }

    /// Left side; `Empty` has an empty left side.
    #[inline]
    pub fn left(&self) -> Value {
        self.sides().map(|(l, _)| l.clone()).unwrap_or_default()
    }

    /// Right side; `Empty` has an empty right side.
    #[inline]
    pub fn right(&self) -> Value {
        self.sides().map(|(_, r)| r.clone()).unwrap_or_default()
    }

    /// Number of left links followed before reaching `Empty`.
    pub fn depth(&self) -> usize {
        let mut n = 0;
        let mut cursor = self;
        while let Value::Pair(node) = cursor {
            n += 1;
            cursor = &node.left;
        }
        n
    }

    /// `self.depth() > other.depth()`, walking both left spines in lockstep so
    /// the cost is bounded by the shorter one.
    pub fn deeper_than(&self, other: &Value) -> bool {
        let (mut a, mut b) = (self, other);
        loop {
            match (a, b) {
                (Value::Empty, _) => return false,
                (Value::Pair(_), Value::Empty) => return true,
                (Value::Pair(x), Value::Pair(y)) => {
                    a = &x.left;
                    b = &y.left;
                }
            }
        }
    }

    /// Swap left and right at every level.
    pub fn mirrored(&self) -> Value {
        enum Step<'a> {
            Visit(&'a Value),
            Join,
        }

        let mut work = vec![Step::Visit(self)];
        let mut done: Vec<Value> = Vec::new();
        while let Some(step) = work.pop() {
            match step {
                Step::Visit(Value::Empty) => done.push(Value::Empty),
                Step::Visit(Value::Pair(node)) => {
                    work.push(Step::Join);
                    work.push(Step::Visit(&node.left));
                    work.push(Step::Visit(&node.right));
                }
                Step::Join => {
                    // right was visited first, so the mirrored left sits on top.
                    let new_right = done.pop().unwrap_or_default();
                    let new_left = done.pop().unwrap_or_default();
                    done.push(Value::pair(new_left, new_right));
                }
            }
        }
        done.pop().unwrap_or_default()
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Value) -> bool {
        let mut pending = vec![(self, other)];
        while let Some(pair) = pending.pop() {
            match pair {
                (Value::Empty, Value::Empty) => {}
                (Value::Pair(x), Value::Pair(y)) => {
                    if Rc::ptr_eq(x, y) {
                        continue;
                    }
                    pending.push((&x.left, &y.left));
                    pending.push((&x.right, &y.right));
                }
                _ => return false,
            }
        }
        true
    }
}

impl Eq for Value {}

// Chains can be far deeper than the native stack, so unlink them iteratively.
impl Drop for Node {
    fn drop(&mut self) {
        if self.left.is_empty() && self.right.is_empty() {
            return;
        }
        let mut pending = vec![
            std::mem::take(&mut self.left),
            std::mem::take(&mut self.right),
        ];
        while let Some(value) = pending.pop() {
            if let Value::Pair(rc) = value {
                if let Ok(mut node) = Rc::try_unwrap(rc) {
                    pending.push(std::mem::take(&mut node.left));
                    pending.push(std::mem::take(&mut node.right));
                }
            }
        }
    }
}
