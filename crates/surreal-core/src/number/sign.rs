/// Which side of zero a number sits on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Sign {
    Negative,
    Zero,
    Positive,
}

impl Sign {
    #[inline]
    pub fn is_non_negative(self) -> bool {
        !matches!(self, Sign::Negative)
    }

    #[inline]
    pub fn is_non_positive(self) -> bool {
        !matches!(self, Sign::Positive)
    }
}
