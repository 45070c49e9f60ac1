use derive_more::{Deref, From};
use std::ops::{Add, AddAssign};

/// Number of bytes an encode call produced.
#[derive(From, Deref, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Default, Debug)]
pub struct WriteLen(usize);

impl WriteLen {
    pub fn new_manual(len: usize) -> Self {
        Self(len)
    }
}

impl Add for WriteLen {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}
impl AddAssign for WriteLen {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}
