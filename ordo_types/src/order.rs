use std::cmp::Ordering;

/// The direction in which an encoding sorts, relative to the natural order of the
/// underlying type.
///
/// Every output byte of every codec is XORed with [`Order::mask`], so a descending encoding
/// is the bytewise complement of the ascending one.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Default, Debug)]
pub enum Order {
    #[default]
    Ascending,
    Descending,
}

impl Order {
    pub const fn mask(self) -> u8 {
        match self {
            Self::Ascending => 0x00,
            Self::Descending => 0xFF,
        }
    }

    /// Map a natural comparison result into this order's direction.
    pub fn adjust(self, ord: Ordering) -> Ordering {
        match self {
            Self::Ascending => ord,
            Self::Descending => ord.reverse(),
        }
    }

    pub const fn apply(self, byte: u8) -> u8 {
        byte ^ self.mask()
    }

    pub fn apply_all(self, bytes: &mut [u8]) {
        if self == Self::Ascending {
            return;
        }
        for byte in bytes.iter_mut() {
            *byte ^= 0xFF;
        }
    }
}
