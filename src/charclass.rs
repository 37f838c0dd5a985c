//! Character classes of the sortable alphabet and their bucket layout.

/// Padding byte appended to short words. It collates below every other byte.
pub const SENTINEL: u8 = b'\0';

/// Number of distinct sortable bytes (1 + 10 + 26 + 26).
pub const N_BUCKETS: usize = 63;

/// Disjoint partitions of the sortable alphabet, ordered by collation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CharClass {
    Empty,
    Digit,
    Upper,
    Lower,
}

impl CharClass {
    /// All classes in collation order.
    pub const ALL: [CharClass; 4] = [Self::Empty, Self::Digit, Self::Upper, Self::Lower];

    /// Returns the class of `byte`, or `None` if it is outside the alphabet.
    pub const fn of(byte: u8) -> Option<Self> {
        match byte {
            SENTINEL => Some(Self::Empty),
            b'0'..=b'9' => Some(Self::Digit),
            b'A'..=b'Z' => Some(Self::Upper),
            b'a'..=b'z' => Some(Self::Lower),
            _ => None,
        }
    }

    /// First byte of the class range.
    pub const fn first(self) -> u8 {
        match self {
            Self::Empty => SENTINEL,
            Self::Digit => b'0',
            Self::Upper => b'A',
            Self::Lower => b'a',
        }
    }

    /// Number of bytes in the class.
    pub const fn size(self) -> usize {
        match self {
            Self::Empty => 1,
            Self::Digit => 10,
            Self::Upper | Self::Lower => 26,
        }
    }

    /// Index of the first bucket of the class.
    pub const fn offset(self) -> usize {
        match self {
            Self::Empty => 0,
            Self::Digit => 1,
            Self::Upper => 11,
            Self::Lower => 37,
        }
    }
}

/// Maps `byte` to its bucket, or `None` if it is outside the alphabet.
#[inline]
pub fn bucket_index(byte: u8) -> Option<usize> {
    let class = CharClass::of(byte)?;
    Some(class.offset() + (byte - class.first()) as usize)
}

/// Inverse of [`bucket_index`].
pub fn bucket_byte(index: usize) -> Option<u8> {
    CharClass::ALL
        .iter()
        .find(|class| class.offset() <= index && index < class.offset() + class.size())
        .map(|class| class.first() + (index - class.offset()) as u8)
}
