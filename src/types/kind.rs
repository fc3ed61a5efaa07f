use serde::{Deserialize, Serialize};

/// Type tags reported by [`type_id`](super::type_id).
///
/// The numeric values are stable and can be stored or compared as plain
/// integers via [`TypeKind::id`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(i32)]
pub enum TypeKind {
    /// Any type without a registered tag.
    #[default]
    Unknown = 0,
    /// 8-bit character / integer.
    Char = 1,
    /// 16-bit integer.
    Short = 2,
    /// 32-bit integer.
    Int = 3,
    /// 64-bit integer.
    Long = 4,
    /// Single-precision float.
    Float = 5,
    /// Double-precision float.
    Double = 6,
    /// Raw pointer.
    Ptr = 7,
    /// Arbitrary-precision integer (numeric library).
    Integer = 8,
    /// Exact rational (numeric library).
    Rational = 9,
    /// Exact real (numeric library).
    Real = 10,
}

impl TypeKind {
    /// Integer value of the tag.
    #[inline]
    pub const fn id(self) -> i32 {
        self as i32
    }

    /// Looks up a tag by its integer value.
    pub const fn from_id(id: i32) -> Option<Self> {
        Some(match id {
            0 => Self::Unknown,
            1 => Self::Char,
            2 => Self::Short,
            3 => Self::Int,
            4 => Self::Long,
            5 => Self::Float,
            6 => Self::Double,
            7 => Self::Ptr,
            8 => Self::Integer,
            9 => Self::Rational,
            10 => Self::Real,
            _ => return None,
        })
    }

    /// Tag used for `isize`/`usize`: `Int` where they are as wide as `i32`,
    /// `Long` otherwise.
    pub const fn pointer_width_integer() -> Self {
        if core::mem::size_of::<isize>() == core::mem::size_of::<i32>() {
            Self::Int
        } else {
            Self::Long
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_roundtrip() {
        for id in 0..=10 {
            assert_eq!(TypeKind::from_id(id).map(TypeKind::id), Some(id));
        }
        assert_eq!(TypeKind::from_id(11), None);
        assert_eq!(TypeKind::from_id(-1), None);
    }

    #[test]
    fn test_pointer_width_integer() {
        #[cfg(target_pointer_width = "64")]
        assert_eq!(TypeKind::pointer_width_integer(), TypeKind::Long);
        #[cfg(target_pointer_width = "32")]
        assert_eq!(TypeKind::pointer_width_integer(), TypeKind::Int);
    }
}
