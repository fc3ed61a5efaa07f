use core::cmp::Ordering;

/// Three-way comparison built from `<` alone.
///
/// Returns `-1` if `x < y`, `+1` if `y < x`, and `0` otherwise. Any type with
/// `PartialOrd` is comparable; if its `<` is not a strict weak order the result
/// is not one either.
#[inline]
pub fn compare<T: PartialOrd + ?Sized>(x: &T, y: &T) -> i32 {
    if x < y {
        -1
    } else if y < x {
        1
    } else {
        0
    }
}

/// Maps a three-way result onto [`Ordering`].
#[inline]
pub const fn ordering_of(result: i32) -> Ordering {
    if result < 0 {
        Ordering::Less
    } else if result > 0 {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compare_basic() {
        assert_eq!(compare(&1, &2), -1);
        assert_eq!(compare(&2, &1), 1);
        assert_eq!(compare(&2, &2), 0);
        assert_eq!(compare("abc", "abd"), -1);
    }

    #[test]
    fn test_unordered_floats_compare_equal() {
        assert_eq!(compare(&f64::NAN, &1.0), 0);
        assert_eq!(compare(&1.0, &f64::NAN), 0);
    }

    #[test]
    fn test_ordering_of() {
        assert_eq!(ordering_of(-7), Ordering::Less);
        assert_eq!(ordering_of(0), Ordering::Equal);
        assert_eq!(ordering_of(3), Ordering::Greater);
    }
}
