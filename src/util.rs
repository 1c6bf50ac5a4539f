//! Numeric helpers

use crate::error::UtilError;

/// Floored modulo: the result takes the sign of `m`
///
/// `modulo(-1, 5)` is `4`, where `%` would give `-1`.
///
/// # Panics
///
/// Panics if `m` is zero.
pub fn modulo(n: i64, m: i64) -> i64 {
    let r = n % m;
    if r != 0 && (r < 0) != (m < 0) {
        r + m
    } else {
        r
    }
}

/// Wrap `value` into `0..size`, e.g. for cycling through a result list
pub fn wrap_around(value: i64, size: i64) -> Result<i64, UtilError> {
    if size <= 0 {
        return Err(UtilError::InvalidArgument(
            "size may not be zero or negative".to_string(),
        ));
    }
    Ok(modulo(value, size))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_around() {
        assert_eq!(wrap_around(-1, 5), Ok(4));
        assert_eq!(wrap_around(5, 5), Ok(0));
        assert_eq!(wrap_around(3, 5), Ok(3));
        assert_eq!(wrap_around(-11, 5), Ok(4));
    }

    #[test]
    fn test_wrap_around_rejects_non_positive_size() {
        assert!(matches!(
            wrap_around(3, 0),
            Err(UtilError::InvalidArgument(_))
        ));
        assert!(wrap_around(3, -2).is_err());
    }

    #[test]
    fn test_modulo_sign_follows_divisor() {
        assert_eq!(modulo(7, 3), 1);
        assert_eq!(modulo(-7, 3), 2);
        assert_eq!(modulo(7, -3), -2);
        assert_eq!(modulo(-6, 3), 0);
    }
}
