pub type Result<T> = std::result::Result<T, crate::error::Error>;

#[macro_export]
macro_rules! verify_arg {
    ($name:expr, $expr:expr) => {{
        let result = $expr;
        $crate::result::verify_arg(result, stringify!($name), stringify!($expr))?;
    }};
}

#[macro_export]
macro_rules! verify_data {
    ($name:expr, $expr:expr) => {{
        let result = $expr;
        $crate::result::verify_data(result, stringify!($name), stringify!($expr))?;
    }};
}

#[inline]
pub fn verify_arg(predicate: bool, name: &str, condition: &str) -> Result<()> {
    if predicate {
        Ok(())
    } else {
        invalid_arg(name, condition)
    }
}

#[inline]
pub fn verify_data(predicate: bool, name: &str, condition: &str) -> Result<()> {
    if predicate {
        Ok(())
    } else {
        invalid_format(name, condition)
    }
}

#[cold]
pub fn invalid_arg(name: &str, condition: &str) -> Result<()> {
    Err(crate::error::ErrorKind::InvalidArgument {
        name: name.to_string(),
        message: condition.to_string(),
    }
    .into())
}

#[cold]
pub fn invalid_format(name: &str, condition: &str) -> Result<()> {
    Err(crate::error::ErrorKind::InvalidFormat {
        element: name.to_string(),
        message: condition.to_string(),
    }
    .into())
}

#[cfg(test)]
mod tests {
    use crate::error::ErrorKind;

    fn check(len: u64) -> super::Result<u64> {
        verify_data!(len, len > 0);
        Ok(len)
    }

    fn check_arg(capacity: usize) -> super::Result<usize> {
        verify_arg!(capacity, capacity != 0);
        Ok(capacity)
    }

    #[test]
    fn test_verify_data() {
        assert_eq!(check(5).unwrap(), 5);
        let err = check(0).unwrap_err();
        match err.kind() {
            ErrorKind::InvalidFormat { element, message } => {
                assert_eq!(element, "len");
                assert_eq!(message, "len > 0");
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_verify_arg() {
        assert_eq!(check_arg(3).unwrap(), 3);
        assert!(matches!(
            check_arg(0).unwrap_err().kind(),
            ErrorKind::InvalidArgument { .. }
        ));
    }
}
