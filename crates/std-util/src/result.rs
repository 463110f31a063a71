/// Unwraps the `Err` of a `Result`, panicking with the `Ok` value otherwise.
///
/// Extra arguments are formatted and appended to the panic message.
#[macro_export]
macro_rules! assert_err {
    ($e:expr $(, $($t:tt)* )?) => {
        match $e {
            Err(e) => e,
            actual => {
                use std::fmt::Write;
                let mut msg = format!("expected `Err`; actual={:?}", actual);

                $(
                    write!(msg, ", ").unwrap();
                    write!(msg, $($t)*).unwrap();
                )?

                panic!("{}", msg);
            }
        }
    };
}

/// Unwraps the `Ok` of a `Result`, panicking with the error otherwise.
#[macro_export]
macro_rules! assert_ok {
    ($e:expr $(, $($t:tt)* )?) => {
        match $e {
            Ok(v) => v,
            Err(e) => {
                use std::fmt::Write;
                let mut msg = format!("expected `Ok`; error={}", e);

                $(
                    write!(msg, ", ").unwrap();
                    write!(msg, $($t)*).unwrap();
                )?

                panic!("{}", msg);
            }
        }
    };
}

/// Asserts that a `Result` failed and that the error's display output
/// contains every given fragment. Evaluates to the error.
#[macro_export]
macro_rules! assert_err_contains {
    ($e:expr, $( $needle:expr ),+ $(,)?) => {{
        let err = $crate::assert_err!($e);
        let msg = err.to_string();
        $(
            assert!(
                msg.contains($needle),
                "error should contain `{}`, got: {}",
                $needle,
                msg
            );
        )+
        err
    }};
}
