#[macro_export]
macro_rules! assert_ok {
    ( $expression:expr ) => {{
        let result = $expression;
        match result {
            Ok(result) => result,
            Err(error) => {
                panic!(
                    "Operation '{}' should be successful but it failed with: {}",
                    stringify!($expression),
                    error
                );
            }
        }
    }};
}

#[macro_export]
macro_rules! assert_renders {
    ($builder:expr, $expected:expr) => {
        let actual = $builder.render();
        let expected: String = $expected.into();
        assert_eq!(
            actual, expected,
            "Rendered code mismatch\n--- actual ---\n{}\n--- expected ---\n{}",
            actual, expected
        );
    };
}
