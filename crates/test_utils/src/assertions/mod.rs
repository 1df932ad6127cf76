// Path: crates/test_utils/src/assertions/mod.rs
//! Assertion utilities for testing

/// Assert that a result is an error carrying the given stable error code.
#[macro_export]
macro_rules! assert_err_code {
    ($expr:expr, $code:expr) => {
        match $expr {
            Ok(val) => panic!("Expected Err with code {}, got Ok: {:?}", $code, val),
            Err(err) => {
                use ::flare_api::error::ErrorCode as _;
                assert_eq!(err.code(), $code, "unexpected error: {}", err);
                err
            }
        }
    };
}

/// Assert the balance of an address on a host.
#[macro_export]
macro_rules! assert_balance {
    ($host:expr, $address:expr, $expected:expr) => {{
        use ::flare_api::host::ExecutionHost as _;
        assert_eq!(
            $host.balance($address),
            ::alloy_primitives::U256::from($expected),
            "balance of {}",
            $address
        );
    }};
}
