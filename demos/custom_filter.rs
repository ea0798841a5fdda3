//! Replacing the default anonymizing policy with a wrapping one.
//!
//! Run with: cargo run --example custom_filter

use error_fence::{sentinel, BoxError, ReturnFilter};

sentinel! {
    static KNOWN = "known failure";
}

/// Miss transform that wraps instead of anonymizing.
fn wrap_miss(err: BoxError) -> BoxError {
    format!("filtered: {err}").into()
}

fn demo_custom(filter: &ReturnFilter, input: BoxError) -> Result<(), BoxError> {
    filter.scope(&[&KNOWN], || Err(input))
}

fn main() {
    let filter = ReturnFilter::passthrough().with_miss(wrap_miss);

    let err = demo_custom(&filter, "some random error".into()).unwrap_err();
    println!("{err}");

    let err = demo_custom(&filter, KNOWN.clone().into()).unwrap_err();
    println!("{err}");

    // Output:
    // filtered: some random error
    // known failure
}
