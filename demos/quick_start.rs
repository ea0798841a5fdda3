//! Declaring returnable errors and letting the filter enforce the declaration.
//!
//! Run with: cargo run --example quick_start

use error_fence::{fence, sentinel, BoxError, Sentinel};

sentinel! {
    static SPECIFIC = "this is a very specific error";
    static OTHER = "some other error";
}

/// Declares that it only ever returns `SPECIFIC` or an anonymous error.
fn allowed_error() -> Result<(), BoxError> {
    fence!([SPECIFIC], {
        // Declared, so it comes back with identity intact.
        Err(SPECIFIC.clone().into())
    })
}

/// Declares `SPECIFIC` only; `OTHER` is undeclared here and leaves anonymized.
fn not_allowed_error() -> Result<(), BoxError> {
    fence!([SPECIFIC], { Err(OTHER.clone().into()) })
}

fn main() {
    let declared = allowed_error().unwrap_err();
    println!(
        "{}",
        declared
            .downcast_ref::<Sentinel>()
            .is_some_and(|s| s.same(&SPECIFIC))
    );

    let stray = not_allowed_error().unwrap_err();
    println!("{}", stray.downcast_ref::<Sentinel>().is_some());
    println!("{stray}");

    // Output:
    // true
    // false
    // some other error
}
