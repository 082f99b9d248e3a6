use log::debug;

/// Sum of two integers with two's-complement wraparound.
///
/// The fixture's host language wraps on overflow instead of signaling,
/// so the wrapping intrinsic is used rather than `+`.
pub fn add(x: i64, y: i64) -> i64 {
    x.wrapping_add(y)
}

/// The fixture program: two calls to `add`, the second fed by the first.
///
/// ```text
/// int a = 5;
/// int b = 10;
/// int result;
/// result = add(a, b);
/// result = add(result, 2);
/// return result;
/// ```
pub fn run_fixture() -> i64 {
    let a: i64 = 5;
    let b: i64 = 10;

    let mut result = add(a, b);
    debug!("call add({a}, {b}) -> {result}");

    result = add(result, 2);
    debug!("call add(result, 2) -> {result}");

    result
}
