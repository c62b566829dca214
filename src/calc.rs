//! Scientific calculator operations.

use crate::error::PracticumError;

/// Newton-Raphson iteration count for [`sqroot`].
pub const SQRT_ITERATIONS: usize = 20;
/// Largest factorial argument that still fits in an f64.
pub const MAX_FACTORIAL: i64 = 170;

pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

pub fn subtract(a: f64, b: f64) -> f64 {
    a - b
}

pub fn multiply(a: f64, b: f64) -> f64 {
    a * b
}

pub fn divide(a: f64, b: f64) -> Result<f64, PracticumError> {
    if b == 0.0 {
        return Err(PracticumError::DivideByZero);
    }
    Ok(a / b)
}

/// Power by repeated multiplication. A negative exponent returns the
/// reciprocal of the positive power.
pub fn power(base: f64, exponent: i32) -> f64 {
    let mut res = 1.0;
    for _ in 0..exponent.unsigned_abs() {
        res *= base;
    }
    if exponent < 0 {
        1.0 / res
    } else {
        res
    }
}

/// Square root by Newton-Raphson, seeded with the input itself.
pub fn sqroot(num: f64) -> Result<f64, PracticumError> {
    if num < 0.0 {
        return Err(PracticumError::NegativeOperand);
    }
    if num == 0.0 {
        return Ok(0.0);
    }
    let mut res = num;
    for _ in 0..SQRT_ITERATIONS {
        res = 0.5 * (res + num / res);
    }
    Ok(res)
}

/// Factorial as an f64 running product. Exact through 22!, representable
/// through 170!.
pub fn factorial(num: i64) -> Result<f64, PracticumError> {
    if num < 0 {
        return Err(PracticumError::NegativeOperand);
    }
    if num > MAX_FACTORIAL {
        return Err(PracticumError::FactorialLimit(MAX_FACTORIAL as u32));
    }
    let mut res = 1.0;
    for i in 2..=num {
        res *= i as f64;
    }
    Ok(res)
}
