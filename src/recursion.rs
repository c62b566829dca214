//! Recursive and iterative twins of four arithmetic operations.
//!
//! Each variant reports the work it did: the recursive side counts every
//! call including the base case, the iterative side counts loop passes.
//! The counts are the interesting output; the values just have to agree.

use crate::error::PracticumError;

/// Computed value plus the calls or iterations spent on it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OpResult {
    pub value: f64,
    pub count: u64,
}

fn factorial_steps(n: i64, count: &mut u64) -> f64 {
    *count += 1;
    if n <= 1 {
        return 1.0;
    }
    n as f64 * factorial_steps(n - 1, count)
}

pub fn factorial_recursive(n: i64) -> Result<OpResult, PracticumError> {
    if n < 0 {
        return Err(PracticumError::UndefinedForNegative);
    }
    let mut count = 0;
    let value = factorial_steps(n, &mut count);
    Ok(OpResult { value, count })
}

pub fn factorial_iterative(n: i64) -> Result<OpResult, PracticumError> {
    if n < 0 {
        return Err(PracticumError::UndefinedForNegative);
    }
    let mut res = OpResult { value: 1.0, count: 0 };
    for i in 2..=n {
        res.value *= i as f64;
        res.count += 1;
    }
    Ok(res)
}

fn fibonacci_steps(n: i64, count: &mut u64) -> f64 {
    *count += 1;
    if n <= 1 {
        return n as f64;
    }
    fibonacci_steps(n - 1, count) + fibonacci_steps(n - 2, count)
}

/// Term n reports F(n-1) with F(0) = 0, so the first term is 0. Values
/// below 1 short-circuit to 0 without touching the counter.
pub fn fibonacci_recursive(n: i64) -> OpResult {
    if n < 1 {
        return OpResult { value: 0.0, count: 0 };
    }
    let mut count = 0;
    let value = fibonacci_steps(n - 1, &mut count);
    OpResult { value, count }
}

pub fn fibonacci_iterative(n: i64) -> OpResult {
    if n < 2 {
        return OpResult { value: 0.0, count: 0 };
    }
    let mut a = 0.0;
    let mut b = 1.0;
    let mut count = 0;
    for _ in 2..n {
        let next = a + b;
        a = b;
        b = next;
        count += 1;
    }
    OpResult { value: b, count }
}

fn sum_steps(n: i64, count: &mut u64) -> f64 {
    *count += 1;
    if n <= 0 {
        return 0.0;
    }
    n as f64 + sum_steps(n - 1, count)
}

pub fn sum_natural_recursive(n: i64) -> Result<OpResult, PracticumError> {
    if n < 0 {
        return Err(PracticumError::UndefinedForNegative);
    }
    let mut count = 0;
    let value = sum_steps(n, &mut count);
    Ok(OpResult { value, count })
}

pub fn sum_natural_iterative(n: i64) -> Result<OpResult, PracticumError> {
    if n < 0 {
        return Err(PracticumError::UndefinedForNegative);
    }
    let mut res = OpResult { value: 0.0, count: 0 };
    for i in 1..=n {
        res.value += i as f64;
        res.count += 1;
    }
    Ok(res)
}

fn power_steps(base: f64, exp: i64, count: &mut u64) -> f64 {
    *count += 1;
    if exp == 0 {
        return 1.0;
    }
    base * power_steps(base, exp - 1, count)
}

pub fn power_recursive(base: f64, exp: i64) -> Result<OpResult, PracticumError> {
    if exp < 0 {
        return Err(PracticumError::UndefinedForNegative);
    }
    let mut count = 0;
    let value = power_steps(base, exp, &mut count);
    Ok(OpResult { value, count })
}

pub fn power_iterative(base: f64, exp: i64) -> Result<OpResult, PracticumError> {
    if exp < 0 {
        return Err(PracticumError::UndefinedForNegative);
    }
    let mut res = OpResult { value: 1.0, count: 0 };
    for _ in 0..exp {
        res.value *= base;
        res.count += 1;
    }
    Ok(res)
}
