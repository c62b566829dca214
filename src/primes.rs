//! Prime analysis: sieve of Eratosthenes, trial division, factorization
//! and twin prime pairs. Range scans are capped at [`MAX_RANGE`].

use crate::error::PracticumError;

pub const MAX_RANGE: u32 = 10_000;

/// Sieve of Eratosthenes over `0..=limit`. Indices 0 and 1 are never prime.
pub fn sieve(limit: u32) -> Vec<bool> {
    let n = limit as usize;
    let mut is_prime = vec![true; n + 1];
    for flag in is_prime.iter_mut().take(2) {
        *flag = false;
    }
    let mut p = 2usize;
    while p * p <= n {
        if is_prime[p] {
            let mut i = p * p;
            while i <= n {
                is_prime[i] = false;
                i += p;
            }
        }
        p += 1;
    }
    is_prime
}

fn check_range(start: i64, end: i64) -> Result<(u32, u32), PracticumError> {
    if start < 0 || end > MAX_RANGE as i64 || start > end {
        return Err(PracticumError::RangeOutOfBounds(MAX_RANGE));
    }
    Ok((start as u32, end as u32))
}

/// All primes in `start..=end`, sieved.
pub fn primes_in_range(start: i64, end: i64) -> Result<Vec<u32>, PracticumError> {
    let (start, end) = check_range(start, end)?;
    let is_prime = sieve(end);
    Ok((start..=end).filter(|&i| is_prime[i as usize]).collect())
}

/// Trial division primality test. Anything below 2 is not prime.
pub fn is_prime(num: i64) -> bool {
    if num < 2 {
        return false;
    }
    let mut i = 2i64;
    while i * i <= num {
        if num % i == 0 {
            return false;
        }
        i += 1;
    }
    true
}

/// Ordered `(prime, exponent)` pairs whose product is `num`. Defined for
/// `num >= 2` only.
pub fn factorize(num: i64) -> Result<Vec<(i64, u32)>, PracticumError> {
    if num < 2 {
        return Err(PracticumError::RangeOutOfBounds(MAX_RANGE));
    }
    let mut temp = num;
    let mut factors = Vec::new();
    let mut i = 2i64;
    while i * i <= temp {
        let mut count = 0;
        while temp % i == 0 {
            count += 1;
            temp /= i;
        }
        if count > 0 {
            factors.push((i, count));
        }
        i += 1;
    }
    if temp > 1 {
        factors.push((temp, 1));
    }
    Ok(factors)
}

/// Pairs `(p, p + 2)` with both members prime and `p` inside the range.
pub fn twin_primes(start: i64, end: i64) -> Result<Vec<(u32, u32)>, PracticumError> {
    let (start, end) = check_range(start, end)?;
    let is_prime = sieve(end);
    let mut twins = Vec::new();
    if end >= 2 {
        for i in start..=end - 2 {
            if is_prime[i as usize] && is_prime[(i + 2) as usize] {
                twins.push((i, i + 2));
            }
        }
    }
    Ok(twins)
}
