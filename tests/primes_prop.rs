use practicum::primes::{factorize, is_prime, primes_in_range, twin_primes};
use quickcheck::quickcheck;

quickcheck! {
    fn range_scan_matches_trial_division(lo: u16, span: u8) -> bool {
        let start = i64::from(lo % 2000);
        let end = start + i64::from(span);
        let primes = match primes_in_range(start, end) {
            Ok(primes) => primes,
            Err(_) => return false,
        };
        let expected: Vec<u32> = (start..=end)
            .filter(|&n| is_prime(n))
            .map(|n| n as u32)
            .collect();
        primes == expected
    }

    fn factor_product_restores_the_number(n: u16) -> bool {
        let n = i64::from(n) + 2;
        match factorize(n) {
            Ok(factors) => {
                let product: i64 = factors.iter().map(|&(p, e)| p.pow(e)).product();
                product == n && factors.iter().all(|&(p, _)| is_prime(p))
            }
            Err(_) => false,
        }
    }

    fn twin_pairs_are_prime_and_two_apart(lo: u8, span: u8) -> bool {
        let start = i64::from(lo);
        let end = start + i64::from(span);
        match twin_primes(start, end) {
            Ok(pairs) => pairs.iter().all(|&(a, b)| {
                b - a == 2 && is_prime(i64::from(a)) && is_prime(i64::from(b))
            }),
            Err(_) => false,
        }
    }
}
