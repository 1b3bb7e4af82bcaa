use num_bigint::BigUint;

/// [Binomial coefficient][binomial] `C(n, k) = n! / (k! (n-k)!)`, computed exactly.
///
/// Zero when `k > n`.
///
/// ```text
/// C(n, k) = Π_{i=1}^{k} (n - k + i) / i
/// ```
///
/// Each partial product is itself a binomial coefficient, so every division is exact.
///
/// [binomial]: https://en.wikipedia.org/wiki/Binomial_coefficient
pub fn binomial(n: usize, k: usize) -> BigUint {
    if k > n {
        return BigUint::ZERO;
    }
    let k = k.min(n - k);
    (1..=k).fold(BigUint::from(1u32), |acc, i| acc * BigUint::from(n - k + i) / BigUint::from(i))
}
