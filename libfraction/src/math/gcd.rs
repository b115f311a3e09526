use num_traits::{PrimInt, Unsigned};

/// Calculates the GCD for (u, v) ∈ (N, N).
///
/// `gcd(0, k) = k`, so `gcd(0, 0) = 0`.
pub fn gcd<N: Unsigned + PrimInt>(u: N, v: N) -> N {
    euclidean_gcd(u, v)
}

/// The [Euclidean GCD] algorithm, in its iterative swap-and-mod form.
///
/// Terminates in O(log min(u, v)) iterations.
///
/// [Euclidean GCD]: https://en.wikipedia.org/wiki/Euclidean_algorithm
fn euclidean_gcd<N: Unsigned + PrimInt>(mut u: N, mut v: N) -> N {
    let mut t;
    while !v.is_zero() {
        t = v;
        v = u % v;
        u = t;
    }
    u
}

#[cfg(feature = "benchmark-internals")]
pub fn _euclidean_gcd<N: Unsigned + PrimInt>(u: N, v: N) -> N {
    euclidean_gcd(u, v)
}
