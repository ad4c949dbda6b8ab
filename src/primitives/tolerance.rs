use float_next_after::NextAfter;

/// Absolute tolerance used for coordinate comparisons.
pub const EPSILON: f64 = 1e-9;

/// How many representable steps a domain is grown by in [`widen`].
pub const DOMAIN_ULPS: usize = 4;

pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= EPSILON * (1.0 + a.abs().max(b.abs()))
}

/// Grows the closed interval [lo, hi] by [`DOMAIN_ULPS`] representable
/// steps on each side.
///
/// Positions computed as `x0 + k * w` can land a few rounding steps outside a
/// domain they mathematically belong to; containment checks go through this.
pub fn widen(lo: f64, hi: f64) -> (f64, f64) {
    let mut lo = lo;
    let mut hi = hi;
    for _ in 0..DOMAIN_ULPS {
        lo = lo.next_after(f64::NEG_INFINITY);
        hi = hi.next_after(f64::INFINITY);
    }
    (lo, hi)
}

pub fn contains(lo: f64, hi: f64, x: f64) -> bool {
    let (lo, hi) = widen(lo, hi);
    lo <= x && x <= hi
}
