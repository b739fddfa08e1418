// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Bessel functions of the first kind, integer order.
//!
//! `J_n(x)` is computed by Miller's backward recurrence
//!
//! ```text
//! J_{k-1}(x) = (2k / x) J_k(x) - J_{k+1}(x)
//! ```
//!
//! started well above `max(n, |x|)` from an arbitrary seed, then normalised
//! with the identity `J_0 + 2 Σ J_{2k} = 1`. Zeros of `J_n'` are bracketed
//! by a sign-change scan and refined by bisection.

use crate::error::{ModeError, ModeResult};

const RESCALE_ABOVE: f64 = 1e250;
const RESCALE_BY: f64 = 1e-250;
const SERIES_BELOW: f64 = 1e-8;

const SCAN_STEP: f64 = 0.1;
const BISECTION_TOLERANCE: f64 = 1e-14;
const BISECTION_STEPS: usize = 200;

/// Leading two terms of the power series, for tiny `x`.
fn small_argument(n: u32, x: f64) -> f64 {
    let half = 0.5 * x;
    let mut lead = 1.0;
    for k in 1..=n {
        lead *= half / k as f64;
    }
    lead * (1.0 - half * half / (n as f64 + 1.0))
}

/// `J_n(x)`.
///
/// `J_n(0)` is 1 for `n = 0` and 0 otherwise; `J_n(-x) = (-1)^n J_n(x)`.
pub fn bessel_j(n: u32, x: f64) -> f64 {
    if x == 0.0 {
        return if n == 0 { 1.0 } else { 0.0 };
    }
    let sign = if x < 0.0 && n % 2 == 1 { -1.0 } else { 1.0 };
    let x = x.abs();
    if x < SERIES_BELOW {
        return sign * small_argument(n, x);
    }

    let top = (n as f64).max(x);
    let start = 2 * ((top + 20.0 + (40.0 * top).sqrt()) / 2.0).floor() as usize;
    let start = start.max(n as usize + 2);

    let mut next = 0.0;
    let mut current = 1e-30;
    let mut even_sum = if start % 2 == 0 { current } else { 0.0 };
    let mut result = 0.0;
    for k in (1..=start).rev() {
        let previous = (2.0 * k as f64 / x) * current - next;
        next = current;
        current = previous;

        let order = k - 1;
        if order == n as usize {
            result = current;
        }
        if order > 0 && order % 2 == 0 {
            even_sum += current;
        }
        if current.abs() > RESCALE_ABOVE {
            current *= RESCALE_BY;
            next *= RESCALE_BY;
            result *= RESCALE_BY;
            even_sum *= RESCALE_BY;
        }
    }
    sign * result / (current + 2.0 * even_sum)
}

/// `J_n'(x)`.
pub fn bessel_j_prime(n: u32, x: f64) -> f64 {
    if n == 0 {
        -bessel_j(1, x)
    } else {
        0.5 * (bessel_j(n - 1, x) - bessel_j(n + 1, x))
    }
}

fn bisect<F: Fn(f64) -> f64>(f: F, mut lo: f64, mut hi: f64) -> f64 {
    let mut f_lo = f(lo);
    for _ in 0..BISECTION_STEPS {
        if hi - lo < BISECTION_TOLERANCE {
            break;
        }
        let mid = 0.5 * (lo + hi);
        let f_mid = f(mid);
        if f_mid == 0.0 {
            return mid;
        }
        if (f_mid < 0.0) == (f_lo < 0.0) {
            lo = mid;
            f_lo = f_mid;
        } else {
            hi = mid;
        }
    }
    0.5 * (lo + hi)
}

/// The first `count` positive zeros of `J_n'`, ascending.
///
/// # Examples
///
/// ```
/// use mode_search::special::derivative_zeros;
///
/// let zeros = derivative_zeros(1, 2).unwrap();
/// assert!((zeros[0] - 1.8411837813406593).abs() < 1e-12);
/// ```
pub fn derivative_zeros(n: u32, count: usize) -> ModeResult<Vec<f64>> {
    if count == 0 {
        return Err(ModeError::InvalidInput("zero count must be positive".to_string()));
    }
    let f = |x: f64| bessel_j_prime(n, x);

    let mut x = (0.5 * n as f64).max(0.5);
    // zeros of J_n' are roughly π apart, starting near n
    let limit = x + (count as f64 + n as f64 + 10.0) * 2.0 * std::f64::consts::PI;
    let mut f_x = f(x);
    let mut zeros = Vec::with_capacity(count);
    while zeros.len() < count {
        if x > limit {
            return Err(ModeError::Numerical(format!(
                "found {} of {} zeros of J_{}' below {}",
                zeros.len(),
                count,
                n,
                limit
            )));
        }
        let x_next = x + SCAN_STEP;
        let f_next = f(x_next);
        if f_next == 0.0 {
            zeros.push(x_next);
        } else if f_x != 0.0 && (f_x < 0.0) != (f_next < 0.0) {
            zeros.push(bisect(f, x, x_next));
        }
        x = x_next;
        f_x = f_next;
    }
    log::trace!("J_{}' zeros: {:?}", n, zeros);
    Ok(zeros)
}

/// The `m`-th (0-based) zero of `J_n'` used as a membrane mode frequency.
///
/// For `n = 0` the 0-th zero is 0 itself and `m ≥ 1` is the m-th positive
/// zero. For `n ≥ 1`, `m` indexes the positive zeros from 0.
pub fn bessel_derivative_zero(n: u32, m: usize) -> ModeResult<f64> {
    let zeros = match (n, m) {
        (0, 0) => return Ok(0.0),
        (0, m) => derivative_zeros(0, m)?,
        (n, m) => derivative_zeros(n, m + 1)?,
    };
    zeros
        .last()
        .copied()
        .ok_or_else(|| ModeError::Numerical(format!("no zero for J_{}'", n)))
}
