// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Gauss–Legendre quadrature.

/// Quadrature rule: `∫_a^b f ≈ Σ w_i f(x_i)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    /// Nodes, ascending.
    pub x: Vec<f64>,
    /// Weights.
    pub w: Vec<f64>,
    /// Left endpoint.
    pub a: f64,
    /// Right endpoint.
    pub b: f64,
}

impl Rule {
    /// # Panics
    /// Panics if `x` and `w` have different lengths.
    pub fn new(x: Vec<f64>, w: Vec<f64>, a: f64, b: f64) -> Self {
        assert_eq!(x.len(), w.len(), "x and w must have the same length");
        Self { x, w, a, b }
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Map the rule affinely onto `[a, b]`.
    pub fn reseat(&self, a: f64, b: f64) -> Self {
        let scaling = (b - a) / (self.b - self.a);
        let midpoint_old = (self.b + self.a) * 0.5;
        let midpoint_new = (b + a) * 0.5;
        Self {
            x: self
                .x
                .iter()
                .map(|&xi| scaling * (xi - midpoint_old) + midpoint_new)
                .collect(),
            w: self.w.iter().map(|&wi| wi * scaling).collect(),
            a,
            b,
        }
    }

    pub fn integrate<F: Fn(f64) -> f64>(&self, f: F) -> f64 {
        self.x.iter().zip(&self.w).map(|(&xi, &wi)| wi * f(xi)).sum()
    }

    /// Tensor-product rule over `[self.a, self.b] × [inner.a, inner.b]`.
    pub fn integrate_2d<F: Fn(f64, f64) -> f64>(&self, inner: &Rule, f: F) -> f64 {
        self.integrate(|u| inner.integrate(|v| f(u, v)))
    }
}

/// Legendre polynomial `P_n(x)` and its derivative, by the three-term
/// recurrence.
fn legendre_polynomial_and_derivative(n: usize, x: f64) -> (f64, f64) {
    if n == 0 {
        return (1.0, 0.0);
    }
    let (mut p0, mut p1) = (1.0, x);
    let (mut dp0, mut dp1) = (0.0, 1.0);
    for k in 2..=n {
        let k = k as f64;
        let p2 = ((2.0 * k - 1.0) * x * p1 - (k - 1.0) * p0) / k;
        let dp2 = ((2.0 * k - 1.0) * (p1 + x * dp1) - (k - 1.0) * dp0) / k;
        p0 = p1;
        p1 = p2;
        dp0 = dp1;
        dp1 = dp2;
    }
    (p1, dp1)
}

/// `n`-point Gauss–Legendre rule on `[-1, 1]`. Exact for polynomials of
/// degree below `2n`. `n = 0` gives the empty rule.
pub fn legendre(n: usize) -> Rule {
    if n == 0 {
        return Rule::new(Vec::new(), Vec::new(), -1.0, 1.0);
    }
    if n == 1 {
        return Rule::new(vec![0.0], vec![2.0], -1.0, 1.0);
    }

    let mut nodes = Vec::with_capacity(n);
    for i in 0..n.div_ceil(2) {
        // Chebyshev-like starting guess, refined by Newton
        let mut z = (std::f64::consts::PI * (i as f64 + 0.75) / (n as f64 + 0.5)).cos();
        for _ in 0..100 {
            let (p, dp) = legendre_polynomial_and_derivative(n, z);
            let step = p / dp;
            z -= step;
            if step.abs() < 1e-15 {
                break;
            }
        }
        let (_, dp) = legendre_polynomial_and_derivative(n, z);
        let weight = 2.0 / ((1.0 - z * z) * dp * dp);

        nodes.push((-z, weight));
        if i != n - 1 - i {
            nodes.push((z, weight));
        }
    }
    nodes.sort_by(|a, b| a.0.total_cmp(&b.0));
    let (x, w) = nodes.into_iter().unzip();
    Rule::new(x, w, -1.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_weights_sum_to_interval_length() {
        for n in [1, 2, 5, 16, 40] {
            let rule = legendre(n);
            assert_eq!(rule.len(), n);
            assert_abs_diff_eq!(rule.w.iter().sum::<f64>(), 2.0, epsilon = 1e-13);
        }
    }

    #[test]
    fn test_nodes_sorted_and_symmetric() {
        let rule = legendre(7);
        assert!(rule.x.windows(2).all(|p| p[0] < p[1]));
        assert_abs_diff_eq!(rule.x[3], 0.0, epsilon = 1e-15);
        assert_abs_diff_eq!(rule.x[0], -rule.x[6], epsilon = 1e-15);
    }

    #[test]
    fn test_exact_for_polynomials() {
        let rule = legendre(4).reseat(0.0, 2.0);
        // ∫_0^2 x^7 dx = 32
        assert_abs_diff_eq!(rule.integrate(|x| x.powi(7)), 32.0, epsilon = 1e-12);
    }

    #[test]
    fn test_reseat_to_trig_integral() {
        let rule = legendre(20).reseat(0.0, std::f64::consts::PI);
        assert_abs_diff_eq!(rule.integrate(f64::sin), 2.0, epsilon = 1e-13);
    }

    #[test]
    fn test_two_dimensional() {
        let r = legendre(8).reseat(0.0, 1.0);
        let theta = legendre(8).reseat(0.0, 2.0);
        assert_abs_diff_eq!(r.integrate_2d(&theta, |u, v| u * v), 1.0, epsilon = 1e-13);
    }
}
