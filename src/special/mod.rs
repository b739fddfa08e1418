// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Special functions and quadrature used by the membrane fields.

pub mod bessel;
pub mod quadrature;

pub use bessel::{bessel_derivative_zero, bessel_j, bessel_j_prime, derivative_zeros};
pub use quadrature::{legendre, Rule};
