// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Other plate fields: circular membrane modes, a standing wave over time,
//! the radial sinc surface and a frequency response curve.

pub mod polar;
pub mod response;
pub mod standing;
pub mod surface;

pub use polar::{default_profile, mode_table, ModeCell, PolarGrid, PolarMode};
pub use response::{frequency_response, ResponseCurve};
pub use standing::{Frame, StandingWave};
pub use surface::{radial_sinc, sinc_surface};
