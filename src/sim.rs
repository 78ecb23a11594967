//! Fixed-timestep update loop for a set of non-interacting bodies.

use log::trace;

use crate::body::Body;
use crate::error::{Error, Result};

/// Owns the bodies and the constant downward acceleration applied to them.
///
/// Body order is irrelevant to the physics but is preserved as draw order.
/// Bodies never interact with each other; each one only feels gravity and
/// the viewport edges.
#[derive(Debug)]
pub struct Simulation {
    bodies: Vec<Body>,
    gravity: f64,
}

impl Simulation {
    /// Errors with [`Error::InvalidParam`] if `gravity` is non-finite.
    pub fn new(bodies: Vec<Body>, gravity: f64) -> Result<Self> {
        if !gravity.is_finite() {
            return Err(Error::InvalidParam(format!(
                "gravity must be finite, got {gravity}"
            )));
        }
        Ok(Self { bodies, gravity })
    }

    /// Read-only view for the renderer, in draw order.
    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    /// Advance every body by one tick: apply gravity, integrate, then
    /// reflect off the viewport edges.
    ///
    /// The edge test runs per axis and never clamps position back inside
    /// the viewport, so a fast body can overshoot an edge and stay drawn
    /// out of bounds for a frame before the reversed velocity brings it
    /// back. A viewport smaller than a body reflects it on every tick.
    ///
    /// Errors with [`Error::InvalidParam`] if `dt` is negative or
    /// non-finite, or if either viewport dimension is non-positive or
    /// non-finite. Validation happens before any body is touched, so a
    /// failed call leaves the simulation unchanged.
    pub fn step(&mut self, dt: f64, viewport_width: f64, viewport_height: f64) -> Result<()> {
        if !dt.is_finite() || dt < 0.0 {
            return Err(Error::InvalidParam(format!(
                "dt must be finite and >= 0, got {dt}"
            )));
        }
        if !viewport_width.is_finite() || viewport_width <= 0.0 {
            return Err(Error::InvalidParam(format!(
                "viewport width must be finite and > 0, got {viewport_width}"
            )));
        }
        if !viewport_height.is_finite() || viewport_height <= 0.0 {
            return Err(Error::InvalidParam(format!(
                "viewport height must be finite and > 0, got {viewport_height}"
            )));
        }

        for (i, body) in self.bodies.iter_mut().enumerate() {
            body.apply_force(0.0, self.gravity * body.mass());
            body.integrate(dt);

            let position = body.position();
            let radius = body.radius();
            if position.x - radius < 0.0 || position.x + radius > viewport_width {
                body.reflect_x();
                trace!("body {i} reflected on x axis");
            }
            if position.y - radius < 0.0 || position.y + radius > viewport_height {
                body.reflect_y();
                trace!("body {i} reflected on y axis");
            }
        }

        Ok(())
    }
}
