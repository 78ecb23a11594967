use glam::DVec2;
use sfml::graphics::Color;

use crate::error::{Error, Result};

/// Fraction of velocity kept after a wall bounce.
const RESTITUTION: f64 = 0.8;

/// A simulated circular point-mass.
///
/// Radius and mass are fixed at construction; position and velocity are
/// mutated each tick by [`crate::sim::Simulation`]. The color is only read
/// by the renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    position: DVec2,
    velocity: DVec2,
    radius: f64,
    mass: f64,
    color: Color,
}

impl Body {
    /// Create a body at rest.
    ///
    /// Errors with [`Error::InvalidParam`] if `radius` or `mass` is
    /// non-positive or non-finite, or if `position` is non-finite.
    pub fn new(position: DVec2, radius: f64, mass: f64, color: Color) -> Result<Self> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(Error::InvalidParam(format!(
                "radius must be finite and > 0, got {radius}"
            )));
        }
        if !mass.is_finite() || mass <= 0.0 {
            return Err(Error::InvalidParam(format!(
                "mass must be finite and > 0, got {mass}"
            )));
        }
        if !position.is_finite() {
            return Err(Error::InvalidParam("position must be finite".into()));
        }
        Ok(Self {
            position,
            velocity: DVec2::ZERO,
            radius,
            mass,
            color,
        })
    }

    /// Accumulate a force into velocity as an instantaneous increment for
    /// the current tick: `velocity += (fx, fy) / mass`.
    ///
    /// Not scaled by dt; velocity already stands for "velocity after one
    /// unit step of applied acceleration". Mass is finite and > 0 for the
    /// lifetime of the body, so the division stays finite for finite forces.
    pub fn apply_force(&mut self, fx: f64, fy: f64) {
        self.velocity.x += fx / self.mass;
        self.velocity.y += fy / self.mass;
    }

    /// Advance position by one explicit-Euler step: `position += velocity * dt`.
    pub fn integrate(&mut self, dt: f64) {
        self.position += self.velocity * dt;
    }

    /// Reverse the horizontal velocity, losing energy to the bounce.
    pub fn reflect_x(&mut self) {
        self.velocity.x = -self.velocity.x * RESTITUTION;
    }

    /// Reverse the vertical velocity, losing energy to the bounce.
    pub fn reflect_y(&mut self) {
        self.velocity.y = -self.velocity.y * RESTITUTION;
    }

    pub fn position(&self) -> DVec2 {
        self.position
    }

    pub fn velocity(&self) -> DVec2 {
        self.velocity
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn color(&self) -> Color {
        self.color
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn body_at(x: f64, y: f64) -> Body {
        Body::new(DVec2::new(x, y), 20.0, 2.0, Color::RED).expect("valid body")
    }

    #[test]
    fn new_body_starts_at_rest() -> Result<()> {
        let b = Body::new(DVec2::new(50.0, 50.0), 20.0, 2.0, Color::RED)?;
        assert_eq!(b.position(), DVec2::new(50.0, 50.0));
        assert_eq!(b.velocity(), DVec2::ZERO);
        assert_eq!(b.radius(), 20.0);
        assert_eq!(b.mass(), 2.0);
        assert_eq!(b.color(), Color::RED);
        Ok(())
    }

    #[test]
    fn non_positive_radius_rejected() {
        for radius in [0.0, -3.0, f64::NAN] {
            let err = Body::new(DVec2::ZERO, radius, 1.0, Color::RED).unwrap_err();
            assert!(err.to_string().contains("radius"));
        }
    }

    #[test]
    fn non_positive_mass_rejected() {
        for mass in [0.0, -1.0, f64::INFINITY] {
            let err = Body::new(DVec2::ZERO, 1.0, mass, Color::RED).unwrap_err();
            assert!(err.to_string().contains("mass"));
        }
    }

    #[test]
    fn force_is_divided_by_mass() {
        let mut b = body_at(0.0, 0.0);
        b.apply_force(4.0, 19.6);
        assert_abs_diff_eq!(b.velocity().x, 2.0);
        assert_abs_diff_eq!(b.velocity().y, 9.8);
    }

    #[test]
    fn gravity_increment_is_mass_independent() -> Result<()> {
        // applyForce(0, g * m) must raise vy by exactly g for any mass.
        let g = 9.8;
        for mass in [0.5, 2.0, 3.0] {
            let mut b = Body::new(DVec2::ZERO, 1.0, mass, Color::RED)?;
            b.apply_force(0.0, g * mass);
            assert_abs_diff_eq!(b.velocity().y, g, epsilon = 1e-12);
        }
        Ok(())
    }

    #[test]
    fn integration_is_linear_in_dt() {
        let mut b = body_at(10.0, 20.0);
        b.apply_force(6.0, -4.0); // velocity (3, -2)
        b.integrate(0.5);
        assert_abs_diff_eq!(b.position().x, 11.5);
        assert_abs_diff_eq!(b.position().y, 19.0);
    }

    #[test]
    fn zero_dt_integration_is_noop() {
        let mut b = body_at(10.0, 20.0);
        b.apply_force(6.0, -4.0);
        b.integrate(0.0);
        assert_eq!(b.position(), DVec2::new(10.0, 20.0));
    }

    #[test]
    fn reflection_flips_sign_and_damps() {
        let mut b = body_at(0.0, 0.0);
        b.apply_force(20.0, -10.0); // velocity (10, -5)
        b.reflect_x();
        assert_abs_diff_eq!(b.velocity().x, -8.0, epsilon = 1e-12);
        b.reflect_y();
        assert_abs_diff_eq!(b.velocity().y, 4.0, epsilon = 1e-12);
    }
}
