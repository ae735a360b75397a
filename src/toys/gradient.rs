//! Gradient generator

use rand::Rng;
use std::fmt;

/// A 24-bit colour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self(rng.random(), rng.random(), rng.random())
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

/// Two-stop linear gradient
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gradient {
    pub from: Rgb,
    pub to: Rgb,
    /// Degrees, 0..360
    pub angle: u16,
}

impl Default for Gradient {
    fn default() -> Self {
        Self {
            from: Rgb(0xFF, 0x5F, 0x6D),
            to: Rgb(0xFF, 0xC3, 0x71),
            angle: 45,
        }
    }
}

impl Gradient {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            from: Rgb::random(rng),
            to: Rgb::random(rng),
            angle: rng.random_range(0..360),
        }
    }

    /// CSS declaration for this gradient
    #[must_use]
    pub fn css(&self) -> String {
        format!(
            "background: linear-gradient({}deg, {}, {});",
            self.angle, self.from, self.to
        )
    }

    /// Linear interpolation between the two stops, `t` in [0, 1]
    #[must_use]
    pub fn sample(&self, t: f64) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (f64::from(a) + (f64::from(b) - f64::from(a)) * t).round() as u8;
        Rgb(
            mix(self.from.0, self.to.0),
            mix(self.from.1, self.to.1),
            mix(self.from.2, self.to.2),
        )
    }
}
