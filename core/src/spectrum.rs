//! RGB Spectrum

use crate::error::Error;
use crate::math::Float;
use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign};
use std::str::FromStr;

/// An RGB reflectance triple.
///
/// Arithmetic never clamps; channel ranges are only checked by an explicit
/// [`Spectrum::validate`] call, which reflectance-model constructors invoke on
/// every user-supplied reflectivity at configuration time. Equality is exact
/// per-channel comparison with no tolerance; the reciprocity check relies on
/// this.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Spectrum {
    /// Red channel.
    pub r: Float,

    /// Green channel.
    pub g: Float,

    /// Blue channel.
    pub b: Float,
}

impl Spectrum {
    /// Creates a new `Spectrum` from channel values.
    ///
    /// * `r` - Red channel.
    /// * `g` - Green channel.
    /// * `b` - Blue channel.
    pub fn new(r: Float, g: Float, b: Float) -> Self {
        Self { r, g, b }
    }

    /// Returns a black `Spectrum`.
    pub fn black() -> Self {
        Self::default()
    }

    /// Returns true if all channels lie in `[0, 1]`.
    pub fn is_valid(&self) -> bool {
        (0.0..=1.0).contains(&self.r)
            && (0.0..=1.0).contains(&self.g)
            && (0.0..=1.0).contains(&self.b)
    }

    /// Fails with [`Error::InvalidSpectrum`] when a channel lies outside
    /// `[0, 1]`.
    pub fn validate(&self) -> Result<(), Error> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(Error::InvalidSpectrum(self.to_string()))
        }
    }

    /// Returns the average of the channel values, used wherever a single
    /// energy figure is needed.
    pub fn to_scalar(&self) -> Float {
        (self.r + self.g + self.b) / 3.0
    }

    /// Multiplies each channel by a scalar in place.
    ///
    /// * `scalar` - The scaling factor.
    pub fn mul(&mut self, scalar: Float) {
        self.r *= scalar;
        self.g *= scalar;
        self.b *= scalar;
    }

    /// Divides each channel by a scalar in place.
    ///
    /// * `scalar` - The divisor.
    pub fn div(&mut self, scalar: Float) {
        self.r /= scalar;
        self.g /= scalar;
        self.b /= scalar;
    }

    /// Adds a scalar to each channel in place.
    ///
    /// * `scalar` - The value to add.
    pub fn add(&mut self, scalar: Float) {
        self.r += scalar;
        self.g += scalar;
        self.b += scalar;
    }

    /// Adds another spectrum channel-wise in place.
    ///
    /// * `other` - The spectrum to add.
    pub fn add_spectrum(&mut self, other: &Spectrum) {
        self.r += other.r;
        self.g += other.g;
        self.b += other.b;
    }
}

impl From<[Float; 3]> for Spectrum {
    /// Creates a `Spectrum` from an `[r, g, b]` array.
    ///
    /// * `c` - The channel values.
    fn from(c: [Float; 3]) -> Self {
        Self::new(c[0], c[1], c[2])
    }
}

impl From<Spectrum> for [Float; 3] {
    /// Returns the channel values as an `[r, g, b]` array.
    ///
    /// * `s` - The spectrum.
    fn from(s: Spectrum) -> Self {
        [s.r, s.g, s.b]
    }
}

impl Mul<Float> for Spectrum {
    type Output = Spectrum;

    /// Scale each channel and return the result.
    ///
    /// * `f` - The scaling factor.
    fn mul(self, f: Float) -> Self::Output {
        Self::Output::new(self.r * f, self.g * f, self.b * f)
    }
}

impl MulAssign<Float> for Spectrum {
    /// Scale each channel and assign the result.
    ///
    /// * `f` - The scaling factor.
    fn mul_assign(&mut self, f: Float) {
        Spectrum::mul(self, f);
    }
}

impl Div<Float> for Spectrum {
    type Output = Spectrum;

    /// Divide each channel and return the result.
    ///
    /// * `f` - The divisor.
    fn div(self, f: Float) -> Self::Output {
        Self::Output::new(self.r / f, self.g / f, self.b / f)
    }
}

impl DivAssign<Float> for Spectrum {
    /// Divide each channel and assign the result.
    ///
    /// * `f` - The divisor.
    fn div_assign(&mut self, f: Float) {
        Spectrum::div(self, f);
    }
}

impl Add for Spectrum {
    type Output = Spectrum;

    /// Add another spectrum channel-wise and return the result.
    ///
    /// * `other` - The spectrum to add.
    fn add(self, other: Self) -> Self::Output {
        Self::Output::new(self.r + other.r, self.g + other.g, self.b + other.b)
    }
}

impl AddAssign for Spectrum {
    /// Add another spectrum channel-wise and assign the result.
    ///
    /// * `other` - The spectrum to add.
    fn add_assign(&mut self, other: Self) {
        self.add_spectrum(&other);
    }
}

impl fmt::Display for Spectrum {
    /// Formats the spectrum as `r,g,b`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.r, self.g, self.b)
    }
}

impl FromStr for Spectrum {
    type Err = Error;

    /// Parses a spectrum from its `r,g,b` textual form. The round trip
    /// through `Display` is exact.
    ///
    /// * `s` - The string to parse.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut channels = [0.0 as Float; 3];
        let mut parts = s.split(',');
        for (i, channel) in channels.iter_mut().enumerate() {
            let part = parts
                .next()
                .ok_or_else(|| Error::MissingProperty(format!("spectrum channel {i}")))?;
            *channel = part
                .trim()
                .parse::<Float>()
                .map_err(|_| Error::MissingProperty(format!("spectrum channel {i}")))?;
        }
        Ok(Spectrum::from(channels))
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn validity_boundaries() {
        assert!(Spectrum::new(0.0, 0.0, 0.0).is_valid());
        assert!(Spectrum::new(1.0, 1.0, 1.0).is_valid());
        assert!(!Spectrum::new(-0.001, 0.5, 0.5).is_valid());
        assert!(!Spectrum::new(0.5, 1.001, 0.5).is_valid());
        assert!(!Spectrum::new(0.5, 0.5, f32::NAN).is_valid());
    }

    #[test]
    fn validate_reports_invalid_spectrum() {
        assert!(Spectrum::new(0.2, 0.4, 0.8).validate().is_ok());

        let err = Spectrum::new(1.5, 0.0, 0.0).validate().unwrap_err();
        assert!(matches!(err, Error::InvalidSpectrum(_)));
    }

    #[test]
    fn to_scalar_averages_channels() {
        assert_eq!(Spectrum::new(0.3, 0.6, 0.9).to_scalar(), 0.6);
    }

    #[test]
    fn in_place_arithmetic() {
        let mut s = Spectrum::new(0.25, 0.5, 0.75);
        Spectrum::mul(&mut s, 2.0);
        assert_eq!(s, Spectrum::new(0.5, 1.0, 1.5));

        Spectrum::div(&mut s, 2.0);
        assert_eq!(s, Spectrum::new(0.25, 0.5, 0.75));

        Spectrum::add(&mut s, 1.0);
        assert_eq!(s, Spectrum::new(1.25, 1.5, 1.75));

        s.add_spectrum(&Spectrum::new(0.25, 0.25, 0.25));
        assert_eq!(s, Spectrum::new(1.5, 1.75, 2.0));
    }

    #[test]
    fn arithmetic_does_not_clamp() {
        let mut s = Spectrum::new(0.9, 0.9, 0.9);
        Spectrum::mul(&mut s, 10.0);
        assert_eq!(s, Spectrum::new(9.0, 9.0, 9.0));
        assert!(!s.is_valid());
    }

    #[test]
    fn display_round_trip() {
        let s = Spectrum::new(0.25, 0.5, 0.75);
        let parsed = s.to_string().parse::<Spectrum>().unwrap();
        assert_eq!(parsed, s);
    }

    #[test]
    fn parse_rejects_short_input() {
        let err = "0.1,0.2".parse::<Spectrum>().unwrap_err();
        assert!(matches!(err, Error::MissingProperty(_)));
    }

    proptest! {
        #[test]
        fn scalar_mul_matches_in_place(
            r in 0.0..1.0f32, g in 0.0..1.0f32, b in 0.0..1.0f32,
            f in -10.0..10.0f32
        ) {
            let s = Spectrum::new(r, g, b);
            let mut t = s;
            Spectrum::mul(&mut t, f);
            prop_assert_eq!(s * f, t);
        }

        #[test]
        fn add_is_channel_wise(
            r in 0.0..1.0f32, g in 0.0..1.0f32, b in 0.0..1.0f32,
            r2 in 0.0..1.0f32, g2 in 0.0..1.0f32, b2 in 0.0..1.0f32
        ) {
            let sum = Spectrum::new(r, g, b) + Spectrum::new(r2, g2, b2);
            prop_assert_eq!(sum, Spectrum::new(r + r2, g + g2, b + b2));
        }
    }
}
