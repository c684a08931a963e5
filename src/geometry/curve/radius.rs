/// Shape of a single harmonic term.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wave {
    /// `amplitude * cos(frequency * theta)`
    Cos,
    /// `amplitude * sin(frequency * theta)`
    Sin,
}

/// One weighted sinusoid of a [`RadiusProfile`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Harmonic {
    /// Weight of the term.
    pub amplitude: f64,
    /// Angular frequency multiplying `theta`.
    pub frequency: f64,
    /// Cosine or sine.
    pub wave: Wave,
}

impl Harmonic {
    /// Creates a cosine term `amplitude * cos(frequency * theta)`.
    #[must_use]
    pub fn cos(amplitude: f64, frequency: f64) -> Self {
        Self {
            amplitude,
            frequency,
            wave: Wave::Cos,
        }
    }

    /// Creates a sine term `amplitude * sin(frequency * theta)`.
    #[must_use]
    pub fn sin(amplitude: f64, frequency: f64) -> Self {
        Self {
            amplitude,
            frequency,
            wave: Wave::Sin,
        }
    }

    fn value(&self, theta: f64) -> f64 {
        let phase = self.frequency * theta;
        match self.wave {
            Wave::Cos => self.amplitude * phase.cos(),
            Wave::Sin => self.amplitude * phase.sin(),
        }
    }

    fn derivative(&self, theta: f64) -> f64 {
        let phase = self.frequency * theta;
        let k = self.amplitude * self.frequency;
        match self.wave {
            Wave::Cos => -k * phase.sin(),
            Wave::Sin => k * phase.cos(),
        }
    }

    fn second_derivative(&self, theta: f64) -> f64 {
        // Both waves satisfy f'' = -frequency^2 * f.
        -self.frequency * self.frequency * self.value(theta)
    }
}

/// Polar radius function `r(theta) = offset + sum(terms)`.
///
/// An immutable description of the curve shape. The radius and its first two
/// derivatives are all evaluated in closed form.
#[derive(Debug, Clone, PartialEq)]
pub struct RadiusProfile {
    offset: f64,
    terms: Vec<Harmonic>,
}

impl RadiusProfile {
    /// Creates a profile from a constant offset and a list of harmonic terms.
    #[must_use]
    pub fn new(offset: f64, terms: Vec<Harmonic>) -> Self {
        Self { offset, terms }
    }

    /// The closed "blot" curve:
    /// `r = 1 + 0.3cos(2t) + 0.2sin(3t) + 0.1cos(7t) + 0.05sin(11t)`.
    #[must_use]
    pub fn blot() -> Self {
        Self::new(
            1.0,
            vec![
                Harmonic::cos(0.3, 2.0),
                Harmonic::sin(0.2, 3.0),
                Harmonic::cos(0.1, 7.0),
                Harmonic::sin(0.05, 11.0),
            ],
        )
    }

    /// Returns the constant offset.
    #[must_use]
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Returns the harmonic terms.
    #[must_use]
    pub fn terms(&self) -> &[Harmonic] {
        &self.terms
    }

    /// Evaluates `r(theta)`.
    #[must_use]
    pub fn radius(&self, theta: f64) -> f64 {
        self.offset + self.terms.iter().map(|h| h.value(theta)).sum::<f64>()
    }

    /// Evaluates `dr/dtheta`.
    #[must_use]
    pub fn radius_derivative(&self, theta: f64) -> f64 {
        self.terms.iter().map(|h| h.derivative(theta)).sum()
    }

    /// Evaluates `d2r/dtheta2`.
    #[must_use]
    pub fn radius_second_derivative(&self, theta: f64) -> f64 {
        self.terms.iter().map(|h| h.second_derivative(theta)).sum()
    }

    /// Element-wise [`radius`](Self::radius), preserving order and length.
    #[must_use]
    pub fn radii(&self, thetas: &[f64]) -> Vec<f64> {
        thetas.iter().map(|&t| self.radius(t)).collect()
    }

    /// Element-wise [`radius_derivative`](Self::radius_derivative).
    #[must_use]
    pub fn radius_derivatives(&self, thetas: &[f64]) -> Vec<f64> {
        thetas.iter().map(|&t| self.radius_derivative(t)).collect()
    }

    /// Element-wise [`radius_second_derivative`](Self::radius_second_derivative).
    #[must_use]
    pub fn radius_second_derivatives(&self, thetas: &[f64]) -> Vec<f64> {
        thetas
            .iter()
            .map(|&t| self.radius_second_derivative(t))
            .collect()
    }
}

impl Default for RadiusProfile {
    fn default() -> Self {
        Self::blot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::TAU;

    fn central_difference(f: impl Fn(f64) -> f64, t: f64) -> f64 {
        let h = 1e-5;
        (f(t + h) - f(t - h)) / (2.0 * h)
    }

    fn probe_angles() -> Vec<f64> {
        (0..64).map(|i| f64::from(i) * 0.1 - 0.7).collect()
    }

    #[test]
    fn blot_values_at_zero() {
        // r'(0) = 0.2 * 3 + 0.05 * 11, r''(0) = -0.3 * 4 - 0.1 * 49
        let p = RadiusProfile::blot();
        assert_abs_diff_eq!(p.radius(0.0), 1.4, epsilon = 1e-12);
        assert_abs_diff_eq!(p.radius_derivative(0.0), 1.15, epsilon = 1e-12);
        assert_abs_diff_eq!(p.radius_second_derivative(0.0), -6.1, epsilon = 1e-12);
    }

    #[test]
    fn derivative_matches_radius() {
        let p = RadiusProfile::blot();
        for t in probe_angles() {
            let numeric = central_difference(|x| p.radius(x), t);
            assert_abs_diff_eq!(p.radius_derivative(t), numeric, epsilon = 1e-6);
        }
    }

    #[test]
    fn second_derivative_matches_derivative() {
        let p = RadiusProfile::blot();
        for t in probe_angles() {
            let numeric = central_difference(|x| p.radius_derivative(x), t);
            assert_abs_diff_eq!(p.radius_second_derivative(t), numeric, epsilon = 1e-5);
        }
    }

    #[test]
    fn radius_is_periodic() {
        let p = RadiusProfile::blot();
        for t in probe_angles() {
            assert_abs_diff_eq!(p.radius(t), p.radius(t + TAU), epsilon = 1e-9);
            assert_abs_diff_eq!(
                p.radius_derivative(t),
                p.radius_derivative(t + TAU),
                epsilon = 1e-9
            );
        }
    }

    #[test]
    fn blot_radius_stays_positive() {
        let p = RadiusProfile::blot();
        let min = (0..10_000)
            .map(|i| p.radius(f64::from(i) * TAU / 10_000.0))
            .fold(f64::INFINITY, f64::min);
        assert!(min > 0.0);
    }

    #[test]
    fn slice_variants_preserve_shape() {
        let p = RadiusProfile::blot();
        let thetas = [2.0, 0.0, 1.0];
        let r = p.radii(&thetas);
        let dr = p.radius_derivatives(&thetas);
        let d2r = p.radius_second_derivatives(&thetas);
        assert_eq!(r.len(), 3);
        assert_eq!(dr.len(), 3);
        assert_eq!(d2r.len(), 3);
        for (i, &t) in thetas.iter().enumerate() {
            assert_eq!(r[i], p.radius(t));
            assert_eq!(dr[i], p.radius_derivative(t));
            assert_eq!(d2r[i], p.radius_second_derivative(t));
        }
        assert!(p.radii(&[]).is_empty());
    }

    #[test]
    fn constant_profile_is_circle() {
        let p = RadiusProfile::new(2.5, Vec::new());
        assert_abs_diff_eq!(p.radius(1.3), 2.5);
        assert_abs_diff_eq!(p.radius_derivative(1.3), 0.0);
        assert_abs_diff_eq!(p.radius_second_derivative(1.3), 0.0);
    }

    #[test]
    fn default_is_blot() {
        assert_eq!(RadiusProfile::default(), RadiusProfile::blot());
        assert_eq!(RadiusProfile::blot().terms().len(), 4);
        assert_abs_diff_eq!(RadiusProfile::blot().offset(), 1.0);
    }
}
