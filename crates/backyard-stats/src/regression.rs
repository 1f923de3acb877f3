/// Straight line `y = intercept + slope * x` fitted by ordinary least squares.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
    /// Coefficient of determination; `1.0` means every point lies on the line.
    pub r_squared: f64,
}

impl LinearFit {
    /// Fits a line through the paired points `(xs[i], ys[i])`.
    ///
    /// Returns `None` when the series differ in length, hold fewer than two
    /// points, or `xs` has zero variance (the slope is undefined).
    ///
    /// When `ys` is constant the fit is the horizontal line through it and
    /// `r_squared` is reported as `1.0`.
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn fit(xs: &[f64], ys: &[f64]) -> Option<Self> {
        if xs.len() != ys.len() || xs.len() < 2 {
            return None;
        }
        let n = xs.len() as f64;
        let mean_x = xs.iter().sum::<f64>() / n;
        let mean_y = ys.iter().sum::<f64>() / n;

        let (mut sxy, mut sxx, mut syy) = (0.0, 0.0, 0.0);
        for (x, y) in xs.iter().zip(ys) {
            let dx = x - mean_x;
            let dy = y - mean_y;
            sxy += dx * dy;
            sxx += dx * dx;
            syy += dy * dy;
        }
        if sxx == 0.0 {
            return None;
        }

        let slope = sxy / sxx;
        let intercept = mean_y - slope * mean_x;
        let r_squared = if syy == 0.0 {
            1.0
        } else {
            (sxy * sxy / (sxx * syy)).clamp(0.0, 1.0)
        };
        Some(Self {
            slope,
            intercept,
            r_squared,
        })
    }

    /// Value of the fitted line at `x`.
    #[must_use]
    pub fn predict(&self, x: f64) -> f64 {
        self.intercept + self.slope * x
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_line() {
        let fit = LinearFit::fit(&[1.0, 2.0, 3.0, 4.0], &[5.0, 7.0, 9.0, 11.0]).unwrap();
        assert!((fit.slope - 2.0).abs() < 1e-12);
        assert!((fit.intercept - 3.0).abs() < 1e-12);
        assert!((fit.r_squared - 1.0).abs() < 1e-12);
        assert!((fit.predict(10.0) - 23.0).abs() < 1e-12);
    }

    #[test]
    fn test_noisy_fit() {
        // Hand-computed: sxy = 6, sxx = 10, syy = 5.2
        let fit = LinearFit::fit(&[1.0, 2.0, 3.0, 4.0, 5.0], &[2.0, 3.0, 3.0, 5.0, 4.0]).unwrap();
        assert!((fit.slope - 0.6).abs() < 1e-12);
        assert!((fit.intercept - 1.6).abs() < 1e-12);
        assert!((fit.r_squared - 36.0 / 52.0).abs() < 1e-12);
    }

    #[test]
    fn test_constant_response() {
        let fit = LinearFit::fit(&[1.0, 2.0, 3.0], &[4.0, 4.0, 4.0]).unwrap();
        assert!(fit.slope.abs() < 1e-12);
        assert!((fit.intercept - 4.0).abs() < 1e-12);
        assert!((fit.r_squared - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_undefined_cases() {
        assert_eq!(LinearFit::fit(&[1.0], &[1.0]), None);
        assert_eq!(LinearFit::fit(&[1.0, 2.0], &[1.0, 2.0, 3.0]), None);
        assert_eq!(LinearFit::fit(&[2.0, 2.0], &[1.0, 3.0]), None);
    }
}
