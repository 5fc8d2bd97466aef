//! Non-negative weight vectors and their cumulative distribution.

use std::fmt;

/// An ordered sequence of weights. Values need not sum to 1.
///
/// Every transform returns a fresh vector; nothing here shares state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeightVector {
    values: Vec<f64>,
}

impl WeightVector {
    pub fn new(values: Vec<f64>) -> Self {
        Self { values }
    }

    /// `n` equal weights of `1/n`.
    pub fn uniform(n: usize) -> Self {
        let w = 1.0 / n as f64;
        Self {
            values: vec![w; n],
        }
    }

    /// Total of all weights.
    ///
    /// A zero total makes [`scale`](Self::scale) and
    /// [`cumulative_probability`](Self::cumulative_probability) produce
    /// non-finite values. Callers are expected to supply positive weights.
    pub fn sum(&self) -> f64 {
        self.values.iter().sum()
    }

    /// Each weight divided by [`sum`](Self::sum).
    pub fn scale(&self) -> Self {
        let sum = self.sum();
        self.values.iter().map(|&w| w / sum).collect()
    }

    /// Running total of the normalized weights.
    ///
    /// Element `i` is `sum(w[0..=i]) / sum(w)`, so the last element is 1.0 up
    /// to rounding when the total is positive.
    pub fn cumulative_probability(&self) -> Self {
        let sum = self.sum();
        let mut acc = 0.0;
        self.values
            .iter()
            .map(|&w| {
                acc += w / sum;
                acc
            })
            .collect()
    }

    /// Drop the weight at `position`, keeping the rest in order.
    /// Out-of-bounds positions leave the vector unchanged.
    pub fn remove_at(mut self, position: usize) -> Self {
        if position < self.values.len() {
            self.values.remove(position);
        }
        self
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    pub fn into_inner(self) -> Vec<f64> {
        self.values
    }
}

impl From<Vec<f64>> for WeightVector {
    fn from(values: Vec<f64>) -> Self {
        Self::new(values)
    }
}

impl From<&[f64]> for WeightVector {
    fn from(values: &[f64]) -> Self {
        Self::new(values.to_vec())
    }
}

impl FromIterator<f64> for WeightVector {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl AsRef<[f64]> for WeightVector {
    fn as_ref(&self) -> &[f64] {
        &self.values
    }
}

/// Diagnostic rendering: `[0.167  0.500  1.000]`.
impl fmt::Display for WeightVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, w) in self.values.iter().enumerate() {
            if i > 0 {
                f.write_str("  ")?;
            }
            write!(f, "{w:.3}")?;
        }
        f.write_str("]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: &[f64], b: &[f64], precision: f64) -> bool {
        a.len() == b.len() && a.iter().zip(b).all(|(x, y)| (x - y).abs() <= precision)
    }

    #[test]
    fn cumulative_after_removal() {
        let v = WeightVector::from(vec![0.1, 0.2, 0.3, 0.4]);
        assert!(approx_eq(
            v.cumulative_probability().as_slice(),
            &[0.1, 0.3, 0.6, 1.0],
            0.001
        ));

        let v2 = v.clone().remove_at(2).remove_at(200);
        assert!(approx_eq(
            v2.cumulative_probability().as_slice(),
            &[1.0 / 7.0, 3.0 / 7.0, 1.0],
            0.001
        ));
        // the copy never aliases the original
        assert_eq!(v.len(), 4);
    }

    #[test]
    fn remove_down_to_empty() {
        let mut v = WeightVector::from(vec![0.0, 10.0, 200.0, 3000.0]);

        v = v.remove_at(0);
        assert_eq!(v.as_slice(), &[10.0, 200.0, 3000.0]);
        v = v.remove_at(1);
        assert_eq!(v.as_slice(), &[10.0, 3000.0]);
        v = v.remove_at(1);
        assert_eq!(v.as_slice(), &[10.0]);
        v = v.remove_at(0);
        assert!(v.is_empty());
        v = v.remove_at(0);
        assert!(v.is_empty());
    }

    #[test]
    fn scale_keeps_proportions() {
        let v = WeightVector::from(vec![0.2, 0.1]);
        let s = v.scale();
        assert!(approx_eq(s.as_slice(), &[2.0 / 3.0, 1.0 / 3.0], 1e-12));
        assert!((s.sum() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn uniform_sums_to_one() {
        let v = WeightVector::uniform(7);
        assert_eq!(v.len(), 7);
        assert!((v.sum() - 1.0).abs() < 1e-12);
        assert!(WeightVector::uniform(0).is_empty());
    }

    #[test]
    fn zero_sum_is_not_finite() {
        let v = WeightVector::from(vec![0.0, 0.0]);
        assert!(v.cumulative_probability().as_slice().iter().all(|c| c.is_nan()));
    }

    #[test]
    fn display_three_decimals() {
        let v = WeightVector::from(vec![1.0, 2.0, 3.0]).cumulative_probability();
        assert_eq!(v.to_string(), "[0.167  0.500  1.000]");
        assert_eq!(WeightVector::default().to_string(), "[]");
    }
}
