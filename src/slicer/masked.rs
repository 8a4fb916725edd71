//! Masked raster slice
//!
//! A 2-D array of pixel values with a co-indexed boolean mask. A masked
//! cell means "no valid value": its center fell outside the polygon, and
//! its value cell is reset to zero. Each slice is created fresh for one
//! feature and owned solely by the emitted record.

use ndarray::Array2;
use serde_yaml::{Mapping, Value};

/// Pixel values plus validity mask for one polygon's window
#[derive(Debug, Clone)]
pub struct MaskedSlice {
    values: Array2<f64>,
    mask: Array2<bool>,
}

impl MaskedSlice {
    /// An all-masked slice of the given shape, values zeroed
    ///
    /// Degenerate polygons produce zero-sized shapes here; that is a
    /// valid slice, not an error.
    pub fn empty(height: usize, width: usize) -> Self {
        MaskedSlice {
            values: Array2::zeros((height, width)),
            mask: Array2::from_elem((height, width), true),
        }
    }

    /// Wrap freshly read window data, all cells initially valid
    pub fn from_values(values: Array2<f64>) -> Self {
        let mask = Array2::from_elem(values.raw_dim(), false);
        MaskedSlice { values, mask }
    }

    /// (rows, columns) of the slice
    pub fn shape(&self) -> (usize, usize) {
        let shape = self.values.shape();
        (shape[0], shape[1])
    }

    /// True when either dimension is zero
    pub fn is_empty(&self) -> bool {
        let (height, width) = self.shape();
        height == 0 || width == 0
    }

    /// Mark cell (i, j) invalid and reset its value to zero
    pub fn mask_out(&mut self, i: usize, j: usize) {
        self.mask[[i, j]] = true;
        self.values[[i, j]] = 0.0;
    }

    /// Whether cell (i, j) is masked
    pub fn is_masked(&self, i: usize, j: usize) -> bool {
        self.mask[[i, j]]
    }

    /// Value of cell (i, j); zero when masked
    pub fn value(&self, i: usize, j: usize) -> f64 {
        self.values[[i, j]]
    }

    /// Number of unmasked cells
    pub fn valid_count(&self) -> usize {
        self.mask.iter().filter(|masked| !**masked).count()
    }

    /// The value array
    pub fn values(&self) -> &Array2<f64> {
        &self.values
    }

    /// The mask array
    pub fn mask(&self) -> &Array2<bool> {
        &self.mask
    }

    /// Serialize as a YAML mapping with shape, values and mask entries
    pub fn to_yaml(&self) -> Value {
        let (height, width) = self.shape();

        let mut mapping = Mapping::new();
        mapping.insert(
            Value::from("shape"),
            Value::Sequence(vec![Value::from(height as u64), Value::from(width as u64)]),
        );
        mapping.insert(
            Value::from("values"),
            Value::Sequence(
                self.values
                    .rows()
                    .into_iter()
                    .map(|row| Value::Sequence(row.iter().map(|v| Value::from(*v)).collect()))
                    .collect(),
            ),
        );
        mapping.insert(
            Value::from("mask"),
            Value::Sequence(
                self.mask
                    .rows()
                    .into_iter()
                    .map(|row| Value::Sequence(row.iter().map(|m| Value::from(*m)).collect()))
                    .collect(),
            ),
        );
        Value::Mapping(mapping)
    }
}
