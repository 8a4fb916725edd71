//! Tests for the masked slice container

extern crate std;

use ndarray::Array2;

use crate::slicer::MaskedSlice;

#[test]
fn test_empty_slice() {
    let slice = MaskedSlice::empty(0, 0);
    std::assert_eq!(slice.shape(), (0, 0));
    std::assert!(slice.is_empty());
    std::assert_eq!(slice.valid_count(), 0);
}

#[test]
fn test_empty_slice_keeps_degenerate_shape() {
    // A degenerate window may have one nonzero dimension
    let slice = MaskedSlice::empty(3, 0);
    std::assert_eq!(slice.shape(), (3, 0));
    std::assert!(slice.is_empty());
}

#[test]
fn test_mask_out_resets_value_to_zero() {
    let values = Array2::from_shape_vec((2, 2), vec![1.0, 2.0, 3.0, 4.0]).unwrap();
    let mut slice = MaskedSlice::from_values(values);

    std::assert_eq!(slice.valid_count(), 4);
    std::assert_eq!(slice.value(1, 0), 3.0);

    slice.mask_out(1, 0);
    std::assert!(slice.is_masked(1, 0));
    std::assert_eq!(slice.value(1, 0), 0.0);
    std::assert_eq!(slice.valid_count(), 3);

    // Other cells are untouched
    std::assert!(!slice.is_masked(0, 1));
    std::assert_eq!(slice.value(0, 1), 2.0);
}

#[test]
fn test_yaml_layout() {
    let values = Array2::from_shape_vec((1, 2), vec![5.0, 6.0]).unwrap();
    let mut slice = MaskedSlice::from_values(values);
    slice.mask_out(0, 1);

    let yaml = slice.to_yaml();
    let mapping = yaml.as_mapping().unwrap();

    let shape = mapping.get("shape").unwrap().as_sequence().unwrap();
    std::assert_eq!(shape[0].as_u64(), Some(1));
    std::assert_eq!(shape[1].as_u64(), Some(2));

    let rows = mapping.get("values").unwrap().as_sequence().unwrap();
    std::assert_eq!(rows.len(), 1);
    let row = rows[0].as_sequence().unwrap();
    std::assert_eq!(row[0].as_f64(), Some(5.0));
    std::assert_eq!(row[1].as_f64(), Some(0.0));

    let mask_rows = mapping.get("mask").unwrap().as_sequence().unwrap();
    let mask_row = mask_rows[0].as_sequence().unwrap();
    std::assert_eq!(mask_row[0].as_bool(), Some(false));
    std::assert_eq!(mask_row[1].as_bool(), Some(true));
}
