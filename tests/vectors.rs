use platekit::engine::vector::{
    combine, combine_range, combine_slices, combine_strict, combine_strict_range,
    combine_vector_with_constant, combine_vectors,
};
use platekit::engine::{AlignMode, Window};
use platekit::ops::{Addition, BitwiseXor, Division};
use platekit::{DataVector, PlateError};

#[test]
fn standard_xor_passes_longer_tail_through() {
    // Worked example: A=[1,2,3,4], B=[10,20], kernel = XOR
    let a = [1i64, 2, 3, 4];
    let b = [10i64, 20];

    let standard = combine(&a, &b, &BitwiseXor).unwrap();
    assert_eq!(standard, vec![11, 22, 3, 4]);

    let strict = combine_strict(&a, &b, &BitwiseXor).unwrap();
    assert_eq!(strict, vec![11, 22]);
}

#[test]
fn equal_lengths_make_modes_agree() {
    let a = [1.0f64, 2.0, 3.0];
    let b = [10.0f64, 20.0, 30.0];

    let standard = combine(&a, &b, &Addition).unwrap();
    let strict = combine_strict(&a, &b, &Addition).unwrap();
    assert_eq!(standard, strict);
    assert_eq!(standard.len(), a.len());
}

#[test]
fn unequal_lengths_split_by_mode() {
    let short = [1i64, 2];
    let long = [10i64, 20, 30, 40, 50];

    let strict = combine_strict(&short, &long, &Addition).unwrap();
    assert_eq!(strict.len(), 2);

    let standard = combine(&short, &long, &Addition).unwrap();
    assert_eq!(standard.len(), 5);
    // tail [2, 5) equals the longer operand's elements, unmodified
    assert_eq!(&standard[2..], &long[2..]);

    // symmetric: order of operands does not change the passthrough source
    let standard_rev = combine(&long, &short, &Addition).unwrap();
    assert_eq!(standard_rev, standard);
}

#[test]
fn strict_window_equals_presliced_combine() {
    let a = [1i64, 2, 3, 4, 5, 6];
    let b = [10i64, 20, 30, 40];

    let windowed = combine_strict_range(&a, &b, &Addition, 1, 3).unwrap();
    let presliced = combine_strict(&a[1..4], &b[1..4], &Addition).unwrap();
    assert_eq!(windowed, presliced);
    assert_eq!(windowed, vec![22, 33, 44]);
}

#[test]
fn standard_window_emits_window_only() {
    let a = [1i64, 2, 3, 4, 5, 6];
    let b = [10i64, 20];

    // window [1, 5): indices 1 combined, 2..5 passed through from `a`
    let out = combine_range(&a, &b, &Addition, 1, 4).unwrap();
    assert_eq!(out, vec![22, 3, 4, 5]);
}

#[test]
fn window_validation_is_mode_dependent() {
    let a = [1i64, 2, 3, 4, 5, 6];
    let b = [10i64, 20];

    // standard bound is the longer operand (6): in range
    assert!(combine_range(&a, &b, &Addition, 2, 4).is_ok());
    // strict bound is the shorter operand (2): out of range
    let err = combine_strict_range(&a, &b, &Addition, 2, 4).unwrap_err();
    assert_eq!(
        err,
        PlateError::IndexOutOfRange {
            begin: 2,
            length: 4,
            len: 2
        }
    );
    // beyond even the longer operand
    assert!(matches!(
        combine_range(&a, &b, &Addition, 4, 4),
        Err(PlateError::IndexOutOfRange { .. })
    ));
}

#[test]
fn both_empty_yields_empty_in_both_modes() {
    let empty: [i64; 0] = [];
    assert!(combine(&empty, &empty, &Addition).unwrap().is_empty());
    assert!(combine_strict(&empty, &empty, &Addition).unwrap().is_empty());
}

#[test]
fn constant_broadcast_matches_filled_array() {
    let a = [2.0f64, 8.0, 32.0];
    let filled = [2.0f64; 3];

    let via_constant =
        combine_vector_with_constant(&DataVector::at(0, 0, a.to_vec()), 2.0, &Division, None)
            .unwrap();
    let via_array = combine(&a, &filled, &Division).unwrap();
    assert_eq!(via_constant.data(), via_array.as_slice());
    assert_eq!(via_constant.data(), &[1.0, 4.0, 16.0]);
}

#[test]
fn vector_combine_keeps_left_identity() {
    let a = DataVector::at(1, 2, vec![1i64, 2]);
    let b = DataVector::at(7, 7, vec![10i64, 20, 30]);

    let out = combine_vectors(&a, &b, &Addition, AlignMode::Standard, None).unwrap();
    assert_eq!(out.coord(), a.coord());
    assert_eq!(out.data(), &[11, 22, 30]);

    // inputs untouched
    assert_eq!(a.data(), &[1, 2]);
    assert_eq!(b.data(), &[10, 20, 30]);
}

#[test]
fn windowed_constant_broadcast_validates_and_slices() {
    let a = DataVector::at(0, 0, vec![1i64, 2, 3, 4]);

    let out = combine_vector_with_constant(&a, 10, &Addition, Some(Window::new(1, 2))).unwrap();
    assert_eq!(out.data(), &[12, 13]);

    assert!(matches!(
        combine_vector_with_constant(&a, 10, &Addition, Some(Window::new(3, 2))),
        Err(PlateError::IndexOutOfRange { .. })
    ));
}

#[test]
fn boxed_kernels_work_through_the_same_entry_points() {
    let kernel = platekit::ops::arithmetic_kernel::<i64>(platekit::ops::ArithmeticOp::Addition);
    let out = combine_slices(&[1i64, 2], &[3i64], &kernel, AlignMode::Standard, None).unwrap();
    assert_eq!(out, vec![4, 2]);
}
