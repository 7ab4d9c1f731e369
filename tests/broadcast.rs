use platekit::engine::broadcast::{map_collection, map_grid, map_slice, map_stack, map_vector};
use platekit::engine::Window;
use platekit::ops::{shift_kernel, Decrement, Increment, LeftShift, RightShift, ShiftOp};
use platekit::{Coordinate, CoordinateCollection, DataVector, Grid, GridStack, PlateError};

#[test]
fn unary_map_applies_to_every_element() {
    assert_eq!(map_slice(&[1i64, 2, 3], &Increment, None).unwrap(), vec![2, 3, 4]);
    assert_eq!(map_slice(&[1i64, 2, 3], &Decrement, None).unwrap(), vec![0, 1, 2]);
    assert_eq!(
        map_slice(&[1u32, 2, 4], &LeftShift::new(2), None).unwrap(),
        vec![4, 8, 16]
    );
    assert_eq!(
        map_slice(&[8u32, 4], &RightShift::new(1), None).unwrap(),
        vec![4, 2]
    );
}

#[test]
fn windowed_map_emits_window_only() {
    let out = map_slice(&[1i64, 2, 3, 4, 5], &Increment, Some(Window::new(1, 3))).unwrap();
    assert_eq!(out, vec![3, 4, 5]);

    let err = map_slice(&[1i64, 2], &Increment, Some(Window::new(1, 3))).unwrap_err();
    assert_eq!(
        err,
        PlateError::IndexOutOfRange {
            begin: 1,
            length: 3,
            len: 2
        }
    );
}

#[test]
fn vector_map_keeps_identity() {
    let v = DataVector::at(2, 3, vec![5i64, 6]);
    let out = map_vector(&v, &Increment, None).unwrap();
    assert_eq!(out.coord(), Coordinate::new(2, 3));
    assert_eq!(out.data(), &[6, 7]);
    assert_eq!(v.data(), &[5, 6]); // input untouched
}

#[test]
fn collection_map_validates_every_well_first() {
    let mut c = CoordinateCollection::new();
    c.insert(DataVector::at(0, 0, vec![1i64, 2, 3])).unwrap();
    c.insert(DataVector::at(0, 1, vec![9i64])).unwrap();

    // (0,1) cannot fit the window: the whole call fails
    assert!(matches!(
        map_collection(&c, &Increment, Some(Window::new(0, 2))),
        Err(PlateError::IndexOutOfRange { .. })
    ));

    let out = map_collection(&c, &Increment, None).unwrap();
    assert_eq!(out.get(Coordinate::new(0, 0)).unwrap().data(), &[2, 3, 4]);
    assert_eq!(out.get(Coordinate::new(0, 1)).unwrap().data(), &[10]);
}

#[test]
fn grid_and_stack_maps_preserve_structure() {
    let mut g = Grid::<i64>::new(2, 2).unwrap();
    g.insert(DataVector::at(0, 0, vec![1, 2])).unwrap();
    g.insert(DataVector::at(1, 1, vec![3])).unwrap();
    g.set_group("diag", vec![Coordinate::new(0, 0), Coordinate::new(1, 1)]);

    let mapped = map_grid(&g, &Increment, None).unwrap();
    assert_eq!(mapped.rows(), 2);
    assert_eq!(mapped.group("diag").unwrap(), g.group("diag").unwrap());
    assert_eq!(mapped.get(Coordinate::new(0, 0)).unwrap().data(), &[2, 3]);

    let stack = GridStack::from_grids(2, 2, vec![g.clone(), g]).unwrap();
    let mapped = map_stack(&stack, &Decrement, None).unwrap();
    assert_eq!(mapped.len(), 2);
    assert_eq!(
        mapped.get(1).unwrap().get(Coordinate::new(1, 1)).unwrap().data(),
        &[2]
    );
}

#[test]
fn boxed_shift_kernels_broadcast() {
    let kernel = shift_kernel::<u8>(ShiftOp::Left { bits: 1 });
    let v = DataVector::at(0, 0, vec![1u8, 2, 3]);
    let out = map_vector(&v, &kernel, None).unwrap();
    assert_eq!(out.data(), &[2, 4, 6]);
}
