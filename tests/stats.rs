use platekit::data::rand::{random_grid_f64, RandType};
use platekit::math::{try_cast_collection, try_cast_grid};
use platekit::stats::{
    grid_interquartile_range, grid_mean, grid_quantile, mean_by_coordinate,
    percentile_by_coordinate,
};
use platekit::{Coordinate, CoordinateCollection, DataVector, Grid, PlateError};

fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
    (a - b).abs() <= eps
}

#[test]
fn per_well_means_are_keyed_by_coordinate() {
    let mut c = CoordinateCollection::new();
    c.insert(DataVector::at(0, 0, vec![1i64, 2, 3])).unwrap();
    c.insert(DataVector::at(1, 2, vec![10i64, 20])).unwrap();

    let means = mean_by_coordinate(&c).unwrap();
    assert_eq!(means.len(), 2);
    assert!(approx_eq(means[&Coordinate::new(0, 0)], 2.0, 1e-12));
    assert!(approx_eq(means[&Coordinate::new(1, 2)], 15.0, 1e-12));
}

#[test]
fn empty_well_fails_the_whole_aggregation() {
    let mut c = CoordinateCollection::new();
    c.insert(DataVector::at(0, 0, vec![1.0f64])).unwrap();
    c.insert(DataVector::empty(Coordinate::new(0, 1))).unwrap();

    assert!(matches!(
        mean_by_coordinate(&c),
        Err(PlateError::EmptyInput(_))
    ));
}

#[test]
fn per_well_percentiles_return_observations() {
    let mut c = CoordinateCollection::new();
    c.insert(DataVector::at(0, 0, vec![15i64, 20, 35, 40, 50]))
        .unwrap();

    let p = percentile_by_coordinate(&c, 50.0).unwrap();
    assert_eq!(p[&Coordinate::new(0, 0)], 35);
}

#[test]
fn plate_level_statistics_pool_all_wells() {
    let mut g = Grid::<f64>::new(1, 2).unwrap();
    g.insert(DataVector::at(0, 0, vec![1.0, 2.0])).unwrap();
    g.insert(DataVector::at(0, 1, vec![3.0, 4.0])).unwrap();

    assert!(approx_eq(grid_mean(&g).unwrap(), 2.5, 1e-12));
    assert!(approx_eq(grid_quantile(&g, 0.5).unwrap(), 2.5, 1e-12));
    assert!(approx_eq(grid_interquartile_range(&g).unwrap(), 1.5, 1e-12));
}

#[test]
fn random_plates_have_plausible_statistics() {
    let g = random_grid_f64(4, 6, 64, RandType::Uniform { low: 0.0, high: 1.0 }).unwrap();
    let m = grid_mean(&g).unwrap();
    // 1536 uniform samples: the mean is close to 0.5
    assert!(m > 0.35 && m < 0.65, "mean {m} implausible for U[0,1)");
}

#[test]
fn checked_casts_traverse_containers() {
    let mut c = CoordinateCollection::new();
    c.insert(DataVector::at(0, 0, vec![1i64, 200])).unwrap();

    let as_u8 = try_cast_collection::<i64, u8>(&c).unwrap();
    assert_eq!(as_u8.get(Coordinate::new(0, 0)).unwrap().data(), &[1u8, 200]);

    let mut g = Grid::<i64>::new(1, 1).unwrap();
    g.insert(DataVector::at(0, 0, vec![300i64])).unwrap();
    let err = try_cast_grid::<i64, u8>(&g).unwrap_err();
    assert!(matches!(err, PlateError::CastOverflow { .. }));
}
