//! End-to-end scoring scenarios.

use atoll_core::{CategoryConfig, DecayKind, DecaySettings, FrictionSettings, FrictionSource};
use atoll_engine::{AccessibilityEngine, ComputeRequest};
use atoll_index::PointSet;
use atoll_test_utils::{flat_raster, point_at_cell, point_at_grid_center, test_spec};
use indexmap::IndexMap;

fn linear_request(categories: &[(&str, f64)]) -> ComputeRequest {
    ComputeRequest {
        categories: categories
            .iter()
            .map(|&(label, range_km)| {
                (
                    label.to_string(),
                    CategoryConfig {
                        included: true,
                        range_km,
                    },
                )
            })
            .collect(),
        decay: DecaySettings::new(DecayKind::Linear),
        friction: FrictionSettings::frictionless(),
    }
}

#[test]
fn single_poi_linear_five_km() {
    // Single category, single POI at the grid centre, 5 km linear decay,
    // road factor 1.0, no friction rasters.
    let spec = test_spec();
    let mut engine = AccessibilityEngine::new(spec);
    engine.set_point_set("clinics", &point_at_grid_center(&spec));

    let result = engine.compute(&linear_request(&[("clinics", 5.0)])).unwrap();
    let (cr, cc) = (spec.height() / 2, spec.width() / 2);

    // The POI's own cell settles at distance 0: contribution exactly 1.
    assert_eq!(*result.values.get(cr, cc), 1.0);
    assert_eq!(result.max_score, 1.0);

    // At ~5 km due north the linear falloff has run out. One N/S cell is
    // ~222 m, so 23 cells ~ 5.1 km.
    let near_range = *result.values.get(cr + 23, cc);
    assert!(near_range < 0.05, "got {near_range}");

    // Beyond the 7.5 km max scan (1.5 x range) the score is exactly zero.
    let (dy, _, _) = spec.step_distances_m();
    let beyond = (7600.0 / dy).ceil() as usize;
    assert_eq!(*result.values.get(cr + beyond, cc), 0.0);
}

#[test]
fn two_categories_accumulate_additively() {
    // Two categories with POIs equidistant from a probe cell, each
    // contributing ~0.5 there, sum ~1.0.
    let spec = test_spec();
    let mut engine = AccessibilityEngine::new(spec);
    let (cr, cc) = (spec.height() / 2, spec.width() / 2);
    let (dy, _, _) = spec.step_distances_m();
    // Half of a 5 km range, in whole cells.
    let half = (2500.0 / dy).round() as usize;
    engine.set_point_set("clinics", &point_at_cell(&spec, cr + half, cc));
    engine.set_point_set("schools", &point_at_cell(&spec, cr - half, cc));

    let result = engine
        .compute(&linear_request(&[("clinics", 5.0), ("schools", 5.0)]))
        .unwrap();
    let combined = *result.values.get(cr, cc);
    // Cell quantization puts each contribution within a few percent of 0.5.
    assert!((combined - 1.0).abs() < 0.05, "got {combined}");
}

#[test]
fn disabled_category_is_bit_identical_to_absent_point_set() {
    let spec = test_spec();
    let clinic = point_at_grid_center(&spec);
    let school = point_at_cell(&spec, 10, 10);

    // Run 1: school category present but excluded.
    let mut with_disabled = AccessibilityEngine::new(spec);
    with_disabled.set_point_set("clinics", &clinic);
    with_disabled.set_point_set("schools", &school);
    let mut req = linear_request(&[("clinics", 5.0), ("schools", 5.0)]);
    req.categories.get_mut("schools").unwrap().included = false;
    let a = with_disabled.compute(&req).unwrap();

    // Run 2: the school point set was never loaded.
    let mut without = AccessibilityEngine::new(spec);
    without.set_point_set("clinics", &clinic);
    let b = without
        .compute(&linear_request(&[("clinics", 5.0)]))
        .unwrap();

    assert_eq!(a.values.values(), b.values.values());
    assert_eq!(a.max_score, b.max_score);

    // Same for a zero-range category.
    let mut req0 = linear_request(&[("clinics", 5.0), ("schools", 0.0)]);
    req0.categories.get_mut("schools").unwrap().included = true;
    let mut with_zero = AccessibilityEngine::new(spec);
    with_zero.set_point_set("clinics", &clinic);
    with_zero.set_point_set("schools", &school);
    let c = with_zero.compute(&req0).unwrap();
    assert_eq!(c.values.values(), b.values.values());
}

#[test]
fn empty_point_set_is_silently_skipped() {
    let spec = test_spec();
    let mut engine = AccessibilityEngine::new(spec);
    engine.set_point_set("clinics", &point_at_grid_center(&spec));
    engine.set_point_set("ghost", &PointSet::default());

    let result = engine
        .compute(&linear_request(&[("clinics", 5.0), ("ghost", 5.0)]))
        .unwrap();
    assert_eq!(result.max_score, 1.0);
}

#[test]
fn friction_shrinks_reach() {
    // With an empty population raster, friction everywhere approaches the
    // road factor, so travel costs rise and total coverage shrinks.
    let spec = test_spec();

    let mut baseline = AccessibilityEngine::new(spec);
    baseline.set_point_set("clinics", &point_at_grid_center(&spec));
    let free = baseline.compute(&linear_request(&[("clinics", 3.0)])).unwrap();

    let mut slowed = AccessibilityEngine::new(spec);
    slowed.set_point_set("clinics", &point_at_grid_center(&spec));
    slowed.set_population(Some(flat_raster(&spec, 0.0))).unwrap();
    let mut req = linear_request(&[("clinics", 3.0)]);
    req.friction = FrictionSettings {
        source: FrictionSource::Population,
        road_factor: 3.0,
        allowed_road_classes: atoll_core::RoadClass::ALL.to_vec(),
    };
    let slow = slowed.compute(&req).unwrap();

    let coverage = |values: &[f32]| values.iter().filter(|&&v| v > 0.0).count();
    assert!(coverage(slow.values.values()) < coverage(free.values.values()));
}

#[test]
fn exponential_decay_reaches_past_the_range() {
    let spec = test_spec();
    let mut engine = AccessibilityEngine::new(spec);
    engine.set_point_set("clinics", &point_at_grid_center(&spec));

    let mut req = linear_request(&[("clinics", 1.0)]);
    req.decay = DecaySettings::new(DecayKind::Exponential);
    let result = engine.compute(&req).unwrap();

    let (cr, cc) = (spec.height() / 2, spec.width() / 2);
    let (dy, _, _) = spec.step_distances_m();
    // ~2 km north: twice the range, still positive under exponential.
    let two_ranges = (2000.0 / dy).round() as usize;
    assert!(*result.values.get(cr + two_ranges, cc) > 0.0);
}

#[test]
fn insertion_order_does_not_change_the_sum() {
    let spec = test_spec();
    let a = point_at_cell(&spec, 40, 40);
    let b = point_at_cell(&spec, 60, 60);

    let run = |order: &[(&str, f64)]| {
        let mut engine = AccessibilityEngine::new(spec);
        engine.set_point_set("a", &a);
        engine.set_point_set("b", &b);
        engine.compute(&linear_request(order)).unwrap()
    };
    let ab = run(&[("a", 4.0), ("b", 4.0)]);
    let ba = run(&[("b", 4.0), ("a", 4.0)]);
    // Addition of the two categories' contributions commutes.
    for (x, y) in ab.values.values().iter().zip(ba.values.values()) {
        assert!((x - y).abs() < 1e-6);
    }
}

#[test]
fn request_types_are_plain_data() {
    // ComputeRequest construction via collect keeps insertion order.
    let mut categories = IndexMap::new();
    categories.insert(
        "clinics".to_string(),
        CategoryConfig {
            included: true,
            range_km: 5.0,
        },
    );
    let req = ComputeRequest {
        categories,
        decay: DecaySettings::new(DecayKind::Constant),
        friction: FrictionSettings::frictionless(),
    };
    assert!(req.categories["clinics"].is_active());
}
