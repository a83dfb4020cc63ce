use chart_coords::core::{Box2D, Rectangle};
use chart_coords::space::{check_extent, classify_change};
use chart_coords::{ChartError, CoordinateSpace, CoordinateSpaceConfig, ExtentViolation, WindowChange};

fn build_space(config: CoordinateSpaceConfig) -> CoordinateSpace {
    let mut space = CoordinateSpace::new(config).expect("space");
    space
        .set_viewport(Rectangle::from_size(500.0, 500.0).expect("viewport"))
        .expect("set viewport");
    space
}

fn window(x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> Box2D {
    Box2D::new(x_min, y_min, x_max, y_max).expect("valid window")
}

#[test]
fn same_size_shift_is_translate() {
    let mut space = build_space(CoordinateSpaceConfig::default());
    let _ = space.set_window(window(0.0, 0.0, 100.0, 100.0));

    let change = space.set_window(window(10.0, 10.0, 110.0, 110.0));
    assert_eq!(change, WindowChange::Translate);
    assert_eq!(space.window(), window(10.0, 10.0, 110.0, 110.0));
    assert_eq!(space.previous_window(), window(0.0, 0.0, 100.0, 100.0));
}

#[test]
fn resized_window_is_scale() {
    let mut space = build_space(CoordinateSpaceConfig::default());
    let _ = space.set_window(window(0.0, 0.0, 100.0, 100.0));

    let change = space.set_window(window(0.0, 0.0, 50.0, 50.0));
    assert_eq!(change, WindowChange::Scale);
    assert_eq!(space.window(), window(0.0, 0.0, 50.0, 50.0));
}

#[test]
fn sub_pixel_size_change_still_counts_as_translate() {
    let mut space = build_space(CoordinateSpaceConfig::default());
    let _ = space.set_window(window(0.0, 0.0, 100.0, 100.0));

    // 0.05 data units are 0.25 px at this scale.
    let change = space.set_window(window(20.0, 0.0, 120.05, 100.0));
    assert_eq!(change, WindowChange::Translate);
}

#[test]
fn one_axis_resize_is_scale() {
    let mut space = build_space(CoordinateSpaceConfig::default());
    let _ = space.set_window(window(0.0, 0.0, 100.0, 100.0));

    let change = space.set_window(window(0.0, 0.0, 100.0, 120.0));
    assert_eq!(change, WindowChange::Scale);
}

#[test]
fn window_wider_than_min_zoom_is_rejected() {
    let mut space = build_space(CoordinateSpaceConfig::default().with_min_zoom(Some(3.0)));
    let accepted = space.set_window(window(0.0, 0.0, 2.0, 2.0));
    assert!(accepted.is_accepted());

    let change = space.set_window(window(0.0, 0.0, 100.0, 100.0));
    assert_eq!(
        change,
        WindowChange::Rejected(ExtentViolation::TooWide {
            extent: 100.0,
            limit: 3.0,
        })
    );
    assert_eq!(space.window(), window(0.0, 0.0, 2.0, 2.0));
}

#[test]
fn window_narrower_than_max_zoom_is_rejected() {
    let mut space = build_space(CoordinateSpaceConfig::default().with_max_zoom(Some(10.0)));
    let _ = space.set_window(window(0.0, 0.0, 100.0, 100.0));

    let change = space.set_window(window(0.0, 0.0, 100.0, 5.0));
    assert!(matches!(
        change,
        WindowChange::Rejected(ExtentViolation::TooNarrow { .. })
    ));
    assert_eq!(space.window(), window(0.0, 0.0, 100.0, 100.0));
}

#[test]
fn window_within_limits_is_accepted() {
    let config = CoordinateSpaceConfig::default()
        .with_min_zoom(Some(200.0))
        .with_max_zoom(Some(1.0));
    let mut space = build_space(config);

    assert_eq!(space.set_window(window(0.0, 0.0, 150.0, 150.0)), WindowChange::Scale);
    assert_eq!(space.set_window(window(0.0, 0.0, 200.0, 200.0)), WindowChange::Scale);
    assert_eq!(space.set_window(window(5.0, 5.0, 205.0, 205.0)), WindowChange::Translate);
}

#[test]
fn limits_are_checked_after_aspect_fit() {
    let config = CoordinateSpaceConfig::default()
        .with_maintain_aspect_ratio(true)
        .with_min_zoom(Some(150.0));
    let mut space = CoordinateSpace::new(config).expect("space");
    space
        .set_viewport(Rectangle::from_size(200.0, 100.0).expect("viewport"))
        .expect("set viewport");
    let _ = space.set_window(window(0.0, 0.0, 100.0, 50.0));
    let before = space.window();

    // 100x100 fits to 200x100, wider than the limit.
    let change = space.set_window(window(0.0, 0.0, 100.0, 100.0));
    assert!(!change.is_accepted());
    assert_eq!(space.window(), before);
}

#[test]
fn rejection_is_reported_not_raised() {
    let mut space = build_space(CoordinateSpaceConfig::default().with_min_zoom(Some(1.0)));
    let change = space.set_window(window(0.0, 0.0, 10.0, 10.0));

    assert!(matches!(
        change.into_result(),
        Err(ChartError::OutOfExtent(ExtentViolation::TooWide { .. }))
    ));
}

#[test]
fn check_extent_reports_largest_and_smallest_extents() {
    let config = CoordinateSpaceConfig::default()
        .with_min_zoom(Some(50.0))
        .with_max_zoom(Some(5.0));

    assert_eq!(
        check_extent(window(0.0, 0.0, 60.0, 10.0), &config),
        Some(ExtentViolation::TooWide {
            extent: 60.0,
            limit: 50.0,
        })
    );
    assert_eq!(
        check_extent(window(0.0, 0.0, 20.0, 2.0), &config),
        Some(ExtentViolation::TooNarrow {
            extent: 2.0,
            limit: 5.0,
        })
    );
    assert_eq!(check_extent(window(0.0, 0.0, 20.0, 20.0), &config), None);
}

#[test]
fn classification_falls_back_to_data_sizes_without_viewport() {
    let viewport = Rectangle::default();
    let previous = window(0.0, 0.0, 10.0, 10.0);

    assert_eq!(
        classify_change(viewport, previous, window(3.0, 3.0, 13.0, 13.0)),
        WindowChange::Translate
    );
    assert_eq!(
        classify_change(viewport, previous, window(0.0, 0.0, 20.0, 10.0)),
        WindowChange::Scale
    );
}

#[test]
fn each_assignment_records_previous_window() {
    let mut space = build_space(CoordinateSpaceConfig::default());
    let first = window(0.0, 0.0, 10.0, 10.0);
    let second = window(1.0, 1.0, 11.0, 11.0);
    let third = window(2.0, 2.0, 12.0, 12.0);

    let _ = space.set_window(first);
    let _ = space.set_window(second);
    assert_eq!(space.previous_window(), first);
    let _ = space.set_window(third);
    assert_eq!(space.previous_window(), second);
    assert_eq!(space.window(), third);
}
