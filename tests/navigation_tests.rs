use approx::assert_relative_eq;
use chart_coords::core::{Box2D, DataPoint, Rectangle};
use chart_coords::{ChartError, CoordinateSpace, CoordinateSpaceConfig, WindowChange};

fn build_space(config: CoordinateSpaceConfig) -> CoordinateSpace {
    let mut space = CoordinateSpace::new(config).expect("space");
    space
        .set_viewport(Rectangle::from_size(1000.0, 500.0).expect("viewport"))
        .expect("set viewport");
    let _ = space.set_window(Box2D::new(0.0, 0.0, 100.0, 50.0).expect("window"));
    space
}

#[test]
fn pan_by_pixels_moves_window_against_drag_on_x() {
    let mut space = build_space(CoordinateSpaceConfig::default());

    let change = space.pan_by_pixels(100.0, 0.0).expect("pan");
    assert_eq!(change, WindowChange::Translate);
    assert_relative_eq!(space.window().x_min(), -10.0, epsilon = 1e-9);
    assert_relative_eq!(space.window().x_max(), 90.0, epsilon = 1e-9);
    assert_eq!(space.window().y_min(), 0.0);

    space.pan_by_pixels(-100.0, 0.0).expect("pan back");
    assert_relative_eq!(space.window().x_min(), 0.0, epsilon = 1e-9);
}

#[test]
fn dragging_down_moves_window_up_in_data_space() {
    let mut space = build_space(CoordinateSpaceConfig::default());

    space.pan_by_pixels(0.0, 50.0).expect("pan");
    assert_relative_eq!(space.window().y_min(), 5.0, epsilon = 1e-9);
    assert_relative_eq!(space.window().y_max(), 55.0, epsilon = 1e-9);
}

#[test]
fn zoom_around_pixel_keeps_anchor_stable() {
    let mut space = build_space(CoordinateSpaceConfig::default());

    let anchor_before = space.data_x(250.0).expect("anchor");
    let change = space.zoom_around_pixel(2.0, 250.0, 250.0).expect("zoom");
    assert_eq!(change, WindowChange::Scale);

    let window = space.window();
    assert_relative_eq!(window.x_min(), 12.5, epsilon = 1e-9);
    assert_relative_eq!(window.x_max(), 62.5, epsilon = 1e-9);
    assert_relative_eq!(window.height(), 25.0, epsilon = 1e-9);

    let anchor_after = space.data_x(250.0).expect("anchor after");
    assert_relative_eq!(anchor_after, anchor_before, epsilon = 1e-9);
}

#[test]
fn zoom_rejects_invalid_factor() {
    let mut space = build_space(CoordinateSpaceConfig::default());
    let window = space.window();

    for factor in [0.0, -2.0, f64::NAN, f64::INFINITY] {
        assert!(matches!(
            space.zoom_around_pixel(factor, 10.0, 10.0),
            Err(ChartError::InvalidArgument(_))
        ));
    }
    assert_eq!(space.window(), window);
}

#[test]
fn zoom_past_limit_is_rejected_and_rolled_back() {
    let mut space = build_space(CoordinateSpaceConfig::default().with_max_zoom(Some(20.0)));
    let window = space.window();

    let change = space.zoom_around_pixel(4.0, 500.0, 250.0).expect("zoom");
    assert!(!change.is_accepted());
    assert_eq!(space.window(), window);
}

#[test]
fn pan_in_degenerate_space_fails() {
    let mut space = CoordinateSpace::default();
    assert!(matches!(
        space.pan_by_pixels(10.0, 0.0),
        Err(ChartError::DegenerateSpace { .. })
    ));
}

#[test]
fn fit_to_points_installs_bounding_box() {
    let mut space = build_space(CoordinateSpaceConfig::default());
    let points = [
        DataPoint::new(-5.0, 2.0),
        DataPoint::new(15.0, 8.0),
        DataPoint::new(3.0, -4.0),
    ];

    space.fit_to_points(&points).expect("fit");
    assert_eq!(
        space.window(),
        Box2D::new(-5.0, -4.0, 15.0, 8.0).expect("expected")
    );
}

#[test]
fn fit_to_flat_points_widens_the_flat_axis() {
    let mut space = build_space(CoordinateSpaceConfig::default());
    let points = [DataPoint::new(1.0, 42.0), DataPoint::new(3.0, 42.0)];

    space.fit_to_points(&points).expect("fit");
    let window = space.window();
    assert_eq!(window.height(), 1.0);
    assert_eq!(window.y_center(), 42.0);
    assert!(space.pixel_y(42.0).is_ok());
}
