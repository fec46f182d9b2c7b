//! Tests for silhouette distance metrics and shape parsing

#[cfg(test)]
mod tests {
    use creaturegen::AvatarError;
    use creaturegen::math::distance::{Orientation, Shape, elliptical, euclidean, manhattan};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    // Tests straight-line distance on a 3-4-5 triangle
    #[test]
    fn test_euclidean_distance() {
        assert!((euclidean([0.0, 0.0], [3.0, 4.0]) - 5.0).abs() < 1e-12);
        assert!(euclidean([7.5, 7.5], [7.5, 7.5]).abs() < f64::EPSILON);
    }

    // Tests taxicab distance sums both axis offsets
    #[test]
    fn test_manhattan_distance() {
        assert!((manhattan([0.0, 0.0], [3.0, 4.0]) - 7.0).abs() < 1e-12);
        assert!((manhattan([10.0, 2.0], [7.5, 7.5]) - 8.0).abs() < 1e-12);
    }

    // Tests horizontal ellipse halves the vertical radius
    #[test]
    fn test_elliptical_horizontal_orientation() {
        let center = [10.0, 10.0];

        let below = elliptical([10.0, 15.0], center, Orientation::Horizontal);
        let beside = elliptical([15.0, 10.0], center, Orientation::Horizontal);

        assert!((below - 20.0).abs() < 1e-9, "got {below}");
        assert!((beside - 5.0).abs() < 1e-9, "got {beside}");
    }

    // Tests vertical ellipse swaps the normalizing radii
    #[test]
    fn test_elliptical_vertical_orientation() {
        let center = [10.0, 10.0];

        let below = elliptical([10.0, 15.0], center, Orientation::Vertical);
        let beside = elliptical([15.0, 10.0], center, Orientation::Vertical);

        assert!((below - 5.0).abs() < 1e-9, "got {below}");
        assert!((beside - 20.0).abs() < 1e-9, "got {beside}");
    }

    // Tests independent center coordinates for non-square grids
    #[test]
    fn test_elliptical_uses_both_center_coordinates() {
        // nx = (0 - 8) / 8 = -1, ny = (3 - 4) / 2 = -0.5, scale = 2 * 8
        let distance = elliptical([0.0, 3.0], [8.0, 4.0], Orientation::Horizontal);
        assert!((distance - 20.0).abs() < 1e-9, "got {distance}");
    }

    // Tests only circle and diamond carry the hard radius cutoff
    #[test]
    fn test_radius_cutoff_shapes() {
        assert!(Shape::Circle.has_radius_cutoff());
        assert!(Shape::Diamond.has_radius_cutoff());
        assert!(!Shape::Ellipse.has_radius_cutoff());
        assert!(!Shape::EllipseX.has_radius_cutoff());
        assert!(!Shape::EllipseY.has_radius_cutoff());
    }

    // Tests every shape name parses back to the same shape
    #[test]
    fn test_shape_names_parse() {
        for shape in Shape::ALL {
            let parsed: Shape = shape.to_string().parse().unwrap();
            assert_eq!(parsed, shape);
        }
        assert_eq!("Ellipse-X".parse::<Shape>().unwrap(), Shape::EllipseX);
        assert_eq!(" diamond ".parse::<Shape>().unwrap(), Shape::Diamond);
    }

    // Tests unknown shape names are rejected as invalid arguments
    #[test]
    fn test_unknown_shape_rejected() {
        let result = "square".parse::<Shape>();
        assert!(matches!(
            result,
            Err(AvatarError::InvalidArgument {
                parameter: "shape",
                ..
            })
        ));
    }

    // Tests random shapes come only from circle, diamond and ellipse
    #[test]
    fn test_random_shape_choices() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut seen = Vec::new();

        for _ in 0..300 {
            let shape = Shape::random(&mut rng);
            assert!(Shape::RANDOM_CHOICES.contains(&shape));
            if !seen.contains(&shape) {
                seen.push(shape);
            }
        }

        assert_eq!(seen.len(), Shape::RANDOM_CHOICES.len());
    }

    // Tests fixed metrics leave the random stream untouched
    #[test]
    fn test_fixed_metrics_consume_no_randomness() {
        for shape in [Shape::Circle, Shape::Diamond, Shape::EllipseX, Shape::EllipseY] {
            let mut used = StdRng::seed_from_u64(5);
            let mut fresh = used.clone();

            let _ = shape.distance([1.0, 2.0], [10.0, 10.0], &mut used);

            assert_eq!(used.random::<u64>(), fresh.random::<u64>(), "{shape}");
        }
    }

    // Tests per-cell ellipse distance matches one of the two orientations
    #[test]
    fn test_ellipse_distance_picks_an_orientation() {
        let mut rng = StdRng::seed_from_u64(3);
        let point = [4.0, 13.0];
        let center = [10.0, 10.0];
        let horizontal = elliptical(point, center, Orientation::Horizontal);
        let vertical = elliptical(point, center, Orientation::Vertical);

        for _ in 0..50 {
            let distance = Shape::Ellipse.distance(point, center, &mut rng);
            assert!(
                (distance - horizontal).abs() < 1e-9 || (distance - vertical).abs() < 1e-9,
                "unexpected distance {distance}"
            );
        }
    }
}
