//! Tests for grid geometry and the probabilistic half-grid builder

#[cfg(test)]
mod tests {
    use creaturegen::Shape;
    use creaturegen::math::distance::euclidean;
    use creaturegen::spatial::grid::fill_likelihood;
    use creaturegen::spatial::{GridGeometry, HalfGrid};
    use ndarray::array;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    // Tests derived dimensions of the reference grid
    #[test]
    fn test_geometry_reference_grid() {
        let geometry = GridGeometry::new(20, 32);

        assert_eq!(geometry.half_width(), 10);
        assert_eq!(geometry.center(), [10.0, 10.0]);
        assert_eq!(geometry.cutoff_radius(), 11);
        assert_eq!(geometry.image_side(), 640);
        assert_eq!(geometry.mirrored_column(0), 19);
        assert_eq!(geometry.mirrored_column(9), 10);
    }

    // Tests center stays real-valued for odd grids
    #[test]
    fn test_geometry_odd_grid_center() {
        let geometry = GridGeometry::new(15, 16);

        assert_eq!(geometry.center(), [7.5, 7.5]);
        assert_eq!(geometry.cutoff_radius(), 8);
        assert_eq!(geometry.half_width(), 7);
    }

    // Tests signed bounds checks including negative coordinates
    #[test]
    fn test_geometry_contains() {
        let geometry = GridGeometry::new(4, 2);

        assert!(geometry.contains(0, 0));
        assert!(geometry.contains(3, 3));
        assert!(!geometry.contains(-1, 0));
        assert!(!geometry.contains(0, 4));
    }

    // Tests the half-grid corner is always empty for circle and diamond on a 15 grid
    #[test]
    fn test_corner_cell_never_filled_with_cutoff() {
        let geometry = GridGeometry::new(15, 16);
        let mut rng = StdRng::seed_from_u64(42);

        for shape in [Shape::Circle, Shape::Diamond] {
            for _ in 0..1_000 {
                assert!(!fill_likelihood(&geometry, 0, 0, shape, &mut rng));
            }
        }
    }

    // Tests the radius cutoff returns without consuming a draw
    #[test]
    fn test_cutoff_consumes_no_randomness() {
        let geometry = GridGeometry::new(15, 16);
        let mut used = StdRng::seed_from_u64(9);
        let mut fresh = used.clone();

        assert!(!fill_likelihood(&geometry, 0, 0, Shape::Circle, &mut used));

        assert_eq!(used.random::<u64>(), fresh.random::<u64>());
    }

    // Tests negative probabilities still draw but never fill
    #[test]
    fn test_negative_probability_draws_and_fails() {
        let geometry = GridGeometry::new(20, 32);
        let mut rng = StdRng::seed_from_u64(1);

        // Horizontal ellipse distance at the corner is (1 + 4) * 20 = 100
        for _ in 0..1_000 {
            assert!(!fill_likelihood(&geometry, 0, 0, Shape::EllipseX, &mut rng));
        }

        let mut used = StdRng::seed_from_u64(2);
        let mut fresh = used.clone();
        let _ = fill_likelihood(&geometry, 0, 0, Shape::EllipseX, &mut used);
        let _: f64 = fresh.random();
        assert_eq!(used.random::<u64>(), fresh.random::<u64>());
    }

    // Tests zero distance gives probability one
    #[test]
    fn test_center_cell_always_filled() {
        let geometry = GridGeometry::new(20, 32);
        let mut rng = StdRng::seed_from_u64(7);

        for shape in Shape::ALL {
            for _ in 0..200 {
                assert!(fill_likelihood(&geometry, 10, 10, shape, &mut rng), "{shape}");
            }
        }
    }

    // Tests built grid has grid_size rows and half-width columns
    #[test]
    fn test_build_dimensions() {
        let geometry = GridGeometry::new(20, 32);
        let mut rng = StdRng::seed_from_u64(42);

        let grid = HalfGrid::build(&geometry, Shape::Diamond, &mut rng);

        assert_eq!(grid.rows(), 20);
        assert_eq!(grid.cols(), 10);
        assert!(grid.filled_count() > 0);
    }

    // Tests circle cells beyond the cutoff radius are never filled
    #[test]
    fn test_build_respects_circle_cutoff() {
        let geometry = GridGeometry::new(20, 32);
        let radius = geometry.cutoff_radius() as f64;

        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let grid = HalfGrid::build(&geometry, Shape::Circle, &mut rng);

            for [x, y] in grid.filled_cells() {
                let distance = euclidean([x as f64, y as f64], geometry.center());
                assert!(distance <= radius, "({x}, {y}) at {distance}");
            }
        }
    }

    // Tests identical seeds build identical grids
    #[test]
    fn test_build_is_deterministic() {
        let geometry = GridGeometry::new(20, 32);

        let first = HalfGrid::build(&geometry, Shape::Ellipse, &mut StdRng::seed_from_u64(77));
        let second = HalfGrid::build(&geometry, Shape::Ellipse, &mut StdRng::seed_from_u64(77));

        assert_eq!(first, second);
    }

    // Tests filled cells come back row-major as [x, y]
    #[test]
    fn test_filled_cells_row_major() {
        let grid = HalfGrid::from_array(array![
            [true, true],
            [false, true],
            [true, false],
            [false, false]
        ]);

        let cells: Vec<[usize; 2]> = grid.filled_cells().collect();

        assert_eq!(cells, vec![[0, 0], [1, 0], [1, 1], [0, 2]]);
        assert_eq!(grid.filled_count(), 4);
        assert!(grid.is_filled(1, 1));
        assert!(!grid.is_filled(0, 1));
        assert!(!grid.is_filled(5, 5));
    }
}
