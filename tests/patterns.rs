mod common;

mod tests {
    use myrtio_led_cube::{Cell, CubeGeometry, Duration, patterns};

    use crate::common::{cells, cube3};

    const WAIT: Duration = Duration::from_millis(10);

    #[test]
    fn test_light_level() {
        let mut cube = cube3();
        cube.light_level(1, WAIT);

        let expected: Vec<Cell> = (0..9).map(|col| Cell::new(0, col)).collect();
        assert_eq!(cube.driver().lit(), expected);
        assert_eq!(cube.driver().delays(), [WAIT; 9]);
    }

    #[test]
    fn test_light_column() {
        let mut cube = cube3();
        cube.light_column(1, WAIT);
        assert_eq!(cube.driver().lit(), cells(&[(0, 0), (1, 0), (2, 0)]));
    }

    #[test]
    fn test_light_drop() {
        let mut cube = cube3();
        cube.light_drop(2, WAIT);
        assert_eq!(cube.driver().lit(), cells(&[(2, 1), (1, 1), (0, 1)]));
        assert_eq!(cube.driver().delays(), [WAIT; 3]);
    }

    #[test]
    fn test_light_row() {
        let mut cube = cube3();
        cube.light_row(2, 1, WAIT);
        assert_eq!(cube.driver().lit(), cells(&[(1, 1), (1, 4), (1, 7)]));

        cube.driver_mut().clear();
        cube.light_row(3, 9, WAIT);
        assert_eq!(cube.driver().lit(), cells(&[(2, 2), (2, 5), (2, 8)]));
    }

    #[test]
    fn test_row_above_levels_lights_nothing() {
        let mut cube = cube3();
        cube.light_row(5, 1, WAIT);
        assert!(cube.driver().lit().is_empty());
        assert_eq!(cube.driver().writes(), 0);
        assert_eq!(cube.driver().delays(), [WAIT; 3]);
    }

    #[test]
    fn test_light_plane() {
        let mut cube = cube3();
        cube.light_plane(2, WAIT);
        assert_eq!(
            cube.driver().lit(),
            cells(&[
                (0, 1),
                (0, 4),
                (0, 7),
                (1, 1),
                (1, 4),
                (1, 7),
                (2, 1),
                (2, 4),
                (2, 7)
            ])
        );
    }

    #[test]
    fn test_light_perimeter() {
        let mut cube = cube3();
        cube.light_perimeter(1, 2, WAIT);

        let ring = cells(&[
            (0, 0),
            (0, 1),
            (0, 2),
            (0, 5),
            (0, 8),
            (0, 7),
            (0, 6),
            (0, 3),
        ]);
        let expected: Vec<Cell> = ring.iter().chain(ring.iter()).copied().collect();
        assert_eq!(cube.driver().lit(), expected);
        assert_eq!(cube.driver().delays().len(), 16);
    }

    #[test]
    fn test_perimeter_plane_is_one_based() {
        let mut cube = cube3();
        cube.light_perimeter(3, 1, WAIT);
        let lit = cube.driver().lit();
        assert_eq!(lit.len(), 8);
        assert!(lit.iter().all(|cell| cell.level == 2));

        cube.driver_mut().clear();
        cube.light_perimeter(0, 1, WAIT);
        assert!(cube.driver().events.is_empty());
    }

    #[test]
    fn test_invalid_selectors_are_ignored() {
        let mut cube = cube3();
        cube.light_level(0, WAIT);
        cube.light_level(4, WAIT);
        cube.light_row(0, 1, WAIT);
        cube.light_row(7, 1, WAIT);
        cube.light_row(1, 0, WAIT);
        cube.light_plane(0, WAIT);
        cube.light_plane(7, WAIT);
        cube.light_column(0, WAIT);
        cube.light_column(10, WAIT);
        cube.light_drop(0, WAIT);
        cube.light_drop(10, WAIT);
        cube.light_perimeter(0, 1, WAIT);
        cube.light_perimeter(4, 1, WAIT);
        assert!(cube.driver().events.is_empty());
    }

    #[test]
    fn test_buffered_patterns_compose() {
        let mut cube = cube3();
        cube.enable_buffer(true);
        cube.light_column(5, WAIT);
        cube.light_level(3, WAIT);
        assert!(cube.driver().events.is_empty());
        assert_eq!(cube.buffer().lit_count(), 3 + 9 - 1);
    }

    #[test]
    fn test_random_light() {
        let mut cube = cube3();
        cube.random_light(5, WAIT);
        assert_eq!(cube.driver().lit().len(), 5);
        assert_eq!(cube.driver().delays(), [WAIT; 5]);

        let mut twin = cube3();
        twin.random_light(5, WAIT);
        assert_eq!(cube.driver().events, twin.driver().events);
    }

    #[test]
    fn test_random_column() {
        let mut cube = cube3();
        cube.random_column(4, WAIT);

        let lit = cube.driver().lit();
        assert_eq!(lit.len(), 12);
        for column in lit.chunks(3) {
            assert_eq!(column[0].level, 0);
            assert_eq!(column[1].level, 1);
            assert_eq!(column[2].level, 2);
            assert!(column.iter().all(|cell| cell.col == column[0].col));
            assert!(column[0].col < 9);
        }
    }

    #[test]
    fn test_generators_scale_with_geometry() {
        let geometry = CubeGeometry::new(4).unwrap();

        let ring = patterns::perimeter::<64>(geometry, 2).unwrap();
        assert_eq!(ring.len(), 12);
        assert!(ring.iter().all(|cell| cell.level == 1));

        let row = patterns::row::<64>(geometry, 2).unwrap();
        assert_eq!(&row[..], &cells(&[(1, 1), (1, 5), (1, 9), (1, 13)])[..]);

        let row = patterns::row::<64>(geometry, 6).unwrap();
        assert_eq!(&row[..], &cells(&[(5, 4), (5, 5), (5, 6), (5, 7)])[..]);
        assert!(patterns::row::<64>(geometry, 9).is_none());

        let plane = patterns::plane::<64>(geometry, 8).unwrap();
        assert_eq!(plane.len(), 16);
        assert_eq!(plane[0], Cell::new(0, 12));
        assert_eq!(plane[15], Cell::new(3, 15));

        let level = patterns::level::<64>(geometry, 4).unwrap();
        assert_eq!(level.len(), 16);
        assert!(patterns::level::<64>(geometry, 5).is_none());
    }
}
