#[cfg(test)]
mod _tests_replicator {
    use super::super::replicator::{snap_center, Replicator};
    use crate::symmetries::{parse_symmetry_spec, SymmetrySpec};
    use approx::assert_relative_eq;
    use nalgebra::Vector3;
    use std::collections::HashSet;

    #[test]
    fn test_snap_center_to_half_grid() {
        assert_eq!(snap_center(&Vector3::new(10.0, 5.0, 10.0)), Vector3::new(10.0, 5.0, 10.0));

        let snapped = snap_center(&Vector3::new(10.3, 64.8, -3.2));
        assert_relative_eq!(snapped.x, 10.5);
        assert_relative_eq!(snapped.y, 65.0);
        assert_relative_eq!(snapped.z, -3.0);
    }

    #[test]
    fn test_snap_center_ties_to_even() {
        let snapped = snap_center(&Vector3::new(10.25, 10.75, -0.25));
        assert_relative_eq!(snapped.x, 10.0);
        assert_relative_eq!(snapped.y, 11.0);
        assert_relative_eq!(snapped.z, 0.0);
    }

    #[test]
    fn test_default_mirrors_replicate_three_points() {
        let replicator = Replicator::from_player_position(
            &Vector3::new(10.0, 5.0, 10.0),
            &SymmetrySpec::default_mirrors(),
        );
        assert_eq!(replicator.copy_count(), 4);

        let points = replicator.replicate(&Vector3::new(12.0, 5.0, 10.0));
        assert_eq!(points.len(), 3);
        for expected in [
            Vector3::new(12.5, 5.5, 9.5),
            Vector3::new(7.5, 5.5, 10.5),
            Vector3::new(7.5, 5.5, 9.5),
        ] {
            assert!(points.contains(&expected), "missing {:?}", expected);
        }

        let blocks: HashSet<_> = replicator
            .replicate_block(&Vector3::new(12, 5, 10))
            .into_iter()
            .collect();
        let expected: HashSet<_> = [
            Vector3::new(12, 5, 9),
            Vector3::new(7, 5, 10),
            Vector3::new(7, 5, 9),
        ]
        .into_iter()
        .collect();
        assert_eq!(blocks, expected);
    }

    #[test]
    fn test_rotation_copies_of_a_block() {
        let spec = parse_symmetry_spec(&["90"]).unwrap();
        let replicator = Replicator::new(Vector3::new(0.5, 0.0, 0.5), &spec);
        assert_eq!(replicator.copy_count(), 4);

        // Block one step east of the center column; its quarter-turn orbit
        let blocks: HashSet<_> = replicator
            .replicate_block(&Vector3::new(1, 0, 0))
            .into_iter()
            .collect();
        let expected: HashSet<_> = [
            Vector3::new(0, 0, -1),
            Vector3::new(-1, 0, 0),
            Vector3::new(0, 0, 1),
        ]
        .into_iter()
        .collect();
        assert_eq!(blocks, expected);
    }

    #[test]
    fn test_pillar_translation_copies() {
        let spec = parse_symmetry_spec(&["t", "3", "0", "1", "0"]).unwrap();
        let replicator = Replicator::new(Vector3::zeros(), &spec);
        assert_eq!(
            replicator.replicate_block(&Vector3::new(4, 60, -2)),
            vec![Vector3::new(4, 61, -2), Vector3::new(4, 62, -2)]
        );
    }

    #[test]
    fn test_degenerate_group_has_no_copies() {
        let spec = parse_symmetry_spec(&["t", "1", "0", "0", "0"]).unwrap();
        let replicator = Replicator::new(Vector3::zeros(), &spec);
        assert_eq!(replicator.copy_count(), 1);
        assert!(replicator.replicate(&Vector3::new(1.0, 2.0, 3.0)).is_empty());
    }

    #[test]
    fn test_center_block_of_linear_group_maps_near_itself() {
        let center = Vector3::new(0.5, 70.5, 0.5);
        let spec = parse_symmetry_spec(&["n", "e", "u", "90"]).unwrap();
        let replicator = Replicator::new(center, &spec);

        // The block whose center is the center of symmetry is fixed by every linear map
        for block in replicator.replicate_block(&Vector3::new(0, 70, 0)) {
            assert_eq!(block, Vector3::new(0, 70, 0));
        }
    }
}
