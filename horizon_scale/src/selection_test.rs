mod tests {
    use approx::assert_relative_eq;

    use crate::catalog::{palette, FAR_REFERENCES, NEAR_SUN_REFERENCES, SUN_LABEL, SUN_RADIUS_KM};
    use crate::physics::AU_KM;
    use crate::scale::{select_scale, DisplayMode, DistanceUnit};
    use crate::selection::{
        select, select_large_scale, select_small_scale, Marker, SCALE_MARKER_LABEL,
    };

    fn names(markers: &[Marker]) -> Vec<&'static str> {
        markers.iter().map(|m| m.name).collect()
    }

    #[test]
    fn test_between_earth_and_mars() {
        let comparison = select_large_scale(1.2 * AU_KM, DistanceUnit::AstronomicalUnits);

        let smaller = comparison.smaller.unwrap();
        assert_eq!(smaller.name, "Earth");
        assert_eq!(smaller.color, palette::C0);
        assert_eq!(names(&comparison.larger), vec!["Mars", "Ceres"]);
        assert_eq!(comparison.larger[0].color, palette::C1);
        assert_eq!(comparison.larger[1].color, palette::C2);
    }

    #[test]
    fn test_inside_mercury_has_no_smaller_orbit_in_au() {
        let comparison = select_large_scale(0.3 * AU_KM, DistanceUnit::AstronomicalUnits);

        assert!(comparison.smaller.is_none());
        assert_eq!(names(&comparison.larger), vec!["Mercury", "Venus"]);
    }

    #[test]
    fn test_sun_stands_in_when_labels_are_km() {
        let comparison = select_large_scale(0.3 * AU_KM, DistanceUnit::Kilometers);

        let smaller = comparison.smaller.unwrap();
        assert_eq!(smaller.name, SUN_LABEL);
        assert_relative_eq!(smaller.radius_km, SUN_RADIUS_KM);
    }

    #[test]
    fn test_beyond_eris_uses_scale_marker() {
        let radius_km = 100.0 * AU_KM;
        let comparison = select_large_scale(radius_km, DistanceUnit::AstronomicalUnits);

        assert_eq!(comparison.smaller.unwrap().name, "Eris");
        assert_eq!(comparison.larger.len(), 1);
        assert_eq!(comparison.larger[0].name, SCALE_MARKER_LABEL);
        assert_relative_eq!(comparison.larger[0].radius_km, 1.2 * radius_km);
    }

    #[test]
    fn test_orbit_equal_to_horizon_is_skipped() {
        let comparison = select_large_scale(AU_KM, DistanceUnit::AstronomicalUnits);

        assert_eq!(comparison.smaller.unwrap().name, "Venus");
        assert_eq!(names(&comparison.larger), vec!["Mars", "Ceres"]);
    }

    #[test]
    fn test_near_sun_five_thousand_km() {
        let comparison = select_small_scale(5_000.0, DisplayMode::SmallScaleNearSun, &NEAR_SUN_REFERENCES);

        assert_eq!(comparison.smaller.unwrap().name, "Moon (Earth's moon)");
        assert_eq!(names(&comparison.larger), vec!["Earth (radius)"]);
        assert_eq!(comparison.larger[0].color, palette::STEEL_BLUE);
    }

    #[test]
    fn test_near_sun_lightest_black_hole() {
        let comparison = select_small_scale(2.95, DisplayMode::SmallScaleNearSun, &NEAR_SUN_REFERENCES);

        assert!(comparison.smaller.is_none());
        assert_eq!(
            names(&comparison.larger),
            vec!["Eros (asteroid)", "Neutron star (typical radius)"]
        );
    }

    #[test]
    fn test_body_equal_to_horizon_is_in_neither_list() {
        let comparison = select_small_scale(252.0, DisplayMode::SmallScaleNearSun, &NEAR_SUN_REFERENCES);

        assert_eq!(comparison.smaller.unwrap().name, "Neutron star (typical radius)");
        assert_eq!(names(&comparison.larger), vec!["Vesta (asteroid)", "Ceres (dwarf planet)"]);
        assert!(comparison.markers().all(|m| m.radius_km != 252.0));
    }

    #[test]
    fn test_far_set() {
        let comparison = select_small_scale(100_000.0, DisplayMode::SmallScaleFar, &FAR_REFERENCES);
        assert_eq!(comparison.smaller.unwrap().name, "Jupiter (radius)");
        assert_eq!(names(&comparison.larger), vec![SUN_LABEL]);
        assert_eq!(comparison.larger[0].color, palette::GOLD);

        let beyond_sun = select_small_scale(1.0e6, DisplayMode::SmallScaleFar, &FAR_REFERENCES);
        assert_eq!(beyond_sun.smaller.unwrap().name, SUN_LABEL);
        assert!(beyond_sun.larger.is_empty());
    }

    #[test]
    fn test_dispatch_follows_mode() {
        for radius_km in [5_000.0, 100_000.0, 1.2 * AU_KM] {
            let scale = select_scale(radius_km);
            assert_eq!(select(radius_km, scale).mode, scale.mode);
        }
    }

    #[test]
    fn test_markers_order_and_max() {
        let comparison = select_large_scale(1.2 * AU_KM, DistanceUnit::AstronomicalUnits);

        let order: Vec<_> = comparison.markers().map(|m| m.name).collect();
        assert_eq!(order, vec!["Earth", "Mars", "Ceres"]);
        assert_relative_eq!(comparison.max_radius_km().unwrap(), 2.766 * AU_KM);
    }
}
