mod tests {
    use approx::assert_relative_eq;

    use crate::physics::{schwarzschild_radius_km, AU_KM};
    use crate::scale::{
        select_mode, select_scale, select_unit, DisplayMode, DistanceUnit, AU_SWITCH_KM,
        HALF_MERCURY_ORBIT_KM, NEAR_SUN_LIMIT_KM,
    };

    #[test]
    fn test_thresholds() {
        assert_relative_eq!(AU_SWITCH_KM, 7_479_893.5, epsilon = 1.0);
        assert_relative_eq!(HALF_MERCURY_ORBIT_KM, 28_947_188.0, epsilon = 10.0);
        assert_relative_eq!(NEAR_SUN_LIMIT_KM, 69_570.0);
    }

    #[test]
    fn test_unit_boundary_is_strict() {
        assert_eq!(select_unit(AU_SWITCH_KM), DistanceUnit::Kilometers);
        assert_eq!(select_unit(AU_SWITCH_KM * (1.0 + 1e-12)), DistanceUnit::AstronomicalUnits);
        assert_eq!(select_unit(1.0), DistanceUnit::Kilometers);
    }

    #[test]
    fn test_large_scale_boundary_is_inclusive() {
        assert_eq!(select_mode(HALF_MERCURY_ORBIT_KM), DisplayMode::LargeScale);
        assert_eq!(select_mode(HALF_MERCURY_ORBIT_KM * (1.0 - 1e-12)), DisplayMode::SmallScaleFar);
    }

    #[test]
    fn test_near_sun_boundary() {
        assert_eq!(select_mode(NEAR_SUN_LIMIT_KM), DisplayMode::SmallScaleFar);
        assert_eq!(select_mode(NEAR_SUN_LIMIT_KM - 1.0), DisplayMode::SmallScaleNearSun);
        assert_eq!(select_mode(5_000.0), DisplayMode::SmallScaleNearSun);
    }

    #[test]
    fn test_slider_extremes() {
        let lightest = select_scale(schwarzschild_radius_km(1.0));
        assert_eq!(lightest.unit, DistanceUnit::Kilometers);
        assert_eq!(lightest.mode, DisplayMode::SmallScaleNearSun);

        let heaviest = select_scale(schwarzschild_radius_km(1.0e10));
        assert_eq!(heaviest.unit, DistanceUnit::AstronomicalUnits);
        assert_eq!(heaviest.mode, DisplayMode::LargeScale);
    }

    #[test]
    fn test_unit_conversion() {
        let unit = DistanceUnit::AstronomicalUnits;
        assert_relative_eq!(unit.from_km(3.0 * AU_KM), 3.0, max_relative = 1e-12);
        assert_eq!(unit.symbol(), "AU");
        assert_relative_eq!(DistanceUnit::Kilometers.from_km(42.0), 42.0);
        assert_eq!(DistanceUnit::Kilometers.symbol(), "km");
    }
}
