mod tests {
    use crate::format::{
        format_distance, format_general, format_mass_readout, format_radius_readout, format_tick,
    };
    use crate::physics::{BlackHole, AU_KM};
    use crate::scale::DistanceUnit;

    #[test]
    fn test_km_labels() {
        assert_eq!(format_distance(58_000_000.0, DistanceUnit::Kilometers), "58.00 Mkm");
        assert_eq!(format_distance(5_000.0, DistanceUnit::Kilometers), "5.0k km");
        assert_eq!(format_distance(500.0, DistanceUnit::Kilometers), "500 km");
        assert_eq!(format_distance(8.4, DistanceUnit::Kilometers), "8 km");
        assert_eq!(format_distance(1_000.0, DistanceUnit::Kilometers), "1.0k km");
        assert_eq!(format_distance(1.0e6, DistanceUnit::Kilometers), "1.00 Mkm");
    }

    #[test]
    fn test_au_labels() {
        assert_eq!(format_distance(1.5 * AU_KM, DistanceUnit::AstronomicalUnits), "1.5 AU");
        assert_eq!(format_distance(67.86 * AU_KM, DistanceUnit::AstronomicalUnits), "67.9 AU");
        assert_eq!(format_distance(AU_KM, DistanceUnit::AstronomicalUnits), "1 AU");
    }

    #[test]
    fn test_general_format_fixed_notation() {
        assert_eq!(format_general(197.47, 3), "197");
        assert_eq!(format_general(2.954126, 4), "2.954");
        assert_eq!(format_general(1.5, 3), "1.5");
        assert_eq!(format_general(0.000_123_4, 3), "0.000123");
        assert_eq!(format_general(9.9996, 4), "10");
        assert_eq!(format_general(-2.5, 3), "-2.5");
    }

    #[test]
    fn test_general_format_exponent_notation() {
        assert_eq!(format_general(1.0e10, 4), "1e+10");
        assert_eq!(format_general(123_456.0, 4), "1.235e+05");
        assert_eq!(format_general(0.000_012_34, 3), "1.23e-05");
        assert_eq!(format_general(0.0, 3), "0");
    }

    #[test]
    fn test_readouts() {
        let lightest = BlackHole::new(1.0);
        assert_eq!(format_mass_readout(&lightest), "1 M☉");
        assert_eq!(format_radius_readout(&lightest, DistanceUnit::Kilometers), "2.954 km");

        let heaviest = BlackHole::new(1.0e10);
        assert_eq!(format_mass_readout(&heaviest), "1e+10 M☉");
        assert_eq!(
            format_radius_readout(&heaviest, DistanceUnit::AstronomicalUnits),
            "197.5 AU"
        );
    }

    #[test]
    fn test_tick_labels() {
        assert_eq!(format_tick(0.0), "0");
        assert_eq!(format_tick(-5.0), "-5");
        assert_eq!(format_tick(250.0), "250");
        assert_eq!(format_tick(2.0e7), "2e+07");
    }
}
