mod tests {
    use approx::assert_relative_eq;

    use crate::parallax::{distance_parsecs, greeting, PROXIMA_CENTAURI_PARALLAX_ARCSEC};

    #[test]
    fn test_distance_is_inverse_parallax() {
        assert_relative_eq!(distance_parsecs(1.0), 1.0);
        assert_relative_eq!(distance_parsecs(0.5), 2.0);
        assert_relative_eq!(
            distance_parsecs(PROXIMA_CENTAURI_PARALLAX_ARCSEC),
            1.302,
            epsilon = 0.001
        );
    }

    #[test]
    fn test_greeting() {
        let lines = greeting();
        assert_eq!(lines[0], "# Welcome to Astronomy Tools");
        assert_eq!(lines[1], "This is my first astronomy app!");
        assert_eq!(lines[2], "Distance to Proxima Centauri: 1.30 parsecs");
    }
}
