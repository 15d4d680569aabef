mod tests {
    use approx::assert_relative_eq;
    use glam::Vec4;
    use winit::dpi::PhysicalSize;

    use crate::camera::Camera2D;
    use crate::graphics::PixelViewport;

    #[test]
    fn test_fit_symmetric_on_square_viewport() {
        let mut camera = Camera2D::new(1.0);
        camera.fit_symmetric(250.0);

        let corner = camera.view_projection() * Vec4::new(250.0, -250.0, 0.0, 1.0);
        assert_relative_eq!(corner.x, 1.0, epsilon = 1e-6);
        assert_relative_eq!(corner.y, -1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_fit_symmetric_on_tall_viewport_keeps_limit_horizontally() {
        let mut camera = Camera2D::new(0.5);
        camera.fit_symmetric(10.0);

        // Width is the limiting axis, so x = limit lands on the edge
        let edge = camera.view_projection() * Vec4::new(10.0, 0.0, 0.0, 1.0);
        assert_relative_eq!(edge.x, 1.0, epsilon = 1e-6);
        assert_relative_eq!(camera.zoom, 20.0);
    }

    #[test]
    fn test_units_per_pixel() {
        let mut camera = Camera2D::new(1.0);
        camera.fit_symmetric(400.0);
        assert_relative_eq!(camera.units_per_pixel(800.0), 1.0);
    }

    #[test]
    fn test_viewport_clamping() {
        let size = PhysicalSize::new(800, 600);

        let inside = PixelViewport::new(10.0, 20.0, 100.0, 100.0);
        assert_eq!(inside.clamped_to(size), Some(inside));

        let overflowing = PixelViewport::new(700.0, 500.0, 200.0, 200.0);
        let clipped = overflowing.clamped_to(size).unwrap();
        assert_relative_eq!(clipped.width, 100.0);
        assert_relative_eq!(clipped.height, 100.0);

        let outside = PixelViewport::new(900.0, 0.0, 50.0, 50.0);
        assert_eq!(outside.clamped_to(size), None);
    }
}
