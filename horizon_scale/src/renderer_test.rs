mod tests {
    use approx::assert_relative_eq;
    use glam::Vec2;

    use crate::catalog::palette;
    use crate::figure::Figure;
    use crate::physics::BlackHole;
    use crate::renderer::{srgb_to_linear, tessellate, LineVertex};

    fn with_color(vertices: &[LineVertex], color: [f32; 4]) -> Vec<LineVertex> {
        let color = srgb_to_linear(color);
        vertices.iter().copied().filter(|v| v.color == color).collect()
    }

    #[test]
    fn test_line_list_has_whole_segments() {
        for mass in [1.0, 1.0e5, 1.0e10] {
            let figure = Figure::build(BlackHole::new(mass));
            let upp = (2.0 * figure.limit / 800.0) as f32;
            assert_eq!(tessellate(&figure, upp).len() % 2, 0);
        }
    }

    #[test]
    fn test_horizon_ring_sits_at_schwarzschild_radius() {
        let figure = Figure::build(BlackHole::new(1.0));
        let upp = (2.0 * figure.limit / 800.0) as f32;
        let radius = figure.horizon.radius as f32;

        let ring: Vec<_> = with_color(&tessellate(&figure, upp), palette::BLACK)
            .into_iter()
            .map(|v| Vec2::from_array(v.position).length())
            // Skip the centre "+" marker
            .filter(|r| *r > radius * 0.5)
            .collect();

        assert!(!ring.is_empty());
        for r in ring {
            assert!((r - radius).abs() <= 2.0 * upp, "ring vertex at {r}, horizon {radius}");
        }
    }

    #[test]
    fn test_dashed_circle_skips_gaps() {
        // Beyond Eris the only C1 circle is the dashed 1.2 R_s marker, 2 px wide
        let figure = Figure::build(BlackHole::new(1.0e10));
        let upp = (2.0 * figure.limit / 800.0) as f32;

        let dashed = with_color(&tessellate(&figure, upp), palette::C1);
        // 256 segments in runs of 6: 22 drawn runs, the last one 4 long
        assert_eq!(dashed.len(), 2 * 130 * 2);
    }

    #[test]
    fn test_grid_only_in_small_scale() {
        let small = Figure::build(BlackHole::new(1.0));
        let upp = (2.0 * small.limit / 800.0) as f32;
        let grid = with_color(&tessellate(&small, upp), palette::GRID_GRAY);
        // One vertical and one horizontal line per tick
        assert_eq!(grid.len(), small.ticks().len() * 4);

        let large = Figure::build(BlackHole::new(1.0e10));
        let upp = (2.0 * large.limit / 800.0) as f32;
        assert!(with_color(&tessellate(&large, upp), palette::GRID_GRAY).is_empty());
    }

    #[test]
    fn test_srgb_to_linear() {
        assert_eq!(srgb_to_linear([0.0, 1.0, 0.0, 0.5]), [0.0, 1.0, 0.0, 0.5]);
        assert_relative_eq!(srgb_to_linear([0.5, 0.5, 0.5, 1.0])[0], 0.214, epsilon = 0.001);
    }
}
