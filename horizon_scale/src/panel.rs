//! egui layer: controls, legend, axis text and the equations sidebar

use egui::{Align2, Color32, Context, FontId, Pos2, Rect, RichText, Stroke};

use crate::catalog::{Rgba, REFERENCE_NOTES};
use crate::config::{
    LOG10_MASS_MAX, LOG10_MASS_MIN, LOG10_MASS_STEP, PAGE_HEADING, PLOT_MARGIN_BOTTOM,
    PLOT_MARGIN_LEFT, PLOT_MARGIN_RIGHT, PLOT_MARGIN_TOP, SLIDER_HELP, SLIDER_LABEL,
};
use crate::figure::{Figure, LineStyle, MassSetting};
use crate::format::{format_mass_readout, format_radius_readout, format_tick};
use crate::scale::DisplayMode;

const TEXT_COLOR: Color32 = Color32::BLACK;
const LEGEND_SAMPLE_WIDTH: f32 = 28.0;
const LEGEND_PADDING: f32 = 8.0;
const TICK_LENGTH: f32 = 4.0;

/// An equation with its name and formula
pub struct Equation {
    pub name: &'static str,
    pub formula: &'static str,
    pub description: &'static str,
}

pub const SCHWARZSCHILD_EQUATIONS: &[Equation] = &[
    Equation {
        name: "Schwarzschild Radius",
        formula: "rₛ = 2GM/c²",
        description: "Event horizon radius",
    },
    Equation {
        name: "Per Solar Mass",
        formula: "rₛ ≈ 2.95 km × (M/M☉)",
        description: "Linear in mass",
    },
    Equation {
        name: "Slider Mapping",
        formula: "M = 10^s M☉,  0 ≤ s ≤ 10",
        description: "One step is a factor of 10^0.1",
    },
    Equation {
        name: "Astronomical Unit",
        formula: "1 AU = 149,597,870.7 km",
        description: "Labels switch to AU above 0.05 AU",
    },
];

pub const SCHWARZSCHILD_VARIABLES: &[(&str, &str)] = &[
    ("G", "Gravitational constant"),
    ("M", "Black hole mass"),
    ("M☉", "Solar mass, 1.989×10³⁰ kg"),
    ("c", "Speed of light"),
    ("rₛ", "Schwarzschild radius"),
    ("s", "Slider position"),
];

/// Draw the equations sidebar
pub fn draw_equations_sidebar(
    ctx: &Context,
    title: &str,
    equations: &[Equation],
    variables: &[(&str, &str)],
    figure: &Figure,
) {
    egui::SidePanel::right("equations_panel")
        .resizable(true)
        .default_width(280.0)
        .show(ctx, |ui| {
            ui.heading(RichText::new(title).color(Color32::LIGHT_BLUE));
            ui.separator();

            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.collapsing(RichText::new("📐 Equations").strong(), |ui| {
                    for eq in equations {
                        ui.group(|ui| {
                            ui.label(RichText::new(eq.name).strong().color(Color32::YELLOW));
                            ui.label(RichText::new(eq.formula).monospace().color(Color32::WHITE));
                            ui.label(RichText::new(eq.description).small().italics());
                        });
                        ui.add_space(4.0);
                    }
                });

                ui.add_space(8.0);

                ui.collapsing(RichText::new("📖 Variables").strong(), |ui| {
                    egui::Grid::new("variables_grid")
                        .num_columns(2)
                        .spacing([10.0, 4.0])
                        .show(ui, |ui| {
                            for (symbol, meaning) in variables {
                                ui.label(RichText::new(*symbol).monospace().color(Color32::LIGHT_GREEN));
                                ui.label(*meaning);
                                ui.end_row();
                            }
                        });
                });

                ui.add_space(8.0);

                ui.collapsing(RichText::new("🔭 Current scale").strong(), |ui| {
                    egui::Grid::new("scale_grid")
                        .num_columns(2)
                        .spacing([10.0, 4.0])
                        .show(ui, |ui| {
                            ui.label("Comparison");
                            ui.label(mode_name(figure.scale.mode));
                            ui.end_row();
                            ui.label("Units");
                            ui.label(figure.scale.unit.symbol());
                            ui.end_row();
                            ui.label("References");
                            ui.label(figure.references.len().to_string());
                            ui.end_row();
                        });
                });
            });
        });
}

pub fn mode_name(mode: DisplayMode) -> &'static str {
    match mode {
        DisplayMode::LargeScale => "Planetary orbits",
        DisplayMode::SmallScaleNearSun => "Small bodies",
        DisplayMode::SmallScaleFar => "Planets and the Sun",
    }
}

/// Heading, mass slider and readout. A slider move rebuilds the figure before
/// the readout is drawn. Returns true when the slider moved.
pub fn draw_controls(ctx: &Context, setting: &mut MassSetting) -> bool {
    egui::TopBottomPanel::top("controls")
        .show(ctx, |ui| {
            ui.heading(PAGE_HEADING);
            ui.add_space(4.0);

            let mut log10_mass = setting.log10_mass();
            let response = ui
                .add(
                    egui::Slider::new(&mut log10_mass, LOG10_MASS_MIN..=LOG10_MASS_MAX)
                        .step_by(LOG10_MASS_STEP)
                        .fixed_decimals(1)
                        .text(SLIDER_LABEL),
                )
                .on_hover_text(SLIDER_HELP);
            let changed = response.changed() && setting.set_log10_mass(log10_mass);

            let figure = setting.figure();
            ui.horizontal(|ui| {
                ui.label(RichText::new("Mass:").strong());
                ui.label(format_mass_readout(&figure.black_hole));
                ui.label("  →  ");
                ui.label(RichText::new("Schwarzschild radius:").strong());
                ui.label(format_radius_readout(&figure.black_hole, figure.scale.unit));
            });
            ui.add_space(4.0);

            changed
        })
        .inner
}

pub fn draw_reference_values(ctx: &Context) {
    egui::TopBottomPanel::bottom("reference_values").show(ctx, |ui| {
        ui.collapsing("Reference values", |ui| {
            for note in REFERENCE_NOTES {
                ui.horizontal_wrapped(|ui| {
                    ui.label("•");
                    match note.split_once(": ") {
                        Some((key, value)) => {
                            ui.label(RichText::new(format!("{key}:")).strong());
                            ui.label(value);
                        }
                        None => {
                            ui.label(*note);
                        }
                    }
                });
            }
        });
    });
}

/// Move the slider by whole steps, staying on the step grid and in range.
pub fn step_slider(log10_mass: f64, steps: i32) -> f64 {
    let index = (log10_mass / LOG10_MASS_STEP).round() + steps as f64;
    (index * LOG10_MASS_STEP).clamp(LOG10_MASS_MIN, LOG10_MASS_MAX)
}

/// Largest square inside `area` after leaving room for title and axis text.
pub fn square_plot_rect(area: Rect) -> Option<Rect> {
    let width = area.width() - PLOT_MARGIN_LEFT - PLOT_MARGIN_RIGHT;
    let height = area.height() - PLOT_MARGIN_TOP - PLOT_MARGIN_BOTTOM;
    let side = width.min(height);
    if side < 1.0 {
        return None;
    }

    let center = Pos2::new(
        area.left() + PLOT_MARGIN_LEFT + width * 0.5,
        area.top() + PLOT_MARGIN_TOP + height * 0.5,
    );
    Some(Rect::from_center_size(center, egui::vec2(side, side)))
}

pub fn to_color32(color: Rgba) -> Color32 {
    let [r, g, b, a] = color.map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8);
    Color32::from_rgba_unmultiplied(r, g, b, a)
}

/// Title, axis labels, ticks and legend around the figure. Returns the square
/// plot rectangle (in points) the GPU pass should fill, if there is room.
pub fn draw_figure_overlay(ctx: &Context, figure: &Figure) -> Option<Rect> {
    egui::CentralPanel::default()
        .frame(egui::Frame::none())
        .show(ctx, |ui| {
            let plot = square_plot_rect(ui.max_rect())?;
            let painter = ui.painter();

            painter.rect_stroke(plot, 0.0, Stroke::new(1.0, TEXT_COLOR));

            painter.text(
                Pos2::new(plot.center().x, plot.top() - 10.0),
                Align2::CENTER_BOTTOM,
                &figure.title,
                FontId::proportional(16.0),
                TEXT_COLOR,
            );

            painter.text(
                Pos2::new(plot.center().x, plot.bottom() + 26.0),
                Align2::CENTER_TOP,
                &figure.axis_label,
                FontId::proportional(14.0),
                TEXT_COLOR,
            );

            let y_label = painter.layout_no_wrap(figure.axis_label.clone(), FontId::proportional(14.0), TEXT_COLOR);
            let y_label_pos = Pos2::new(plot.left() - 64.0, plot.center().y + y_label.size().x * 0.5);
            painter.add(
                egui::epaint::TextShape::new(y_label_pos, y_label, TEXT_COLOR)
                    .with_angle(-std::f32::consts::FRAC_PI_2),
            );

            draw_ticks(painter, plot, figure);
            draw_legend(painter, plot, figure);

            Some(plot)
        })
        .inner
}

fn draw_ticks(painter: &egui::Painter, plot: Rect, figure: &Figure) {
    let half = plot.width() * 0.5;
    let stroke = Stroke::new(1.0, TEXT_COLOR);
    let font = FontId::proportional(11.0);

    for tick in figure.ticks() {
        let offset = (tick / figure.limit) as f32 * half;

        let x = plot.center().x + offset;
        painter.line_segment([Pos2::new(x, plot.bottom()), Pos2::new(x, plot.bottom() + TICK_LENGTH)], stroke);
        painter.text(
            Pos2::new(x, plot.bottom() + TICK_LENGTH + 2.0),
            Align2::CENTER_TOP,
            format_tick(tick),
            font.clone(),
            TEXT_COLOR,
        );

        let y = plot.center().y - offset;
        painter.line_segment([Pos2::new(plot.left() - TICK_LENGTH, y), Pos2::new(plot.left(), y)], stroke);
        painter.text(
            Pos2::new(plot.left() - TICK_LENGTH - 2.0, y),
            Align2::RIGHT_CENTER,
            format_tick(tick),
            font.clone(),
            TEXT_COLOR,
        );
    }
}

fn draw_legend(painter: &egui::Painter, plot: Rect, figure: &Figure) {
    let entries: Vec<_> = figure
        .legend()
        .map(|(label, color, style)| {
            let galley = painter.layout_no_wrap(label.to_string(), FontId::proportional(12.0), TEXT_COLOR);
            (galley, color, style)
        })
        .collect();
    if entries.is_empty() {
        return;
    }

    let row_height = entries.iter().map(|(g, _, _)| g.size().y).fold(0.0, f32::max) + 4.0;
    let text_width = entries.iter().map(|(g, _, _)| g.size().x).fold(0.0, f32::max);
    let size = egui::vec2(
        LEGEND_SAMPLE_WIDTH + text_width + 3.0 * LEGEND_PADDING,
        row_height * entries.len() as f32 + 2.0 * LEGEND_PADDING,
    );
    let frame = Rect::from_min_size(
        Pos2::new(plot.right() - size.x - LEGEND_PADDING, plot.top() + LEGEND_PADDING),
        size,
    );

    painter.rect_filled(frame, 4.0, Color32::from_white_alpha(220));
    painter.rect_stroke(frame, 4.0, Stroke::new(1.0, Color32::LIGHT_GRAY));

    for (row, (galley, color, style)) in entries.into_iter().enumerate() {
        let y = frame.top() + LEGEND_PADDING + row_height * (row as f32 + 0.5);
        let x0 = frame.left() + LEGEND_PADDING;
        let stroke = Stroke::new(2.0, to_color32(color));

        match style {
            LineStyle::Solid => {
                painter.line_segment([Pos2::new(x0, y), Pos2::new(x0 + LEGEND_SAMPLE_WIDTH, y)], stroke);
            }
            LineStyle::Dashed => {
                let dash = LEGEND_SAMPLE_WIDTH / 5.0;
                for i in [0.0, 2.0, 4.0] {
                    let start = x0 + i * dash;
                    painter.line_segment([Pos2::new(start, y), Pos2::new(start + dash, y)], stroke);
                }
            }
        }

        let text_pos = Pos2::new(x0 + LEGEND_SAMPLE_WIDTH + LEGEND_PADDING, y - galley.size().y * 0.5);
        painter.galley(text_pos, galley, TEXT_COLOR);
    }
}
