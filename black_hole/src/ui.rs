//! Control sidebar: parameter sliders, physics readouts, and the equations
//! reference, drawn with egui.

use egui::{Color32, Context, RichText};

use crate::controller::{ParameterController, VisualUpdate};

/// An equation with its name and formula
pub struct Equation {
    pub name: &'static str,
    pub formula: &'static str,
    pub description: &'static str,
}

pub const BLACK_HOLE_EQUATIONS: &[Equation] = &[
    Equation {
        name: "Schwarzschild Radius",
        formula: "rₛ = 2GM/c²",
        description: "Event horizon radius",
    },
    Equation {
        name: "Hawking Temperature",
        formula: "T = ℏc³/(8πGMk_B)",
        description: "Black hole thermal radiation",
    },
    Equation {
        name: "Horizon Area",
        formula: "A = 4πrₛ²",
        description: "Event horizon surface area",
    },
    Equation {
        name: "Evaporation Lifetime",
        formula: "t = 5120πG²M³/(ℏc⁴)",
        description: "Time to evaporate via Hawking radiation",
    },
    Equation {
        name: "Innermost Stable Orbit",
        formula: "r_ISCO = 6GM/c² = 3rₛ",
        description: "Inner edge of the accretion disk",
    },
];

pub const BLACK_HOLE_VARIABLES: &[(&str, &str)] = &[
    ("G", "Gravitational constant"),
    ("M", "Black hole mass"),
    ("c", "Speed of light"),
    ("rₛ", "Schwarzschild radius"),
    ("ℏ", "Reduced Planck constant"),
    ("k_B", "Boltzmann constant"),
    ("a/M", "Dimensionless spin parameter"),
];

/// Draw the parameter sidebar. Returns the uniform update when a slider
/// changed this frame; each event touches exactly one parameter field.
pub fn draw_control_panel(
    ctx: &Context,
    controller: &mut ParameterController,
) -> Option<VisualUpdate> {
    let mut update = None;

    egui::SidePanel::right("controls_panel")
        .resizable(true)
        .default_width(300.0)
        .show(ctx, |ui| {
            ui.heading(RichText::new("Black Hole Simulator").color(Color32::LIGHT_BLUE));
            ui.separator();

            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.label(RichText::new("Parameters").strong());

                let mut mass = controller.params().mass;
                if ui
                    .add(egui::Slider::new(&mut mass, 1.0..=100.0).text("Mass (M☉)"))
                    .changed()
                {
                    update = Some(controller.set_mass(mass));
                }

                let mut spin = controller.params().spin;
                if ui
                    .add(egui::Slider::new(&mut spin, 0.0..=1.0).text("Spin (a/M)"))
                    .changed()
                {
                    update = Some(controller.set_spin(spin));
                }

                let mut accretion = controller.params().accretion_rate;
                if ui
                    .add(egui::Slider::new(&mut accretion, 0.0..=2.0).text("Accretion rate"))
                    .changed()
                {
                    update = Some(controller.set_accretion_rate(accretion));
                }

                ui.add_space(8.0);
                ui.separator();
                ui.label(RichText::new("Physics").strong());

                let readout = controller.readout();
                egui::Grid::new("readout_grid")
                    .num_columns(2)
                    .spacing([10.0, 4.0])
                    .show(ui, |ui| {
                        ui.label("Schwarzschild radius");
                        ui.label(RichText::new(&readout.radius).monospace());
                        ui.end_row();
                        ui.label("Horizon area");
                        ui.label(RichText::new(&readout.area).monospace());
                        ui.end_row();
                        ui.label("Hawking temperature");
                        ui.label(RichText::new(&readout.temperature).monospace());
                        ui.end_row();
                        ui.label("Evaporation lifetime");
                        ui.label(RichText::new(&readout.lifetime).monospace());
                        ui.end_row();
                        ui.label("Tidal forces");
                        ui.label(
                            RichText::new(&readout.tidal)
                                .monospace()
                                .color(Color32::YELLOW),
                        );
                        ui.end_row();
                    });

                ui.add_space(8.0);

                ui.collapsing(RichText::new("📐 Equations").strong(), |ui| {
                    for eq in BLACK_HOLE_EQUATIONS {
                        ui.group(|ui| {
                            ui.label(RichText::new(eq.name).strong().color(Color32::YELLOW));
                            ui.label(RichText::new(eq.formula).monospace().color(Color32::WHITE));
                            ui.label(RichText::new(eq.description).small().italics());
                        });
                        ui.add_space(4.0);
                    }
                });

                ui.collapsing(RichText::new("📖 Variables").strong(), |ui| {
                    egui::Grid::new("variables_grid")
                        .num_columns(2)
                        .spacing([10.0, 4.0])
                        .show(ui, |ui| {
                            for (symbol, meaning) in BLACK_HOLE_VARIABLES {
                                ui.label(
                                    RichText::new(*symbol)
                                        .monospace()
                                        .color(Color32::LIGHT_GREEN),
                                );
                                ui.label(*meaning);
                                ui.end_row();
                            }
                        });
                });
            });
        });

    update
}
