// egui parameter table and Run button.

use curve_core::{ParameterName, ParameterSet};

/// Draw the right-side parameter table. Returns `true` if Run was clicked
/// (meaning the curve needs to be re-evaluated).
///
/// Texts are edited in place; they are only read back into numbers when the
/// caller handles the Run.
pub fn draw_controls(ctx: &egui::Context, parameters: &mut ParameterSet) -> bool {
    let mut run = false;

    egui::SidePanel::right("parameters")
        .min_width(220.0)
        .show(ctx, |ui| {
            ui.heading("Parameters");
            ui.separator();

            egui::Grid::new("parameter_table")
                .num_columns(2)
                .striped(true)
                .spacing([24.0, 6.0])
                .show(ui, |ui| {
                    ui.strong("Parameter");
                    ui.strong("Value");
                    ui.end_row();

                    for name in ParameterName::ALL {
                        // Name column is read-only.
                        ui.label(name.label());
                        ui.add(
                            egui::TextEdit::singleline(parameters.text_mut(name))
                                .desired_width(100.0)
                                .horizontal_align(egui::Align::Center),
                        );
                        ui.end_row();
                    }
                });

            ui.separator();

            if ui
                .add_sized([ui.available_width(), 28.0], egui::Button::new("Run"))
                .clicked()
            {
                run = true;
            }
        });

    run
}
