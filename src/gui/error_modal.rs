use eframe::egui;

use crate::gui::theme::Theme;

#[derive(Default, Clone)]
struct Notice {
    title: String,
    message: String,
}

/// Blocking notification: nothing else can be clicked until it is dismissed.
pub struct ErrorModal {
    open: bool,
    notice: Notice,
}

impl ErrorModal {
    pub fn new() -> Self {
        Self { open: false, notice: Notice::default() }
    }

    pub fn show_error(&mut self, title: impl Into<String>, message: impl Into<String>) {
        self.notice = Notice { title: title.into(), message: message.into() };
        self.open = true;
    }

    pub fn show(&mut self, ctx: &egui::Context, theme: &Theme) {
        if !self.open {
            return;
        }

        let modal = egui::Modal::new(egui::Id::new("error_modal")).show(ctx, |ui| {
            ui.set_width(380.0);

            ui.horizontal(|ui| {
                ui.label(egui::RichText::new("⚠").size(22.0).color(theme.red(ui.ctx())));
                ui.label(egui::RichText::new(&self.notice.title).size(17.0).strong());
            });

            ui.add_space(8.0);
            ui.label(&self.notice.message);
            ui.add_space(12.0);

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("OK").clicked() {
                    ui.close();
                }
            });
        });

        if modal.should_close() {
            self.open = false;
            self.notice = Notice::default();
        }
    }
}

impl Default for ErrorModal {
    fn default() -> Self {
        Self::new()
    }
}
