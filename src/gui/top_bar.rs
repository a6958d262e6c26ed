use eframe::egui;

use crate::{
    core::Controller,
    gui::actions::{
        ActionQueue,
        UiAction,
    },
};

/// Search field plus previous/next/jump controls.
///
/// Enablement is derived from the pagination state on every frame.
pub struct TopBar {
    search_text: String,
    jump_to: u32,
}

impl TopBar {
    pub fn new() -> Self {
        Self { search_text: String::new(), jump_to: 1 }
    }

    pub fn show(
        &mut self,
        ctx: &egui::Context,
        controller: &Controller,
        actions: &mut ActionQueue,
    ) {
        let pagination = controller.pagination();

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                egui::widgets::global_theme_preference_switch(ui);
                ui.separator();

                let search = ui.add(
                    egui::TextEdit::singleline(&mut self.search_text)
                        .hint_text("Rechercher… (fr / en / catégorie)")
                        .desired_width(260.0),
                );
                let submitted =
                    search.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

                if ui.button("🔍 Search").clicked() || submitted {
                    actions.push(UiAction::Search(self.search_text.clone()));
                }

                if controller.is_loading() {
                    ui.add(egui::Spinner::new());
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let total_pages = pagination.total_pages();
                    self.jump_to = self.jump_to.clamp(1, total_pages);

                    if ui.button("Go").clicked() {
                        actions.push(UiAction::GoToPage(self.jump_to));
                    }
                    ui.add(
                        egui::DragValue::new(&mut self.jump_to).range(1..=total_pages).speed(0.1),
                    );
                    ui.label("Page");
                    ui.separator();

                    if ui
                        .add_enabled(pagination.can_go_next(), egui::Button::new("Next ▶"))
                        .clicked()
                    {
                        actions.push(UiAction::NextPage);
                    }
                    ui.label(controller.page_label());
                    if ui
                        .add_enabled(pagination.can_go_previous(), egui::Button::new("◀ Prev"))
                        .clicked()
                    {
                        actions.push(UiAction::PreviousPage);
                    }
                });
            });
            ui.add_space(4.0);
        });
    }
}

impl Default for TopBar {
    fn default() -> Self {
        Self::new()
    }
}
