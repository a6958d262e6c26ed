use eframe::egui;

use crate::{
    core::{
        CardView,
        CardsView,
    },
    gui::{
        actions::{
            ActionQueue,
            UiAction,
        },
        theme::Theme,
    },
};

const CARD_WIDTH: f32 = 240.0;

pub fn card_area(
    ctx: &egui::Context,
    cards: &CardsView,
    theme: &Theme,
    actions: &mut ActionQueue,
) {
    egui::CentralPanel::default().show(ctx, |ui| match cards {
        CardsView::Loading => {
            ui.centered_and_justified(|ui| {
                ui.add(egui::Spinner::new().size(28.0));
            });
        }
        CardsView::Cards(cards) => {
            egui::ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
                ui.add_space(8.0);
                ui.horizontal_wrapped(|ui| {
                    ui.spacing_mut().item_spacing = egui::vec2(12.0, 12.0);
                    for (index, card) in cards.iter().enumerate() {
                        flashcard(ui, index, card, theme, actions);
                    }
                });
            });
        }
        placeholder => {
            let text = placeholder.placeholder().unwrap_or_default();
            let rich = if placeholder.is_error() {
                theme.danger(ui.ctx(), text)
            } else {
                theme.muted(ui.ctx(), text)
            };

            ui.vertical_centered(|ui| {
                ui.add_space(24.0);
                let label = ui.label(rich);
                if let CardsView::ServerError(detail) = placeholder {
                    label.on_hover_text(detail);
                }
            });
        }
    });
}

// The sound button and the phrase are separate widgets, so a click on one never reaches the other.
fn flashcard(
    ui: &mut egui::Ui,
    index: usize,
    card: &CardView,
    theme: &Theme,
    actions: &mut ActionQueue,
) {
    egui::Frame::group(ui.style())
        .fill(theme.card_fill(ui.ctx()))
        .corner_radius(10.0)
        .inner_margin(egui::Margin::same(12))
        .show(ui, |ui| {
            ui.set_width(CARD_WIDTH);
            ui.vertical(|ui| {
                ui.horizontal(|ui| {
                    ui.label(theme.category(ui.ctx(), card.category()));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                        if ui.small_button("🔊").on_hover_text("Play pronunciation").clicked() {
                            actions.push(UiAction::Speak(card.french().to_string()));
                        }
                    });
                });

                ui.add_space(6.0);

                let phrase = ui
                    .add(
                        egui::Label::new(theme.phrase(ui.ctx(), card.text()))
                            .wrap()
                            .sense(egui::Sense::click()),
                    )
                    .on_hover_cursor(egui::CursorIcon::PointingHand);
                if phrase.clicked() {
                    actions.push(UiAction::FlipCard(index));
                }
            });
        });
}
