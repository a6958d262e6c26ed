use std::time::Duration;

use eframe::egui;

use crate::gui::theme::Theme;

const TICKER_HEIGHT: f32 = 28.0;
const SCROLL_SPEED: f32 = 60.0;
const LOOP_GAP: f32 = 120.0;

/// Horizontally scrolling strip showing the sampled headline.
pub struct NewsTicker {
    text: Option<String>,
}

impl NewsTicker {
    pub fn new() -> Self {
        Self { text: None }
    }

    pub fn set_text(&mut self, text: String) {
        self.text = Some(text);
    }

    pub fn show(&self, ctx: &egui::Context, theme: &Theme) {
        let Some(text) = self.text.as_deref() else {
            return;
        };

        egui::TopBottomPanel::top("news_ticker")
            .exact_height(TICKER_HEIGHT)
            .frame(egui::Frame::NONE.fill(theme.ticker_fill(ctx)))
            .show(ctx, |ui| {
                let (rect, _) =
                    ui.allocate_exact_size(ui.available_size(), egui::Sense::hover());
                let painter = ui.painter_at(rect);
                let color = theme.ticker_text(ctx);

                let galley = painter.layout_no_wrap(
                    text.to_string(),
                    egui::TextStyle::Body.resolve(ui.style()),
                    color,
                );

                let span = galley.size().x + LOOP_GAP;
                let elapsed = ui.input(|i| i.time) as f32;
                let offset = (elapsed * SCROLL_SPEED) % span;
                let y = rect.center().y - galley.size().y / 2.0;

                let mut x = rect.left() - offset;
                while x < rect.right() {
                    painter.galley(egui::pos2(x, y), galley.clone(), color);
                    x += span;
                }

                ctx.request_repaint_after(Duration::from_millis(16));
            });
    }
}

impl Default for NewsTicker {
    fn default() -> Self {
        Self::new()
    }
}
