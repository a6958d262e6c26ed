use std::time::Duration;

use eframe::egui;
use tracing::{
    debug,
    info,
    warn,
};

use super::{
    actions::{
        ActionQueue,
        UiAction,
    },
    cards::card_area,
    error_modal::ErrorModal,
    theme::{
        set_theme,
        Theme,
    },
    ticker::NewsTicker,
    top_bar::TopBar,
};
use crate::{
    api::SpeechReply,
    config::Config,
    core::{
        tasks::{
            TaskManager,
            TaskResult,
        },
        visit::user_agent,
        Controller,
        PageRequest,
        VisitTracker,
    },
    player,
};

/// How long shutdown waits for the end-of-visit beacon.
const BEACON_GRACE: Duration = Duration::from_millis(1500);

pub struct LexicardApp {
    // State
    controller: Controller,
    visit: VisitTracker,

    // UI
    top_bar: TopBar,
    ticker: NewsTicker,
    error_modal: ErrorModal,
    actions: ActionQueue,
    theme: Theme,

    // External Services
    task_manager: TaskManager,
}

impl LexicardApp {
    /// Builds the app and fires the three independent start-up requests: visit start,
    /// ticker batch and the first page.
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        config: Config,
        mut task_manager: TaskManager,
    ) -> Self {
        let theme = Theme::default();
        set_theme(&cc.egui_ctx, &theme);
        cc.egui_ctx.set_zoom_factor(cc.egui_ctx.zoom_factor() + 0.2);

        let repaint_ctx = cc.egui_ctx.clone();
        task_manager.set_notifier(move || repaint_ctx.request_repaint());

        let mut controller = Controller::new(config.page_size);

        info!("[App] Using API at {}", task_manager.api().base_url());
        task_manager.start_visit(user_agent(), config.referrer.clone());
        task_manager.load_headline(config.news_batch);
        task_manager.load_page(controller.start());

        Self {
            controller,
            visit: VisitTracker::new(),
            top_bar: TopBar::new(),
            ticker: NewsTicker::new(),
            error_modal: ErrorModal::new(),
            actions: ActionQueue::new(),
            theme,
            task_manager,
        }
    }

    fn handle_task_result(&mut self, result: TaskResult) {
        debug!("[App] Task finished: {}", result.task_type());

        match result {
            TaskResult::PageLoaded { request, result } => {
                if let Some(follow_up) = self.controller.apply_page_result(&request, result) {
                    self.dispatch(Some(follow_up));
                }
            }
            TaskResult::Headline(text) => {
                self.ticker.set_text(text);
            }
            TaskResult::VisitStarted(result) => {
                self.visit.record_start(result);
            }
            TaskResult::Speech(result) => match result {
                Ok(SpeechReply::Ready { url }) => player::play(&url),
                Ok(SpeechReply::Rejected { error }) => {
                    self.error_modal.show_error("Pronunciation", format!("TTS error: {error}"));
                }
                Err(e) => {
                    warn!("[App] TTS request failed: {}", e);
                    self.error_modal.show_error("Pronunciation", "TTS server error.");
                }
            },
        }
    }

    fn process_actions(&mut self) {
        if self.actions.is_empty() {
            return;
        }

        let actions: Vec<UiAction> = self.actions.drain().collect();
        for action in actions {
            match action {
                UiAction::PreviousPage => {
                    let request = self.controller.previous();
                    self.dispatch(request);
                }
                UiAction::NextPage => {
                    let request = self.controller.next();
                    self.dispatch(request);
                }
                UiAction::GoToPage(page) => {
                    let request = self.controller.go_to_page(page);
                    self.dispatch(request);
                }
                UiAction::Search(query) => {
                    let request = self.controller.search(&query);
                    self.dispatch(Some(request));
                }
                UiAction::FlipCard(index) => self.controller.flip(index),
                UiAction::Speak(text) => self.task_manager.synthesize_speech(text),
            }
        }
    }

    fn dispatch(&self, request: Option<PageRequest>) {
        match request {
            Some(request) => self.task_manager.load_page(request),
            None => debug!("[App] Navigation ignored at page boundary"),
        }
    }
}

impl eframe::App for LexicardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        for result in self.task_manager.poll_results() {
            self.handle_task_result(result);
        }

        self.top_bar.show(ctx, &self.controller, &mut self.actions);
        self.ticker.show(ctx, &self.theme);
        card_area(ctx, self.controller.cards(), &self.theme, &mut self.actions);
        self.error_modal.show(ctx, &self.theme);

        self.process_actions();
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        let task_manager = &self.task_manager;
        if let Some(beacon) = self.visit.end(task_manager.api(), task_manager.handle()) {
            if !beacon.wait(BEACON_GRACE) {
                debug!("[App] Exiting before the visit beacon finished");
            }
        }
    }
}
