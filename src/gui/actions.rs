// A small action queue so widgets only describe what happened; the app applies it after drawing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiAction {
    // Pagination
    PreviousPage,
    NextPage,
    GoToPage(u32),
    Search(String),

    // Cards
    FlipCard(usize),
    Speak(String),
}

pub struct ActionQueue {
    actions: Vec<UiAction>,
}

impl ActionQueue {
    pub fn new() -> Self {
        Self { actions: Vec::new() }
    }

    pub fn push(&mut self, action: UiAction) {
        self.actions.push(action);
    }

    pub fn drain(&mut self) -> std::vec::Drain<'_, UiAction> {
        self.actions.drain(..)
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

impl Default for ActionQueue {
    fn default() -> Self {
        Self::new()
    }
}
