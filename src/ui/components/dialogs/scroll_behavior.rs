use ratatui::widgets::ScrollbarState;

/// Scroll position of a scrollable dialog
#[derive(Debug, Default, Clone)]
pub struct ScrollPosition {
    pub offset: usize,
    pub state: ScrollbarState,
}

impl ScrollPosition {
    pub fn scroll_up(&mut self) {
        self.set(self.offset.saturating_sub(1));
    }

    pub fn scroll_down(&mut self) {
        self.set(self.offset.saturating_add(1));
    }

    pub fn page_up(&mut self) {
        self.set(self.offset.saturating_sub(10));
    }

    pub fn page_down(&mut self) {
        self.set(self.offset.saturating_add(10));
    }

    pub fn scroll_to_top(&mut self) {
        self.set(0);
    }

    pub fn scroll_to_bottom(&mut self) {
        self.set(usize::MAX);
    }

    fn set(&mut self, offset: usize) {
        self.offset = offset;
        self.state = self.state.position(offset);
    }
}
