/// Vertical scroll state for a column of rows.
#[derive(Clone, Copy, Debug, Default)]
pub struct ViewportState {
    pub y: u32,
    pub viewport_h: u16,
    pub content_h: u32,
}

impl ViewportState {
    pub fn set_viewport(&mut self, h: u16) {
        self.viewport_h = h;
        self.clamp();
    }

    pub fn set_content(&mut self, h: u32) {
        self.content_h = h;
        self.clamp();
    }

    pub fn clamp(&mut self) {
        self.y = self.y.min(self.max_y());
    }

    /// Scroll the minimum amount so `[top, top + height)` is on screen. Spans taller than the
    /// viewport are aligned to their top.
    pub fn ensure_visible(&mut self, top: u32, height: u32) {
        let bottom = top.saturating_add(height);
        let view_bottom = self.y.saturating_add(self.viewport_h as u32);
        if top < self.y || height > self.viewport_h as u32 {
            self.y = top;
        } else if bottom > view_bottom {
            self.y = bottom.saturating_sub(self.viewport_h as u32);
        }
        self.clamp();
    }

    pub fn is_visible(&self, row: u32) -> bool {
        row >= self.y && row < self.y.saturating_add(self.viewport_h as u32)
    }

    fn max_y(&self) -> u32 {
        self.content_h.saturating_sub(self.viewport_h as u32)
    }
}
