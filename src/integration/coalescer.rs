/// Coalescing helper for render/resize decisions
pub struct Coalescer;

impl Coalescer {
    /// Whether to draw this loop: any queued request or a frame tick
    #[inline]
    pub fn decide_render(queued_render_reqs: usize, saw_tui_render: bool) -> bool {
        queued_render_reqs > 0 || saw_tui_render
    }

    /// Collapse a burst of resizes into the last one
    ///
    /// Returns `None` when nothing new was seen or the size did not change.
    #[inline]
    pub fn decide_resize(last_seen: Option<(u16, u16)>, events: &[(u16, u16)]) -> Option<(u16, u16)> {
        match events.last().copied() {
            Some(size) if Some(size) != last_seen => Some(size),
            _ => None,
        }
    }
}
