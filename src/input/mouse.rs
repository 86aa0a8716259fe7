use super::event::MouseButton;

/// Counts consecutive presses of the same button.
///
/// Timestamps come from the processor's own frame clock, so the count is
/// deterministic under scripted input.
#[derive(Debug, Clone, Default)]
pub(crate) struct ClickTracker {
    last_press: Option<(MouseButton, f32)>,
    click_count: u32,
}

impl ClickTracker {
    /// Record a press at time `now` and return how many presses of
    /// `button` happened in a row, each within `threshold` seconds of the
    /// previous one.
    pub(crate) fn press(
        &mut self,
        button: MouseButton,
        now: f32,
        threshold: f32,
    ) -> u32 {
        let continues = self.last_press.is_some_and(|(last, time)| {
            last == button && now - time <= threshold
        });
        self.click_count = if continues {
            self.click_count.saturating_add(1)
        } else {
            1
        };
        self.last_press = Some((button, now));
        self.click_count
    }

    /// Forget the click sequence.
    pub(crate) fn reset(&mut self) {
        self.last_press = None;
        self.click_count = 0;
    }
}
