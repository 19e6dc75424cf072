//! Human-readable algorithm step broadcasting.
//!
//! Every operation binds an ordered list of short labels describing its
//! conceptual phases; a cursor marks progress for a side-panel display.
//! The tracker is purely observational — it paces itself off its own
//! timer and never gates the functional machine it narrates, though the
//! two are started together.

/// Ordered label list plus a frame-paced cursor.
#[derive(Debug, Default)]
pub struct StepTracker {
    labels: &'static [&'static str],
    cursor: usize,
    timer: f32,
    pacing: f32,
}

impl StepTracker {
    /// Tracker with nothing bound (no labels, cursor at zero).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a fresh label set for a newly started operation.
    pub fn bind(&mut self, labels: &'static [&'static str], pacing: f32) {
        self.labels = labels;
        self.cursor = 0;
        self.timer = 0.0;
        self.pacing = pacing;
    }

    /// Unbind all labels.
    pub fn clear(&mut self) {
        self.bind(&[], self.pacing);
    }

    /// Advance the cursor by at most one label if the pacing interval has
    /// elapsed and the cursor has not reached the final label.
    pub fn update(&mut self, dt: f32) {
        if self.is_complete() {
            return;
        }
        self.timer += dt;
        if self.timer > self.pacing {
            self.timer = 0.0;
            self.cursor += 1;
        }
    }

    /// The bound label list.
    #[inline]
    #[must_use]
    pub fn labels(&self) -> &'static [&'static str] {
        self.labels
    }

    /// Index of the current label.
    #[inline]
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Whether the cursor sits on the final label (or nothing is bound).
    #[inline]
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.labels.is_empty() || self.cursor >= self.labels.len() - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LABELS: &[&str] = &["Start at root", "Compare", "Done"];

    #[test]
    fn unbound_tracker_is_complete() {
        let tracker = StepTracker::new();
        assert!(tracker.is_complete());
        assert!(tracker.labels().is_empty());
    }

    #[test]
    fn advances_one_label_per_interval() {
        let mut tracker = StepTracker::new();
        tracker.bind(LABELS, 0.5);
        assert_eq!(tracker.cursor(), 0);

        tracker.update(0.4);
        assert_eq!(tracker.cursor(), 0);
        tracker.update(0.2);
        assert_eq!(tracker.cursor(), 1);

        // A huge dt still advances at most one label.
        tracker.update(10.0);
        assert_eq!(tracker.cursor(), 2);
    }

    #[test]
    fn stops_at_last_label() {
        let mut tracker = StepTracker::new();
        tracker.bind(LABELS, 0.1);
        for _ in 0..20 {
            tracker.update(0.2);
        }
        assert_eq!(tracker.cursor(), LABELS.len() - 1);
        assert!(tracker.is_complete());
    }

    #[test]
    fn rebind_resets_cursor_and_timer() {
        let mut tracker = StepTracker::new();
        tracker.bind(LABELS, 0.1);
        tracker.update(0.2);
        assert_eq!(tracker.cursor(), 1);
        tracker.bind(LABELS, 0.1);
        assert_eq!(tracker.cursor(), 0);
        assert!(!tracker.is_complete());
    }
}
