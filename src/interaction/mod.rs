use serde::{Deserialize, Serialize};

use crate::api::Period;
use crate::core::DataPoint;

/// Whether pointer input may be processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    /// A period switch is in flight; the previous series and scales are gone
    /// and pointer events are dropped until the new series is installed.
    Loading { period: Period },
    Ready,
}

/// Drag-to-compare selection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DragSelection {
    pub start: DataPoint,
    pub current: DataPoint,
    pub active: bool,
}

/// Mutable pointer state for one chart.
///
/// The session is the only owner of the drag flag: it is set by
/// `begin_drag` and cleared by `end_drag` or `reset`, so at most one drag
/// exists at a time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InteractionSession {
    phase: SessionPhase,
    hovered: Option<DataPoint>,
    drag: Option<DragSelection>,
    generation: u64,
}

impl InteractionSession {
    #[must_use]
    pub fn new(initial_period: Period) -> Self {
        Self {
            phase: SessionPhase::Loading {
                period: initial_period,
            },
            hovered: None,
            drag: None,
            generation: 0,
        }
    }

    #[must_use]
    pub fn phase(self) -> SessionPhase {
        self.phase
    }

    #[must_use]
    pub fn is_ready(self) -> bool {
        self.phase == SessionPhase::Ready
    }

    /// Number of series installed so far; bumps on every `mark_ready`.
    #[must_use]
    pub fn generation(self) -> u64 {
        self.generation
    }

    /// Drops all pointer state and waits for `period`'s series.
    pub fn begin_loading(&mut self, period: Period) {
        self.reset();
        self.phase = SessionPhase::Loading { period };
    }

    pub fn mark_ready(&mut self) {
        self.reset();
        self.phase = SessionPhase::Ready;
        self.generation += 1;
    }

    pub fn reset(&mut self) {
        self.hovered = None;
        self.drag = None;
    }

    #[must_use]
    pub fn hovered(self) -> Option<DataPoint> {
        self.hovered
    }

    pub fn set_hovered(&mut self, point: DataPoint) {
        self.hovered = Some(point);
        if let Some(drag) = self.drag.as_mut() {
            drag.current = point;
        }
    }

    pub fn clear_hovered(&mut self) {
        self.hovered = None;
    }

    #[must_use]
    pub fn drag(self) -> Option<DragSelection> {
        self.drag.filter(|drag| drag.active)
    }

    #[must_use]
    pub fn is_dragging(self) -> bool {
        self.drag().is_some()
    }

    /// Starts a drag at the hovered sample. No-op without one.
    pub fn begin_drag(&mut self) -> Option<DragSelection> {
        if !self.is_ready() {
            return None;
        }
        let start = self.hovered?;
        let drag = DragSelection {
            start,
            current: start,
            active: true,
        };
        self.drag = Some(drag);
        Some(drag)
    }

    pub fn end_drag(&mut self) -> Option<DragSelection> {
        self.drag.take().map(|mut drag| {
            drag.active = false;
            drag
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn point(index: usize, value: f64) -> DataPoint {
        let ts = NaiveDate::from_ymd_opt(2024, 3, 4 + index as u32)
            .and_then(|d| d.and_hms_opt(16, 0, 0))
            .expect("valid datetime");
        DataPoint::new(index, ts, value)
    }

    #[test]
    fn drag_requires_hovered_point() {
        let mut session = InteractionSession::new(Period::OneMonth);
        session.mark_ready();
        assert!(session.begin_drag().is_none());

        session.set_hovered(point(1, 10.0));
        let drag = session.begin_drag().expect("drag starts");
        assert_eq!(drag.start.index, 1);
        assert!(session.is_dragging());
    }

    #[test]
    fn hover_updates_drag_current() {
        let mut session = InteractionSession::new(Period::OneMonth);
        session.mark_ready();
        session.set_hovered(point(1, 10.0));
        session.begin_drag();
        session.set_hovered(point(3, 12.0));

        let drag = session.drag().expect("active drag");
        assert_eq!(drag.start.index, 1);
        assert_eq!(drag.current.index, 3);

        let ended = session.end_drag().expect("drag ended");
        assert!(!ended.active);
        assert!(!session.is_dragging());
    }

    #[test]
    fn loading_drops_pointer_state() {
        let mut session = InteractionSession::new(Period::OneMonth);
        session.mark_ready();
        session.set_hovered(point(0, 10.0));
        session.begin_drag();

        session.begin_loading(Period::SixMonth);
        assert!(!session.is_ready());
        assert!(session.hovered().is_none());
        assert!(!session.is_dragging());
        assert_eq!(
            session.phase(),
            SessionPhase::Loading {
                period: Period::SixMonth
            }
        );
    }
}
