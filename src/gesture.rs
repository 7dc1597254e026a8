//! Turning finished horizontal drags into week-by-week navigation
use std::cmp::Ordering;

/// Default minimum distance, in terminal cells, that a drag must cover for
/// its release to count as a swipe
pub const MIN_DRAG_DISTANCE: u16 = 20;

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: u16, y: u16) -> Point {
        Point {
            x: x.into(),
            y: y.into(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        origin: Point,
    },
}

/// Displacement of a completed drag that travelled at least the recognizer's
/// minimum distance
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct DragEnded {
    pub dx: i32,
    pub dy: i32,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DragRecognizer {
    min_distance: u16,
    state: DragState,
}

impl DragRecognizer {
    pub fn new(min_distance: u16) -> DragRecognizer {
        DragRecognizer {
            min_distance,
            state: DragState::Idle,
        }
    }

    pub fn min_distance(&self) -> u16 {
        self.min_distance
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    /// Starts tracking a drag at `at`.  A press while a drag is already in
    /// progress (because its release was never seen) restarts the drag from
    /// `at`.
    pub fn begin(&mut self, at: Point) {
        if let DragState::Dragging { origin } = self.state {
            tracing::trace!(x = origin.x, y = origin.y, "discarding unfinished drag");
        }
        tracing::trace!(x = at.x, y = at.y, "drag started");
        self.state = DragState::Dragging { origin: at };
    }

    /// Forgets any drag in progress without producing an event
    pub fn reset(&mut self) {
        self.state = DragState::Idle;
    }

    /// Finishes the current drag at `at`, returning to `Idle`.  Returns
    /// `None` if no drag was in progress or if the straight-line distance
    /// covered is below the minimum.
    pub fn end(&mut self, at: Point) -> Option<DragEnded> {
        let DragState::Dragging { origin } = std::mem::take(&mut self.state) else {
            return None;
        };
        let dx = at.x.saturating_sub(origin.x);
        let dy = at.y.saturating_sub(origin.y);
        let distance_sq = i64::from(dx).pow(2) + i64::from(dy).pow(2);
        let min_sq = i64::from(self.min_distance).pow(2);
        if distance_sq < min_sq {
            tracing::trace!(dx, dy, "drag too short to count as a swipe");
            None
        } else {
            tracing::trace!(dx, dy, "drag ended");
            Some(DragEnded { dx, dy })
        }
    }
}

impl Default for DragRecognizer {
    fn default() -> DragRecognizer {
        DragRecognizer::new(MIN_DRAG_DISTANCE)
    }
}

/// A move of the reference date by at most one week
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum WeekDelta {
    Backward,
    Stay,
    Forward,
}

impl WeekDelta {
    /// Dragging towards the left pulls the next week into view; dragging
    /// towards the right pulls in the previous one.
    pub fn from_translation(dx: i32) -> WeekDelta {
        match dx.cmp(&0) {
            Ordering::Less => WeekDelta::Forward,
            Ordering::Equal => WeekDelta::Stay,
            Ordering::Greater => WeekDelta::Backward,
        }
    }

    pub fn weeks(self) -> i32 {
        match self {
            WeekDelta::Backward => -1,
            WeekDelta::Stay => 0,
            WeekDelta::Forward => 1,
        }
    }
}

impl From<DragEnded> for WeekDelta {
    fn from(ended: DragEnded) -> WeekDelta {
        WeekDelta::from_translation(ended.dx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn swipe(dx: i32) -> WeekDelta {
        let mut recog = DragRecognizer::default();
        recog.begin(Point { x: 40, y: 3 });
        recog
            .end(Point { x: 40 + dx, y: 3 })
            .map_or(WeekDelta::Stay, WeekDelta::from)
    }

    #[test]
    fn test_swipe_left() {
        assert_eq!(swipe(-25), WeekDelta::Forward);
        assert_eq!(swipe(-25).weeks(), 1);
    }

    #[test]
    fn test_swipe_right() {
        assert_eq!(swipe(25), WeekDelta::Backward);
        assert_eq!(swipe(25).weeks(), -1);
    }

    #[test]
    fn test_no_movement() {
        assert_eq!(swipe(0), WeekDelta::Stay);
        assert_eq!(WeekDelta::from_translation(0).weeks(), 0);
    }

    #[test]
    fn test_below_threshold() {
        assert_eq!(swipe(-15), WeekDelta::Stay);
        assert_eq!(swipe(19), WeekDelta::Stay);
        assert_eq!(swipe(-20), WeekDelta::Forward);
    }

    #[test]
    fn test_threshold_is_euclidean() {
        let mut recog = DragRecognizer::new(20);
        recog.begin(Point::new(10, 0));
        assert_eq!(
            recog.end(Point::new(22, 16)),
            Some(DragEnded { dx: 12, dy: 16 })
        );
    }

    #[test]
    fn test_vertical_drag_stays() {
        let mut recog = DragRecognizer::default();
        recog.begin(Point::new(10, 0));
        let ended = recog.end(Point::new(10, 30)).unwrap();
        assert_eq!(WeekDelta::from(ended), WeekDelta::Stay);
    }

    #[test]
    fn test_state_transitions() {
        let mut recog = DragRecognizer::default();
        assert_eq!(recog.state(), DragState::Idle);
        assert_eq!(recog.end(Point::new(0, 0)), None);
        recog.begin(Point::new(30, 1));
        assert_eq!(
            recog.state(),
            DragState::Dragging {
                origin: Point::new(30, 1)
            }
        );
        assert_eq!(
            recog.end(Point::new(5, 1)),
            Some(DragEnded { dx: -25, dy: 0 })
        );
        assert_eq!(recog.state(), DragState::Idle);
    }

    #[test]
    fn test_second_press_restarts() {
        let mut recog = DragRecognizer::default();
        recog.begin(Point::new(40, 1));
        recog.begin(Point::new(10, 1));
        assert_eq!(
            recog.state(),
            DragState::Dragging {
                origin: Point::new(10, 1)
            }
        );
        assert_eq!(recog.end(Point::new(5, 1)), None);
        assert_eq!(recog.state(), DragState::Idle);
    }

    #[test]
    fn test_reset() {
        let mut recog = DragRecognizer::default();
        recog.begin(Point::new(40, 1));
        recog.reset();
        assert_eq!(recog.state(), DragState::Idle);
        assert_eq!(recog.end(Point::new(5, 1)), None);
    }

    #[test]
    fn test_short_drag_returns_to_idle() {
        let mut recog = DragRecognizer::default();
        recog.begin(Point::new(30, 1));
        assert_eq!(recog.end(Point::new(35, 1)), None);
        assert_eq!(recog.state(), DragState::Idle);
    }
}
