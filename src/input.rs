//! Adapters that turn raw player input into node indices for
//! [`crate::game::TurnController::submit_move`]. Nothing here touches game state.

use std::time::Duration;

use web_time::Instant;

use crate::grid::NUM_NODES;

pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(200);

/// Parses one line of text input such as `"14\n"`.
pub fn parse_node(line: &str) -> Option<usize> {
    line.trim()
        .parse::<usize>()
        .ok()
        .filter(|&node| node < NUM_NODES)
}

/// Turns a polled sensor matrix into discrete node presses.
///
/// A node is emitted once per press: it must differ from the node emitted
/// since the last release, and the debounce window must have elapsed since
/// the previous emission. Reporting `None` (nothing pressed) re-arms the
/// same node so a player can deliberately select it again.
#[derive(Debug, Clone)]
pub struct NodeDebouncer {
    window: Duration,
    held: Option<usize>,
    last_emit: Option<Instant>,
}

impl NodeDebouncer {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            held: None,
            last_emit: None,
        }
    }

    pub fn observe(&mut self, reading: Option<usize>, now: Instant) -> Option<usize> {
        let Some(node) = reading.filter(|&node| node < NUM_NODES) else {
            self.held = None;
            return None;
        };

        if self.held == Some(node) {
            return None;
        }
        if let Some(last) = self.last_emit
            && now.saturating_duration_since(last) < self.window
        {
            return None;
        }

        self.held = Some(node);
        self.last_emit = Some(now);
        Some(node)
    }
}

impl Default for NodeDebouncer {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_node_accepts_trimmed_in_range_numbers() {
        assert_eq!(parse_node("14\n"), Some(14));
        assert_eq!(parse_node("  0 "), Some(0));
        assert_eq!(parse_node("35"), Some(35));
        assert_eq!(parse_node("36"), None);
        assert_eq!(parse_node("-1"), None);
        assert_eq!(parse_node("abc"), None);
        assert_eq!(parse_node(""), None);
    }

    #[test]
    fn held_node_is_emitted_once() {
        let mut debouncer = NodeDebouncer::default();
        let start = Instant::now();

        assert_eq!(debouncer.observe(Some(3), start), Some(3));
        assert_eq!(debouncer.observe(Some(3), start + Duration::from_secs(1)), None);
        assert_eq!(debouncer.observe(None, start + Duration::from_secs(2)), None);
        assert_eq!(
            debouncer.observe(Some(3), start + Duration::from_secs(3)),
            Some(3)
        );
    }

    #[test]
    fn presses_inside_the_window_are_dropped() {
        let mut debouncer = NodeDebouncer::default();
        let start = Instant::now();

        assert_eq!(debouncer.observe(Some(3), start), Some(3));
        assert_eq!(debouncer.observe(Some(4), start + Duration::from_millis(50)), None);
        assert_eq!(
            debouncer.observe(Some(4), start + Duration::from_millis(250)),
            Some(4)
        );
    }

    #[test]
    fn out_of_range_readings_count_as_release() {
        let mut debouncer = NodeDebouncer::new(Duration::ZERO);
        let start = Instant::now();

        assert_eq!(debouncer.observe(Some(7), start), Some(7));
        assert_eq!(debouncer.observe(Some(99), start), None);
        assert_eq!(debouncer.observe(Some(7), start), Some(7));
    }
}
