//! Command-based control for engines.

use crate::engine::Alliance;

/// Actions the host loop can send to a [`PatternEngine`](crate::PatternEngine).
///
/// Handy when selection and match data arrive over a channel from other
/// tasks rather than being read directly in the control loop.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EngineAction<'a> {
    /// Select a pattern by id; `None` selects the fallback.
    Select(Option<&'a str>),
    /// Report the current match alliance.
    SetAlliance(Alliance),
    /// Render one frame at the given time in seconds.
    Tick(f64),
}
