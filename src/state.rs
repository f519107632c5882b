//! Cross-tick animation state.
//!
//! Every generator is a pure function of the timestamp except for the fields
//! kept here. One [`AnimationState`] belongs to exactly one engine and survives
//! pattern switches, so a pattern picks up where it left off when reselected.

use fastrand::Rng;

/// Which half of the dashed line is being drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DashPhase {
    /// Writing unlit pixels.
    #[default]
    Gap,
    /// Writing lit pixels.
    Dash,
}

impl DashPhase {
    /// The phase that follows this one.
    #[inline]
    pub fn flip(self) -> Self {
        match self {
            DashPhase::Gap => DashPhase::Dash,
            DashPhase::Dash => DashPhase::Gap,
        }
    }
}

/// Gap/dash state machine shared by all dashed-line patterns.
///
/// `remaining` is `None` until the phase has been entered once; the generator
/// then loads the configured count for that phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DashState {
    pub(crate) phase: DashPhase,
    pub(crate) remaining: Option<u16>,
}

impl DashState {
    /// Current phase.
    pub fn phase(&self) -> DashPhase {
        self.phase
    }

    /// Pixels left in the current phase, if the phase has been entered.
    pub fn remaining(&self) -> Option<u16> {
        self.remaining
    }

    /// Advances by one pixel. `gap` and `length` are the configured counts.
    ///
    /// Returns the phase the pixel belongs to. A zero `gap` skips the gap
    /// phase entirely; callers must ensure `length > 0`.
    pub(crate) fn advance(&mut self, gap: u16, length: u16) -> DashPhase {
        if self.phase == DashPhase::Gap && gap == 0 {
            self.phase = DashPhase::Dash;
            self.remaining = Some(length);
        }

        let phase = self.phase;
        let budget = match phase {
            DashPhase::Gap => gap,
            DashPhase::Dash => length,
        };
        let left = self.remaining.unwrap_or(budget).saturating_sub(1);

        if left == 0 {
            self.phase = phase.flip();
            self.remaining = Some(match self.phase {
                DashPhase::Gap => gap,
                DashPhase::Dash => length,
            });
        } else {
            self.remaining = Some(left);
        }

        phase
    }
}

/// Mutable accumulators that make patterns continuous across ticks.
#[derive(Debug)]
pub struct AnimationState {
    pub(crate) hue_phase: f64,
    pub(crate) saturation_phase: f64,
    pub(crate) dash: DashState,
    pub(crate) last_update: Option<f64>,
    pub(crate) rng: Rng,
}

impl AnimationState {
    /// Creates fresh state. `seed` drives the random-hue patterns.
    pub fn new(seed: u64) -> Self {
        Self {
            hue_phase: 0.0,
            saturation_phase: 0.0,
            dash: DashState::default(),
            last_update: None,
            rng: Rng::with_seed(seed),
        }
    }

    /// Hue phase in degrees, used by rocking-wave patterns.
    pub fn hue_phase(&self) -> f64 {
        self.hue_phase
    }

    /// Saturation phase, used by tide patterns.
    pub fn saturation_phase(&self) -> f64 {
        self.saturation_phase
    }

    /// Dashed-line state machine.
    pub fn dash(&self) -> DashState {
        self.dash
    }

    /// Timestamp of the last throttled update, if one happened.
    pub fn last_update(&self) -> Option<f64> {
        self.last_update
    }
}

impl Default for AnimationState {
    fn default() -> Self {
        Self::new(crate::engine::DEFAULT_SEED)
    }
}
