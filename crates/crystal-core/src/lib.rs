//! Simulation core for a puzzle device whose "randomness" is a deterministic
//! linear-feedback shift register.
//!
//! On construction a device draws a feedback polynomial of degree 18..=24
//! from a process-wide candidate pool, seeds a register of matching width,
//! and from then on every toss is one LFSR step. A streak tracker consumes
//! the bit stream and resolves the session at eleven consecutive successes,
//! either on an unprompted free run or through caller-supplied heads/tails
//! predictions. Presentation, input gestures, and audio belong to the host
//! environment; this crate owns only the generator, the streak bookkeeping,
//! and the exact odds string shown to the player.

use rand::Rng;
use tracing::debug;

use crate::lfsr::Lfsr;
use crate::polynomial::FeedbackPolynomial;
use crate::rng::SplitMix64;
use crate::tracker::Tracker;

pub mod display;
pub mod error;
pub mod gf2;
pub mod lfsr;
pub mod polynomial;
pub mod probability;
pub mod rng;
pub mod tracker;

pub use error::Error;
pub use tracker::{FreeRunReport, Outcome, SolveStyle, Status, WIN_THRESHOLD};

/// Construction-time solve-path restriction, for hosts that want to force a
/// particular way of winning before the first toss.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StylePreset {
    /// Only free runs can win.
    LuckOnly,
    /// Only predictions can win.
    CalculationOnly,
}

impl StylePreset {
    fn style(self) -> SolveStyle {
        match self {
            Self::LuckOnly => SolveStyle::FreeRunLocked,
            Self::CalculationOnly => SolveStyle::InteractiveLocked,
        }
    }
}

/// Device construction parameters.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeviceConfig {
    /// Seed for polynomial selection and register seeding. `None` draws a
    /// seed from OS entropy; a fixed value reproduces the whole session.
    pub seed: Option<u64>,
    /// Optional solve-path lock applied before the first toss.
    pub preset: Option<StylePreset>,
}

/// One puzzle-device instance: generator plus streak tracker.
#[derive(Debug, Clone, Copy)]
pub struct Device {
    polynomial: FeedbackPolynomial,
    lfsr: Lfsr,
    tracker: Tracker,
}

impl Device {
    /// Device with an entropy-seeded session and no solve-path lock.
    pub fn new() -> Self {
        Self::with_config(DeviceConfig::default())
    }

    /// Device configured per `config`.
    pub fn with_config(config: DeviceConfig) -> Self {
        let mut rng = match config.seed {
            Some(seed) => SplitMix64::new(seed),
            None => SplitMix64::new(rand::rng().random()),
        };
        let polynomial = polynomial::select(&mut rng);
        let lfsr = Lfsr::seeded(polynomial, &mut rng);
        let width = lfsr.degree() as usize;
        debug!(
            "generator set up with taps {:b} and register {:0width$b}",
            lfsr.taps(),
            lfsr.register(),
        );
        Self {
            polynomial,
            lfsr,
            tracker: Tracker::new(config.preset.map(StylePreset::style)),
        }
    }

    /// Runs tosses until the first tails or a permitted win.
    pub fn start_free_run(&mut self) -> Result<FreeRunReport, Error> {
        self.tracker.start_free_run(&mut self.lfsr)
    }

    /// Enters prediction mode.
    pub fn begin_prediction(&mut self) -> Result<(), Error> {
        self.tracker.begin_prediction()
    }

    /// Tosses once and scores a heads/tails call.
    pub fn predict(&mut self, heads: bool) -> Result<Outcome, Error> {
        self.tracker.predict(&mut self.lfsr, heads)
    }

    /// Resolves the session from outside, regardless of progress.
    pub fn force_resolve(&mut self) {
        self.tracker.force_resolve();
    }

    /// Consecutive successes so far; `None` before the first toss.
    pub fn current_streak(&self) -> Option<u8> {
        self.tracker.current_streak()
    }

    /// Whether the session has resolved.
    pub fn is_resolved(&self) -> bool {
        self.tracker.is_resolved()
    }

    /// Tracker lifecycle state.
    pub fn status(&self) -> Status {
        self.tracker.status()
    }

    /// Solve-style lock.
    pub fn style(&self) -> SolveStyle {
        self.tracker.style()
    }

    /// Number of free runs attempted.
    pub fn free_runs(&self) -> u32 {
        self.tracker.free_runs()
    }

    /// Exact odds of extending the current streak all the way from scratch:
    /// `(1/2)^(streak + 1)`, or `"1"` before the first toss.
    pub fn odds(&self) -> String {
        match self.tracker.current_streak() {
            None => probability::probability_decimal(0),
            Some(streak) => probability::probability_decimal(u32::from(streak) + 1),
        }
    }

    /// Luck-rank label for the current streak.
    pub fn luck_label(&self) -> &'static str {
        display::luck_label(self.tracker.current_streak())
    }

    /// Selected feedback polynomial.
    pub fn polynomial(&self) -> FeedbackPolynomial {
        self.polynomial
    }

    /// Current register contents (debug/inspection).
    pub fn register(&self) -> u32 {
        self.lfsr.register()
    }

    /// Register width in bits.
    pub fn degree(&self) -> u32 {
        self.lfsr.degree()
    }
}

impl Default for Device {
    fn default() -> Self {
        Self::new()
    }
}
