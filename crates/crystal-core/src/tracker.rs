//! Streak state machine consuming the engine's bit stream.
//!
//! Two ways to play: a free run treats every output bit as an unprompted
//! coin toss and rides the streak until the first tails, while prediction
//! mode asks the caller to call heads or tails before each step. Both win at
//! [`WIN_THRESHOLD`] consecutive successes. Which of the two can still win is
//! pinned down by [`SolveStyle`], set once at the resolution boundary (or
//! preset at construction).

use tracing::{debug, info};

use crate::error::Error;
use crate::lfsr::Lfsr;

/// Consecutive successes required to resolve the session.
pub const WIN_THRESHOLD: u8 = 11;

/// Tracker lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Between runs; both modes may be entered (style permitting).
    Idle,
    /// Mid prediction sequence; each `predict` call steps the engine once.
    Predicting,
    /// The session ended successfully; no further tosses are accepted.
    Resolved,
}

/// Which solve path remains available once the session has progressed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum SolveStyle {
    /// No commitment yet; either path can win.
    #[default]
    Unset,
    /// Only free runs count. Prediction mode is locked out.
    FreeRunLocked,
    /// Only predictions count. Free runs still spin the register but can
    /// never resolve the session.
    InteractiveLocked,
    /// Resolution was forced from outside the device.
    ExternallyForced,
}

/// Per-call verdict of prediction mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Correct call; the streak grew and the device awaits the next call.
    Continue,
    /// Wrong call. The streak is reset and the device is idle again. A
    /// strike is an expected outcome, not an error.
    Strike,
    /// The streak just reached the win threshold.
    Resolved,
}

/// Result of one free run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FreeRunReport {
    /// Consecutive heads reached before the run stopped.
    pub streak: u8,
    /// Whether the run resolved the session.
    pub resolved: bool,
}

/// Win/lose streak bookkeeping over an engine's output bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tracker {
    status: Status,
    style: SolveStyle,
    /// `None` until the first toss of the session.
    streak: Option<u8>,
    free_runs: u32,
}

impl Tracker {
    /// Fresh tracker, optionally locked to one solve path up front.
    pub fn new(preset: Option<SolveStyle>) -> Self {
        Self {
            status: Status::Idle,
            style: preset.unwrap_or_default(),
            streak: None,
            free_runs: 0,
        }
    }

    /// Runs the engine until the first tails or a permitted win.
    ///
    /// Each output bit of 1 extends the streak; the first 0 ends the run.
    /// When the style allows a free-run win, reaching [`WIN_THRESHOLD`] also
    /// ends the run and resolves the session. When the style is locked to
    /// prediction wins, the run keeps going past the threshold until a tails
    /// shows up, and never resolves; any maximal-period configuration bounds
    /// such a run by `degree` consecutive heads, and the count stops at
    /// `u8::MAX` for engines that do not.
    pub fn start_free_run(&mut self, lfsr: &mut Lfsr) -> Result<FreeRunReport, Error> {
        match self.status {
            Status::Idle => {}
            Status::Predicting => return Err(Error::NotIdle),
            Status::Resolved => return Err(Error::AlreadyResolved),
        }

        let can_win = matches!(self.style, SolveStyle::Unset | SolveStyle::FreeRunLocked);
        self.free_runs += 1;

        let mut streak: u8 = 0;
        loop {
            if streak >= WIN_THRESHOLD && can_win {
                break;
            }
            // A caller-built engine may emit heads without bound.
            if streak == u8::MAX || !lfsr.step() {
                break;
            }
            streak += 1;
        }
        self.streak = Some(streak);

        let resolved = streak >= WIN_THRESHOLD && can_win;
        if resolved {
            self.style = SolveStyle::FreeRunLocked;
            self.status = Status::Resolved;
            info!(tries = self.free_runs, "winning streak reached on a free run");
        } else {
            match streak {
                0 => debug!("the first toss failed the run"),
                s if s == WIN_THRESHOLD - 1 => debug!("run failed on the last toss"),
                s => debug!(streak = s, "run ended short of the threshold"),
            }
        }
        let width = lfsr.degree() as usize;
        debug!("register after run: {:0width$b}", lfsr.register());

        Ok(FreeRunReport { streak, resolved })
    }

    /// Enters prediction mode from idle, zeroing the streak.
    ///
    /// Unavailable once the streak already sits at the threshold or the
    /// style no longer admits prediction wins.
    pub fn begin_prediction(&mut self) -> Result<(), Error> {
        match self.status {
            Status::Idle => {}
            Status::Predicting => return Err(Error::NotIdle),
            Status::Resolved => return Err(Error::AlreadyResolved),
        }
        let allowed = matches!(self.style, SolveStyle::Unset | SolveStyle::InteractiveLocked)
            && self.streak.unwrap_or(0) < WIN_THRESHOLD;
        if !allowed {
            return Err(Error::PredictionLocked);
        }

        self.streak = Some(0);
        self.status = Status::Predicting;
        debug!("prediction mode activated");
        Ok(())
    }

    /// Steps the engine once and scores the caller's heads/tails call.
    ///
    /// An output bit of 1 is heads. A wrong call is an [`Outcome::Strike`]:
    /// the streak resets and the tracker drops back to idle.
    pub fn predict(&mut self, lfsr: &mut Lfsr, heads: bool) -> Result<Outcome, Error> {
        if self.status != Status::Predicting {
            return Err(Error::NotPredicting);
        }

        let toss = lfsr.step();
        if toss != heads {
            debug!(
                predicted = if heads { "heads" } else { "tails" },
                "prediction was not correct"
            );
            self.streak = Some(0);
            self.status = Status::Idle;
            return Ok(Outcome::Strike);
        }

        let streak = self.streak.unwrap_or(0) + 1;
        self.streak = Some(streak);
        debug!(
            predicted = if heads { "heads" } else { "tails" },
            streak, "prediction was correct"
        );

        if streak >= WIN_THRESHOLD {
            self.style = SolveStyle::InteractiveLocked;
            self.status = Status::Resolved;
            info!("winning streak reached by prediction");
            return Ok(Outcome::Resolved);
        }
        Ok(Outcome::Continue)
    }

    /// Resolves the session from outside, regardless of progress.
    ///
    /// Idempotent: forcing an already-resolved session changes nothing.
    pub fn force_resolve(&mut self) {
        if self.status == Status::Resolved {
            return;
        }
        self.streak = Some(WIN_THRESHOLD);
        self.style = SolveStyle::ExternallyForced;
        self.status = Status::Resolved;
        info!("session resolution forced externally");
    }

    /// Consecutive successes so far; `None` before the first toss.
    pub fn current_streak(&self) -> Option<u8> {
        self.streak
    }

    /// Whether the session has resolved.
    pub fn is_resolved(&self) -> bool {
        self.status == Status::Resolved
    }

    /// Current lifecycle state.
    pub fn status(&self) -> Status {
        self.status
    }

    /// Current solve-style lock.
    pub fn style(&self) -> SolveStyle {
        self.style
    }

    /// Number of free runs attempted so far.
    pub fn free_runs(&self) -> u32 {
        self.free_runs
    }
}

impl Default for Tracker {
    fn default() -> Self {
        Self::new(None)
    }
}
