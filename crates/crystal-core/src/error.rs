use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A zero register is the LFSR's sole fixed point and would emit zeros forever.
    #[error("register seed must be nonzero for a {degree}-bit register")]
    ZeroRegister { degree: u32 },

    /// Register value has bits above the register width.
    #[error("register {register:#b} does not fit in {degree} bits")]
    RegisterOutOfRange { register: u32, degree: u32 },

    /// Tap mask selects no register bits, so there is no feedback to compute.
    #[error("tap mask selects no register bits")]
    EmptyTapMask,

    /// A prediction arrived while the device was not accepting predictions.
    #[error("device is not in prediction mode")]
    NotPredicting,

    /// A free run was requested outside the idle state.
    #[error("device is not idle")]
    NotIdle,

    /// Prediction mode is unavailable: either the streak already reached the
    /// win threshold or the device is locked to free-run wins.
    #[error("prediction mode is locked out")]
    PredictionLocked,

    /// The session already resolved; no further tosses are accepted.
    #[error("device is already resolved")]
    AlreadyResolved,
}
