//! Frame-driven flight along a [`FlightPath`](ballista_trajectory::FlightPath).
//!
//! [`FlightAnimator`] is the only owner of mutable flight state. The host
//! calls [`FlightAnimator::tick`] once per frame; position and orientation
//! queries between ticks are pure reads. When the last segment completes the
//! animator emits a single [`ImpactEvent`], and the host starts an
//! [`ImpactFlash`] at the impact point.

mod animator;
mod impact;

pub use animator::{DEFAULT_STEP, FlightAnimator, FlightPhase, FlightState, ImpactEvent};
pub use impact::{FlashFrame, FlashParams, ImpactFlash};
