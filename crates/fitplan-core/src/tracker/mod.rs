//! Daily progress tracking: completion flags, hydration, and everything
//! derived from them.

mod completion;
mod hydration;
mod progress;
mod session;
mod timeline;

pub use completion::{CompletionState, ToggleOutcome};
pub use hydration::{
    HydrationDirection, HydrationSnapshot, HydrationState, DEFAULT_HEADROOM_LITERS,
    DEFAULT_STEP_LITERS,
};
pub use progress::{compute_progress, display_percent, percent, DerivedProgress, KindProgress};
pub use session::{Command, PlannerSession, SessionSnapshot, Targets};
pub use timeline::{timeline, TimelineEntry};
