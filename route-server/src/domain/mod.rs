//! Domain types for route display.
//!
//! Route records arrive from external trip planners with inconsistent
//! field naming and typing. Every value crosses the [`RawValue`] coercion
//! boundary exactly once; the sequencing logic in [`Itinerary`] only ever
//! sees coerced strings and numbers.

mod itinerary;
mod raw;
mod record;
mod step;

pub use itinerary::{Itinerary, format_minutes, shows_walk};
pub use raw::RawValue;
pub use record::RouteRecord;
pub use step::{Step, StepKind};
