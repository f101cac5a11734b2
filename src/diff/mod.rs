//! Outline diffing and conformance scoring.
//!
//! [`CompareEngine`] flattens two outline forests to heading sequences,
//! aligns them with the greedy matcher, and classifies every heading as
//! matched, changed, missing, or extra. The conformance score summarizes
//! how much of the template structure the target reproduces.

mod engine;
mod result;

pub use engine::{CompareEngine, CHANGED_THRESHOLD, CONFORMANT_THRESHOLD};
pub use result::{CompareResult, CompareSummary, DiffRecord, Severity};
