//! The user-defined compass: interval values, the stance that collapses them,
//! and the profile record that carries both.

pub mod profile;
pub mod range;
pub mod tightness;

pub use profile::{Milestone, StoredProfile, UserProfile};
pub use range::NumericRange;
pub use tightness::{resolve, SpendView, Tightness};
