use crate::{
    compass::{Milestone, UserProfile},
    utils::clamp,
};

/// Completion ratio of the active milestone, in `[0, 1]`.
///
/// A zero, negative or non-finite target degrades to 0, as does a non-finite saved
/// amount. A missing profile is 0.
pub fn milestone_progress(profile: Option<&UserProfile>) -> f64 {
    profile.map_or(0.0, |profile| progress_of(&profile.milestone))
}

pub fn progress_of(milestone: &Milestone) -> f64 {
    let target = milestone.target_amount;
    let saved = milestone.saved_amount;
    if !target.is_finite() || target <= 0.0 || !saved.is_finite() {
        return 0.0;
    }
    clamp(saved / target, 0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_target_is_zero_not_nan() {
        for saved in [0.0, 10.0, -5.0, 1e12] {
            let progress = progress_of(&Milestone::new("Trip", 0.0, saved));
            assert_eq!(progress, 0.0);
        }
        assert_eq!(progress_of(&Milestone::new("Trip", -100.0, 50.0)), 0.0);
        assert_eq!(progress_of(&Milestone::new("Trip", f64::NAN, 50.0)), 0.0);
        assert_eq!(progress_of(&Milestone::new("Trip", 100.0, f64::INFINITY)), 0.0);
    }

    #[test]
    fn ratio_is_clamped() {
        assert_eq!(progress_of(&Milestone::new("Trip", 500.0, 125.0)), 0.25);
        assert_eq!(progress_of(&Milestone::new("Trip", 500.0, 900.0)), 1.0);
        assert_eq!(progress_of(&Milestone::new("Trip", 500.0, -20.0)), 0.0);
        assert_eq!(milestone_progress(None), 0.0);
    }
}
