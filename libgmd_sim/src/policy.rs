use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::constants::{COMBINED_MAX, STAGE_MAX};
use super::detect::PeakStatus;
use super::error::PolicyError;

/// Which strategy distributes the combined attenuation across the two stages
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SplitPolicy {
    #[default]
    Even,
    FavorPost,
}

impl FromStr for SplitPolicy {
    type Err = PolicyError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "even" {
            Ok(Self::Even)
        } else if s == "favor_post" {
            Ok(Self::FavorPost)
        } else {
            Err(PolicyError::InvalidKeyword(s.to_string()))
        }
    }
}

/// Step the combined attenuation index up or down by one unit.
///
/// The hardware can only move one unit of attenuation per tick, never jump
/// to a computed optimum, so an out-of-window peak always produces a single
/// step toward the window. Steps saturate at the [0, 30] combined range.
pub fn step_combined(peak_status: PeakStatus, current_att: u8) -> u8 {
    match peak_status {
        PeakStatus::TooHigh => {
            if current_att >= COMBINED_MAX {
                COMBINED_MAX
            } else {
                current_att + 1
            }
        }
        PeakStatus::TooLow => current_att.saturating_sub(1),
        PeakStatus::InRange => current_att,
    }
}

/// Split a combined attenuation index as evenly as possible across the stages.
///
/// The pre stage absorbs the odd remainder. Stateless; ignores the peak
/// status and plateau flag entirely.
pub fn split_even(att_val: u8) -> (u8, u8) {
    (att_val % 2 + att_val / 2, att_val / 2)
}

/// Adjust the split incrementally, biasing attenuation toward the post stage.
///
/// Unlike [`split_even`] this never redistributes from scratch; it moves the
/// current settings by at most a couple of discrete steps per tick. The post
/// stage sits closer to the detector and is assumed to have more headroom,
/// so it takes attenuation first; a plateau on a too-high peak flips that
/// preference, and a plateau on a too-low peak triggers the one larger
/// corrective move (post down two, pre up one, net -1). Each branch is an
/// ordered ladder of preferred then fallback moves, and the ordering is part
/// of the observed behavior under saturation. If no move fits within the
/// [0, 15] stage bounds, the settings come back unchanged.
pub fn split_favor_post(
    preatt: u8,
    posatt: u8,
    peak_status: PeakStatus,
    plateau: bool,
) -> (u8, u8) {
    match peak_status {
        PeakStatus::TooHigh => {
            if plateau {
                if preatt < STAGE_MAX {
                    (preatt + 1, posatt)
                } else if posatt < STAGE_MAX {
                    (preatt, posatt + 1)
                } else {
                    (preatt, posatt)
                }
            } else if posatt < STAGE_MAX {
                (preatt, posatt + 1)
            } else if preatt < STAGE_MAX {
                (preatt + 1, posatt)
            } else {
                (preatt, posatt)
            }
        }
        PeakStatus::TooLow => {
            if plateau && preatt < STAGE_MAX && posatt > 1 {
                (preatt + 1, posatt - 2)
            } else if preatt > 0 {
                (preatt - 1, posatt)
            } else if posatt > 0 {
                (preatt, posatt - 1)
            } else {
                (preatt, posatt)
            }
        }
        PeakStatus::InRange => (preatt, posatt),
    }
}

//Unit tests
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_clamps() {
        assert_eq!(step_combined(PeakStatus::TooHigh, 30), 30);
        assert_eq!(step_combined(PeakStatus::TooLow, 0), 0);
        assert_eq!(step_combined(PeakStatus::InRange, 7), 7);
    }

    #[test]
    fn test_step_moves_by_one() {
        assert_eq!(step_combined(PeakStatus::TooHigh, 0), 1);
        assert_eq!(step_combined(PeakStatus::TooHigh, 29), 30);
        assert_eq!(step_combined(PeakStatus::TooLow, 1), 0);
        assert_eq!(step_combined(PeakStatus::TooLow, 30), 29);
    }

    #[test]
    fn test_split_even() {
        assert_eq!(split_even(7), (4, 3));
        assert_eq!(split_even(30), (15, 15));
        assert_eq!(split_even(0), (0, 0));
        for val in 0..=30 {
            let (pre, post) = split_even(val);
            assert_eq!(pre + post, val);
            assert!(pre <= STAGE_MAX && post <= STAGE_MAX);
            assert!(pre == post || pre == post + 1);
        }
    }

    #[test]
    fn test_favor_post_too_high() {
        // Without a plateau the post stage takes the step first
        assert_eq!(
            split_favor_post(5, 5, PeakStatus::TooHigh, false),
            (5, 6)
        );
        // Post saturated, fall back to pre
        assert_eq!(
            split_favor_post(5, 15, PeakStatus::TooHigh, false),
            (6, 15)
        );
        // A plateau flips the preference to the pre stage
        assert_eq!(split_favor_post(5, 5, PeakStatus::TooHigh, true), (6, 5));
        assert_eq!(
            split_favor_post(15, 5, PeakStatus::TooHigh, true),
            (15, 6)
        );
        // Both saturated: no move available
        assert_eq!(
            split_favor_post(15, 15, PeakStatus::TooHigh, false),
            (15, 15)
        );
        assert_eq!(
            split_favor_post(15, 15, PeakStatus::TooHigh, true),
            (15, 15)
        );
    }

    #[test]
    fn test_favor_post_too_low() {
        assert_eq!(split_favor_post(5, 5, PeakStatus::TooLow, false), (4, 5));
        assert_eq!(split_favor_post(0, 5, PeakStatus::TooLow, false), (0, 4));
        assert_eq!(split_favor_post(0, 0, PeakStatus::TooLow, false), (0, 0));
        // The plateau branch fires the -2/+1 corrective move (net -1)
        assert_eq!(split_favor_post(5, 5, PeakStatus::TooLow, true), (6, 3));
        // Preconditions unmet: post too small, fall back to the plain moves
        assert_eq!(split_favor_post(5, 1, PeakStatus::TooLow, true), (4, 1));
        assert_eq!(split_favor_post(0, 1, PeakStatus::TooLow, true), (0, 0));
        // Preconditions unmet: pre saturated
        assert_eq!(split_favor_post(15, 5, PeakStatus::TooLow, true), (14, 5));
    }

    #[test]
    fn test_favor_post_in_range() {
        assert_eq!(split_favor_post(3, 7, PeakStatus::InRange, false), (3, 7));
        assert_eq!(split_favor_post(3, 7, PeakStatus::InRange, true), (3, 7));
    }

    #[test]
    fn test_favor_post_stays_in_bounds() {
        let statuses = [PeakStatus::TooHigh, PeakStatus::TooLow, PeakStatus::InRange];
        for pre in 0..=STAGE_MAX {
            for post in 0..=STAGE_MAX {
                for status in statuses {
                    for plateau in [false, true] {
                        let (new_pre, new_post) = split_favor_post(pre, post, status, plateau);
                        assert!(new_pre <= STAGE_MAX);
                        assert!(new_post <= STAGE_MAX);
                    }
                }
            }
        }
    }

    #[test]
    fn test_policy_keywords() {
        assert_eq!(SplitPolicy::from_str("even").unwrap(), SplitPolicy::Even);
        assert_eq!(
            SplitPolicy::from_str("favor_post").unwrap(),
            SplitPolicy::FavorPost
        );
        assert!(SplitPolicy::from_str("optimal").is_err());
    }
}
