//! Inverse kinematics solver for one two-jointed leg
//!
//! Converts a desired foot position (horizontal distance from the hip
//! shaft, and height of the hip above the foot) into hip and knee servo
//! angles via the law-of-cosines / atan2 decomposition for a two-link
//! planar manipulator. Targets outside the leg's reach envelope are
//! rejected; no NaN or domain-error angle ever reaches a servo.

#[allow(unused_imports)]
use micromath::F32Ext;

use crate::limb::Side;

/// Hip servo shaft to knee servo shaft distance
pub const UPPER_LEG_MM: f32 = 46.0;

/// Knee servo shaft to foot tip distance
pub const LOWER_LEG_MM: f32 = 57.0;

const UPPER2: f32 = UPPER_LEG_MM * UPPER_LEG_MM;
const LOWER2: f32 = LOWER_LEG_MM * LOWER_LEG_MM;
const RAD_TO_DEG: f32 = 180.0 / core::f32::consts::PI;

/// Solver failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KinematicsError {
    /// The requested foot position lies outside the annulus the leg can
    /// reach (closer than `|upper - lower|` or farther than
    /// `upper + lower` from the hip shaft, or exactly on it)
    UnreachableTarget,
}

/// Solved servo angles for one limb, in integer degrees
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct JointAngles {
    pub hip_deg: i16,
    pub knee_deg: i16,
}

/// Solve for the servo angles that place the foot at `x_mm` / `height_mm`
///
/// `x_mm` is signed, forward positive; `height_mm` is the distance from the
/// hip shaft down to the foot. Angles are truncated to whole degrees and
/// corrected for the mirrored servo mounting of the given body side.
pub fn solve(side: Side, x_mm: f32, height_mm: f32) -> Result<JointAngles, KinematicsError> {
    let (hip, knee) = solve_unrounded(x_mm, height_mm)?;
    let hip = hip.floor() as i16;
    let knee = knee.floor() as i16;

    Ok(match side {
        Side::Left => JointAngles {
            hip_deg: hip - 90,
            knee_deg: knee - 90,
        },
        Side::Right => JointAngles {
            hip_deg: 90 - hip,
            knee_deg: 90 - knee,
        },
    })
}

/// Geometric solution in degrees, before truncation and side correction
///
/// Hip angle is measured from the forward horizontal to the upper leg
/// segment; knee angle is the interior angle between the two segments.
fn solve_unrounded(x_mm: f32, height_mm: f32) -> Result<(f32, f32), KinematicsError> {
    let reach2 = x_mm * x_mm + height_mm * height_mm;
    if reach2 == 0.0 {
        return Err(KinematicsError::UnreachableTarget);
    }

    let hip_cos = (UPPER2 - LOWER2 + reach2) / (2.0 * UPPER_LEG_MM * reach2.sqrt());
    let knee_cos = (UPPER2 + LOWER2 - reach2) / (2.0 * UPPER_LEG_MM * LOWER_LEG_MM);
    if hip_cos < -1.0 || hip_cos > 1.0 || knee_cos < -1.0 || knee_cos > 1.0 {
        return Err(KinematicsError::UnreachableTarget);
    }

    let hip = (height_mm.atan2(x_mm) + hip_cos.acos()) * RAD_TO_DEG;
    let knee = knee_cos.acos() * RAD_TO_DEG;
    Ok((hip, knee))
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f32::consts::PI;
    use proptest::prelude::*;

    /// Foot position reached by the unrounded, uncorrected solution
    fn forward(hip_deg: f32, knee_deg: f32) -> (f32, f32) {
        let upper = hip_deg / RAD_TO_DEG;
        let lower = upper + knee_deg / RAD_TO_DEG - PI;
        let x = UPPER_LEG_MM * upper.cos() + LOWER_LEG_MM * lower.cos();
        let height = UPPER_LEG_MM * upper.sin() + LOWER_LEG_MM * lower.sin();
        (x, height)
    }

    #[test]
    fn test_known_target_straight_down() {
        // Foot directly below the hip at standing height
        let left = solve(Side::Left, 0.0, 50.0).unwrap();
        assert_eq!(
            left,
            JointAngles {
                hip_deg: 72,
                knee_deg: -34
            }
        );

        let right = solve(Side::Right, 0.0, 50.0).unwrap();
        assert_eq!(
            right,
            JointAngles {
                hip_deg: -72,
                knee_deg: 34
            }
        );
    }

    #[test]
    fn test_side_correction_mirrors_angles() {
        let targets = [(0.0, 50.0), (20.0, 40.0), (-40.0, 40.0), (10.0, 90.0)];
        for (x, height) in targets {
            let left = solve(Side::Left, x, height).unwrap();
            let right = solve(Side::Right, x, height).unwrap();
            assert_eq!(left.hip_deg, -right.hip_deg);
            assert_eq!(left.knee_deg, -right.knee_deg);
        }
    }

    #[test]
    fn test_zero_reach_rejected() {
        assert_eq!(
            solve(Side::Left, 0.0, 0.0),
            Err(KinematicsError::UnreachableTarget)
        );
    }

    #[test]
    fn test_target_beyond_leg_rejected() {
        // Farther than upper + lower = 103 mm
        assert_eq!(
            solve(Side::Left, 0.0, 120.0),
            Err(KinematicsError::UnreachableTarget)
        );
        assert_eq!(
            solve(Side::Right, 104.0, 0.0),
            Err(KinematicsError::UnreachableTarget)
        );
    }

    #[test]
    fn test_target_inside_annulus_rejected() {
        // Closer than lower - upper = 11 mm: the knee cannot fold that far
        assert_eq!(
            solve(Side::Left, 5.0, 5.0),
            Err(KinematicsError::UnreachableTarget)
        );
    }

    #[test]
    fn test_full_reach_boundary_solves() {
        // Exactly at full extension the knee is straight (interior 180°)
        let (_, knee) = solve_unrounded(0.0, UPPER_LEG_MM + LOWER_LEG_MM).unwrap();
        assert!((knee - 180.0).abs() < 0.1);
    }

    proptest! {
        #[test]
        fn prop_round_trip_reaches_target(
            x in -80.0f32..80.0,
            height in 5.0f32..100.0,
        ) {
            let reach = (x * x + height * height).sqrt();
            prop_assume!(reach > 12.0 && reach < 102.0);

            let (hip, knee) = solve_unrounded(x, height).unwrap();
            let (fx, fh) = forward(hip, knee);
            prop_assert!((fx - x).abs() < 1e-2, "x: {} vs {}", fx, x);
            prop_assert!((fh - height).abs() < 1e-2, "height: {} vs {}", fh, height);
        }

        #[test]
        fn prop_truncation_stays_within_one_degree(
            x in -80.0f32..80.0,
            height in 5.0f32..100.0,
        ) {
            let reach = (x * x + height * height).sqrt();
            prop_assume!(reach > 12.0 && reach < 102.0);

            let (hip, knee) = solve_unrounded(x, height).unwrap();
            let angles = solve(Side::Left, x, height).unwrap();
            prop_assert!((angles.hip_deg as f32 - (hip - 90.0)).abs() <= 1.0);
            prop_assert!((angles.knee_deg as f32 - (knee - 90.0)).abs() <= 1.0);
        }
    }
}
