//! Limb and joint identities
//!
//! The robot stands on four two-jointed legs driven by a 16-channel servo
//! controller. Leg servos occupy channels 0..8, two consecutive channels
//! per limb (hip first, then knee).

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One of the four legs, in servo channel order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Limb {
    FrontLeft = 0,
    RearLeft = 1,
    RearRight = 2,
    FrontRight = 3,
}

/// Body side a limb is mounted on
///
/// Servos on opposite sides are mounted mirrored, so solved joint angles
/// need a per-side correction before they are commanded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Side {
    Left,
    Right,
}

/// Joint within a limb
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Joint {
    Hip,
    Knee,
}

impl Limb {
    /// Number of limbs
    pub const COUNT: usize = 4;

    /// All limbs, in servo channel order
    pub const ALL: [Limb; Limb::COUNT] = [
        Limb::FrontLeft,
        Limb::RearLeft,
        Limb::RearRight,
        Limb::FrontRight,
    ];

    /// Zero-based limb index
    pub fn index(self) -> usize {
        self as usize
    }

    /// Servo channel of the hip joint
    pub fn hip_servo(self) -> u8 {
        self as u8 * 2
    }

    /// Servo channel of the knee joint
    pub fn knee_servo(self) -> u8 {
        self as u8 * 2 + 1
    }

    /// Servo channel of the given joint
    pub fn servo(self, joint: Joint) -> u8 {
        match joint {
            Joint::Hip => self.hip_servo(),
            Joint::Knee => self.knee_servo(),
        }
    }

    /// Which body side the limb is mounted on
    pub fn side(self) -> Side {
        match self {
            Limb::FrontLeft | Limb::RearLeft => Side::Left,
            Limb::RearRight | Limb::FrontRight => Side::Right,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_servo_channel_layout() {
        // Two consecutive channels per limb, hips on even channels
        assert_eq!(Limb::FrontLeft.hip_servo(), 0);
        assert_eq!(Limb::FrontLeft.knee_servo(), 1);
        assert_eq!(Limb::RearLeft.hip_servo(), 2);
        assert_eq!(Limb::RearRight.hip_servo(), 4);
        assert_eq!(Limb::FrontRight.knee_servo(), 7);

        for limb in Limb::ALL {
            assert_eq!(limb.servo(Joint::Hip), limb.hip_servo());
            assert_eq!(limb.servo(Joint::Knee), limb.hip_servo() + 1);
        }
    }

    #[test]
    fn test_sides() {
        assert_eq!(Limb::FrontLeft.side(), Side::Left);
        assert_eq!(Limb::RearLeft.side(), Side::Left);
        assert_eq!(Limb::RearRight.side(), Side::Right);
        assert_eq!(Limb::FrontRight.side(), Side::Right);
    }

    #[test]
    fn test_all_ordering_matches_indices() {
        for (i, limb) in Limb::ALL.iter().enumerate() {
            assert_eq!(limb.index(), i);
        }
    }
}
