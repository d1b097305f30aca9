use serde::{Deserialize, Serialize};

use crate::config::Validate;

/// Tuning for the dragons' wandering and pursuit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DragonBehavior {
    /// Chance per turn that a dragon leaves its cell.
    pub move_probability: f64,
    /// Within this distance of the player a moving dragon will not pick a farther cell.
    pub pursuit_radius: f64,
}

impl Default for DragonBehavior {
    fn default() -> Self {
        Self {
            move_probability: 0.5,
            pursuit_radius: 3.0,
        }
    }
}

impl Validate for DragonBehavior {
    fn validate(&self) -> Result<(), String> {
        if !(0.0..=1.0).contains(&self.move_probability) {
            return Err(format!(
                "move_probability must be between 0.0 and 1.0, got {}",
                self.move_probability
            ));
        }
        if !self.pursuit_radius.is_finite() || self.pursuit_radius < 0.0 {
            return Err(format!(
                "pursuit_radius must be a non-negative number, got {}",
                self.pursuit_radius
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(DragonBehavior::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_out_of_range_probability() {
        let behavior = DragonBehavior {
            move_probability: 1.5,
            ..DragonBehavior::default()
        };
        assert!(behavior.validate().is_err());
    }

    #[test]
    fn test_rejects_negative_radius() {
        let behavior = DragonBehavior {
            pursuit_radius: -1.0,
            ..DragonBehavior::default()
        };
        assert!(behavior.validate().is_err());
    }
}
