//! Combat formula constants - all per-blow values in one place
//!
//! All bonuses are ADDITIVE and drawn from inclusive ranges starting at 0.

/// Largest random bonus added to a blow on top of attack power
pub const ATTACK_BONUS_MAX: u32 = 4;

/// Largest random bonus added to defense power while the shield is raised
pub const SHIELD_ROLL_MAX: u32 = 2;

/// Number of segments in a full health bar
pub const HEALTH_BAR_SEGMENTS: u32 = 10;

/// Filled health bar glyph
pub const HEALTH_BAR_GLYPH: char = '█';

/// Divisor applied to the defeated enemy's attack power for the victory heal
pub const VICTORY_HEAL_DIVISOR: u32 = 3;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roll_constants_reasonable() {
        assert!(ATTACK_BONUS_MAX > SHIELD_ROLL_MAX);
        assert!(HEALTH_BAR_SEGMENTS > 0);
        assert!(VICTORY_HEAL_DIVISOR > 0);
    }
}
