/// Lives granted at the start of every round.
pub const STARTING_LIVES: u8 = 7;

/// Points awarded per remaining life when a round is won.
pub const POINTS_PER_LIFE: u32 = 10;

/// Display character for an unrevealed position.
pub const PLACEHOLDER: char = '_';

/// Score awarded for winning a round with `lives` remaining.
#[inline]
pub fn round_award(lives: u8) -> u32 {
    u32::from(lives) * POINTS_PER_LIFE
}
