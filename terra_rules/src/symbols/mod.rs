//! Symbolic categories: the eight trigrams, their family roles, and the
//! fixed tables that map directions and intentions onto them.

mod intention;
mod trigram;

pub use intention::*;
pub use trigram::*;

use crate::compass::Direction;

/// Later Heaven arrangement: the trigram that sits at each compass point.
pub fn direction_to_symbol(direction: Direction) -> Trigram {
    match direction {
        Direction::N => Trigram::Kan,
        Direction::NE => Trigram::Gen,
        Direction::E => Trigram::Zhen,
        Direction::SE => Trigram::Xun,
        Direction::S => Trigram::Li,
        Direction::SW => Trigram::Kun,
        Direction::W => Trigram::Dui,
        Direction::NW => Trigram::Qian,
    }
}

/// Which trigram an intention calls on.
pub fn intention_to_symbol(intention: Intention) -> Trigram {
    match intention {
        Intention::Career => Trigram::Kan,
        Intention::Stability => Trigram::Gen,
        Intention::Health => Trigram::Zhen,
        Intention::Growth => Trigram::Xun,
        Intention::Visibility => Trigram::Li,
        Intention::Harmony => Trigram::Kun,
        Intention::InnerFocus => Trigram::Dui,
        Intention::Purpose => Trigram::Qian,
    }
}
