//! Fixed selection tables. Values are record numbers.

use terra_rules::Trigram;

/// The doubled trigram for each symbol, used by direct selection.
pub(crate) fn direct_number(symbol: Trigram) -> u32 {
    match symbol {
        Trigram::Qian => 1,
        Trigram::Kun => 2,
        Trigram::Kan => 29,
        Trigram::Li => 30,
        Trigram::Zhen => 51,
        Trigram::Gen => 52,
        Trigram::Xun => 57,
        Trigram::Dui => 58,
    }
}

/// Offset base in 1..=8, numbered clockwise from the north trigram.
pub(crate) fn base_index(symbol: Trigram) -> u32 {
    match symbol {
        Trigram::Kan => 1,
        Trigram::Gen => 2,
        Trigram::Zhen => 3,
        Trigram::Xun => 4,
        Trigram::Li => 5,
        Trigram::Kun => 6,
        Trigram::Dui => 7,
        Trigram::Qian => 8,
    }
}

/// Candidate pool per symbol. Pools overlap; order matters.
pub(crate) fn pool_numbers(symbol: Trigram) -> [u32; 8] {
    match symbol {
        Trigram::Qian => [1, 43, 14, 34, 9, 5, 26, 11],
        Trigram::Dui => [58, 17, 47, 28, 41, 61, 60, 38],
        Trigram::Li => [30, 56, 50, 38, 55, 49, 13, 37],
        Trigram::Zhen => [51, 21, 17, 25, 42, 3, 27, 24],
        Trigram::Xun => [57, 37, 53, 48, 18, 46, 5, 28],
        Trigram::Kan => [29, 60, 63, 48, 39, 8, 7, 46],
        Trigram::Gen => [52, 15, 39, 53, 62, 56, 31, 33],
        Trigram::Kun => [2, 23, 8, 20, 16, 35, 45, 12],
    }
}

/// King Wen numbers by `[upper][lower]`, both in `Trigram::ALL` order.
pub(crate) const MATRIX: [[u32; 8]; 8] = [
    // lower: Qian Zhen Kan Gen Kun Xun Li Dui
    [1, 25, 6, 33, 12, 44, 13, 10],   // Qian
    [34, 51, 40, 62, 16, 32, 55, 54], // Zhen
    [5, 3, 29, 39, 8, 48, 63, 60],    // Kan
    [26, 27, 4, 52, 23, 18, 22, 41],  // Gen
    [11, 24, 7, 15, 2, 46, 36, 19],   // Kun
    [9, 42, 59, 53, 20, 57, 37, 61],  // Xun
    [14, 21, 64, 56, 35, 50, 30, 38], // Li
    [43, 17, 47, 31, 45, 28, 49, 58], // Dui
];
