//! Attribute level table.
//!
//! Maps every attribute level from 0 to 30 to the five coefficients an
//! attribute contributes: dice count, defense, pool, statistic and roll
//! threshold. The table is dense, so a level either resolves to exactly one
//! row or is out of range.

use serde::{Deserialize, Serialize};

/// Lowest attribute level in the table.
pub const MIN_ATTRIBUTE_LEVEL: i32 = 0;

/// Highest attribute level in the table.
pub const MAX_ATTRIBUTE_LEVEL: i32 = 30;

/// One row of the attribute level table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AttributeLevelRow {
    pub level: i32,
    pub dice_count: i32,
    pub defense: i32,
    pub pool: i32,
    pub statistic: i32,
    pub threshold: i32,
}

const fn row(
    level: i32,
    dice_count: i32,
    defense: i32,
    pool: i32,
    statistic: i32,
    threshold: i32,
) -> AttributeLevelRow {
    AttributeLevelRow {
        level,
        dice_count,
        defense,
        pool,
        statistic,
        threshold,
    }
}

/// The attribute level table, indexed by level.
pub static ATTRIBUTE_LEVELS: [AttributeLevelRow; 31] = [
    row(0, 1, -1, 0, 0, 10),
    row(1, 2, 0, 0, 1, 9),
    row(2, 2, 0, 1, 1, 8),
    row(3, 3, 1, 1, 2, 7),
    row(4, 4, 2, 2, 2, 6),
    row(5, 4, 2, 3, 3, 6),
    row(6, 5, 3, 3, 4, 6),
    row(7, 5, 3, 4, 4, 6),
    row(8, 5, 3, 4, 5, 5),
    row(9, 6, 4, 4, 5, 5),
    row(10, 6, 4, 5, 5, 5),
    row(11, 7, 5, 5, 6, 5),
    row(12, 7, 5, 6, 6, 4),
    row(13, 8, 6, 6, 7, 4),
    row(14, 8, 6, 7, 7, 4),
    row(15, 9, 7, 7, 7, 4),
    row(16, 9, 7, 8, 8, 4),
    row(17, 10, 8, 8, 8, 3),
    row(18, 10, 8, 9, 9, 3),
    row(19, 11, 9, 9, 9, 3),
    row(20, 11, 9, 10, 10, 3),
    row(21, 12, 10, 10, 11, 3),
    row(22, 12, 10, 11, 11, 3),
    row(23, 13, 11, 11, 12, 2),
    row(24, 13, 11, 12, 12, 2),
    row(25, 14, 12, 12, 13, 2),
    row(26, 14, 12, 13, 13, 2),
    row(27, 15, 13, 13, 14, 2),
    row(28, 15, 13, 14, 14, 2),
    row(29, 16, 14, 14, 15, 2),
    row(30, 16, 14, 15, 15, 2),
];

/// Look up the table row for an attribute level.
///
/// Returns `None` for levels outside `0..=30`.
///
/// # Examples
///
/// ```rust
/// use charstat::attribute_table::resolve_level;
///
/// let row = resolve_level(11).unwrap();
/// assert_eq!(row.dice_count, 7);
/// assert_eq!(row.threshold, 5);
/// assert!(resolve_level(31).is_none());
/// ```
pub fn resolve_level(level: i32) -> Option<&'static AttributeLevelRow> {
    let index = usize::try_from(level).ok()?;
    ATTRIBUTE_LEVELS.get(index)
}

/// Whether `level` has a row in the table.
pub fn is_valid_level(level: i32) -> bool {
    resolve_level(level).is_some()
}
