//! Level catalog and brick field generation
//!
//! Each level picks a brick pattern, a grid size, a ball speed and a
//! power-up drop chance from a static catalog. Patterns are pure functions
//! of (row, col, rows, cols) so field generation is reproducible; the only
//! randomness is the seeded power-up assignment.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use super::state::{Brick, PowerUpKind};
use crate::consts::*;

/// Which grid cells of a level contain a brick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    /// Full grid
    Normal,
    /// Manhattan-distance diamond around the grid center
    Diamond,
    /// Checkerboard on (row + col) parity
    Checker,
    /// Downward-pointing pyramid
    Pyramid,
    /// Column stripes, phase-flipped on odd rows
    Zigzag,
    /// Center row, center column, and both diagonals through center
    Cross,
    /// Rings of gaps spiralling out from the center
    Spiral,
}

impl Pattern {
    /// Whether the cell (row, col) of a rows x cols grid holds a brick.
    ///
    /// Pure and total: any (row, col) is accepted, including cells outside
    /// the nominal grid.
    pub fn includes(self, row: u32, col: u32, rows: u32, cols: u32) -> bool {
        let (r, c) = (row as i64, col as i64);
        match self {
            Pattern::Normal => true,
            Pattern::Diamond => {
                let center_row = (rows / 2) as i64;
                let center_col = (cols / 2) as i64;
                (r - center_row).abs() + (c - center_col).abs() <= center_row.min(center_col)
            }
            Pattern::Checker => (row + col) % 2 == 0,
            Pattern::Pyramid => r <= c && r <= cols as i64 - 1 - c,
            Pattern::Zigzag => {
                if row % 2 == 0 {
                    col % 3 != 0
                } else {
                    col % 3 == 0
                }
            }
            Pattern::Cross => {
                let center_row = (rows / 2) as i64;
                let center_col = (cols / 2) as i64;
                r == center_row
                    || c == center_col
                    || r - c == center_row - center_col
                    || r + c == center_row + center_col
            }
            Pattern::Spiral => {
                let center_row = rows as f32 / 2.0;
                let center_col = cols as f32 / 2.0;
                let dist = ((row as f32 - center_row).powi(2)
                    + (col as f32 - center_col).powi(2))
                .sqrt();
                ((dist + row as f32 + col as f32).floor() as i64) % 3 != 0
            }
        }
    }
}

/// Per-level tuning, indexed 1-based through [`level_config`]
#[derive(Debug, Clone, Copy)]
pub struct LevelConfig {
    pub rows: u32,
    pub cols: u32,
    /// Ball speed in units per tick
    pub ball_speed: f32,
    /// Probability that a generated brick carries a power-up
    pub power_up_chance: f64,
    pub pattern: Pattern,
}

/// The level catalog. Levels past the end clamp to the last entry.
pub const LEVELS: [LevelConfig; 7] = [
    LevelConfig { rows: 4, cols: 8, ball_speed: 4.0, power_up_chance: 0.10, pattern: Pattern::Normal },
    LevelConfig { rows: 5, cols: 8, ball_speed: 4.5, power_up_chance: 0.12, pattern: Pattern::Diamond },
    LevelConfig { rows: 5, cols: 9, ball_speed: 5.0, power_up_chance: 0.12, pattern: Pattern::Checker },
    LevelConfig { rows: 6, cols: 9, ball_speed: 5.5, power_up_chance: 0.15, pattern: Pattern::Pyramid },
    LevelConfig { rows: 6, cols: 9, ball_speed: 6.0, power_up_chance: 0.15, pattern: Pattern::Zigzag },
    LevelConfig { rows: 7, cols: 9, ball_speed: 6.5, power_up_chance: 0.18, pattern: Pattern::Cross },
    LevelConfig { rows: 7, cols: 9, ball_speed: 7.0, power_up_chance: 0.20, pattern: Pattern::Spiral },
];

/// Look up the config for a 1-based level number.
///
/// Out-of-range levels clamp to the last catalog entry rather than failing.
pub fn level_config(level: u32) -> &'static LevelConfig {
    let index = (level.max(1) as usize - 1).min(LEVELS.len() - 1);
    &LEVELS[index]
}

/// Generate the brick field for a level.
///
/// The grid is centered horizontally in the field. Colors cycle through the
/// palette by row. Power-up assignment is the only random part: a Bernoulli
/// trial at `power_up_chance` flags a brick, and flagged bricks split
/// roughly 60/40 between MultiBall and ExtraLife.
pub fn generate_field(config: &LevelConfig, rng: &mut Pcg32) -> Vec<Brick> {
    let grid_width =
        config.cols as f32 * BRICK_WIDTH + (config.cols.saturating_sub(1)) as f32 * BRICK_GAP;
    let offset_x = (FIELD_WIDTH - grid_width) / 2.0;

    let mut bricks = Vec::new();
    for row in 0..config.rows {
        for col in 0..config.cols {
            if !config.pattern.includes(row, col, config.rows, config.cols) {
                continue;
            }
            let power_up = if rng.random_bool(config.power_up_chance) {
                if rng.random_bool(0.6) {
                    Some(PowerUpKind::MultiBall)
                } else {
                    Some(PowerUpKind::ExtraLife)
                }
            } else {
                None
            };
            bricks.push(Brick {
                pos: Vec2::new(
                    offset_x + col as f32 * (BRICK_WIDTH + BRICK_GAP),
                    BRICK_TOP_OFFSET + row as f32 * (BRICK_HEIGHT + BRICK_GAP),
                ),
                width: BRICK_WIDTH,
                height: BRICK_HEIGHT,
                visible: true,
                color: BRICK_PALETTE[row as usize % BRICK_PALETTE.len()],
                power_up,
            });
        }
    }
    log::info!(
        "generated level field: {} bricks ({}x{} {:?})",
        bricks.len(),
        config.rows,
        config.cols,
        config.pattern
    );
    bricks
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;

    const PATTERNS: [Pattern; 7] = [
        Pattern::Normal,
        Pattern::Diamond,
        Pattern::Checker,
        Pattern::Pyramid,
        Pattern::Zigzag,
        Pattern::Cross,
        Pattern::Spiral,
    ];

    #[test]
    fn test_level_one_is_full_4x8_grid() {
        let mut rng = Pcg32::seed_from_u64(1);
        let bricks = generate_field(level_config(1), &mut rng);
        assert_eq!(bricks.len(), 32);
        assert!(bricks.iter().all(|b| b.visible));
    }

    #[test]
    fn test_level_lookup_clamps_past_catalog_end() {
        assert_eq!(level_config(0).rows, LEVELS[0].rows);
        assert_eq!(level_config(1).pattern, Pattern::Normal);
        assert_eq!(level_config(7).pattern, Pattern::Spiral);
        assert_eq!(level_config(99).pattern, Pattern::Spiral);
        assert_eq!(level_config(u32::MAX).ball_speed, LEVELS[6].ball_speed);
    }

    #[test]
    fn test_checker_pattern_parity() {
        assert!(Pattern::Checker.includes(0, 0, 4, 8));
        assert!(!Pattern::Checker.includes(0, 1, 4, 8));
        assert!(Pattern::Checker.includes(1, 1, 4, 8));
    }

    #[test]
    fn test_pyramid_pattern_narrows_with_row() {
        // Row 0 spans the whole width, later rows lose both edges
        let cols = 8;
        let row0: Vec<bool> = (0..cols).map(|c| Pattern::Pyramid.includes(0, c, 4, cols)).collect();
        assert!(row0.iter().all(|&b| b));
        assert!(!Pattern::Pyramid.includes(2, 0, 4, cols));
        assert!(!Pattern::Pyramid.includes(2, cols - 1, 4, cols));
        assert!(Pattern::Pyramid.includes(2, 3, 4, cols));
    }

    #[test]
    fn test_diamond_pattern_centered() {
        // 5x9 grid: center cell is always in, far corners out
        assert!(Pattern::Diamond.includes(2, 4, 5, 9));
        assert!(!Pattern::Diamond.includes(0, 0, 5, 9));
        assert!(!Pattern::Diamond.includes(4, 8, 5, 9));
    }

    #[test]
    fn test_palette_cycles_by_row() {
        let mut rng = Pcg32::seed_from_u64(1);
        let config = LevelConfig {
            rows: 7,
            cols: 3,
            ball_speed: 4.0,
            power_up_chance: 0.0,
            pattern: Pattern::Normal,
        };
        let bricks = generate_field(&config, &mut rng);
        for (i, brick) in bricks.iter().enumerate() {
            let row = i / 3;
            assert_eq!(brick.color, BRICK_PALETTE[row % BRICK_PALETTE.len()]);
        }
        // Row 6 wraps around to color 0
        assert_eq!(bricks[18].color, BRICK_PALETTE[0]);
    }

    #[test]
    fn test_zero_power_up_chance_drops_nothing() {
        let mut rng = Pcg32::seed_from_u64(42);
        let config = LevelConfig { power_up_chance: 0.0, ..LEVELS[0] };
        let bricks = generate_field(&config, &mut rng);
        assert!(bricks.iter().all(|b| b.power_up.is_none()));
    }

    #[test]
    fn test_same_seed_generates_identical_field() {
        let mut rng_a = Pcg32::seed_from_u64(99);
        let mut rng_b = Pcg32::seed_from_u64(99);
        let a = generate_field(level_config(3), &mut rng_a);
        let b = generate_field(level_config(3), &mut rng_b);
        assert_eq!(a.len(), b.len());
        for (x, y) in a.iter().zip(&b) {
            assert_eq!(x.pos, y.pos);
            assert_eq!(x.power_up, y.power_up);
        }
    }

    #[test]
    fn test_catalog_fields_in_bounds_without_overlap() {
        for (i, config) in LEVELS.iter().enumerate() {
            let mut rng = Pcg32::seed_from_u64(i as u64);
            let bricks = generate_field(config, &mut rng);
            for brick in &bricks {
                assert!(brick.pos.x >= 0.0, "level {} brick off left edge", i + 1);
                assert!(
                    brick.pos.x + brick.width <= FIELD_WIDTH,
                    "level {} brick off right edge",
                    i + 1
                );
                assert!(brick.pos.y >= 0.0);
                assert!(brick.pos.y + brick.height <= FIELD_HEIGHT);
            }
            for (a_idx, a) in bricks.iter().enumerate() {
                for b in &bricks[a_idx + 1..] {
                    assert!(
                        !a.rect().overlaps(&b.rect()),
                        "level {} has overlapping bricks",
                        i + 1
                    );
                }
            }
        }
    }

    proptest! {
        #[test]
        fn prop_patterns_are_deterministic(
            row in 0u32..16,
            col in 0u32..16,
            rows in 1u32..16,
            cols in 1u32..16,
            pattern_index in 0usize..PATTERNS.len(),
        ) {
            let pattern = PATTERNS[pattern_index];
            let first = pattern.includes(row, col, rows, cols);
            for _ in 0..3 {
                prop_assert_eq!(pattern.includes(row, col, rows, cols), first);
            }
        }

        #[test]
        fn prop_generated_fields_stay_in_bounds(
            rows in 1u32..=8,
            cols in 1u32..=9,
            pattern_index in 0usize..PATTERNS.len(),
            chance in 0.0f64..=1.0,
            seed in any::<u64>(),
        ) {
            let config = LevelConfig {
                rows,
                cols,
                ball_speed: 4.0,
                power_up_chance: chance,
                pattern: PATTERNS[pattern_index],
            };
            let mut rng = Pcg32::seed_from_u64(seed);
            let bricks = generate_field(&config, &mut rng);
            prop_assert!(bricks.len() <= (rows * cols) as usize);
            for brick in &bricks {
                prop_assert!(brick.pos.x >= 0.0);
                prop_assert!(brick.pos.x + brick.width <= FIELD_WIDTH);
                prop_assert!(brick.pos.y + brick.height <= FIELD_HEIGHT);
                prop_assert!(brick.visible);
            }
        }
    }
}
