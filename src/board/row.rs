//! One side's full ordered set of pits, and all the rules over them.
//!
//! A `Row` is an immutable value type backed by a persistent vector:
//! sowing and stealing return new Rows, and successor snapshots share
//! structure with their predecessors.
//!
//! ## Geography
//!
//! A row of length `n` (even, at least 2) splits at the midpoint. The
//! configured home half is capture-eligible and decides the half-empty lose
//! condition. A position `i` aligns with position `mirror(i) = |n/2 − i| − 1`
//! on the opposing row; the formula has no image exactly at `i = n/2`, which
//! `mirror_index` expresses as `None`.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::{HomeHalf, Orientation};

use super::pit::Pit;
use super::verdict::{
    LoseCondition, StealVerdict, StealViolation, TakeVerdict, TakeViolation,
};

/// Malformed row construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowValidationError {
    /// Fewer than 2 pits were given.
    TooFewPits(usize),
    /// An odd number of pits was given.
    OddPitCount(usize),
}

impl std::fmt::Display for RowValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RowValidationError::TooFewPits(got) => {
                write!(f, "at least 2 pits are required, got {}", got)
            }
            RowValidationError::OddPitCount(got) => {
                write!(f, "pit count must be even, got {}", got)
            }
        }
    }
}

impl std::error::Error for RowValidationError {}

/// Result of sowing a pit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TakeOutcome {
    /// The row after sowing.
    pub updated: Row,
    /// The final pit touched by the single-stone distribution. Equal to the
    /// source index when the stone count is an exact multiple of the length.
    pub last_seated: usize,
}

/// Result of a steal attempt. Both rows are unchanged values when the steal
/// was not possible.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StealOutcome {
    /// The own row after the capture.
    pub updated: Row,
    /// The opponent row after being stolen from.
    pub other_updated: Row,
}

/// Name a pit position for humans: `A1..An` in the lower half, `Bn..B1`
/// in the upper half. Total over any index: out-of-range positions get a
/// raw `#index` label, since they are named in narration before validation.
#[must_use]
pub fn pit_name(index: usize, len: usize) -> String {
    if index < len / 2 {
        format!("A{}", index + 1)
    } else if index < len {
        format!("B{}", len - index)
    } else {
        format!("#{}", index)
    }
}

/// Fixed-length ordered sequence of pits.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    pits: Vector<Pit>,
}

impl Row {
    /// Create a row from explicit stone counts.
    ///
    /// Fails if fewer than 2 counts or an odd number of counts are given.
    pub fn from_counts(counts: &[u32]) -> Result<Self, RowValidationError> {
        if counts.len() < 2 {
            return Err(RowValidationError::TooFewPits(counts.len()));
        }
        if counts.len() % 2 != 0 {
            return Err(RowValidationError::OddPitCount(counts.len()));
        }
        Ok(Self {
            pits: counts.iter().map(|&stones| Pit::new(stones)).collect(),
        })
    }

    /// The canonical starting row: 16 pits with 2 stones each and an empty
    /// central gap at indices 4..8.
    #[must_use]
    pub fn initial() -> Self {
        let counts: Vec<u32> = (0..16).map(|i| if (4..8).contains(&i) { 0 } else { 2 }).collect();
        Self::from_counts(&counts).expect("canonical layout is a valid row shape")
    }

    /// A uniform row of `len` pits with `stones` each.
    pub fn filled(len: usize, stones: u32) -> Result<Self, RowValidationError> {
        Self::from_counts(&vec![stones; len])
    }

    /// Number of pits.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pits.len()
    }

    /// Rows are never empty; this exists for clippy symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pits.is_empty()
    }

    /// Half the row length.
    #[must_use]
    pub fn half_len(&self) -> usize {
        self.pits.len() / 2
    }

    /// The pit at `index`, or `None` when out of range.
    #[must_use]
    pub fn pit(&self, index: usize) -> Option<Pit> {
        self.pits.get(index).copied()
    }

    /// Iterate over the pits in order.
    pub fn iter(&self) -> impl Iterator<Item = Pit> + '_ {
        self.pits.iter().copied()
    }

    /// Total stones on the row.
    #[must_use]
    pub fn total_stones(&self) -> u32 {
        self.pits.iter().map(|p| p.stones()).sum()
    }

    /// The aligned position on the opposing row, `|len/2 − index| − 1`.
    ///
    /// `None` when `index` is out of range or exactly at the midpoint,
    /// where the formula has no image.
    #[must_use]
    pub fn mirror_index(&self, index: usize) -> Option<usize> {
        if index >= self.len() {
            return None;
        }
        let half = self.half_len() as isize;
        let mirrored = (half - index as isize).abs() - 1;
        usize::try_from(mirrored).ok()
    }

    /// Check whether the pit at `index` may be taken.
    ///
    /// Ordered rules, first failure wins: the index addresses a pit, the pit
    /// is non-empty, the pit holds more than one stone.
    #[must_use]
    pub fn is_allowed_to_take(&self, index: usize) -> TakeVerdict {
        // Later rules index the row and rely on the bound check running first.
        let rules: [(&dyn Fn() -> bool, TakeViolation); 3] = [
            (&|| index < self.len(), TakeViolation::IndexOutOfBound),
            (&|| self.pits[index].is_not_empty(), TakeViolation::NoStoneExists),
            (&|| self.pits[index].stones() > 1, TakeViolation::NotEnoughStones),
        ];

        for (rule, violation) in rules {
            if !rule() {
                return TakeVerdict::NotAllowed(violation);
            }
        }
        TakeVerdict::Allowed
    }

    /// Sow the pit at `index` across the row.
    ///
    /// The source pit is emptied; every pit (source included) gains one
    /// stone per full lap, then the pits immediately following the source
    /// (wrapping, source excluded) each gain one of the remaining stones.
    ///
    /// Callers validate with [`is_allowed_to_take`](Self::is_allowed_to_take)
    /// first; an out-of-range index is a programming error.
    #[must_use]
    pub fn take(&self, index: usize) -> TakeOutcome {
        debug_assert!(index < self.len(), "take on out-of-range pit {}", index);

        let n = self.len();
        let stones = self.pits[index].stones() as usize;
        let laps = (stones / n) as u32;
        let steps = stones % n;

        let mut pits: Vec<Pit> = self.pits.iter().copied().collect();
        pits[index] = pits[index].emptied();
        for pit in &mut pits {
            *pit = pit.plus(laps);
        }
        for step in 1..=steps {
            let i = (index + step) % n;
            pits[i] = pits[i].plus(1);
        }

        TakeOutcome {
            updated: Self {
                pits: pits.into_iter().collect(),
            },
            last_seated: (index + steps) % n,
        }
    }

    /// Check whether landing on `index` captures the mirrored pit of `other`.
    ///
    /// Ordered rules, first failure wins: the index lies in the
    /// capture-eligible half, the own pit holds more than one stone, the
    /// mirrored opponent pit exists and is non-empty.
    #[must_use]
    pub fn is_possible_to_steal(&self, index: usize, other: &Row, home: HomeHalf) -> StealVerdict {
        let mirrored = self.mirror_index(index);
        let rules: [(&dyn Fn() -> bool, StealViolation); 3] = [
            (
                &|| home.contains(index, self.len()),
                StealViolation::SecondRow,
            ),
            (
                &|| self.pits[index].stones() > 1,
                StealViolation::NotEnoughStones,
            ),
            (
                &|| mirrored.is_some_and(|m| other.pits[m].is_not_empty()),
                StealViolation::OtherSideHasNoStones,
            ),
        ];

        for (rule, violation) in rules {
            if !rule() {
                return StealVerdict::NotPossible(violation);
            }
        }
        StealVerdict::Possible
    }

    /// Steal the mirrored pit of `other` into the pit at `index`.
    ///
    /// A no-op returning both rows unchanged when the steal is not possible.
    #[must_use]
    pub fn steal(&self, index: usize, other: &Row, home: HomeHalf) -> StealOutcome {
        if !self.is_possible_to_steal(index, other, home).is_possible() {
            return StealOutcome {
                updated: self.clone(),
                other_updated: other.clone(),
            };
        }

        // is_possible_to_steal guarantees the mirror exists here.
        let mirrored = self
            .mirror_index(index)
            .expect("steal ruled possible without a mirrored pit");
        let captured = other.pits[mirrored].stones();

        let mut own = self.pits.clone();
        own.set(index, own[index].plus(captured));

        let mut far = other.pits.clone();
        far.set(mirrored, far[mirrored].emptied());

        StealOutcome {
            updated: Self { pits: own },
            other_updated: Self { pits: far },
        }
    }

    /// Which lose sub-condition holds, if any.
    ///
    /// A row is lost when its home half is entirely empty, or when no pit
    /// anywhere holds more than one stone (no legal move exists).
    #[must_use]
    pub fn lose_condition(&self, home: HomeHalf) -> Option<LoseCondition> {
        if home.range(self.len()).all(|i| self.pits[i].is_empty()) {
            return Some(LoseCondition::HomeHalfEmpty);
        }
        if self.pits.iter().all(|p| p.stones() <= 1) {
            return Some(LoseCondition::NoMovableStones);
        }
        None
    }

    /// Boolean view of [`lose_condition`](Self::lose_condition).
    #[must_use]
    pub fn is_in_lose_condition(&self, home: HomeHalf) -> bool {
        self.lose_condition(home).is_some()
    }

    /// Render the row as two labelled lines, `A` half and reversed `B` half.
    #[must_use]
    pub fn pretty(&self, orientation: Orientation) -> String {
        let half = self.half_len();
        let lower: Vec<String> = (0..half)
            .map(|i| format!("{}:{}", pit_name(i, self.len()), self.pits[i]))
            .collect();
        let upper: Vec<String> = (half..self.len())
            .rev()
            .map(|i| format!("{}:{}", pit_name(i, self.len()), self.pits[i]))
            .collect();

        match orientation {
            Orientation::HomeAtTop => format!("{}\n {}", lower.join(" "), upper.join(" ")),
            Orientation::HomeAtBottom => format!("{}\n {}", upper.join(" "), lower.join(" ")),
        }
    }
}

impl std::fmt::Display for Row {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.pretty(Orientation::HomeAtTop))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(counts: &[u32]) -> Row {
        Row::from_counts(counts).unwrap()
    }

    // === Construction ===

    #[test]
    fn test_from_counts_rejects_too_few() {
        assert_eq!(Row::from_counts(&[]), Err(RowValidationError::TooFewPits(0)));
        assert_eq!(Row::from_counts(&[2]), Err(RowValidationError::TooFewPits(1)));
    }

    #[test]
    fn test_from_counts_rejects_odd() {
        assert_eq!(
            Row::from_counts(&[2, 2, 2]),
            Err(RowValidationError::OddPitCount(3))
        );
    }

    #[test]
    fn test_from_counts_minimal() {
        let row = row(&[2, 2]);
        assert_eq!(row.len(), 2);
        assert_eq!(row.half_len(), 1);
    }

    #[test]
    fn test_initial_layout() {
        let row = Row::initial();

        assert_eq!(row.len(), 16);
        let counts: Vec<u32> = row.iter().map(Pit::stones).collect();
        assert_eq!(
            counts,
            vec![2, 2, 2, 2, 0, 0, 0, 0, 2, 2, 2, 2, 2, 2, 2, 2]
        );
        assert_eq!(row.total_stones(), 24);
    }

    #[test]
    fn test_filled() {
        let row = Row::filled(6, 2).unwrap();
        assert!(row.iter().all(|p| p.stones() == 2));

        assert!(Row::filled(3, 2).is_err());
    }

    #[test]
    fn test_validation_error_display() {
        assert_eq!(
            format!("{}", RowValidationError::TooFewPits(1)),
            "at least 2 pits are required, got 1"
        );
        assert_eq!(
            format!("{}", RowValidationError::OddPitCount(5)),
            "pit count must be even, got 5"
        );
    }

    // === Mirror index ===

    #[test]
    fn test_mirror_index() {
        let row = Row::initial();

        assert_eq!(row.mirror_index(0), Some(7));
        assert_eq!(row.mirror_index(7), Some(0));
        assert_eq!(row.mirror_index(3), Some(4));
        assert_eq!(row.mirror_index(9), Some(0));
        assert_eq!(row.mirror_index(15), Some(6));
    }

    #[test]
    fn test_mirror_index_undefined_cases() {
        let row = Row::initial();

        // The formula has no image exactly at the midpoint.
        assert_eq!(row.mirror_index(8), None);
        assert_eq!(row.mirror_index(16), None);
        assert_eq!(row.mirror_index(100), None);
    }

    // === Take legality ===

    #[test]
    fn test_allowed_to_take() {
        assert!(row(&[2, 2]).is_allowed_to_take(0).is_allowed());
        assert!(Row::initial().is_allowed_to_take(0).is_allowed());
        assert!(Row::initial().is_allowed_to_take(1).is_allowed());
        assert!(Row::initial().is_allowed_to_take(15).is_allowed());
    }

    #[test]
    fn test_not_allowed_to_take() {
        assert_eq!(
            row(&[2, 2]).is_allowed_to_take(2),
            TakeVerdict::NotAllowed(TakeViolation::IndexOutOfBound)
        );
        assert_eq!(
            row(&[1, 2]).is_allowed_to_take(0),
            TakeVerdict::NotAllowed(TakeViolation::NotEnoughStones)
        );
        assert_eq!(
            row(&[0, 2]).is_allowed_to_take(0),
            TakeVerdict::NotAllowed(TakeViolation::NoStoneExists)
        );
    }

    #[test]
    fn test_single_stone_boundary() {
        // Exactly 1 stone is NotEnoughStones; 2 or more is allowed.
        assert_eq!(
            row(&[1, 0]).is_allowed_to_take(0).violation(),
            Some(TakeViolation::NotEnoughStones)
        );
        assert!(row(&[2, 0]).is_allowed_to_take(0).is_allowed());
        assert!(row(&[9, 0]).is_allowed_to_take(0).is_allowed());
    }

    // === Sowing ===

    #[test]
    fn test_take_simple() {
        let TakeOutcome { updated, last_seated } = row(&[2, 0, 0, 0, 0, 0]).take(0);

        assert_eq!(updated, row(&[0, 1, 1, 0, 0, 0]));
        assert_eq!(last_seated, 2);
    }

    #[test]
    fn test_take_three_stones() {
        let TakeOutcome { updated, last_seated } = row(&[3, 0, 0, 0, 0, 0]).take(0);

        assert_eq!(updated, row(&[0, 1, 1, 1, 0, 0]));
        assert_eq!(last_seated, 3);
    }

    #[test]
    fn test_take_from_middle_wraps() {
        let TakeOutcome { updated, last_seated } = row(&[0, 0, 0, 3, 0, 0]).take(3);

        assert_eq!(updated, row(&[1, 0, 0, 0, 1, 1]));
        assert_eq!(last_seated, 0);
    }

    #[test]
    fn test_take_with_full_lap_and_remainder() {
        // 7 stones over 6 pits: one full lap plus one step.
        let TakeOutcome { updated, last_seated } = row(&[7, 0, 0, 3, 0, 0]).take(0);

        assert_eq!(updated, row(&[1, 2, 1, 4, 1, 1]));
        assert_eq!(last_seated, 1);
    }

    #[test]
    fn test_take_wraps_at_end() {
        let TakeOutcome { updated, last_seated } = row(&[1, 1, 0, 0, 0, 2]).take(5);

        assert_eq!(updated, row(&[2, 2, 0, 0, 0, 0]));
        assert_eq!(last_seated, 1);
    }

    #[test]
    fn test_take_does_not_reseed_source_on_partial_lap() {
        let TakeOutcome { updated, last_seated } = row(&[0, 0, 2, 0, 0, 0]).take(2);

        assert_eq!(updated, row(&[0, 0, 0, 1, 1, 0]));
        assert_eq!(last_seated, 4);
    }

    #[test]
    fn test_take_exact_laps_returns_to_source() {
        // Stone count an exact multiple of the length: every pit, the
        // source included, gains exactly the lap count.
        let TakeOutcome { updated, last_seated } = row(&[6, 0, 0, 0, 0, 0]).take(0);
        assert_eq!(updated, row(&[1, 1, 1, 1, 1, 1]));
        assert_eq!(last_seated, 0);

        let TakeOutcome { updated, last_seated } = row(&[0, 12, 0, 0, 0, 0]).take(1);
        assert_eq!(updated, row(&[2, 2, 2, 2, 2, 2]));
        assert_eq!(last_seated, 1);
    }

    #[test]
    fn test_take_preserves_row_sum() {
        let before = row(&[7, 1, 0, 3, 5, 2]);
        let sum = before.total_stones();

        for index in 0..before.len() {
            assert_eq!(before.take(index).updated.total_stones(), sum);
        }
    }

    #[test]
    fn test_take_is_pure() {
        let before = row(&[2, 0, 0, 0, 0, 0]);
        let _ = before.take(0);

        assert_eq!(before, row(&[2, 0, 0, 0, 0, 0]));
    }

    // === Steal legality ===

    #[test]
    fn test_possible_to_steal() {
        let home = HomeHalf::Lower;
        let full16 = Row::filled(16, 2).unwrap();
        let full6 = Row::filled(6, 2).unwrap();

        assert!(Row::initial().is_possible_to_steal(0, &full16, home).is_possible());
        assert!(row(&[0, 0, 2, 0, 0, 0]).is_possible_to_steal(2, &full6, home).is_possible());
        assert!(row(&[2, 0, 0, 0, 0, 0])
            .is_possible_to_steal(0, &row(&[0, 0, 2, 0, 0, 0]), home)
            .is_possible());
        assert!(row(&[0, 2, 0, 0, 0, 0])
            .is_possible_to_steal(1, &row(&[0, 2, 0, 0, 0, 0]), home)
            .is_possible());
        assert!(row(&[0, 0, 2, 0, 0, 0])
            .is_possible_to_steal(2, &row(&[2, 0, 0, 0, 0, 0]), home)
            .is_possible());
    }

    #[test]
    fn test_not_possible_to_steal() {
        let home = HomeHalf::Lower;
        let full16 = Row::filled(16, 2).unwrap();
        let full6 = Row::filled(6, 2).unwrap();

        assert_eq!(
            Row::initial().is_possible_to_steal(8, &full16, home).violation(),
            Some(StealViolation::SecondRow)
        );
        assert_eq!(
            row(&[2, 0, 0, 0, 2, 0]).is_possible_to_steal(4, &full6, home).violation(),
            Some(StealViolation::SecondRow)
        );
        assert_eq!(
            row(&[0, 1, 0, 0, 0, 0]).is_possible_to_steal(1, &full6, home).violation(),
            Some(StealViolation::NotEnoughStones)
        );
        assert_eq!(
            row(&[2, 0, 0, 0, 0, 0])
                .is_possible_to_steal(0, &row(&[2, 2, 0, 2, 2, 2]), home)
                .violation(),
            Some(StealViolation::OtherSideHasNoStones)
        );
    }

    #[test]
    fn test_second_row_wins_regardless_of_counts() {
        // Eligibility is checked before any stone count.
        let full = Row::filled(6, 9).unwrap();
        for index in 3..6 {
            assert_eq!(
                full.is_possible_to_steal(index, &full, HomeHalf::Lower).violation(),
                Some(StealViolation::SecondRow)
            );
        }
    }

    #[test]
    fn test_steal_with_upper_home_half() {
        let own = row(&[0, 0, 0, 0, 4, 0]);
        let other = row(&[2, 0, 0, 0, 0, 0]);

        // Upper home: index 4 mirrors to 0.
        assert!(own.is_possible_to_steal(4, &other, HomeHalf::Upper).is_possible());
        let outcome = own.steal(4, &other, HomeHalf::Upper);
        assert_eq!(outcome.updated, row(&[0, 0, 0, 0, 6, 0]));
        assert_eq!(outcome.other_updated, row(&[0, 0, 0, 0, 0, 0]));

        // The midpoint itself has no mirrored pit.
        assert_eq!(
            row(&[0, 0, 0, 4, 0, 0])
                .is_possible_to_steal(3, &other, HomeHalf::Upper)
                .violation(),
            Some(StealViolation::OtherSideHasNoStones)
        );
    }

    // === Steal ===

    #[test]
    fn test_steal_moves_mirrored_stones() {
        let own = row(&[2, 0, 0, 0, 0, 0]);
        let other = row(&[0, 0, 2, 0, 0, 0]);

        let StealOutcome { updated, other_updated } = own.steal(0, &other, HomeHalf::Lower);

        assert_eq!(updated, row(&[4, 0, 0, 0, 0, 0]));
        assert_eq!(other_updated, row(&[0, 0, 0, 0, 0, 0]));
    }

    #[test]
    fn test_steal_noop_when_not_possible() {
        let own = row(&[1, 0, 0, 0, 0, 0]);
        let other = Row::filled(6, 2).unwrap();

        let StealOutcome { updated, other_updated } = own.steal(0, &other, HomeHalf::Lower);

        assert_eq!(updated, own);
        assert_eq!(other_updated, other);
    }

    #[test]
    fn test_steal_preserves_combined_sum() {
        let own = row(&[3, 2, 0, 1, 0, 4]);
        let other = row(&[0, 5, 2, 1, 1, 0]);
        let combined = own.total_stones() + other.total_stones();

        for index in 0..own.len() {
            let StealOutcome { updated, other_updated } = own.steal(index, &other, HomeHalf::Lower);
            assert_eq!(updated.total_stones() + other_updated.total_stones(), combined);
        }
    }

    // === Lose condition ===

    #[test]
    fn test_lose_condition_home_half_empty() {
        assert_eq!(
            row(&[0, 0, 2, 2]).lose_condition(HomeHalf::Lower),
            Some(LoseCondition::HomeHalfEmpty)
        );
    }

    #[test]
    fn test_lose_condition_no_movable_stones() {
        assert_eq!(
            row(&[1, 1, 1, 1]).lose_condition(HomeHalf::Lower),
            Some(LoseCondition::NoMovableStones)
        );
        assert_eq!(
            row(&[1, 0, 0, 1]).lose_condition(HomeHalf::Lower),
            Some(LoseCondition::NoMovableStones)
        );
    }

    #[test]
    fn test_not_in_lose_condition() {
        assert_eq!(Row::initial().lose_condition(HomeHalf::Lower), None);
        assert_eq!(row(&[2, 2, 0, 0]).lose_condition(HomeHalf::Lower), None);
        assert_eq!(row(&[1, 1, 2, 2]).lose_condition(HomeHalf::Lower), None);
    }

    #[test]
    fn test_lose_condition_follows_home_half() {
        let board = row(&[2, 2, 0, 0]);

        assert!(!board.is_in_lose_condition(HomeHalf::Lower));
        assert!(board.is_in_lose_condition(HomeHalf::Upper));
    }

    // === Display ===

    #[test]
    fn test_pit_names() {
        assert_eq!(pit_name(0, 16), "A1");
        assert_eq!(pit_name(7, 16), "A8");
        assert_eq!(pit_name(8, 16), "B8");
        assert_eq!(pit_name(15, 16), "B1");
    }

    #[test]
    fn test_pit_name_is_total_over_any_index() {
        // Out-of-range indices are named in rejection narration, so the
        // function must not underflow.
        assert_eq!(pit_name(16, 16), "#16");
        assert_eq!(pit_name(5, 2), "#5");
        assert_eq!(pit_name(usize::MAX, 16), format!("#{}", usize::MAX));
    }

    #[test]
    fn test_pretty_orientations() {
        let board = row(&[1, 2, 3, 4]);

        assert_eq!(board.pretty(Orientation::HomeAtTop), "A1:1 A2:2\n B1:4 B2:3");
        assert_eq!(board.pretty(Orientation::HomeAtBottom), "B1:4 B2:3\n A1:1 A2:2");
        assert_eq!(format!("{}", board), "A1:1 A2:2\n B1:4 B2:3");
    }

    #[test]
    fn test_serialization() {
        let board = Row::initial();
        let json = serde_json::to_string(&board).unwrap();
        let deserialized: Row = serde_json::from_str(&json).unwrap();
        assert_eq!(board, deserialized);
    }
}
