//! Year-to-position layout for the timeline canvas.
//!
//! Years are bucketed into sections: sorted, deduplicated years stay in the same
//! section while consecutive gaps are at most [`SECTION_GAP_THRESHOLD`]. Every
//! section gets an equal share of the usable width and spreads its years evenly
//! across that share, which compresses long empty stretches of story time.
//!
//! Positions are percentages of the canvas width, inside
//! `[PADDING_PERCENT, 100 - PADDING_PERCENT]`.

use std::collections::BTreeMap;
use crate::model::Character;

/// Gap in years above which a new section starts.
pub const SECTION_GAP_THRESHOLD: i64 = 100;

/// Horizontal padding on each side of the canvas, in percent.
pub const PADDING_PERCENT: f32 = 5.0;

/// Usable width shared between sections, in percent.
pub const USABLE_PERCENT: f32 = 100.0 - 2.0 * PADDING_PERCENT;

/// A contiguous run of distinct years with no gap above the threshold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelineSection {
    pub start_year: i64,
    pub end_year: i64,
    /// Member years, ascending and distinct
    pub years: Vec<i64>,
}

impl TimelineSection {
    fn starting_at(year: i64) -> Self {
        Self {
            start_year: year,
            end_year: year,
            years: vec![year],
        }
    }

    fn extend(&mut self, year: i64) {
        self.end_year = year;
        self.years.push(year);
    }
}

/// Computed layout: the sections and the percentage position of every year.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimelineLayout {
    sections: Vec<TimelineSection>,
    positions: BTreeMap<i64, f32>,
}

impl TimelineLayout {
    /// Lays out every year referenced by any timeline point of `characters`.
    pub fn compute(characters: &[Character]) -> Self {
        Self::from_years(
            characters
                .iter()
                .flat_map(|c| c.timeline_points.iter().map(|p| p.year)),
        )
    }

    /// Lays out an arbitrary collection of years (duplicates allowed).
    pub fn from_years(years: impl IntoIterator<Item = i64>) -> Self {
        let mut sorted: Vec<i64> = years.into_iter().collect();
        sorted.sort_unstable();
        sorted.dedup();

        let sections = partition_sections(&sorted);
        let positions = assign_positions(&sections);

        Self { sections, positions }
    }

    pub fn sections(&self) -> &[TimelineSection] {
        &self.sections
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Percentage position of a year, or `None` if the year was not laid out.
    pub fn position(&self, year: i64) -> Option<f32> {
        self.positions.get(&year).copied()
    }

    /// All (year, position) pairs in ascending year order.
    pub fn positions(&self) -> impl Iterator<Item = (i64, f32)> + '_ {
        self.positions.iter().map(|(&year, &pos)| (year, pos))
    }

    /// Width of one section's share, in percent.
    pub fn section_width(&self) -> f32 {
        if self.sections.is_empty() {
            USABLE_PERCENT
        } else {
            USABLE_PERCENT / self.sections.len() as f32
        }
    }

    /// Positions of the divider lines drawn between adjacent sections.
    pub fn divider_positions(&self) -> Vec<f32> {
        let width = self.section_width();
        (1..self.sections.len())
            .map(|index| PADDING_PERCENT + width * index as f32)
            .collect()
    }
}

/// Distance from `earlier` to `later`, widened so extreme years cannot overflow.
fn year_gap(earlier: i64, later: i64) -> i128 {
    i128::from(later) - i128::from(earlier)
}

/// Splits sorted, distinct years into sections.
fn partition_sections(sorted_years: &[i64]) -> Vec<TimelineSection> {
    let mut sections = Vec::new();
    let mut iter = sorted_years.iter().copied();

    let Some(first) = iter.next() else {
        return sections;
    };

    let mut current = TimelineSection::starting_at(first);
    for year in iter {
        if year_gap(current.end_year, year) > i128::from(SECTION_GAP_THRESHOLD) {
            sections.push(std::mem::replace(&mut current, TimelineSection::starting_at(year)));
        } else {
            current.extend(year);
        }
    }
    sections.push(current);

    sections
}

fn assign_positions(sections: &[TimelineSection]) -> BTreeMap<i64, f32> {
    let mut positions = BTreeMap::new();
    if sections.is_empty() {
        return positions;
    }

    let section_width = USABLE_PERCENT / sections.len() as f32;

    for (section_index, section) in sections.iter().enumerate() {
        let section_start = PADDING_PERCENT + section_width * section_index as f32;

        if section.years.len() == 1 {
            positions.insert(section.years[0], section_start + section_width / 2.0);
            continue;
        }

        let step = section_width / (section.years.len() - 1).max(1) as f32;
        for (year_index, &year) in section.years.iter().enumerate() {
            positions.insert(year, section_start + step * year_index as f32);
        }
    }

    positions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtin::builtin_characters;

    fn assert_close(a: f32, b: f32) {
        assert!((a - b).abs() < 1e-4, "{} != {}", a, b);
    }

    #[test]
    fn test_empty_input() {
        let layout = TimelineLayout::from_years(Vec::new());
        assert!(layout.is_empty());
        assert_eq!(layout.position(0), None);
        assert!(layout.divider_positions().is_empty());
    }

    #[test]
    fn test_single_section_spread() {
        let layout = TimelineLayout::from_years([5, 5, 20, 90]);
        assert_eq!(layout.sections().len(), 1);
        assert_eq!(layout.sections()[0].years, vec![5, 20, 90]);
        assert_close(layout.position(5).unwrap(), 5.0);
        assert_close(layout.position(20).unwrap(), 50.0);
        assert_close(layout.position(90).unwrap(), 95.0);
    }

    #[test]
    fn test_gap_of_exactly_threshold_stays_together() {
        let layout = TimelineLayout::from_years([0, 100, 201]);
        assert_eq!(layout.sections().len(), 2);
        assert_eq!(layout.sections()[0].years, vec![0, 100]);
        assert_eq!(layout.sections()[1].years, vec![201]);
    }

    #[test]
    fn test_small_gap_joins_large_gaps_split() {
        let layout = TimelineLayout::from_years([0, 1, 2000, 7000]);
        let years: Vec<Vec<i64>> = layout.sections().iter().map(|s| s.years.clone()).collect();
        assert_eq!(years, vec![vec![0, 1], vec![2000], vec![7000]]);

        let width = 90.0 / 3.0;
        assert_close(layout.position(0).unwrap(), 5.0);
        assert_close(layout.position(1).unwrap(), 5.0 + width);
        // single-year sections sit at the centre of their share
        assert_close(layout.position(2000).unwrap(), 5.0 + width * 1.5);
        assert_close(layout.position(7000).unwrap(), 5.0 + width * 2.5);
    }

    #[test]
    fn test_single_year_is_centered() {
        let layout = TimelineLayout::from_years([42]);
        assert_close(layout.position(42).unwrap(), 50.0);
    }

    #[test]
    fn test_negative_years() {
        let layout = TimelineLayout::from_years([-500, -450, 300]);
        assert_eq!(layout.sections().len(), 2);
        assert_eq!(layout.sections()[0].start_year, -500);
        assert_eq!(layout.sections()[0].end_year, -450);
    }

    #[test]
    fn test_extreme_years_split_without_overflow() {
        let layout = TimelineLayout::from_years([i64::MAX, i64::MIN]);
        let bounds: Vec<(i64, i64)> = layout
            .sections()
            .iter()
            .map(|s| (s.start_year, s.end_year))
            .collect();
        assert_eq!(bounds, vec![(i64::MIN, i64::MIN), (i64::MAX, i64::MAX)]);
        assert_close(layout.position(i64::MIN).unwrap(), 27.5);
        assert_close(layout.position(i64::MAX).unwrap(), 72.5);

        // extreme years next to ordinary ones
        let layout = TimelineLayout::from_years([i64::MIN, i64::MIN + 50, 0, 60, i64::MAX]);
        assert_eq!(layout.sections().len(), 3);
        assert_eq!(layout.sections()[0].years, vec![i64::MIN, i64::MIN + 50]);
    }

    #[test]
    fn test_builtin_cast_sections() {
        let layout = TimelineLayout::compute(builtin_characters());
        let bounds: Vec<(i64, i64)> = layout
            .sections()
            .iter()
            .map(|s| (s.start_year, s.end_year))
            .collect();
        assert_eq!(bounds, vec![(0, 90), (2000, 2000), (7000, 7000), (8000, 8000)]);

        let dividers = layout.divider_positions();
        assert_eq!(dividers.len(), 3);
        assert_close(dividers[0], 27.5);
        assert_close(dividers[2], 72.5);
    }

    #[test]
    fn test_partition_and_bounds_properties() {
        // deterministic pseudo-random year sets
        let mut state: u64 = 0x9e3779b97f4a7c15;
        for _ in 0..200 {
            let count = (state % 40) as usize;
            let mut years = Vec::with_capacity(count);
            for _ in 0..count {
                state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
                years.push((state >> 33) as i64 % 5000 - 1000);
            }

            let layout = TimelineLayout::from_years(years.clone());

            let mut expected = years.clone();
            expected.sort_unstable();
            expected.dedup();
            let flattened: Vec<i64> = layout
                .sections()
                .iter()
                .flat_map(|s| s.years.iter().copied())
                .collect();
            assert_eq!(flattened, expected);

            for pair in layout.sections().windows(2) {
                assert!(year_gap(pair[0].end_year, pair[1].start_year) > i128::from(SECTION_GAP_THRESHOLD));
            }
            for section in layout.sections() {
                for pair in section.years.windows(2) {
                    assert!(pair[1] - pair[0] <= SECTION_GAP_THRESHOLD);
                }
            }

            for (_, pos) in layout.positions() {
                assert!((5.0 - 1e-4..=95.0 + 1e-4).contains(&pos), "position {} out of range", pos);
            }
        }
    }
}
