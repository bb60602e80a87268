// SPDX-FileCopyrightText: The mackie-surface authors
// SPDX-License-Identifier: MPL-2.0

//! Grid of miscellaneous buttons in the master section.
//!
//! The 21 buttons are arranged in 3 rows with 7 columns each and are
//! split into functional groups afterwards:
//!
//! | Column   | 0      | 1      | 2    | 3    | 4    | 5    | 6    |
//! |----------|--------|--------|------|------|------|------|------|
//! | Row 0    | Mod    | Mod    | Auto | Auto | Auto | Util | Util |
//! | Row 1    | Mod    | Mod    | Auto | Auto | Auto | Util | Util |
//! | Row 2    | Trans  | Trans  | Trans| Trans| Trans| Trans| Trans|

use strum::{EnumCount, EnumIter, IntoEnumIterator as _};

use crate::LedButton;

pub(super) const BUTTON_COUNT: usize = 21;

const COLUMN_COUNT: usize = 7;

const COLUMN_PITCH: f32 = 2.625;

const ROW_PITCH: f32 = 2.5;

const FIRST_TRANSPORT_INDEX: usize = 14;

/// Extra vertical gap above the transport row
const TRANSPORT_ROW_OFFSET: f32 = 0.5;

const MODIFY_INDICES: &[usize] = &[0, 1, 7, 8];

const AUTOMATION_INDICES: &[usize] = &[2, 3, 4, 9, 10, 11];

const UTILITY_INDICES: &[usize] = &[5, 6, 12, 13];

const TRANSPORT_INDICES: &[usize] = &[14, 15, 16, 17, 18, 19, 20];

/// Position of a button in the grid, relative to the right edge of the channel strips.
pub(super) fn button_position(index: usize) -> (f32, f32) {
    debug_assert!(index < BUTTON_COUNT);
    let column = index % COLUMN_COUNT;
    let row = index / COLUMN_COUNT;
    let x = 6.0 + column as f32 * COLUMN_PITCH;
    let y = 17.0
        + row as f32 * ROW_PITCH
        + if index < FIRST_TRANSPORT_INDEX {
            0.0
        } else {
            TRANSPORT_ROW_OFFSET
        };
    (x, y)
}

/// Functional groups of the miscellaneous button grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, EnumIter, EnumCount)]
pub enum MiscButtonGroup {
    Modify,
    Automation,
    Utility,
    /// Only the buttons of the grid, the wide transport buttons are not included.
    Transport,
}

impl MiscButtonGroup {
    /// Number of buttons in the grid, including the transport row.
    pub const GRID_BUTTON_COUNT: usize = BUTTON_COUNT;

    /// Grid indices of the buttons in this group, in ascending order.
    #[must_use]
    pub const fn indices(self) -> &'static [usize] {
        match self {
            Self::Modify => MODIFY_INDICES,
            Self::Automation => AUTOMATION_INDICES,
            Self::Utility => UTILITY_INDICES,
            Self::Transport => TRANSPORT_INDICES,
        }
    }

    /// Group and position within the group of the button at a grid index.
    #[must_use]
    pub fn locate(index: usize) -> Option<(Self, usize)> {
        Self::iter().find_map(|group| {
            group
                .indices()
                .iter()
                .position(|&grid_index| grid_index == index)
                .map(|position| (group, position))
        })
    }

    pub(super) fn select<H: Clone>(self, buttons: &[LedButton<H>]) -> Vec<LedButton<H>> {
        debug_assert_eq!(BUTTON_COUNT, buttons.len());
        self.indices()
            .iter()
            .map(|&index| buttons[index].clone())
            .collect()
    }
}
