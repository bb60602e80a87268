// SPDX-FileCopyrightText: The mackie-surface authors
// SPDX-License-Identifier: MPL-2.0

use strum::{EnumIter, EnumString};

/// Format of the time shown on the timecode display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, EnumString, EnumIter)]
#[strum(ascii_case_insensitive)]
pub enum TimeFormat {
    #[strum(to_string = "SMPTE")]
    Smpte,
    #[strum(to_string = "Beats")]
    Beats,
}

/// Status lamps next to the timecode display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayLeds<H> {
    pub smpte: H,
    pub beats: H,
    pub solo: H,
}

impl<H> DisplayLeds<H> {
    /// The lamp that indicates the given time format.
    pub const fn time_format_lamp(&self, time_format: TimeFormat) -> &H {
        match time_format {
            TimeFormat::Smpte => &self.smpte,
            TimeFormat::Beats => &self.beats,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Display<H> {
    pub leds: DisplayLeds<H>,
    pub is_value_mode_active: H,
}

/// Callbacks for updating the assignment and timecode displays.
///
/// The context `C` is the host's state of the active device.
///
/// All methods do nothing by default. [`Display`] only provides the
/// default behavior, consumers that drive the displays implement
/// this trait on their own wrapper.
pub trait DisplayHooks<C: ?Sized> {
    /// Show the two-character assignment text.
    fn set_assignment(&self, _context: &mut C, _assignment: &str) {}

    /// Show the current time.
    ///
    /// The time format is the host's name of the format,
    /// see [`TimeFormat`] for parsing.
    fn on_time_updated(&self, _context: &mut C, _time: &str, _time_format: &str) {}
}

impl<H, C: ?Sized> DisplayHooks<C> for Display<H> {}
