// SPDX-FileCopyrightText: The mackie-surface authors
// SPDX-License-Identifier: MPL-2.0

//! Element tree of a control surface.
//!
//! All types are generic over the handle type `H` of the [`Surface`](crate::Surface)
//! that created the elements.

use crate::{Display, MiscButtonGroup};

/// A button with an illuminated LED.
///
/// The LED state is stored in a named variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedButton<H> {
    pub button: H,
    pub led_value: H,
}

/// Text fields of a channel's LCD strip
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScribbleStrip<H> {
    pub encoder_parameter_name: H,
    pub track_title: H,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelButtons<H> {
    pub record: LedButton<H>,
    pub solo: LedButton<H>,
    pub mute: LedButton<H>,
    pub select: LedButton<H>,
}

impl<H> ChannelButtons<H> {
    pub fn led_buttons(&self) -> impl Iterator<Item = &LedButton<H>> {
        [&self.record, &self.solo, &self.mute, &self.select].into_iter()
    }
}

/// A vertical channel strip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Channel<H> {
    /// 0-based position from left to right
    pub index: usize,

    pub encoder: H,

    /// Label field related to the encoder
    pub label: H,

    pub encoder_display_mode: H,

    pub scribble_strip: ScribbleStrip<H>,

    pub vu_meter: H,

    pub buttons: ChannelButtons<H>,

    pub fader: H,

    /// Touch sensor of the motorized fader
    pub fader_touched: H,
}

impl<H> Channel<H> {
    pub fn led_buttons(&self) -> impl Iterator<Item = &LedButton<H>> {
        self.buttons.led_buttons()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeftRight<H> {
    pub left: LedButton<H>,
    pub right: LedButton<H>,
}

/// Cursor keys around a center button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directions<H> {
    pub left: LedButton<H>,
    pub right: LedButton<H>,
    pub up: LedButton<H>,
    pub center: LedButton<H>,
    pub down: LedButton<H>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation<H> {
    pub bank: LeftRight<H>,
    pub channel: LeftRight<H>,
    pub directions: Directions<H>,
}

impl<H> Navigation<H> {
    pub fn led_buttons(&self) -> impl Iterator<Item = &LedButton<H>> {
        let Self {
            bank,
            channel,
            directions,
        } = self;
        [
            &bank.left,
            &bank.right,
            &channel.left,
            &channel.right,
            &directions.left,
            &directions.right,
            &directions.up,
            &directions.center,
            &directions.down,
        ]
        .into_iter()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlButtons<H> {
    pub display: LedButton<H>,
    pub time_mode: LedButton<H>,
    pub edit: LedButton<H>,
    pub flip: LedButton<H>,
    pub scrub: LedButton<H>,

    pub encoder_assign: Vec<LedButton<H>>,
    pub number: Vec<LedButton<H>>,
    pub function: Vec<LedButton<H>>,

    pub modify: Vec<LedButton<H>>,
    pub automation: Vec<LedButton<H>>,
    pub utility: Vec<LedButton<H>>,

    /// The last row of the miscellaneous button grid followed by
    /// the wide transport buttons.
    pub transport: Vec<LedButton<H>>,

    pub navigation: Navigation<H>,
}

impl<H> ControlButtons<H> {
    /// The buttons of a group in the miscellaneous grid.
    ///
    /// The wide transport buttons are not included.
    #[must_use]
    pub fn misc_group(&self, group: MiscButtonGroup) -> &[LedButton<H>] {
        match group {
            MiscButtonGroup::Modify => &self.modify,
            MiscButtonGroup::Automation => &self.automation,
            MiscButtonGroup::Utility => &self.utility,
            MiscButtonGroup::Transport => {
                let len = group.indices().len().min(self.transport.len());
                &self.transport[..len]
            }
        }
    }

    /// The buttons of the miscellaneous grid, ordered by grid index.
    pub fn misc_grid_led_buttons(&self) -> impl Iterator<Item = &LedButton<H>> {
        (0..MiscButtonGroup::GRID_BUTTON_COUNT).filter_map(move |index| {
            let (group, position) = MiscButtonGroup::locate(index)?;
            self.misc_group(group).get(position)
        })
    }

    /// All LED buttons outside of the miscellaneous grid, in placement order.
    pub fn dedicated_led_buttons(&self) -> impl Iterator<Item = &LedButton<H>> {
        [
            &self.display,
            &self.time_mode,
            &self.edit,
            &self.flip,
            &self.scrub,
        ]
        .into_iter()
        .chain(&self.encoder_assign)
        .chain(&self.number)
        .chain(&self.function)
        .chain(self.transport.iter().skip(MiscButtonGroup::Transport.indices().len()))
        .chain(self.navigation.led_buttons())
    }

    /// All LED buttons in placement order, each exactly once.
    pub fn led_buttons(&self) -> impl Iterator<Item = &LedButton<H>> {
        self.misc_grid_led_buttons().chain(self.dedicated_led_buttons())
    }
}

/// Controls that are not bound to a channel strip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Control<H> {
    pub main_fader: H,
    pub main_fader_touched: H,

    pub jog_wheel: H,
    /// Pulsed when turning the jog wheel clockwise
    pub jog_right: H,
    /// Pulsed when turning the jog wheel counter-clockwise
    pub jog_left: H,

    pub buttons: ControlButtons<H>,
}

/// All elements of a control surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurfaceElements<H> {
    pub channels: Vec<Channel<H>>,
    pub control: Control<H>,
    pub display: Display<H>,
}

impl<H> SurfaceElements<H> {
    /// All LED buttons in placement order, each exactly once.
    ///
    /// The miscellaneous grid is placed before the channel strips.
    pub fn led_buttons(&self) -> impl Iterator<Item = &LedButton<H>> {
        let buttons = &self.control.buttons;
        buttons
            .misc_grid_led_buttons()
            .chain(self.channels.iter().flat_map(Channel::led_buttons))
            .chain(buttons.dedicated_led_buttons())
    }
}
