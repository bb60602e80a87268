// SPDX-FileCopyrightText: The mackie-surface authors
// SPDX-License-Identifier: MPL-2.0

//! Panel layout of a Mackie Control style mixing surface.
//!
//! Channel strips are arranged from left to right, followed by the
//! master section with the timecode display, the button blocks,
//! and the jog wheel. All coordinates are measured in grid units.

use crate::{
    try_generate, Channel, ChannelButtons, Control, ControlButtons, Directions, Display,
    DisplayLeds, LedButton, LeftRight, Navigation, Rect, ScribbleStrip, Surface, SurfaceElements,
};

mod misc;
pub use self::misc::MiscButtonGroup;


/// Horizontal pitch of the channel strips
pub const CHANNEL_WIDTH: f32 = 5.0;

/// Width of the master section right of the channel strips
pub const MASTER_SECTION_WIDTH: f32 = 26.0;

pub const PANEL_HEIGHT: f32 = 40.0;

pub const ENCODER_ASSIGN_BUTTON_COUNT: usize = 6;

pub const NUMBER_BUTTON_COUNT: usize = 8;

pub const FUNCTION_BUTTON_COUNT: usize = 8;

pub const WIDE_TRANSPORT_BUTTON_COUNT: usize = 5;

/// Names of LED variables are numbered consecutively, starting at 1.
pub const LED_BUTTON_VARIABLE_PREFIX: &str = "LedButton";

const BUTTON_ROW_PITCH: f32 = 2.25;

const WIDE_TRANSPORT_BUTTON_PITCH: f32 = 3.56;

/// Create all elements of a surface with `channel_count` channel strips.
///
/// Each element is placed exactly once in a fixed order. The first
/// error reported by the surface aborts the build.
pub fn build<S>(
    surface: &mut S,
    channel_count: usize,
) -> Result<SurfaceElements<S::Handle>, S::Error>
where
    S: Surface + ?Sized,
{
    log::debug!("Building surface layout with {channel_count} channel(s)");
    let mut builder = Builder::new(surface, channel_count);
    let elements = builder.build()?;
    log::debug!(
        "Built surface layout with {channel_count} channel(s) and {led_button_count} LED button(s)",
        led_button_count = builder.led_button_counter,
    );
    Ok(elements)
}

#[must_use]
pub fn channel_x_position(channel_index: usize) -> f32 {
    channel_index as f32 * CHANNEL_WIDTH
}

#[must_use]
pub fn channel_variable_name(base_name: &str, channel_index: usize) -> String {
    format!("{base_name}{channel_number}", channel_number = channel_index + 1)
}

struct Builder<'s, S: ?Sized> {
    surface: &'s mut S,
    channel_count: usize,
    channels_width: f32,
    led_button_counter: usize,
}

impl<'s, S> Builder<'s, S>
where
    S: Surface + ?Sized,
{
    fn new(surface: &'s mut S, channel_count: usize) -> Self {
        Self {
            surface,
            channel_count,
            channels_width: channel_x_position(channel_count),
            led_button_counter: 0,
        }
    }

    fn make_led_button(&mut self, rect: Rect) -> Result<LedButton<S::Handle>, S::Error> {
        let button = self.surface.make_button(rect)?;
        self.led_button_counter += 1;
        let led_value = self.surface.make_custom_value_variable(&format!(
            "{LED_BUTTON_VARIABLE_PREFIX}{counter}",
            counter = self.led_button_counter
        ))?;
        Ok(LedButton { button, led_value })
    }

    fn make_square_button(&mut self, x: f32, y: f32) -> Result<LedButton<S::Handle>, S::Error> {
        self.make_led_button(Rect::new(x + 0.25, y, 1.5, 1.5))
    }

    fn build(&mut self) -> Result<SurfaceElements<S::Handle>, S::Error> {
        let cw = self.channels_width;

        // Frame
        self.surface.make_blind_panel(Rect::new(
            0.0,
            0.0,
            cw + MASTER_SECTION_WIDTH,
            PANEL_HEIGHT,
        ))?;
        // Timecode display
        self.surface
            .make_blind_panel(Rect::new(cw + 1.0, 6.0, 23.25, 4.0))?;

        let misc_buttons = try_generate(misc::BUTTON_COUNT, |index| {
            let (x, y) = misc::button_position(index);
            self.make_square_button(cw + x, y)
        })?;

        let channel_count = self.channel_count;
        let channels = try_generate(channel_count, |index| self.make_channel(index))?;
        let control = self.make_control(&misc_buttons)?;
        let display = self.make_display()?;

        Ok(SurfaceElements {
            channels,
            control,
            display,
        })
    }

    fn make_channel(&mut self, index: usize) -> Result<Channel<S::Handle>, S::Error> {
        let x = channel_x_position(index);

        let encoder = self.surface.make_push_encoder(Rect::new(x + 1.0, 3.0, 4.0, 4.0))?;
        let label = self.surface.make_label_field(Rect::new(x + 1.0, 7.0, 4.0, 2.0))?;
        self.surface.relate_to(&label, &encoder)?;

        let encoder_display_mode = self.make_channel_variable("encoderDisplayMode", index)?;
        let scribble_strip = ScribbleStrip {
            encoder_parameter_name: self
                .make_channel_variable("scribbleStripEncoderParameterName", index)?,
            track_title: self.make_channel_variable("scribbleStriptrackTitle", index)?,
        };
        let vu_meter = self.make_channel_variable("vuMeter", index)?;

        let buttons = ChannelButtons {
            record: self.make_square_button(x + 2.0, 10.0)?,
            solo: self.make_square_button(x + 2.0, 12.0)?,
            mute: self.make_square_button(x + 2.0, 14.0)?,
            select: self.make_led_button(Rect::new(x + 2.0, 16.0, 2.0, 1.5))?,
        };

        let fader = self.surface.make_fader(Rect::new(x + 2.0, 20.0, 2.0, 16.0))?;
        let fader_touched = self.make_channel_variable("faderTouched", index)?;

        Ok(Channel {
            index,
            encoder,
            label,
            encoder_display_mode,
            scribble_strip,
            vu_meter,
            buttons,
            fader,
            fader_touched,
        })
    }

    fn make_channel_variable(
        &mut self,
        base_name: &str,
        channel_index: usize,
    ) -> Result<S::Handle, S::Error> {
        self.surface
            .make_custom_value_variable(&channel_variable_name(base_name, channel_index))
    }

    fn make_control(
        &mut self,
        misc_buttons: &[LedButton<S::Handle>],
    ) -> Result<Control<S::Handle>, S::Error> {
        let cw = self.channels_width;

        let main_fader = self.surface.make_fader(Rect::new(cw + 2.0, 20.0, 2.0, 16.0))?;
        let main_fader_touched = self.surface.make_custom_value_variable("mainFaderTouched")?;

        let jog_wheel = self.surface.make_knob(Rect::new(cw + 13.0, 29.25, 8.5, 8.5))?;
        let jog_right = self.surface.make_custom_value_variable("jogRight")?;
        let jog_left = self.surface.make_custom_value_variable("jogLeft")?;

        let display = self.make_square_button(cw + 2.0, 7.25)?;
        let time_mode = self.make_square_button(cw + 21.75, 7.25)?;
        let edit = self.make_led_button(Rect::new(cw + 2.0, 10.5, 2.0, 1.5))?;
        let flip = self.make_led_button(Rect::new(cw + 2.0, 16.0, 2.0, 1.5))?;
        let scrub = self.make_square_button(cw + 21.75, 28.0)?;

        let encoder_assign = try_generate(ENCODER_ASSIGN_BUTTON_COUNT, |index| {
            self.make_square_button(cw + 2.0 + index as f32 * BUTTON_ROW_PITCH, 3.5)
        })?;
        let number = try_generate(NUMBER_BUTTON_COUNT, |index| {
            self.make_square_button(cw + 6.0 + index as f32 * BUTTON_ROW_PITCH, 10.5)
        })?;
        let function = try_generate(FUNCTION_BUTTON_COUNT, |index| {
            self.make_square_button(cw + 6.0 + index as f32 * BUTTON_ROW_PITCH, 14.0)
        })?;

        let mut transport = MiscButtonGroup::Transport.select(misc_buttons);
        transport.extend(try_generate(WIDE_TRANSPORT_BUTTON_COUNT, |index| {
            self.make_led_button(Rect::new(
                cw + 6.25 + index as f32 * WIDE_TRANSPORT_BUTTON_PITCH,
                25.0,
                3.0,
                2.0,
            ))
        })?);

        let navigation = self.make_navigation()?;

        let buttons = ControlButtons {
            display,
            time_mode,
            edit,
            flip,
            scrub,
            encoder_assign,
            number,
            function,
            modify: MiscButtonGroup::Modify.select(misc_buttons),
            automation: MiscButtonGroup::Automation.select(misc_buttons),
            utility: MiscButtonGroup::Utility.select(misc_buttons),
            transport,
            navigation,
        };

        Ok(Control {
            main_fader,
            main_fader_touched,
            jog_wheel,
            jog_right,
            jog_left,
            buttons,
        })
    }

    fn make_navigation(&mut self) -> Result<Navigation<S::Handle>, S::Error> {
        let cw = self.channels_width;
        let bank = LeftRight {
            left: self.make_square_button(cw + 6.75, 28.0)?,
            right: self.make_square_button(cw + 9.25, 28.0)?,
        };
        let channel = LeftRight {
            left: self.make_square_button(cw + 6.75, 30.0)?,
            right: self.make_square_button(cw + 9.25, 30.0)?,
        };
        let directions = Directions {
            left: self.make_square_button(cw + 6.25, 34.0)?,
            right: self.make_square_button(cw + 9.75, 34.0)?,
            up: self.make_square_button(cw + 8.0, 32.25)?,
            center: self.make_square_button(cw + 8.0, 34.0)?,
            down: self.make_square_button(cw + 8.0, 35.75)?,
        };
        Ok(Navigation {
            bank,
            channel,
            directions,
        })
    }

    fn make_display(&mut self) -> Result<Display<S::Handle>, S::Error> {
        let cw = self.channels_width;
        let leds = DisplayLeds {
            smpte: self.surface.make_lamp(Rect::new(cw + 21.25, 6.5, 0.75, 0.5))?,
            beats: self.surface.make_lamp(Rect::new(cw + 21.25, 9.0, 0.75, 0.5))?,
            solo: self.surface.make_lamp(Rect::new(cw + 7.75, 7.75, 0.75, 0.5))?,
        };
        let is_value_mode_active = self
            .surface
            .make_custom_value_variable("displayIsValueModeActive")?;
        Ok(Display {
            leds,
            is_value_mode_active,
        })
    }
}
