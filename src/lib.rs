// SPDX-FileCopyrightText: The mackie-surface authors
// SPDX-License-Identifier: MPL-2.0

#![allow(rustdoc::invalid_rust_codeblocks)]
#![doc = include_str!("../README.md")]
#![warn(rust_2018_idioms)]
#![warn(rust_2021_compatibility)]
#![warn(missing_debug_implementations)]
#![warn(unreachable_pub)]
#![warn(unsafe_code)]
#![warn(clippy::pedantic)]
#![warn(clippy::clone_on_ref_ptr)]
#![warn(rustdoc::broken_intra_doc_links)]
// Repetitions of module/type names occur frequently when using many
// modules for keeping the size of the source files handy. Often
// types have the same name as their parent module.
#![allow(clippy::module_name_repetitions)]
// Grid coordinates are derived from small element indices.
#![allow(clippy::cast_precision_loss)]
// The error types returned should be self-explanatory.
#![allow(clippy::missing_errors_doc)]

pub mod devices;
pub use self::devices::{DeviceDescriptor, SurfaceDescriptor};

mod display;
pub use self::display::{Display, DisplayHooks, DisplayLeds, TimeFormat};

mod elements;
pub use self::elements::{
    Channel, ChannelButtons, Control, ControlButtons, Directions, LedButton, LeftRight,
    Navigation, ScribbleStrip, SurfaceElements,
};

mod geometry;
pub use self::geometry::Rect;

pub mod layout;
pub use self::layout::{build, MiscButtonGroup, CHANNEL_WIDTH};

#[cfg(any(test, feature = "recording"))]
pub mod recording;
#[cfg(any(test, feature = "recording"))]
pub use self::recording::RecordingSurface;

mod surface;
pub use self::surface::{ElementKind, Surface};

mod util;
pub use self::util::{generate, try_generate};
