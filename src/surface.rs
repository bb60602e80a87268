// SPDX-FileCopyrightText: The mackie-surface authors
// SPDX-License-Identifier: MPL-2.0

use std::{
    fmt,
    ops::{Deref, DerefMut},
};

use strum::{EnumCount, EnumIter};

use crate::Rect;

/// Kinds of elements that occupy space on a surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, EnumIter, EnumCount)]
pub enum ElementKind {
    /// Non-interactive decoration
    BlindPanel,
    Button,
    PushEncoder,
    Knob,
    Fader,
    LabelField,
    Lamp,
}

/// Host-provided capability for constructing a control surface.
///
/// Each placement returns an opaque handle that identifies the element.
/// Handles are only stored and grouped, never inspected.
pub trait Surface {
    type Handle: Clone + fmt::Debug;
    type Error;

    fn make_blind_panel(&mut self, rect: Rect) -> Result<Self::Handle, Self::Error>;

    fn make_button(&mut self, rect: Rect) -> Result<Self::Handle, Self::Error>;

    fn make_push_encoder(&mut self, rect: Rect) -> Result<Self::Handle, Self::Error>;

    fn make_knob(&mut self, rect: Rect) -> Result<Self::Handle, Self::Error>;

    fn make_fader(&mut self, rect: Rect) -> Result<Self::Handle, Self::Error>;

    fn make_label_field(&mut self, rect: Rect) -> Result<Self::Handle, Self::Error>;

    fn make_lamp(&mut self, rect: Rect) -> Result<Self::Handle, Self::Error>;

    /// Bind a label field to the element it describes.
    fn relate_to(&mut self, label: &Self::Handle, element: &Self::Handle)
        -> Result<(), Self::Error>;

    /// Create a value slot that is not visible on the surface.
    ///
    /// The name must be unique.
    fn make_custom_value_variable(&mut self, name: &str) -> Result<Self::Handle, Self::Error>;
}

impl<D> Surface for D
where
    D: DerefMut,
    <D as Deref>::Target: Surface,
{
    type Handle = <<D as Deref>::Target as Surface>::Handle;
    type Error = <<D as Deref>::Target as Surface>::Error;

    fn make_blind_panel(&mut self, rect: Rect) -> Result<Self::Handle, Self::Error> {
        self.deref_mut().make_blind_panel(rect)
    }

    fn make_button(&mut self, rect: Rect) -> Result<Self::Handle, Self::Error> {
        self.deref_mut().make_button(rect)
    }

    fn make_push_encoder(&mut self, rect: Rect) -> Result<Self::Handle, Self::Error> {
        self.deref_mut().make_push_encoder(rect)
    }

    fn make_knob(&mut self, rect: Rect) -> Result<Self::Handle, Self::Error> {
        self.deref_mut().make_knob(rect)
    }

    fn make_fader(&mut self, rect: Rect) -> Result<Self::Handle, Self::Error> {
        self.deref_mut().make_fader(rect)
    }

    fn make_label_field(&mut self, rect: Rect) -> Result<Self::Handle, Self::Error> {
        self.deref_mut().make_label_field(rect)
    }

    fn make_lamp(&mut self, rect: Rect) -> Result<Self::Handle, Self::Error> {
        self.deref_mut().make_lamp(rect)
    }

    fn relate_to(
        &mut self,
        label: &Self::Handle,
        element: &Self::Handle,
    ) -> Result<(), Self::Error> {
        self.deref_mut().relate_to(label, element)
    }

    fn make_custom_value_variable(&mut self, name: &str) -> Result<Self::Handle, Self::Error> {
        self.deref_mut().make_custom_value_variable(name)
    }
}
