// SPDX-FileCopyrightText: The mackie-surface authors
// SPDX-License-Identifier: MPL-2.0

//! In-memory surface that records all placement calls.

use std::collections::HashMap;

use thiserror::Error;

use crate::{ElementKind, Rect, Surface};


/// Identifier of a recorded element or variable
///
/// 0-based, consecutive index in the order of the placement calls.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display, derive_more::From,
)]
#[display("#{_0}")]
#[repr(transparent)]
pub struct ElementId(usize);

impl ElementId {
    #[must_use]
    pub const fn value(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlacedElement {
    pub id: ElementId,
    pub kind: ElementKind,
    pub rect: Rect,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedVariable {
    pub id: ElementId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Placement {
    Element(PlacedElement),
    Variable(NamedVariable),
}

impl Placement {
    #[must_use]
    pub const fn id(&self) -> ElementId {
        match self {
            Self::Element(PlacedElement { id, .. }) | Self::Variable(NamedVariable { id, .. }) => {
                *id
            }
        }
    }
}

/// A label field related to another element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Relation {
    pub label: ElementId,
    pub element: ElementId,
}

#[derive(Debug, Error)]
pub enum RecordError {
    #[error("invalid geometry of {kind}: {rect}")]
    InvalidGeometry { kind: ElementKind, rect: Rect },

    #[error("duplicate variable name \"{name}\"")]
    DuplicateVariableName { name: String },

    #[error("unknown element {id}")]
    UnknownElement { id: ElementId },

    #[error("element {id} is not a label field")]
    NotALabelField { id: ElementId },
}

#[derive(Debug, Default)]
pub struct RecordingSurface {
    placements: Vec<Placement>,
    relations: Vec<Relation>,
    variable_ids: HashMap<String, ElementId>,
}

impl RecordingSurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All placements in call order.
    ///
    /// The index of each placement equals the value of its id.
    #[must_use]
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    pub fn elements(&self) -> impl Iterator<Item = &PlacedElement> {
        self.placements.iter().filter_map(|placement| match placement {
            Placement::Element(element) => Some(element),
            Placement::Variable(_) => None,
        })
    }

    pub fn elements_of_kind(&self, kind: ElementKind) -> impl Iterator<Item = &PlacedElement> {
        self.elements().filter(move |element| element.kind == kind)
    }

    pub fn variables(&self) -> impl Iterator<Item = &NamedVariable> {
        self.placements.iter().filter_map(|placement| match placement {
            Placement::Element(_) => None,
            Placement::Variable(variable) => Some(variable),
        })
    }

    #[must_use]
    pub fn element(&self, id: ElementId) -> Option<&PlacedElement> {
        match self.placements.get(id.value())? {
            Placement::Element(element) => Some(element),
            Placement::Variable(_) => None,
        }
    }

    #[must_use]
    pub fn variable(&self, name: &str) -> Option<&NamedVariable> {
        let id = self.variable_ids.get(name)?;
        match self.placements.get(id.value())? {
            Placement::Element(_) => None,
            Placement::Variable(variable) => Some(variable),
        }
    }

    #[must_use]
    pub fn variable_name(&self, id: ElementId) -> Option<&str> {
        match self.placements.get(id.value())? {
            Placement::Element(_) => None,
            Placement::Variable(variable) => Some(&variable.name),
        }
    }

    #[must_use]
    pub fn relations(&self) -> &[Relation] {
        &self.relations
    }

    /// Bounding box of all placed elements.
    ///
    /// Returns `None` if no elements have been placed.
    #[must_use]
    pub fn bounds(&self) -> Option<Rect> {
        self.elements()
            .map(|element| element.rect)
            .reduce(|bounds, rect| bounds.union(&rect))
    }

    fn next_id(&self) -> ElementId {
        ElementId(self.placements.len())
    }

    fn place(&mut self, kind: ElementKind, rect: Rect) -> Result<ElementId, RecordError> {
        if !rect.is_valid() {
            return Err(RecordError::InvalidGeometry { kind, rect });
        }
        let id = self.next_id();
        log::trace!("Placing {kind} {id} at {rect}");
        self.placements
            .push(Placement::Element(PlacedElement { id, kind, rect }));
        Ok(id)
    }
}

impl Surface for RecordingSurface {
    type Handle = ElementId;
    type Error = RecordError;

    fn make_blind_panel(&mut self, rect: Rect) -> Result<Self::Handle, Self::Error> {
        self.place(ElementKind::BlindPanel, rect)
    }

    fn make_button(&mut self, rect: Rect) -> Result<Self::Handle, Self::Error> {
        self.place(ElementKind::Button, rect)
    }

    fn make_push_encoder(&mut self, rect: Rect) -> Result<Self::Handle, Self::Error> {
        self.place(ElementKind::PushEncoder, rect)
    }

    fn make_knob(&mut self, rect: Rect) -> Result<Self::Handle, Self::Error> {
        self.place(ElementKind::Knob, rect)
    }

    fn make_fader(&mut self, rect: Rect) -> Result<Self::Handle, Self::Error> {
        self.place(ElementKind::Fader, rect)
    }

    fn make_label_field(&mut self, rect: Rect) -> Result<Self::Handle, Self::Error> {
        self.place(ElementKind::LabelField, rect)
    }

    fn make_lamp(&mut self, rect: Rect) -> Result<Self::Handle, Self::Error> {
        self.place(ElementKind::Lamp, rect)
    }

    fn relate_to(
        &mut self,
        label: &Self::Handle,
        element: &Self::Handle,
    ) -> Result<(), Self::Error> {
        let label_element = self
            .element(*label)
            .ok_or(RecordError::UnknownElement { id: *label })?;
        if label_element.kind != ElementKind::LabelField {
            return Err(RecordError::NotALabelField { id: *label });
        }
        if self.element(*element).is_none() {
            return Err(RecordError::UnknownElement { id: *element });
        }
        log::trace!("Relating label {label} to {element}");
        self.relations.push(Relation {
            label: *label,
            element: *element,
        });
        Ok(())
    }

    fn make_custom_value_variable(&mut self, name: &str) -> Result<Self::Handle, Self::Error> {
        if self.variable_ids.contains_key(name) {
            return Err(RecordError::DuplicateVariableName {
                name: name.to_owned(),
            });
        }
        let id = self.next_id();
        log::trace!("Creating variable {id} \"{name}\"");
        self.variable_ids.insert(name.to_owned(), id);
        self.placements.push(Placement::Variable(NamedVariable {
            id,
            name: name.to_owned(),
        }));
        Ok(id)
    }
}
