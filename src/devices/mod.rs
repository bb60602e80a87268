// SPDX-FileCopyrightText: The mackie-surface authors
// SPDX-License-Identifier: MPL-2.0

use std::borrow::Cow;

use crate::{build, Surface, SurfaceElements};

pub mod behringer_x_touch;

/// Descriptors of supported control surfaces.
pub const SURFACE_DESCRIPTORS: &[&SurfaceDescriptor] =
    &[behringer_x_touch::SURFACE_DESCRIPTOR];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceDescriptor {
    pub vendor_name: Cow<'static, str>,
    pub product_name: Cow<'static, str>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurfaceDescriptor {
    pub device: DeviceDescriptor,

    /// Number of channel strips
    pub channel_count: usize,
}

impl SurfaceDescriptor {
    /// Create the layout of this device.
    ///
    /// See also [`build()`].
    pub fn build_layout<S>(&self, surface: &mut S) -> Result<SurfaceElements<S::Handle>, S::Error>
    where
        S: Surface + ?Sized,
    {
        log::debug!(
            "Building layout of {vendor_name} {product_name}",
            vendor_name = self.device.vendor_name,
            product_name = self.device.product_name,
        );
        build(surface, self.channel_count)
    }
}

/// Find a supported surface by its product name.
///
/// The comparison is case-insensitive.
#[must_use]
pub fn find_surface_descriptor(product_name: &str) -> Option<&'static SurfaceDescriptor> {
    SURFACE_DESCRIPTORS
        .iter()
        .copied()
        .find(|descriptor| descriptor.device.product_name.eq_ignore_ascii_case(product_name))
}
