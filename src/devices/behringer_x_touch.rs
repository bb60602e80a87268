// SPDX-FileCopyrightText: The mackie-surface authors
// SPDX-License-Identifier: MPL-2.0

use std::borrow::Cow;

use crate::{DeviceDescriptor, SurfaceDescriptor};

pub const CHANNEL_COUNT: usize = 8;

pub const SURFACE_DESCRIPTOR: &SurfaceDescriptor = &SurfaceDescriptor {
    device: DeviceDescriptor {
        vendor_name: Cow::Borrowed("Behringer"),
        product_name: Cow::Borrowed("X-Touch"),
    },
    channel_count: CHANNEL_COUNT,
};

pub const DEVICE_DESCRIPTOR: &DeviceDescriptor = &SURFACE_DESCRIPTOR.device;
