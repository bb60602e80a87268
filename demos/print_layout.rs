// SPDX-FileCopyrightText: The mackie-surface authors
// SPDX-License-Identifier: MPL-2.0

//! Print all elements of a surface layout.
//!
//! Usage: `print-layout [<product name> | <channel count>]`

use mackie_surface::{
    devices::{behringer_x_touch, find_surface_descriptor},
    recording::Placement,
    DeviceDescriptor, RecordingSurface,
};

fn main() {
    pretty_env_logger::init();
    match run() {
        Ok(()) => (),
        Err(err) => println!("Error: {err}"),
    }
}

fn run() -> anyhow::Result<()> {
    let channel_count = match std::env::args().nth(1) {
        None => {
            print_device(behringer_x_touch::DEVICE_DESCRIPTOR);
            behringer_x_touch::CHANNEL_COUNT
        }
        Some(arg) => {
            if let Some(descriptor) = find_surface_descriptor(&arg) {
                print_device(&descriptor.device);
                descriptor.channel_count
            } else {
                arg.parse::<usize>()
                    .map_err(|err| anyhow::anyhow!("invalid channel count \"{arg}\": {err}"))?
            }
        }
    };

    let mut surface = RecordingSurface::new();
    let elements = mackie_surface::build(&mut surface, channel_count)?;

    for placement in surface.placements() {
        match placement {
            Placement::Element(element) => {
                println!(
                    "{id}: {kind} {rect}",
                    id = element.id,
                    kind = element.kind,
                    rect = element.rect,
                );
            }
            Placement::Variable(variable) => {
                println!("{id}: \"{name}\"", id = variable.id, name = variable.name);
            }
        }
    }
    if let Some(bounds) = surface.bounds() {
        println!("Bounds: {bounds}");
    }
    println!(
        "{channel_count} channel(s), {led_button_count} LED button(s), {placement_count} placement(s)",
        channel_count = elements.channels.len(),
        led_button_count = elements.led_buttons().count(),
        placement_count = surface.placements().len(),
    );
    Ok(())
}

fn print_device(device: &DeviceDescriptor) {
    println!(
        "{vendor_name} {product_name}",
        vendor_name = device.vendor_name,
        product_name = device.product_name,
    );
}
