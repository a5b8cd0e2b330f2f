//! Prints the profile outline of every built-in device kind at its
//! default parameter values.

use cardiosim::{builtin_catalog, Result};

fn main() -> Result<()> {
    env_logger::init();

    let catalog = builtin_catalog()?;

    for device in catalog.iter() {
        let values = device.default_values();
        let profile = device.profile_points(&values, None, true)?;

        println!(
            "{} ({}): {} points, smoothness {}",
            device.name(),
            device.id(),
            profile.len(),
            device.internal_parameters().interpolation_smoothness
        );
        for point in profile.iter() {
            println!("  ({:8.3}, 0, {:8.3})", point.x, point.z);
        }
    }

    Ok(())
}
