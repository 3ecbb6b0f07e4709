//! Rotates a vector around an axis, once with a quaternion and once with a rotation matrix.
//!
//! Usage: `rotate [<x> <y> <z> <degrees> <axis-x> <axis-y> <axis-z>]`
//!
//! Run with `RUST_LOG=dk_math=trace` to see the intermediate quaternions.

use anyhow::{bail, Context};
use dk_math::{angle_from_degrees, vec3, Matrix3, Quaternion};
use log::LevelFilter;

macro_rules! init_logger {
    () => {
        env_logger::Builder::new()
            .filter(Some(env!("CARGO_CRATE_NAME")), LevelFilter::Debug)
            .filter(Some("dk_math"), LevelFilter::Debug)
            .parse_default_env()
            .try_init()
            .ok()
    };
}

fn main() -> anyhow::Result<()> {
    init_logger!();

    let args = std::env::args().skip(1).collect::<Vec<_>>();
    let [x, y, z, degrees, ax, ay, az] = match &*args {
        [] => [0.0, 1.0, 0.0, 90.0, 1.0, 0.0, 0.0],
        [_, _, _, _, _, _, _] => {
            let mut values = [0.0; 7];
            for (value, arg) in values.iter_mut().zip(&args) {
                *value = arg
                    .parse::<f64>()
                    .with_context(|| format!("invalid number '{arg}'"))?;
            }
            values
        }
        _ => bail!("usage: rotate [<x> <y> <z> <degrees> <axis-x> <axis-y> <axis-z>]"),
    };

    let vector = vec3(x, y, z);
    let axis = vec3(ax, ay, az);
    let angle = angle_from_degrees(degrees);

    let by_quaternion = Quaternion::rotate(vector, angle, axis)?;
    let by_matrix = Matrix3::rotation(angle, axis)? * vector;
    log::debug!("rotation matrix: {}", Matrix3::rotation(angle, axis)?);

    println!("rotating {vector} by {degrees}° around {axis}");
    println!("quaternion: {by_quaternion:.6}");
    println!("matrix:     {by_matrix:.6}");
    println!("difference: {:e}", (by_quaternion - by_matrix).magnitude());

    Ok(())
}
