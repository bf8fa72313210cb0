//! Range and scale commands

use crate::{RangeArgs, RangeKind, ScaleArgs, ScaleTarget};
use anyhow::Result;
use tracing::{debug, trace};
use valkit_core::{
    scale_to_0_to_1, scale_to_8bit, value_range_0_to_1, value_range_8bit, value_range_16bit,
};

use super::parse_value;

pub fn run_range(args: RangeArgs, _verbose: u8) -> Result<()> {
    trace!(value = %args.value, kind = ?args.kind, "range::run_range");

    let value = parse_value(&args.value);
    let inside = match args.kind {
        RangeKind::Unit => value_range_0_to_1(&value)?,
        RangeKind::Bits8 => value_range_8bit(&value)?,
        RangeKind::Bits16 => value_range_16bit(&value)?,
    };
    debug!(%value, inside, "Range checked");

    println!("{inside}");
    Ok(())
}

pub fn run_scale(args: ScaleArgs, _verbose: u8) -> Result<()> {
    trace!(value = %args.value, to = ?args.to, "range::run_scale");

    let value = parse_value(&args.value);
    debug!(%value, "Scaling");
    match args.to {
        ScaleTarget::Bits8 => match scale_to_8bit(&value)? {
            Some(v) => println!("{v}"),
            None => println!("out of range"),
        },
        ScaleTarget::Unit => match scale_to_0_to_1(&value)? {
            Some(v) => println!("{v}"),
            None => println!("out of range"),
        },
    }
    Ok(())
}
