//! Dims and typed commands - inspect JSON containers

use crate::{DimsArgs, TypedArgs};
use anyhow::Result;
use tracing::{debug, trace};
use valkit_core::{dimensional_count, iterable_specific_type};

use super::parse_json;

pub fn run_dims(args: DimsArgs, _verbose: u8) -> Result<()> {
    trace!(json = %args.json, "inspect::run_dims");

    let value = parse_json(&args.json)?;
    let dims = dimensional_count(&value);
    debug!(type_name = value.type_name(), dims, "Dimensions counted");

    println!("{dims}");
    Ok(())
}

pub fn run_typed(args: TypedArgs, verbose: u8) -> Result<()> {
    trace!(json = %args.json, ty = %args.element_type, "inspect::run_typed");

    let value = parse_json(&args.json)?;
    let ok = iterable_specific_type(&value, args.element_type);
    debug!(dims = dimensional_count(&value), ok, "Element types checked");

    if verbose > 0 && !ok {
        if let Some(items) = value.items() {
            for (i, item) in items.iter().enumerate() {
                if !args.element_type.matches(item) {
                    println!("  [{i}] {item}: {}", item.type_name());
                }
            }
        }
    }
    println!("{ok}");
    Ok(())
}
