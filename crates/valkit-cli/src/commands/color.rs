//! Color command - validate a color and print its views

use crate::ColorArgs;
use anyhow::{Context, Result};
use tracing::{debug, info, trace};
use valkit_color::{ChannelRange, Channels, Color, Palette};
use valkit_core::Value;

use super::parse_color_spec;

pub fn run(args: ColorArgs, verbose: u8) -> Result<()> {
    trace!(spec = %args.spec, alpha = args.alpha, "color::run");

    let spec = parse_color_spec(&args.spec)?;
    let color = match (&args.palette, spec) {
        (Some(path), Value::Str(name)) => {
            let palette = Palette::from_file(path)
                .with_context(|| format!("Failed to load palette: {}", path.display()))?;
            info!(palette = %palette.name(), entries = palette.len(), "Palette loaded");
            palette.resolve(&name)?
        }
        (_, spec) => Color::new(spec)?,
    };
    debug!(hex = %color.hex(), "Color validated");

    let rgba_unit = color.rgba(args.alpha, ChannelRange::Unit)?;
    let rgba8 = color.rgba(args.alpha, ChannelRange::Bits8)?;
    let bgra = color.bgra(args.alpha)?;

    if args.json {
        let out = serde_json::json!({
            "input": args.spec,
            "hex": color.hex(),
            "rgb": color.rgb_unit(),
            "rgb8": color.rgb8(),
            "rgba": channels_json(&rgba_unit),
            "rgba8": channels_json(&rgba8),
            "bgra": bgra,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    println!("{}", args.spec);
    println!("  hex:   {}", color.hex());
    println!("  rgb:   {}", color.rgb(ChannelRange::Unit));
    println!("  rgb8:  {}", color.rgb(ChannelRange::Bits8));
    println!("  rgba:  {rgba_unit}");
    println!("  rgba8: {rgba8}");
    println!("  bgra:  {bgra}");
    if verbose > 0 {
        println!("  alpha: {}", args.alpha);
    }
    Ok(())
}

fn channels_json<const N: usize>(channels: &Channels<N>) -> serde_json::Value {
    match channels {
        Channels::Unit(v) => serde_json::json!(v.to_vec()),
        Channels::Bits8(v) => serde_json::json!(v.to_vec()),
    }
}
