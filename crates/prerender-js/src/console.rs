//! Console API
//!
//! Component code may call `console.*` freely; by default the calls go
//! nowhere. With forwarding on they become `tracing` events. The bare
//! `log` global always reaches `tracing`, for debugging bundles.

use rquickjs::{Ctx, Function, Object, Value, function::Rest};
use std::fmt::Write;

const LEVELS: [&str; 5] = ["log", "info", "warn", "error", "debug"];

/// Install `console` and `log` into the global object
pub fn install_console(ctx: &Ctx<'_>, forward: bool) -> Result<(), rquickjs::Error> {
    let globals = ctx.globals();

    let console = Object::new(ctx.clone())?;
    for level in LEVELS {
        let func = if forward {
            Function::new(ctx.clone(), move |args: Rest<Value<'_>>| {
                log_with_level(level, args.0);
            })?
        } else {
            Function::new(ctx.clone(), |_args: Rest<Value<'_>>| {})?
        };
        console.set(level, func)?;
    }
    globals.set("console", console)?;

    globals.set("log", Function::new(ctx.clone(), |args: Rest<Value<'_>>| {
        log_with_level("info", args.0);
    })?)?;

    Ok(())
}

/// Log values with a specific level
fn log_with_level(level: &str, values: Vec<Value<'_>>) {
    let mut output = String::new();

    for (i, value) in values.iter().enumerate() {
        if i > 0 {
            output.push(' ');
        }
        format_value(&mut output, value);
    }

    match level {
        "error" => tracing::error!("[JS] {}", output),
        "warn" => tracing::warn!("[JS] {}", output),
        "debug" => tracing::debug!("[JS] {}", output),
        _ => tracing::info!("[JS] {}", output),
    }
}

/// Format a JavaScript value for logging
fn format_value(out: &mut String, value: &Value<'_>) {
    if value.is_undefined() {
        out.push_str("undefined");
    } else if value.is_null() {
        out.push_str("null");
    } else if let Some(b) = value.as_bool() {
        write!(out, "{}", b).ok();
    } else if let Some(n) = value.as_int() {
        write!(out, "{}", n).ok();
    } else if let Some(n) = value.as_float() {
        write!(out, "{}", n).ok();
    } else if let Some(s) = value.as_string() {
        if let Ok(s) = s.to_string() {
            out.push_str(&s);
        }
    } else if value.is_array() {
        out.push_str("[Array]");
    } else if value.is_function() {
        out.push_str("[Function]");
    } else if value.is_object() {
        out.push_str("[Object]");
    } else {
        out.push_str("[unknown]");
    }
}
