//! Instantiation program
//!
//! The script appended after the bundle. For every request it selects the
//! style key, then constructs the component against its own target:
//!
//! ```js
//! __prerender.setStyleKey("Card:0");
//! new (__prerender.component("Card"))({
//!     target: __prerender.target("Card:0"),
//!     data: {"title":"Hi"}
//! });
//! ```

use std::fmt::Write;

use crate::RenderRequest;

/// Key of the target and style entry for the request at `index`.
///
/// The index after the last `:` keeps keys unique even when names repeat.
pub fn instance_key(name: &str, index: usize) -> String {
    format!("{name}:{index}")
}

/// Build the program for `requests`, one statement pair each, using `keys`
/// as the per-request instance keys
pub fn build_program(requests: &[RenderRequest], keys: &[String]) -> Result<String, serde_json::Error> {
    let empty = serde_json::Value::Object(Default::default());
    let mut program = String::new();

    for (request, key) in requests.iter().zip(keys) {
        let key = serde_json::to_string(key)?;
        let name = serde_json::to_string(&request.name)?;
        let data = serde_json::to_string(request.data.as_ref().unwrap_or(&empty))?;

        write!(
            program,
            "\n__prerender.setStyleKey({key});\n\
             new (__prerender.component({name}))({{\n    target: __prerender.target({key}),\n    data: {data}\n}});\n"
        )
        .ok();
    }

    Ok(program)
}
