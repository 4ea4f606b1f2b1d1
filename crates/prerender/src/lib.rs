//! Prerender
//!
//! Renders pre-compiled UI components to static HTML without a browser.
//! The component bundle runs inside a fresh QuickJS context against an
//! emulated `document`; each component instance mounts into its own
//! container, which is then serialized together with any CSS it injected.
//!
//! # Example
//! ```rust,ignore
//! use prerender::{Config, RenderRequest, Renderer};
//!
//! let renderer = Renderer::new(bundle_source, "dist/app.bundle.js", Config::default());
//! let result = renderer.render_one(&RenderRequest::new("Card").with_data(json!({ "title": "Hi" })))?;
//! println!("{}", result.markup);
//! ```

mod config;
mod program;
mod renderer;
mod request;

pub use config::Config;
pub use program::{build_program, instance_key};
pub use renderer::{RenderError, Renderer};
pub use request::{RenderInput, RenderOutput, RenderRequest, RenderResult};

// Re-export sub-crates for advanced usage
pub use prerender_dom as dom;
pub use prerender_js as js;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Render with the default configuration
pub fn render(bundle: &str, file: &str, input: impl Into<RenderInput>) -> Result<RenderOutput, RenderError> {
    Renderer::new(bundle, file, Config::default()).render(input.into())
}
