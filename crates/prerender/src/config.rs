//! Renderer Configuration

use prerender_js::ContextOptions;

/// Renderer configuration options
#[derive(Debug, Clone)]
pub struct Config {
    /// Maximum JavaScript heap per batch (bytes), unlimited when None
    pub memory_limit: Option<usize>,

    /// Maximum JavaScript stack per batch (bytes)
    pub max_stack_size: Option<usize>,

    /// Forward `console.*` calls from components to the log
    pub forward_console: bool,

    /// Tag of the containers components mount into
    pub root_tag: String,
}

impl Config {
    pub(crate) fn context_options(&self) -> ContextOptions {
        ContextOptions {
            memory_limit: self.memory_limit,
            max_stack_size: self.max_stack_size,
            forward_console: self.forward_console,
            container_tag: self.root_tag.clone(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            memory_limit: None,
            max_stack_size: None,
            forward_console: false,
            root_tag: "div".to_string(),
        }
    }
}
