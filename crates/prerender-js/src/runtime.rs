//! JavaScript Runtime
//!
//! Builds the QuickJS runtime/context pair backing one render batch.

use crate::{ContextOptions, JsError};

/// Create a fresh runtime and full-featured context with the configured limits
pub(crate) fn create(options: &ContextOptions) -> Result<(rquickjs::Runtime, rquickjs::Context), JsError> {
    tracing::debug!(
        memory_limit = ?options.memory_limit,
        max_stack_size = ?options.max_stack_size,
        "Creating JavaScript runtime"
    );

    let runtime = rquickjs::Runtime::new().map_err(|e| JsError::Setup(e.to_string()))?;
    if let Some(limit) = options.memory_limit {
        runtime.set_memory_limit(limit);
    }
    if let Some(size) = options.max_stack_size {
        runtime.set_max_stack_size(size);
    }

    let context = rquickjs::Context::full(&runtime).map_err(|e| JsError::Setup(e.to_string()))?;
    Ok((runtime, context))
}
