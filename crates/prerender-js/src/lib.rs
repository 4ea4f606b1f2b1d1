//! Prerender JavaScript Runtime
//!
//! QuickJS-based isolated render context.
//!
//! Features:
//! - Fresh runtime, context and document per render batch
//! - Emulated `document` (element/text/comment/fragment creation,
//!   appendChild, insertBefore, setAttribute, querySelector, head styles)
//! - No-op console, `exports`/`module` for CommonJS-style bundles
//! - Pre-registered mount targets for the instantiation program

mod bindings;
mod console;
mod runtime;

pub use console::install_console;

use std::cell::RefCell;
use std::rc::Rc;

use bindings::RenderState;
use prerender_dom::{Document, NodeId};
use rquickjs::{CatchResultExt, Value, context::EvalOptions};

/// JavaScript error
#[derive(Debug, thiserror::Error)]
pub enum JsError {
    /// Bundle or instantiation program threw
    #[error("{file}: {message}")]
    Execution { file: String, message: String },

    /// The program asked for a component the bundle does not export
    #[error("{file}: component `{name}` is not exported by the bundle")]
    UnresolvedReference { file: String, name: String },

    /// Engine or globals could not be set up
    #[error("failed to set up render context: {0}")]
    Setup(String),
}

impl JsError {
    /// Diagnostic identifier of the source that failed, if any
    pub fn file(&self) -> Option<&str> {
        match self {
            Self::Execution { file, .. } | Self::UnresolvedReference { file, .. } => Some(file),
            Self::Setup(_) => None,
        }
    }
}

/// Per-context knobs
#[derive(Debug, Clone)]
pub struct ContextOptions {
    /// QuickJS heap limit in bytes (None = unlimited)
    pub memory_limit: Option<usize>,
    /// QuickJS stack limit in bytes (None = engine default)
    pub max_stack_size: Option<usize>,
    /// Route `console.*` into tracing instead of dropping it
    pub forward_console: bool,
    /// Tag of the root container and mount targets
    pub container_tag: String,
}

impl Default for ContextOptions {
    fn default() -> Self {
        Self {
            memory_limit: None,
            max_stack_size: None,
            forward_console: false,
            container_tag: "div".to_string(),
        }
    }
}

/// One render batch worth of JavaScript state
pub struct RenderContext {
    _runtime: rquickjs::Runtime,
    context: rquickjs::Context,
    state: Rc<RefCell<RenderState>>,
    file: String,
}

impl RenderContext {
    /// Create a fresh context; `file` names the bundle in error messages
    pub fn new(file: &str, options: &ContextOptions) -> Result<Self, JsError> {
        let (runtime, context) = runtime::create(options)?;
        let document = Document::with_container_tag(&options.container_tag);
        let state = Rc::new(RefCell::new(RenderState::new(document)));

        context.with(|ctx| {
            console::install_console(&ctx, options.forward_console)?;
            bindings::install_document(&ctx, state.clone())?;
            Ok::<_, rquickjs::Error>(())
        })
        .map_err(|e| JsError::Setup(e.to_string()))?;

        tracing::debug!(file, "render context ready");
        Ok(Self {
            _runtime: runtime,
            context,
            state,
            file: file.to_string(),
        })
    }

    /// Diagnostic identifier
    pub fn file(&self) -> &str {
        &self.file
    }

    /// Register an empty mount target the program can reach via `__prerender.target(key)`
    pub fn register_target(&self, key: &str) -> NodeId {
        self.state.borrow_mut().document.register_target(key)
    }

    /// Run the bundle followed by the instantiation program, as one script
    pub fn run(&self, bundle: &str, program: &str) -> Result<(), JsError> {
        let mut source = String::with_capacity(bundle.len() + program.len() + 1);
        source.push_str(bundle);
        source.push('\n');
        source.push_str(program);
        self.exec(&source)
    }

    /// Execute a script in sloppy mode, ignoring its completion value
    pub fn exec(&self, source: &str) -> Result<(), JsError> {
        let result = self.context.with(|ctx| {
            let mut options = EvalOptions::default();
            options.strict = false;
            ctx.eval_with_options::<Value, _>(source, options)
                .catch(&ctx)
                .map(|_| ())
                .map_err(|e| e.to_string())
        });

        result.map_err(|message| {
            if let Some(name) = self.state.borrow_mut().unresolved.take() {
                return JsError::UnresolvedReference {
                    file: self.file.clone(),
                    name,
                };
            }
            tracing::debug!(file = %self.file, %message, "script threw");
            JsError::Execution {
                file: self.file.clone(),
                message,
            }
        })
    }

    /// Read the document without consuming the context
    pub fn with_document<R>(&self, f: impl FnOnce(&Document) -> R) -> R {
        f(&self.state.borrow().document)
    }

    /// Tear the context down and keep the document it built
    pub fn into_document(self) -> Document {
        let document = std::mem::take(&mut self.state.borrow_mut().document);
        document
    }
}
