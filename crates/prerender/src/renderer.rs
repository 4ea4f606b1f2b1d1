//! Renderer - main entry point
//!
//! Every call builds a fresh [`RenderContext`], registers one target per
//! request, runs bundle + instantiation program once, then serializes each
//! target and collects its style.

use std::collections::BTreeMap;

use prerender_dom::{Document, DomError, NodeId};
use prerender_js::{JsError, RenderContext};

use crate::program::{build_program, instance_key};
use crate::{Config, RenderInput, RenderOutput, RenderRequest, RenderResult};

/// Renders components out of one bundle
pub struct Renderer {
    bundle: String,
    file: String,
    config: Config,
}

impl Renderer {
    /// `file` identifies the bundle in error messages only
    pub fn new(bundle: impl Into<String>, file: impl Into<String>, config: Config) -> Self {
        Self {
            bundle: bundle.into(),
            file: file.into(),
            config,
        }
    }

    /// Render a single request or a batch; the output has the same shape
    pub fn render(&self, input: RenderInput) -> Result<RenderOutput, RenderError> {
        match input {
            RenderInput::Single(request) => self.render_one(&request).map(RenderOutput::Single),
            RenderInput::Batch(requests) => self.render_batch(&requests).map(RenderOutput::Batch),
        }
    }

    /// Render one component
    pub fn render_one(&self, request: &RenderRequest) -> Result<RenderResult, RenderError> {
        let (mut document, mut mounts) = self.execute(std::slice::from_ref(request))?;
        // one mount per request
        let (key, target) = mounts.swap_remove(0);
        collect(&mut document, request, &key, target)
    }

    /// Render a batch in one context; results keep request order and every
    /// occurrence of a repeated name
    pub fn render_batch(&self, requests: &[RenderRequest]) -> Result<Vec<RenderResult>, RenderError> {
        let (mut document, mounts) = self.execute(requests)?;
        requests
            .iter()
            .zip(mounts)
            .map(|(request, (key, target))| collect(&mut document, request, &key, target))
            .collect()
    }

    /// Run bundle and instantiation program; yields one `(key, target)` per request
    fn execute(&self, requests: &[RenderRequest]) -> Result<(Document, Vec<(String, NodeId)>), RenderError> {
        tracing::info!(file = %self.file, requests = requests.len(), "Rendering batch");

        let context = RenderContext::new(&self.file, &self.config.context_options())?;
        let mounts: Vec<(String, NodeId)> = requests
            .iter()
            .enumerate()
            .map(|(index, request)| {
                let key = instance_key(&request.name, index);
                let target = context.register_target(&key);
                (key, target)
            })
            .collect();
        let keys: Vec<String> = mounts.iter().map(|(key, _)| key.clone()).collect();

        let program = build_program(requests, &keys)?;
        context.run(&self.bundle, &program)?;

        let document = context.into_document();
        tracing::debug!(nodes = document.tree().len(), "batch finished");
        Ok((document, mounts))
    }

    /// Render a batch keyed by component name.
    ///
    /// A name requested more than once keeps only its last result.
    pub fn render_keyed(&self, requests: &[RenderRequest]) -> Result<BTreeMap<String, RenderResult>, RenderError> {
        let results = self.render_batch(requests)?;
        Ok(results
            .into_iter()
            .map(|result| (result.name.clone(), result))
            .collect())
    }

    /// Get renderer configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Diagnostic identifier of the bundle
    pub fn file(&self) -> &str {
        &self.file
    }
}

fn collect(document: &mut Document, request: &RenderRequest, key: &str, target: NodeId) -> Result<RenderResult, RenderError> {
    Ok(RenderResult {
        name: request.name.clone(),
        markup: document.to_html(target)?,
        style: document.styles_mut().take(key),
    })
}

/// Renderer error
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// Bundle or generated program failed, including unknown components
    #[error(transparent)]
    Execution(#[from] JsError),

    /// A target could not be serialized
    #[error(transparent)]
    MalformedTree(#[from] DomError),

    /// Request data could not be encoded into the program
    #[error("failed to encode render request: {0}")]
    Encode(#[from] serde_json::Error),
}

impl RenderError {
    /// Bundle identifier for execution failures
    pub fn file(&self) -> Option<&str> {
        match self {
            Self::Execution(err) => err.file(),
            _ => None,
        }
    }
}
