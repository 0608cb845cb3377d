//! The plugin adapter the generator host loads.
//!
//! A `Plug` only exists once every required tool has been found, so holding one
//! means the adapter is ready. Both hooks borrow it immutably and keep no state
//! between calls.

use crate::adapters::sink::TracingSink;
use crate::domain::model::{Diagnostic, HookKind, ModelDescriptor, ProjectDescriptor};
use crate::domain::ports::{DiagnosticSink, Generator, Utilities};
use crate::utils::error::{PlugError, Result};

/// Tools every plugin instance needs, checked in this order.
pub const REQUIRED_TOOLS: &[&str] = &["git"];

/// Generation work that does nothing and always succeeds.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopGenerator;

impl Generator for NoopGenerator {}

pub struct Plug<U: Utilities> {
    utils: U,
    generator: Box<dyn Generator>,
    sink: Box<dyn DiagnosticSink>,
}

impl<U: Utilities> std::fmt::Debug for Plug<U> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Plug").finish_non_exhaustive()
    }
}

impl<U: Utilities> Plug<U> {
    /// Takes ownership of the host's utilities handle and checks for `git`.
    pub fn new(utils: U) -> Result<Self> {
        Self::builder(utils).build()
    }

    pub fn builder(utils: U) -> PlugBuilder<U> {
        PlugBuilder {
            utils,
            generator: None,
            sink: None,
            extra_tools: Vec::new(),
        }
    }

    pub fn utils(&self) -> &U {
        &self.utils
    }

    pub fn init_project(&self, project: &ProjectDescriptor) -> Result<()> {
        tracing::debug!(
            "init_project called for {}",
            project.name().unwrap_or("<unnamed>")
        );

        self.generator
            .generate_project(project)
            .map_err(|source| {
                self.report(HookKind::Project, &source);
                PlugError::ProjectGenerationFailed { source }
            })
    }

    pub fn init_model(&self, model: &ModelDescriptor) -> Result<()> {
        tracing::debug!(
            "init_model called for {}",
            model.name().unwrap_or("<unnamed>")
        );

        self.generator.generate_model(model).map_err(|source| {
            self.report(HookKind::Model, &source);
            PlugError::ModelGenerationFailed { source }
        })
    }

    fn report(&self, hook: HookKind, err: &anyhow::Error) {
        self.sink.emit(&Diagnostic::from_error(hook, err));
    }
}

pub struct PlugBuilder<U: Utilities> {
    utils: U,
    generator: Option<Box<dyn Generator>>,
    sink: Option<Box<dyn DiagnosticSink>>,
    extra_tools: Vec<String>,
}

impl<U: Utilities> PlugBuilder<U> {
    pub fn generator(mut self, generator: impl Generator + 'static) -> Self {
        self.generator = Some(Box::new(generator));
        self
    }

    pub fn sink(mut self, sink: impl DiagnosticSink + 'static) -> Self {
        self.sink = Some(Box::new(sink));
        self
    }

    pub fn boxed_sink(mut self, sink: Box<dyn DiagnosticSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Additional tools to require on top of [`REQUIRED_TOOLS`].
    pub fn require_tools<I, S>(mut self, tools: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extra_tools.extend(tools.into_iter().map(Into::into));
        self
    }

    /// Runs the dependency checks. Stops at the first missing tool.
    pub fn build(self) -> Result<Plug<U>> {
        let mut tools: Vec<&str> = REQUIRED_TOOLS.to_vec();
        for tool in &self.extra_tools {
            if !tools.contains(&tool.as_str()) {
                tools.push(tool);
            }
        }

        for tool in tools {
            tracing::debug!("Checking dependency '{}'", tool);
            self.utils.test_dependency(tool)?;
        }

        tracing::info!("Plugin ready");

        Ok(Plug {
            utils: self.utils,
            generator: self.generator.unwrap_or_else(|| Box::new(NoopGenerator)),
            sink: self.sink.unwrap_or_else(|| Box::new(TracingSink)),
        })
    }
}
