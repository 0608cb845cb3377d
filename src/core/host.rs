use crate::config::PlugConfig;
use crate::core::plugin::Plug;
use crate::domain::model::{HookKind, ModelDescriptor, ProjectDescriptor};
use crate::domain::ports::{Generator, Utilities};
use crate::utils::error::Result;
use crate::utils::validation::Validate;

#[derive(Debug, Clone)]
pub enum HostRequest {
    InitProject(ProjectDescriptor),
    InitModel(ModelDescriptor),
}

impl HostRequest {
    pub fn hook(&self) -> HookKind {
        match self {
            HostRequest::InitProject(_) => HookKind::Project,
            HostRequest::InitModel(_) => HookKind::Model,
        }
    }
}

#[derive(Debug)]
pub struct RequestOutcome {
    pub hook: HookKind,
    pub result: Result<()>,
}

/// Loads the plugin and calls its hooks in the order the host asks for them.
pub struct PluginHost<U: Utilities> {
    plug: Plug<U>,
}

impl<U: Utilities> std::fmt::Debug for PluginHost<U> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PluginHost").field("plug", &self.plug).finish()
    }
}

impl<U: Utilities> PluginHost<U> {
    pub fn new(plug: Plug<U>) -> Self {
        Self { plug }
    }

    pub fn load(utils: U, config: &PlugConfig) -> Result<Self> {
        config.validate()?;
        let plug = Plug::builder(utils)
            .require_tools(config.required_tools().iter().cloned())
            .boxed_sink(config.diagnostics.sink.build())
            .build()?;
        Ok(Self::new(plug))
    }

    pub fn load_with_generator(
        utils: U,
        config: &PlugConfig,
        generator: impl Generator + 'static,
    ) -> Result<Self> {
        config.validate()?;
        let plug = Plug::builder(utils)
            .require_tools(config.required_tools().iter().cloned())
            .boxed_sink(config.diagnostics.sink.build())
            .generator(generator)
            .build()?;
        Ok(Self::new(plug))
    }

    pub fn dispatch(&self, request: &HostRequest) -> Result<()> {
        tracing::info!("Dispatching {}", request.hook());

        let result = match request {
            HostRequest::InitProject(project) => self.plug.init_project(project),
            HostRequest::InitModel(model) => self.plug.init_model(model),
        };

        match &result {
            Ok(()) => tracing::info!("✅ {} completed", request.hook()),
            Err(e) => tracing::warn!("❌ {} failed: {}", request.hook(), e),
        }
        result
    }

    /// Every request runs, whatever happened to the ones before it.
    pub fn run_all(&self, requests: &[HostRequest]) -> Vec<RequestOutcome> {
        requests
            .iter()
            .map(|request| RequestOutcome {
                hook: request.hook(),
                result: self.dispatch(request),
            })
            .collect()
    }
}
