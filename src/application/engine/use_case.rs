//! Engine Use Case
//!
//! Orchestrates the two workflows:
//! - build: resolve apps, then for each app run its build plan
//! - deploy: resolve apps, resolve each config, build descriptors, write the
//!   deployment document once, then hand it to the orchestrator
//!
//! Everything is sequential and fail-fast: the first error aborts the rest
//! of the batch, nothing is retried or rolled back.

use std::sync::Arc;

use tracing::{debug, info};

use crate::application::config_resolver::ConfigResolver;
use crate::domain::entities::{AppEntry, DeploymentDocument, Plan, Step};
use crate::domain::ports::{
    CommandRunner, EngineEvent, EventSink, FileSystem, NoopEventSink, Operation, RemoteExecutor,
};
use crate::domain::services::{AppCatalog, DescriptorBuilder, ExecutionRouter};
use crate::domain::value_objects::{AppSelector, Target};
use crate::error::{NuaError, NuaResult};

use super::options::EngineOptions;
use super::result::{BuildResult, DeployResult};

/// Build/deploy engine - parameterized by its ports so it can run against
/// real processes or recording fakes.
pub struct Engine<R, X, F>
where
    R: CommandRunner,
    X: RemoteExecutor,
    F: FileSystem,
{
    catalog: AppCatalog,
    router: ExecutionRouter,
    runner: R,
    remote: X,
    fs: F,
    events: Arc<dyn EventSink>,
    options: EngineOptions,
}

impl<R, X, F> Engine<R, X, F>
where
    R: CommandRunner,
    X: RemoteExecutor,
    F: FileSystem,
{
    pub fn new(catalog: AppCatalog, router: ExecutionRouter, runner: R, remote: X, fs: F) -> Self {
        Self {
            catalog,
            router,
            runner,
            remote,
            fs,
            events: Arc::new(NoopEventSink),
            options: EngineOptions::default(),
        }
    }

    pub fn with_events(mut self, events: Arc<dyn EventSink>) -> Self {
        self.events = events;
        self
    }

    pub fn with_options(mut self, options: EngineOptions) -> Self {
        self.options = options;
        self
    }

    pub fn catalog(&self) -> &AppCatalog {
        &self.catalog
    }

    pub fn router(&self) -> &ExecutionRouter {
        &self.router
    }

    // ------------------------------------------------------------------
    // Build
    // ------------------------------------------------------------------

    pub fn build_all(&self, target: &Target) -> NuaResult<BuildResult> {
        self.build(target, &AppSelector::All)
    }

    pub fn build_subset(&self, target: &Target, ids: &[String]) -> NuaResult<BuildResult> {
        self.build(target, &AppSelector::Ids(ids.to_vec()))
    }

    /// Build every selected application, in order, stopping at the first failure
    pub fn build(&self, target: &Target, selector: &AppSelector) -> NuaResult<BuildResult> {
        let entries = self.catalog.resolve_subset(selector)?;
        self.emit_started(Operation::Build, target, &entries);

        let total = entries.len();
        let mut result = BuildResult::default();

        for (index, entry) in entries.iter().enumerate() {
            self.events.on_event(EngineEvent::BuildStarted {
                index,
                total,
                id: entry.id().to_string(),
            });

            let plan = self.router.plan_build(target, entry);
            debug!(app = entry.id(), steps = plan.steps().len(), "build planned");
            self.execute_plan(&plan)
                .map_err(|source| NuaError::BuildFailed {
                    id: entry.id().to_string(),
                    source: Box::new(source),
                })?;

            self.events.on_event(EngineEvent::BuildFinished {
                id: entry.id().to_string(),
            });
            result.built.push(entry.id().to_string());
        }

        self.events.on_event(EngineEvent::Completed {
            operation: Operation::Build,
            count: result.built.len(),
        });
        Ok(result)
    }

    // ------------------------------------------------------------------
    // Deploy
    // ------------------------------------------------------------------

    pub fn deploy_all(&self, target: &Target) -> NuaResult<DeployResult> {
        self.deploy(target, &AppSelector::All)
    }

    pub fn deploy_subset(&self, target: &Target, ids: &[String]) -> NuaResult<DeployResult> {
        self.deploy(target, &AppSelector::Ids(ids.to_vec()))
    }

    /// Assemble the deployment document without writing or executing anything
    pub fn render(&self, target: &Target, selector: &AppSelector) -> NuaResult<DeploymentDocument> {
        let entries = self.catalog.resolve_subset(selector)?;
        self.assemble(target, &entries)
    }

    /// Assemble the document, write it to the staging path once, then hand it
    /// to the orchestrator.
    pub fn deploy(&self, target: &Target, selector: &AppSelector) -> NuaResult<DeployResult> {
        let entries = self.catalog.resolve_subset(selector)?;
        self.emit_started(Operation::Deploy, target, &entries);

        // Every descriptor must succeed before anything is written.
        let document = self.assemble(target, &entries)?;
        let path = self.router.toolchain().document_path().to_path_buf();

        let document_path = if self.options.dry_run {
            None
        } else {
            self.fs.write(&path, &document.to_json_pretty()?)?;
            info!(path = %path.display(), sites = document.len(), "deployment document written");
            self.events.on_event(EngineEvent::DocumentWritten {
                path: path.clone(),
                site_count: document.len(),
            });
            Some(path.clone())
        };

        let plan = self.router.plan_deploy(target, &path);
        self.execute_plan(&plan)?;

        self.events.on_event(EngineEvent::Completed {
            operation: Operation::Deploy,
            count: document.len(),
        });

        Ok(DeployResult {
            document,
            document_path,
        })
    }

    /// Build everything selected, then deploy it; never interleaved
    pub fn all(&self, target: &Target, selector: &AppSelector) -> NuaResult<DeployResult> {
        self.build(target, selector)?;
        self.deploy(target, selector)
    }

    // ------------------------------------------------------------------
    // Helpers
    // ------------------------------------------------------------------

    fn assemble(&self, target: &Target, entries: &[AppEntry]) -> NuaResult<DeploymentDocument> {
        let resolver = ConfigResolver::new(&self.fs);
        let mut document = DeploymentDocument::default();

        for entry in entries {
            let config = resolver.resolve(target.apps_root(), entry.id())?;
            let descriptor = DescriptorBuilder::build(entry, &config, target)?;

            self.events.on_event(EngineEvent::DescriptorResolved {
                id: entry.id().to_string(),
                descriptor: descriptor.clone(),
            });
            document.push(descriptor);
        }

        Ok(document)
    }

    /// Run steps in order. A failed transfer stops before the remote run.
    fn execute_plan(&self, plan: &Plan) -> NuaResult<()> {
        for step in plan {
            self.events.on_event(EngineEvent::StepStarted {
                step: step.clone(),
                dry_run: self.options.dry_run,
            });
            if self.options.dry_run {
                continue;
            }

            match step {
                Step::Run(command) => self.runner.run(command)?,
                Step::Transfer(spec) => self.remote.transfer(spec)?,
                Step::RemoteRun { remote, command } => self.remote.execute(remote, command)?,
            }
        }
        Ok(())
    }

    fn emit_started(&self, operation: Operation, target: &Target, entries: &[AppEntry]) {
        self.events.on_event(EngineEvent::Started {
            operation,
            host: target.host().to_string(),
            apps: entries.iter().map(|e| e.id().to_string()).collect(),
        });
    }
}
