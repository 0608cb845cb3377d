use gen_plug::{
    Generator, HookKind, HostRequest, ModelDescriptor, PlugConfig, PlugError, PluginHost,
    ProjectDescriptor, SinkKind, StaticUtilities,
};
use std::io::Write;
use tempfile::NamedTempFile;

struct ProjectsFail;

impl Generator for ProjectsFail {
    fn generate_project(&self, _project: &ProjectDescriptor) -> anyhow::Result<()> {
        Err(anyhow::anyhow!("template directory is empty"))
    }
}

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_host_from_config_file() {
    let file = write_config(
        r#"
[dependencies]
required = ["node"]

[diagnostics]
sink = "stderr"
"#,
    );
    let config = PlugConfig::from_file(file.path()).unwrap();
    assert_eq!(config.diagnostics.sink, SinkKind::Stderr);

    let utils = StaticUtilities::new(["git"]).with_tool("node");
    let host = PluginHost::load(utils, &config).unwrap();
    host.dispatch(&HostRequest::InitProject(ProjectDescriptor::named("demo")))
        .unwrap();
    host.dispatch(&HostRequest::InitModel(ModelDescriptor::named("User")))
        .unwrap();
}

#[test]
fn test_git_is_required_even_when_not_configured() {
    let file = write_config("[dependencies]\nrequired = [\"node\"]\n");
    let config = PlugConfig::from_file(file.path()).unwrap();

    let err = PluginHost::load(StaticUtilities::new(["node"]), &config).unwrap_err();
    assert!(matches!(err, PlugError::MissingDependency { ref tool } if tool == "git"));
}

#[test]
fn test_malformed_config_file() {
    let file = write_config("[dependencies\nrequired = ");
    let err = PlugConfig::from_file(file.path()).unwrap_err();
    assert!(matches!(err, PlugError::TomlError(_)));
    assert!(err.recovery_suggestion().contains("TOML"));
}

#[test]
fn test_run_all_reports_each_request() {
    let host = PluginHost::load_with_generator(
        StaticUtilities::new(["git"]),
        &PlugConfig::default(),
        ProjectsFail,
    )
    .unwrap();

    let outcomes = host.run_all(&[
        HostRequest::InitProject(ProjectDescriptor::named("one")),
        HostRequest::InitModel(ModelDescriptor::named("User")),
        HostRequest::InitProject(ProjectDescriptor::named("two")),
    ]);

    let summary: Vec<(HookKind, bool)> = outcomes
        .iter()
        .map(|o| (o.hook, o.result.is_ok()))
        .collect();
    assert_eq!(
        summary,
        vec![
            (HookKind::Project, false),
            (HookKind::Model, true),
            (HookKind::Project, false),
        ]
    );

    let first = outcomes[0].result.as_ref().unwrap_err();
    assert_eq!(
        first.to_string(),
        "Problem generating the project: template directory is empty"
    );
}
