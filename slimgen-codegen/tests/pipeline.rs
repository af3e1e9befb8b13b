//! End-to-end runs of the pipeline against a scripted generator and build.

use std::{
    cell::RefCell,
    fs, io,
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};

use slimgen_codegen::{
    Error,
    pipeline::{Pipeline, Plugin, RunContext, RunOptions, State},
};
use slimgen_core::{ToolCommand, ToolOutput, ToolRunner};
use slimgen_manifest::{Manifest, PathAllowlist, SpecificationSource};
use tempfile::TempDir;

const SPEC: &str = r#"
openapi: 3.0.4
info:
  title: Mail
  version: 1.0.0
paths:
  /me/messages:
    get: {}
    post: {}
  /me/messages/{message-id}:
    get: {}
  /users/{user-id}:
    get: {}
  /groups:
    get: {}
"#;

/// What the scripted generator does when run.
#[derive(Clone, Copy)]
enum Generator {
    /// Writes the root client plus request builders and models.
    Populated,
    /// Writes only the root client, as when nothing matched.
    RootOnly,
    /// Exits non-zero.
    Fails,
}

struct FakeTools {
    generator: Generator,
    build_fails: bool,
    ran: RefCell<Vec<ToolCommand>>,
}

impl FakeTools {
    fn new(generator: Generator) -> Self {
        Self {
            generator,
            build_fails: false,
            ran: RefCell::new(Vec::new()),
        }
    }

    fn ran(&self, subcommand: &str) -> bool {
        self.ran
            .borrow()
            .iter()
            .any(|c| c.args.first().is_some_and(|a| a == subcommand))
    }

    fn generate(&self, command: &ToolCommand) -> io::Result<ToolOutput> {
        let out = PathBuf::from(command.arg_value("--output").expect("--output"));
        let class = command.arg_value("--class-name").expect("--class-name");
        let class = class.to_string_lossy();

        match self.generator {
            Generator::Fails => {
                return Ok(ToolOutput::failure("error: the document contains 3 errors"));
            }
            Generator::RootOnly => {
                fs::write(out.join(format!("{class}.cs")), "// root")?;
            }
            Generator::Populated => {
                fs::create_dir_all(out.join("Me/Messages"))?;
                fs::create_dir_all(out.join("Models"))?;
                fs::write(out.join(format!("{class}.cs")), "// root")?;
                fs::write(out.join("Me/MeRequestBuilder.cs"), "// me")?;
                fs::write(out.join("Me/Messages/MessagesRequestBuilder.cs"), "// messages")?;
                fs::write(out.join("Models/Message.cs"), "// model")?;
                fs::write(out.join("kiota-lock.json"), "{}")?;
            }
        }
        Ok(ToolOutput::success("Generation completed successfully"))
    }

    fn build(&self, command: &ToolCommand) -> io::Result<ToolOutput> {
        if self.build_fails {
            return Ok(ToolOutput::failure("error CS0246: type 'Foo' not found"));
        }
        let project = PathBuf::from(&command.args[1]);
        let bin = project.parent().unwrap().join("bin/Release/netstandard2.0");
        fs::create_dir_all(&bin)?;
        fs::write(bin.join("Contoso.Mail.dll"), vec![0u8; 128])?;
        Ok(ToolOutput::success("Build succeeded."))
    }
}

impl ToolRunner for FakeTools {
    fn locate(&self, program: &str) -> Option<PathBuf> {
        Some(PathBuf::from("/opt/fake").join(program))
    }

    fn run(&self, command: &ToolCommand) -> io::Result<ToolOutput> {
        self.ran.borrow_mut().push(command.clone());
        match command.args.first().and_then(|a| a.to_str()) {
            Some("generate") => self.generate(command),
            Some("build") => self.build(command),
            other => panic!("unexpected command {other:?}"),
        }
    }
}

struct Workspace {
    temp: TempDir,
}

impl Workspace {
    fn new() -> Self {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("openapi.yaml"), SPEC).unwrap();
        Self { temp }
    }

    fn out(&self) -> PathBuf {
        self.temp.path().join("generated")
    }

    fn manifest(&self, include: &[&str]) -> Manifest {
        let mut manifest = Manifest::default();
        manifest.spec.source = SpecificationSource::Path(self.temp.path().join("openapi.yaml"));
        manifest.spec.include = PathAllowlist::parse(include.iter().copied()).unwrap();
        manifest.client.class_name = "MailClient".to_string();
        manifest.client.namespace = "Contoso.Mail".to_string();
        manifest.package.id = "Contoso.Mail.Client".to_string();
        manifest
    }

    fn context(&self, options: RunOptions) -> RunContext {
        RunContext::from_manifest(self.manifest(&["/me/**"]), Some(&self.out()), options)
    }
}

fn skip_build() -> RunOptions {
    RunOptions {
        skip_build: true,
        ..Default::default()
    }
}

fn tree(root: &Path) -> Vec<(PathBuf, Vec<u8>)> {
    let mut entries: Vec<_> = walkdir::WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .map(|e| e.unwrap())
        .filter(|e| e.file_type().is_file())
        .map(|e| {
            let rel = e.path().strip_prefix(root).unwrap().to_path_buf();
            (rel, fs::read(e.path()).unwrap())
        })
        .collect();
    entries.sort();
    entries
}

#[test]
fn full_run_writes_artifacts_and_builds() {
    let ws = Workspace::new();
    let tools = FakeTools::new(Generator::Populated);
    let mut ctx = ws.context(RunOptions::default());

    Pipeline::new().run(&mut ctx, &tools).unwrap();

    assert_eq!(ctx.state, State::Done);
    assert_eq!(ctx.state.exit_code(), 0);

    let scope = ctx.scope.as_ref().unwrap();
    assert_eq!(scope.len(), 3);
    assert_eq!(scope.total(), 5);

    let descriptor = ws.out().join("Contoso.Mail.Client.csproj");
    let shim = ws.out().join("MailClient.Compat.cs");
    assert_eq!(ctx.descriptor.as_deref(), Some(descriptor.as_path()));
    assert_eq!(ctx.shim.as_deref(), Some(shim.as_path()));
    assert!(fs::read_to_string(&shim).unwrap().contains("namespace Contoso.Mail"));

    let artifact = ctx.artifact.as_ref().unwrap();
    assert_eq!(artifact.size, 128);
    assert!(artifact.path.ends_with("bin/Release/netstandard2.0/Contoso.Mail.dll"));

    let generate = &tools.ran.borrow()[0];
    assert_eq!(generate.arg_value("--include-path").unwrap(), "/me/**");
}

#[test]
fn generator_failure_writes_no_artifacts() {
    let ws = Workspace::new();
    let tools = FakeTools::new(Generator::Fails);
    let mut ctx = ws.context(RunOptions::default());

    let err = Pipeline::new().run(&mut ctx, &tools).unwrap_err();

    match *err {
        Error::GenerationFailure { ref diagnostics } => {
            assert_eq!(diagnostics, "error: the document contains 3 errors")
        }
        ref other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(ctx.state, State::Failed);
    assert_eq!(ctx.state.exit_code(), 1);
    assert!(!ws.out().join("Contoso.Mail.Client.csproj").exists());
    assert!(!ws.out().join("MailClient.Compat.cs").exists());
    assert!(!tools.ran("build"));
}

#[test]
fn clean_empties_output_before_ensuring_it() {
    struct Probe {
        seen: Arc<Mutex<Option<Vec<PathBuf>>>>,
    }

    impl Plugin for Probe {
        fn name(&self) -> &'static str {
            "probe"
        }

        fn on_before_stage(
            &self,
            stage: State,
            ctx: &mut RunContext,
        ) -> slimgen_codegen::Result<()> {
            if stage == State::EnsureOutputDir {
                let entries: Vec<PathBuf> = fs::read_dir(ctx.output_dir())
                    .map(|rd| rd.map(|e| e.unwrap().path()).collect())
                    .unwrap_or_default();
                *self.seen.lock().unwrap() = Some(entries);
            }
            Ok(())
        }
    }

    let ws = Workspace::new();
    fs::create_dir_all(ws.out()).unwrap();
    fs::write(ws.out().join("notes.txt"), "keep me?").unwrap();

    let seen = Arc::new(Mutex::new(None));
    let mut ctx = ws.context(RunOptions {
        clean: true,
        ..skip_build()
    });

    Pipeline::new()
        .plugin(Probe { seen: seen.clone() })
        .run(&mut ctx, &FakeTools::new(Generator::Populated))
        .unwrap();

    assert_eq!(seen.lock().unwrap().as_deref(), Some(&[][..]));
    assert!(!ws.out().join("notes.txt").exists());
}

#[test]
fn clean_runs_produce_identical_trees() {
    let ws = Workspace::new();
    let options = RunOptions {
        clean: true,
        ..skip_build()
    };

    let mut first = ws.context(options);
    Pipeline::new()
        .run(&mut first, &FakeTools::new(Generator::Populated))
        .unwrap();
    let before = tree(&ws.out());

    let mut second = ws.context(options);
    Pipeline::new()
        .run(&mut second, &FakeTools::new(Generator::Populated))
        .unwrap();

    assert_eq!(before, tree(&ws.out()));
    assert_eq!(before.len(), 7);
}

#[test]
fn existing_empty_output_is_accepted() {
    let ws = Workspace::new();
    fs::create_dir_all(ws.out()).unwrap();

    let mut ctx = ws.context(skip_build());
    Pipeline::new()
        .run(&mut ctx, &FakeTools::new(Generator::Populated))
        .unwrap();

    assert_eq!(ctx.state, State::Done);
    assert!(ctx.was_skipped(State::CleanIfRequested));
}

#[test]
fn non_empty_output_requires_clean_or_merge() {
    let ws = Workspace::new();
    fs::create_dir_all(ws.out()).unwrap();
    fs::write(ws.out().join("MailClient.cs"), "// old").unwrap();

    let tools = FakeTools::new(Generator::Populated);
    let mut ctx = ws.context(skip_build());
    let err = Pipeline::new().run(&mut ctx, &tools).unwrap_err();

    assert!(matches!(*err, Error::OutputNotEmpty { .. }));
    assert_eq!(ctx.state, State::Failed);
    assert!(!tools.ran("generate"));

    let mut merged = ws.context(RunOptions {
        merge: true,
        ..skip_build()
    });
    Pipeline::new().run(&mut merged, &tools).unwrap();
    assert_eq!(merged.state, State::Done);
}

#[test]
fn allowlist_matching_nothing_fails_before_generation() {
    let ws = Workspace::new();
    let tools = FakeTools::new(Generator::Populated);
    let manifest = ws.manifest(&["/drives/**", "/sites/*"]);
    let mut ctx = RunContext::from_manifest(manifest, Some(&ws.out()), skip_build());

    let err = Pipeline::new().run(&mut ctx, &tools).unwrap_err();

    match *err {
        Error::EmptyScope { ref patterns } => assert_eq!(patterns, "/drives/**, /sites/*"),
        ref other => panic!("unexpected error: {other:?}"),
    }
    assert!(tools.ran.borrow().is_empty());
    assert!(!ws.out().exists());
}

#[test]
fn remote_spec_checks_scope_after_generation() {
    let ws = Workspace::new();
    let mut manifest = ws.manifest(&["/drives/**"]);
    manifest.spec.source = SpecificationSource::from("https://example.invalid/openapi.yaml");
    let mut ctx = RunContext::from_manifest(manifest, Some(&ws.out()), skip_build());

    let err = Pipeline::new()
        .run(&mut ctx, &FakeTools::new(Generator::RootOnly))
        .unwrap_err();

    assert_eq!(err.kind(), "empty-scope");
    assert!(ctx.was_skipped(State::ResolveScope));
    assert!(ctx.scope.is_none());
    assert!(!ws.out().join("Contoso.Mail.Client.csproj").exists());
}

#[test]
fn merge_does_not_count_sources_from_earlier_runs() {
    let ws = Workspace::new();
    fs::create_dir_all(ws.out().join("Me")).unwrap();
    fs::create_dir_all(ws.out().join("obj/Release/netstandard2.0")).unwrap();
    fs::write(ws.out().join("Me/MeRequestBuilder.cs"), "// me").unwrap();
    fs::write(
        ws.out().join("obj/Release/netstandard2.0/Contoso.Mail.AssemblyInfo.cs"),
        "// info",
    )
    .unwrap();

    let mut manifest = ws.manifest(&["/nothing/**"]);
    manifest.spec.source = SpecificationSource::from("https://example.invalid/openapi.yaml");
    let options = RunOptions {
        merge: true,
        ..skip_build()
    };
    let mut ctx = RunContext::from_manifest(manifest, Some(&ws.out()), options);

    let err = Pipeline::new()
        .run(&mut ctx, &FakeTools::new(Generator::RootOnly))
        .unwrap_err();

    assert_eq!(err.kind(), "empty-scope");
    assert_eq!(ctx.state, State::Failed);
    assert!(!ws.out().join("MailClient.Compat.cs").exists());
}

#[test]
fn skip_build_stops_after_shim() {
    let ws = Workspace::new();
    let tools = FakeTools::new(Generator::Populated);
    let mut ctx = ws.context(skip_build());

    Pipeline::new().run(&mut ctx, &tools).unwrap();

    assert!(ctx.was_skipped(State::BuildIfRequested));
    assert!(ctx.artifact.is_none());
    assert!(!tools.ran("build"));
    assert_eq!(ctx.written().count(), 2);
}

#[test]
fn build_failure_keeps_generated_sources() {
    let ws = Workspace::new();
    let tools = FakeTools {
        build_fails: true,
        ..FakeTools::new(Generator::Populated)
    };
    let mut ctx = ws.context(RunOptions::default());

    let err = Pipeline::new().run(&mut ctx, &tools).unwrap_err();

    assert_eq!(err.kind(), "build-failure");
    assert!(ws.out().join("Contoso.Mail.Client.csproj").exists());
    assert!(ctx.artifact.is_none());
}

#[derive(Default)]
struct Counts {
    before: Vec<State>,
    after: Vec<State>,
    failed: Vec<State>,
}

struct Recorder(Arc<Mutex<Counts>>);

impl Plugin for Recorder {
    fn name(&self) -> &'static str {
        "recorder"
    }

    fn on_before_stage(&self, stage: State, _ctx: &mut RunContext) -> slimgen_codegen::Result<()> {
        self.0.lock().unwrap().before.push(stage);
        Ok(())
    }

    fn on_after_stage(&self, stage: State, _ctx: &mut RunContext) -> slimgen_codegen::Result<()> {
        self.0.lock().unwrap().after.push(stage);
        Ok(())
    }

    fn on_failed(&self, stage: State, _error: &Error, _ctx: &RunContext) {
        self.0.lock().unwrap().failed.push(stage);
    }
}

#[test]
fn plugins_see_every_stage_in_order() {
    let ws = Workspace::new();
    let counts = Arc::new(Mutex::new(Counts::default()));
    let mut ctx = ws.context(RunOptions::default());

    Pipeline::new()
        .plugin(Recorder(counts.clone()))
        .run(&mut ctx, &FakeTools::new(Generator::Populated))
        .unwrap();

    let counts = counts.lock().unwrap();
    let expected = vec![
        State::ResolveScope,
        State::CleanIfRequested,
        State::EnsureOutputDir,
        State::Generate,
        State::SynthesizeDescriptor,
        State::SynthesizeShim,
        State::BuildIfRequested,
    ];
    assert_eq!(counts.before, expected);
    assert_eq!(counts.after, expected);
    assert!(counts.failed.is_empty());
}

#[test]
fn plugins_hear_about_failures() {
    let ws = Workspace::new();
    let counts = Arc::new(Mutex::new(Counts::default()));
    let mut ctx = ws.context(RunOptions::default());

    let _ = Pipeline::new()
        .plugin(Recorder(counts.clone()))
        .run(&mut ctx, &FakeTools::new(Generator::Fails));

    let counts = counts.lock().unwrap();
    assert_eq!(counts.failed, vec![State::Generate]);
    assert_eq!(counts.after.last(), Some(&State::EnsureOutputDir));
}
