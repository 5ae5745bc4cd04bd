//! Provisioning tests against the library API
//!
//! Exercises locate/provision sequences end to end over throwaway asset
//! stores and over the assets packaged with the crate.

mod common;

use stagehand::assets::AssetStore;
use stagehand::error::{ErrorKind, StagehandError};
use stagehand::provision::{
    ProvisionOutcome, provision_bundle, provision_shell_wrapper, provision_template,
    write_default_template,
};
use stagehand::template::locate_template;

use common::TestWorkspace;

fn store_with(workspace: &TestWorkspace, bundles: &[(&str, &[&str])]) -> AssetStore {
    let root = workspace.create_assets(bundles);
    AssetStore::with_bundles(root, bundles.iter().map(|(name, _)| *name))
}

#[test]
fn test_lexicographically_first_template_is_chosen() {
    let workspace = TestWorkspace::new();
    let store = store_with(&workspace, &[("hpc", &["a.tmpl", "z.tmpl", "notes.txt"])]);

    let candidate = locate_template(&store, "hpc").unwrap();
    assert_eq!(candidate.file_name(), "a.tmpl");
}

#[test]
fn test_bundle_without_templates_names_bundle() {
    let workspace = TestWorkspace::new();
    let store = store_with(&workspace, &[("plain", &["notes.txt"])]);

    let err = locate_template(&store, "plain").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NoTemplateFound);
    match err {
        StagehandError::NoTemplateFound { bundle } => assert_eq!(bundle, "plain"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_template_lifecycle() {
    let workspace = TestWorkspace::new();
    let store = store_with(&workspace, &[("hpc", &["job.tmpl"])]);
    let dest = workspace.create_dir("project");
    let target = dest.join("job.tmpl");

    let candidate = locate_template(&store, "hpc").unwrap();

    // Fresh copy is byte-identical
    assert_eq!(
        provision_template(&candidate, &dest, false).unwrap(),
        ProvisionOutcome::Written
    );
    assert_eq!(
        std::fs::read(&target).unwrap(),
        std::fs::read(candidate.path().unwrap()).unwrap()
    );

    // Rejected again without overwrite, file untouched
    std::fs::write(&target, "edited").unwrap();
    let err = provision_template(&candidate, &dest, false).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::AlreadyExists);
    let err = provision_template(&candidate, &dest, false).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::AlreadyExists);
    assert_eq!(std::fs::read_to_string(&target).unwrap(), "edited");

    // Replaced with overwrite
    assert_eq!(
        provision_template(&candidate, &dest, true).unwrap(),
        ProvisionOutcome::Replaced
    );
    assert_eq!(std::fs::read_to_string(&target).unwrap(), "hpc/job.tmpl\n");
}

#[test]
fn test_relocating_after_provisioning_is_stable() {
    let workspace = TestWorkspace::new();
    let store = store_with(&workspace, &[("hpc", &["b.tmpl", "c.tmpl", "a.tmpl"])]);
    let dest = workspace.create_dir("project");

    let (first, _) = write_default_template(&store, "hpc", &dest, false).unwrap();
    let again = locate_template(&store, "hpc").unwrap();

    assert_eq!(first.file_name(), again.file_name());
    assert_eq!(first, again);
}

#[test]
fn test_shell_wrapper_repeated_overwrite() {
    let workspace = TestWorkspace::new();
    let store = store_with(&workspace, &[]);
    let target = workspace.path.join("shell.sh");

    let outcomes: Vec<_> = (0..3)
        .map(|_| provision_shell_wrapper(&store, &target, true).unwrap())
        .collect();

    assert_eq!(
        outcomes,
        vec![
            ProvisionOutcome::Written,
            ProvisionOutcome::Replaced,
            ProvisionOutcome::Replaced
        ]
    );
    #[cfg(unix)]
    assert_ne!(common::mode(&target) & 0o100, 0);
}

#[test]
fn test_overwrite_policy_asymmetry() {
    let workspace = TestWorkspace::new();
    let store = store_with(&workspace, &[("hpc", &["job.tmpl"])]);
    workspace.write_file("job.tmpl", "mine");
    workspace.write_file("shell.sh", "mine");

    let candidate = locate_template(&store, "hpc").unwrap();
    let template = provision_template(&candidate, &workspace.path, false);
    let shell = provision_shell_wrapper(&store, &workspace.path.join("shell.sh"), false);

    assert_eq!(template.unwrap_err().kind(), ErrorKind::AlreadyExists);
    assert_eq!(shell.unwrap(), ProvisionOutcome::Skipped);
    assert_eq!(workspace.read_file("job.tmpl"), "mine");
    assert_eq!(workspace.read_file("shell.sh"), "mine");
}

#[test]
fn test_every_packaged_scheduler_bundle_has_a_template() {
    let store = AssetStore::packaged();
    for (bundle, expected) in [
        ("lsf", "lsf.tmpl"),
        ("sge", "sge.tmpl"),
        ("slurm", "slurm.tmpl"),
        ("torque", "torque.tmpl"),
    ] {
        assert_eq!(locate_template(&store, bundle).unwrap().file_name(), expected);
    }
    for bundle in ["basic", "gsp", "mtcars"] {
        assert_eq!(
            locate_template(&store, bundle).unwrap_err().kind(),
            ErrorKind::NoTemplateFound
        );
    }
}

#[test]
fn test_packaged_bundle_copy() {
    let workspace = TestWorkspace::new();
    let store = AssetStore::packaged();

    provision_bundle(&store, "torque", &workspace.path, false).unwrap();

    assert_eq!(
        std::fs::read(workspace.path.join("torque/torque.tmpl")).unwrap(),
        std::fs::read(common::packaged_assets().join("examples/torque/torque.tmpl")).unwrap()
    );
}
