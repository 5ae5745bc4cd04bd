//! Assets compiled into the binary
//!
//! Paths are relative to the asset root and use `/` on every platform.

/// One file baked in at build time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmbeddedFile {
    pub path: &'static str,
    pub contents: &'static [u8],
}

macro_rules! embed {
    ($path:literal) => {
        EmbeddedFile {
            path: $path,
            contents: include_bytes!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/", $path)),
        }
    };
}

/// The shell-wrapper asset
pub const SHELL_WRAPPER: EmbeddedFile = embed!("shell.sh");

/// Every file of every packaged example bundle
pub const BUNDLE_FILES: &[EmbeddedFile] = &[
    embed!("examples/basic/README.md"),
    embed!("examples/gsp/README.md"),
    embed!("examples/lsf/README.md"),
    embed!("examples/lsf/lsf.tmpl"),
    embed!("examples/mtcars/README.md"),
    embed!("examples/mtcars/data/mtcars.csv"),
    embed!("examples/sge/README.md"),
    embed!("examples/sge/sge.tmpl"),
    embed!("examples/slurm/README.md"),
    embed!("examples/slurm/slurm.tmpl"),
    embed!("examples/torque/README.md"),
    embed!("examples/torque/torque.tmpl"),
];

/// Files of `bundle` paired with their path relative to the bundle
pub fn bundle_files(bundle: &str) -> impl Iterator<Item = (&'static str, EmbeddedFile)> + '_ {
    BUNDLE_FILES.iter().filter_map(move |file| {
        file.path
            .strip_prefix("examples/")
            .and_then(|rest| rest.strip_prefix(bundle))
            .and_then(|rest| rest.strip_prefix('/'))
            .map(|relative| (relative, *file))
    })
}
