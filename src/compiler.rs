//! LaTeX compiler capability check.
//!
//! The library never runs a compiler. [`detect`] reports which supported
//! compiler is installed and [`LatexCompiler::command`] describes how to
//! invoke it on a rendered `.tex` file.

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// A supported LaTeX compiler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompilerKind {
    Xelatex,
    Tectonic,
}

impl CompilerKind {
    /// Search order.
    pub const ALL: &'static [CompilerKind] = &[CompilerKind::Xelatex, CompilerKind::Tectonic];

    /// Executable name.
    pub fn program(&self) -> &'static str {
        match self {
            CompilerKind::Xelatex => "xelatex",
            CompilerKind::Tectonic => "tectonic",
        }
    }
}

impl std::fmt::Display for CompilerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.program())
    }
}

/// An installed compiler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LatexCompiler {
    pub kind: CompilerKind,
    /// Absolute path of the executable
    pub path: PathBuf,
}

impl LatexCompiler {
    pub fn new(kind: CompilerKind, path: impl Into<PathBuf>) -> Self {
        Self {
            kind,
            path: path.into(),
        }
    }

    /// Argument vector compiling `tex_path` into a PDF next to it, the
    /// executable first.
    pub fn command(&self, tex_path: &Path) -> Vec<OsString> {
        let out_dir = tex_path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        let mut args = vec![self.path.clone().into_os_string()];
        match self.kind {
            CompilerKind::Xelatex => {
                args.push("-interaction=nonstopmode".into());
                args.push("-halt-on-error".into());
                let mut dir = OsString::from("-output-directory=");
                dir.push(out_dir);
                args.push(dir);
            }
            CompilerKind::Tectonic => {
                args.push("--outdir".into());
                args.push(out_dir.into());
            }
        }
        args.push(tex_path.into());
        args
    }
}

/// Find a LaTeX compiler on `PATH`, xelatex first.
pub fn detect() -> Result<LatexCompiler> {
    find(|program| which::which(program).ok())
}

/// Find a LaTeX compiler in the given search path list.
pub fn detect_in(paths: impl AsRef<OsStr>) -> Result<LatexCompiler> {
    let cwd = std::env::current_dir()?;
    find(|program| which::which_in(program, Some(paths.as_ref()), &cwd).ok())
}

fn find<F>(lookup: F) -> Result<LatexCompiler>
where
    F: Fn(&str) -> Option<PathBuf>,
{
    for kind in CompilerKind::ALL {
        if let Some(path) = lookup(kind.program()) {
            log::debug!("found {kind} at {}", path.display());
            return Ok(LatexCompiler::new(*kind, path));
        }
    }
    log::debug!("no LaTeX compiler on the search path");
    Err(Error::CompilerNotFound)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_xelatex_command() {
        let compiler = LatexCompiler::new(CompilerKind::Xelatex, "/usr/bin/xelatex");
        let args = compiler.command(Path::new("out/resume.tex"));
        assert_eq!(
            args,
            vec![
                OsString::from("/usr/bin/xelatex"),
                "-interaction=nonstopmode".into(),
                "-halt-on-error".into(),
                "-output-directory=out".into(),
                "out/resume.tex".into(),
            ]
        );
    }

    #[test]
    fn test_tectonic_command_in_current_dir() {
        let compiler = LatexCompiler::new(CompilerKind::Tectonic, "/opt/tectonic");
        let args = compiler.command(Path::new("resume.tex"));
        assert_eq!(args[1], OsString::from("--outdir"));
        assert_eq!(args[2], OsString::from("."));
        assert_eq!(args[3], OsString::from("resume.tex"));
    }

    #[test]
    fn test_find_prefers_xelatex() {
        let found = find(|p| Some(PathBuf::from(format!("/bin/{p}")))).unwrap();
        assert_eq!(found.kind, CompilerKind::Xelatex);

        let found = find(|p| (p == "tectonic").then(|| PathBuf::from("/bin/tectonic"))).unwrap();
        assert_eq!(found.kind, CompilerKind::Tectonic);
        assert_eq!(found.path, PathBuf::from("/bin/tectonic"));
    }

    #[test]
    fn test_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = detect_in(dir.path()).unwrap_err();
        assert!(matches!(err, Error::CompilerNotFound));
    }

    #[cfg(unix)]
    #[test]
    fn test_detect_in_finds_executable() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let exe = dir.path().join("tectonic");
        std::fs::write(&exe, "#!/bin/sh\n").unwrap();
        std::fs::set_permissions(&exe, std::fs::Permissions::from_mode(0o755)).unwrap();

        let found = detect_in(dir.path()).unwrap();
        assert_eq!(found.kind, CompilerKind::Tectonic);
        assert_eq!(found.path.file_name(), exe.file_name());
    }
}
