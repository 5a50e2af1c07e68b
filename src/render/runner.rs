//! Dispatch of diagram sources to the external PlantUML renderer
//!
//! The renderer only produces text. This module writes it to
//! `<output_dir>/<name>.puml` and hands the path to a [`CommandRunner`].

use std::ffi::{OsStr, OsString};
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

use crate::config::DiagramConfig;
use crate::error::util::{ensure_directory, safe_write};
use crate::error::{FamilyTreeError, Result};

/// Runs an external program to completion
pub trait CommandRunner {
    /// Run `program` with `args` inside `working_dir` and wait for it to exit
    fn run(&self, program: &OsStr, args: &[OsString], working_dir: &Path) -> io::Result<ExitStatus>;
}

/// [`CommandRunner`] backed by [`std::process::Command`]
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, program: &OsStr, args: &[OsString], working_dir: &Path) -> io::Result<ExitStatus> {
        Command::new(program)
            .args(args)
            .current_dir(working_dir)
            .status()
    }
}

/// Write a diagram source without rendering it
///
/// Creates `output_dir` if needed and returns the path of the `.puml` file.
pub fn write_diagram(uml: &str, output_dir: &Path, file_name: &str) -> Result<PathBuf> {
    ensure_directory(output_dir)?;
    let path = output_dir.join(format!("{file_name}.puml"));
    safe_write(&path, uml)?;
    log::debug!("Wrote diagram source {}", path.display());
    Ok(path)
}

/// Writes diagram sources and renders them with `java -jar plantuml.jar`
#[derive(Debug, Clone)]
pub struct DiagramRunner<R = SystemRunner> {
    config: DiagramConfig,
    runner: R,
}

impl DiagramRunner<SystemRunner> {
    /// Create a runner that launches real processes
    #[must_use]
    pub fn new(config: DiagramConfig) -> Self {
        Self::with_runner(config, SystemRunner)
    }
}

impl<R: CommandRunner> DiagramRunner<R> {
    /// Create a runner using a custom command runner
    #[must_use]
    pub fn with_runner(config: DiagramConfig, runner: R) -> Self {
        Self { config, runner }
    }

    /// The active configuration
    #[must_use]
    pub fn config(&self) -> &DiagramConfig {
        &self.config
    }

    /// The underlying command runner
    #[must_use]
    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Write `<output_dir>/<file_name>.puml` and render it
    ///
    /// PlantUML runs with the output directory as working directory, so the
    /// image lands next to the source.
    pub fn generate(&self, uml: &str, file_name: &str) -> Result<PathBuf> {
        let output_dir = &self.config.output_dir;
        let source = write_diagram(uml, output_dir, file_name)?;

        // Relative jar paths would otherwise resolve against the output directory
        let jar = std::path::absolute(&self.config.plantuml_jar)
            .unwrap_or_else(|_| self.config.plantuml_jar.clone());
        let args = vec![
            OsString::from("-jar"),
            jar.into_os_string(),
            OsString::from(format!("{file_name}.puml")),
        ];
        let program = OsStr::new(&self.config.java_command);

        log::info!(
            "Rendering {} with {}",
            source.display(),
            self.config.plantuml_jar.display()
        );
        let status = self
            .runner
            .run(program, &args, output_dir)
            .map_err(|e| FamilyTreeError::io(&self.config.java_command, e))?;

        if !status.success() {
            return Err(FamilyTreeError::Renderer {
                program: self.config.java_command.clone(),
                status,
            });
        }

        Ok(source)
    }
}
