//! Configuration for loading records and dispatching diagrams.

use std::fmt;
use std::path::PathBuf;

/// Fixed calendar-date format used by the record layout
pub const RECORD_DATE_FORMAT: &str = "%Y-%m-%d";

/// Minimum gap in years between a parent's and a child's birth dates
pub const PARENTING_AGE_YEARS: u32 = 15;

/// Configuration for the record loader and relationship resolver
#[derive(Debug, Clone)]
pub struct LoaderConfig {
    /// `chrono` format string for birth and death dates
    pub date_format: String,
    /// Parenting-age threshold in years
    pub parenting_age_years: u32,
    /// Skip empty lines instead of rejecting them as malformed
    pub skip_blank_lines: bool,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            date_format: RECORD_DATE_FORMAT.to_string(),
            parenting_age_years: PARENTING_AGE_YEARS,
            skip_blank_lines: false,
        }
    }
}

impl fmt::Display for LoaderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Loader Configuration:")?;
        writeln!(f, "  Date Format: {}", self.date_format)?;
        writeln!(f, "  Parenting Age: {} years", self.parenting_age_years)?;
        writeln!(f, "  Skip Blank Lines: {}", self.skip_blank_lines)
    }
}

/// Configuration for writing diagram sources and invoking PlantUML
#[derive(Debug, Clone)]
pub struct DiagramConfig {
    /// Program used to launch the PlantUML jar
    pub java_command: String,
    /// Location of `plantuml.jar`
    pub plantuml_jar: PathBuf,
    /// Directory receiving `.puml` sources and rendered images
    pub output_dir: PathBuf,
}

impl Default for DiagramConfig {
    fn default() -> Self {
        Self {
            java_command: "java".to_string(),
            plantuml_jar: PathBuf::from("plantuml.jar"),
            output_dir: PathBuf::from("output"),
        }
    }
}

impl fmt::Display for DiagramConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Diagram Configuration:")?;
        writeln!(f, "  Java Command: {}", self.java_command)?;
        writeln!(f, "  PlantUML Jar: {}", self.plantuml_jar.display())?;
        writeln!(f, "  Output Directory: {}", self.output_dir.display())
    }
}
