use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use log::{info, warn};

use family_tree::render::style::fill_color;
use family_tree::{
    DiagramConfig, DiagramRunner, FamilyGraph, LoaderConfig, PersonFilter, find_oldest_living_person,
    load_family_graph, render_graph, render_person_with, snapshot, sort_deceased_by_lifespan,
};

#[derive(Parser, Debug)]
#[command(name = "family-tree")]
#[command(about = "Load genealogical records and render PlantUML family diagrams")]
#[command(version)]
struct Cli {
    /// Record file, one `First,Last,Birth,Death,Parent1,Parent2` line per person
    records: PathBuf,

    /// Directory receiving `.puml` sources and rendered images
    #[arg(long, default_value = "output")]
    output_dir: PathBuf,

    /// Path to `plantuml.jar`
    #[arg(long, default_value = "plantuml.jar")]
    plantuml_jar: PathBuf,

    /// Also render the parents of this person ("First Last")
    #[arg(long)]
    person: Option<String>,

    /// Color persons with this last name in the per-person diagram
    #[arg(long)]
    highlight_last_name: Option<String>,

    /// PlantUML color used for highlighting
    #[arg(long, default_value = "Yellow")]
    color: String,

    /// Save a snapshot of the resolved graph to this file
    #[arg(long)]
    snapshot: Option<PathBuf>,

    /// Ignore blank lines in the record file
    #[arg(long)]
    skip_blank_lines: bool,

    /// Write `.puml` sources without invoking PlantUML
    #[arg(long)]
    no_render: bool,
}

fn main() -> anyhow::Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let loader_config = LoaderConfig {
        skip_blank_lines: cli.skip_blank_lines,
        ..LoaderConfig::default()
    };
    let diagram_config = DiagramConfig {
        plantuml_jar: cli.plantuml_jar.clone(),
        output_dir: cli.output_dir.clone(),
        ..DiagramConfig::default()
    };

    info!("Loading records from: {}", cli.records.display());
    let start = Instant::now();
    let graph = load_family_graph(&cli.records, &loader_config)
        .with_context(|| format!("Failed to load family tree from {}", cli.records.display()))?;
    info!(
        "Loaded {} persons with {} parent edges in {:?}",
        graph.len(),
        graph.edge_count(),
        start.elapsed()
    );

    log_summary(&graph);

    if let Some(path) = &cli.snapshot {
        snapshot::save(&graph, path)
            .with_context(|| format!("Failed to save snapshot to {}", path.display()))?;
    }

    let mut diagrams = vec![("all_people".to_string(), render_graph(&graph))];

    if let Some(name) = &cli.person {
        let id = graph
            .find_by_full_name(name)
            .with_context(|| format!("Person not found: {name}"))?;
        let highlight = cli
            .highlight_last_name
            .clone()
            .map(PersonFilter::LastName)
            .unwrap_or(PersonFilter::All(Vec::new()));
        let uml = render_person_with(&graph, id, fill_color(&cli.color), highlight.as_predicate());
        diagrams.push((name.replace(' ', "_"), uml));
    }

    let runner = DiagramRunner::new(diagram_config);
    for (file_name, uml) in &diagrams {
        if cli.no_render {
            let path = family_tree::render::write_diagram(uml, &cli.output_dir, file_name)
                .with_context(|| format!("Failed to write diagram {file_name}"))?;
            info!("Wrote {}", path.display());
        } else {
            let path = runner
                .generate(uml, file_name)
                .with_context(|| format!("Failed to render diagram {file_name}"))?;
            info!("Rendered {}", path.display());
        }
    }

    Ok(())
}

fn log_summary(graph: &FamilyGraph) {
    match find_oldest_living_person(graph.people()) {
        Some(person) => info!(
            "Oldest living person: {} (born {})",
            person.full_name(),
            person.birth_date
        ),
        None => warn!("No living persons in the records"),
    }

    if let Some(person) = sort_deceased_by_lifespan(graph.people()).first() {
        info!(
            "Longest lifespan: {} ({} years)",
            person.full_name(),
            person.lifespan_years().unwrap_or_default()
        );
    }
}
