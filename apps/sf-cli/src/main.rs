use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use sf_app::{AppResult, load_project, run_pipeline};
use sf_project::validate_project;

#[derive(Parser)]
#[command(name = "sf-cli")]
#[command(about = "sankeyflow CLI - tabular records to Sankey flow-graph data", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate project file syntax and structure
    Validate {
        /// Path to the project YAML/JSON file
        project_path: PathBuf,
    },
    /// List datasets in a project
    Datasets {
        /// Path to the project YAML/JSON file
        project_path: PathBuf,
    },
    /// Run the pipeline and emit renderer JSON
    Build {
        /// Path to the project YAML/JSON file
        project_path: PathBuf,
        /// Output JSON file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> AppResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { project_path } => cmd_validate(&project_path),
        Commands::Datasets { project_path } => cmd_datasets(&project_path),
        Commands::Build {
            project_path,
            output,
        } => cmd_build(&project_path, output.as_deref()),
    }
}

fn cmd_validate(project_path: &Path) -> AppResult<()> {
    println!("Validating project: {}", project_path.display());
    let project = load_project(project_path)?;
    validate_project(&project).map_err(|e| sf_app::AppError::Project(e.to_string()))?;
    println!("✓ Project is valid");
    Ok(())
}

fn cmd_datasets(project_path: &Path) -> AppResult<()> {
    let project = load_project(project_path)?;

    if project.datasets.is_empty() {
        println!("No datasets found in project");
    } else {
        println!("Datasets in project '{}':", project.name);
        for dataset in &project.datasets {
            let anchor = match (&dataset.start_anchor, &dataset.end_anchor) {
                (Some(name), _) => format!("start anchor '{name}'"),
                (_, Some(name)) => format!("end anchor '{name}'"),
                _ => "no anchor".to_string(),
            };
            println!(
                "  {} - {} (metric '{}', {} categories, {})",
                dataset.id,
                dataset.path,
                dataset.metric,
                dataset.categories.len(),
                anchor
            );
        }
        if let Some(merge) = &project.merge {
            println!(
                "Merge: {} + {} on '{}'/'{}'",
                merge.first, merge.second, merge.first_anchor, merge.second_anchor
            );
        }
    }
    Ok(())
}

fn cmd_build(project_path: &Path, output: Option<&Path>) -> AppResult<()> {
    let data = run_pipeline(project_path)?;
    let json = data.to_json_pretty()?;

    if let Some(path) = output {
        std::fs::write(path, json)?;
        println!(
            "✓ Wrote {} nodes and {} links to {}",
            data.labels.len(),
            data.link_count(),
            path.display()
        );
    } else {
        println!("{}", json);
    }

    Ok(())
}
