//! End-to-end pipeline service: project file in, renderer data out.

use std::collections::HashMap;
use std::path::Path;

use sf_graph::{BuildSpec, FlowGraph, aggregate, annotated_labels, build_graph, merge};
use sf_project::{DatasetDef, Project};
use sf_table::read_csv_path;

use crate::error::{AppError, AppResult};
use crate::export::SankeyData;

/// Load and validate a project file, dispatching on extension
/// (`.yaml`/`.yml` or `.json`).
pub fn load_project(path: &Path) -> AppResult<Project> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("yaml") | Some("yml") => Ok(sf_project::load_yaml(path)?),
        Some("json") => Ok(sf_project::load_json(path)?),
        other => Err(AppError::UnsupportedExtension(
            other.unwrap_or("<none>").to_string(),
        )),
    }
}

/// Translate a dataset definition into a core build spec.
fn build_spec(def: &DatasetDef) -> BuildSpec {
    let spec = BuildSpec::new(def.metric.clone(), def.categories.clone());
    // Validation rejects configs setting both anchors.
    if let Some(name) = &def.start_anchor {
        spec.with_start_anchor(name.clone())
    } else if let Some(name) = &def.end_anchor {
        spec.with_end_anchor(name.clone())
    } else {
        spec
    }
}

/// Build one dataset's aggregated flow graph, resolving its CSV path
/// against the project file's directory.
pub fn build_dataset(base_dir: &Path, def: &DatasetDef) -> AppResult<FlowGraph> {
    let path = base_dir.join(&def.path);
    let table = read_csv_path(&path)?;
    tracing::debug!(
        dataset = %def.id,
        rows = table.row_count(),
        "loaded dataset table"
    );

    let graph = aggregate(&build_graph(&table, &build_spec(def))?);
    tracing::info!(
        dataset = %def.id,
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "built flow graph"
    );
    Ok(graph)
}

/// Run the full pipeline for a loaded project: build every dataset graph,
/// apply the optional merge, annotate, and produce the renderer shape.
pub fn run_project(project: &Project, base_dir: &Path) -> AppResult<SankeyData> {
    let mut graphs: HashMap<&str, FlowGraph> = HashMap::new();
    for def in &project.datasets {
        graphs.insert(def.id.as_str(), build_dataset(base_dir, def)?);
    }

    let graph = match &project.merge {
        Some(m) => {
            let a = graphs
                .get(m.first.as_str())
                .ok_or_else(|| AppError::DatasetNotFound(m.first.clone()))?;
            let b = graphs
                .get(m.second.as_str())
                .ok_or_else(|| AppError::DatasetNotFound(m.second.clone()))?;
            let merged = merge(a, &m.first_anchor, b, &m.second_anchor)?;
            tracing::info!(
                nodes = merged.node_count(),
                edges = merged.edge_count(),
                "merged {} and {}",
                m.first,
                m.second
            );
            merged
        }
        None => {
            if project.datasets.len() > 1 {
                return Err(AppError::InvalidInput(
                    "project has multiple datasets but no merge step".to_string(),
                ));
            }
            // Validation guarantees at least one dataset.
            let id = project.datasets[0].id.as_str();
            graphs
                .remove(id)
                .ok_or_else(|| AppError::DatasetNotFound(id.to_string()))?
        }
    };

    let labels = annotated_labels(&graph, &project.currency);
    Ok(SankeyData::from_graph(&graph, labels))
}

/// Convenience entry point: load a project file and run it.
pub fn run_pipeline(project_path: &Path) -> AppResult<SankeyData> {
    let project = load_project(project_path)?;
    let base_dir = project_path.parent().unwrap_or_else(|| Path::new("."));
    run_project(&project, base_dir)
}
