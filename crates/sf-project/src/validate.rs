//! Project validation.

use std::collections::HashSet;

use thiserror::Error;

use crate::LATEST_VERSION;
use crate::schema::Project;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Unsupported project version {found} (expected {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },

    #[error("Project has no datasets")]
    NoDatasets,

    #[error("Duplicate dataset id: {id}")]
    DuplicateDatasetId { id: String },

    #[error("Dataset {id} has an empty category list")]
    EmptyCategories { id: String },

    #[error("Dataset {id} requests both a start anchor and an end anchor")]
    BothAnchors { id: String },

    #[error("Merge references unknown dataset id: {id}")]
    MergeUnknownDataset { id: String },

    #[error("Merge references dataset {id} on both sides")]
    MergeSameDataset { id: String },
}

/// Validate a project's internal consistency.
///
/// Table-schema checks (metric/category columns actually existing in the
/// CSV) happen later, at graph-build time, once the data has been read.
pub fn validate_project(project: &Project) -> Result<(), ValidationError> {
    if project.version != LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            found: project.version,
            expected: LATEST_VERSION,
        });
    }

    if project.datasets.is_empty() {
        return Err(ValidationError::NoDatasets);
    }

    let mut seen = HashSet::new();
    for dataset in &project.datasets {
        if !seen.insert(dataset.id.as_str()) {
            return Err(ValidationError::DuplicateDatasetId {
                id: dataset.id.clone(),
            });
        }
        if dataset.categories.is_empty() {
            return Err(ValidationError::EmptyCategories {
                id: dataset.id.clone(),
            });
        }
        if dataset.start_anchor.is_some() && dataset.end_anchor.is_some() {
            return Err(ValidationError::BothAnchors {
                id: dataset.id.clone(),
            });
        }
    }

    if let Some(merge) = &project.merge {
        for id in [&merge.first, &merge.second] {
            if !seen.contains(id.as_str()) {
                return Err(ValidationError::MergeUnknownDataset { id: id.clone() });
            }
        }
        if merge.first == merge.second {
            return Err(ValidationError::MergeSameDataset {
                id: merge.first.clone(),
            });
        }
    }

    Ok(())
}
