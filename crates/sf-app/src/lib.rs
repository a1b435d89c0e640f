//! sf-app: service layer composing tables, graphs, and project files into
//! the end-to-end Sankey data pipeline.

pub mod error;
pub mod export;
pub mod pipeline;

pub use error::{AppError, AppResult};
pub use export::SankeyData;
pub use pipeline::{build_dataset, load_project, run_pipeline, run_project};
