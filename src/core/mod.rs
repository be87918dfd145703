pub mod aggregator;
pub mod builder;
pub mod etl;
pub mod loader;
pub mod locator;
pub mod pipeline;

pub use crate::domain::model::{
    Database, Diagnostic, DiagnosticKind, ExtractResult, RosterRow, RunReport, SourceFile,
    SourceTable, Team, TransformResult,
};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
