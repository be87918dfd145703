use crate::domain::model::{ExtractResult, TransformResult};
use crate::utils::error::Result;

/// File access behind a seam so the pipeline can run against an in-memory
/// store in tests. All I/O is blocking; the whole pipeline is synchronous.
pub trait Storage {
    fn exists(&self, path: &str) -> bool;
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}

/// Run configuration, whichever surface it was loaded from (CLI flags or a
/// TOML file).
pub trait ConfigProvider {
    /// Directory the source files live in.
    fn input_path(&self) -> &str;
    /// Directory the output document is written to.
    fn output_path(&self) -> &str;
    /// Expected source identifiers, in processing order.
    fn sources(&self) -> &[String];
    /// Suffix appended to an identifier to form its file name.
    fn source_suffix(&self) -> &str;
    /// Accepted header spellings for the team number column.
    fn team_columns(&self) -> &[String];
    /// Accepted header spellings for the member name column.
    fn member_columns(&self) -> &[String];
    /// Carry prior `proyectos_asignados` data into the fresh document
    /// instead of overwriting it.
    fn preserve_assignments(&self) -> bool;
}

pub trait Pipeline {
    fn extract(&self) -> Result<ExtractResult>;
    fn transform(&self, data: ExtractResult) -> Result<TransformResult>;
    fn load(&self, result: TransformResult) -> Result<String>;
}
