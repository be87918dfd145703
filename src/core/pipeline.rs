use crate::core::builder::build_database;
use crate::core::loader::load_rows;
use crate::core::locator::locate_sources;
use crate::core::{ConfigProvider, Pipeline, Storage};
use crate::domain::model::{
    catalogo_proyectos, Database, Diagnostic, DiagnosticKind, ExtractResult, SourceTable,
    TransformResult,
};
use crate::utils::error::{EtlError, Result};

pub const DATABASE_FILE: &str = "database.json";

/// The roster import wired together behind the storage and config ports.
pub struct RosterPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> RosterPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    fn output_file(&self) -> String {
        format!("{}/{}", self.config.output_path(), DATABASE_FILE)
    }

    /// Carry each group's prior assignments into the fresh document. A
    /// missing or unreadable prior document is not an error; the
    /// assignments simply start empty again.
    fn merge_prior_assignments(&self, database: &mut Database, output_file: &str) {
        if !self.storage.exists(output_file) {
            return;
        }

        let prior_bytes = match self.storage.read_file(output_file) {
            Ok(bytes) => bytes,
            Err(err) => {
                tracing::warn!(
                    "prior document at '{}' could not be read ({}); assignments start empty",
                    output_file,
                    err
                );
                return;
            }
        };

        let prior: serde_json::Value = match serde_json::from_slice(&prior_bytes) {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!(
                    "prior document at '{}' is not valid JSON ({}); assignments start empty",
                    output_file,
                    err
                );
                return;
            }
        };

        for (name, group) in database.grupos.iter_mut() {
            let assigned = prior
                .get("grupos")
                .and_then(|grupos| grupos.get(name.as_str()))
                .and_then(|grupo| grupo.get("proyectos_asignados"))
                .and_then(|asignados| asignados.as_object());

            if let Some(assigned) = assigned {
                if !assigned.is_empty() {
                    tracing::debug!("keeping {} prior assignments for '{}'", assigned.len(), name);
                    group.proyectos_asignados = assigned.clone();
                }
            }
        }
    }
}

impl<S: Storage, C: ConfigProvider> Pipeline for RosterPipeline<S, C> {
    /// Locate and parse every expected source. Per-file problems become
    /// diagnostics, never errors; a file that fails its schema check is
    /// left out entirely.
    fn extract(&self) -> Result<ExtractResult> {
        let (found, mut diagnostics) = locate_sources(&self.config, &self.storage);

        let mut tables = Vec::new();
        for source in found {
            tracing::debug!("reading '{}'", source.path);

            let data = match self.storage.read_file(&source.path) {
                Ok(data) => data,
                Err(err) => {
                    diagnostics.push(Diagnostic::new(
                        DiagnosticKind::MissingSource,
                        format!("source '{}' could not be read ({}); skipping", source.path, err),
                    ));
                    continue;
                }
            };

            match load_rows(
                &data,
                self.config.team_columns(),
                self.config.member_columns(),
                &source.id,
            ) {
                Ok(row_set) => {
                    tracing::debug!("'{}': {} rows", source.id, row_set.rows.len());
                    diagnostics.extend(row_set.dropped);
                    tables.push(SourceTable {
                        id: source.id,
                        rows: row_set.rows,
                    });
                }
                Err(err) => {
                    diagnostics.push(Diagnostic::new(
                        DiagnosticKind::InvalidSchema,
                        format!("{}; file skipped", err.user_friendly_message()),
                    ));
                }
            }
        }

        Ok(ExtractResult {
            tables,
            diagnostics,
        })
    }

    fn transform(&self, data: ExtractResult) -> Result<TransformResult> {
        let (database, build_diagnostics) = build_database(&data.tables, catalogo_proyectos());

        let mut diagnostics = data.diagnostics;
        diagnostics.extend(build_diagnostics);

        Ok(TransformResult {
            database,
            diagnostics,
        })
    }

    /// Serialize and persist the document. This is the only stage allowed
    /// to fail the run.
    fn load(&self, result: TransformResult) -> Result<String> {
        let mut database = result.database;
        let output_file = self.output_file();

        if self.config.preserve_assignments() {
            self.merge_prior_assignments(&mut database, &output_file);
        }

        let bytes = serde_json::to_vec_pretty(&database)?;

        self.storage
            .write_file(&output_file, &bytes)
            .map_err(|err| match err {
                EtlError::IoError(source) => EtlError::WriteError {
                    path: output_file.clone(),
                    source,
                },
                other => other,
            })?;

        Ok(output_file)
    }
}
