use crate::core::aggregator::group_teams;
use crate::domain::model::{
    Database, Diagnostic, DiagnosticKind, GroupRoster, ProjectEntry, SourceTable,
};
use serde_json::Map;

/// Group name is the identifier up to the first underscore: "1D_equipos"
/// becomes "1D". An identifier without a delimiter names itself.
pub fn derive_group_name(source_id: &str) -> &str {
    source_id.split('_').next().unwrap_or(source_id)
}

/// Assemble the output document from the parsed tables and the constant
/// catalog. Pure: same tables and catalog always produce the same document.
///
/// Two sources deriving the same group name would silently shadow each
/// other, so the collision is surfaced instead: the first source wins and
/// the later one is skipped with a diagnostic.
pub fn build_database(
    tables: &[SourceTable],
    catalog: Vec<ProjectEntry>,
) -> (Database, Vec<Diagnostic>) {
    let mut grupos: Vec<(String, GroupRoster)> = Vec::new();
    let mut diagnostics = Vec::new();

    for table in tables {
        let group_name = derive_group_name(&table.id);

        if grupos.iter().any(|(name, _)| name == group_name) {
            diagnostics.push(Diagnostic::new(
                DiagnosticKind::DuplicateGroup,
                format!(
                    "group '{}' was already built from an earlier source; skipping '{}'",
                    group_name, table.id
                ),
            ));
            continue;
        }

        grupos.push((
            group_name.to_string(),
            GroupRoster {
                equipos: group_teams(&table.rows),
                proyectos_asignados: Map::new(),
            },
        ));
    }

    (
        Database {
            catalogo_proyectos: catalog,
            grupos,
        },
        diagnostics,
    )
}
