use crate::domain::model::{Diagnostic, DiagnosticKind, SourceFile};
use crate::domain::ports::{ConfigProvider, Storage};

/// Resolve the configured source identifiers to files that actually exist.
/// Missing files are reported and skipped; the run goes on without them.
pub fn locate_sources<C: ConfigProvider, S: Storage>(
    config: &C,
    storage: &S,
) -> (Vec<SourceFile>, Vec<Diagnostic>) {
    let mut found = Vec::new();
    let mut diagnostics = Vec::new();

    for id in config.sources() {
        let path = format!("{}/{}{}", config.input_path(), id, config.source_suffix());
        if storage.exists(&path) {
            found.push(SourceFile {
                id: id.clone(),
                path,
            });
        } else {
            diagnostics.push(Diagnostic::new(
                DiagnosticKind::MissingSource,
                format!("source '{}' not found at '{}'; skipping", id, path),
            ));
        }
    }

    (found, diagnostics)
}
