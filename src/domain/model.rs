use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use serde_json::Map;

/// An expected roster source resolved to an existing file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub id: String,
    pub path: String,
}

/// One parsed roster record: team number plus the member's full name.
/// The name may be absent or blank at this level; filtering happens when
/// teams are assembled, not while reading rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterRow {
    pub equipo: i64,
    pub alumno: Option<String>,
}

/// All rows read from one source file, in file order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceTable {
    pub id: String,
    pub rows: Vec<RosterRow>,
}

/// A team inside one group. `alumnos` keeps the original row order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Team {
    pub numero: i64,
    pub nombre: String,
    pub alumnos: Vec<String>,
}

/// One classroom group as it appears in the output document.
///
/// `equipos` is stored as a vector so the first-seen team order survives;
/// it serializes as a JSON object keyed by team name. `proyectos_asignados`
/// is owned by the front-end and only initialized (or carried over) here.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupRoster {
    #[serde(serialize_with = "entries_as_map")]
    pub equipos: Vec<Team>,
    pub proyectos_asignados: Map<String, serde_json::Value>,
}

/// One entry of the fixed project catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectEntry {
    pub id: String,
    pub titulo: String,
}

/// The root output document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Database {
    pub catalogo_proyectos: Vec<ProjectEntry>,
    #[serde(serialize_with = "pairs_as_map")]
    pub grupos: Vec<(String, GroupRoster)>,
}

impl Database {
    pub fn group(&self, name: &str) -> Option<&GroupRoster> {
        self.grupos.iter().find(|(n, _)| n == name).map(|(_, g)| g)
    }

    pub fn group_names(&self) -> Vec<&str> {
        self.grupos.iter().map(|(n, _)| n.as_str()).collect()
    }
}

fn entries_as_map<S: Serializer>(teams: &[Team], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_map(teams.iter().map(|t| (&t.nombre, &t.alumnos)))
}

fn pairs_as_map<S: Serializer>(
    groups: &[(String, GroupRoster)],
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_map(groups.iter().map(|(name, group)| (name, group)))
}

/// The project catalog is constant: same five entries on every run, no
/// matter what the inputs contain.
pub fn catalogo_proyectos() -> Vec<ProjectEntry> {
    let entries = [
        ("p01", "Análisis de Calidad del Agua Local"),
        ("p02", "Sistema de Riego Eficiente para Jardines Escolares"),
        ("p03", "Campaña de Concientización sobre el Ahorro de Agua"),
        ("p04", "Diseño de un Filtro de Agua Casero"),
        ("p05", "Estudio del Impacto de la Contaminación en Ríos Cercanos"),
    ];
    entries
        .iter()
        .map(|(id, titulo)| ProjectEntry {
            id: (*id).to_string(),
            titulo: (*titulo).to_string(),
        })
        .collect()
}

/// Classes of recoverable problems found during a run. None of these abort
/// the pipeline; they are collected and reported at the end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    MissingSource,
    InvalidSchema,
    InvalidRow,
    DuplicateGroup,
}

impl DiagnosticKind {
    pub fn label(&self) -> &'static str {
        match self {
            DiagnosticKind::MissingSource => "missing source",
            DiagnosticKind::InvalidSchema => "invalid schema",
            DiagnosticKind::InvalidRow => "invalid row",
            DiagnosticKind::DuplicateGroup => "duplicate group",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub message: String,
}

impl Diagnostic {
    pub fn new(kind: DiagnosticKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.kind.label(), self.message)
    }
}

/// Everything the extract stage hands to transform.
#[derive(Debug, Clone)]
pub struct ExtractResult {
    pub tables: Vec<SourceTable>,
    pub diagnostics: Vec<Diagnostic>,
}

/// The assembled document plus every diagnostic gathered so far.
#[derive(Debug, Clone)]
pub struct TransformResult {
    pub database: Database,
    pub diagnostics: Vec<Diagnostic>,
}

/// What a completed run reports back to the caller.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub output_path: String,
    pub diagnostics: Vec<Diagnostic>,
}
