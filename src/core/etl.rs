use crate::core::Pipeline;
use crate::domain::model::RunReport;
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
    monitor: SystemMonitor,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(false),
        }
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    pub fn run(&mut self) -> Result<RunReport> {
        println!("Starting roster import...");

        println!("Reading source files...");
        let raw_data = self.pipeline.extract()?;
        println!("Parsed {} source files", raw_data.tables.len());
        self.monitor.log_phase("extract");

        println!("Building the roster document...");
        let transformed = self.pipeline.transform(raw_data)?;
        println!("Assembled {} groups", transformed.database.grupos.len());
        self.monitor.log_phase("transform");

        for diagnostic in &transformed.diagnostics {
            tracing::warn!("{}", diagnostic);
        }

        println!("Writing output...");
        let diagnostics = transformed.diagnostics.clone();
        let output_path = self.pipeline.load(transformed)?;
        println!("Output saved to: {}", output_path);
        self.monitor.log_phase("load");
        self.monitor.log_summary();

        Ok(RunReport {
            output_path,
            diagnostics,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{
        catalogo_proyectos, Database, Diagnostic, DiagnosticKind, ExtractResult, TransformResult,
    };

    struct StubPipeline;

    impl Pipeline for StubPipeline {
        fn extract(&self) -> Result<ExtractResult> {
            Ok(ExtractResult {
                tables: vec![],
                diagnostics: vec![Diagnostic::new(
                    DiagnosticKind::MissingSource,
                    "source '2A_equipos' not found",
                )],
            })
        }

        fn transform(&self, data: ExtractResult) -> Result<TransformResult> {
            Ok(TransformResult {
                database: Database {
                    catalogo_proyectos: catalogo_proyectos(),
                    grupos: vec![],
                },
                diagnostics: data.diagnostics,
            })
        }

        fn load(&self, _result: TransformResult) -> Result<String> {
            Ok("backend/database.json".to_string())
        }
    }

    #[test]
    fn run_reports_the_output_path_and_diagnostics() {
        let mut engine = EtlEngine::new(StubPipeline);

        let report = engine.run().unwrap();

        assert_eq!(report.output_path, "backend/database.json");
        assert_eq!(report.diagnostics.len(), 1);
        assert_eq!(report.diagnostics[0].kind, DiagnosticKind::MissingSource);
    }
}
