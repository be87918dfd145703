use anyhow::Result;
use clap::Parser;
use pretty_assertions::assert_eq;
use roster_etl::{CliConfig, EtlEngine, LocalStorage, RosterPipeline};
use std::fs;
use tempfile::TempDir;

const ROSTER: &str = "número de equipo,nombre completo\n1,Ana\n2,Beto\n";

fn config_for(dir: &TempDir, preserve: bool) -> CliConfig {
    let input = dir.path().to_str().unwrap().to_string();
    let output = dir.path().join("backend").to_str().unwrap().to_string();
    let mut args = vec![
        "roster-etl".to_string(),
        "--input-path".to_string(),
        input,
        "--output-path".to_string(),
        output,
        "--sources".to_string(),
        "1D_equipos".to_string(),
    ];
    if preserve {
        args.push("--preserve-assignments".to_string());
    }
    CliConfig::parse_from(args)
}

fn run(config: CliConfig) -> Result<()> {
    let pipeline = RosterPipeline::new(LocalStorage::default(), config);
    EtlEngine::new(pipeline).run()?;
    Ok(())
}

fn database_path(dir: &TempDir) -> std::path::PathBuf {
    dir.path().join("backend/database.json")
}

fn read_output(dir: &TempDir) -> Result<serde_json::Value> {
    let raw = fs::read_to_string(database_path(dir))?;
    Ok(serde_json::from_str(&raw)?)
}

/// Simulate the front-end server assigning a project after our run.
fn assign_project(dir: &TempDir, group: &str, team: &str, project: &str) -> Result<()> {
    let mut value = read_output(dir)?;
    value["grupos"][group]["proyectos_asignados"][team] = serde_json::json!(project);
    fs::write(database_path(dir), serde_json::to_vec_pretty(&value)?)?;
    Ok(())
}

#[test]
fn default_rebuild_resets_assignments() -> Result<()> {
    let temp_dir = TempDir::new()?;
    fs::write(temp_dir.path().join("1D_equipos.csv"), ROSTER)?;

    run(config_for(&temp_dir, false))?;
    assign_project(&temp_dir, "1D", "Equipo 1", "p03")?;

    run(config_for(&temp_dir, false))?;

    let value = read_output(&temp_dir)?;
    assert_eq!(
        value["grupos"]["1D"]["proyectos_asignados"],
        serde_json::json!({})
    );
    Ok(())
}

#[test]
fn preserving_rebuild_keeps_assignments() -> Result<()> {
    let temp_dir = TempDir::new()?;
    fs::write(temp_dir.path().join("1D_equipos.csv"), ROSTER)?;

    run(config_for(&temp_dir, true))?;
    assign_project(&temp_dir, "1D", "Equipo 1", "p03")?;
    assign_project(&temp_dir, "1D", "Equipo 2", "p05")?;

    run(config_for(&temp_dir, true))?;

    let value = read_output(&temp_dir)?;
    assert_eq!(
        value["grupos"]["1D"]["proyectos_asignados"],
        serde_json::json!({"Equipo 1": "p03", "Equipo 2": "p05"})
    );
    // The roster itself is still rebuilt from the source file.
    assert_eq!(
        value["grupos"]["1D"]["equipos"]["Equipo 1"],
        serde_json::json!(["Ana"])
    );
    Ok(())
}

#[test]
fn preserving_rebuild_works_without_a_prior_document() -> Result<()> {
    let temp_dir = TempDir::new()?;
    fs::write(temp_dir.path().join("1D_equipos.csv"), ROSTER)?;

    run(config_for(&temp_dir, true))?;

    let value = read_output(&temp_dir)?;
    assert_eq!(
        value["grupos"]["1D"]["proyectos_asignados"],
        serde_json::json!({})
    );
    Ok(())
}
