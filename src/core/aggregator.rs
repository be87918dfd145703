use crate::domain::model::{RosterRow, Team};

/// Group one file's rows into teams.
///
/// Teams keep the order in which their number first appears in the rows,
/// and members keep row order. Blank or missing member names are filtered
/// out here; a team whose members all filter away is still emitted, empty.
/// Duplicate names are kept as-is.
pub fn group_teams(rows: &[RosterRow]) -> Vec<Team> {
    let mut teams: Vec<Team> = Vec::new();

    for row in rows {
        let index = match teams.iter().position(|t| t.numero == row.equipo) {
            Some(index) => index,
            None => {
                teams.push(Team {
                    numero: row.equipo,
                    nombre: format!("Equipo {}", row.equipo),
                    alumnos: Vec::new(),
                });
                teams.len() - 1
            }
        };

        if let Some(nombre) = &row.alumno {
            if !nombre.trim().is_empty() {
                teams[index].alumnos.push(nombre.clone());
            }
        }
    }

    teams
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn row(equipo: i64, alumno: &str) -> RosterRow {
        RosterRow {
            equipo,
            alumno: Some(alumno.to_string()),
        }
    }

    #[test]
    fn groups_members_by_team_in_row_order() {
        let rows = vec![row(1, "Ana"), row(1, "Beto"), row(2, "Carla")];

        let teams = group_teams(&rows);

        assert_eq!(teams.len(), 2);
        assert_eq!(teams[0].nombre, "Equipo 1");
        assert_eq!(teams[0].alumnos, vec!["Ana", "Beto"]);
        assert_eq!(teams[1].nombre, "Equipo 2");
        assert_eq!(teams[1].alumnos, vec!["Carla"]);
    }

    #[test]
    fn team_order_is_first_seen_not_numeric() {
        let rows = vec![row(10, "Ana"), row(2, "Beto"), row(10, "Carla")];

        let teams = group_teams(&rows);

        let nombres: Vec<&str> = teams.iter().map(|t| t.nombre.as_str()).collect();
        assert_eq!(nombres, vec!["Equipo 10", "Equipo 2"]);
        assert_eq!(teams[0].alumnos, vec!["Ana", "Carla"]);
    }

    #[test]
    fn blank_members_are_filtered_but_the_team_survives() {
        let rows = vec![
            RosterRow {
                equipo: 1,
                alumno: Some("   ".to_string()),
            },
            RosterRow {
                equipo: 1,
                alumno: None,
            },
            row(2, "Beto"),
        ];

        let teams = group_teams(&rows);

        assert_eq!(teams.len(), 2);
        assert_eq!(teams[0].nombre, "Equipo 1");
        assert!(teams[0].alumnos.is_empty());
        assert_eq!(teams[1].alumnos, vec!["Beto"]);
    }

    #[test]
    fn duplicate_names_are_preserved() {
        let rows = vec![row(1, "Ana"), row(1, "Ana")];

        let teams = group_teams(&rows);

        assert_eq!(teams[0].alumnos, vec!["Ana", "Ana"]);
    }

    #[test]
    fn names_keep_their_original_spacing() {
        let rows = vec![row(1, " Ana María ")];

        let teams = group_teams(&rows);

        assert_eq!(teams[0].alumnos, vec![" Ana María "]);
    }

    #[test]
    fn empty_input_produces_no_teams() {
        assert!(group_teams(&[]).is_empty());
    }
}
