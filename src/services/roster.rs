use crate::domain::constants::ROSTER_FIELD_COUNT;
use crate::domain::models::{Department, Employee, Roster, Team};
use std::io::Read;
use std::path::Path;

#[derive(thiserror::Error, Debug)]
pub enum RosterError {
    #[error("roster line {line}: expected {expected} fields, got {found}", expected = ROSTER_FIELD_COUNT)]
    FieldCount { line: u64, found: usize },
    #[error("roster line {line}, field '{field}' (value '{value}'): {message}")]
    BadField {
        line: u64,
        field: &'static str,
        value: String,
        message: String,
    },
}

/// Load and group the roster file. The roster is built once here and stays
/// read-only afterwards.
pub fn load_roster(path: &Path) -> anyhow::Result<Roster> {
    let file = std::fs::File::open(path)
        .map_err(|e| anyhow::anyhow!("cannot open roster file {}: {e}", path.display()))?;
    read_roster(file)
}

/// Parse a semicolon-delimited roster from any reader.
///
/// The first line is a header and is discarded. Each data line must hold
/// exactly six fields: name, department, team, job title, review score,
/// salary. A malformed line aborts the whole read; there is no row-level
/// recovery.
pub fn read_roster<R: Read>(reader: R) -> anyhow::Result<Roster> {
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(b';')
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let mut roster = Roster::default();
    for record in rdr.records() {
        let record = record?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);
        if record.len() != ROSTER_FIELD_COUNT {
            return Err(RosterError::FieldCount {
                line,
                found: record.len(),
            }
            .into());
        }
        let review_score = parse_field::<f64>(&record, 4, "review score", line)?;
        let salary = parse_field::<i64>(&record, 5, "salary", line)?;
        let employee = Employee {
            name: record[0].to_string(),
            job_title: record[3].to_string(),
            review_score,
            salary,
        };
        insert_record(&mut roster, &record[1], &record[2], employee);
    }
    Ok(roster)
}

/// Insert-or-append: find or create the department, then the team, then push
/// the record. Repeated identical inputs append repeated entries.
pub fn insert_record(roster: &mut Roster, department: &str, team: &str, employee: Employee) {
    let dept = department_entry(roster, department);
    let team = team_entry(dept, team);
    team.employees.push(employee);
}

fn department_entry<'a>(roster: &'a mut Roster, name: &str) -> &'a mut Department {
    let idx = match roster.departments.iter().position(|d| d.name == name) {
        Some(i) => i,
        None => {
            roster.departments.push(Department {
                name: name.to_string(),
                teams: Vec::new(),
            });
            roster.departments.len() - 1
        }
    };
    &mut roster.departments[idx]
}

fn team_entry<'a>(dept: &'a mut Department, name: &str) -> &'a mut Team {
    let idx = match dept.teams.iter().position(|t| t.name == name) {
        Some(i) => i,
        None => {
            dept.teams.push(Team {
                name: name.to_string(),
                employees: Vec::new(),
            });
            dept.teams.len() - 1
        }
    };
    &mut dept.teams[idx]
}

fn parse_field<T>(
    record: &csv::StringRecord,
    index: usize,
    field: &'static str,
    line: u64,
) -> Result<T, RosterError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let raw = &record[index];
    raw.trim().parse().map_err(|e: T::Err| RosterError::BadField {
        line,
        field,
        value: raw.to_string(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::{insert_record, read_roster};
    use crate::domain::models::{Employee, Roster};

    fn employee(name: &str, salary: i64) -> Employee {
        Employee {
            name: name.to_string(),
            job_title: "Dev".to_string(),
            review_score: 4.0,
            salary,
        }
    }

    fn total_records(roster: &Roster) -> usize {
        roster
            .departments
            .iter()
            .flat_map(|d| &d.teams)
            .map(|t| t.employees.len())
            .sum()
    }

    #[test]
    fn grouping_preserves_first_seen_order() {
        let mut roster = Roster::default();
        insert_record(&mut roster, "IT", "Backend", employee("a", 1));
        insert_record(&mut roster, "Продажи", "B2B", employee("b", 2));
        insert_record(&mut roster, "IT", "Frontend", employee("c", 3));
        insert_record(&mut roster, "IT", "Backend", employee("d", 4));

        let names: Vec<&str> = roster.departments.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, ["IT", "Продажи"]);
        let it_teams: Vec<&str> = roster.departments[0]
            .teams
            .iter()
            .map(|t| t.name.as_str())
            .collect();
        assert_eq!(it_teams, ["Backend", "Frontend"]);
        assert_eq!(roster.departments[0].teams[0].employees.len(), 2);
    }

    #[test]
    fn duplicate_rows_are_appended_not_deduplicated() {
        let mut roster = Roster::default();
        insert_record(&mut roster, "IT", "Backend", employee("a", 1));
        insert_record(&mut roster, "IT", "Backend", employee("a", 1));
        assert_eq!(total_records(&roster), 2);
    }

    #[test]
    fn reads_header_and_six_field_rows() {
        let data = "Имя;Департамент;Отдел;Должность;Оценка;Зарплата\n\
                    Иванов;IT;Backend;Dev;4.5;100000\n\
                    Петров;IT;Backend;Dev;4.0;200000\n";
        let roster = read_roster(data.as_bytes()).expect("well-formed roster");
        assert_eq!(total_records(&roster), 2);
        assert_eq!(roster.departments[0].teams[0].employees[0].salary, 100000);
        assert_eq!(
            roster.departments[0].teams[0].employees[1].review_score,
            4.0
        );
    }

    #[test]
    fn wrong_field_count_aborts_with_line_number() {
        let data = "h1;h2;h3;h4;h5;h6\nИванов;IT;Backend;Dev;4.5\n";
        let err = read_roster(data.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("line 2"), "got: {err}");
        assert!(err.to_string().contains("got 5"), "got: {err}");
    }

    #[test]
    fn bad_salary_aborts_with_field_context() {
        let data = "h1;h2;h3;h4;h5;h6\nИванов;IT;Backend;Dev;4.5;много\n";
        let err = read_roster(data.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("salary"), "got: {err}");
        assert!(err.to_string().contains("много"), "got: {err}");
    }
}
