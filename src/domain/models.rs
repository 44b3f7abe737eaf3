use serde::Serialize;

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

/// One parsed roster record. Immutable once parsed.
#[derive(Debug, Clone, Serialize)]
pub struct Employee {
    pub name: String,
    pub job_title: String,
    pub review_score: f64,
    pub salary: i64,
}

#[derive(Debug, Serialize)]
pub struct Team {
    pub name: String,
    pub employees: Vec<Employee>,
}

#[derive(Debug, Serialize)]
pub struct Department {
    pub name: String,
    pub teams: Vec<Team>,
}

/// The whole roster tree, department → team → employees.
///
/// Departments and teams keep first-seen order; the hierarchy display
/// depends on it. The roster exclusively owns everything nested under it
/// and is read-only after the initial build.
#[derive(Debug, Default, Serialize)]
pub struct Roster {
    pub departments: Vec<Department>,
}

/// Per-department salary statistics.
///
/// `min_salary <= avg_salary <= max_salary`; `headcount` covers every record
/// in every team of the department.
#[derive(Debug, Clone, Serialize)]
pub struct DepartmentSummary {
    pub department: String,
    pub headcount: usize,
    pub min_salary: i64,
    pub max_salary: i64,
    pub avg_salary: f64,
}

/// Summary rows in department insertion order. Recomputed from the roster on
/// every report request, never patched incrementally.
#[derive(Debug, Serialize)]
pub struct SummaryReport {
    pub rows: Vec<DepartmentSummary>,
}

/// Department/team names only, for `hierarchy --json`.
#[derive(Debug, Serialize)]
pub struct HierarchyEntry {
    pub department: String,
    pub teams: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct ExportOutcome {
    pub path: String,
    pub rows_written: usize,
}
