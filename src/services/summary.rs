use crate::domain::models::{Department, DepartmentSummary, Roster, SummaryReport};

/// Running salary statistics for one department.
///
/// Count, min, max and sum stay in integer arithmetic; only the average is
/// computed in floating point, once, when the row is built.
struct SalaryStats {
    headcount: usize,
    min: i64,
    max: i64,
    sum: i64,
}

impl SalaryStats {
    fn seed(salary: i64) -> Self {
        Self {
            headcount: 1,
            min: salary,
            max: salary,
            sum: salary,
        }
    }

    fn update(&mut self, salary: i64) {
        self.headcount += 1;
        self.min = self.min.min(salary);
        self.max = self.max.max(salary);
        self.sum += salary;
    }

    fn into_row(self, department: &str) -> DepartmentSummary {
        DepartmentSummary {
            department: department.to_string(),
            headcount: self.headcount,
            min_salary: self.min,
            max_salary: self.max,
            avg_salary: self.sum as f64 / self.headcount as f64,
        }
    }
}

/// Build the summary report from the roster, one row per department in
/// insertion order. Always a full recomputation.
pub fn summarize(roster: &Roster) -> SummaryReport {
    SummaryReport {
        rows: roster
            .departments
            .iter()
            .filter_map(department_summary)
            .collect(),
    }
}

/// Fold every employee of every team of one department into a summary row.
///
/// Seeds the statistics from the first record, so the row is well-defined
/// for any department with at least one employee. A department without
/// records cannot be built by the roster loader; if one shows up anyway it
/// is skipped rather than divided by.
fn department_summary(dept: &Department) -> Option<DepartmentSummary> {
    let mut salaries = dept
        .teams
        .iter()
        .flat_map(|t| &t.employees)
        .map(|e| e.salary);

    let mut stats = SalaryStats::seed(salaries.next()?);
    for salary in salaries {
        stats.update(salary);
    }
    Some(stats.into_row(&dept.name))
}
