use crate::domain::constants::REPORT_CSV_HEADER;
use crate::domain::models::{HierarchyEntry, Roster, SummaryReport};

/// Console tree of teams nested under departments, in insertion order.
/// The last team of a department gets the closing glyph.
pub fn print_hierarchy(roster: &Roster) {
    for dept in &roster.departments {
        println!("{}", dept.name);
        for (i, team) in dept.teams.iter().enumerate() {
            let glyph = if i + 1 == dept.teams.len() { '╚' } else { '╠' };
            println!("{:5}{glyph}{}", "", team.name);
        }
    }
}

/// Console summary table: dashed rules, centered headers, fixed widths.
/// Min/max are exact integers; only the average carries decimals.
pub fn print_summary_table(report: &SummaryReport) {
    println!("{:-^64}", "");
    print!("{:^15}", REPORT_CSV_HEADER[0]);
    print!("|{:^15}", REPORT_CSV_HEADER[1]);
    for title in &REPORT_CSV_HEADER[2..] {
        print!("|{:^10}", title);
    }
    println!();
    println!("{:-^64}", "");
    for row in &report.rows {
        println!(
            "{:<14} |{:>14} |{:>9} |{:>9} |{:>9.2} ",
            row.department, row.headcount, row.min_salary, row.max_salary, row.avg_salary
        );
    }
    println!("{:-^64}", "");
}

/// Department/team names only, for machine-readable hierarchy output.
pub fn hierarchy_entries(roster: &Roster) -> Vec<HierarchyEntry> {
    roster
        .departments
        .iter()
        .map(|d| HierarchyEntry {
            department: d.name.clone(),
            teams: d.teams.iter().map(|t| t.name.clone()).collect(),
        })
        .collect()
}
