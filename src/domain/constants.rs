/// Number of `;`-separated fields in one roster data line:
/// name, department, team, job title, review score, salary.
pub const ROSTER_FIELD_COUNT: usize = 6;

/// Header record of the exported summary CSV. The exact strings are part of
/// the report format consumed downstream; do not translate or reorder.
pub const REPORT_CSV_HEADER: [&str; 5] =
    ["Департамент", "Численность", "Мин ЗП", "Макс ЗП", "Сред ЗП"];
