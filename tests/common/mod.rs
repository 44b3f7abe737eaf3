use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Roster used by most flows: three departments, IT split over two teams.
pub const FIXTURE_ROSTER: &str = "\
Имя;Департамент;Отдел;Должность;Оценка;Зарплата
Иванов Иван;IT;Backend;Разработчик;4.5;100000
Петров Пётр;IT;Backend;Разработчик;4.0;200000
Сидорова Анна;IT;Frontend;Разработчик;4.8;150000
Кузнецов Олег;Продажи;B2B;Менеджер;3.9;80000
Смирнова Ольга;HR;Recruiting;Рекрутер;4.2;50000
";

pub struct TestEnv {
    _tmp: TempDir,
    pub roster: PathBuf,
    pub report: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        Self::with_roster(FIXTURE_ROSTER)
    }

    pub fn with_roster(contents: &str) -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let roster = tmp.path().join("Corp_Summary.csv");
        fs::write(&roster, contents).expect("write fixture roster");
        let report = tmp.path().join("Report.csv");
        Self {
            _tmp: tmp,
            roster,
            report,
        }
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("kadry");
        cmd.arg("--roster")
            .arg(&self.roster)
            .arg("--output")
            .arg(&self.report);
        cmd
    }

    pub fn run_json(&self, args: &[&str]) -> Value {
        let mut cmd = self.cmd();
        let out = cmd
            .arg("--json")
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }
}
