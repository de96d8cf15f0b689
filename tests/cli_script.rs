use assert_cmd::Command;
use predicates::str::contains;
use tempfile::tempdir;

const INPUT_CSV: &str = "period,revenue_a,revenue_b,revenue_c,operating_expenses,other_expenses,withholdings\n\
2024-01,1000,0,0,200,0,0\n\
2024-02,1000,0,0,200,0,0\n";

#[test]
fn reports_monthly_figures_from_csv() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("entries.csv");
    std::fs::write(&input, INPUT_CSV).unwrap();
    let export = dir.path().join("snapshot.csv");

    let mut cmd = Command::cargo_bin("fiscal_core_cli").unwrap();
    cmd.env("FISCAL_CORE_HOME", dir.path())
        .env("NO_COLOR", "1")
        .arg(&input)
        .arg("--granularity")
        .arg("bimonthly")
        .arg("--export")
        .arg(&export)
        .assert()
        .success()
        .stdout(contains("Monthly report"))
        .stdout(contains("Statistics"))
        .stdout(contains("597,00"))
        .stdout(contains("1.194,00"));

    let snapshot = std::fs::read_to_string(&export).unwrap();
    assert!(snapshot.starts_with("period,revenue_a"));
    assert_eq!(snapshot.lines().count(), 3);
}

#[test]
fn rejects_unknown_granularity() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("entries.csv");
    std::fs::write(&input, INPUT_CSV).unwrap();

    let mut cmd = Command::cargo_bin("fiscal_core_cli").unwrap();
    cmd.env("FISCAL_CORE_HOME", dir.path())
        .arg(&input)
        .arg("--granularity")
        .arg("weekly")
        .assert()
        .failure()
        .stderr(contains("Unsupported granularity"));
}

#[test]
fn rejects_negative_inputs_without_reporting() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("entries.csv");
    std::fs::write(
        &input,
        "period,revenue_a,revenue_b,revenue_c,operating_expenses,other_expenses,withholdings\n\
         2024-01,-5,0,0,0,0,0\n",
    )
    .unwrap();

    let mut cmd = Command::cargo_bin("fiscal_core_cli").unwrap();
    cmd.env("FISCAL_CORE_HOME", dir.path())
        .arg(&input)
        .assert()
        .failure()
        .stderr(contains("revenue_a"));
}
