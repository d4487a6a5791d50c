use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn passbook(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("passbook").unwrap();
    cmd.env("PASSBOOK_DATA_DIR", dir.path())
        .env_remove("PASSBOOK_DATA_FILE")
        .env_remove("RUST_LOG");
    cmd
}

fn initialized() -> TempDir {
    let dir = TempDir::new().unwrap();
    passbook(&dir).arg("init").assert().success();
    dir
}

#[test]
fn init_creates_data_file() {
    let dir = TempDir::new().unwrap();

    passbook(&dir)
        .args(["init", "--opening-balance", "25"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created ledger at:"))
        .stdout(predicate::str::contains("Opening balance: $25.00"));

    assert!(dir.path().join("bank_data.txt").exists());
    assert!(dir.path().join("config.json").exists());

    passbook(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Data file already exists"));
}

#[test]
fn missing_data_file_exits_with_error() {
    let dir = TempDir::new().unwrap();

    passbook(&dir)
        .arg("balance")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error opening file for reading"));

    // The name is asked for before the data file is read
    passbook(&dir)
        .write_stdin("Ada\n7\n")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Enter your name: "))
        .stdout(predicate::str::contains("Welcome Ada").not())
        .stderr(predicate::str::contains("Error opening file for reading"));
}

#[test]
fn corrupt_data_file_exits_with_error() {
    let dir = initialized();
    std::fs::write(
        dir.path().join("bank_data.txt"),
        "passbook-ledger v1\n[balance]\nsixty\n",
    )
    .unwrap();

    passbook(&dir)
        .arg("balance")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Corrupt ledger data at line 3"));
}

#[test]
fn one_shot_deposit_and_withdraw() {
    let dir = initialized();

    passbook(&dir)
        .args(["deposit", "100"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deposit successful."))
        .stdout(predicate::str::contains("Your new balance is: $100.00"));

    passbook(&dir)
        .args(["withdraw", "40"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Your new balance is: $60.00"));

    passbook(&dir)
        .args(["withdraw", "1000"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "Invalid withdrawal amount or insufficient funds.",
        ));

    passbook(&dir)
        .args(["deposit", "-5"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid deposit amount."));

    passbook(&dir)
        .arg("balance")
        .assert()
        .success()
        .stdout(predicate::str::contains("$60.00"));

    passbook(&dir)
        .args(["history", "withdrawals"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Withdrawal: 40.00"))
        .stdout(predicate::str::contains("Deposit:").not());
}

#[test]
fn sub_cent_deposit_keeps_file_loadable() {
    let dir = initialized();

    passbook(&dir).args(["deposit", "100"]).assert().success();
    passbook(&dir).args(["deposit", "0.001"]).assert().success();

    passbook(&dir)
        .arg("balance")
        .assert()
        .success()
        .stdout(predicate::str::contains("(2 deposits)"));

    let text = std::fs::read_to_string(dir.path().join("bank_data.txt")).unwrap();
    assert!(text.contains("Deposit: 0.001"));
}

#[test]
fn history_of_empty_ledger() {
    let dir = initialized();

    passbook(&dir)
        .arg("history")
        .assert()
        .success()
        .stdout("No transactions recorded.\n");
}

#[test]
fn menu_session_is_saved_on_exit() {
    let dir = initialized();

    passbook(&dir)
        .write_stdin("Ada\n1\n100\n2\n40\n2\n1000\n6\n7\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Enter your name: "))
        .stdout(predicate::str::contains("Welcome Ada"))
        .stdout(predicate::str::contains(
            "Invalid withdrawal amount or insufficient funds.",
        ))
        .stdout(predicate::str::contains("Your current balance is: $60.00"))
        .stdout(predicate::str::contains(
            "Thank you for using the banking program. Your final balance is: $60.00",
        ));

    // Reload in a fresh process
    passbook(&dir)
        .write_stdin("Ada\n5\n7\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Your balance is: $60.00"))
        .stdout(predicate::str::contains("Deposit: 100.00"))
        .stdout(predicate::str::contains("Withdrawal: 40.00"));
}

#[test]
fn menu_recovers_from_bad_input() {
    let dir = initialized();

    passbook(&dir)
        .arg("menu")
        .write_stdin("Ada\nabc\n42\n1\nlots\n7\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Invalid input. Please enter a valid number.",
        ))
        .stdout(predicate::str::contains("Invalid selection. Please try again."))
        .stdout(predicate::str::contains("Your final balance is: $0.00"));
}

#[test]
fn menu_end_of_input_discards_session() {
    let dir = initialized();

    passbook(&dir)
        .write_stdin("Ada\n1\n50\n")
        .assert()
        .success();

    passbook(&dir)
        .arg("balance")
        .assert()
        .success()
        .stdout(predicate::str::contains("$0.00"));
}

#[test]
fn data_file_flag_overrides_location() {
    let dir = TempDir::new().unwrap();
    let custom = dir.path().join("elsewhere.txt");

    passbook(&dir)
        .arg("--data-file")
        .arg(&custom)
        .arg("init")
        .assert()
        .success();
    passbook(&dir)
        .arg("--data-file")
        .arg(&custom)
        .args(["deposit", "12.5"])
        .assert()
        .success();

    assert!(custom.exists());
    assert!(!dir.path().join("bank_data.txt").exists());
    let text = std::fs::read_to_string(&custom).unwrap();
    assert!(text.contains("Deposit: 12.50"));
}

#[test]
fn legacy_data_file_is_read() {
    let dir = initialized();
    std::fs::write(
        dir.path().join("bank_data.txt"),
        "60\n100 60 \n10/16/2026 09:30:00 Deposit: 100.000000\n10/16/2026 09:31:00 Withdrawal: 40.000000\n",
    )
    .unwrap();

    passbook(&dir)
        .arg("history")
        .assert()
        .success()
        .stdout(
            "10/16/2026 09:30:00 Deposit: 100.00\n10/16/2026 09:31:00 Withdrawal: 40.00\n",
        );
}

#[test]
fn audit_and_export() {
    let dir = initialized();
    passbook(&dir).args(["deposit", "10"]).assert().success();

    passbook(&dir)
        .args(["audit", "--limit", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("DEPOSIT"));

    let output = dir.path().join("ledger.csv");
    passbook(&dir)
        .arg("export")
        .arg(&output)
        .args(["--format", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 1 records"));

    let csv = std::fs::read_to_string(&output).unwrap();
    assert!(csv.starts_with("Kind,Timestamp,Amount"));
}

#[test]
fn config_shows_locations() {
    let dir = TempDir::new().unwrap();

    passbook(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("bank_data.txt"))
        .stdout(predicate::str::contains("File format:     sectioned"));
}
