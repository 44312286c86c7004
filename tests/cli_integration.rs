use assert_cmd::Command;
use predicates::prelude::*;

fn cardz(home: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("cardz").unwrap();
    cmd.env("CARDZ_HOME", home);
    cmd
}

#[test]
fn add_list_show_delete_round_trip() {
    let temp_dir = tempfile::tempdir().unwrap();

    cardz(temp_dir.path())
        .args([
            "add",
            "--brand",
            "Amazon",
            "--amount",
            "50",
            "--currency",
            "USD",
            "--expires",
            "31-12-2030",
            "--number",
            "4111222233334444",
        ])
        .assert()
        .success()
        .stdout(predicates::str::contains("Card added: Amazon"));

    cardz(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicates::str::contains("Amazon"))
        .stdout(predicates::str::contains("$50.00"))
        .stdout(predicates::str::contains("Dec 31, 2030"));

    // Card number is masked unless revealed.
    cardz(temp_dir.path())
        .args(["show", "1"])
        .assert()
        .success()
        .stdout(predicates::str::contains("•••• 4444"))
        .stdout(predicates::str::contains("4111222233334444").not());

    cardz(temp_dir.path())
        .args(["show", "1", "--reveal"])
        .assert()
        .success()
        .stdout(predicates::str::contains("4111222233334444"));

    cardz(temp_dir.path())
        .args(["delete", "1"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Card deleted: Amazon"));

    cardz(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicates::str::contains("No gift cards found."));
}

#[test]
fn edit_keeps_unspecified_fields() {
    let temp_dir = tempfile::tempdir().unwrap();

    cardz(temp_dir.path())
        .args([
            "add", "--brand", "Steam", "--amount", "20", "--expires", "01-06-2031",
        ])
        .assert()
        .success();

    cardz(temp_dir.path())
        .args(["edit", "1", "--amount", "12.50"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Card updated: Steam"));

    cardz(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicates::str::contains("Steam"))
        .stdout(predicates::str::contains("$12.50"))
        .stdout(predicates::str::contains("Jun 1, 2031"));
}

#[test]
fn list_filters_by_currency() {
    let temp_dir = tempfile::tempdir().unwrap();

    cardz(temp_dir.path())
        .args([
            "add", "--brand", "Amazon", "--amount", "50", "--currency", "USD", "--expires",
            "31-12-2030",
        ])
        .assert()
        .success();
    cardz(temp_dir.path())
        .args([
            "add", "--brand", "Zalando", "--amount", "30", "--currency", "EUR", "--expires",
            "31-12-2030",
        ])
        .assert()
        .success();

    cardz(temp_dir.path())
        .args(["list", "--currency", "eur"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Zalando"))
        .stdout(predicates::str::contains("Amazon").not());
}

#[test]
fn rejects_invalid_form_input() {
    let temp_dir = tempfile::tempdir().unwrap();

    cardz(temp_dir.path())
        .args([
            "add", "--brand", "Amazon", "--amount", "50", "--expires", "30-02-2030",
        ])
        .assert()
        .failure()
        .stderr(predicates::str::contains("Please enter a valid date"));

    cardz(temp_dir.path())
        .args([
            "add", "--brand", "Amazon", "--amount", "50", "--expires", "01-01-2020",
        ])
        .assert()
        .failure()
        .stderr(predicates::str::contains(
            "Expiration date must be today or in the future",
        ));

    cardz(temp_dir.path())
        .args([
            "add", "--brand", "Amazon", "--amount", "0", "--expires", "31-12-2030",
        ])
        .assert()
        .failure()
        .stderr(predicates::str::contains("Amount must be greater than 0"));

    // Nothing was persisted by the rejected adds.
    cardz(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicates::str::contains("No gift cards found."));
}

#[test]
fn show_of_missing_position_fails_cleanly() {
    let temp_dir = tempfile::tempdir().unwrap();

    cardz(temp_dir.path())
        .args(["show", "3"])
        .assert()
        .failure()
        .stderr(predicates::str::contains("No card at position 3"));
}
