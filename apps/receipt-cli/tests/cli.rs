use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;

fn receipt() -> Command {
    let mut cmd = Command::cargo_bin("receipt").unwrap();
    cmd.env_remove("RECEIPT_LOG")
        .env_remove("RECEIPT_FORMAT")
        .env_remove("RECEIPT_HEADER");
    cmd
}

#[test]
fn prints_receipt_for_arguments() {
    receipt()
        .args(["print", "1 book at 12.49", "1 music CD at 14.99", "1 chocolate bar at 0.85"])
        .assert()
        .success()
        .stdout(
            "1 book: 12.49\n\
             1 music CD: 16.49\n\
             1 chocolate bar: 0.85\n\
             Sales Taxes: 1.50\n\
             Total: 29.83\n",
        );
}

#[test]
fn reads_descriptions_from_stdin() {
    receipt()
        .args(["print", "--header", "Output 2:"])
        .write_stdin("1 imported box of chocolates at 10.00\n1 imported bottle of perfume at 47.50\n")
        .assert()
        .success()
        .stdout(
            "Output 2:\n\
             1 imported box of chocolates: 10.50\n\
             1 imported bottle of perfume: 54.65\n\
             Sales Taxes: 7.65\n\
             Total: 65.15\n",
        );
}

#[test]
fn reads_descriptions_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "1 box of imported chocolates at 11.25").unwrap();

    receipt()
        .args(["print", "--file"])
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::starts_with("1 imported box of chocolates: 11.85\n"));
}

#[test]
fn header_from_environment() {
    receipt()
        .env("RECEIPT_HEADER", "Output 1:")
        .args(["print", "1 book at 12.49"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Output 1:\n1 book: 12.49\n"));
}

#[test]
fn demo_prints_three_receipts() {
    receipt()
        .arg("demo")
        .assert()
        .success()
        .stdout(predicate::str::contains("Output 3:\n"))
        .stdout(predicate::str::contains("Sales Taxes: 6.70\nTotal: 74.68\n"))
        .stdout(predicate::str::contains("Total: 65.15\n\nOutput 3:"));
}

#[test]
fn json_format_flag() {
    receipt()
        .args(["--format", "json", "print", "1 music CD at 14.99"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"total\": \"16.49\""));
}

#[test]
fn json_format_from_environment() {
    receipt()
        .env("RECEIPT_FORMAT", "json")
        .args(["print", "1 music CD at 14.99"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"sales_taxes\": \"1.50\""));
}

#[test]
fn malformed_item_aborts_whole_receipt() {
    receipt()
        .args(["print", "1 book at 12.49", "book at 12.49"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("item 2"))
        .stderr(predicate::str::contains("[qty] [item name] at [cost]"));
}

#[test]
fn non_positive_cost_is_rejected() {
    receipt()
        .args(["print", "1 book at 0.00"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cost must be greater than 0"));
}

#[test]
fn invalid_format_in_environment_is_rejected() {
    receipt()
        .env("RECEIPT_FORMAT", "xml")
        .args(["print", "1 book at 12.49"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid value for RECEIPT_FORMAT"));
}

#[test]
fn logs_go_to_stderr() {
    receipt()
        .env("RECEIPT_LOG", "debug")
        .args(["print", "1 book at 12.49"])
        .assert()
        .success()
        .stdout("1 book: 12.49\nSales Taxes: 0.00\nTotal: 12.49\n")
        .stderr(predicate::str::contains("Receipt generated"));
}

#[test]
fn sub_cent_cost_is_priced() {
    receipt()
        .args(["print", "1 music CD at 0.004"])
        .assert()
        .success()
        .stdout("1 music CD: 0.05\nSales Taxes: 0.05\nTotal: 0.05\n");
}

#[test]
fn receipt_total_overflow_is_rejected() {
    receipt()
        .args(["print", "1 book at 50000000000000000", "1 book at 50000000000000000"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("item 2"))
        .stderr(predicate::str::contains("total is too large"));
}

#[test]
fn oversized_quantity_is_reported() {
    receipt()
        .args(["print", "99999999999999999999 music CD at 14.99"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("quantity is too large"));
}
