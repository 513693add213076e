use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

const CDI_START: &str =
    "----------------------------------------------------------------------------";
const CDI_END: &str =
    "-- S.M.A.R.T. --------------------------------------------------------------";

fn disk_report(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_disk-report"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run disk-report")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

fn write_crystal_report(dir: &Path, name: &str, date: &str, serial: &str, hours: u32) -> PathBuf {
    let text = format!(
        "  Date : {date}\r\n\
         {CDI_START}\r\n\
         \x20          Model : Samsung SSD 870 EVO 1TB\r\n\
         \x20  Serial Number : {serial}\r\n\
         \x20 Power On Hours : {hours} hours\r\n\
         {CDI_END}\r\n"
    );
    let path = dir.join(name);
    fs::write(&path, text).expect("failed to write report");
    path
}

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("../extract/tests/fixtures")
        .join(name)
}

// ---------------------------------------------------------------------------
// Pipeline subcommands
// ---------------------------------------------------------------------------

#[test]
fn crystal_disk_info_writes_deduplicated_csv() {
    let dir = tempfile::tempdir().unwrap();
    write_crystal_report(dir.path(), "CrystalDiskInfo_20240101.txt", "2024/01/01", "SN1", 10);
    write_crystal_report(dir.path(), "CrystalDiskInfo_20240201.txt", "2024/02/01", "SN1", 20);
    write_crystal_report(dir.path(), "CrystalDiskInfo_20240301.txt", "2024/03/01", "SN2", 30);

    let output = disk_report(&["crystal-disk-info", "--dir", dir.path().to_str().unwrap()]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let csv_path = dir.path().join("output_data.csv");
    assert!(stdout(&output).starts_with("Wrote 2 row(s) from 3 report file(s) to "));

    let csv = fs::read_to_string(&csv_path).unwrap();
    let lines: Vec<_> = csv.lines().collect();
    assert_eq!(
        lines[0],
        "make,model,firmware,serial_number,size_gb,rotation_rate,interface,power_on_hours,\
         power_on_count,health_status,host_reads_GB,host_writes_GB,NAND_writes_GB,info_date"
    );
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[1], "Samsung,SSD 870 EVO 1TB,,SN1,,,,20,,,,,,2024/02/01");
    assert_eq!(lines[2], "Samsung,SSD 870 EVO 1TB,,SN2,,,,30,,,,,,2024/03/01");
}

#[test]
fn output_flag_redirects_csv() {
    let dir = tempfile::tempdir().unwrap();
    let out_dir = tempfile::tempdir().unwrap();
    write_crystal_report(dir.path(), "CrystalDiskInfo_1.txt", "d", "SN", 1);
    let csv_path = out_dir.path().join("disks.csv");

    let output = disk_report(&[
        "crystal-disk-info",
        "--dir",
        dir.path().to_str().unwrap(),
        "--output",
        csv_path.to_str().unwrap(),
    ]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(csv_path.exists());
    assert!(!dir.path().join("output_data.csv").exists());
}

#[test]
fn config_file_supplies_directory_and_trace() {
    let dir = tempfile::tempdir().unwrap();
    write_crystal_report(dir.path(), "CrystalDiskInfo_1.txt", "d", "TRACED", 1);
    let config_path = dir.path().join("disk-report.yml");
    fs::write(
        &config_path,
        format!("source_directory: {}\ntrace: true\n", dir.path().display()),
    )
    .unwrap();

    let output = disk_report(&["crystal-disk-info", "--config", config_path.to_str().unwrap()]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(dir.path().join("output_data.csv").exists());
    let log = stderr(&output);
    assert!(log.contains("Read from report"), "log: {log}");
    assert!(log.contains("TRACED"), "log: {log}");
}

#[test]
fn hd_sentinel_fixture_directory() {
    let dir = tempfile::tempdir().unwrap();
    fs::copy(
        fixture("Disk report - WD Red.txt"),
        dir.path().join("Disk report - WD Red.txt"),
    )
    .unwrap();

    let output = disk_report(&["hd-sentinel", "--dir", dir.path().to_str().unwrap()]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let csv = fs::read_to_string(dir.path().join("output_data.csv")).unwrap();
    let lines: Vec<_> = csv.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].ends_with("info_date,owner,listed,sold,sold_date,price"));
    assert!(lines[1].starts_with("WDC,WD40EFRX-68N32N0,"), "row: {}", lines[1]);
    assert!(lines[1].contains(",WD-WCC7K1234567,4000.8,5400,"), "row: {}", lines[1]);
    assert!(lines[1].ends_with(",2024-03-05 18:42:10,,,,,"), "row: {}", lines[1]);
}

#[test]
fn missing_directory_fails_with_message() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope");

    let output = disk_report(&["hd-sentinel", "--dir", missing.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).starts_with("error: "), "stderr: {}", stderr(&output));
    assert!(!missing.join("output_data.csv").exists());
}

#[test]
fn undecodable_report_aborts_run() {
    let dir = tempfile::tempdir().unwrap();
    write_crystal_report(dir.path(), "CrystalDiskInfo_1.txt", "d", "OK", 1);
    fs::write(dir.path().join("CrystalDiskInfo_2.txt"), b"Model : \xff\xfe\r\n").unwrap();

    let output = disk_report(&["crystal-disk-info", "--dir", dir.path().to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("CrystalDiskInfo_2.txt"));
    assert!(!dir.path().join("output_data.csv").exists());
}

// ---------------------------------------------------------------------------
// parse-file
// ---------------------------------------------------------------------------

#[test]
fn parse_file_prints_records_as_json() {
    let input = fixture("CrystalDiskInfo_20240210211403.txt");
    let output = disk_report(&[
        "parse-file",
        "--format",
        "crystal-disk-info",
        "--input",
        input.to_str().unwrap(),
    ]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let records: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    let records = records.as_array().unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["serial_number"], "S6PTNZ0R612345A");
    assert_eq!(records[1]["make"], "Seagate");
    assert_eq!(records[0]["info_date"], "2024/02/10 21:14:03");
}

#[test]
fn parse_file_does_not_write_csv() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_crystal_report(dir.path(), "CrystalDiskInfo_1.txt", "d", "SN", 5);

    let output = disk_report(&[
        "parse-file",
        "--format",
        "crystal-disk-info",
        "--input",
        input.to_str().unwrap(),
    ]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(!dir.path().join("output_data.csv").exists());
    assert!(stdout(&output).contains("\"power_on_hours\": \"5\""));
}

#[test]
fn parse_file_missing_input_fails() {
    let dir = tempfile::tempdir().unwrap();
    let output = disk_report(&[
        "parse-file",
        "--format",
        "hd-sentinel",
        "--input",
        dir.path().join("absent.txt").to_str().unwrap(),
    ]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).starts_with("error: "));
}
