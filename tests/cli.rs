use assert_cmd::Command;
use predicates::str::contains;

fn spooku() -> Command {
  Command::cargo_bin("spooku").expect("binary builds")
}

#[test]
fn suggest_videos_prints_the_fixed_list_and_exits_cleanly() {
  spooku()
    .arg("--suggest-videos")
    .assert()
    .success()
    .stdout(contains("Monster Inc. Theme (EARRAPE)"))
    .stdout(contains("0: "));
}

#[test]
fn a_video_source_flag_is_required() {
  spooku().assert().failure().stderr(contains("required"));
}

#[test]
fn video_source_flags_conflict() {
  spooku()
    .args(["--suggest-videos", "--video_index", "1"])
    .assert()
    .failure()
    .stderr(contains("cannot be used with"));
}

#[test]
fn out_of_range_index_aborts_before_any_device_interaction() {
  // runs to completion immediately: the index check happens before discovery
  spooku()
    .args(["--video_index", "999"])
    .assert()
    .success()
    .stdout(contains("[-] Video index must be below"));
}

#[test]
fn non_integer_index_is_a_usage_error() {
  spooku()
    .args(["--video_index", "first"])
    .assert()
    .failure()
    .stderr(contains("invalid value"));
}
