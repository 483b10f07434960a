//! Integration tests for the truepath CLI.

use assert_cmd::Command;
use predicates::prelude::*;

fn truepath() -> Command {
    Command::cargo_bin("truepath").unwrap()
}

#[test]
fn nonexistent_path_succeeds_lexically() {
    truepath()
        .arg("/no/such/./x/../y")
        .assert()
        .success()
        .stdout("/no/such/y\n");
}

#[test]
fn logical_mode_does_not_follow_links() {
    truepath()
        .args(["--logical", "/no/such/./x/../y"])
        .assert()
        .success()
        .stdout("/no/such/y\n");
}

#[test]
fn multiple_paths_print_in_order() {
    truepath()
        .args(["/one/./a", "/two/b/.."])
        .assert()
        .success()
        .stdout("/one/a\n/two\n");
}

#[test]
fn zero_flag_nul_terminates() {
    truepath()
        .args(["-z", "/one/a", "/two/b"])
        .assert()
        .success()
        .stdout("/one/a\0/two/b\0");
}

#[test]
fn relative_to_rebases_output() {
    truepath()
        .args(["--relative-to", "/base", "/base/sub/leaf"])
        .assert()
        .success()
        .stdout("sub/leaf\n");
}

#[test]
fn relative_to_self_prints_dot() {
    truepath()
        .args(["--relative-to", "/base", "/base"])
        .assert()
        .success()
        .stdout(".\n");
}

#[test]
fn missing_relative_base_warns_on_stderr() {
    truepath()
        .env_remove("TRUEPATH_LOG_MODE")
        .args(["--relative-to", "/no/such/base", "/no/such/base/x"])
        .assert()
        .success()
        .stdout("x\n")
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn quiet_suppresses_warnings() {
    truepath()
        .env_remove("TRUEPATH_LOG_MODE")
        .args(["--quiet", "--relative-to", "/no/such/base", "/no/such/base/x"])
        .assert()
        .success()
        .stdout("x\n")
        .stderr(predicate::str::is_empty());
}

#[test]
fn json_format_pairs_input_and_canonical() {
    truepath()
        .args(["--format", "json", "/no/such/y"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"input\""))
        .stdout(predicate::str::contains("\"canonical\""))
        .stdout(predicate::str::contains("/no/such/y"));
}

#[test]
fn zero_with_json_is_rejected() {
    truepath()
        .args(["-z", "--format", "json", "/a"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Invalid arguments"));
}

#[cfg(unix)]
mod symlinks {
    use super::*;
    use std::fs;
    use std::os::unix::fs::symlink;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn fixture_root() -> (TempDir, PathBuf) {
        let dir = TempDir::new().unwrap();
        let root = fs::canonicalize(dir.path()).unwrap();
        (dir, root)
    }

    #[test]
    fn follows_symlink_to_target() {
        let (_dir, root) = fixture_root();
        let target = root.join("target");
        let link = root.join("link");
        fs::create_dir(&target).unwrap();
        symlink(&target, &link).unwrap();

        truepath()
            .arg(&link)
            .assert()
            .success()
            .stdout(format!("{}\n", target.display()));
    }

    #[test]
    fn logical_mode_preserves_symlink() {
        let (_dir, root) = fixture_root();
        let target = root.join("target");
        let link = root.join("link");
        fs::create_dir(&target).unwrap();
        symlink(&target, &link).unwrap();

        truepath()
            .args(["--logical"])
            .arg(&link)
            .assert()
            .success()
            .stdout(format!("{}\n", link.display()));
    }

    #[test]
    fn symlink_cycle_terminates() {
        let (_dir, root) = fixture_root();
        let a = root.join("a");
        let b = root.join("b");
        symlink(&b, &a).unwrap();
        symlink(&a, &b).unwrap();

        truepath()
            .arg(&a)
            .assert()
            .success()
            .stdout(format!("{}\n", a.display()));
    }
}
