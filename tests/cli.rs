//! End-to-end tests for the `gitalias` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const ALIASES: &str = "co = checkout\n\nbr = branch\n\nnot an alias\n\nlg = log \\\n  --oneline \\\n  --graph\n\nhi = !echo \"Hello, World!\"\n";

fn gitalias(dir: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("gitalias"));
    cmd.current_dir(dir);
    cmd.env("HOME", dir);
    cmd.env("GITALIAS_LOG", "error");
    cmd.env_remove("GITALIAS_SOURCE");
    cmd.arg("--no-color");
    cmd
}

fn write_aliases(dir: &Path, content: &str) -> String {
    let path = dir.join("aliases.txt");
    fs::write(&path, content).unwrap();
    path.display().to_string()
}

#[test]
fn check_lists_parsed_aliases_and_warns_on_invalid_lines() {
    let dir = TempDir::new().unwrap();
    let source = write_aliases(dir.path(), ALIASES);

    gitalias(dir.path())
        .args(["check", "--source", &source])
        .assert()
        .success()
        .stdout(predicate::str::contains("co = checkout"))
        .stdout(predicate::str::contains("lg = log --oneline --graph"))
        .stdout(predicate::str::contains("!echo \"Hello, World!\""))
        .stdout(predicate::str::contains("4 aliases parsed"))
        .stderr(predicate::str::contains("skipping invalid line: not an alias"));
}

#[test]
fn check_reads_source_from_environment() {
    let dir = TempDir::new().unwrap();
    let source = write_aliases(dir.path(), "st = status -sb\n");

    gitalias(dir.path())
        .env("GITALIAS_SOURCE", &source)
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("1 aliases parsed"));
}

#[test]
fn check_fails_when_nothing_parses() {
    let dir = TempDir::new().unwrap();
    let source = write_aliases(dir.path(), "\n\njust text\n");

    gitalias(dir.path())
        .args(["check", "--source", &source])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No aliases found"));
}

#[test]
fn check_fails_on_missing_file() {
    let dir = TempDir::new().unwrap();

    gitalias(dir.path())
        .args(["check", "--source", "does-not-exist.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read"));
}

#[test]
fn apply_dry_run_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let source = write_aliases(dir.path(), ALIASES);
    let config = dir.path().join("gitconfig");

    gitalias(dir.path())
        .args(["apply", "--dry-run", "--prompt", "--source", &source])
        .arg("--config-file")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("alias.co = checkout"))
        .stdout(predicate::str::contains("Would set 4 aliases"));

    assert!(!config.exists());
    assert!(!dir.path().join(".bashrc").exists());
}

#[test]
fn apply_with_libgit2_writes_config_file() {
    let dir = TempDir::new().unwrap();
    let source = write_aliases(dir.path(), ALIASES);
    let config = dir.path().join("gitconfig");

    gitalias(dir.path())
        .args(["apply", "--backend", "libgit2", "--source", &source])
        .arg("--config-file")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("Set 4 aliases (libgit2)"));

    let written = fs::read_to_string(&config).unwrap();
    assert!(written.contains("[alias]"));
    assert!(written.contains("co = checkout"));
    assert!(written.contains("lg = log --oneline --graph"));

    gitalias(dir.path())
        .arg("list")
        .arg("--config-file")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("br"))
        .stdout(predicate::str::contains("log --oneline --graph"));
}

#[test]
fn apply_with_prompt_patches_profile_once() {
    let dir = TempDir::new().unwrap();
    let source = write_aliases(dir.path(), "co = checkout\n");
    let config = dir.path().join("gitconfig");
    let profile = dir.path().join(".zshrc");

    for _ in 0..2 {
        gitalias(dir.path())
            .args(["apply", "--backend", "libgit2", "--prompt", "--shell", "zsh"])
            .args(["--source", &source])
            .arg("--config-file")
            .arg(&config)
            .arg("--profile")
            .arg(&profile)
            .assert()
            .success();
    }

    let content = fs::read_to_string(&profile).unwrap();
    assert_eq!(content.matches("# >>> gitalias prompt >>>").count(), 1);
    assert!(content.contains("setopt PROMPT_SUBST"));
}

#[test]
fn apply_fails_without_aliases_and_leaves_config_alone() {
    let dir = TempDir::new().unwrap();
    let source = write_aliases(dir.path(), "");
    let config = dir.path().join("gitconfig");

    gitalias(dir.path())
        .args(["apply", "--backend", "libgit2", "--source", &source])
        .arg("--config-file")
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("No aliases found"));

    assert!(!config.exists());
}

#[test]
fn prompt_add_and_remove() {
    let dir = TempDir::new().unwrap();
    let profile = dir.path().join(".bashrc");
    fs::write(&profile, "export EDITOR=vim\n").unwrap();

    gitalias(dir.path())
        .args(["prompt", "--shell", "bash", "--profile"])
        .arg(&profile)
        .assert()
        .success()
        .stdout(predicate::str::contains("Added prompt block"));
    assert!(fs::read_to_string(&profile).unwrap().contains("__gitalias_branch"));

    gitalias(dir.path())
        .args(["prompt", "--remove", "--shell", "bash", "--profile"])
        .arg(&profile)
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed prompt block"));
    let content = fs::read_to_string(&profile).unwrap();
    assert!(content.starts_with("export EDITOR=vim\n"));
    assert!(!content.contains("__gitalias_branch"));
}

#[test]
fn prompt_rejects_unknown_shell() {
    let dir = TempDir::new().unwrap();

    gitalias(dir.path())
        .args(["prompt", "--shell", "fish"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported shell"));
}

#[test]
fn apply_writes_remaining_aliases_after_a_rejected_name() {
    let dir = TempDir::new().unwrap();
    let source = write_aliases(dir.path(), "co = checkout\nfoo_bar = status\nbr = branch\n");
    let config = dir.path().join("gitconfig");

    gitalias(dir.path())
        .args(["apply", "--backend", "libgit2", "--source", &source])
        .arg("--config-file")
        .arg(&config)
        .assert()
        .failure()
        .stdout(predicate::str::contains("✔ co = checkout"))
        .stdout(predicate::str::contains("✔ br = branch"))
        .stdout(predicate::str::contains("Set 2 aliases (libgit2)"))
        .stderr(predicate::str::contains("✘ foo_bar"))
        .stderr(predicate::str::contains("1 aliases could not be written (foo_bar); 2 applied"));

    let written = fs::read_to_string(&config).unwrap();
    assert!(written.contains("co = checkout"));
    assert!(written.contains("br = branch"));
    assert!(!written.contains("foo_bar"));
}
