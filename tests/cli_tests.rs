use anyhow::Result;
use predicates::prelude::*;
use std::fs;

mod common;
use common::TestEnv;

#[test]
fn test_version() -> Result<()> {
    let env = TestEnv::new()?;

    env.cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(format!("majortom {}\n", majortom::VERSION));

    Ok(())
}

#[test]
fn test_init_command() -> Result<()> {
    let env = TestEnv::new()?;

    env.cmd()
        .arg("--init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created config file"));

    assert!(env.config_path.exists());
    assert!(env.store_text()?.contains("\"locations\""));

    Ok(())
}

#[test]
fn test_init_already_initialized() -> Result<()> {
    let env = TestEnv::new()?;
    let work = env.mkdir("work")?;

    env.cmd().arg("--init").assert().success();
    env.cmd_in(&work).args(["-a", "work"]).assert().success();
    let before = env.store_text()?;

    env.cmd()
        .arg("--init")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("already exists"));

    assert_eq!(env.store_text()?, before);
    Ok(())
}

#[test]
fn test_missing_store_points_to_init() -> Result<()> {
    let env = TestEnv::new()?;

    env.cmd()
        .assert()
        .code(1)
        .stderr(predicate::str::contains("--init"));

    Ok(())
}

#[test]
fn test_empty_listing_shows_hint() -> Result<()> {
    let env = TestEnv::initialized()?;

    env.cmd()
        .assert()
        .success()
        .stdout(predicate::str::contains("No shortcuts yet"))
        .stdout(predicate::str::contains("Available shortcuts").not());

    Ok(())
}

#[test]
fn test_add_and_resolve_prefix() -> Result<()> {
    let env = TestEnv::initialized()?;
    let project = env.mkdir("code/project-a")?;

    env.cmd_in(&project)
        .args(["-a", "proj-a"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Adding shortcut \"proj-a\""));

    assert!(env.store_text()?.contains("\"proj-a\": \"~/code/project-a\""));

    env.cmd()
        .arg("pro")
        .assert()
        .success()
        .stdout(format!(":{}\n", project.display()));

    Ok(())
}

#[test]
fn test_exact_match_wins() -> Result<()> {
    let env = TestEnv::initialized()?;
    let work = env.mkdir("work")?;
    let workspace = env.mkdir("workspace")?;

    env.cmd_in(&work).args(["-a", "work"]).assert().success();
    env.cmd_in(&workspace)
        .args(["-a", "workspace"])
        .assert()
        .success();

    env.cmd()
        .arg("work")
        .assert()
        .success()
        .stdout(format!(":{}\n", work.display()));

    Ok(())
}

#[test]
fn test_ambiguous_prefix_fails() -> Result<()> {
    let env = TestEnv::initialized()?;
    let a = env.mkdir("a")?;
    let b = env.mkdir("b")?;

    env.cmd_in(&a).args(["-a", "proj-a"]).assert().success();
    env.cmd_in(&b).args(["-a", "proj-b"]).assert().success();

    env.cmd()
        .arg("proj")
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("proj-a, proj-b"));

    Ok(())
}

#[test]
fn test_no_match_fails() -> Result<()> {
    let env = TestEnv::initialized()?;

    env.cmd()
        .arg("nowhere")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("No match found for shortcut \"nowhere\""));

    Ok(())
}

#[test]
fn test_delete() -> Result<()> {
    let env = TestEnv::initialized()?;
    let docs = env.mkdir("docs")?;

    env.cmd_in(&docs).args(["-a", "docs"]).assert().success();

    env.cmd()
        .args(["-d", "doc"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("does not exist"));

    env.cmd()
        .args(["-d", "docs"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleting shortcut \"docs\""));

    env.cmd().arg("docs").assert().code(1);
    Ok(())
}

#[test]
fn test_too_many_arguments_before_loading() -> Result<()> {
    let env = TestEnv::new()?;

    env.cmd()
        .args(["one", "two"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Too many arguments"));

    assert!(!env.config_path.exists());
    Ok(())
}

#[test]
fn test_unknown_flag_exits_with_one() -> Result<()> {
    let env = TestEnv::new()?;
    env.cmd().arg("--bogus").assert().code(1);
    Ok(())
}

#[test]
fn test_listing_marks_current_and_stale() -> Result<()> {
    let env = TestEnv::initialized()?;
    let alpha = env.mkdir("alpha")?;
    let gone = env.mkdir("gone")?;

    env.cmd_in(&gone).args(["-a", "old"]).assert().success();
    env.cmd_in(&alpha).args(["-a", "alpha"]).assert().success();
    fs::remove_dir(&gone)?;

    env.cmd_in(&alpha)
        .assert()
        .success()
        .stdout("Available shortcuts:\n▶ alpha ~/alpha\n  old   ~/gone\n");

    Ok(())
}

#[test]
fn test_config_env_override() -> Result<()> {
    let env = TestEnv::new()?;
    let custom = env.home.join("custom/shortcuts.json");

    env.cmd()
        .env("MAJORTOM_CONFIG", "~/custom/shortcuts.json")
        .arg("--init")
        .assert()
        .success();

    assert!(custom.exists());
    assert!(!env.config_path.exists());
    Ok(())
}

#[test]
fn test_malformed_store_lists_as_empty_with_warning() -> Result<()> {
    let env = TestEnv::initialized()?;
    fs::write(&env.config_path, "{ this is not json")?;

    let output = env
        .cmd()
        .assert()
        .success()
        .stdout(predicate::str::contains("No shortcuts yet"))
        .get_output()
        .clone();

    let stderr = String::from_utf8(output.stderr)?;
    let warnings: Vec<&str> = stderr.lines().filter(|line| !line.trim().is_empty()).collect();
    assert_eq!(warnings.len(), 1, "expected a single warning, got: {stderr:?}");
    assert!(warnings[0].contains("Ignoring unreadable config file"));
    assert!(!stderr.contains("\x1b["), "colors disabled but got: {stderr:?}");

    Ok(())
}

#[test]
fn test_help_mentions_config_location() -> Result<()> {
    let env = TestEnv::new()?;

    env.cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("MAJORTOM_CONFIG"))
        .stdout(predicate::str::contains("Expecting config file to be at"));

    Ok(())
}

#[test]
fn test_shell_init() -> Result<()> {
    let env = TestEnv::new()?;

    env.cmd()
        .args(["--shell-init", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("to() {"));

    Ok(())
}
