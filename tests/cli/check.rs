use anyhow::{Ok, Result};
use insta::assert_snapshot;
use pretty_assertions::assert_eq;

use crate::{CliTest, STRINGS_FILE, run, stdout};

const TABLE: &str = r#"{
  "/SettingsPage/Title": "Paramètres",
  "/SettingsPage/Legacy": "Ancien",
  "/SharedStrings/Joints/Head": "Tête"
}"#;

#[test]
fn test_check_reports_unused_keys_without_writing() -> Result<()> {
    let test = CliTest::with_config()?;
    test.write_file(STRINGS_FILE, TABLE)?;
    test.write_file(
        "App/Pages/SettingsPage.cs",
        "Header = LocalizedJsonString(\"/SettingsPage/Title\");\n",
    )?;

    let output = run(test.check_command())?;

    assert_eq!(output.status.code(), Some(1));
    assert_snapshot!(stdout(&output), @r#"
    "/SettingsPage/Legacy" not found in any file!

    ✘ 1 unused key in App/Assets/Strings/fr.json
    Run keyprune prune to remove them.
    "#);
    assert_eq!(test.read_file(STRINGS_FILE)?, TABLE);
    Ok(())
}

#[test]
fn test_check_passes_when_every_key_is_used() -> Result<()> {
    let test = CliTest::with_config()?;
    test.write_file(STRINGS_FILE, TABLE)?;
    test.write_file(
        "App/Pages/SettingsPage.cs",
        "Header = Get(\"/SettingsPage/Title\");\nFooter = Get(\"/SettingsPage/Legacy\");\n",
    )?;

    let output = run(test.check_command())?;

    assert_eq!(output.status.code(), Some(0));
    assert_snapshot!(stdout(&output), @"✓ Checked 3 keys against 1 source file - no unused keys found");
    Ok(())
}

#[test]
fn test_check_missing_strings_file_fails() -> Result<()> {
    let test = CliTest::with_config()?;

    let output = run(test.check_command())?;

    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to read strings file"));
    Ok(())
}
