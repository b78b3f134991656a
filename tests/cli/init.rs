use anyhow::{Ok, Result};
use serde_json::Value;

use crate::{CliTest, run, stderr, stdout};

#[test]
fn test_init_writes_default_config() -> Result<()> {
    let test = CliTest::new()?;

    let mut cmd = test.command();
    cmd.arg("init");
    let output = run(cmd)?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("Created .keyprunerc.json"));

    let config: Value = serde_json::from_str(&test.read_file(".keyprunerc.json")?)?;
    assert_eq!(config["stringsFile"], "Assets/Strings/fr.json");
    assert_eq!(config["sourceRoots"][1], "../K2CrashHandler");
    assert_eq!(config["strippedPrefixes"][0], "/CrashHandler/");
    Ok(())
}

#[test]
fn test_init_refuses_to_overwrite() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".keyprunerc.json", "{}")?;

    let mut cmd = test.command();
    cmd.arg("init");
    let output = run(cmd)?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains(".keyprunerc.json already exists"));
    assert_eq!(test.read_file(".keyprunerc.json")?, "{}");
    Ok(())
}
