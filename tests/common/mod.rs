use assert_cmd::Command;

pub fn daybook_cmd() -> Command {
    let mut cmd = Command::cargo_bin("daybook").unwrap();
    cmd.env_remove("DAYBOOK_ROOT");
    cmd
}

/// Extract the entry id from "Saved <kind> entry <id>" output
#[allow(dead_code)]
pub fn last_word(output: &[u8]) -> String {
    String::from_utf8_lossy(output)
        .split_whitespace()
        .last()
        .expect("expected command output")
        .to_string()
}
