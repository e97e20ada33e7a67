use assert_cmd::Command;

pub fn eogtricks_cmd() -> Command {
    let mut cmd = Command::cargo_bin("eogtricks").unwrap();
    cmd.env_remove("EOGTRICKS_ROOT");
    cmd.env_remove("EOGTRICKS_DEBUG");
    cmd.env_remove("RUST_LOG");
    cmd
}
