use assert_cmd::Command;

pub fn semtag_cmd() -> Command {
    let mut cmd = Command::cargo_bin("semtag").unwrap();
    cmd.env_remove("SEMTAG_ROOT");
    cmd
}
