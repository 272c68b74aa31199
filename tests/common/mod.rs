use assert_cmd::Command;

pub fn headmerge_cmd() -> Command {
    let mut cmd = Command::cargo_bin("headmerge").unwrap();
    cmd.env_remove("HEADMERGE_ROOT");
    cmd.env_remove("HEADMERGE_LAYOUT");
    cmd.env_remove("HEADMERGE_LOG");
    cmd
}
