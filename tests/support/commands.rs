//! Command helper methods for Test.

use super::Test;
use assert_cmd::Command;
use std::process::Output;

impl Test {
    /// Create a parambulk command bound to this environment's store file.
    ///
    /// Returns a Command configured with:
    /// - HOME and XDG_CONFIG_HOME set to the temporary home directory
    /// - PARAMBULK_STORE_FILE pointing at the temporary store
    /// - Current directory set to the test directory
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("parambulk").expect("failed to find parambulk binary");
        cmd.env("HOME", self.home.path());
        cmd.env("USERPROFILE", self.home.path());
        cmd.env("XDG_CONFIG_HOME", self.home.path());
        cmd.env_remove("PARAMBULK_CONFIG");
        cmd.env_remove("PARAMBULK_BACKEND");
        cmd.env_remove("PARAMBULK_LOG");
        cmd.env("PARAMBULK_STORE_FILE", self.store_path());
        cmd.env("NO_COLOR", "1");
        cmd.current_dir(self.dir.path());
        cmd
    }

    /// Shortcut for `parambulk get <list> [flags]`.
    pub fn get(&self, list: &str, flags: &[&str]) -> Output {
        self.cmd()
            .arg("get")
            .arg(list)
            .args(flags)
            .output()
            .expect("failed to run parambulk get")
    }

    /// Shortcut for `parambulk save <file> [basepath] [flags]`.
    pub fn save(&self, file: &str, base_path: Option<&str>, flags: &[&str]) -> Output {
        let mut cmd = self.cmd();
        cmd.arg("save").arg(file);
        if let Some(base_path) = base_path {
            cmd.arg(base_path);
        }
        cmd.args(flags)
            .output()
            .expect("failed to run parambulk save")
    }

    /// Shortcut for `parambulk compare <left> [right] [flags]`.
    pub fn compare(&self, left: &str, right: Option<&str>, flags: &[&str]) -> Output {
        let mut cmd = self.cmd();
        cmd.arg("compare").arg(left);
        if let Some(right) = right {
            cmd.arg(right);
        }
        cmd.args(flags)
            .output()
            .expect("failed to run parambulk compare")
    }
}
