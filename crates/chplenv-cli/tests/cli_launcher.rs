//! End-to-end tests for the `chpl-launcher` binary.
//!
//! Each test runs the binary with a cleared environment, a temporary `PATH`
//! holding fake executables, and a temporary chplconfig directory.

#![cfg(unix)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::process::{Command, Output};

use tempfile::{TempDir, tempdir};

struct Sandbox {
    bin: TempDir,
    config: TempDir,
}

impl Sandbox {
    fn new() -> Self {
        Self {
            bin: tempdir().unwrap(),
            config: tempdir().unwrap(),
        }
    }

    fn install(&self, name: &str) -> &Self {
        let path = self.bin.path().join(name);
        fs::write(&path, "#!/bin/sh\nexit 0\n").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        self
    }

    fn chplconfig(&self, contents: &str) -> &Self {
        fs::write(self.config.path().join("chplconfig"), contents).unwrap();
        self
    }

    fn run(&self, vars: &[(&str, &str)]) -> Output {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_chpl-launcher"));
        cmd.env_clear()
            .env("PATH", self.bin.path())
            .env("CHPL_CONFIG", self.config.path())
            .env("CHPL_HOST_PLATFORM", "linux64");
        for (key, value) in vars {
            cmd.env(key, value);
        }
        cmd.output().expect("failed to run chpl-launcher")
    }
}

fn stdout(output: &Output) -> &str {
    std::str::from_utf8(&output.stdout).unwrap()
}

fn stderr(output: &Output) -> &str {
    std::str::from_utf8(&output.stderr).unwrap()
}

#[test]
fn plain_linux_prints_none() {
    let output = Sandbox::new().run(&[]);

    assert!(output.status.success());
    assert_eq!(stdout(&output), "none\n");
    assert_eq!(stderr(&output), "");
}

#[test]
fn gasnet_udp_prints_amudprun() {
    let output = Sandbox::new().run(&[("CHPL_COMM", "gasnet"), ("CHPL_COMM_SUBSTRATE", "udp")]);

    assert!(output.status.success());
    assert_eq!(stdout(&output), "amudprun\n");
}

#[test]
fn incompatible_override_exits_with_config_error() {
    let output = Sandbox::new().run(&[
        ("CHPL_COMM", "gasnet"),
        ("CHPL_COMM_SUBSTRATE", "udp"),
        ("CHPL_LAUNCHER", "slurm-srun"),
    ]);

    assert_eq!(output.status.code(), Some(78));
    assert_eq!(stdout(&output), "");
    assert!(
        stderr(&output).contains("Error: CHPL_LAUNCHER=slurm-srun is not supported"),
        "{}",
        stderr(&output)
    );
}

#[test]
fn cray_platform_uses_aprun_from_path() {
    let sandbox = Sandbox::new();
    sandbox.install("aprun");

    let output = sandbox.run(&[("CHPL_TARGET_PLATFORM", "cray-xc")]);

    assert!(output.status.success());
    assert_eq!(stdout(&output), "aprun\n");
}

#[test]
fn cray_platform_without_launchers_warns() {
    let output = Sandbox::new().run(&[("CHPL_TARGET_PLATFORM", "hpe-cray-ex")]);

    assert!(output.status.success());
    assert_eq!(stdout(&output), "none\n");
    assert!(
        stderr(&output).contains("Warning: Cannot detect launcher on this system"),
        "{}",
        stderr(&output)
    );
}

#[test]
fn chplconfig_supplies_facts() {
    let sandbox = Sandbox::new();
    sandbox
        .install("salloc")
        .chplconfig("# cluster\nCHPL_TARGET_PLATFORM=cray-cs\nCHPL_COMM_SUBSTRATE=mpi\n");

    let output = sandbox.run(&[]);

    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(stdout(&output), "slurm-gasnetrun_mpi\n");
}

#[test]
fn environment_overrides_chplconfig() {
    let sandbox = Sandbox::new();
    sandbox
        .install("srun")
        .chplconfig("CHPL_LAUNCHER=gasnetrun_ibv\n");

    let output = sandbox.run(&[("CHPL_LAUNCHER", "slurm-srun")]);

    assert!(output.status.success());
    assert_eq!(stdout(&output), "slurm-srun\n");
}

#[test]
fn chplconfig_flag_takes_precedence_over_environment() {
    let sandbox = Sandbox::new();
    let other = tempdir().unwrap();
    fs::write(other.path().join("chplconfig"), "CHPL_LAUNCHER=smp\n").unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_chpl-launcher"))
        .env_clear()
        .env("PATH", sandbox.bin.path())
        .env("CHPL_CONFIG", sandbox.config.path())
        .arg("--chplconfig")
        .arg(other.path())
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(stdout(&output), "smp\n");
}

#[test]
fn unreadable_chplconfig_is_an_io_error() {
    let sandbox = Sandbox::new();
    let path = sandbox.config.path().join("chplconfig");
    fs::write(&path, "CHPL_COMM=gasnet\n").unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o000)).unwrap();

    // Root ignores file permissions.
    if fs::read(&path).is_ok() {
        return;
    }

    let output = sandbox.run(&[]);
    assert_eq!(output.status.code(), Some(74));
    assert_eq!(stdout(&output), "");
}
