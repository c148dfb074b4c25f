#![allow(dead_code)]

use std::{
    fs,
    path::{Path, PathBuf},
    process::{Command, Output},
    sync::atomic::{AtomicU64, Ordering},
    time::{SystemTime, UNIX_EPOCH},
};

use serde_json::{Value, json};

static WORKSPACE_COUNTER: AtomicU64 = AtomicU64::new(0);

pub const PROJECT_NAME: &str = "Moonshot";
pub const ENGINE_LOG: &str = "engine-calls.log";

pub struct TestWorkspace {
    root: PathBuf,
}

impl TestWorkspace {
    pub fn new(name: &str) -> Self {
        let mut root = std::env::temp_dir();
        let seq = WORKSPACE_COUNTER.fetch_add(1, Ordering::Relaxed);
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time should be after epoch")
            .as_nanos();
        root.push(format!(
            "upm-tests-{name}-{}-{nanos}-{seq}",
            std::process::id()
        ));
        fs::create_dir_all(&root).expect("failed to create workspace directory");

        Self { root }
    }

    pub fn path(&self) -> &Path {
        &self.root
    }

    pub fn run_cli(&self, args: &[&str]) -> Output {
        self.run_cli_with_env(".", args, &[])
    }

    pub fn run_cli_in(&self, relative_dir: &str, args: &[&str]) -> Output {
        self.run_cli_with_env(relative_dir, args, &[])
    }

    pub fn run_cli_with_env(
        &self,
        relative_dir: &str,
        args: &[&str],
        envs: &[(&str, &str)],
    ) -> Output {
        let mut command = Command::new(env!("CARGO_BIN_EXE_upm"));
        command
            .current_dir(self.root.join(relative_dir))
            .args(args)
            .env("NO_COLOR", "1")
            .env("UPM_DISABLE_CLIPBOARD", "1")
            .env_remove("UPM_FORCE_COLOR")
            .env_remove("CLICOLOR_FORCE");
        for (key, value) in envs {
            command.env(key, value);
        }
        command.output().expect("failed to execute upm")
    }

    pub fn run_changelog(&self, args: &[&str]) -> Output {
        let mut command_args = Vec::with_capacity(args.len() + 1);
        command_args.push("changelog");
        command_args.extend_from_slice(args);
        self.run_cli(&command_args)
    }

    pub fn run_git(&self, args: &[&str]) {
        let status = Command::new("git")
            .current_dir(&self.root)
            .args(args)
            .status()
            .expect("failed to execute git");
        assert!(
            status.success(),
            "git command failed: git {}",
            args.join(" ")
        );
    }

    pub fn git_head(&self) -> String {
        let output = Command::new("git")
            .current_dir(&self.root)
            .args(["rev-parse", "HEAD"])
            .output()
            .expect("failed to execute git");
        assert!(output.status.success(), "git rev-parse HEAD failed");
        String::from_utf8_lossy(&output.stdout).trim().to_owned()
    }

    pub fn write(&self, relative: &str, content: &str) {
        let path = self.root.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("failed to create parent directory");
        }
        fs::write(path, content).expect("failed to write file");
    }

    pub fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.root.join(relative)).expect("failed to read file")
    }

    pub fn read_json(&self, relative: &str) -> Value {
        serde_json::from_str(&self.read(relative)).expect("file should contain JSON")
    }

    /// Write a `config.upm` with every platform section pointing at `unreal`.
    pub fn write_project_config(&self, unreal: &Path) {
        let section = json!({
            "UNREAL_PATH": unreal.display().to_string(),
            "PROJECT_NAME": PROJECT_NAME,
            "GAME_NAME": PROJECT_NAME,
            "EDITOR_NAME": format!("{PROJECT_NAME}Editor"),
            "WORKSPACE_NAME": format!("{PROJECT_NAME}.code-workspace"),
            "CHANGELOG_FILENAME": "Changelog.json",
        });
        let config = json!({
            "Windows": section,
            "Darwin": section,
            "Linux": section,
        });
        self.write(
            "config.upm",
            &serde_json::to_string_pretty(&config).expect("encode config"),
        );
    }

    pub fn write_initial_changelog(&self) {
        self.write(
            "Changelog.json",
            r#"[
    {
        "Version": "0.0.0",
        "PrereleaseType": "Alpha",
        "ReleaseDate": "2024-01-01",
        "Changes": []
    }
]
"#,
        );
    }

    /// Fake engine tree whose scripts append `<script> <args>` to
    /// `engine-calls.log` and exit with `FAKE_ENGINE_EXIT` (default 0).
    #[cfg(unix)]
    pub fn install_fake_engine(&self) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let engine = self.root.join("engine");
        let log = self.root.join(ENGINE_LOG);
        let script = format!(
            "#!/bin/sh\necho \"$(basename \"$0\") $*\" >> \"{}\"\nexit \"${{FAKE_ENGINE_EXIT:-0}}\"\n",
            log.display()
        );
        let scripts = [
            "Engine/Build/BatchFiles/RunUAT.sh",
            "Engine/Build/BatchFiles/Linux/Clean.sh",
            "Engine/Build/BatchFiles/Linux/Build.sh",
            "Engine/Build/BatchFiles/Linux/RunUBT.sh",
            "Engine/Build/BatchFiles/Mac/Clean.sh",
            "Engine/Build/BatchFiles/Mac/Build.sh",
            "Engine/Build/BatchFiles/Mac/Package.sh",
            "Engine/Build/BatchFiles/Mac/RunUBT.sh",
        ];
        for relative in scripts {
            let path = engine.join(relative);
            fs::create_dir_all(path.parent().expect("script parent"))
                .expect("failed to create engine directory");
            fs::write(&path, &script).expect("failed to write fake script");
            fs::set_permissions(&path, fs::Permissions::from_mode(0o755))
                .expect("failed to mark script executable");
        }
        engine
    }

    pub fn engine_calls(&self) -> Vec<String> {
        match fs::read_to_string(self.root.join(ENGINE_LOG)) {
            Ok(log) => log.lines().map(ToOwned::to_owned).collect(),
            Err(_) => Vec::new(),
        }
    }
}

impl Drop for TestWorkspace {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.root);
    }
}

/// Config section and engine platform names for the host running the tests.
pub fn host_section() -> &'static str {
    if cfg!(target_os = "windows") {
        "Windows"
    } else if cfg!(target_os = "macos") {
        "Darwin"
    } else {
        "Linux"
    }
}

pub fn host_engine_platform() -> &'static str {
    if cfg!(target_os = "windows") {
        "Win64"
    } else if cfg!(target_os = "macos") {
        "Mac"
    } else {
        "Linux"
    }
}

pub fn output_stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

pub fn output_stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}
