use std::{fmt, path::PathBuf};

/// Host operating system families the tool knows how to drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum HostPlatform {
    Windows,
    Mac,
    Linux,
}

impl HostPlatform {
    pub(crate) fn current() -> Self {
        if cfg!(target_os = "windows") {
            Self::Windows
        } else if cfg!(target_os = "macos") {
            Self::Mac
        } else {
            Self::Linux
        }
    }

    /// Section name inside `config.upm`.
    pub(crate) fn config_section(self) -> &'static str {
        match self {
            Self::Windows => "Windows",
            Self::Mac => "Darwin",
            Self::Linux => "Linux",
        }
    }

    /// Platform identifier passed to the engine's build scripts.
    pub(crate) fn engine_platform(self) -> &'static str {
        match self {
            Self::Windows => "Win64",
            Self::Mac => "Mac",
            Self::Linux => "Linux",
        }
    }

    pub(crate) fn debugger_type(self) -> &'static str {
        match self {
            Self::Windows => "cppvsdbg",
            Self::Mac | Self::Linux => "lldb",
        }
    }
}

impl fmt::Display for HostPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.config_section())
    }
}

/// Join `/`-separated relative segments onto `base` with native separators.
pub(crate) fn join_segments(base: impl Into<PathBuf>, segments: &[&str]) -> PathBuf {
    let mut path = base.into();
    for segment in segments {
        path.push(segment);
    }
    path
}
