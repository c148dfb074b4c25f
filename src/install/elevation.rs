use crate::platform::HostPlatform;
use crate::process::ToolCommand;

/// Whether the current process has administrator (Windows) or root rights.
pub(crate) fn is_elevated(platform: HostPlatform) -> bool {
    match platform {
        // `net session` only succeeds from an elevated prompt.
        HostPlatform::Windows => ToolCommand::new("net").arg("session").probe(),
        HostPlatform::Mac | HostPlatform::Linux => ToolCommand::new("id")
            .arg("-u")
            .capture()
            .map(|uid| uid == "0")
            .unwrap_or(false),
    }
}
