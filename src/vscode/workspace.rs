use serde_json::{Map, Value, json};

use crate::platform::{HostPlatform, join_segments};

use super::{IdeContext, path_string};

const ENGINE_FOLDER_NAME: &str = "UE5";
const RECOMMENDED_EXTENSIONS: &[&str] = &[
    "ms-vscode.cpptools",
    "ms-dotnettools.csharp",
    "ms-vscode.powershell",
    "ms-vscode.cpptools-extension-pack",
    "ms-dotnettools.csdevkit",
];

/// The `.code-workspace` document: project and engine folders side by side.
pub(crate) fn document(ctx: &IdeContext) -> Value {
    let mut settings = Map::new();
    settings.insert("typescript.tsc.autoDetect".to_owned(), json!("off"));
    settings.insert("npm.autoDetect".to_owned(), json!("off"));
    if ctx.platform == HostPlatform::Windows {
        let solution = join_segments(
            &ctx.project_name,
            &[&format!("{}.generated.sln", ctx.project_name)],
        );
        settings.insert("dotnet.defaultSolution".to_owned(), json!(path_string(&solution)));
    }

    json!({
        "folders": [
            { "name": ctx.project_name, "path": "." },
            { "name": ENGINE_FOLDER_NAME, "path": path_string(&ctx.unreal_path) },
        ],
        "settings": settings,
        "extensions": {
            "recommendations": RECOMMENDED_EXTENSIONS,
        },
    })
}
