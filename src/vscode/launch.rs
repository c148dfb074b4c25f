use std::path::PathBuf;

use anyhow::Result;
use serde_json::{Map, Value, json};

use crate::platform::{HostPlatform, join_segments};

use super::{IdeContext, append_to_array, path_string};

const ENGINE_SOURCE_MAP_KEY: &str = "D:\\build\\++UE5\\Sync";

pub(crate) fn extend(document: &mut Value, ctx: &IdeContext) -> Result<()> {
    append_to_array(document, "configurations", configurations(ctx))
}

/// Editor and game launch configurations, in that order.
pub(crate) fn configurations(ctx: &IdeContext) -> Vec<Value> {
    let editor = base_configuration(
        ctx,
        format!("Launch {}Editor (Development)", ctx.project_name),
        editor_binary(ctx),
        vec![path_string(&ctx.uproject_path())],
    );

    let game = base_configuration(
        ctx,
        format!("Launch {} (Development)", ctx.game_name),
        game_binary(ctx),
        Vec::new(),
    );

    vec![Value::Object(editor), Value::Object(game)]
}

fn base_configuration(
    ctx: &IdeContext,
    name: String,
    program: PathBuf,
    args: Vec<String>,
) -> Map<String, Value> {
    let mut configuration = Map::new();
    configuration.insert("name".to_owned(), json!(name));
    configuration.insert("type".to_owned(), json!(ctx.platform.debugger_type()));
    configuration.insert("request".to_owned(), json!("launch"));
    configuration.insert("program".to_owned(), json!(path_string(&program)));
    if !args.is_empty() {
        configuration.insert("args".to_owned(), json!(args));
    }
    configuration.insert("stopAtEntry".to_owned(), json!(false));
    configuration.insert("console".to_owned(), json!("integratedTerminal"));
    if ctx.platform == HostPlatform::Windows {
        let natvis = join_segments(
            &ctx.unreal_path,
            &["Engine", "Extras", "VisualStudioDebugging", "Unreal.natvis"],
        );
        configuration.insert("visualizerFile".to_owned(), json!(path_string(&natvis)));
    }
    configuration.insert(
        "sourceFileMap".to_owned(),
        json!({ ENGINE_SOURCE_MAP_KEY: path_string(&ctx.unreal_path) }),
    );
    configuration
}

fn editor_binary(ctx: &IdeContext) -> PathBuf {
    let segments: &[&str] = match ctx.platform {
        HostPlatform::Windows => &["Engine", "Binaries", "Win64", "UnrealEditor.exe"],
        HostPlatform::Mac => &[
            "Engine",
            "Binaries",
            "Mac",
            "UnrealEditor.app",
            "Contents",
            "MacOS",
            "UnrealEditor",
        ],
        HostPlatform::Linux => &["Engine", "Binaries", "Linux", "UnrealEditor"],
    };
    join_segments(&ctx.unreal_path, segments)
}

fn game_binary(ctx: &IdeContext) -> PathBuf {
    match ctx.platform {
        HostPlatform::Windows => join_segments(
            &ctx.root,
            &["Binaries", "Win64", &format!("{}.exe", ctx.game_name)],
        ),
        HostPlatform::Mac => join_segments(
            &ctx.root,
            &[
                "Binaries",
                "Mac",
                &format!("{}.app", ctx.project_name),
                "Contents",
                "MacOS",
                &ctx.game_name,
            ],
        ),
        HostPlatform::Linux => join_segments(&ctx.root, &["Binaries", "Linux", &ctx.game_name]),
    }
}
