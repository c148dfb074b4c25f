use anyhow::Result;
use serde_json::{Value, json};

use crate::engine::BuildType;

use super::{IdeContext, append_to_array, path_string};

const BUILD_PROBLEM_MATCHER: &str = "$msCompile";

pub(crate) fn extend(document: &mut Value, ctx: &IdeContext) -> Result<()> {
    append_to_array(document, "tasks", tasks(ctx))?;
    append_to_array(document, "inputs", inputs(ctx))
}

/// Build tasks followed by changelog tasks; all of them call `upm` directly.
pub(crate) fn tasks(ctx: &IdeContext) -> Vec<Value> {
    let project = &ctx.project_name;
    vec![
        build_task(
            ctx,
            format!("{project} Select-A-Build"),
            "${input:buildType}",
            "${input:targetName}",
            "--build",
        ),
        build_task(
            ctx,
            format!("{project} Select-A-Clean"),
            "${input:buildType}",
            "${input:targetName}",
            "--clean",
        ),
        build_task(
            ctx,
            format!("{project} Development Package"),
            BuildType::Development.as_str(),
            &ctx.game_name,
            "--package",
        ),
        changelog_task(ctx, "Changelog: Add Version", &["add-version"]),
        changelog_task(
            ctx,
            "Changelog: Add Change",
            &["add-change", "${input:changeDescription}"],
        ),
        changelog_task(ctx, "Changelog: Update README", &["update-readme"]),
        changelog_task(ctx, "Changelog: Update INI", &["update-ini"]),
        changelog_task(ctx, "Changelog: Prebuild Updates", &["prebuild"]),
    ]
}

pub(crate) fn inputs(ctx: &IdeContext) -> Vec<Value> {
    let build_types = BuildType::ALL
        .iter()
        .map(|build_type| build_type.as_str())
        .collect::<Vec<_>>();
    vec![
        json!({
            "id": "targetName",
            "type": "pickString",
            "description": "Choose target.",
            "default": ctx.game_name,
            "options": [ctx.game_name, ctx.editor_name],
        }),
        json!({
            "id": "buildType",
            "type": "pickString",
            "description": "Type of build.",
            "default": BuildType::Development.as_str(),
            "options": build_types,
        }),
        json!({
            "id": "changeDescription",
            "type": "promptString",
            "description": "Enter the change description",
        }),
    ]
}

fn build_task(
    ctx: &IdeContext,
    label: String,
    build_type: &str,
    target_name: &str,
    action: &str,
) -> Value {
    json!({
        "label": label,
        "group": "build",
        "command": path_string(&ctx.upm_exe),
        "args": [
            "build",
            "--build-type",
            build_type,
            "--target-name",
            target_name,
            "--project-dir",
            "${workspaceFolder}",
            action,
        ],
        "problemMatcher": BUILD_PROBLEM_MATCHER,
        "type": "shell",
    })
}

fn changelog_task(ctx: &IdeContext, label: &str, args: &[&str]) -> Value {
    let mut task_args = vec!["changelog"];
    task_args.extend_from_slice(args);
    json!({
        "label": label,
        "type": "shell",
        "command": path_string(&ctx.upm_exe),
        "args": task_args,
        "group": "build",
        "problemMatcher": [],
    })
}
