//! Line-oriented terminal output.
//!
//! Paths, logs, and hints go to stdout; warnings and errors go to stderr.
//! Color is used on terminals unless `NO_COLOR` is set, and can be forced
//! with `UPM_FORCE_COLOR` or `CLICOLOR_FORCE`.

use std::{
    env,
    fmt::Display,
    io::{self, IsTerminal, Write},
};

use ratatui::{
    crossterm::{
        execute,
        style::{
            Attribute, Color as CrosstermColor, Print, ResetColor, SetAttribute,
            SetForegroundColor, force_color_output,
        },
    },
    style::{Color, Modifier, Style},
};

const FORCE_COLOR_VARS: [&str; 2] = ["UPM_FORCE_COLOR", "CLICOLOR_FORCE"];

#[derive(Clone, Copy)]
enum MessageKind {
    Path,
    Log,
    Hint,
    Warning,
    Error,
}

impl MessageKind {
    fn prefix(self) -> &'static str {
        match self {
            Self::Path => "",
            Self::Log => "log: ",
            Self::Hint => "hint: ",
            Self::Warning => "warning: ",
            Self::Error => "error: ",
        }
    }

    fn uses_stderr(self) -> bool {
        matches!(self, Self::Warning | Self::Error)
    }

    fn style(self) -> Style {
        match self {
            Self::Path => Style::new().fg(Color::Cyan).add_modifier(Modifier::DIM),
            Self::Log => Style::new().fg(Color::Blue).add_modifier(Modifier::DIM),
            Self::Hint => Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            Self::Warning => Style::new()
                .fg(Color::LightYellow)
                .add_modifier(Modifier::BOLD),
            Self::Error => Style::new().fg(Color::Red).add_modifier(Modifier::BOLD),
        }
    }
}

pub(crate) fn print_path(path: impl Display) {
    emit(MessageKind::Path, &path.to_string());
}

pub(crate) fn print_log(message: impl AsRef<str>) {
    emit(MessageKind::Log, message.as_ref());
}

pub(crate) fn print_hint(message: impl AsRef<str>) {
    emit(MessageKind::Hint, message.as_ref());
}

pub(crate) fn print_warning(message: impl AsRef<str>) {
    emit(MessageKind::Warning, message.as_ref());
}

pub(crate) fn print_error(message: impl AsRef<str>) {
    emit(MessageKind::Error, message.as_ref());
}

fn emit(kind: MessageKind, message: &str) {
    let text = format!("{}{message}", kind.prefix());
    if kind.uses_stderr() {
        let mut stderr = io::stderr();
        let use_color = supports_color(stderr.is_terminal());
        write_line(&mut stderr, &text, kind.style(), use_color);
    } else {
        let mut stdout = io::stdout();
        let use_color = supports_color(stdout.is_terminal());
        write_line(&mut stdout, &text, kind.style(), use_color);
    }
}

fn write_line(writer: &mut impl Write, text: &str, style: Style, use_color: bool) {
    if use_color && write_colored_line(writer, text, style).is_ok() {
        return;
    }
    let _ = writeln!(writer, "{text}");
}

fn write_colored_line(writer: &mut impl Write, text: &str, style: Style) -> io::Result<()> {
    if let Some(color) = style.fg {
        execute!(writer, SetForegroundColor(CrosstermColor::from(color)))?;
    }
    if style.add_modifier.contains(Modifier::BOLD) {
        execute!(writer, SetAttribute(Attribute::Bold))?;
    }
    if style.add_modifier.contains(Modifier::DIM) {
        execute!(writer, SetAttribute(Attribute::Dim))?;
    }
    execute!(
        writer,
        Print(text),
        SetAttribute(Attribute::Reset),
        ResetColor,
        Print("\n")
    )
}

fn supports_color(is_terminal: bool) -> bool {
    if FORCE_COLOR_VARS.iter().any(|name| is_enabled(name)) {
        force_color_output(true);
        return true;
    }
    if env::var_os("NO_COLOR").is_some() {
        return false;
    }
    is_terminal
}

fn is_enabled(name: &str) -> bool {
    env::var(name).is_ok_and(|value| value != "0")
}

#[cfg(test)]
mod tests {
    use super::{MessageKind, write_line};

    #[test]
    fn plain_lines_carry_kind_prefix() {
        let mut buffer = Vec::new();
        let kind = MessageKind::Warning;
        write_line(
            &mut buffer,
            &format!("{}git not found", kind.prefix()),
            kind.style(),
            false,
        );
        assert_eq!(
            String::from_utf8(buffer).expect("utf8"),
            "warning: git not found\n"
        );
        assert!(MessageKind::Error.uses_stderr());
        assert!(!MessageKind::Hint.uses_stderr());
    }
}
