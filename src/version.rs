use crossterm::{
    execute,
    style::{Color, Print, ResetColor, SetForegroundColor},
};
use std::io::stdout;

pub const CURRENT_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const CRATE_NAME: &str = env!("CARGO_PKG_NAME");

/// Lines of a bordered box sized to its widest line.
pub fn status_box_lines(lines: &[String]) -> Vec<String> {
    let max_content_width = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
    let inner = max_content_width + 2;
    let mut out = Vec::with_capacity(lines.len() + 2);
    out.push(format!("╔{:═<inner$}╗", ""));
    for line in lines {
        out.push(format!("║ {line:<max_content_width$} ║"));
    }
    out.push(format!("╚{:═<inner$}╝", ""));
    out
}

/// Prints a bordered status box in white.
pub fn print_version_status_box(lines: &[String]) {
    let text: String = status_box_lines(lines)
        .into_iter()
        .map(|l| format!("{l}\n"))
        .collect();
    execute!(
        stdout(),
        SetForegroundColor(Color::AnsiValue(231)),
        Print(text),
        ResetColor
    )
    .ok();
}

pub fn print_logo() {
    execute!(
        stdout(),
        SetForegroundColor(Color::AnsiValue(46)),
        Print(format!(
            "\n{}",
            r#"
████████╗███╗   ███╗     ██████╗██╗   ██╗██████╗
╚══██╔══╝████╗ ████║    ██╔════╝██║   ██║██╔══██╗
   ██║   ██╔████╔██║    ██║     ██║   ██║██████╔╝
   ██║   ██║╚██╔╝██║    ██║     ██║   ██║██╔═══╝
   ██║   ██║ ╚═╝ ██║    ╚██████╗╚██████╔╝██║
   ╚═╝   ╚═╝     ╚═╝     ╚═════╝ ╚═════╝ ╚═╝
"#
        )),
        ResetColor
    )
    .ok();
}

/// Prints the logo and the running version.
pub fn print_version() {
    print_logo();
    println!();
    print_version_status_box(&[
        CRATE_NAME.to_string(),
        String::new(),
        format!("Version: {CURRENT_VERSION}"),
    ]);
}
