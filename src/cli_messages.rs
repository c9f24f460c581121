//! CLI command messaging system
//!
//! Tagged, colored console lines for the headless commands.

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Tag {
    Info,
    Warn,
    Error,
    Success,
}

impl Tag {
    fn label(self) -> &'static str {
        match self {
            Tag::Info => "INFO",
            Tag::Warn => "WARN",
            Tag::Error => "ERROR",
            Tag::Success => "SUCCESS",
        }
    }

    fn color(self) -> &'static str {
        match self {
            Tag::Info => "\x1b[1;36m",
            Tag::Warn => "\x1b[1;33m",
            Tag::Error => "\x1b[1;31m",
            Tag::Success => "\x1b[1;32m",
        }
    }
}

const RESET: &str = "\x1b[0m";

/// Formats one line; details follow the title after a tab when present.
pub fn format_line(tag: Tag, title: &str, details: &str) -> String {
    let mut line = format!("{}[{}]{} {}", tag.color(), tag.label(), RESET, title);
    if !details.is_empty() {
        line.push_str("\t ");
        line.push_str(details);
    }
    line
}

pub fn print_info(title: &str, details: &str) {
    println!("{}", format_line(Tag::Info, title, details));
}

pub fn print_warn(title: &str, details: &str) {
    println!("{}", format_line(Tag::Warn, title, details));
}

pub fn print_error(title: &str, details: &str) {
    println!("{}", format_line(Tag::Error, title, details));
}

pub fn print_success(title: &str, details: &str) {
    println!("{}", format_line(Tag::Success, title, details));
}

/// Macro for print_cmd_info! usage
#[macro_export]
macro_rules! print_cmd_info {
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::print_info($title, &format!($($details)*))
    };
}

/// Macro for print_cmd_warn! usage
#[macro_export]
macro_rules! print_cmd_warn {
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::print_warn($title, &format!($($details)*))
    };
}
