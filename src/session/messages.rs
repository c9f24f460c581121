//! Console messages for session start and for notifications raised by the
//! headless commands.

use crate::cli_messages::{print_error, print_info, print_success, print_warn};
use crate::logging::LogLevel;
use crate::notifications::{NotificationKind, Toasts};

/// Print session startup message
pub fn print_session_starting(mode: &str) {
    print_info(&format!("Starting Interview Buddy in {} mode", mode), "");
}

/// Print session exit message
pub fn print_session_exit_success() {
    print_success("Interview Buddy exited successfully", "");
}

/// Prints every notification raised by a headless command, oldest first.
pub fn print_toasts(toasts: &Toasts) {
    for toast in toasts.iter().filter(|t| t.should_display()) {
        match (toast.kind, toast.log_level) {
            (NotificationKind::Success, _) => print_success(&toast.msg, ""),
            (NotificationKind::Error, _) => print_error(&toast.msg, ""),
            (NotificationKind::Info, LogLevel::Warn | LogLevel::Error) => {
                print_warn(&toast.msg, "")
            }
            (NotificationKind::Info, _) => print_info(&toast.msg, ""),
        }
    }
}
