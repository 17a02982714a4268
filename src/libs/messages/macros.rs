//! Convenience macros for user-facing messaging.
//!
//! Commands print through these macros so output formatting stays in one
//! place; structured diagnostics go through `tracing` instead.

#[macro_export]
macro_rules! msg_print {
    ($msg:expr) => {
        println!("{}", $msg)
    };
    ($msg:expr, $wrap:expr) => {
        if $wrap {
            println!("\n{}\n", $msg)
        } else {
            println!("{}", $msg)
        }
    };
}

#[macro_export]
macro_rules! msg_success {
    ($msg:expr) => {
        println!("{}", $crate::libs::messages::success($msg))
    };
}

#[macro_export]
macro_rules! msg_info {
    ($msg:expr) => {
        println!("{}", $crate::libs::messages::info($msg))
    };
}

#[macro_export]
macro_rules! msg_warning {
    ($msg:expr) => {
        eprintln!("{}", $crate::libs::messages::warning($msg))
    };
}

#[macro_export]
macro_rules! msg_error {
    ($msg:expr) => {
        eprintln!("{}", $crate::libs::messages::error($msg))
    };
}
