//! Internal error handling for errgen
//!
//! Ordinary failures (a missing header, an unwritable output) are reported
//! through `main`'s error return. A panic is always a bug in errgen itself;
//! the hook installed here says so and prints what is needed to report it.

use std::panic::PanicHookInfo;

/// Prints the internal error banner around the default panic output
///
/// # Arguments
///
/// * `default_panic_hook` - The previous panic hook, called after the banner.
/// * `panic_info` - Information about the panic that occurred.
fn ice_hook(
    default_panic_hook: &(dyn Fn(&PanicHookInfo<'_>) + Send + Sync),
    panic_info: &PanicHookInfo<'_>,
) {
    eprintln!("error: errgen encountered an internal error: thread panicked");
    eprintln!("note: this is a bug in errgen, not a problem with your header.");
    eprintln!();
    eprintln!(
        "{}",
        super::build_info::version()
            .lines()
            .map(|line| format!("note: {line}"))
            .collect::<Vec<_>>()
            .join("\n")
    );
    eprintln!();
    eprintln!(
        "note: command line arguments: {}",
        std::env::args().collect::<Vec<_>>().join(" ")
    );
    eprintln!();
    default_panic_hook(panic_info);
    eprintln!();
    eprintln!("error: end internal error. no snippet was generated.");
}

/// Configures the global panic hook
///
/// Also forces `RUST_BACKTRACE=1` unless the user asked for `full`. Must be
/// called before any other threads exist.
pub fn setup_panic_hook() {
    let default_panic_hook = std::panic::take_hook();

    std::panic::set_hook(Box::new(move |panic_info| {
        ice_hook(&*default_panic_hook, panic_info);
    }));

    if std::env::var("RUST_BACKTRACE").ok().as_deref() != Some("full") {
        std::env::set_var("RUST_BACKTRACE", "1");
    }
}
