//! Build information module

#[doc(hidden)]
#[allow(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    missing_docs,
    clippy::missing_docs_in_private_items,
    clippy::restriction
)]
pub mod build {
    include!(concat!(env!("OUT_DIR"), "/shadow.rs"));
}

/// Returns the string which represents the current errgen version
pub fn version() -> String {
    format!(
        concat!(
            "{name} version {version} ({commit}, {taint_string}) built for {target} on {time}",
            " ({mode} mode)",
            "\n{rust_version} ({rust_channel} on {build_os})\n",
            "{cargo_version}{taint_extra}"
        ),
        name = build::PROJECT_NAME,
        version = build::PKG_VERSION,
        commit = if build::COMMIT_HASH.is_empty() {
            "unknown commit"
        } else {
            build::COMMIT_HASH
        },
        taint_string = if build::GIT_CLEAN {
            "not tainted"
        } else {
            "tainted!"
        },
        target = build::BUILD_TARGET,
        time = build::BUILD_TIME_3339,
        mode = build::BUILD_RUST_CHANNEL,
        rust_version = build::RUST_VERSION,
        rust_channel = build::RUST_CHANNEL,
        build_os = build::BUILD_OS,
        cargo_version = build::CARGO_VERSION,
        taint_extra = tainted_files(build::GIT_CLEAN, build::GIT_STATUS_FILE),
    )
}

/// List the dirty files of a tainted build, one per line, without their
/// `(dirty)`/`(staged)` markers
fn tainted_files(clean: bool, status: &str) -> String {
    if clean {
        return String::new();
    }

    status
        .lines()
        .map(|line| {
            line.strip_suffix(" (dirty)")
                .or_else(|| line.strip_suffix(" (staged)"))
                .unwrap_or(line)
        })
        .fold(String::from("\ntainted files:"), |mut output, file| {
            output.push('\n');
            output.push_str(file);
            output
        })
}
