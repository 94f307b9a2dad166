use std::process::Command;

fn git_output(args: &[&str]) -> Option<String> {
    Command::new("git")
        .args(args)
        .output()
        .ok()
        .filter(|o| o.status.success())
        .and_then(|o| String::from_utf8(o.stdout).ok())
        .map(|s| s.trim().to_string())
}

fn main() {
    let pkg_version = std::env::var("CARGO_PKG_VERSION").unwrap_or_else(|_| "0.0.0".to_string());

    // GITFLEET_VERSION: always clean, used by clap attributes and man pages.
    println!("cargo:rustc-env=GITFLEET_VERSION={pkg_version}");

    // GITFLEET_VERSION_DISPLAY: includes the commit hash for dev builds.
    let display_version = if std::env::var("GITFLEET_BUILD_RELEASE").is_ok() {
        pkg_version
    } else {
        match git_output(&["rev-parse", "--short", "HEAD"]) {
            Some(hash) => {
                println!("cargo:rustc-cfg=gitfleet_dev_build");
                format!("{pkg_version} (dev {hash})")
            }
            None => pkg_version,
        }
    };

    println!("cargo:rustc-env=GITFLEET_VERSION_DISPLAY={display_version}");

    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-env-changed=GITFLEET_BUILD_RELEASE");
}
