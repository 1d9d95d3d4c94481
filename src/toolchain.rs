//! GraalVM toolchain probing
//!
//! Native-image goals need the `native-image` tool inside the configured
//! Java home. When it is missing but the GraalVM component manager (`gu`)
//! is present, the run is aborted with an installation remediation instead
//! of letting the build fail halfway through. With neither tool present we
//! warn and let the build tool report the problem itself.

use std::path::{Path, PathBuf};
use tracing::warn;

/// Goals whose output is a GraalVM native image.
pub const NATIVE_GOALS: &[&str] = &["nativeImage", "dockerBuildNative"];

/// Outcome of the pre-build native-image probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NativeImageCheck {
    /// `native-image` is available, or there is no Java home to probe.
    Ready,
    /// `native-image` is absent but `gu` can install it.
    Missing { gu: PathBuf },
}

pub fn requires_native_image(goal_id: &str) -> bool {
    NATIVE_GOALS.contains(&goal_id)
}

/// Probes the configured Java home for the native-image tool.
///
/// Never a hard failure: with no Java home configured there is nothing to
/// probe, and without `gu` the check degrades to a warning.
pub fn check_native_image(java_home: Option<&Path>) -> NativeImageCheck {
    let home = match java_home {
        Some(home) => home,
        None => return NativeImageCheck::Ready,
    };

    if executable(home, "native-image").is_some() {
        return NativeImageCheck::Ready;
    }

    match executable(home, "gu") {
        Some(gu) => NativeImageCheck::Missing { gu },
        None => {
            warn!(
                java_home = %home.display(),
                "native-image not found and no gu component manager available; proceeding anyway"
            );
            NativeImageCheck::Ready
        }
    }
}

fn executable(java_home: &Path, name: &str) -> Option<PathBuf> {
    let file = if cfg!(windows) {
        format!("{}.cmd", name)
    } else {
        name.to_string()
    };
    let path = java_home.join("bin").join(file);
    if path.is_file() {
        Some(path)
    } else {
        None
    }
}
