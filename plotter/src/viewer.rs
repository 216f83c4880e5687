use std::env;
use std::path::Path;

/// Opens `path` in the desktop's image viewer.
///
/// Nothing happens without a display, and a viewer that fails to start is
/// only logged: showing the plot never fails the run.
pub fn show<P: AsRef<Path>>(path: P) {
    let path = path.as_ref();
    if !display_available(|name| env::var_os(name).is_some()) {
        info!("no display available, not showing {}", path.display());
        return;
    }
    info!("showing {}", path.display());
    if let Err(e) = open::that(path) {
        warn!("could not display {}: {}", path.display(), e);
    }
}

/// Whether a graphical session is reachable, given a lookup for set
/// environment variables. Only X11/Wayland platforms can be headless here.
pub fn display_available<F: Fn(&str) -> bool>(is_set: F) -> bool {
    if cfg!(any(
        target_os = "linux",
        target_os = "freebsd",
        target_os = "openbsd",
        target_os = "netbsd",
        target_os = "dragonfly"
    )) {
        is_set("DISPLAY") || is_set("WAYLAND_DISPLAY")
    } else {
        true
    }
}
