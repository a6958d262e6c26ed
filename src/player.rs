use tracing::{
    debug,
    warn,
};

/// Hands a synthesized audio URL to the system's default handler.
///
/// Playback problems are not reported to the user; a refused or missing handler is the
/// desktop counterpart of a browser blocking autoplay.
pub fn play(url: &str) {
    debug!("[Player] Playing {}", url);
    if let Err(e) = open::that_detached(url) {
        warn!("[Player] Could not start playback for {}: {}", url, e);
    }
}
