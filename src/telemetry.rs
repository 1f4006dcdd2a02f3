//! Optional stderr diagnostics for one-shot runs.

use std::sync::OnceLock;

use tracing_subscriber::fmt::time::UtcTime;

static TRACING_INIT: OnceLock<()> = OnceLock::new();

fn init_tracing_once(verbose: bool, once: &OnceLock<()>) {
    if !verbose {
        return;
    }

    let _ = once.get_or_init(|| {
        let subscriber = tracing_subscriber::fmt()
            .with_timer(UtcTime::rfc_3339())
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_max_level(tracing::Level::DEBUG)
            .finish();
        let _ = tracing::subscriber::set_global_default(subscriber);
    });
}

/// Install the stderr subscriber when verbose output is requested.
///
/// Safe to call more than once; only the first call installs anything.
pub fn init_tracing(verbose: bool) {
    init_tracing_once(verbose, &TRACING_INIT);
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_runs_do_not_install_a_subscriber() {
        let once = OnceLock::new();
        init_tracing_once(false, &once);
        assert!(once.get().is_none());
    }

    #[test]
    fn verbose_runs_install_exactly_once() {
        let once = OnceLock::new();
        init_tracing_once(true, &once);
        init_tracing_once(true, &once);
        assert!(once.get().is_some());
    }
}
