/// Installs a JSON fmt subscriber at INFO. Safe to call more than once; only the first
/// call installs anything.
pub fn setup_tracing() -> bool {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        // disable printing the name of the module in every log line.
        .with_target(false)
        .with_ansi(false)
        .without_time()
        .json()
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use crate::utils::logging::setup_tracing;

    #[test]
    fn test_should_setup_tracing_once() {
        let _ = setup_tracing();
        assert!(!setup_tracing());
    }
}
