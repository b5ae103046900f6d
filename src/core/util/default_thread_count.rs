use std::num::NonZeroU32;

/// Number of render threads to use when none is configured.
///
/// Falls back to a single thread if the platform cannot report its parallelism.
#[must_use]
pub fn default_thread_count() -> NonZeroU32 {
    std::thread::available_parallelism()
        .ok()
        .and_then(|n| NonZeroU32::new(u32::try_from(n.get()).unwrap_or(u32::MAX)))
        .unwrap_or(NonZeroU32::MIN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_available_parallelism() {
        let num_avail_threads = std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1) as u32;

        assert_eq!(default_thread_count().get(), num_avail_threads);
    }
}
