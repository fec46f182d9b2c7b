//! Tests for batch progress tracking

#[cfg(test)]
mod tests {
    use creaturegen::io::progress::ProgressManager;
    use std::thread;

    // Tests a hidden bar still counts finished avatars
    #[test]
    fn test_hidden_progress_counts() {
        let progress = ProgressManager::new(3, false);

        progress.advance();
        progress.advance();

        assert_eq!(progress.position(), 2);
        progress.finish(2, 0);
    }

    // Tests clones advance the same bar from several threads
    #[test]
    fn test_progress_shared_across_threads() {
        let progress = ProgressManager::new(8, false);

        thread::scope(|scope| {
            for _ in 0..4 {
                let worker = progress.clone();
                scope.spawn(move || {
                    worker.advance();
                    worker.advance();
                });
            }
        });

        assert_eq!(progress.position(), 8);
    }

    // Tests a visible bar can be driven to completion
    #[test]
    fn test_visible_progress_lifecycle() {
        let progress = ProgressManager::new(1, true);

        progress.advance();
        progress.finish(1, 0);

        assert_eq!(progress.position(), 1);
    }
}
