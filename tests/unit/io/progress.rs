//! Tests for page progress tracking

#[cfg(test)]
mod tests {
    use mazepages::io::progress::PageProgress;

    // Tests progress follows the reported page count
    // Verified by incrementing instead of setting the position
    #[test]
    fn test_set_done_tracks_pages() {
        let progress = PageProgress::new(4);
        assert_eq!(progress.done(), 0);

        progress.set_done(1);
        progress.set_done(3);
        assert_eq!(progress.done(), 3);
    }

    // Tests finishing leaves the bar at or past the last reported page
    // Verified by resetting the bar on finish
    #[test]
    fn test_finish_keeps_progress() {
        let progress = PageProgress::new(2);
        progress.set_done(2);
        progress.finish("writing");
        assert_eq!(progress.done(), 2);
    }
}
