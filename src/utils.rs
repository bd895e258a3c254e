use std::ops::Range;

/// The largest scroll offset that still fills a window of `max_visible` rows.
pub fn max_scroll_offset(len: usize, max_visible: usize) -> usize {
    len.saturating_sub(max_visible)
}

/// Absolute indices of the rows shown by a window of at most `max_visible`
/// rows starting at `offset`. Never extends past `len`.
pub fn visible_range(len: usize, offset: usize, max_visible: usize) -> Range<usize> {
    let start = offset.min(len);
    let end = (start + len.min(max_visible)).min(len);
    start..end
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_is_bounded_by_both_limits() {
        assert_eq!(visible_range(3, 0, 5), 0..3);
        assert_eq!(visible_range(10, 0, 5), 0..5);
        assert_eq!(visible_range(10, 4, 5), 4..9);
        assert_eq!(visible_range(10, 8, 5), 8..10);
        assert_eq!(visible_range(10, 12, 5), 10..10);
        assert_eq!(visible_range(0, 0, 5), 0..0);
        assert_eq!(visible_range(4, 0, 0), 0..0);
    }

    #[test]
    fn max_offset_never_underflows() {
        assert_eq!(max_scroll_offset(10, 5), 5);
        assert_eq!(max_scroll_offset(3, 5), 0);
    }
}
