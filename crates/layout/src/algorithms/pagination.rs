use carta_types::Rect;

/// Floating point slack allowed before a block counts as overflowing.
pub const EPSILON: f32 = 0.01;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BreakAnalysis {
    pub should_break: bool,
    pub remaining_height: f32,
}

/// Checks whether a block fits in what is left of the content area.
///
/// * `cursor_y`: current position relative to the top of `bounds`.
/// * `block_height`: height the block will occupy.
/// * `bounds`: the page's content area.
pub fn check_block_fit(cursor_y: f32, block_height: f32, bounds: Rect) -> BreakAnalysis {
    let available = (bounds.height - cursor_y).max(0.0);
    BreakAnalysis {
        should_break: block_height > available + EPSILON,
        remaining_height: available,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn area() -> Rect {
        Rect::new(10.0, 10.0, 190.0, 100.0)
    }

    #[test]
    fn test_exact_fit_does_not_break() {
        let analysis = check_block_fit(60.0, 40.0, area());
        assert!(!analysis.should_break);
        assert_eq!(analysis.remaining_height, 40.0);
    }

    #[test]
    fn test_overflow_breaks() {
        assert!(check_block_fit(60.0, 40.5, area()).should_break);
    }

    #[test]
    fn test_cursor_past_bottom_has_no_room() {
        let analysis = check_block_fit(120.0, 1.0, area());
        assert_eq!(analysis.remaining_height, 0.0);
        assert!(analysis.should_break);
    }
}
