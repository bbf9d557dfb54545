//! Formatting utilities for terminal output

use crate::core::Ladder;

/// Format a ladder as `HOT → DOT → DOG`
#[must_use]
pub fn format_ladder(ladder: &Ladder) -> String {
    ladder
        .words()
        .iter()
        .map(|word| word.to_uppercase())
        .collect::<Vec<_>>()
        .join(" → ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a ladder length, using `-1` when there is no ladder
#[must_use]
pub fn format_length(steps: Option<usize>) -> String {
    steps.map_or_else(|| "-1".to_string(), |steps| steps.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ladder_is_uppercased_with_arrows() {
        let mut ladder = Ladder::new("hot");
        ladder.push("dot");
        ladder.push("dog");
        assert_eq!(format_ladder(&ladder), "HOT → DOT → DOG");
    }

    #[test]
    fn single_word_ladder_has_no_arrows() {
        assert_eq!(format_ladder(&Ladder::new("cat")), "CAT");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }

    #[test]
    fn length_uses_sentinel_for_none() {
        assert_eq!(format_length(Some(4)), "4");
        assert_eq!(format_length(Some(0)), "0");
        assert_eq!(format_length(None), "-1");
    }
}
