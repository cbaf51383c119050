/// Built-in search queries for `--video_index` and `--suggest-videos`.
/// Curated for maximum living-room disruption.
pub const FAVORITES: &[&str] = &[
  "[ASMR] Whispering 750+ Names",
  "Monster Inc. Theme (EARRAPE)",
  "10 Hours of Nyan Cat",
  "HEYYEYAAEYAAAEYAEYAA",
  "Crab Rave"
];

/// Filler lines typed into the search box before the real query when
/// creepy mode is on. Each one is shown, left to sink in, then cleared.
pub const CREEPY_LINES: &[&str] = &[
  "I can see you",
  "Do not turn around",
  "I am right behind you"
];

pub fn favorite(index: usize) -> Option<&'static str> {
  FAVORITES.get(index).copied()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn favorite_resolves_in_range_indices() {
    assert_eq!(favorite(1), Some("Monster Inc. Theme (EARRAPE)"));
  }

  #[test]
  fn favorite_rejects_out_of_range_indices() {
    assert!(favorite(FAVORITES.len()).is_none());
    assert!(favorite(usize::MAX).is_none());
  }

  #[test]
  fn creepy_lines_are_exactly_three() {
    assert_eq!(CREEPY_LINES.len(), 3);
  }
}
