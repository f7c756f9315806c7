//! Star rating and comment feedback.
//!
//! The rating starts at 0 (unrated) and is set by selecting one of five
//! star controls. Selecting `k` sets the rating to exactly `k` whatever it
//! was before; there is no terminal state.

use serde::Serialize;

/// Number of star controls.
pub const MAX_STARS: u8 = 5;

/// A star rating in `0..=5`, 0 meaning "not rated yet".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Rating(u8);

impl Rating {
    /// Rating produced by selecting star control `stars`.
    ///
    /// Returns `None` unless `stars` is in `1..=5`.
    pub fn from_selection(stars: u8) -> Option<Self> {
        (1..=MAX_STARS).contains(&stars).then_some(Self(stars))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Five glyphs, `★` for each filled star and `☆` for the rest.
    pub fn stars(self) -> String {
        (1..=MAX_STARS)
            .map(|i| if i <= self.0 { '★' } else { '☆' })
            .collect()
    }

    pub fn label(self) -> String {
        format!("Your rating: {} star(s)", self.0)
    }
}

/// Feedback gathered during a session. Nothing is persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Feedback {
    pub rating: Rating,
    pub comment: String,
}

impl Feedback {
    /// Select star control `stars`. Out-of-range values leave the rating as is.
    pub fn select(&mut self, stars: u8) -> Option<Rating> {
        let rating = Rating::from_selection(stars)?;
        self.rating = rating;
        Some(rating)
    }

    /// Acknowledgement shown when feedback is submitted.
    pub fn receipt(&self) -> String {
        format!(
            "Thank you for your feedback!\nRating: {} stars\nComment: {}",
            self.rating.value(),
            self.comment
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_rating_is_zero() {
        let feedback = Feedback::default();
        assert_eq!(feedback.rating.value(), 0);
        assert_eq!(feedback.rating.stars(), "☆☆☆☆☆");
        assert_eq!(feedback.rating.label(), "Your rating: 0 star(s)");
    }

    #[test]
    fn test_select_sets_exact_value() {
        let mut feedback = Feedback::default();
        for k in [3, 5, 1, 4, 4, 2] {
            assert_eq!(feedback.select(k), Rating::from_selection(k));
            assert_eq!(feedback.rating.value(), k);
        }
    }

    #[test]
    fn test_select_out_of_range_is_ignored() {
        let mut feedback = Feedback::default();
        feedback.select(4);
        assert_eq!(feedback.select(0), None);
        assert_eq!(feedback.select(6), None);
        assert_eq!(feedback.rating.value(), 4);
    }

    #[test]
    fn test_stars_rendering() {
        assert_eq!(Rating::from_selection(3).unwrap().stars(), "★★★☆☆");
        assert_eq!(Rating::from_selection(5).unwrap().stars(), "★★★★★");
    }

    #[test]
    fn test_receipt() {
        let mut feedback = Feedback::default();
        feedback.select(4);
        feedback.comment = "Nice crop".to_string();
        assert_eq!(
            feedback.receipt(),
            "Thank you for your feedback!\nRating: 4 stars\nComment: Nice crop"
        );
    }
}
