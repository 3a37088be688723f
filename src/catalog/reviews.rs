// src/catalog/reviews.rs - Reviews and Q&A

//! Review and question records plus the client-side derivations the product
//! page renders: rating stats, filtering, and sorting over static arrays.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductReview {
    pub id: String,
    pub product_id: String,
    pub author: String,
    /// 1..=5
    pub rating: u8,
    pub title: String,
    pub body: String,
    #[serde(default)]
    pub verified_purchase: bool,
    #[serde(default)]
    pub helpful_count: u32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductQuestion {
    pub id: String,
    pub product_id: String,
    pub question: String,
    #[serde(default)]
    pub answer: Option<String>,
    pub asked_at: DateTime<Utc>,
    #[serde(default)]
    pub answered_at: Option<DateTime<Utc>>,
}

impl ProductQuestion {
    pub fn is_answered(&self) -> bool {
        self.answer.as_deref().map(|a| !a.trim().is_empty()).unwrap_or(false)
    }
}

/// Sort orders offered by the reviews section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewSort {
    #[default]
    Newest,
    HighestRated,
    MostHelpful,
}

/// Filters applied before sorting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReviewFilter {
    /// Keep only reviews with exactly this rating
    pub rating: Option<u8>,
    pub verified_only: bool,
}

/// Aggregated rating display data
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RatingStats {
    pub average: f64,
    pub count: usize,
    /// histogram[0] counts 1-star reviews, histogram[4] 5-star
    pub histogram: [u32; 5],
}

impl RatingStats {
    /// Share of reviews at a star level, 0.0..=1.0
    pub fn share(&self, stars: u8) -> f64 {
        if self.count == 0 || !(1..=5).contains(&stars) {
            return 0.0;
        }
        f64::from(self.histogram[usize::from(stars) - 1]) / self.count as f64
    }
}

pub fn rating_stats(reviews: &[ProductReview]) -> RatingStats {
    let mut stats = RatingStats {
        count: reviews.len(),
        ..Default::default()
    };
    let mut sum = 0u32;
    for review in reviews {
        let rating = review.rating.clamp(1, 5);
        sum += u32::from(rating);
        stats.histogram[usize::from(rating) - 1] += 1;
    }
    if stats.count > 0 {
        stats.average = f64::from(sum) / stats.count as f64;
    }
    stats
}

/// Applies filter then sort, returning a fresh list
pub fn filter_and_sort(
    reviews: &[ProductReview],
    filter: ReviewFilter,
    sort: ReviewSort,
) -> Vec<ProductReview> {
    let mut result: Vec<ProductReview> = reviews
        .iter()
        .filter(|r| filter.rating.map_or(true, |rating| r.rating == rating))
        .filter(|r| !filter.verified_only || r.verified_purchase)
        .cloned()
        .collect();

    match sort {
        ReviewSort::Newest => result.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        ReviewSort::HighestRated => {
            result.sort_by(|a, b| b.rating.cmp(&a.rating).then(b.created_at.cmp(&a.created_at)))
        }
        ReviewSort::MostHelpful => result.sort_by(|a, b| {
            b.helpful_count
                .cmp(&a.helpful_count)
                .then(b.created_at.cmp(&a.created_at))
        }),
    }
    result
}

/// Splits questions into (answered, unanswered), preserving order
pub fn split_questions(
    questions: &[ProductQuestion],
) -> (Vec<ProductQuestion>, Vec<ProductQuestion>) {
    questions
        .iter()
        .cloned()
        .partition(ProductQuestion::is_answered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::mock;

    #[test]
    fn test_rating_stats() {
        let reviews = mock::demo_reviews("p1");
        let stats = rating_stats(&reviews);
        assert_eq!(stats.count, 4);
        // ratings 5, 4, 3, 5
        assert_eq!(stats.average, 4.25);
        assert_eq!(stats.histogram, [0, 0, 1, 1, 2]);
        assert_eq!(stats.share(5), 0.5);
    }

    #[test]
    fn test_empty_stats_do_not_divide_by_zero() {
        let stats = rating_stats(&[]);
        assert_eq!(stats.average, 0.0);
        assert_eq!(stats.share(5), 0.0);
    }

    #[test]
    fn test_filter_verified_and_rating() {
        let reviews = mock::demo_reviews("p1");
        let filtered = filter_and_sort(
            &reviews,
            ReviewFilter {
                rating: Some(5),
                verified_only: true,
            },
            ReviewSort::Newest,
        );
        assert_eq!(filtered.len(), 2);
        assert!(filtered.iter().all(|r| r.rating == 5 && r.verified_purchase));
    }

    #[test]
    fn test_sort_orders() {
        let reviews = mock::demo_reviews("p1");

        let newest = filter_and_sort(&reviews, ReviewFilter::default(), ReviewSort::Newest);
        assert!(newest.windows(2).all(|w| w[0].created_at >= w[1].created_at));

        let helpful = filter_and_sort(&reviews, ReviewFilter::default(), ReviewSort::MostHelpful);
        assert!(helpful
            .windows(2)
            .all(|w| w[0].helpful_count >= w[1].helpful_count));

        let rated = filter_and_sort(&reviews, ReviewFilter::default(), ReviewSort::HighestRated);
        assert!(rated.windows(2).all(|w| w[0].rating >= w[1].rating));
    }

    #[test]
    fn test_question_split() {
        let questions = mock::demo_questions("p1");
        let (answered, open) = split_questions(&questions);
        assert_eq!(answered.len(), 1);
        assert_eq!(open.len(), 1);
        assert!(answered[0].is_answered());
    }
}
