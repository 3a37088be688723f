// src/ui/components/reviews.rs - Reviews and Q&A sections

use dioxus::prelude::*;

use crate::catalog::reviews::{
    filter_and_sort, rating_stats, split_questions, ProductQuestion, ProductReview, ReviewFilter,
    ReviewSort,
};
use crate::ui::components::RatingStars;
use crate::utils::format::count_label;

/// Reviews tab: rating summary, histogram, sort/filter controls, review list
#[component]
pub fn ReviewsSection(reviews: ReadOnlySignal<Vec<ProductReview>>) -> Element {
    let mut sort = use_signal(|| ReviewSort::Newest);
    let mut filter = use_signal(ReviewFilter::default);

    let stats = use_memo(move || rating_stats(&reviews()));
    let visible = use_memo(move || filter_and_sort(&reviews(), filter(), sort()));

    let stats = stats();
    let visible = visible();

    rsx! {
        div {
            class: "space-y-6",

            // summary header
            div {
                class: "flex items-start space-x-8",
                div {
                    p { class: "text-4xl font-bold text-gray-900", {format!("{:.1}", stats.average)} }
                    RatingStars { rating: stats.average }
                    p { class: "text-sm text-gray-500", {count_label(stats.count, "review", "reviews")} }
                }
                div {
                    class: "flex-1 space-y-1 max-w-xs",
                    for stars in (1u8..=5).rev() {
                        button {
                            key: "{stars}",
                            class: "flex items-center space-x-2 w-full text-sm group",
                            onclick: move |_| filter.with_mut(|f| {
                                f.rating = if f.rating == Some(stars) { None } else { Some(stars) };
                            }),
                            span { class: "w-8 text-gray-600 group-hover:text-gray-900", "{stars}★" }
                            div {
                                class: "flex-1 h-2 bg-gray-200 rounded overflow-hidden",
                                div {
                                    class: "h-full bg-amber-400",
                                    style: format!("width: {:.0}%;", stats.share(stars) * 100.0),
                                }
                            }
                            span {
                                class: "w-6 text-right text-gray-500",
                                "{stats.histogram[usize::from(stars) - 1]}"
                            }
                        }
                    }
                }
            }

            // controls
            div {
                class: "flex items-center space-x-4 text-sm",
                select {
                    class: "px-2 py-1 rounded border border-gray-300",
                    onchange: move |evt| {
                        let next = match evt.value().as_str() {
                            "highest_rated" => ReviewSort::HighestRated,
                            "most_helpful" => ReviewSort::MostHelpful,
                            _ => ReviewSort::Newest,
                        };
                        sort.set(next);
                    },
                    option { value: "newest", "Newest" }
                    option { value: "highest_rated", "Highest rated" }
                    option { value: "most_helpful", "Most helpful" }
                }
                label {
                    class: "flex items-center space-x-2 text-gray-700",
                    input {
                        r#type: "checkbox",
                        checked: filter().verified_only,
                        onchange: move |evt| filter.with_mut(|f| f.verified_only = evt.checked()),
                    }
                    span { "Verified purchases only" }
                }
                if filter().rating.is_some() {
                    button {
                        class: "text-blue-600 hover:underline",
                        onclick: move |_| filter.with_mut(|f| f.rating = None),
                        "Clear star filter"
                    }
                }
            }

            // review list
            if visible.is_empty() {
                p { class: "text-sm text-gray-500", "No reviews match the current filters." }
            }
            for review in visible {
                div {
                    key: "{review.id}",
                    class: "border-b border-gray-200 pb-4 last:border-0",
                    div {
                        class: "flex items-center space-x-3",
                        RatingStars { rating: f64::from(review.rating) }
                        span { class: "font-medium text-gray-900", "{review.title}" }
                        if review.verified_purchase {
                            span {
                                class: "text-xs text-green-700 bg-green-50 rounded px-1.5 py-0.5",
                                "Verified purchase"
                            }
                        }
                    }
                    p { class: "mt-1 text-sm text-gray-700", "{review.body}" }
                    p {
                        class: "mt-1 text-xs text-gray-500",
                        {format!(
                            "{} · {} · {} found this helpful",
                            review.author,
                            review.created_at.format("%b %e, %Y"),
                            review.helpful_count,
                        )}
                    }
                }
            }
        }
    }
}

/// Q&A tab: answered questions first, open questions after
#[component]
pub fn QuestionsSection(questions: ReadOnlySignal<Vec<ProductQuestion>>) -> Element {
    let split = use_memo(move || split_questions(&questions()));
    let (answered, open) = split();

    rsx! {
        div {
            class: "space-y-6",

            if answered.is_empty() && open.is_empty() {
                p { class: "text-sm text-gray-500", "No questions yet. Ask the first one!" }
            }

            if !answered.is_empty() {
                div {
                    h4 {
                        class: "text-sm font-semibold text-gray-900 mb-3",
                        {count_label(answered.len(), "answered question", "answered questions")}
                    }
                    div {
                        class: "space-y-4",
                        for question in answered {
                            div {
                                key: "{question.id}",
                                class: "bg-white rounded-lg border border-gray-200 p-4",
                                p { class: "font-medium text-gray-900", "Q: {question.question}" }
                                if let Some(answer) = &question.answer {
                                    p { class: "mt-2 text-sm text-gray-700", "A: {answer}" }
                                }
                                p {
                                    class: "mt-2 text-xs text-gray-500",
                                    {format!("Asked {}", question.asked_at.format("%b %e, %Y"))}
                                }
                            }
                        }
                    }
                }
            }

            if !open.is_empty() {
                div {
                    h4 {
                        class: "text-sm font-semibold text-gray-900 mb-3",
                        "Waiting for an answer"
                    }
                    div {
                        class: "space-y-4",
                        for question in open {
                            div {
                                key: "{question.id}",
                                class: "bg-gray-50 rounded-lg border border-dashed border-gray-300 p-4",
                                p { class: "font-medium text-gray-700", "Q: {question.question}" }
                                p {
                                    class: "mt-2 text-xs text-gray-500",
                                    {format!("Asked {}", question.asked_at.format("%b %e, %Y"))}
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
