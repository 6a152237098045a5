use axum::http::StatusCode;
use maud::{DOCTYPE, Markup, html};

use crate::{
    entities::movie,
    models::{EditErrors, EditForm, SearchCandidate, poster_url},
};

const TAILWIND_CDN: &str = "https://cdn.tailwindcss.com";
const THUMBNAIL_BASE: &str = "https://image.tmdb.org/t/p/w92";

const INPUT_CLASS: &str = "mt-2 w-full rounded-md border border-gray-300 px-3 py-2 focus:border-blue-500 focus:outline-none focus:ring-1 focus:ring-blue-500";
const BUTTON_CLASS: &str =
    "w-full rounded-md bg-blue-600 px-4 py-2 font-semibold text-white hover:bg-blue-700";

/// The home page. `movies` must already be in display order.
pub fn list_page(movies: &[movie::Model]) -> String {
    page(
        "My Top Movies",
        html! {
            div class="min-h-screen bg-gray-50" {
                div class="max-w-4xl mx-auto px-6 py-10" {
                    div class="flex items-start justify-between gap-6" {
                        div {
                            h1 class="text-3xl font-bold text-gray-900" { "My Top Movies" }
                            p class="mt-2 text-gray-600" { "These are my all-time favourite movies." }
                        }
                        a class="rounded-md bg-blue-600 px-4 py-2 text-sm font-semibold text-white hover:bg-blue-700" href="/add" { "Add Movie" }
                    }

                    @if movies.is_empty() {
                        div class="mt-10 bg-white shadow rounded-lg p-8" {
                            p class="text-gray-600" { "Your list is empty. Add a movie to get started." }
                        }
                    } @else {
                        div class="mt-10 space-y-4" {
                            @for movie in movies {
                                (movie_card(movie))
                            }
                        }
                    }
                }
            }
        },
    )
}

fn movie_card(movie: &movie::Model) -> Markup {
    html! {
        div class="bg-white shadow rounded-lg p-6 flex gap-6" {
            @if let Some(img_url) = &movie.img_url {
                img class="w-32 rounded" src=(img_url) alt=(movie.title);
            }
            div class="flex-1" {
                div class="flex items-start justify-between gap-4" {
                    h2 class="text-xl font-semibold text-gray-900" {
                        @if let Some(ranking) = movie.ranking {
                            span class="mr-2 text-gray-400" { "#" (ranking) }
                        }
                        (movie.title)
                        @if let Some(year) = movie.year {
                            span class="ml-2 font-normal text-gray-500" { "(" (year) ")" }
                        }
                    }
                    @if let Some(rating) = movie.rating {
                        span class="rounded bg-yellow-100 px-2 py-1 text-sm font-semibold text-yellow-800" { (rating) }
                    }
                }
                @if let Some(review) = &movie.review {
                    p class="mt-2 italic text-gray-700" { "\u{201c}" (review) "\u{201d}" }
                }
                @if let Some(description) = &movie.description {
                    p class="mt-2 text-sm text-gray-600" { (description) }
                }
                div class="mt-4 flex gap-4 text-sm" {
                    a class="text-blue-600 hover:text-blue-800" href=(format!("/edit?movie_id={}", movie.id)) { "Update" }
                    a class="text-red-600 hover:text-red-800" href=(format!("/delete?movie_id={}", movie.id)) { "Delete" }
                }
            }
        }
    }
}

pub fn edit_page(movie: &movie::Model, form: &EditForm, errors: &EditErrors) -> String {
    page(
        "Edit Movie",
        html! {
            div class="min-h-screen bg-gray-50" {
                div class="max-w-2xl mx-auto px-6 py-12" {
                    div class="bg-white shadow rounded-lg p-8" {
                        h1 class="text-3xl font-bold text-gray-900" { (movie.title) }
                        p class="mt-2 text-gray-600" { "Edit your rating and review." }

                        form class="mt-8 space-y-6" method="post" action=(format!("/edit?movie_id={}", movie.id)) {
                            div {
                                label class="block text-sm font-medium text-gray-700" for="rating" { "Your rating out of 10" }
                                input class=(INPUT_CLASS) name="rating" id="rating" value=(form.rating);
                                (field_error(errors.rating))
                            }

                            div {
                                label class="block text-sm font-medium text-gray-700" for="review" { "Your review" }
                                input class=(INPUT_CLASS) name="review" id="review" value=(form.review);
                                (field_error(errors.review))
                            }

                            button class=(BUTTON_CLASS) type="submit" { "Done" }
                        }
                    }
                }
            }
        },
    )
}

pub fn add_page(form_title: &str, error: Option<&str>) -> String {
    page(
        "Add Movie",
        html! {
            div class="min-h-screen bg-gray-50" {
                div class="max-w-2xl mx-auto px-6 py-12" {
                    div class="bg-white shadow rounded-lg p-8" {
                        h1 class="text-3xl font-bold text-gray-900" { "Add a Movie" }

                        form class="mt-8 space-y-6" method="post" action="/add" {
                            div {
                                label class="block text-sm font-medium text-gray-700" for="title" { "Movie Title" }
                                input class=(INPUT_CLASS) name="title" id="title" value=(form_title);
                                (field_error(error))
                            }

                            button class=(BUTTON_CLASS) type="submit" { "Add Movie" }
                        }
                    }
                }
            }
        },
    )
}

pub fn select_page(query: &str, candidates: &[SearchCandidate]) -> String {
    page(
        "Select Movie",
        html! {
            div class="min-h-screen bg-gray-50" {
                div class="max-w-4xl mx-auto px-6 py-10" {
                    div class="flex items-start justify-between gap-6" {
                        div {
                            h1 class="text-3xl font-bold text-gray-900" { "Select Movie" }
                            p class="mt-2 text-gray-600" { "Results for \u{201c}" (query) "\u{201d}" }
                        }
                        a class="text-sm text-blue-600 hover:text-blue-800" href="/add" { "New search" }
                    }

                    @if candidates.is_empty() {
                        div class="mt-10 bg-white shadow rounded-lg p-8" {
                            p class="text-gray-600" { "No movies matched that title." }
                        }
                    } @else {
                        ul class="mt-10 space-y-3" {
                            @for candidate in candidates {
                                (candidate_row(candidate))
                            }
                        }
                    }
                }
            }
        },
    )
}

fn candidate_row(candidate: &SearchCandidate) -> Markup {
    html! {
        li class="bg-white shadow rounded-lg p-4 flex items-center gap-4" {
            @if let Some(poster_path) = candidate.poster_path.as_deref().filter(|p| !p.is_empty()) {
                img class="w-12 rounded" src=(poster_url(THUMBNAIL_BASE, poster_path)) alt=(candidate.title);
            }
            div {
                a class="font-semibold text-blue-600 hover:text-blue-800" href=(format!("/new_movie?movie_id={}", candidate.id)) {
                    (candidate.title)
                    @if let Some(year) = candidate.year() {
                        " - " (year)
                    }
                }
                @if let Some(overview) = candidate.overview.as_deref().filter(|o| !o.is_empty()) {
                    p class="mt-1 text-sm text-gray-500" { (overview) }
                }
            }
        }
    }
}

fn field_error(message: Option<&str>) -> Markup {
    html! {
        @if let Some(message) = message {
            p class="mt-2 text-sm text-red-600" { (message) }
        }
    }
}

pub fn error_page(status: StatusCode, message: &str) -> String {
    page(
        "Error",
        html! {
            div class="min-h-screen bg-gray-50 flex items-center justify-center" {
                div class="max-w-xl w-full px-6" {
                    div class="bg-white shadow rounded-lg p-8" {
                        h1 class="text-2xl font-bold text-gray-900" { (status.canonical_reason().unwrap_or("Error")) }
                        p class="mt-4 text-gray-700" { (message) }
                        a class="mt-6 inline-block text-blue-600 hover:text-blue-800" href="/" { "Back to my list" }
                    }
                }
            }
        },
    )
}

fn page(title: &str, body: Markup) -> String {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                script src=(TAILWIND_CDN) {}
            }
            body { (body) }
        }
    }
    .into_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(id: i32, title: &str, ranking: Option<i32>) -> movie::Model {
        movie::Model {
            id,
            title: title.to_string(),
            year: Some(1979),
            description: None,
            rating: Some(8),
            ranking,
            review: Some("Tense".to_string()),
            img_url: None,
        }
    }

    #[test]
    fn list_page_links_edit_and_delete_by_id() {
        let html = list_page(&[movie(4, "Alien", Some(1))]);
        assert!(html.contains("Alien"));
        assert!(html.contains("#1"));
        assert!(html.contains("/edit?movie_id=4"));
        assert!(html.contains("/delete?movie_id=4"));
    }

    #[test]
    fn list_page_escapes_titles() {
        let html = list_page(&[movie(1, "<script>alert(1)</script>", None)]);
        assert!(!html.contains("<script>alert"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn edit_page_shows_inline_errors() {
        let form = EditForm { review: String::new(), rating: "abc".into() };
        let errors = form.validate().unwrap_err();
        let html = edit_page(&movie(2, "Heat", None), &form, &errors);
        assert!(html.contains("Please enter a review."));
        assert!(html.contains("Rating must be a whole number."));
        assert!(html.contains("action=\"/edit?movie_id=2\""));
    }

    #[test]
    fn select_page_links_to_new_movie_by_external_id() {
        let candidates = vec![SearchCandidate {
            id: 2109,
            title: "Rush Hour".into(),
            release_date: Some("1998-09-18".into()),
            poster_path: Some("/poster.jpg".into()),
            overview: None,
        }];
        let html = select_page("Rush Hour", &candidates);
        assert!(html.contains("/new_movie?movie_id=2109"));
        assert!(html.contains("1998"));
        assert!(html.contains("https://image.tmdb.org/t/p/w92/poster.jpg"));
    }
}
