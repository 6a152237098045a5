use jiff::civil::Date;
use serde::Deserialize;

/// One entry of a TMDB title search, shown on the selection page.
#[derive(Clone, Debug, Deserialize)]
pub struct SearchCandidate {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
}

impl SearchCandidate {
    pub fn year(&self) -> Option<i32> {
        self.release_date.as_deref().and_then(release_year)
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct MovieDetails {
    pub id: i64,
    pub original_title: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
}

/// A movie about to be added to the list. Rating, review and ranking start out empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewMovie {
    pub title: String,
    pub year: Option<i32>,
    pub description: Option<String>,
    pub img_url: Option<String>,
}

impl NewMovie {
    pub fn from_details(details: MovieDetails, image_base_url: &str) -> Self {
        let year = details.release_date.as_deref().and_then(release_year);
        let description = details.overview.filter(|s| !s.trim().is_empty());
        let img_url = details
            .poster_path
            .filter(|p| !p.is_empty())
            .map(|p| poster_url(image_base_url, &p));

        let title = match details.title {
            Some(title) if details.original_title.trim().is_empty() => title,
            _ => details.original_title,
        };

        Self { title, year, description, img_url }
    }
}

pub fn poster_url(image_base_url: &str, poster_path: &str) -> String {
    format!("{}/{}", image_base_url.trim_end_matches('/'), poster_path.trim_start_matches('/'))
}

/// TMDB sends `""` for unknown release dates.
fn release_year(release_date: &str) -> Option<i32> {
    release_date.parse::<Date>().ok().map(|d| i32::from(d.year()))
}

#[derive(Debug, Default, Deserialize)]
pub struct EditForm {
    #[serde(default)]
    pub review: String,
    #[serde(default)]
    pub rating: String,
}

/// A validated edit. Built only through [`EditForm::validate`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Review {
    pub rating: i32,
    pub review: String,
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct EditErrors {
    pub review: Option<&'static str>,
    pub rating: Option<&'static str>,
}

impl EditForm {
    pub fn validate(&self) -> Result<Review, EditErrors> {
        let review = self.review.trim();
        let rating = self.rating.trim().parse::<i32>();

        let errors = EditErrors {
            review: review.is_empty().then_some("Please enter a review."),
            rating: match (self.rating.trim().is_empty(), &rating) {
                (true, _) => Some("Please enter a rating."),
                (false, Err(_)) => Some("Rating must be a whole number."),
                (false, Ok(_)) => None,
            },
        };

        match (errors.review, errors.rating, rating) {
            (None, None, Ok(rating)) => Ok(Review { rating, review: review.to_string() }),
            _ => Err(errors),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct AddForm {
    #[serde(default)]
    pub title: String,
}

#[derive(Debug, Deserialize)]
pub struct MovieIdQuery {
    pub movie_id: i32,
}

#[derive(Debug, Deserialize)]
pub struct ExternalIdQuery {
    pub movie_id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn details(release_date: &str, poster_path: Option<&str>) -> MovieDetails {
        MovieDetails {
            id: 2109,
            original_title: "Rush Hour".to_string(),
            title: Some("Rush Hour".to_string()),
            release_date: Some(release_date.to_string()),
            overview: Some("Two cops team up.".to_string()),
            poster_path: poster_path.map(str::to_string),
        }
    }

    #[test]
    fn new_movie_takes_year_and_poster_from_details() {
        let movie = NewMovie::from_details(
            details("1998-09-18", Some("/we7wOLVFgxhzLzUt0qNe50xdIQZ.jpg")),
            "https://image.tmdb.org/t/p/w500",
        );
        assert_eq!(movie.title, "Rush Hour");
        assert_eq!(movie.year, Some(1998));
        assert_eq!(movie.description.as_deref(), Some("Two cops team up."));
        assert_eq!(
            movie.img_url.as_deref(),
            Some("https://image.tmdb.org/t/p/w500/we7wOLVFgxhzLzUt0qNe50xdIQZ.jpg")
        );
    }

    #[test]
    fn new_movie_tolerates_missing_metadata() {
        let movie = NewMovie::from_details(details("", None), "https://image.tmdb.org/t/p/w500/");
        assert_eq!(movie.year, None);
        assert_eq!(movie.img_url, None);
    }

    #[test]
    fn edit_form_accepts_whole_number_rating() {
        let form = EditForm { review: "  Loved it ".into(), rating: "9".into() };
        assert_eq!(form.validate(), Ok(Review { rating: 9, review: "Loved it".into() }));
    }

    #[test]
    fn edit_form_rejects_empty_review_and_fractional_rating() {
        let form = EditForm { review: "   ".into(), rating: "7.5".into() };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.review, Some("Please enter a review."));
        assert_eq!(errors.rating, Some("Rating must be a whole number."));
    }

    #[test]
    fn edit_form_reports_missing_rating() {
        let form = EditForm { review: "Fine".into(), rating: String::new() };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.review, None);
        assert_eq!(errors.rating, Some("Please enter a rating."));
    }
}
