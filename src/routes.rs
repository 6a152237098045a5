use std::sync::Arc;

use axum::{
    Router,
    extract::{Form, Query, State},
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
};
use tower_http::trace::TraceLayer;

use crate::{
    AppState,
    error::AppResult,
    models::{AddForm, EditErrors, EditForm, ExternalIdQuery, MovieIdQuery, NewMovie},
    templates,
};

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/edit", get(edit_form).post(edit))
        .route("/delete", get(delete))
        .route("/add", get(add_form).post(add))
        .route("/new_movie", get(new_movie))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

pub async fn index(State(state): State<Arc<AppState>>) -> AppResult<Html<String>> {
    let movies = state.store.ranked().await?;
    Ok(Html(templates::list_page(&movies)))
}

/// The form starts blank even when the movie already has a rating and review.
pub async fn edit_form(
    State(state): State<Arc<AppState>>,
    Query(q): Query<MovieIdQuery>,
) -> AppResult<Html<String>> {
    let movie = state.store.get(q.movie_id).await?;
    Ok(Html(templates::edit_page(&movie, &EditForm::default(), &EditErrors::default())))
}

pub async fn edit(
    State(state): State<Arc<AppState>>,
    Query(q): Query<MovieIdQuery>,
    Form(form): Form<EditForm>,
) -> AppResult<Response> {
    let review = match form.validate() {
        Ok(review) => review,
        Err(errors) => {
            let movie = state.store.get(q.movie_id).await?;
            tracing::debug!(movie_id = q.movie_id, ?errors, "edit rejected");
            return Ok(Html(templates::edit_page(&movie, &form, &errors)).into_response());
        },
    };

    state.store.update_review(q.movie_id, &review).await?;
    tracing::info!(movie_id = q.movie_id, rating = review.rating, "review saved");
    Ok(Redirect::to("/").into_response())
}

pub async fn delete(
    State(state): State<Arc<AppState>>,
    Query(q): Query<MovieIdQuery>,
) -> AppResult<Redirect> {
    state.store.delete(q.movie_id).await?;
    tracing::info!(movie_id = q.movie_id, "movie deleted");
    Ok(Redirect::to("/"))
}

pub async fn add_form() -> Html<String> {
    Html(templates::add_page("", None))
}

pub async fn add(
    State(state): State<Arc<AppState>>,
    Form(form): Form<AddForm>,
) -> AppResult<Html<String>> {
    let title = form.title.trim();
    if title.is_empty() {
        return Ok(Html(templates::add_page(&form.title, Some("Please enter a title."))));
    }

    let candidates = state.tmdb.search_movie(title).await?;
    Ok(Html(templates::select_page(title, &candidates)))
}

pub async fn new_movie(
    State(state): State<Arc<AppState>>,
    Query(q): Query<ExternalIdQuery>,
) -> AppResult<Redirect> {
    let details = state.tmdb.movie_details(q.movie_id).await?;
    let movie = state
        .store
        .insert(NewMovie::from_details(details, &state.config.tmdb_image_base_url))
        .await?;

    tracing::info!(movie_id = movie.id, tmdb_id = q.movie_id, title = %movie.title, "movie added");
    Ok(Redirect::to(&format!("/edit?movie_id={}", movie.id)))
}
