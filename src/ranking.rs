use std::cmp::Reverse;

use crate::entities::movie;

/// Orders `movies` best first and numbers them 1..=N.
///
/// Higher ratings rank first and unrated movies go last. Equal ratings keep id
/// order, so the earlier addition wins the tie. Returns the ids whose ranking
/// changed.
pub fn assign_rankings(movies: &mut [movie::Model]) -> Vec<i32> {
    movies.sort_by_key(|m| (Reverse(m.rating), m.id));

    let mut changed = Vec::new();
    for (rank, movie) in (1..).zip(movies.iter_mut()) {
        if movie.ranking != Some(rank) {
            movie.ranking = Some(rank);
            changed.push(movie.id);
        }
    }
    changed
}
