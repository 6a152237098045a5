use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, NotSet, QueryFilter,
    QueryOrder, Set, SqlErr, sea_query::Expr,
};

use crate::{
    entities::movie,
    error::{AppError, AppResult},
    models::{NewMovie, Review},
    ranking,
};

#[derive(Clone)]
pub struct MovieStore {
    db: DatabaseConnection,
}

impl MovieStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    /// Inserts `new` and returns the stored row, including its generated id.
    pub async fn insert(&self, new: NewMovie) -> AppResult<movie::Model> {
        let title = new.title.clone();
        let model = movie::ActiveModel {
            id: NotSet,
            title: Set(new.title),
            year: Set(new.year),
            description: Set(new.description),
            rating: Set(None),
            ranking: Set(None),
            review: Set(None),
            img_url: Set(new.img_url),
        };

        match model.insert(&self.db).await {
            Ok(movie) => Ok(movie),
            Err(err) if is_unique_violation(&err) => Err(AppError::Duplicate(title)),
            Err(err) => Err(err.into()),
        }
    }

    pub async fn get(&self, id: i32) -> AppResult<movie::Model> {
        movie::Entity::find_by_id(id).one(&self.db).await?.ok_or(AppError::NotFound(id))
    }

    pub async fn all(&self) -> AppResult<Vec<movie::Model>> {
        Ok(movie::Entity::find().order_by_asc(movie::Column::Id).all(&self.db).await?)
    }

    /// Overwrites rating and review together in a single statement.
    pub async fn update_review(&self, id: i32, review: &Review) -> AppResult<()> {
        let res = movie::Entity::update_many()
            .col_expr(movie::Column::Rating, Expr::value(review.rating))
            .col_expr(movie::Column::Review, Expr::value(review.review.clone()))
            .filter(movie::Column::Id.eq(id))
            .exec(&self.db)
            .await?;

        if res.rows_affected == 0 {
            return Err(AppError::NotFound(id));
        }
        Ok(())
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let res = movie::Entity::delete_by_id(id).exec(&self.db).await?;
        if res.rows_affected == 0 {
            return Err(AppError::NotFound(id));
        }
        Ok(())
    }

    /// Recomputes every ranking, persists the ones that moved and returns the
    /// movies best first.
    ///
    /// Ranking writes are plain autocommit UPDATEs: a read-then-write
    /// transaction gets SQLITE_BUSY in WAL mode when two list views race.
    pub async fn ranked(&self) -> AppResult<Vec<movie::Model>> {
        let mut movies = self.all().await?;
        let changed = ranking::assign_rankings(&mut movies);

        for movie in movies.iter().filter(|m| changed.contains(&m.id)) {
            movie::Entity::update_many()
                .col_expr(movie::Column::Ranking, Expr::value(movie.ranking))
                .filter(movie::Column::Id.eq(movie.id))
                .exec(&self.db)
                .await?;
        }

        if !changed.is_empty() {
            tracing::debug!(total = movies.len(), changed = changed.len(), "rankings updated");
        }
        Ok(movies)
    }
}

fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}
