use sea_orm::{entity::prelude::*, ActiveModelTrait, ConnectionTrait, EntityTrait, QueryOrder, Set};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "car")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub color: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Insert a row; the id comes back from the database.
pub async fn insert<C: ConnectionTrait>(
    db: &C,
    make: &str,
    model: &str,
    year: i32,
    color: &str,
) -> Result<Model, ModelError> {
    let am = ActiveModel {
        make: Set(make.to_string()),
        model: Set(model.to_string()),
        year: Set(year),
        color: Set(color.to_string()),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}

pub async fn list<C: ConnectionTrait>(db: &C) -> Result<Vec<Model>, ModelError> {
    Ok(Entity::find().order_by_asc(Column::Id).all(db).await?)
}

pub async fn get<C: ConnectionTrait>(db: &C, id: i64) -> Result<Option<Model>, ModelError> {
    Ok(Entity::find_by_id(id).one(db).await?)
}

pub async fn list_by_year<C: ConnectionTrait>(db: &C, year: i32) -> Result<Vec<Model>, ModelError> {
    Ok(Entity::find()
        .filter(Column::Year.eq(year))
        .order_by_asc(Column::Id)
        .all(db)
        .await?)
}

/// Returns false when no row had that id.
pub async fn delete<C: ConnectionTrait>(db: &C, id: i64) -> Result<bool, ModelError> {
    let res = Entity::delete_by_id(id).exec(db).await?;
    Ok(res.rows_affected > 0)
}
