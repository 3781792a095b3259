//! Generic keyed record store over the entity collections.
//!
//! Every collection is keyed by an auto-incrementing identifier assigned at
//! insertion time and immutable thereafter. The helpers here are generic over
//! [`ConnectionTrait`] so the same operations run against the plain connection
//! or inside a transaction. Ordering of `get_all` is insertion order; callers
//! that want date-descending listings re-sort (the core list functions do).

use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, ConnectionTrait, EntityTrait, IntoActiveModel,
    PrimaryKeyTrait,
};

use crate::errors::Result;

/// Inserts a record, letting the store assign the next identifier.
///
/// The caller passes an active model with the primary key `NotSet`; the
/// persisted model, with its assigned id, is returned.
pub async fn insert<'a, C, A>(db: &'a C, model: A) -> Result<<A::Entity as EntityTrait>::Model>
where
    C: ConnectionTrait,
    A: ActiveModelTrait + ActiveModelBehavior + Send + 'a,
    <A::Entity as EntityTrait>::Model: IntoActiveModel<A>,
{
    model.insert(db).await.map_err(Into::into)
}

/// Full replace-by-id. The caller must supply the complete record merged with
/// any changed fields; unset fields silently revert to the caller's copy.
pub async fn update<'a, C, A>(db: &'a C, model: A) -> Result<<A::Entity as EntityTrait>::Model>
where
    C: ConnectionTrait,
    A: ActiveModelTrait + ActiveModelBehavior + Send + 'a,
    <A::Entity as EntityTrait>::Model: IntoActiveModel<A>,
{
    model.update(db).await.map_err(Into::into)
}

/// Returns all records in a collection, in insertion order.
pub async fn get_all<C, E>(db: &C) -> Result<Vec<E::Model>>
where
    C: ConnectionTrait,
    E: EntityTrait,
{
    E::find().all(db).await.map_err(Into::into)
}

/// Returns one record by id, or `None` if absent.
pub async fn get<C, E>(db: &C, id: i64) -> Result<Option<E::Model>>
where
    C: ConnectionTrait,
    E: EntityTrait,
    i64: Into<<E::PrimaryKey as PrimaryKeyTrait>::ValueType>,
{
    E::find_by_id(id).one(db).await.map_err(Into::into)
}

/// Deletes one record by id. Deleting an absent id is a no-op.
pub async fn delete<C, E>(db: &C, id: i64) -> Result<()>
where
    C: ConnectionTrait,
    E: EntityTrait,
    i64: Into<<E::PrimaryKey as PrimaryKeyTrait>::ValueType>,
{
    E::delete_by_id(id).exec(db).await?;
    Ok(())
}

/// Removes every record in a collection.
pub async fn clear<C, E>(db: &C) -> Result<()>
where
    C: ConnectionTrait,
    E: EntityTrait,
{
    E::delete_many().exec(db).await?;
    Ok(())
}
