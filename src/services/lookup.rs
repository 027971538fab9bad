use crate::error::{AppError, AppResult};
use sea_orm::{ConnectionTrait, EntityTrait, PrimaryKeyTrait};

/// Loads the row a write refers to; a dangling id is reported on `field`.
pub(crate) async fn find_referenced<E, C>(db: &C, id: i64, field: &str) -> AppResult<E::Model>
where
    E: EntityTrait,
    C: ConnectionTrait,
    i64: Into<<E::PrimaryKey as PrimaryKeyTrait>::ValueType>,
{
    E::find_by_id(id).one(db).await?.ok_or_else(|| {
        AppError::field(
            field,
            format!("Выберите корректный вариант. {id} нет среди допустимых значений."),
        )
    })
}

/// Loads the row addressed by the request path.
pub(crate) async fn find_or_not_found<E, C>(db: &C, id: i64, what: &str) -> AppResult<E::Model>
where
    E: EntityTrait,
    C: ConnectionTrait,
    i64: Into<<E::PrimaryKey as PrimaryKeyTrait>::ValueType>,
{
    E::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("{what} {id} not found")))
}

pub(crate) fn ensure_deleted(rows_affected: u64, what: &str, id: i64) -> AppResult<()> {
    if rows_affected == 0 {
        return Err(AppError::NotFound(format!("{what} {id} not found")));
    }
    Ok(())
}
