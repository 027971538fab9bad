pub use sea_orm_migration::prelude::*;

mod m20240901_000001_create_staff;
mod m20240901_000002_create_courses;
mod m20240901_000003_create_subscriptions;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240901_000001_create_staff::Migration),
            Box::new(m20240901_000002_create_courses::Migration),
            Box::new(m20240901_000003_create_subscriptions::Migration),
        ]
    }
}
