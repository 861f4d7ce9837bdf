pub use sea_orm_migration::prelude::*;

mod iden;
mod m20241201_000001_create_tables;
mod m20241201_000002_seed_lookups;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20241201_000001_create_tables::Migration),
            Box::new(m20241201_000002_seed_lookups::Migration),
        ]
    }
}
