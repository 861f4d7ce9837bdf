use sea_orm_migration::prelude::*;

use crate::iden::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let insert = Query::insert()
            .into_table(SkillLevel::Table)
            .columns([SkillLevel::SkillId, SkillLevel::Description])
            .values_panic([1.into(), "No experience".into()])
            .values_panic([2.into(), "Beginner".into()])
            .values_panic([3.into(), "Intermediate".into()])
            .values_panic([4.into(), "Advanced".into()])
            .to_owned();
        manager.exec_stmt(insert).await?;

        let insert = Query::insert()
            .into_table(ServiceType::Table)
            .columns([ServiceType::ServiceTypeId, ServiceType::Description])
            .values_panic([1.into(), "Full service event".into()])
            .values_panic([2.into(), "Sewing only".into()])
            .values_panic([3.into(), "Cutting and prep".into()])
            .values_panic([4.into(), "Assembly".into()])
            .to_owned();
        manager.exec_stmt(insert).await?;

        // Item ids above the vest threshold (13) are finished vests; lower
        // ids are supplies consumed while producing them.
        let insert = Query::insert()
            .into_table(Item::Table)
            .columns([Item::ItemId, Item::Description])
            .values_panic([1.into(), "Fabric panel".into()])
            .values_panic([2.into(), "Foam insert".into()])
            .values_panic([3.into(), "Zipper".into()])
            .values_panic([4.into(), "Thread spool".into()])
            .values_panic([5.into(), "Cut kit".into()])
            .values_panic([14.into(), "Vest (small)".into()])
            .values_panic([15.into(), "Vest (medium)".into()])
            .values_panic([16.into(), "Vest (large)".into()])
            .to_owned();
        manager.exec_stmt(insert).await?;

        let insert = Query::insert()
            .into_table(Survey::Table)
            .columns([Survey::DiscoveryMethod, Survey::Total])
            .values_panic(["Social Media".into(), 0.into()])
            .values_panic(["Word of Mouth".into(), 0.into()])
            .values_panic(["News".into(), 0.into()])
            .values_panic(["Community Event".into(), 0.into()])
            .values_panic(["Other".into(), 0.into()])
            .to_owned();
        manager.exec_stmt(insert).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for table in [
            Query::delete().from_table(Survey::Table).to_owned(),
            Query::delete().from_table(Item::Table).to_owned(),
            Query::delete().from_table(ServiceType::Table).to_owned(),
            Query::delete().from_table(SkillLevel::Table).to_owned(),
        ] {
            manager.exec_stmt(table).await?;
        }

        Ok(())
    }
}
