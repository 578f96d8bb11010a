use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(VkProfile::Table)
                    .if_not_exists()
                    .col(big_integer(VkProfile::VkUserId).primary_key())
                    .col(string_len(VkProfile::FirstName, 128))
                    .col(string_len(VkProfile::LastName, 128))
                    .col(text(VkProfile::Domain))
                    .col(timestamp(VkProfile::FoundAt))
                    .col(timestamp(VkProfile::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(VkProfile::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum VkProfile {
    Table,
    VkUserId,
    FirstName,
    LastName,
    Domain,
    FoundAt,
    UpdatedAt,
}
