use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TgUser::Table)
                    .if_not_exists()
                    .col(big_integer(TgUser::TgUserId).primary_key())
                    .col(text_null(TgUser::VkAccessToken))
                    .col(big_integer_null(TgUser::VkUserId))
                    .col(string_len_null(TgUser::FilterCityName, 128))
                    .col(integer_null(TgUser::FilterCityId))
                    .col(small_integer_null(TgUser::FilterGender))
                    .col(small_integer_null(TgUser::FilterAgeFrom))
                    .col(small_integer_null(TgUser::FilterAgeTo))
                    .col(integer(TgUser::HistoryCursor).default(0))
                    .col(timestamp(TgUser::CreatedAt))
                    .col(timestamp(TgUser::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TgUser::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum TgUser {
    Table,
    TgUserId,
    VkAccessToken,
    VkUserId,
    FilterCityName,
    FilterCityId,
    FilterGender,
    FilterAgeFrom,
    FilterAgeTo,
    HistoryCursor,
    CreatedAt,
    UpdatedAt,
}
