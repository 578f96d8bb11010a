use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20261019_000001_tg_user::TgUser, m20261019_000002_vk_profile::VkProfile};

static FK_FAVORITE_PROFILE_TG_USER_ID: &str = "fk-favorite_profile-tg_user_id";
static FK_FAVORITE_PROFILE_VK_PROFILE_ID: &str = "fk-favorite_profile-vk_profile_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FavoriteProfile::Table)
                    .if_not_exists()
                    .col(big_integer(FavoriteProfile::TgUserId))
                    .col(big_integer(FavoriteProfile::VkProfileId))
                    .col(timestamp(FavoriteProfile::CreatedAt))
                    .primary_key(
                        Index::create()
                            .col(FavoriteProfile::TgUserId)
                            .col(FavoriteProfile::VkProfileId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_FAVORITE_PROFILE_TG_USER_ID)
                    .from_tbl(FavoriteProfile::Table)
                    .from_col(FavoriteProfile::TgUserId)
                    .to_tbl(TgUser::Table)
                    .to_col(TgUser::TgUserId)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_FAVORITE_PROFILE_VK_PROFILE_ID)
                    .from_tbl(FavoriteProfile::Table)
                    .from_col(FavoriteProfile::VkProfileId)
                    .to_tbl(VkProfile::Table)
                    .to_col(VkProfile::VkUserId)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_FAVORITE_PROFILE_VK_PROFILE_ID)
                    .table(FavoriteProfile::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_FAVORITE_PROFILE_TG_USER_ID)
                    .table(FavoriteProfile::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(FavoriteProfile::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum FavoriteProfile {
    Table,
    TgUserId,
    VkProfileId,
    CreatedAt,
}
