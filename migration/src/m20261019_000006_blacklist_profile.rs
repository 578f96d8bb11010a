use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20261019_000001_tg_user::TgUser, m20261019_000002_vk_profile::VkProfile};

static FK_BLACKLIST_PROFILE_TG_USER_ID: &str = "fk-blacklist_profile-tg_user_id";
static FK_BLACKLIST_PROFILE_VK_PROFILE_ID: &str = "fk-blacklist_profile-vk_profile_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BlacklistProfile::Table)
                    .if_not_exists()
                    .col(big_integer(BlacklistProfile::TgUserId))
                    .col(big_integer(BlacklistProfile::VkProfileId))
                    .col(timestamp(BlacklistProfile::CreatedAt))
                    .primary_key(
                        Index::create()
                            .col(BlacklistProfile::TgUserId)
                            .col(BlacklistProfile::VkProfileId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_BLACKLIST_PROFILE_TG_USER_ID)
                    .from_tbl(BlacklistProfile::Table)
                    .from_col(BlacklistProfile::TgUserId)
                    .to_tbl(TgUser::Table)
                    .to_col(TgUser::TgUserId)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_BLACKLIST_PROFILE_VK_PROFILE_ID)
                    .from_tbl(BlacklistProfile::Table)
                    .from_col(BlacklistProfile::VkProfileId)
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
                    .name(FK_BLACKLIST_PROFILE_VK_PROFILE_ID)
                    .table(BlacklistProfile::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_BLACKLIST_PROFILE_TG_USER_ID)
                    .table(BlacklistProfile::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(BlacklistProfile::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum BlacklistProfile {
    Table,
    TgUserId,
    VkProfileId,
    CreatedAt,
}
