use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20261019_000001_tg_user::TgUser, m20261019_000002_vk_profile::VkProfile};

static IDX_SEARCH_QUEUE_USER_PROFILE: &str = "idx-search_queue-tg_user_id-vk_profile_id";
static FK_SEARCH_QUEUE_TG_USER_ID: &str = "fk-search_queue-tg_user_id";
static FK_SEARCH_QUEUE_VK_PROFILE_ID: &str = "fk-search_queue-vk_profile_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // (tg_user_id, position) is the primary key so positions stay unique per user
        manager
            .create_table(
                Table::create()
                    .table(SearchQueue::Table)
                    .if_not_exists()
                    .col(big_integer(SearchQueue::TgUserId))
                    .col(integer(SearchQueue::Position))
                    .col(big_integer(SearchQueue::VkProfileId))
                    .primary_key(
                        Index::create()
                            .col(SearchQueue::TgUserId)
                            .col(SearchQueue::Position),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_SEARCH_QUEUE_USER_PROFILE)
                    .table(SearchQueue::Table)
                    .col(SearchQueue::TgUserId)
                    .col(SearchQueue::VkProfileId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_SEARCH_QUEUE_TG_USER_ID)
                    .from_tbl(SearchQueue::Table)
                    .from_col(SearchQueue::TgUserId)
                    .to_tbl(TgUser::Table)
                    .to_col(TgUser::TgUserId)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_SEARCH_QUEUE_VK_PROFILE_ID)
                    .from_tbl(SearchQueue::Table)
                    .from_col(SearchQueue::VkProfileId)
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
                    .name(FK_SEARCH_QUEUE_VK_PROFILE_ID)
                    .table(SearchQueue::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_SEARCH_QUEUE_TG_USER_ID)
                    .table(SearchQueue::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_SEARCH_QUEUE_USER_PROFILE)
                    .table(SearchQueue::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(SearchQueue::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum SearchQueue {
    Table,
    TgUserId,
    Position,
    VkProfileId,
}
