use sea_orm_migration::{prelude::*, schema::*};

use crate::m20261019_000002_vk_profile::VkProfile;

static IDX_VK_PHOTO_VK_USER_ID: &str = "idx-vk_photo-vk_user_id";
static IDX_VK_PHOTO_STATUS: &str = "idx-vk_photo-status";
static FK_VK_PHOTO_VK_USER_ID: &str = "fk-vk_photo-vk_user_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(VkPhoto::Table)
                    .if_not_exists()
                    .col(pk_auto(VkPhoto::Id))
                    .col(big_integer(VkPhoto::VkUserId))
                    .col(big_integer(VkPhoto::VkPhotoId))
                    .col(big_integer(VkPhoto::OwnerId))
                    .col(text(VkPhoto::Url))
                    .col(integer(VkPhoto::LikesCount).default(0))
                    .col(text_null(VkPhoto::FilePath))
                    .col(string_len_null(VkPhoto::Status, 16))
                    .col(string_len_null(VkPhoto::RejectReason, 32))
                    .col(small_integer_null(VkPhoto::FacesCount))
                    .col(double_null(VkPhoto::DetScore))
                    .col(json_binary_null(VkPhoto::Bbox))
                    .col(double_null(VkPhoto::BlurScore))
                    .col(blob_null(VkPhoto::Embedding))
                    .col(boolean(VkPhoto::EmbeddingNormed).default(false))
                    .col(string_len_null(VkPhoto::ModelName, 64))
                    .col(string_len_null(VkPhoto::ModelVersion, 32))
                    .col(timestamp_null(VkPhoto::DownloadedAt))
                    .col(timestamp_null(VkPhoto::ProcessedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_VK_PHOTO_VK_USER_ID)
                    .table(VkPhoto::Table)
                    .col(VkPhoto::VkUserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_VK_PHOTO_STATUS)
                    .table(VkPhoto::Table)
                    .col(VkPhoto::Status)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_VK_PHOTO_VK_USER_ID)
                    .from_tbl(VkPhoto::Table)
                    .from_col(VkPhoto::VkUserId)
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
                    .name(FK_VK_PHOTO_VK_USER_ID)
                    .table(VkPhoto::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_VK_PHOTO_STATUS)
                    .table(VkPhoto::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_VK_PHOTO_VK_USER_ID)
                    .table(VkPhoto::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(VkPhoto::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum VkPhoto {
    Table,
    Id,
    VkUserId,
    VkPhotoId,
    OwnerId,
    Url,
    LikesCount,
    FilePath,
    Status,
    RejectReason,
    FacesCount,
    DetScore,
    Bbox,
    BlurScore,
    Embedding,
    EmbeddingNormed,
    ModelName,
    ModelVersion,
    DownloadedAt,
    ProcessedAt,
}
