pub use sea_orm_migration::prelude::*;

mod m20261019_000001_tg_user;
mod m20261019_000002_vk_profile;
mod m20261019_000003_vk_photo;
mod m20261019_000004_search_queue;
mod m20261019_000005_favorite_profile;
mod m20261019_000006_blacklist_profile;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261019_000001_tg_user::Migration),
            Box::new(m20261019_000002_vk_profile::Migration),
            Box::new(m20261019_000003_vk_photo::Migration),
            Box::new(m20261019_000004_search_queue::Migration),
            Box::new(m20261019_000005_favorite_profile::Migration),
            Box::new(m20261019_000006_blacklist_profile::Migration),
        ]
    }
}
