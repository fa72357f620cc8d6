pub use sea_orm_migration::prelude::*;

mod m20250304_105428_create_users_table;
mod m20250304_110102_create_posts_table;
mod m20250304_110517_create_comments_table;
mod m20250304_110930_create_likes_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250304_105428_create_users_table::Migration),
            Box::new(m20250304_110102_create_posts_table::Migration),
            Box::new(m20250304_110517_create_comments_table::Migration),
            Box::new(m20250304_110930_create_likes_table::Migration),
        ]
    }
}
