use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::auth::application::domain::entities::{Gender, UserProfile};
use crate::auth::application::ports::outgoing::UserQueryResult;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub username: String,
    #[sea_orm(unique)]
    pub email: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub age: Option<i32>,
    pub city: Option<String>,
    pub gender: Option<String>,
    pub date_joined: DateTimeWithTimeZone,
}

impl Model {
    pub fn gender(&self) -> Option<Gender> {
        self.gender.as_deref().and_then(Gender::from_code)
    }

    pub fn to_query_result(&self) -> UserQueryResult {
        UserQueryResult {
            id: self.id,
            username: self.username.clone(),
            email: self.email.clone(),
            password_hash: self.password_hash.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            age: self.age,
            city: self.city.clone(),
            gender: self.gender(),
            date_joined: self.date_joined.with_timezone(&chrono::Utc),
        }
    }

    pub fn to_profile(&self, posts_count: u64) -> UserProfile {
        UserProfile {
            id: self.id,
            username: self.username.clone(),
            email: self.email.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            posts_count,
            age: self.age,
            city: self.city.clone(),
            gender: self.gender(),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
