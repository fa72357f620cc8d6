pub mod jwt;
pub mod sea_orm_entity;
pub mod security;
pub mod user_profiles;
pub mod user_query_postgres;
pub mod user_repository_postgres;
