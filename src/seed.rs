use chrono::{DateTime, Duration, Utc};
use rand::seq::SliceRandom;
use rand::Rng;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, Set};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};
use uuid::Uuid;

use crate::auth::adapter::outgoing::sea_orm_entity::users::ActiveModel as UserActiveModel;
use crate::auth::application::domain::entities::{Gender, UserId};
use crate::auth::application::ports::outgoing::{HashError, PasswordHasher};
use crate::modules::comment::adapter::outgoing::sea_orm_entity::ActiveModel as CommentActiveModel;
use crate::modules::like::adapter::outgoing::LikeRepositoryPostgres;
use crate::modules::like::application::ports::outgoing::{LikeRepository, LikeRepositoryError};
use crate::modules::post::adapter::outgoing::sea_orm_entity::ActiveModel as PostActiveModel;

pub const DEMO_PASSWORD: &str = "password123";

const USER_COUNT: usize = 7;
const POST_WINDOW_DAYS: i64 = 730;

const CITIES: &[&str] = &[
    "Moscow",
    "Saint Petersburg",
    "Novosibirsk",
    "Yekaterinburg",
    "Kazan",
    "Nizhny Novgorod",
    "Chelyabinsk",
    "Samara",
    "Omsk",
    "Rostov-on-Don",
];

const MALE_FIRST_NAMES: &[&str] = &["Ivan", "Dmitry", "Alexei", "Sergei", "Mikhail", "Pavel"];
const FEMALE_FIRST_NAMES: &[&str] = &["Anna", "Maria", "Elena", "Olga", "Natalia", "Daria"];
const LAST_NAMES: &[&str] = &["Petrov", "Ivanov", "Smirnov", "Volkov", "Sokolov", "Popov"];

const WORDS: &[&str] = &[
    "river", "window", "morning", "coffee", "journey", "music", "garden", "city", "winter",
    "story", "light", "friend", "street", "book", "evening", "train", "market", "forest",
    "letter", "summer", "bridge", "idea", "picture", "weekend",
];

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Database error: {0}")]
    Database(#[from] DbErr),

    #[error("Password hashing failed: {0}")]
    Hash(#[from] HashError),

    #[error("Like insert failed: {0}")]
    Like(#[from] LikeRepositoryError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SeedSummary {
    pub users: usize,
    pub posts: usize,
    pub comments: usize,
    pub likes: usize,
}

#[derive(Debug, Clone)]
pub struct SeedUser {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub age: i32,
    pub city: String,
    pub gender: Gender,
}

#[derive(Debug, Clone)]
pub struct SeedPost {
    pub id: Uuid,
    pub author_id: Uuid,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct SeedComment {
    pub id: Uuid,
    pub post_id: Uuid,
    pub author_id: Uuid,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

/// Everything the seeder writes, generated before any I/O.
#[derive(Debug, Clone, Default)]
pub struct SeedPlan {
    pub users: Vec<SeedUser>,
    pub posts: Vec<SeedPost>,
    pub comments: Vec<SeedComment>,
    /// (user, post) pairs; may repeat, the insert skips existing rows.
    pub likes: Vec<(Uuid, Uuid)>,
}

fn pick<'a, R: Rng + ?Sized>(rng: &mut R, items: &[&'a str]) -> &'a str {
    items.choose(rng).copied().unwrap_or_default()
}

fn sentence<R: Rng + ?Sized>(rng: &mut R, words: usize) -> String {
    let body: Vec<&str> = (0..words).map(|_| pick(rng, WORDS)).collect();
    let mut text = body.join(" ");
    if let Some(first) = text.get_mut(0..1) {
        first.make_ascii_uppercase();
    }
    text.push('.');
    text
}

fn paragraph<R: Rng + ?Sized>(rng: &mut R, sentences: usize) -> String {
    (0..sentences)
        .map(|_| {
            let words = rng.gen_range(5..=10);
            sentence(rng, words)
        })
        .collect::<Vec<_>>()
        .join(" ")
}

impl SeedPlan {
    pub fn generate<R: Rng + ?Sized>(rng: &mut R, now: DateTime<Utc>) -> Self {
        let mut plan = SeedPlan::default();

        for index in 0..USER_COUNT {
            let gender = if rng.gen_bool(0.5) {
                Gender::Male
            } else {
                Gender::Female
            };
            let first_name = match gender {
                Gender::Male => pick(rng, MALE_FIRST_NAMES).to_string(),
                Gender::Female => pick(rng, FEMALE_FIRST_NAMES).to_string(),
            };
            let mut last_name = pick(rng, LAST_NAMES).to_string();
            if gender == Gender::Female {
                last_name.push('a');
            }

            // the index suffix keeps usernames and emails unique within a run
            let username = format!(
                "{}.{}{}",
                first_name.to_lowercase(),
                last_name.to_lowercase(),
                index + 1
            );

            plan.users.push(SeedUser {
                id: Uuid::new_v4(),
                email: format!("{}@example.com", username),
                username,
                first_name,
                last_name,
                age: rng.gen_range(18..=65),
                city: pick(rng, CITIES).to_string(),
                gender,
            });
        }

        for author in &plan.users {
            for _ in 0..rng.gen_range(1..=2) {
                let age = Duration::days(rng.gen_range(0..=POST_WINDOW_DAYS))
                    + Duration::hours(rng.gen_range(0..24))
                    + Duration::minutes(rng.gen_range(0..60))
                    + Duration::seconds(rng.gen_range(0..60));

                plan.posts.push(SeedPost {
                    id: Uuid::new_v4(),
                    author_id: author.id,
                    title: sentence(rng, 6),
                    content: (0..3)
                        .map(|_| paragraph(rng, 3))
                        .collect::<Vec<_>>()
                        .join("\n"),
                    created_at: now - age,
                });
            }
        }

        for post in &plan.posts {
            let wanted = rng.gen_range(1..=5).min(plan.users.len());
            let window = (now - post.created_at).num_minutes().max(1);

            for author in plan.users.choose_multiple(rng, wanted) {
                plan.comments.push(SeedComment {
                    id: Uuid::new_v4(),
                    post_id: post.id,
                    author_id: author.id,
                    text: paragraph(rng, 2),
                    created_at: post.created_at + Duration::minutes(rng.gen_range(0..=window)),
                });
            }
        }

        for user in &plan.users {
            let wanted = rng.gen_range(5..=15).min(plan.posts.len());
            for post in plan.posts.choose_multiple(rng, wanted) {
                plan.likes.push((user.id, post.id));
            }
        }

        plan
    }

    pub async fn apply(
        &self,
        db: Arc<DatabaseConnection>,
        password_hash: &str,
        joined_at: DateTime<Utc>,
    ) -> Result<SeedSummary, SeedError> {
        let mut summary = SeedSummary::default();

        for user in &self.users {
            UserActiveModel {
                id: Set(user.id),
                username: Set(user.username.clone()),
                email: Set(user.email.clone()),
                password_hash: Set(password_hash.to_string()),
                first_name: Set(user.first_name.clone()),
                last_name: Set(user.last_name.clone()),
                age: Set(Some(user.age)),
                city: Set(Some(user.city.clone())),
                gender: Set(Some(user.gender.code().to_string())),
                date_joined: Set(joined_at.fixed_offset()),
            }
            .insert(&*db)
            .await?;

            debug!(username = %user.username, city = %user.city, "Seeded user");
            summary.users += 1;
        }

        for post in &self.posts {
            PostActiveModel {
                id: Set(post.id),
                author_id: Set(post.author_id),
                title: Set(post.title.clone()),
                content: Set(post.content.clone()),
                created_at: Set(post.created_at.fixed_offset()),
                updated_at: Set(post.created_at.fixed_offset()),
            }
            .insert(&*db)
            .await?;
            summary.posts += 1;
        }

        for comment in &self.comments {
            CommentActiveModel {
                id: Set(comment.id),
                post_id: Set(comment.post_id),
                author_id: Set(comment.author_id),
                text: Set(comment.text.clone()),
                created_at: Set(comment.created_at.fixed_offset()),
            }
            .insert(&*db)
            .await?;
            summary.comments += 1;
        }

        let likes = LikeRepositoryPostgres::new(db);
        for (user, post) in &self.likes {
            if likes.insert_like(UserId::from(*user), *post).await? {
                summary.likes += 1;
            }
        }

        Ok(summary)
    }
}

/// Creates the demo community and logs what was written.
pub async fn seed_demo_data(
    db: Arc<DatabaseConnection>,
    hasher: &dyn PasswordHasher,
) -> Result<SeedSummary, SeedError> {
    info!("Creating demo data...");

    let password_hash = hasher.hash_password(DEMO_PASSWORD).await?;
    let now = Utc::now();
    let plan = SeedPlan::generate(&mut rand::thread_rng(), now);
    let summary = plan.apply(db, &password_hash, now).await?;

    info!(
        users = summary.users,
        posts = summary.posts,
        comments = summary.comments,
        likes = summary.likes,
        "Demo data created"
    );

    Ok(summary)
}
