mod toggle_like;

pub use toggle_like::{LikeStatus, ToggleLikeError, ToggleLikeOutput, ToggleLikeUseCase};
