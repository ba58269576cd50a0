mod author_card;
pub use author_card::AuthorCard;

mod bottom_nav;
pub use bottom_nav::{BottomNav, NavTab};

mod feedback_form;
pub use feedback_form::FeedbackForm;

mod inline_error;
pub use inline_error::InlineError;

mod match_card;
pub use match_card::MatchCard;

mod post_card;
pub use post_card::PostCard;

mod stats_grid;
pub use stats_grid::StatsGrid;
