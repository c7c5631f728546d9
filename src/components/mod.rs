pub mod card4line_block;
pub mod card4line_carousel;
pub mod cardwide;
pub mod game_card;

pub use card4line_block::Card4LineBlock;
pub use card4line_carousel::Card4LineCarousel;
pub use cardwide::CardWide;
pub use game_card::{GameCard, MissingGame};
