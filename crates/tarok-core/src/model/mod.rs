pub mod bidding;
pub mod card;
pub mod contract;
pub mod deck;
pub mod hand;
pub mod legal;
pub mod player;
pub mod round;
pub mod score;
pub mod suit;
pub mod talon;
pub mod trick;
