pub mod bets;
pub mod health;
