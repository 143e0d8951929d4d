pub mod bet_repository;
pub mod in_memory_bet_repository;
pub mod redis_bet_repository;

pub use bet_repository::BetRepository;
pub use in_memory_bet_repository::InMemoryBetRepository;
pub use redis_bet_repository::RedisBetRepository;
