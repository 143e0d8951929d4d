pub mod create_bet;
pub mod delete_bet;
pub mod get_all_bets_info;
pub mod get_bet;

pub use create_bet::CreateBetService;
pub use delete_bet::DeleteBetService;
pub use get_all_bets_info::GetAllBetsInfoService;
pub use get_bet::GetBetService;
