use crate::config::Config;
use crate::generators::{Clock, IdGenerator, SystemClock, UuidIdGenerator};
use crate::repository::BetRepository;
use crate::services::{CreateBetService, DeleteBetService, GetAllBetsInfoService, GetBetService};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub repository: Arc<dyn BetRepository>,
    pub id_generator: Arc<dyn IdGenerator>,
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    pub fn new(config: Config, repository: Arc<dyn BetRepository>) -> Self {
        Self::with_collaborators(
            config,
            repository,
            Arc::new(UuidIdGenerator),
            Arc::new(SystemClock),
        )
    }

    pub fn with_collaborators(
        config: Config,
        repository: Arc<dyn BetRepository>,
        id_generator: Arc<dyn IdGenerator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            repository,
            id_generator,
            clock,
        }
    }

    pub fn create_bet_service(&self) -> CreateBetService {
        CreateBetService::new(
            self.repository.clone(),
            self.id_generator.clone(),
            self.clock.clone(),
        )
    }

    pub fn get_bet_service(&self) -> GetBetService {
        GetBetService::new(self.repository.clone())
    }

    pub fn get_all_bets_info_service(&self) -> GetAllBetsInfoService {
        GetAllBetsInfoService::new(self.repository.clone())
    }

    pub fn delete_bet_service(&self) -> DeleteBetService {
        DeleteBetService::new(self.repository.clone())
    }
}
