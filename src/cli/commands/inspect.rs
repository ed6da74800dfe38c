use crate::config::Config;
use crate::core::inspect::InspectLogic;
use crate::errors::AppResult;

pub fn handle(cfg: &Config) -> AppResult<()> {
    InspectLogic::run(cfg)
}
