use hecs::Entity;
use thiserror::Error;

use damaging_core::constants::MAX_BODY_HEIGHT;

#[derive(Debug, Error, PartialEq)]
pub enum EngineError {
    #[error("entity {0:?} does not exist")]
    NoSuchEntity(Entity),

    #[error("entity {0:?} has no Location")]
    MissingLocation(Entity),

    #[error("character height {0} is outside (0, {max}]", max = MAX_BODY_HEIGHT)]
    InvalidHeight(f32),
}

impl EngineError {
    pub(crate) fn from_component(entity: Entity, err: hecs::ComponentError) -> Self {
        match err {
            hecs::ComponentError::NoSuchEntity => EngineError::NoSuchEntity(entity),
            hecs::ComponentError::MissingComponent(_) => EngineError::MissingLocation(entity),
        }
    }
}
