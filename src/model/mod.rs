// MODEL: character state, tunables, terrain probes
pub mod config;
pub mod state;
pub mod terrain;

pub use config::{CharacterConfig, ConfigError};
pub use state::{CharacterState, GroundState, MovementMode};
pub use terrain::{FlatGround, Heightfield};
