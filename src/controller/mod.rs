// CONTROLLER: Input boundary and the per-tick locomotion pipeline
pub mod ground;
pub mod input;
pub mod locomotion;
pub mod look;
pub mod mode;
pub mod pipeline;
pub mod vertical;

pub use ground::{GroundHit, GroundProbe, GroundSample};
pub use input::{InputCollector, InputEvent, InputSnapshot};
pub use pipeline::{CharacterController, MoveResolver, PassthroughResolver, TickOutput};
