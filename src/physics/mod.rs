mod space;
mod spawn;

pub use space::{BodyHandle, BodyState, Pose, Space};
pub use spawn::{SpawnParams, SpawnRange};
