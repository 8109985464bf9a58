mod handler;
mod structures;

pub use handler::{ConnectionSlot, ServerState, MAX_LINE_BYTES};
pub use structures::{Command, Response, SimRequest, Status, SweepStepsRequest};
