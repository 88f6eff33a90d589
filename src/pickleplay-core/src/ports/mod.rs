mod inbound;
mod outbound;

pub use inbound::*;
pub use outbound::*;

pub trait CourtServicePort: CourtServiceInbound + CourtServiceOutbound {}

impl<T> CourtServicePort for T where T: CourtServiceInbound + CourtServiceOutbound {}
