use std::sync::Arc;

use crate::application::ports::AnswerClient;
use crate::presentation::config::RelaySettings;

pub struct AppState<A>
where
    A: AnswerClient + ?Sized,
{
    pub upstream: Arc<A>,
    pub relay: RelaySettings,
}

impl<A> AppState<A>
where
    A: AnswerClient + ?Sized,
{
    pub fn new(upstream: Arc<A>, relay: RelaySettings) -> Self {
        Self { upstream, relay }
    }
}

impl<A> Clone for AppState<A>
where
    A: AnswerClient + ?Sized,
{
    fn clone(&self) -> Self {
        Self {
            upstream: Arc::clone(&self.upstream),
            relay: self.relay.clone(),
        }
    }
}
