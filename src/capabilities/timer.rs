use crux_core::capability::{Capability, CapabilityContext, Operation};
use serde::{Deserialize, Serialize};

use crate::navigation::IdleTimerToken;

#[derive(Clone)]
pub struct Timer<E> {
    context: CapabilityContext<TimerOperation, E>,
}

impl<Ev> Capability<Ev> for Timer<Ev> {
    type Operation = TimerOperation;
    type MappedSelf<MappedEv> = Timer<MappedEv>;

    fn map_event<F, NewEv>(&self, f: F) -> Self::MappedSelf<NewEv>
    where
        F: Fn(NewEv) -> Ev + Send + Sync + 'static,
        Ev: 'static,
        NewEv: 'static + Send,
    {
        Timer::new(self.context.map_event(f))
    }
}

impl<E> Timer<E>
where
    E: 'static,
{
    pub fn new(context: CapabilityContext<TimerOperation, E>) -> Self {
        Self { context }
    }

    /// Ask the shell to fire after `duration_ms`. The shell answers with
    /// [`TimerOutput::Elapsed`] carrying the same token, or
    /// [`TimerOutput::Cancelled`] if it saw a cancel first.
    pub fn start<F>(&self, token: IdleTimerToken, duration_ms: u64, make_event: F)
    where
        F: Fn(TimerOutput) -> E + Send + Sync + 'static,
    {
        let context = self.context.clone();
        self.context.spawn(async move {
            let output = context
                .request_from_shell(TimerOperation::Start { token, duration_ms })
                .await;
            context.update_app(make_event(output));
        });
    }

    /// Best-effort cancel. The app treats stale tokens as inert, so a
    /// shell that already fired the timer causes no harm.
    pub fn cancel(&self, token: IdleTimerToken) {
        let context = self.context.clone();
        self.context.spawn(async move {
            context.notify_shell(TimerOperation::Cancel { token }).await;
        });
    }
}

pub type TimerCapability = Timer<crate::event::Event>;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum TimerOperation {
    Start { token: IdleTimerToken, duration_ms: u64 },
    Cancel { token: IdleTimerToken },
}

impl Operation for TimerOperation {
    type Output = TimerOutput;
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum TimerOutput {
    Elapsed { token: IdleTimerToken },
    Cancelled { token: IdleTimerToken },
}
