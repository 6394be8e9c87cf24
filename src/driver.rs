use babel17_common::message::Messages;

/// Where diagnostics end up.
pub trait Driver {
    fn report(&mut self, messages: Messages) -> anyhow::Result<()>;
}
