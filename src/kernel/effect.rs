/// Follow-up work a committed transition hands back to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    PersistSnapshot,
}
