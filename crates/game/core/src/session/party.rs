use crate::state::{ActorId, ItemId};

/// The active party and its shared item stock.
pub trait Party {
    /// Number of members taking part in battle.
    fn battler_count(&self) -> usize;

    /// Ordinal of `actor` within the party, `None` if it is not a member.
    fn position_of(&self, actor: ActorId) -> Option<usize>;

    fn add_item(&mut self, item: ItemId, count: u32);

    fn remove_item(&mut self, item: ItemId, count: u32);
}
