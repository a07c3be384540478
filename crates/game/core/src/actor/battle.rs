use super::Actor;
use crate::battle::{CommandSlot, PlacementContext, resolve_commands};
use crate::env::{BattleCommand, TerrainDefinition};
use crate::session::{BattleState, Party};
use crate::state::{BattleRow, StateId, TerrainId};

/// Base hit chance of every actor, in percent.
pub const HIT_CHANCE: i32 = 90;

/// Geometry used when the current terrain has no record.
static FALLBACK_TERRAIN: TerrainDefinition = TerrainDefinition {
    id: TerrainId(0),
    name: String::new(),
    grid_top: 0,
    grid_elongation: 0,
    grid_inclination: 0,
};

impl<'a> Actor<'a> {
    pub fn battle_row(&self) -> BattleRow {
        self.state.row
    }

    pub fn set_battle_row(&mut self, row: BattleRow) {
        self.state.row = row;
    }

    /// Horizontal battle coordinate on the active screen.
    pub fn battle_x(&self, party: &dyn Party, battle: &dyn BattleState) -> i32 {
        self.placement(party, battle)
            .x(self.archetype.battle_x, self.state.row)
    }

    /// Vertical battle coordinate on the active screen.
    pub fn battle_y(&self, party: &dyn Party, battle: &dyn BattleState) -> i32 {
        self.placement(party, battle).y(self.archetype.battle_y)
    }

    fn placement(&self, party: &dyn Party, battle: &dyn BattleState) -> PlacementContext<'a> {
        let terrain_id = battle.terrain();
        let terrain = self.env.battle().terrain(terrain_id).unwrap_or_else(|| {
            tracing::warn!(terrain = %terrain_id, "terrain missing, placing on empty grid");
            &FALLBACK_TERRAIN
        });
        let (screen_width, screen_height) = self.env.config().screen_size();

        PlacementContext {
            terrain,
            mode: battle.mode(),
            placement: self.env.battle().placement(),
            party_size: party.battler_count(),
            party_position: party.position_of(self.state.id),
            screen_width,
            screen_height,
        }
    }

    /// Battle menu after applying this actor's overrides.
    pub fn battle_commands(&self) -> Vec<&'a BattleCommand> {
        resolve_commands(
            self.state.battle_commands.as_slice(),
            &self.archetype.battle_commands,
            self.env.battle(),
        )
    }

    /// Edits the override list with a raw command value.
    ///
    /// Adding keeps the list unique and sorted. Removing `0` clears the
    /// whole list; any other value removes that entry.
    pub fn change_battle_commands(&mut self, add: bool, raw: i32) {
        let slot = CommandSlot::from_raw(raw);
        let commands = &mut self.state.battle_commands;

        if add {
            commands.add(slot);
        } else if raw == 0 {
            commands.clear();
        } else {
            commands.remove(slot);
        }
    }

    /// Susceptibility rank for `state`; 3 where the archetype leaves it unset.
    pub fn state_rank(&self, state: StateId) -> u8 {
        self.archetype.state_rank(state)
    }

    pub fn hit_chance(&self) -> i32 {
        HIT_CHANCE
    }

    pub fn critical_hit_chance(&self) -> i32 {
        if self.archetype.critical_hit {
            self.archetype.critical_hit_chance
        } else {
            0
        }
    }

    /// Battler animation, only used by the newer engine.
    pub fn battle_animation(&self) -> Option<i32> {
        self.env
            .variant()
            .has_battle_animations()
            .then_some(self.archetype.battler_animation)
    }
}

#[cfg(test)]
mod tests {
    use crate::Actor;
    use crate::battle::CommandSlot;
    use crate::config::{EngineVariant, GameConfig};
    use crate::session::BattleMode;
    use crate::state::{BattleRow, CommandId, StateId, TerrainId};
    use crate::testing::{self, ALEX, BRIANNA, FixedBattle, RecordingParty};

    fn names(actor: &Actor<'_>) -> Vec<String> {
        actor
            .battle_commands()
            .iter()
            .map(|command| command.name.clone())
            .collect()
    }

    #[test]
    fn pair_lead_in_back_attack_stands_at_band_edge() {
        let db = testing::database();
        let config = testing::config();
        let actor = Actor::new(ALEX, db.env(&config)).unwrap();
        let party = RecordingParty::new(vec![ALEX, BRIANNA]);
        let battle = FixedBattle::new(testing::PLAINS, BattleMode::BackAttack);

        // front band 50..80
        assert_eq!(actor.battle_x(&party, &battle), 80);
        assert_eq!(actor.battle_y(&party, &battle), 120 - 24);
    }

    #[test]
    fn back_row_shifts_band_left() {
        let db = testing::database();
        let config = testing::config();
        let mut actor = Actor::new(ALEX, db.env(&config)).unwrap();
        let party = RecordingParty::new(vec![ALEX]);
        let battle = FixedBattle::new(testing::PLAINS, BattleMode::Normal);

        let front = actor.battle_x(&party, &battle);
        actor.set_battle_row(BattleRow::Back);
        assert_eq!(actor.battle_x(&party, &battle), front + 25);
    }

    #[test]
    fn fixed_coordinates_scale_with_screen() {
        let mut db = testing::database();
        db.actors[0].battle_x = 160;
        db.actors[0].battle_y = 120;
        let config = GameConfig::default().with_screen_size(640, 480);
        let actor = Actor::new(ALEX, db.env(&config)).unwrap();
        let party = RecordingParty::new(vec![ALEX]);
        let battle = FixedBattle::new(testing::PLAINS, BattleMode::Normal);

        assert_eq!(actor.battle_x(&party, &battle), 320);
        assert_eq!(actor.battle_y(&party, &battle), 240);
    }

    #[test]
    fn missing_terrain_uses_empty_grid() {
        let db = testing::database();
        let config = testing::config();
        let actor = Actor::new(ALEX, db.env(&config)).unwrap();
        let party = RecordingParty::new(vec![ALEX]);
        let battle = FixedBattle::new(TerrainId(40), BattleMode::BackAttack);

        assert_eq!(actor.battle_x(&party, &battle), 50);
        assert_eq!(actor.battle_y(&party, &battle), -24);
    }

    #[test]
    fn fresh_actor_uses_archetype_menu() {
        let db = testing::database();
        let config = testing::config();
        let actor = Actor::new(ALEX, db.env(&config)).unwrap();

        assert_eq!(names(&actor), vec!["Attack", "Skill", "Item"]);
    }

    #[test]
    fn added_command_sorts_ahead_of_deferring_entries() {
        let db = testing::database();
        let config = testing::config();
        let mut actor = Actor::new(ALEX, db.env(&config)).unwrap();

        actor.change_battle_commands(true, 3);

        let slots = actor.state().battle_commands.as_slice();
        assert_eq!(slots[0], CommandSlot::Command(CommandId(3)));
        assert!(slots[1..].iter().all(|&slot| slot == CommandSlot::Default));
        // position 2 defers to the archetype's row entry
        assert_eq!(names(&actor), vec!["Defend", "Skill", "Item"]);
    }

    #[test]
    fn overrides_can_be_added_removed_and_cleared() {
        let db = testing::database();
        let config = testing::config();
        let mut actor = Actor::new(ALEX, db.env(&config)).unwrap();

        actor.change_battle_commands(false, 0);
        assert!(names(&actor).is_empty());

        actor.change_battle_commands(true, 3);
        actor.change_battle_commands(true, 1);
        actor.change_battle_commands(true, 3);
        assert_eq!(names(&actor), vec!["Attack", "Defend"]);

        actor.change_battle_commands(false, 1);
        assert_eq!(names(&actor), vec!["Defend"]);
        assert_eq!(
            actor.state().battle_commands.as_slice(),
            &[CommandSlot::Command(CommandId(3))]
        );
    }

    #[test]
    fn battle_queries_follow_archetype() {
        let db = testing::database();
        let config = testing::config();
        let actor = Actor::new(ALEX, db.env(&config)).unwrap();

        assert_eq!(actor.hit_chance(), 90);
        assert_eq!(actor.critical_hit_chance(), 30);
        assert_eq!(actor.state_rank(StateId(1)), 3);
        assert_eq!(actor.battle_animation(), None);

        let brianna = Actor::new(BRIANNA, db.env(&config)).unwrap();
        assert_eq!(brianna.critical_hit_chance(), 0);

        let config = GameConfig::new(EngineVariant::Rpg2k3);
        let actor = Actor::new(ALEX, db.env(&config)).unwrap();
        assert_eq!(actor.battle_animation(), Some(1));
    }
}
