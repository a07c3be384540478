//! Shared fixtures for unit tests.

use crate::Actor;
use crate::battle::CommandSlot;
use crate::config::{EngineVariant, GameConfig};
use crate::env::{
    ArchetypeDefinition, BattleCommand, ClassDefinition, Database, EquipBonuses, ExpCurveParams,
    ItemDefinition, ItemKind, Learning, ParameterCurves, SkillDefinition, StatGains,
    TerrainDefinition,
};
use crate::session::{BattleMode, BattleState, BattlerRules, Party};
use crate::state::{ActorId, ClassId, CommandId, Equipment, ItemId, SkillId, TerrainId};

pub const ALEX: ActorId = ActorId(1);
pub const BRIANNA: ActorId = ActorId(2);

pub const KNIGHT: ClassId = ClassId(1);

pub const HEAL: SkillId = SkillId(1);
pub const FIRE: SkillId = SkillId(2);
pub const ICE: SkillId = SkillId(3);
pub const THUNDER: SkillId = SkillId(4);

pub const SWORD: ItemId = ItemId(1);
pub const BUCKLER: ItemId = ItemId(2);
pub const POTION: ItemId = ItemId(3);
pub const TOME: ItemId = ItemId(4);
pub const SEED: ItemId = ItemId(5);
pub const RING: ItemId = ItemId(6);

pub const SWORD_ATTACK: i32 = 10;
pub const SEED_MAX_HP: i32 = 50;
pub const SEED_ATTACK: i32 = 3;

pub const PLAINS: TerrainId = TerrainId(1);

const FINAL_LEVEL: i32 = 10;

/// Linear per-level table: `start + step * (level - 1)`.
fn curve(start: i32, step: i32) -> Vec<i32> {
    (0..FINAL_LEVEL).map(|n| start + step * n).collect()
}

fn parameters(scale: i32) -> ParameterCurves {
    ParameterCurves {
        max_hp: curve(100 * scale, 20),
        max_sp: curve(20 * scale, 5),
        attack: curve(15 * scale, 2),
        defense: curve(12 * scale, 2),
        spirit: curve(10 * scale, 1),
        agility: curve(11 * scale, 1),
    }
}

fn learnings() -> Vec<Learning> {
    vec![
        Learning::new(1, HEAL),
        Learning::new(4, FIRE),
        Learning::new(5, ICE),
    ]
}

fn skill(id: SkillId, name: &str, sp_cost: i32) -> SkillDefinition {
    SkillDefinition {
        id,
        name: name.to_string(),
        sp_cost,
    }
}

fn item(id: ItemId, name: &str, kind: ItemKind) -> ItemDefinition {
    ItemDefinition {
        id,
        name: name.to_string(),
        kind,
        ..ItemDefinition::default()
    }
}

fn command(id: u16, name: &str) -> BattleCommand {
    BattleCommand {
        id: CommandId(id),
        name: name.to_string(),
    }
}

pub fn database() -> Database {
    let alex = ArchetypeDefinition {
        id: ALEX,
        name: "Alex".into(),
        title: "Hero".into(),
        final_level: FINAL_LEVEL,
        exp: ExpCurveParams::new(40, 30, 0),
        parameters: parameters(1),
        initial_equipment: Equipment::builder().weapon(SWORD).build(),
        skills: learnings(),
        skill_name: "Magic".into(),
        battle_commands: vec![
            CommandSlot::Command(CommandId(1)),
            CommandSlot::Command(CommandId(2)),
            CommandSlot::Row,
            CommandSlot::Command(CommandId(4)),
            CommandSlot::Default,
        ],
        ..ArchetypeDefinition::default()
    };

    let brianna = ArchetypeDefinition {
        id: BRIANNA,
        name: "Brianna".into(),
        initial_level: 3,
        final_level: FINAL_LEVEL,
        exp: ExpCurveParams::new(25, 20, 5),
        parameters: parameters(1),
        two_weapon: true,
        skills: learnings(),
        critical_hit: false,
        ..ArchetypeDefinition::default()
    };

    let knight = ClassDefinition {
        id: KNIGHT,
        name: "Knight".into(),
        exp: ExpCurveParams::new(20, 10, 0),
        parameters: parameters(2),
    };

    let mut sword = item(SWORD, "Sword", ItemKind::Weapon);
    sword.equip.attack = SWORD_ATTACK;
    let mut buckler = item(BUCKLER, "Buckler", ItemKind::Shield);
    buckler.equip.defense = 5;
    let mut ring = item(RING, "Ring", ItemKind::Accessory);
    ring.equip = EquipBonuses {
        agility: 5,
        ..EquipBonuses::default()
    };
    ring.actor_set = vec![true, false];

    Database {
        actors: vec![alex, brianna],
        classes: vec![knight],
        items: vec![
            sword,
            buckler,
            item(POTION, "Potion", ItemKind::Medicine),
            item(TOME, "Thunder Tome", ItemKind::Book { skill: THUNDER }),
            item(
                SEED,
                "Power Seed",
                ItemKind::Material(StatGains {
                    max_hp: SEED_MAX_HP,
                    attack: SEED_ATTACK,
                    ..StatGains::default()
                }),
            ),
            ring,
        ],
        skills: vec![
            skill(HEAL, "Heal", 5),
            skill(FIRE, "Fire", 8),
            skill(ICE, "Ice", 8),
            skill(THUNDER, "Thunder", 12),
        ],
        terrains: vec![TerrainDefinition {
            id: PLAINS,
            name: "Plains".into(),
            grid_top: 120,
            grid_elongation: 13 * 60,
            grid_inclination: 1103 * 30,
        }],
        commands: vec![
            command(1, "Attack"),
            command(2, "Skill"),
            command(3, "Defend"),
            command(4, "Item"),
        ],
        ..Database::default()
    }
}

pub fn config() -> GameConfig {
    GameConfig::new(EngineVariant::Rpg2k)
}

/// Party that records every stock change.
#[derive(Debug, Default)]
pub struct RecordingParty {
    pub members: Vec<ActorId>,
    pub added: Vec<(ItemId, u32)>,
    pub removed: Vec<(ItemId, u32)>,
}

impl RecordingParty {
    pub fn new(members: Vec<ActorId>) -> Self {
        Self {
            members,
            ..Self::default()
        }
    }
}

impl Party for RecordingParty {
    fn battler_count(&self) -> usize {
        self.members.len()
    }

    fn position_of(&self, actor: ActorId) -> Option<usize> {
        self.members.iter().position(|&member| member == actor)
    }

    fn add_item(&mut self, item: ItemId, count: u32) {
        self.added.push((item, count));
    }

    fn remove_item(&mut self, item: ItemId, count: u32) {
        self.removed.push((item, count));
    }
}

#[derive(Clone, Copy, Debug)]
pub struct FixedBattle {
    pub terrain: TerrainId,
    pub mode: BattleMode,
}

impl FixedBattle {
    pub fn new(terrain: TerrainId, mode: BattleMode) -> Self {
        Self { terrain, mode }
    }
}

impl BattleState for FixedBattle {
    fn terrain(&self) -> TerrainId {
        self.terrain
    }

    fn mode(&self) -> BattleMode {
        self.mode
    }
}

/// Rules that only check SP and accept every item, recording what was used.
#[derive(Debug, Default)]
pub struct PermissiveBattler {
    pub used: Vec<ItemId>,
}

impl BattlerRules for PermissiveBattler {
    fn is_skill_usable(&self, actor: &Actor<'_>, skill: &SkillDefinition) -> bool {
        actor.sp() >= skill.sp_cost
    }

    fn use_item(&mut self, _actor: &mut Actor<'_>, item: &ItemDefinition) -> bool {
        self.used.push(item.id);
        true
    }
}
