//! Battle screen coordinates of party members.
//!
//! Actors either keep a fixed coordinate authored at the reference
//! resolution, or are laid out on a band derived from the terrain grid.
//!
//! For parties of two to four members every ordinal uses the four-member
//! spacing (`1`, `2/3`, `1/3`, `0` along the band). Smaller parties are
//! therefore not spread evenly; the layout has always looked like this and
//! saved screenshots and custom battle backgrounds depend on it.

use crate::config::GameConfig;
use crate::env::{Placement, TerrainDefinition};
use crate::session::BattleMode;
use crate::state::BattleRow;

/// Sprite anchor offset subtracted from automatic vertical positions.
pub const SPRITE_ANCHOR_OFFSET: f32 = 24.0;

/// Everything the layout depends on besides the actor's own data.
#[derive(Clone, Copy, Debug)]
pub struct PlacementContext<'a> {
    pub terrain: &'a TerrainDefinition,
    pub mode: BattleMode,
    pub placement: Placement,
    pub party_size: usize,
    /// Ordinal of the actor in the party, `None` when not a member.
    pub party_position: Option<usize>,
    pub screen_width: i32,
    pub screen_height: i32,
}

/// Position along a band, as `numerator / denominator` of its length.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum BandPoint {
    Start,
    Fraction(u8, u8),
    End,
}

impl BandPoint {
    fn on(self, start: f32, end: f32) -> f32 {
        match self {
            Self::Start => start,
            Self::End => end,
            Self::Fraction(numerator, denominator) => {
                let offset = f64::from(end - start) * f64::from(numerator) / f64::from(denominator);
                (f64::from(start) + offset) as f32
            }
        }
    }
}

/// Point on the band for `position`, counted from the band end.
fn band_point(party_size: usize, position: Option<usize>) -> Option<BandPoint> {
    match (party_size, position) {
        (1, _) => Some(BandPoint::Fraction(1, 2)),
        (2..=4, Some(0)) => Some(BandPoint::End),
        (2..=4, Some(1)) => Some(BandPoint::Fraction(2, 3)),
        (2..=4, Some(2)) => Some(BandPoint::Fraction(1, 3)),
        (2..=4, Some(3)) => Some(BandPoint::Start),
        _ => None,
    }
}

/// Mirror image of [`band_point`] for the vertical band, counted from the top.
fn vertical_point(party_size: usize, position: Option<usize>) -> Option<BandPoint> {
    band_point(party_size, position).map(|point| match point {
        BandPoint::End => BandPoint::Start,
        BandPoint::Start => BandPoint::End,
        BandPoint::Fraction(1, 2) => BandPoint::Fraction(1, 2),
        BandPoint::Fraction(numerator, denominator) => {
            BandPoint::Fraction(denominator - numerator, denominator)
        }
    })
}

impl PlacementContext<'_> {
    /// Horizontal coordinate. `fixed` is the archetype's authored x, 0 for none.
    pub fn x(&self, fixed: i32, row: BattleRow) -> i32 {
        if fixed != 0 && self.placement != Placement::Automatic {
            return fixed * self.screen_width / GameConfig::REFERENCE_WIDTH;
        }

        let left: f32 = match row {
            BattleRow::Back => 25.0,
            BattleRow::Front => 50.0,
        };
        let right = left + (self.terrain.grid_inclination / 1103) as f32;

        let offset = band_point(self.party_size, self.party_position)
            .map_or(0.0, |point| point.on(left, right));

        if self.mode.is_mirrored() {
            (self.screen_width as f32 - offset) as i32
        } else {
            offset as i32
        }
    }

    /// Vertical coordinate. `fixed` is the archetype's authored y, 0 for none.
    pub fn y(&self, fixed: i32) -> i32 {
        if fixed != 0 && self.placement != Placement::Automatic {
            return fixed * self.screen_height / GameConfig::REFERENCE_HEIGHT;
        }

        let top = self.terrain.grid_top as f32;
        let bottom = top + (self.terrain.grid_elongation / 13) as f32;

        let offset = vertical_point(self.party_size, self.party_position)
            .map_or(0.0, |point| point.on(top, bottom));

        (offset - SPRITE_ANCHOR_OFFSET) as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn terrain() -> TerrainDefinition {
        TerrainDefinition {
            grid_top: 120,
            grid_elongation: 13 * 60,
            grid_inclination: 1103 * 30,
            ..TerrainDefinition::default()
        }
    }

    fn context(
        terrain: &TerrainDefinition,
        party_size: usize,
        position: usize,
        mode: BattleMode,
    ) -> PlacementContext<'_> {
        PlacementContext {
            terrain,
            mode,
            placement: Placement::Manual,
            party_size,
            party_position: Some(position),
            screen_width: 320,
            screen_height: 240,
        }
    }

    #[test]
    fn solo_actor_stands_mid_band() {
        let terrain = terrain();
        let ctx = context(&terrain, 1, 0, BattleMode::BackAttack);
        // front band 50..80
        assert_eq!(ctx.x(0, BattleRow::Front), 65);
        // vertical band 120..180, minus anchor
        assert_eq!(ctx.y(0), 150 - 24);
    }

    #[test]
    fn pair_uses_four_member_spacing() {
        let terrain = terrain();
        let lead = context(&terrain, 2, 0, BattleMode::BackAttack);
        let second = context(&terrain, 2, 1, BattleMode::BackAttack);

        assert_eq!(lead.x(0, BattleRow::Front), 80);
        assert_eq!(second.x(0, BattleRow::Front), 70);
        assert_eq!(lead.y(0), 120 - 24);
        assert_eq!(second.y(0), 140 - 24);
    }

    #[test]
    fn trio_uses_four_member_spacing() {
        let terrain = terrain();
        let xs: Vec<i32> = (0..3)
            .map(|p| context(&terrain, 3, p, BattleMode::BackAttack).x(0, BattleRow::Front))
            .collect();
        assert_eq!(xs, vec![80, 70, 60]);
    }

    #[test]
    fn quartet_spans_the_whole_band() {
        let terrain = terrain();
        let ys: Vec<i32> = (0..4)
            .map(|p| context(&terrain, 4, p, BattleMode::Normal).y(0))
            .collect();
        assert_eq!(ys, vec![96, 116, 136, 156]);

        let xs: Vec<i32> = (0..4)
            .map(|p| context(&terrain, 4, p, BattleMode::Normal).x(0, BattleRow::Back))
            .collect();
        // back band 25..55, mirrored against 320
        assert_eq!(xs, vec![265, 275, 285, 295]);
    }

    #[test]
    fn every_mode_but_back_attack_mirrors() {
        let terrain = terrain();
        for mode in [
            BattleMode::Normal,
            BattleMode::Initiative,
            BattleMode::Pincer,
            BattleMode::Surround,
        ] {
            assert_eq!(context(&terrain, 2, 0, mode).x(0, BattleRow::Front), 240);
        }
        assert_eq!(
            context(&terrain, 2, 0, BattleMode::BackAttack).x(0, BattleRow::Front),
            80
        );
    }

    #[test]
    fn unknown_ordinal_falls_back_to_origin() {
        let terrain = terrain();
        let mut ctx = context(&terrain, 3, 0, BattleMode::BackAttack);
        ctx.party_position = None;
        assert_eq!(ctx.x(0, BattleRow::Front), 0);
        assert_eq!(ctx.y(0), -24);

        let ctx = context(&terrain, 5, 0, BattleMode::Normal);
        assert_eq!(ctx.x(0, BattleRow::Front), 320);
    }

    #[test]
    fn fixed_coordinates_scale_to_screen() {
        let terrain = terrain();
        let mut ctx = context(&terrain, 4, 2, BattleMode::Normal);
        ctx.screen_width = 640;
        ctx.screen_height = 480;

        assert_eq!(ctx.x(200, BattleRow::Front), 400);
        assert_eq!(ctx.y(100), 200);

        ctx.placement = Placement::Automatic;
        assert_ne!(ctx.x(200, BattleRow::Front), 400);
    }
}
