//! Natural-language description of the player's surroundings.
//!
//! Two passes collect [`Sighting`]s:
//!
//! 1. **Salient pass.** Every cell on the map other than the player's own
//!    is classified; creatures, objects, dungeon features, and traps are
//!    reported wherever they are.
//! 2. **Ambient pass.** Walls, openings, effects, and unlit fill are only
//!    reported close by, along the eight straight rays leaving the
//!    player. A ray ends past the ambient cutoff tier, at the grid edge,
//!    or just after a cell that blocks the view.
//!
//! Sightings are ordered farthest tier first, then clockwise from north,
//! and grouped by `(name, tier)`. A group seen at a single bearing is one
//! line with the name pluralized when it has several members; a group
//! spread over several bearings lists the bearings instead.

use indexmap::IndexMap;
use smallvec::SmallVec;
use tracing::trace;

use nletext_core::{BoundsError, EncodeError, GlyphGrid, MapPos};
use nletext_glyph::{GlyphCatalog, GlyphDescriptor, Salience};
use nletext_space::{
    march, Bearing, CompassResolver, DistanceTier, Heading, RayDirection, SpaceError,
    TierThresholds,
};

/// Configuration for [`SpatialDescriber`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurroundingsConfig {
    /// Distance tier boundaries. Default: [`TierThresholds::default`].
    pub thresholds: TierThresholds,
    /// Farthest tier at which ambient terrain is reported.
    /// Default: [`DistanceTier::VeryNear`].
    pub ambient_cutoff: DistanceTier,
}

impl Default for SurroundingsConfig {
    fn default() -> Self {
        Self {
            thresholds: TierThresholds::default(),
            ambient_cutoff: DistanceTier::VeryNear,
        }
    }
}

/// One thing seen from the player's cell.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sighting<'c> {
    /// What was seen.
    pub descriptor: &'c GlyphDescriptor,
    /// Where, relative to the player.
    pub heading: Heading,
}

struct Group<'c> {
    descriptor: &'c GlyphDescriptor,
    members: usize,
    bearings: SmallVec<[Bearing; 8]>,
}

/// Describes the map around the player.
#[derive(Clone, Copy, Debug)]
pub struct SpatialDescriber<'c> {
    catalog: &'c GlyphCatalog,
    compass: CompassResolver,
    ambient_cutoff: DistanceTier,
}

impl<'c> SpatialDescriber<'c> {
    /// Create a describer over `catalog`.
    pub fn new(catalog: &'c GlyphCatalog, config: &SurroundingsConfig) -> Result<Self, SpaceError> {
        Ok(Self {
            catalog,
            compass: CompassResolver::new(config.thresholds)?,
            ambient_cutoff: config.ambient_cutoff,
        })
    }

    /// Render the surroundings of `player` as newline-separated lines.
    ///
    /// Returns an empty string when nothing is worth reporting.
    pub fn describe(&self, grid: &GlyphGrid<'_>, player: MapPos) -> Result<String, EncodeError> {
        let sightings = self.sightings(grid, player)?;
        let mut groups: IndexMap<(&str, DistanceTier), Group<'c>> = IndexMap::new();
        for s in &sightings {
            let group = groups
                .entry((s.descriptor.base_name.as_str(), s.heading.tier))
                .or_insert_with(|| Group {
                    descriptor: s.descriptor,
                    members: 0,
                    bearings: SmallVec::new(),
                });
            group.members += 1;
            if !group.bearings.contains(&s.heading.bearing) {
                group.bearings.push(s.heading.bearing);
            }
        }

        let lines: Vec<String> = groups
            .iter()
            .map(|((_, tier), group)| render_group(group, *tier))
            .collect();
        trace!(
            sightings = sightings.len(),
            lines = lines.len(),
            "described surroundings"
        );
        Ok(lines.join("\n"))
    }

    /// Everything reported around `player`, in output order.
    pub fn sightings(
        &self,
        grid: &GlyphGrid<'_>,
        player: MapPos,
    ) -> Result<Vec<Sighting<'c>>, EncodeError> {
        if !grid.contains(player) {
            return Err(BoundsError::PlayerOutOfBounds {
                pos: player,
                rows: grid.rows(),
                cols: grid.cols(),
            }
            .into());
        }

        let mut out = Vec::new();
        for (pos, code) in grid.iter() {
            if pos == player {
                continue;
            }
            let descriptor = self.catalog.classify(code)?;
            if descriptor.salience() != Salience::Salient {
                continue;
            }
            let Ok(heading) = self.compass.resolve(pos.row - player.row, pos.col - player.col)
            else {
                continue;
            };
            out.push(Sighting {
                descriptor,
                heading,
            });
        }
        self.ambient_pass(grid, player, &mut out)?;

        out.sort_by_key(|s| {
            (
                std::cmp::Reverse(s.heading.tier),
                s.heading.bearing.index(),
            )
        });
        Ok(out)
    }

    fn ambient_pass(
        &self,
        grid: &GlyphGrid<'_>,
        player: MapPos,
        out: &mut Vec<Sighting<'c>>,
    ) -> Result<(), EncodeError> {
        for dir in RayDirection::ALL {
            for (pos, d_row, d_col) in march(grid.rows(), grid.cols(), player, dir) {
                let Ok(heading) = self.compass.resolve(d_row, d_col) else {
                    break;
                };
                if heading.tier > self.ambient_cutoff {
                    break;
                }
                let Some(code) = grid.get(pos) else {
                    break;
                };
                let descriptor = self.catalog.classify(code)?;
                if descriptor.salience() != Salience::Ambient {
                    continue;
                }
                out.push(Sighting {
                    descriptor,
                    heading,
                });
                if descriptor.blocks_view {
                    break;
                }
            }
        }
        Ok(())
    }
}

fn render_group(group: &Group<'_>, tier: DistanceTier) -> String {
    match group.bearings.as_slice() {
        [bearing] => {
            let name = if group.members > 1 {
                group.descriptor.plural_name()
            } else {
                group.descriptor.base_name.clone()
            };
            format!("{name} {tier} {bearing}")
        }
        bearings => format!(
            "{} {tier} {}",
            group.descriptor.base_name,
            join_bearings(bearings)
        ),
    }
}

/// "a", "a and b", or "a, b, and c".
fn join_bearings(bearings: &[Bearing]) -> String {
    match bearings {
        [] => String::new(),
        [only] => only.to_string(),
        [first, second] => format!("{first} and {second}"),
        [init @ .., last] => {
            let head: Vec<&str> = init.iter().map(|b| b.name()).collect();
            format!("{}, and {last}", head.join(", "))
        }
    }
}
