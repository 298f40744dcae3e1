//! The glyph catalog: a dense table of descriptors, one per glyph code.

use std::sync::LazyLock;

use nletext_core::{ClassificationError, GlyphCode};

use crate::cmap::{CMAP, EXPLOSION_CELLS, SWALLOW_CELLS, WARNING_LEVELS, ZAP_SHAPES};
use crate::descriptor::{GlyphCategory, GlyphDescriptor};
use crate::layout::{GlyphLayout, GlyphRange};
use crate::monsters::MONSTERS;
use crate::objects::OBJECTS;

static SHARED: LazyLock<GlyphCatalog> = LazyLock::new(GlyphCatalog::nethack_3_6);

/// Immutable mapping from glyph code to [`GlyphDescriptor`].
///
/// Built once; [`classify`](Self::classify) is a bounds check and an index.
/// Use [`GlyphCatalog::shared`] to borrow the process-wide instance.
#[derive(Debug)]
pub struct GlyphCatalog {
    layout: GlyphLayout,
    descriptors: Vec<GlyphDescriptor>,
}

impl GlyphCatalog {
    /// Build the catalog for the NetHack 3.6 numbering.
    pub fn nethack_3_6() -> Self {
        let layout = GlyphLayout::NETHACK_3_6;
        let descriptors = (0..layout.max_glyph())
            .filter_map(|code| layout.locate(code))
            .map(|(range, offset)| describe(&layout, range, usize::from(offset)))
            .collect();
        Self {
            layout,
            descriptors,
        }
    }

    /// The process-wide catalog, built on first use.
    pub fn shared() -> &'static GlyphCatalog {
        &SHARED
    }

    /// The numbering this catalog covers.
    pub fn layout(&self) -> &GlyphLayout {
        &self.layout
    }

    /// Number of glyph codes covered.
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// Descriptor for `code`.
    pub fn classify(
        &self,
        code: impl Into<GlyphCode>,
    ) -> Result<&GlyphDescriptor, ClassificationError> {
        let code = code.into();
        usize::try_from(code.0)
            .ok()
            .and_then(|i| self.descriptors.get(i))
            .ok_or(ClassificationError::UnknownGlyph {
                code,
                max: self.layout.max_glyph(),
            })
    }
}

fn describe(layout: &GlyphLayout, range: GlyphRange, offset: usize) -> GlyphDescriptor {
    let monster = |i: usize| MONSTERS[i % MONSTERS.len()];
    match range {
        GlyphRange::Monster => GlyphDescriptor::new(GlyphCategory::Monster, monster(offset)),
        GlyphRange::Pet => {
            GlyphDescriptor::new(GlyphCategory::Pet, format!("tame {}", monster(offset)))
        }
        GlyphRange::Invisible => {
            GlyphDescriptor::new(GlyphCategory::Invisible, "invisible creature")
        }
        GlyphRange::Detected => GlyphDescriptor::new(
            GlyphCategory::Detected,
            format!("detected {}", monster(offset)),
        ),
        GlyphRange::Body => {
            GlyphDescriptor::new(GlyphCategory::Corpse, format!("{} corpse", monster(offset)))
        }
        GlyphRange::Ridden => GlyphDescriptor::new(
            GlyphCategory::Ridden,
            format!("ridden {}", monster(offset)),
        ),
        GlyphRange::Object => {
            let obj = &OBJECTS[offset];
            GlyphDescriptor::new(GlyphCategory::Object(obj.class), obj.display_name())
        }
        GlyphRange::Cmap => {
            let (name, category) = CMAP[offset];
            GlyphDescriptor::new(category, name)
        }
        GlyphRange::Explosion => GlyphDescriptor::new(
            GlyphCategory::Explosion,
            EXPLOSION_CELLS[offset % usize::from(layout.explosion_cells)],
        ),
        GlyphRange::Zap => GlyphDescriptor::new(
            GlyphCategory::ZapBeam,
            ZAP_SHAPES[offset % usize::from(layout.zap_shapes)],
        ),
        GlyphRange::Swallow => GlyphDescriptor::new(
            GlyphCategory::Swallow,
            SWALLOW_CELLS[offset % usize::from(layout.swallow_cells)],
        ),
        GlyphRange::Warning => {
            GlyphDescriptor::new(GlyphCategory::Warning, WARNING_LEVELS[offset])
        }
        GlyphRange::Statue => {
            GlyphDescriptor::new(GlyphCategory::Statue, format!("{} statue", monster(offset)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::{ObjectClass, Salience, TerrainKind};
    use proptest::prelude::*;

    fn name(code: i32) -> String {
        GlyphCatalog::shared()
            .classify(code)
            .unwrap()
            .base_name
            .clone()
    }

    #[test]
    fn covers_every_code() {
        let cat = GlyphCatalog::shared();
        assert_eq!(cat.len(), 5976);
        assert!(!cat.is_empty());
    }

    #[test]
    fn monster_family_names() {
        assert_eq!(name(255), "iron golem");
        assert_eq!(name(613), "tame yeti");
        assert_eq!(name(762), "invisible creature");
        assert_eq!(name(917), "detected water elemental");
        assert_eq!(name(1226), "leocrotta corpse");
        assert_eq!(name(1611), "ridden mastodon");
        assert_eq!(name(5653), "kobold statue");
    }

    #[test]
    fn effect_names() {
        assert_eq!(name(5593), "unknown creature causing you alarm");
        assert_eq!(name(5332), "swallow bottom right");
        assert_eq!(name(2528), "right slant zap beam");
        assert_eq!(name(2460), "explosion middle right");
    }

    #[test]
    fn object_and_terrain_names() {
        assert_eq!(name(1906), "strange object");
        assert_eq!(name(2206), "scroll labeled NR 9");
        assert_eq!(name(2333), "violet amethyst");
        assert_eq!(name(2358), "splash of acid venom");
        assert_eq!(name(2359), "dark area");
        assert_eq!(name(2374), "vertical closed door");
        assert_eq!(name(2390), "fountain");
        assert_eq!(name(2393), "lava");
        assert_eq!(name(2386), "altar");
    }

    #[test]
    fn categories() {
        let cat = GlyphCatalog::shared();
        assert_eq!(
            cat.classify(2316).unwrap().category,
            GlyphCategory::Object(ObjectClass::Coin)
        );
        assert_eq!(
            cat.classify(2378).unwrap().category,
            GlyphCategory::Terrain(TerrainKind::Floor)
        );
        assert_eq!(cat.classify(2359).unwrap().salience(), Salience::Ambient);
        assert_eq!(cat.classify(2390).unwrap().salience(), Salience::Salient);
        assert_eq!(cat.classify(2401).unwrap().salience(), Salience::Salient);
    }

    #[test]
    fn rejects_out_of_range() {
        let cat = GlyphCatalog::shared();
        assert_eq!(
            cat.classify(5976),
            Err(ClassificationError::UnknownGlyph {
                code: GlyphCode(5976),
                max: 5976
            })
        );
        assert!(cat.classify(-1).is_err());
    }

    proptest! {
        #[test]
        fn every_valid_code_has_a_clean_name(code in 0i32..5976) {
            let d = GlyphCatalog::shared().classify(code).unwrap();
            prop_assert!(!d.base_name.is_empty());
            prop_assert_eq!(d.base_name.trim(), d.base_name.as_str());
            prop_assert!(!d.base_name.contains("  "));
        }

        #[test]
        fn pet_names_wrap_monster_names(i in 0i32..381) {
            let cat = GlyphCatalog::shared();
            let monster = &cat.classify(i).unwrap().base_name;
            let pet = &cat.classify(i + 381).unwrap().base_name;
            prop_assert_eq!(pet, &format!("tame {monster}"));
        }
    }
}
