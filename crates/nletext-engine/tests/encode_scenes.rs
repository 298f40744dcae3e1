//! Whole-observation encoding of the reference scenes.

use nletext_core::{EncodeError, TextObservation};
use nletext_engine::{BatchConfig, BatchError, BatchedEncoder, EncoderConfig, ObservationEncoder};
use nletext_test_utils::fixtures::{floor_scene, glyph, monk_scene, PLAYER_COL, PLAYER_ROW};
use nletext_test_utils::OwnedObservation;
use proptest::prelude::*;

fn encoder() -> ObservationEncoder {
    ObservationEncoder::new(EncoderConfig::default()).unwrap()
}

#[test]
fn monk_scene_encodes_every_section() {
    let obs = monk_scene();
    let text = encoder().encode(&obs.view().unwrap()).unwrap();
    assert_eq!(
        text,
        TextObservation {
            text_glyphs: "tame little dog far westsouthwest\n\
                          fountain near northnorthwest\n\
                          dark area very near north\n\
                          vertical closed door adjacent north\n\
                          dark area adjacent northeast, east, southeast, south, southwest, west, and northwest"
                .into(),
            text_message: "Hello Agent, welcome to NetHack!  You are a neutral gnomish Caveman."
                .into(),
            text_blstats: "Strength: 1/19\n\
                           Dexterity: 4\n\
                           Constitution: 5\n\
                           Intelligence: 6\n\
                           Wisdom: 7\n\
                           Charisma: 8\n\
                           Depth: 9\n\
                           Gold: 10\n\
                           HP: 11/12\n\
                           Energy: 1/13\n\
                           AC: 1\n\
                           XP: 7/10\n\
                           Time: 5\n\
                           Position: 66|14\n\
                           Hunger: Fainting\n\
                           Monster Level: 23\n\
                           Encumbrance: Stressed\n\
                           Dungeon Number: 21\n\
                           Level Number: 10\n\
                           Score: 123\n\
                           Alignment: Chaotic\n\
                           Condition: Stoned Slimed Food Poisoning"
                .into(),
            text_inventory: "a: a blessed +1 quarterstaff (weapon in hands)\n\
                             b: an uncursed +0 cloak of magic resistance (being worn)"
                .into(),
            text_cursor: "Yourself a monk".into(),
        }
    );
}

#[test]
fn unknown_glyph_anywhere_fails_the_whole_encode() {
    let mut obs = monk_scene();
    obs.set_glyph(0, 0, 6000);
    assert!(matches!(
        encoder().encode(&obs.view().unwrap()),
        Err(EncodeError::Classification(_))
    ));
}

#[test]
fn batched_new_uses_configured_workers() {
    let enc = BatchedEncoder::new(EncoderConfig {
        batch: BatchConfig {
            worker_count: Some(3),
        },
        ..EncoderConfig::default()
    })
    .unwrap();
    assert_eq!(enc.workers(), 3);
}

#[test]
fn batch_error_names_the_observation() {
    let mut bad = floor_scene();
    bad.set_glyph(PLAYER_ROW, PLAYER_COL + 1, -1);
    let owned = [monk_scene(), bad];
    let raw: Vec<_> = owned.iter().map(|o| o.view().unwrap()).collect();
    let enc = BatchedEncoder::new(EncoderConfig::default()).unwrap();
    let err = enc.encode_all(&raw).unwrap_err();
    assert!(matches!(err, BatchError::Encode { index: 1, .. }));
    assert!(err.to_string().starts_with("observation 1: "));
}

fn scene_with(cells: &[(usize, usize, u8)]) -> OwnedObservation {
    const PALETTE: [i16; 6] = [
        glyph::FOUNTAIN,
        glyph::LITTLE_DOG,
        glyph::VERTICAL_WALL,
        glyph::LAVA,
        glyph::QUARTERSTAFF,
        glyph::PONY,
    ];
    let mut obs = monk_scene();
    for &(row, col, pick) in cells {
        if (row, col) != (PLAYER_ROW, PLAYER_COL) {
            obs.set_glyph(row, col, PALETTE[pick as usize % PALETTE.len()]);
        }
    }
    obs
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn parallel_batch_equals_sequential(
        scenes in prop::collection::vec(
            prop::collection::vec((0usize..21, 0usize..79, any::<u8>()), 0..12),
            1..8,
        )
    ) {
        let owned: Vec<_> = scenes.iter().map(|cells| scene_with(cells)).collect();
        let raw: Vec<_> = owned.iter().map(|o| o.view().unwrap()).collect();
        let enc = BatchedEncoder::from_encoder(encoder(), 4).unwrap();
        let seq = enc.encode_all(&raw).unwrap();
        let par = enc.encode_all_parallel(&raw).unwrap();
        prop_assert_eq!(&seq, &par);
        for (one, text) in raw.iter().zip(&seq) {
            prop_assert_eq!(&enc.encoder().encode(one).unwrap(), text);
        }
    }
}
