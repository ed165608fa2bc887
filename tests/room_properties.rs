//! Property tests over many seeds: every generated room is well formed and
//! its key can be reached from the ground.

use cave_explorer::{
    create_rng, generate_room, GenerationConfig, Generator, JumpEnvelope, Reachability,
    RoomGenerator, GROUND_INDEX,
};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn ground_is_first_and_spans_the_scene(seed in any::<u64>()) {
        let room = generate_room(1000, 600, &mut create_rng(seed)).unwrap();
        let ground = room.platforms[GROUND_INDEX].rect;

        prop_assert_eq!(ground.x, 0);
        prop_assert_eq!(ground.width, 1000);
        prop_assert_eq!(ground.bottom(), 600);
    }

    #[test]
    fn platforms_never_overlap(seed in any::<u64>()) {
        let room = generate_room(1000, 600, &mut create_rng(seed)).unwrap();

        for (i, a) in room.platforms.iter().enumerate() {
            for b in &room.platforms[i + 1..] {
                prop_assert!(!a.rect.overlaps(&b.rect), "{:?} overlaps {:?}", a.rect, b.rect);
            }
        }
    }

    #[test]
    fn elevated_platforms_respect_the_band(seed in any::<u64>()) {
        let config = GenerationConfig::default();
        let room = generate_room(1000, 600, &mut create_rng(seed)).unwrap();

        prop_assert!(room.platforms.len() - 1 <= config.max_platforms as usize);
        for (_, platform) in room.elevated_platforms() {
            let rect = platform.rect;
            prop_assert!((80..=200).contains(&rect.width));
            prop_assert_eq!(rect.height, 20);
            prop_assert!(rect.left() >= 50 && rect.right() <= 950);
            prop_assert!((150..=450).contains(&rect.top()));
        }
    }

    #[test]
    fn key_is_reachable_or_falls_back(seed in any::<u64>()) {
        let room = generate_room(1000, 600, &mut create_rng(seed)).unwrap();
        let reachability = Reachability::analyze(&room.platforms, &JumpEnvelope::default());

        prop_assert!(reachability.contains(GROUND_INDEX));
        match room.key.platform {
            Some(index) => {
                prop_assert!(index != GROUND_INDEX);
                prop_assert!(reachability.contains(index));
                let platform = room.platforms[index].rect;
                prop_assert_eq!(
                    room.key.position(),
                    (platform.x + platform.width / 2 - 10, platform.top() - 30)
                );
            }
            None => {
                prop_assert!(reachability.elevated().is_empty());
                prop_assert_eq!(room.key.position(), (500, 530));
            }
        }
    }

    #[test]
    fn routes_agree_with_the_reachable_set(seed in any::<u64>()) {
        let room = generate_room(1000, 600, &mut create_rng(seed)).unwrap();
        let envelope = JumpEnvelope::default();
        let reachability = Reachability::analyze(&room.platforms, &envelope);

        for index in 0..room.platforms.len() {
            let route = reachability.route_to(&room.platforms, &envelope, index);
            prop_assert_eq!(route.is_some(), reachability.contains(index));

            if let Some(route) = route {
                prop_assert_eq!(route.first(), Some(&GROUND_INDEX));
                prop_assert_eq!(route.last(), Some(&index));
                for hop in route.windows(2) {
                    prop_assert!(envelope.can_reach(&room.platforms[hop[0]], &room.platforms[hop[1]]));
                }
            }
        }
    }

    #[test]
    fn hazards_stay_on_elevated_platforms(seed in any::<u64>()) {
        let room = generate_room(1000, 600, &mut create_rng(seed)).unwrap();

        for enemy in &room.enemies {
            prop_assert!(enemy.platform != GROUND_INDEX);
            let platform = room.platforms[enemy.platform].rect;
            prop_assert!(enemy.rect.left() >= platform.left());
            prop_assert!(enemy.rect.right() <= platform.right());
            prop_assert_eq!(enemy.rect.bottom(), platform.top());
        }
        for trap in &room.traps {
            prop_assert!(trap.platform != GROUND_INDEX);
            let platform = room.platforms[trap.platform].rect;
            prop_assert!(trap.rect.left() >= platform.left());
            prop_assert!(trap.rect.right() <= platform.right());
            prop_assert_eq!(trap.rect.bottom(), platform.top());
        }
    }

    #[test]
    fn other_scene_sizes_validate(seed in any::<u64>(), width in 400i32..1600, height in 400i32..900) {
        let generator = RoomGenerator::new(GenerationConfig::for_scene(width, height)).unwrap();
        let room = generator.generate(&mut create_rng(seed)).unwrap();

        prop_assert!(generator.validate(&room).is_ok());
        prop_assert_eq!(room.door.rect.x, width - 80);
        prop_assert_eq!(room.door.rect.y, height - 100);
        prop_assert!(generator.route_to_key(&room).is_some());
    }
}

#[test]
fn seeds_cover_both_key_outcomes() {
    let mut fallbacks = 0;
    let mut placed = 0;
    let mut with_discards = 0;

    for seed in 0..2000 {
        let room = generate_room(1000, 600, &mut create_rng(seed)).unwrap();
        match room.key.platform {
            Some(_) => placed += 1,
            None => fallbacks += 1,
        }
        // At least five attempts are made, so fewer than five elevated
        // platforms means some candidates were discarded.
        if room.platforms.len() < 6 {
            with_discards += 1;
        }
    }

    assert!(placed > 0);
    assert!(fallbacks > 0);
    assert!(with_discards > 0);
}
