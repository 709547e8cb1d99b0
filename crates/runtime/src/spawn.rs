//! Room population: turning spawn marks into live enemies.

use std::sync::Arc;

use game_core::{
    EnemyData, EntityId, LevelGrid, PlacementRules, Position, RandomSource, Room, Tile,
    enemy_target_count, place_enemies,
};

use crate::errors::{Result, RuntimeError};
use crate::world::World;

/// Marks spawn cells in `room` and spawns an enemy on each.
///
/// Placement draws from `rng` first; profile assignment draws after, so the
/// whole room is reproducible from one seed.
pub fn populate_room(
    world: &mut World,
    room: &Room,
    pool: &[Arc<EnemyData>],
    rng: &mut impl RandomSource,
    rules: &PlacementRules,
) -> Result<Vec<EntityId>> {
    if pool.is_empty() {
        return Err(RuntimeError::EmptyEnemyPool);
    }
    let marked = place_enemies(room, world.level_mut(), &mut *rng, rules)?;
    if marked.is_empty() && enemy_target_count(room, rules) > 0 {
        tracing::warn!("room at ({}, {}) has no legal spawn cell", room.x, room.y);
    }
    tracing::debug!("room at ({}, {}) marked {:?}", room.x, room.y, marked);
    spawn_marked(world, room, pool, rng)
}

/// Spawns one enemy per [`Tile::ENEMY`] mark in `room`.
///
/// Marks are visited row-major and each draws its profile uniformly from
/// `pool`. Enemies are registered in that order, which fixes their turn
/// order. A mark on a cell nobody can enter is cleared and skipped without a
/// draw.
pub fn spawn_marked(
    world: &mut World,
    room: &Room,
    pool: &[Arc<EnemyData>],
    rng: &mut impl RandomSource,
) -> Result<Vec<EntityId>> {
    if pool.is_empty() {
        return Err(RuntimeError::EmptyEnemyPool);
    }
    let marks: Vec<Position> = room
        .cells()
        .filter(|&cell| world.level().has(cell, Tile::ENEMY))
        .collect();

    let mut spawned = Vec::with_capacity(marks.len());
    for at in marks {
        if !world.level().can_enter(at) {
            tracing::warn!("dropping spawn mark at {}: cell cannot be entered", at);
            world.level_mut().remove(at, Tile::ENEMY)?;
            continue;
        }
        let profile = Arc::clone(&pool[rng.pick_index(pool.len())]);
        tracing::debug!("spawning '{}' at {}", profile.name, at);
        spawned.push(world.spawn_enemy(profile, at)?);
    }
    tracing::info!(
        "populated room at ({}, {}) with {} enemies",
        room.x,
        room.y,
        spawned.len()
    );
    Ok(spawned)
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{Level, LevelRandom, Pathing};

    const ROOM_LAYOUT: &str = "
######
#....#
+....#
#....#
#....#
######
";

    fn pool() -> Vec<Arc<EnemyData>> {
        vec![
            Arc::new(EnemyData::new("slime", Pathing::Random)),
            Arc::new(EnemyData::new("skeleton", Pathing::Direct)),
        ]
    }

    fn populate(seed: u64) -> (World, Vec<EntityId>) {
        let mut world = World::new(Level::from_ascii(ROOM_LAYOUT));
        let mut rng = LevelRandom::new(seed);
        let ids = populate_room(
            &mut world,
            &Room::new(1, 1, 4, 4),
            &pool(),
            &mut rng,
            &PlacementRules::default(),
        )
        .unwrap();
        (world, ids)
    }

    #[test]
    fn spawns_one_enemy_per_mark_in_row_major_order() {
        let (world, ids) = populate(11);
        assert_eq!(ids.len(), 2);
        assert_eq!(world.turn_order(), ids);

        let positions: Vec<Position> = ids.iter().map(|&id| world.position(id).unwrap()).collect();
        let mut sorted = positions.clone();
        sorted.sort_by_key(|p| (p.y, p.x));
        assert_eq!(positions, sorted);
        for at in positions {
            assert!(world.level().has(at, Tile::ENEMY));
            assert!(is_clear(&world, at));
        }
    }

    fn is_clear(world: &World, at: Position) -> bool {
        game_core::is_clear_of_doors(world.level(), at)
    }

    #[test]
    fn same_seed_same_room() {
        let (a, a_ids) = populate(5);
        let (b, b_ids) = populate(5);
        assert_eq!(a_ids, b_ids);
        for (x, y) in a_ids.iter().zip(&b_ids) {
            assert_eq!(a.position(*x), b.position(*y));
            assert_eq!(
                a.enemy(*x).unwrap().profile().map(|p| p.name.clone()),
                b.enemy(*y).unwrap().profile().map(|p| p.name.clone())
            );
        }
    }

    #[test]
    fn pillars_and_the_player_are_never_spawned_on() {
        const PILLAR: &str = "
######
#....#
#.#..#
#....#
#....#
######
";
        let rules = PlacementRules {
            area_divisor: 1,
            density: 1.0,
        };
        for seed in 0..50 {
            let mut world = World::new(Level::from_ascii(PILLAR));
            world.place_player(Position::new(3, 3)).unwrap();
            let mut rng = LevelRandom::new(seed);

            let ids = populate_room(&mut world, &Room::new(1, 1, 4, 4), &pool(), &mut rng, &rules)
                .unwrap();

            assert_eq!(ids.len(), 14);
            assert!(!world.level().has(Position::new(2, 2), Tile::ENEMY));
            assert_eq!(world.player(), Some(Position::new(3, 3)));
        }
    }

    #[test]
    fn unenterable_marks_are_cleared_and_skipped() {
        let mut world = World::new(Level::from_ascii("#####\n#e.e#\n#####\n"));
        world.place_player(Position::new(1, 1)).unwrap();
        let mut rng = LevelRandom::new(4);

        let ids = spawn_marked(&mut world, &Room::new(1, 1, 3, 1), &pool(), &mut rng).unwrap();

        assert_eq!(ids.len(), 1);
        assert_eq!(world.position(ids[0]), Some(Position::new(3, 1)));
        assert!(!world.level().has(Position::new(1, 1), Tile::ENEMY));
        assert_eq!(world.player(), Some(Position::new(1, 1)));
    }

    #[test]
    fn empty_pool_is_rejected() {
        let mut world = World::new(Level::from_ascii(ROOM_LAYOUT));
        let mut rng = LevelRandom::new(1);
        let result = populate_room(
            &mut world,
            &Room::new(1, 1, 4, 4),
            &[],
            &mut rng,
            &PlacementRules::default(),
        );
        assert!(matches!(result, Err(RuntimeError::EmptyEnemyPool)));
        assert!(world.level().positions_with(Tile::ENEMY).next().is_none());
    }
}
