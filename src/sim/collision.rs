//! Collision resolution over mark arrays
//!
//! Pair tests never mutate the entity collections directly. Callers pass a
//! `dead` mark per entity; hits set marks and removal happens in one compaction
//! pass at the end of the tick. This guarantees every entity is evaluated
//! exactly once per tick regardless of earlier hits in the same pass.

use super::state::{Bullet, Enemy, Player};

/// Resolve bullet-vs-enemy overlaps, first match wins.
///
/// Each live bullet consumes at most one enemy and each live enemy is consumed
/// by at most one bullet; pairing is 1:1. Returns the number of kills so the
/// caller can award score once per pair.
pub fn resolve_bullet_hits(
    bullets: &[Bullet],
    enemies: &[Enemy],
    bullet_dead: &mut [bool],
    enemy_dead: &mut [bool],
) -> u32 {
    debug_assert_eq!(bullets.len(), bullet_dead.len());
    debug_assert_eq!(enemies.len(), enemy_dead.len());

    let mut kills = 0;
    for (bi, bullet) in bullets.iter().enumerate() {
        if bullet_dead[bi] {
            continue;
        }
        let bullet_box = bullet.aabb();
        for (ei, enemy) in enemies.iter().enumerate() {
            if enemy_dead[ei] {
                continue;
            }
            if bullet_box.overlaps(&enemy.aabb()) {
                bullet_dead[bi] = true;
                enemy_dead[ei] = true;
                kills += 1;
                break;
            }
        }
    }
    kills
}

/// Resolve player-vs-enemy contact, at most one per tick.
///
/// The first live enemy overlapping the player is marked dead and `true` is
/// returned; the caller deducts exactly one life. Further overlaps in the same
/// tick are ignored.
pub fn player_contact(player: &Player, enemies: &[Enemy], enemy_dead: &mut [bool]) -> bool {
    debug_assert_eq!(enemies.len(), enemy_dead.len());

    let player_box = player.aabb();
    for (ei, enemy) in enemies.iter().enumerate() {
        if enemy_dead[ei] {
            continue;
        }
        if player_box.overlaps(&enemy.aabb()) {
            enemy_dead[ei] = true;
            return true;
        }
    }
    false
}
