//! Probe detection and directional collision resolution.
//!
//! Detection asks "which probe overlaps?" in a fixed priority order;
//! resolution applies the matching positional correction immediately, one
//! obstacle at a time, refreshing probes after every correction so the next
//! obstacle never tests against stale state.

use crate::api::types::WorldEvent;
use crate::components::body::Body;
use crate::components::coin::Coin;
use crate::components::enemy::Enemy;
use crate::components::player::Player;
use crate::components::probes::ProbeSet;
use crate::core::rect::Rect;

/// Which side of a body made contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contact {
    Up,
    Down,
    Left,
    Right,
}

/// Test the four probes against a target rect in fixed priority order:
/// **up, down, left, right**. The first overlap wins, so a corner touching
/// two probes always resolves vertical-before-horizontal: a body landing
/// on a ledge edge settles instead of "catching" on it as a wall.
pub fn probe_contact(probes: &ProbeSet, target: &Rect) -> Option<Contact> {
    if probes.up.overlaps(target) {
        Some(Contact::Up)
    } else if probes.down.overlaps(target) {
        Some(Contact::Down)
    } else if probes.left.overlaps(target) {
        Some(Contact::Left)
    } else if probes.right.overlaps(target) {
        Some(Contact::Right)
    } else {
        None
    }
}

/// Resolve one body against one block: snap out along the contact axis and
/// refresh the probes. Returns the contact so callers can layer their own
/// reactions (jump-budget reset, wall bounce) on top.
///
/// UP stops upward motion without starting a fall early; DOWN settles the
/// body; LEFT/RIGHT only correct position.
fn resolve_body_block(body: &mut Body, block: &Rect) -> Option<Contact> {
    let contact = probe_contact(&body.probes, block)?;
    match contact {
        Contact::Up => {
            body.rect.y = block.bottom();
            body.vel.y = 0.0;
        }
        Contact::Down => {
            body.rect.y = block.top() - body.rect.h;
            body.set_on_ground();
        }
        Contact::Left => {
            body.rect.x = block.right();
        }
        Contact::Right => {
            body.rect.x = block.left() - body.rect.w;
        }
    }
    body.refresh_probes();
    Some(contact)
}

/// Resolve the player against the full obstacle list, in list order.
/// Player horizontal contact stops motion but never reverses it.
pub fn resolve_player_blocks(player: &mut Player, blocks: &[Rect]) {
    for block in blocks {
        if resolve_body_block(&mut player.body, block) == Some(Contact::Down) {
            // Landing is the one place the jump budget comes back.
            player.set_on_ground();
        }
    }
}

/// Resolve one enemy against the full obstacle list. Enemies wall-bounce:
/// a horizontal contact flips their facing. Returns true if the enemy
/// turned this pass.
pub fn resolve_enemy_blocks(enemy: &mut Enemy, blocks: &[Rect]) -> bool {
    let mut turned = false;
    for block in blocks {
        match resolve_body_block(&mut enemy.body, block) {
            Some(Contact::Left) | Some(Contact::Right) => {
                enemy.turn();
                turned = true;
            }
            _ => {}
        }
    }
    turned
}

/// Player-vs-enemy contact rule. Asymmetric by design: only the player's
/// DOWN probe landing on a live enemy does anything: snap the player atop
/// the enemy, bounce with a fresh jump budget, kill the enemy. Every other
/// overlap is harmless passing contact; the enemy is never pushed and the
/// player's horizontal velocity is untouched.
///
/// Returns true on a stomp.
pub fn resolve_player_enemy(
    player: &mut Player,
    enemy: &mut Enemy,
    events: &mut Vec<WorldEvent>,
) -> bool {
    if enemy.dead {
        return false;
    }
    let target = enemy.bounding_box();
    if probe_contact(&player.body.probes, &target) != Some(Contact::Down) {
        return false;
    }
    player.body.rect.y = target.top() - player.body.rect.h;
    player.body.refresh_probes();
    player.jump(true, events);
    enemy.kill();
    true
}

/// Player-vs-coin pickup: a plain full-bounding-box overlap, no probes.
/// Collected coins are inert, so a second overlap changes nothing.
pub fn resolve_player_coins(
    player_rect: &Rect,
    coins: &mut [Coin],
    events: &mut Vec<WorldEvent>,
) {
    for (index, coin) in coins.iter_mut().enumerate() {
        if !coin.collected && player_rect.overlaps(&coin.rect) {
            coin.collect();
            events.push(WorldEvent::CoinCollected { index });
            log::debug!("coin {index} collected");
        }
    }
}
