//! Headless platformer tick loop: gravity, scripted walking and one jump.
//!
//! The collider only clamps movement; the actor derives `on_floor` and zeroes its
//! velocity from the contact normals handed to the callback.

use glam::DVec2;
use tilesweep::*;

const GRAVITY: f64 = 0.95;
const MAX_FALL: f64 = 8.8;
const WALK_ACCEL: f64 = 0.08;
const MAX_WALK: f64 = 3.4;
const JUMP_SPEED: f64 = -9.0;

#[derive(Debug, Default)]
struct Actor {
    rect: Rect,
    vel: DVec2,
    on_floor: bool,
}

impl Actor {
    /// Apply scripted input and gravity for this tick.
    fn integrate(&mut self, walk: f64, jump: bool) {
        // Gravity applies every tick so a resting actor keeps reporting its floor contact
        if self.on_floor && jump {
            self.vel.y = JUMP_SPEED;
        } else {
            self.vel.y = (self.vel.y + GRAVITY).min(MAX_FALL);
        }
        let target = walk * MAX_WALK;
        if self.vel.x < target {
            self.vel.x = (self.vel.x + WALK_ACCEL).min(target);
        } else if self.vel.x > target {
            self.vel.x = (self.vel.x - WALK_ACCEL).max(target);
        }
    }
}

fn main() {
    let map: Vec<Vec<u8>> = vec![
        vec![1, 0, 1, 0, 1, 1, 0, 1],
        vec![1, 0, 0, 0, 0, 0, 0, 1],
        vec![1, 1, 0, 0, 0, 1, 0, 1],
        vec![0, 0, 0, 1, 0, 1, 0, 1],
        vec![0, 0, 0, 0, 0, 1, 0, 1],
        vec![1, 0, 1, 1, 1, 1, 0, 1],
        vec![1, 0, 0, 0, 0, 0, 0, 1],
        vec![1, 1, 1, 1, 1, 1, 1, 1],
    ];
    let mut collider: TileCollider<u8> = match TileCollider::new(map, 64, 64) {
        Ok(c) => c,
        Err(e) => { eprintln!("{e}"); return; }
    };

    let mut actor = Actor { rect: Rect::new(70.0, 70.0, 24.0, 32.0), vel: DVec2::new(0.0, 4.0), ..Default::default() };

    for tick in 0..240u32 {
        let walk = if (20..140).contains(&tick) { 1.0 } else { 0.0 };
        let jump = tick == 90;
        actor.integrate(walk, jump);

        let mut hit_floor = false;
        let mut hit_ceiling = false;
        let mut hit_wall = false;
        let delta = collider.collide_with(actor.rect, actor.vel, |contacts, _| {
            for c in contacts {
                hit_floor |= c.is_floor();
                hit_ceiling |= c.is_ceiling();
                hit_wall |= c.is_wall();
            }
        });

        actor.on_floor = hit_floor;
        if hit_floor || hit_ceiling { actor.vel.y = 0.0; }
        if hit_wall { actor.vel.x = 0.0; }
        actor.rect = actor.rect.translate(delta);

        if tick % 20 == 0 || jump {
            println!(
                "tick={:3} pos=({:7.2},{:7.2}) vel=({:5.2},{:5.2}) on_floor={} contacts={}",
                tick, actor.rect.pos.x, actor.rect.pos.y, actor.vel.x, actor.vel.y, actor.on_floor, collider.contacts().len()
            );
        }
    }
}
