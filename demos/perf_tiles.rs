use glam::DVec2;
use std::time::Instant;
use tilesweep::*;

fn main() {
    // Build a 256x256 map with ~25% solids in a checkerboard-ish pattern
    let w = 256usize; let h = 256usize;
    let mut map = TileMap::<u16>::new(w, h);
    for y in 0..h { for x in 0..w { if (x ^ y) & 0x3 == 0 { map.set(x, y, 1); } }}

    let mut collider: TileCollider<u16, TileMap<u16>> = match TileCollider::new(map, 16, 16) {
        Ok(c) => c,
        Err(e) => { eprintln!("{e}"); return; }
    };

    // Short per-tick moves
    let size = DVec2::new(12.0, 12.0);
    let n_moves = 200_000;
    let t0 = Instant::now();
    let mut acc = 0.0f64;
    let mut contacts = 0usize;
    for i in 0..n_moves {
        let a = (i as f64 * 0.01).sin();
        let pos = DVec2::new(40.0 + (i % 3000) as f64, 40.0 + (i % 2000) as f64);
        let out = collider.collide(Rect { pos, size }, DVec2::new(3.0 * a, 2.0 * a.cos()));
        acc += out.x + out.y;
        contacts += collider.contacts().len();
    }
    let dt = t0.elapsed().as_secs_f64();
    println!("short_moves: n={} secs={:.3} throughput={:.0} moves/s contacts={} checksum={:.3}", n_moves, dt, (n_moves as f64 / dt), contacts, acc);

    // Long multi-tile sweeps
    let n_sweeps = 100_000;
    let t1 = Instant::now();
    let mut acc2 = 0.0f64;
    let mut scanned = 0usize;
    for i in 0..n_sweeps {
        let a = (i as f64 * 0.01).sin();
        let movement = DVec2::new(600.0 * a, 200.0 * a.abs() + 1.0);
        let out = collider.collide(Rect { pos: DVec2::new(2048.0, 2048.0), size }, movement);
        acc2 += out.x + out.y;
        scanned += collider.stats().tiles_scanned;
    }
    let dt2 = t1.elapsed().as_secs_f64();
    println!("long_sweeps: n={} secs={:.3} throughput={:.0} sweeps/s tiles_scanned={} checksum={:.3}", n_sweeps, dt2, (n_sweeps as f64 / dt2), scanned, acc2);
}
