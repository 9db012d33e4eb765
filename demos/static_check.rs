use glam::DVec2;
use tilesweep::*;

fn main() {
    let map: [[u8; 5]; 5] = [
        [0, 0, 0, 0, 0],
        [0, 1, 0, 0, 0],
        [0, 0, 0, 0, 0],
        [0, 0, 0, 0, 0],
        [0, 0, 0, 0, 0],
    ];
    let cfg = ColliderConfig { static_check: true, ..Default::default() };
    let mut collider: TileCollider<u8, [[u8; 5]; 5]> = match TileCollider::with_config(map, 50, 50, cfg) {
        Ok(c) => c,
        Err(e) => { eprintln!("{e}"); return; }
    };

    // Teleport targets; a zero-movement query reports overlaps at each one
    let size = DVec2::new(50.0, 50.0);
    let targets = [DVec2::new(20.0, 20.0), DVec2::new(0.0, 0.0), DVec2::new(100.0, 50.0), DVec2::new(60.0, 95.0), DVec2::new(150.0, 150.0)];

    for pos in targets {
        collider.collide(Rect { pos, size }, DVec2::ZERO);
        if collider.contacts().is_empty() {
            println!("({:6.1},{:6.1}) clear", pos.x, pos.y);
        } else {
            for c in collider.contacts() {
                println!("({:6.1},{:6.1}) overlaps tile ({},{}) id={} normal=({},{})", pos.x, pos.y, c.tile.x, c.tile.y, c.tile_id, c.normal.x, c.normal.y);
            }
        }
    }

    collider.set_static_check(false);
    collider.collide(Rect { pos: targets[0], size }, DVec2::ZERO);
    println!("static check off: {} contacts at rest", collider.contacts().len());
}
