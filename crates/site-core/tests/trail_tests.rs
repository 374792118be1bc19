// Host-side tests for the trail lifecycle: bounded capacity, monotonic
// ids, strictly decreasing opacity and bounded time-to-removal.

use glam::Vec2;
use site_core::{TrailSet, TrailSpawn, TRAIL_CAPACITY};

fn spawn_at(set: &mut TrailSet, x: f32) {
    set.spawn(TrailSpawn {
        position: Vec2::new(x, 0.0),
        size: 60.0,
    });
}

#[test]
fn spawn_uses_the_fixed_initial_opacity() {
    let mut set = TrailSet::new();
    spawn_at(&mut set, 10.0);
    let blob = set.iter().next().unwrap();
    assert_eq!(blob.opacity, 0.6);
    assert_eq!(blob.size, 60.0);
}

#[test]
fn ids_are_monotonic_and_never_reused() {
    let mut set = TrailSet::new();
    for i in 0..40 {
        spawn_at(&mut set, i as f32);
    }
    // Ids keep increasing even after older blobs were dropped.
    let ids: Vec<u64> = set.iter().map(|b| b.id).collect();
    for pair in ids.windows(2) {
        assert!(pair[1] > pair[0]);
    }
    assert_eq!(*ids.last().unwrap(), 39);
}

#[test]
fn capacity_is_enforced_at_insertion() {
    let mut set = TrailSet::new();
    for i in 0..(TRAIL_CAPACITY * 2) {
        spawn_at(&mut set, i as f32);
        assert!(set.len() <= TRAIL_CAPACITY, "overflow after spawn {i}");
    }
    assert_eq!(set.len(), TRAIL_CAPACITY);
    // Oldest dropped: the survivors are the most recent spawns.
    let first = set.iter().next().unwrap();
    assert_eq!(first.id, TRAIL_CAPACITY as u64);
}

#[test]
fn decay_strictly_decreases_opacity_and_shrinks_size() {
    let mut set = TrailSet::new();
    spawn_at(&mut set, 0.0);
    let mut prev_opacity = set.iter().next().unwrap().opacity;
    let mut prev_size = set.iter().next().unwrap().size;
    while !set.is_empty() {
        set.step_decay();
        if let Some(blob) = set.iter().next() {
            assert!(blob.opacity < prev_opacity);
            assert!(blob.size < prev_size);
            prev_opacity = blob.opacity;
            prev_size = blob.size;
        }
    }
}

#[test]
fn every_trail_is_gone_within_twenty_ticks() {
    // Opacity 0.6, decrement 0.03: removal on or before tick 20.
    let mut set = TrailSet::new();
    for i in 0..8 {
        spawn_at(&mut set, i as f32);
    }
    for _ in 0..20 {
        set.step_decay();
    }
    assert!(set.is_empty());
}

#[test]
fn decay_on_an_empty_set_is_a_no_op() {
    let mut set = TrailSet::new();
    set.step_decay();
    assert!(set.is_empty());
    assert_eq!(set.len(), 0);
}
