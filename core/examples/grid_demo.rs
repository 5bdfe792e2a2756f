//! Walk through storing points and finding the squares they form
//!
//! Run with: cargo run --example grid_demo

use squares_core::*;

fn main() {
    println!("=== Squares Demo ===\n");

    println!("1. Point store:");
    let store = PointStore::new();
    for y in 0..3 {
        for x in 0..3 {
            store.add(x, y);
        }
    }
    let again = store.add(1, 1);
    println!("   Stored {} points, re-adding (1, 1) returned id {}", store.len(), again.id);

    println!("\n2. Squares in a 3x3 grid:");
    let finder = SquareFinder::default();
    let search = finder.search(&store.all());
    for square in &search.squares {
        println!("   {}", square);
    }
    println!(
        "   {} squares from {} pairs, {} candidates, {} rejected",
        search.squares.len(),
        search.stats.pairs_examined,
        search.stats.candidates,
        search.stats.rejected
    );

    println!("\n3. Removing the center:");
    if let Some(center) = store.find_by_coordinates(1, 1) {
        store.remove(center.id);
    }
    println!("   {} squares remain", finder.count_squares(&store.all()));

    println!("\n4. Clear and re-add:");
    store.clear();
    let p = store.add(1, 1);
    println!("   (1, 1) now has id {}", p.id);
}
