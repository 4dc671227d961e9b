//! Builds a tree from random keys, knocks it out of balance and rebuilds it, printing the tree at
//! each step.
//!
//! Usage: `demo [SEED]`. Without a seed the keys come from the thread-local generator. Set
//! `RUST_LOG=debug` (or `trace`) to see what the tree is doing.

use std::error::Error;

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use rebalance_bst::{Order, RandomKeys, Tree};

fn print_traversals(tree: &Tree<i64>) {
    for order in [
        Order::LevelOrder,
        Order::InOrder,
        Order::PreOrder,
        Order::PostOrder,
    ] {
        println!("{:?}: {:?}", order, tree.keys(order));
    }
}

fn print_balance(tree: &Tree<i64>) {
    match tree.is_balanced() {
        Some(balanced) => println!("is balanced: {} (height {})", balanced, tree.height()),
        None => println!("is balanced: n/a (empty tree)"),
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let mut rng: Box<dyn RngCore> = match std::env::args().nth(1) {
        Some(seed) => Box::new(StdRng::seed_from_u64(seed.parse()?)),
        None => Box::new(rand::thread_rng()),
    };

    let mut tree = Tree::from_keys(RandomKeys::default().generate(&mut rng));
    print!("{}", tree);
    print_balance(&tree);
    print_traversals(&tree);

    let extra = RandomKeys {
        count: 10,
        range: 100..=1_099,
    };
    for key in extra.generate(&mut rng) {
        tree.insert(key);
    }
    println!();
    print!("{}", tree);
    print_balance(&tree);

    println!();
    println!("rebalancing");
    tree.rebalance();
    print!("{}", tree);
    print_balance(&tree);
    print_traversals(&tree);

    Ok(())
}
