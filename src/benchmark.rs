use clap::error::ErrorKind;
use clap::{CommandFactory, Parser, ValueEnum};
use ordered_tree::{OrderedTree, TreeOps};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use std::collections::BTreeSet;
use std::thread;
use std::time::Instant;

const BASE_STACK: usize = 8 * 1024 * 1024;
// generous bound for one recursive insert frame in a debug build
const FRAME_STACK: usize = 512;

#[derive(Parser)]
#[command(name = "tree-benchmark")]
#[command(about = "A tree performance testing tool")]
struct Args {
    #[arg(long, default_value = "100000")]
    size: usize,

    #[arg(long, value_enum, default_value_t = TreeKind::Ordered)]
    tree: TreeKind,

    #[arg(long, value_enum, default_value_t = KeyOrder::Shuffled)]
    order: KeyOrder,

    #[arg(long, default_value = "42")]
    seed: u64,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum TreeKind {
    /// Unbalanced ordered tree
    Ordered,
    /// Standard library BTreeSet, as a balanced baseline
    Btree,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum KeyOrder {
    Shuffled,
    /// Degenerates the ordered tree into a chain
    Ascending,
}

fn main() {
    let args = Args::parse();

    let Some(stack_size) = stack_size(args.size, args.order) else {
        Args::command()
            .error(
                ErrorKind::ValueValidation,
                format!("--size {} is too large for a stack size", args.size),
            )
            .exit();
    };

    let keys = keys(args.size, args.order, args.seed);
    println!(
        "Running with {:?} tree, {} node count and {:?} keys",
        args.tree, args.size, args.order
    );

    let tree = args.tree;
    let spawned = thread::Builder::new()
        .name("benchmark".into())
        .stack_size(stack_size)
        .spawn(move || match tree {
            TreeKind::Ordered => run(OrderedTree::new(), &keys),
            TreeKind::Btree => run(BTreeSet::new(), &keys),
        });
    let worker = match spawned {
        Ok(worker) => worker,
        Err(err) => {
            let message = format!("cannot spawn benchmark thread: {err}");
            Args::command().error(ErrorKind::Io, message).exit()
        }
    };

    worker.join().expect("benchmark thread panicked");
}

// ascending keys make the recursion as deep as the tree is large
fn stack_size(size: usize, order: KeyOrder) -> Option<usize> {
    match order {
        KeyOrder::Shuffled => Some(BASE_STACK),
        KeyOrder::Ascending => size.checked_mul(FRAME_STACK)?.checked_add(BASE_STACK),
    }
}

fn keys(size: usize, order: KeyOrder, seed: u64) -> Vec<usize> {
    let mut keys: Vec<usize> = (0..size).collect();
    if let KeyOrder::Shuffled = order {
        let mut rng = StdRng::seed_from_u64(seed);
        keys.shuffle(&mut rng);
    }
    keys
}

fn run<T: TreeOps<usize>>(mut tree: T, keys: &[usize]) {
    let start = Instant::now();
    for (i, &key) in keys.iter().enumerate() {
        assert_eq!(tree.len(), i);
        assert!(tree.insert(key));
        assert!(tree.contains(&key));
    }
    let inserted = Instant::now();
    for key in keys {
        assert!(tree.contains(key));
    }
    assert!(!tree.contains(&keys.len()));
    let checked_contains = Instant::now();
    drop(tree);
    let end = Instant::now();

    println!(
        "Inserts took {} seconds",
        inserted.saturating_duration_since(start).as_secs_f32()
    );
    println!(
        "Checking contains took {} seconds",
        checked_contains
            .saturating_duration_since(inserted)
            .as_secs_f32()
    );
    println!(
        "Teardown took {} seconds",
        end.saturating_duration_since(checked_contains)
            .as_secs_f32()
    );
    println!(
        "Total {} seconds",
        end.saturating_duration_since(start).as_secs_f32()
    );
}
