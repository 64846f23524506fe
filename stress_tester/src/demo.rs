use anyhow::Context;
use minque::{BoundedMinHeap, PriorityQueue};
use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::cfg::DemoCfg;

/// Inserts random letters and drains them again, printing `priority:letter` of the current
/// minimum before every extraction.
pub fn run(cfg: DemoCfg) -> anyhow::Result<()> {
    anyhow::ensure!(cfg.max_priority > 0, "max priority must be at least 1");
    let mut rng = match cfg.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let queue = BoundedMinHeap::with_destructor(cfg.count, |letter: Box<char>| {
        tracing::debug!(%letter, "released unconsumed letter");
    })
    .context("could not create queue")?;

    println!(
        "\nInserting {} random letters, the first {} with random priority",
        cfg.count,
        cfg.count / 2
    );
    let mut urgent = vec![];
    for i in 0..cfg.count {
        let letter = Box::new(char::from(rng.random_range(b'A'..=b'Z')));
        let priority = if i < cfg.count / 2 {
            rng.random_range(0..cfg.max_priority)
        } else {
            urgent.push(*letter);
            0
        };
        queue.insert(letter, priority)?;
    }
    println!(
        "Inserted with priority 0: {}",
        urgent.iter().map(char::to_string).collect::<Vec<_>>().join(" ")
    );

    while !queue.is_empty() {
        let line = queue.peek_with(|letter, priority| format!("{priority}:{letter}"))?;
        println!("{line}");
        queue.extract()?;
    }
    queue.destroy();

    Ok(())
}
