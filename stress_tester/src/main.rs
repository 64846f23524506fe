use std::sync::Arc;

use anyhow::Context;
use cfg::{Cfg, Command, Implementation, StressCfg};
use clap::Parser;
use minque::{
    BoundedMinHeap, PriorityQueue,
    test::stress::{StressItem, StressTestConfig, run_stress_test},
};
use naive::NaiveQueue;
use tracing_subscriber::EnvFilter;

pub mod cfg;
mod demo;

fn main() {
    init_tracing();
    let cfg = Cfg::parse();
    tracing::debug!("Running configuration:\n{cfg:#?}");

    let res = match cfg.command {
        Command::Demo(demo_cfg) => demo::run(demo_cfg),
        Command::Stress(stress_cfg) => run_stress(stress_cfg),
    };
    if let Err(e) = res {
        eprintln!("Error: {e:?}");
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("minque=info,naive=info,stress_tester=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_thread_names(true)
        .with_target(true)
        .init();
}

fn run_stress(cfg: StressCfg) -> anyhow::Result<()> {
    anyhow::ensure!(cfg.consumer_num > 0, "at least one consumer is required");
    let total = cfg
        .item_num
        .checked_mul(cfg.producer_num)
        .ok_or_else(|| anyhow::anyhow!("Overflow while calculating queue capacity"))?;
    let capacity = cfg.capacity.unwrap_or(total);

    let config = StressTestConfig {
        num_producers: cfg.producer_num,
        items_per_producer: cfg.item_num,
        num_consumers: cfg.consumer_num,
        priority_range: (0, u16::MAX),
        check_interval: cfg.check_interval,
        run_duration_seconds: cfg.run_duration_seconds,
    };

    match cfg.implementation {
        Implementation::Naive => {
            let queue = NaiveQueue::new(capacity)
                .with_context(|| format!("could not create queue with capacity {capacity}"))?;
            stress(Arc::new(queue), config)
        }
        Implementation::Locked => {
            let queue = BoundedMinHeap::new(capacity)
                .with_context(|| format!("could not create queue with capacity {capacity}"))?;
            stress(Arc::new(queue), config)
        }
    }
}

fn stress<Q>(queue: Arc<Q>, config: StressTestConfig) -> anyhow::Result<()>
where
    Q: PriorityQueue<StressItem> + 'static,
{
    let results = run_stress_test(queue, config);
    results.print_summary();
    anyhow::ensure!(
        results.is_lossless(),
        "stress run lost, duplicated or misordered items"
    );
    Ok(())
}
