#[derive(Debug, Clone, clap::Parser)]
#[command(about = "Exercises the bounded minimum priority queues of this workspace")]
pub struct Cfg {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, clap::Subcommand)]
pub enum Command {
    /// Fill a queue with random letters, then print and extract the minimum until it is empty.
    Demo(DemoCfg),
    /// Hammer a queue implementation with concurrent producers and consumers.
    Stress(StressCfg),
}

#[derive(Debug, Clone, clap::Args)]
pub struct DemoCfg {
    /// Number of letters inserted. The first half gets random priorities, the second half priority 0.
    #[arg(short = 'n', long, default_value_t = 10)]
    pub count: usize,
    /// Highest random priority (exclusive).
    #[arg(long, default_value_t = 128)]
    pub max_priority: u16,
    /// Seed for a reproducible run.
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, clap::Args)]
pub struct StressCfg {
    /// The queue implementation to test.
    pub implementation: Implementation,
    /// Number of producers that will insert items into the queue.
    #[arg(short, long)]
    pub producer_num: usize,
    /// Number of items each producer will insert during the test.
    #[arg(short, long)]
    pub item_num: usize,
    /// Number of consumers that will extract items from the queue.
    #[arg(short, long, default_value_t = 1)]
    pub consumer_num: usize,
    /// Queue capacity. Defaults to `producer_num * item_num`.
    #[arg(long)]
    pub capacity: Option<usize>,
    /// Consumers verify the heap invariant every this many extractions (0 disables).
    #[arg(long, default_value_t = 100)]
    pub check_interval: usize,
    // Hard cap on the test's execution time
    #[arg(long, default_value_t = 10)]
    pub run_duration_seconds: u64,
}

#[derive(Debug, Clone, strum::EnumString, clap::ValueEnum)]
pub enum Implementation {
    #[strum(ascii_case_insensitive)]
    Naive,
    #[strum(ascii_case_insensitive)]
    Locked,
}
