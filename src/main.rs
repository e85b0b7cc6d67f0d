use std::fmt::{Debug, Display};

use clap::{Parser, ValueEnum};
use deque_lib::collections::{Deque, DequeError, LinkedDeque, RingDeque};
use eyre::{Result, eyre};
use tracing::level_filters::LevelFilter;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Strategy {
    /// The bounded ring-buffer deque.
    Ring,
    /// The unbounded linked deque.
    Linked,
    /// Both deques, one after the other.
    Both,
}

/// Replays the ring-buffer and linked deque scenarios, printing the deque after every step.
#[derive(Debug, Parser)]
#[command(name = "deque-demo")]
struct Config {
    /// Which deque to demonstrate.
    #[arg(long, env = "DEQUE_DEMO_STRATEGY", value_enum, default_value_t = Strategy::Both)]
    strategy: Strategy,

    /// Capacity of the ring-buffer deque.
    #[arg(long, env = "DEQUE_DEMO_CAP", default_value_t = 5)]
    cap: usize,

    /// Most verbose level of log events to print. RUST_LOG directives are applied on top.
    #[arg(long, env = "DEQUE_DEMO_LOG", default_value_t = LevelFilter::INFO)]
    log_level: LevelFilter,
}

fn main() -> Result<()> {
    let config = Config::parse();
    setup_logs(config.log_level)?;
    debug!(?config, "parsed configuration");

    if matches!(config.strategy, Strategy::Ring | Strategy::Both) {
        ring_scenario(config.cap)?;
    }
    if matches!(config.strategy, Strategy::Linked | Strategy::Both) {
        linked_scenario()?;
    }
    Ok(())
}

fn setup_logs(level: LevelFilter) -> Result<()> {
    let filter = EnvFilter::from_default_env().add_directive(level.into());

    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .try_init()
        .map_err(|err| eyre!("failed to install log subscriber: {err}"))
}

fn ring_scenario(cap: usize) -> Result<()> {
    info!(cap, "replaying ring-buffer deque scenario");
    let mut deque = RingDeque::<i32>::with_cap(cap);

    attempt("push_back(5)", deque.push_back(5));
    show(&deque);
    attempt("push_front(15)", deque.push_front(15));
    show(&deque);
    attempt("push_back(25)", deque.push_back(25));
    show(&deque);
    attempt("pop_front()", deque.pop_front());
    show(&deque);
    attempt("pop_back()", deque.pop_back());
    show(&deque);

    // Fill the remaining slots, then push once more to show the rejection.
    let mut next: i32 = 35;
    while !deque.is_full() {
        deque.push_back(next)?;
        next = next.wrapping_add(10);
    }
    show(&deque);
    attempt(&format!("push_front({next})"), deque.push_front(next));
    show(&deque);

    deque.clear();
    attempt("pop_back()", deque.pop_back());
    show(&deque);
    Ok(())
}

fn linked_scenario() -> Result<()> {
    info!("replaying linked deque scenario");
    let mut deque = LinkedDeque::new();

    deque.push_front(10);
    deque.push_back(20);
    deque.push_front(5);
    deque.push_back(30);
    println!("after pushes: {deque}");

    println!("front element: {}", deque.front()?);
    println!("back element: {}", deque.back()?);

    deque.pop_front()?;
    deque.pop_back()?;
    println!("after pops: {deque}");
    println!("size of deque: {}", deque.len());

    deque.clear();
    debug!(len = deque.len(), "released remaining nodes");
    Ok(())
}

/// Logs the outcome of a deque operation, carrying on past recoverable errors.
fn attempt<V, E>(action: &str, result: std::result::Result<V, E>)
where
    V: Debug,
    E: Into<DequeError>,
{
    let result: std::result::Result<V, DequeError> = result.map_err(Into::into);
    match result {
        Ok(value) => {
            info!("{action} -> {value:?}");
        },
        Err(err) if err.is_underflow() => {
            warn!(%err, "{action} underflowed");
        },
        Err(err) => {
            warn!(%err, "{action} rejected");
        },
    }
}

fn show<D: Deque<i32> + Display>(deque: &D) {
    if deque.is_empty() {
        println!("deque is empty");
    } else {
        println!("deque elements are: {deque} (len {})", deque.len());
    }
}
