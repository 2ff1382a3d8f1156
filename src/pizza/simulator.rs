//! Balance simulator for Pizza Clicker.
//! Run with: cargo test -p pizza-clicker simulate_greedy -- --nocapture

use super::engine::SimulationEngine;
use crate::format::format_count;

const CLICKS_PER_SEC: usize = 5;

/// Affordable tier with the shortest payback (`cost / yield`), lowest index on ties.
fn best_affordable(engine: &SimulationEngine) -> Option<usize> {
    engine
        .generators()
        .iter()
        .enumerate()
        .filter(|(i, _)| engine.can_afford(*i, 1))
        .fold(None, |best: Option<usize>, (i, g)| match best {
            Some(b) => {
                let gb = &engine.generators()[b];
                // cost_i / yield_i < cost_b / yield_b, without floats
                let lhs = g.current_cost() as u128 * gb.base_yield_per_tick() as u128;
                let rhs = gb.current_cost() as u128 * g.base_yield_per_tick() as u128;
                if lhs < rhs {
                    Some(i)
                } else {
                    Some(b)
                }
            }
            None => Some(i),
        })
}

/// Play `seconds` of the reference economy: click, buy greedily, tick.
fn simulate_greedy(seconds: u32) -> SimulationEngine {
    let mut engine = SimulationEngine::reference();
    for sec in 1..=seconds {
        for _ in 0..CLICKS_PER_SEC {
            engine.click();
        }
        while let Some(tier) = best_affordable(&engine) {
            if engine.purchase(tier, 1).is_err() {
                break;
            }
        }
        engine.tick();

        if sec % 600 == 0 {
            let owned: Vec<u64> = engine.generators().iter().map(|g| g.owned_count()).collect();
            println!(
                "[{:>4}s] pizzas={:>8} yield/tick={:>5} owned={:?}",
                sec,
                format_count(engine.currency()),
                engine.yield_per_tick(),
                owned
            );
        }
    }
    engine
}

#[test]
fn simulate_greedy_first_hour() {
    let engine = simulate_greedy(3600);

    let owned: Vec<u64> = engine.generators().iter().map(|g| g.owned_count()).collect();
    assert_eq!(owned, vec![51, 37, 24, 12, 0]);
    assert_eq!(engine.yield_per_tick(), 644);
    assert_eq!(engine.currency(), 77_957);
    assert_eq!(engine.stats().purchases, 124);

    let stats = engine.stats();
    assert_eq!(stats.earned_all_time - stats.spent, engine.currency());
    // The lab stays out of reach in the first hour.
    assert_eq!(engine.generators()[4].current_cost(), 100_000);
}

#[test]
fn simulate_greedy_first_minute() {
    let engine = simulate_greedy(60);
    let owned: Vec<u64> = engine.generators().iter().map(|g| g.owned_count()).collect();
    assert_eq!(owned, vec![21, 7, 0, 0, 0]);
    assert_eq!(engine.yield_per_tick(), 56);
}
