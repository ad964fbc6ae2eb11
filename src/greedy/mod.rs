//! Greedy coordinate construction.
//!
//! One left-to-right pass that fixes each variable to whichever sign gives
//! the smaller objective, holding every other variable at its current
//! value. Undecided variables sit at `+1` while earlier ones are decided,
//! so the result depends on the index order.

mod runner;

pub use runner::GreedySolver;
