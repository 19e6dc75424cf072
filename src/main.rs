//! Headless demo driver.
//!
//! Builds a tree, then runs each animated operation to completion at a
//! fixed frame rate, logging the step panel and visit order as they
//! evolve. Run with `RUST_LOG=info` (or `debug` for per-phase detail).

use bstviz::{BstEngine, EngineCommand, TraversalKind};
use bstviz::util::FrameClock;
use rand::Rng;

/// Drive the engine until the active operation finishes.
fn run_to_idle(engine: &mut BstEngine, clock: &mut FrameClock) {
    let mut last_cursor = usize::MAX;
    loop {
        std::thread::sleep(clock.time_until_next_frame());
        let dt = clock.tick();
        engine.update(dt);

        let snap = engine.snapshot();
        if snap.step_cursor != last_cursor
            && !snap.step_labels.is_empty()
        {
            last_cursor = snap.step_cursor;
            log::info!("step: {}", snap.step_labels[snap.step_cursor]);
        }

        if engine.is_idle() {
            return;
        }
    }
}

fn execute_and_wait(
    engine: &mut BstEngine,
    clock: &mut FrameClock,
    command: EngineCommand,
) {
    log::info!("command: {command:?}");
    engine.execute(command);
    run_to_idle(engine, clock);
}

fn main() {
    env_logger::init();

    let extra: usize = match std::env::args().nth(1) {
        Some(arg) => match arg.parse() {
            Ok(n) => n,
            Err(_) => {
                log::error!("Usage: bstviz [extra_random_nodes]");
                std::process::exit(1);
            }
        },
        None => 5,
    };

    let mut engine = BstEngine::new();
    let mut clock = FrameClock::new(60);
    let mut rng = rand::rng();

    for value in [50, 30, 70, 20, 40] {
        engine.execute(EngineCommand::SetValue { value });
        execute_and_wait(&mut engine, &mut clock, EngineCommand::Insert);
    }
    for _ in 0..extra {
        let value = rng.random_range(0..100);
        engine.execute(EngineCommand::SetValue { value });
        execute_and_wait(&mut engine, &mut clock, EngineCommand::Insert);
    }
    log::info!("tree ready with {} nodes", engine.node_count());

    engine.execute(EngineCommand::SetValue { value: 40 });
    execute_and_wait(&mut engine, &mut clock, EngineCommand::Search);
    log::info!("found: {}", engine.highlight().found);

    for kind in [
        TraversalKind::InOrder,
        TraversalKind::PreOrder,
        TraversalKind::PostOrder,
    ] {
        execute_and_wait(
            &mut engine,
            &mut clock,
            EngineCommand::Traverse { kind },
        );
        log::info!("{kind:?} visit order: {:?}", engine.visit_order());
    }

    engine.execute(EngineCommand::SetValue { value: 30 });
    execute_and_wait(&mut engine, &mut clock, EngineCommand::Delete);
    log::info!(
        "after delete: {} nodes, in-order {:?}",
        engine.node_count(),
        engine.tree().values_in_order()
    );
    log::info!("average fps: {:.1}", clock.fps());
}
