//! Print every hull insertion of a small sampled point set, one tick per line.
//!
//! Usage:
//!   cargo run -p hullstep --example watch_hull -- [count] [seed]

use hullstep::engine::{Driver, EventLog, HullEngine, HullEvent, TickOutcome};
use hullstep::sample::{draw_points, ReplayToken, SampleCfg};

fn main() {
    let mut args = std::env::args().skip(1);
    let count = args.next().and_then(|s| s.parse().ok()).unwrap_or(20);
    let seed = args.next().and_then(|s| s.parse().ok()).unwrap_or(2018);
    let cfg = SampleCfg {
        count,
        ..SampleCfg::default()
    };
    let points = match draw_points(cfg, ReplayToken { seed, index: 0 }) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("watch_hull: {e}");
            return;
        }
    };

    let mut driver = Driver::new(HullEngine::with_view(points, EventLog::default()));
    loop {
        let outcome = match driver.next_step() {
            Ok(o) => o,
            Err(e) => {
                eprintln!("watch_hull: {e}");
                return;
            }
        };
        for ev in driver.view_mut().drain() {
            if let HullEvent::VertexInserted { index, point } = ev {
                println!("  insert #{index}: ({}, {})", point.x, point.y);
            }
        }
        println!("{outcome:?}");
        if outcome == TickOutcome::Finished {
            break;
        }
    }
    println!("hull: {} vertices", driver.engine().hull().len());
}
