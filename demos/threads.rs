use std::sync::Arc;
use std::thread;

use weighted_draw::Sampler;

fn main() {
    let _ = env_logger::try_init();

    let sampler = Arc::new(Sampler::new(7));
    let teams = ["red", "green", "blue", "yellow", "purple"];
    let weights = [5.0, 4.0, 3.0, 2.0, 1.0];

    let handles: Vec<_> = (0..4)
        .map(|worker| {
            let sampler = Arc::clone(&sampler);
            thread::spawn(move || {
                let draft = sampler.sample(&teams, 3, false, Some(&weights));
                (worker, draft)
            })
        })
        .collect();

    for h in handles {
        match h.join() {
            Ok((worker, Ok(draft))) => println!("worker {worker}: {draft:?}"),
            Ok((worker, Err(e))) => eprintln!("worker {worker}: {e}"),
            Err(_) => eprintln!("worker panicked"),
        }
    }
}
