use std::collections::HashMap;

use weighted_draw::{Sampler, WeightVector};

#[derive(Copy, Eq, PartialEq, Clone, Debug, Hash)]
enum Prize {
    Jackpot,
    Car,
    Voucher,
    Sticker,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let prizes = [Prize::Jackpot, Prize::Car, Prize::Voucher, Prize::Sticker];
    let weights = [1.0, 4.0, 25.0, 70.0];
    println!(
        "cumulative: {}",
        WeightVector::from(&weights[..]).cumulative_probability()
    );

    let sampler = Sampler::new(2024);

    // With replacement: every ticket can win any prize.
    let mut hist: HashMap<Prize, u64> = HashMap::default();
    for prize in sampler.sample(&prizes, 100_000, true, Some(&weights))? {
        *hist.entry(prize).or_default() += 1;
    }
    let mut values: Vec<(Prize, u64)> = hist.into_iter().collect();
    values.sort_by(|(_, ca), (_, cb)| cb.cmp(ca));
    for (prize, count) in values {
        println!("{count: >6} {prize:?}");
    }

    // Without replacement: a weighted running order, each prize once.
    let order = sampler.sample_refs(&prizes, prizes.len(), false, Some(&weights))?;
    println!("\nhand-out order: {order:?}");

    Ok(())
}
