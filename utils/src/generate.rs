use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use structopt::StructOpt;
use twister::Twister64;

#[derive(StructOpt)]
pub struct GenerateOptions {
    /// File the values are appended to.
    #[structopt(required = true, short, long)]
    output: PathBuf,
    /// How many values to write.
    #[structopt(required = true, short, long)]
    count: usize,
    /// Upper end of the value range [0, range].
    #[structopt(short, long, default_value = "1.0")]
    range: f64,
    /// 'd' for doubles, 'f' for floats, 'i' for integers.
    #[structopt(short, long, default_value = "d")]
    precision: char,
    /// Fixed seed for a reproducible batch.
    #[structopt(short, long)]
    seed: Option<u64>,
    /// Seed from a scrambling of the system clock instead.
    #[structopt(short, long, conflicts_with = "seed")]
    time_seed: bool,
}

impl GenerateOptions {
    pub fn run(&self) -> anyhow::Result<()> {
        let seed = match (self.seed, self.time_seed) {
            (Some(seed), _) => seed,
            (None, true) => twister::time_seed(),
            (None, false) => twister::DEFAULT_SEED,
        };

        println!("# [Generating Values]");
        println!("Count     : {}", self.count);
        println!("Range     : [0, {}]", self.range);
        println!("Precision : {}", self.precision);
        println!("Seed      : {seed}");

        let timer = Instant::now();
        let mut rng = Twister64::new(seed);
        rng.write_batch(&self.output, self.count, self.range, self.precision)
            .with_context(|| format!("Failed to write batch to [{}]", self.output.display()))?;

        println!("> Took {:.2} seconds.", timer.elapsed().as_secs_f32());
        println!("Appended {} values to [{}]", self.count, self.output.display());

        Ok(())
    }
}
