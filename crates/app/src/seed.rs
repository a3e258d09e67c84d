//! Run-seed selection: an explicit `--seed` wins, otherwise one is derived
//! from process entropy so every launch looks different.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeedChoice {
    Cli(u64),
    Generated(u64),
}

impl SeedChoice {
    pub fn value(self) -> u64 {
        match self {
            Self::Cli(seed) | Self::Generated(seed) => seed,
        }
    }
}

static GENERATED_SEED_COUNTER: AtomicU64 = AtomicU64::new(0);

pub fn generate_runtime_seed() -> u64 {
    let now_nanos =
        SystemTime::now().duration_since(UNIX_EPOCH).map_or(0_u128, |duration| duration.as_nanos());
    let pid = u64::from(std::process::id());
    let counter = GENERATED_SEED_COUNTER.fetch_add(1, Ordering::Relaxed);

    let entropy =
        (now_nanos as u64) ^ ((now_nanos >> 64) as u64) ^ pid.rotate_left(23) ^ counter.rotate_left(9);

    mix_seed(entropy)
}

/// Pick the run seed from `--seed N` / `--seed=N`, falling back to
/// `generated_seed` when the flag is absent. Other arguments are ignored.
pub fn resolve_seed_from_args(args: &[String], generated_seed: u64) -> Result<SeedChoice, String> {
    let mut pending_value = false;
    let mut selected = None;

    for argument in args.iter().skip(1) {
        let candidate = if pending_value {
            pending_value = false;
            Some(argument.as_str())
        } else if argument == "--seed" {
            pending_value = true;
            None
        } else {
            argument.strip_prefix("--seed=")
        };

        if let Some(raw) = candidate {
            if selected.is_some() {
                return Err("seed provided more than once".to_string());
            }
            let seed = raw
                .parse::<u64>()
                .map_err(|_| format!("seed value '{raw}' must be a non-negative integer"))?;
            selected = Some(seed);
        }
    }

    if pending_value {
        return Err("missing value for --seed".to_string());
    }

    Ok(match selected {
        Some(seed) => SeedChoice::Cli(seed),
        None => SeedChoice::Generated(generated_seed),
    })
}

fn mix_seed(mut value: u64) -> u64 {
    value ^= value >> 30;
    value = value.wrapping_mul(0xBF58_476D_1CE4_E5B9);
    value ^= value >> 27;
    value = value.wrapping_mul(0x94D0_49BB_1331_11EB);
    value ^ (value >> 31)
}
