//! CLI driver for the differential-cryptanalysis experiment.
//!
//! Invocation: `differential_experiment [N_plaintexts]`. The optional
//! positional argument overrides the default `N = 2^25`; it must parse as
//! a positive signed 64-bit integer. Exits 0 on a completed run, 1 when no
//! trials could be performed.

use present_cipher::experiment::{self, ExperimentParams};
use present_cipher::rng::SystemRandomSource;

fn main() {
    let num_plaintexts = match parse_num_plaintexts() {
        Ok(n) => n,
        Err(message) => {
            eprintln!("{message}");
            std::process::exit(1);
        }
    };

    let params = ExperimentParams {
        num_plaintexts,
        ..ExperimentParams::default()
    };

    println!("Starting differential cryptanalysis experiment on 4-round PRESENT...");
    println!("Parameters:");
    println!("  Number of Keys (K):          {}", params.num_keys);
    println!("  Number of Plaintexts per Key: {}", params.num_plaintexts);
    println!("  Cipher Rounds:                {}", params.rounds);
    println!("  Alpha (Input Difference):   {:016x}", params.alpha);
    println!("  Beta (Output Difference):   {:016x}", params.beta);
    println!("--------------------------------------------------");

    let report = {
        #[cfg(feature = "parallel")]
        {
            println!("(running the per-key loop in parallel via the `parallel` feature)");
            experiment::run_parallel(&params)
        }
        #[cfg(not(feature = "parallel"))]
        {
            let mut rng = SystemRandomSource::new();
            let report_interval = (params.num_plaintexts / 10).max(1);
            experiment::run(&params, &mut rng, |k, done, total| {
                if done % report_interval == 0 || done == total {
                    let pct = done as f64 / total as f64 * 100.0;
                    println!(
                        "  Key {:3}: processed {:9}/{} plaintexts ({pct:.1}%)",
                        k + 1,
                        done,
                        total
                    );
                }
            })
        }
    };

    println!("--------------------------------------------------");
    println!("Experiment Results:");
    for (k, counter) in report.counters.iter().enumerate() {
        println!("C[{k:2}]: {counter}");
    }
    println!("Total successes (S): {}", report.total_successes);
    println!("Total trials (T):    {}", report.total_trials);

    if report.total_trials == 0 {
        println!("No trials performed, cannot calculate probability.");
        std::process::exit(1);
    }

    match report.empirical_probability() {
        None => {
            println!("No successes observed. Experimental probability is effectively 0.");
            println!(
                "Cannot express as 2^(-x.xx) because probability is 0 or too small to measure \
                 with N={} per key.",
                params.num_plaintexts
            );
        }
        Some(p_emp) => {
            println!("Experimental Probability (S/T): {p_emp:e}");
            let x = report.neg_log2_probability().unwrap();
            println!("Experimental Probability (2^(-x.xx)): 2^(-{x:.2})");
        }
    }
    println!("--------------------------------------------------");
    println!("Experiment finished.");
}

fn parse_num_plaintexts() -> Result<u64, String> {
    match std::env::args().nth(1) {
        None => Ok(experiment::DEFAULT_NUM_PLAINTEXTS),
        Some(arg) => match arg.parse::<i64>() {
            Ok(n) if n > 0 => Ok(n as u64),
            Ok(_) => Err(format!(
                "N_plaintexts must be a positive integer, got `{arg}`"
            )),
            Err(_) => Err(format!("could not parse `{arg}` as an integer")),
        },
    }
}
