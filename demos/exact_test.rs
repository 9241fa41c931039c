//! Exact and approximate KS tests on three small sample pairs.
//!
//! Run with `RUST_LOG=debug` to see the tracing events emitted by the test.

use exact_ks::output::{format_approximate, format_exact};
use exact_ks::{CombinedSample, Config, KsTest, TerminalProgress};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), exact_ks::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let pairs: [(&[f64], &[f64]); 3] = [
        (&[1.0][..], &[2.0, 3.0, 4.0][..]),
        (&[5.0, 10.0][..], &[2.0, 2.0, 10.0][..]),
        (&[11.0, 12.0, 13.0, 14.0][..], &[5.0, 6.0, 7.0][..]),
    ];

    let config = Config::default().from_env();
    for (x, y) in pairs {
        println!("X = {:?}, Y = {:?}", x, y);
        let sample = CombinedSample::from_samples(x, y)?;
        let test = KsTest::with_config(&sample, config.clone());

        let exact = test.perform_test_with(&mut TerminalProgress)?;
        print!("{}", format_exact(&exact));
        print!("{}", format_approximate(&test.perform_test_approximate()));
        println!();
    }
    Ok(())
}
