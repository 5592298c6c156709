use std::error::Error;

use log::info;

use gridfit::compare::chart::{self, ChartData};
use gridfit::compare::report::{self, ERROR_POINTS, TABLE_POINTS};
use gridfit::compare::table;
use gridfit::grid::SampleSet;

/// Test function `f(x) = x·log10(x+1) − 1`.
fn test_function(x: f64) -> f64 {
    x * (x + 1.0).log10() - 1.0
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let (a, b) = (1.0, 6.0);
    let n_values = [5];

    for n in n_values {
        println!("=== Interpolation with N = {n} nodes ===");
        println!("f(x) = x * log10(x + 1) - 1, interval [{a:.1}, {b:.1}]\n");

        let uniform = SampleSet::uniform(a, b, n, test_function)?;
        let chebyshev = SampleSet::chebyshev(a, b, n, test_function)?;

        println!("{}", table::nodes(&uniform));

        let comparison = report::compare(&uniform, test_function, TABLE_POINTS, ERROR_POINTS)?;
        println!("{}", table::comparison(&comparison));
        println!(
            "max |error| over {ERROR_POINTS} samples: lagrange {:.6e}, spline {:.6e}\n",
            comparison.max_lagrange_err, comparison.max_spline_err
        );

        let data = ChartData::collect(&uniform, &chebyshev, test_function, ChartData::DENSE_POINTS)?;
        let path = "interpolation.html";
        chart::write(&data, path)?;
        info!("results for n={n} written to {path}");
    }

    Ok(())
}
