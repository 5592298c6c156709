//! Static HTML chart export.
//!
//! Collects a dense sweep of exact/interpolated values plus the raw node
//! coordinates of both grids, and renders them into a standalone Chart.js
//! document: the method comparison, the two node layouts, and a log-scale
//! error chart. A pure sink of numeric arrays; nothing here feeds back
//! into the models.

use std::fs;
use std::io;
use std::path::Path;

use log::info;

use crate::grid::SampleSet;
use crate::interpolation::errors::InterpolationError;
use crate::interpolation::lagrange::LagrangePolynomial;
use crate::interpolation::spline::natural::NaturalSpline;
use crate::interpolation::traits::Interpolator;

/// Numeric arrays backing the chart document.
///
/// The Lagrange curves come from both node layouts; the spline curve is
/// built on the uniform grid. All value arrays share `xs`.
#[derive(Debug, Clone)]
pub struct ChartData {
    pub n: usize,
    pub xs: Vec<f64>,
    pub exact: Vec<f64>,
    pub lagrange_uniform: Vec<f64>,
    pub lagrange_chebyshev: Vec<f64>,
    pub spline: Vec<f64>,
    pub lagrange_uniform_errors: Vec<f64>,
    pub lagrange_chebyshev_errors: Vec<f64>,
    pub spline_errors: Vec<f64>,
    pub uniform_nodes_x: Vec<f64>,
    pub uniform_nodes_y: Vec<f64>,
    pub chebyshev_nodes_x: Vec<f64>,
    pub chebyshev_nodes_y: Vec<f64>,
}

impl ChartData {
    /// Default dense-sweep resolution; the sweep holds `DENSE_POINTS + 1`
    /// samples including both endpoints.
    pub const DENSE_POINTS: usize = 200;

    /// Sweeps both models over the uniform set's interval at `points + 1`
    /// abscissas and captures the node coordinates of both grids.
    ///
    /// # Errors
    /// - [`InterpolationError::Singular`] if the spline system cannot be
    ///   solved.
    pub fn collect<F>(
        uniform: &SampleSet,
        chebyshev: &SampleSet,
        f: F,
        points: usize,
    ) -> Result<Self, InterpolationError>
    where
        F: Fn(f64) -> f64,
    {
        let lagrange_uni = LagrangePolynomial::new(uniform);
        let lagrange_cheb = LagrangePolynomial::new(chebyshev);
        let spline = NaturalSpline::new(uniform)?;

        let (a, b) = uniform.interval();
        let step = (b - a) / points as f64;
        let count = points + 1;

        let mut data = Self {
            n: uniform.n(),
            xs: Vec::with_capacity(count),
            exact: Vec::with_capacity(count),
            lagrange_uniform: Vec::with_capacity(count),
            lagrange_chebyshev: Vec::with_capacity(count),
            spline: Vec::with_capacity(count),
            lagrange_uniform_errors: Vec::with_capacity(count),
            lagrange_chebyshev_errors: Vec::with_capacity(count),
            spline_errors: Vec::with_capacity(count),
            uniform_nodes_x: uniform.xs(),
            uniform_nodes_y: uniform.ys(),
            chebyshev_nodes_x: chebyshev.xs(),
            chebyshev_nodes_y: chebyshev.ys(),
        };

        for i in 0..count {
            let x = a + i as f64 * step;
            let exact = f(x);
            let lu = lagrange_uni.eval(x);
            let lc = lagrange_cheb.eval(x);
            let s = spline.eval(x);

            data.xs.push(x);
            data.exact.push(exact);
            data.lagrange_uniform.push(lu);
            data.lagrange_chebyshev.push(lc);
            data.spline.push(s);
            data.lagrange_uniform_errors.push((exact - lu).abs());
            data.lagrange_chebyshev_errors.push((exact - lc).abs());
            data.spline_errors.push((exact - s).abs());
        }

        Ok(data)
    }
}

/// Formats a slice as a JavaScript number array with 6 decimals.
fn js_array(values: &[f64]) -> String {
    let mut out = String::with_capacity(values.len() * 10);
    out.push('[');
    for (i, v) in values.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        out.push_str(&format!("{v:.6}"));
    }
    out.push(']');
    out
}

/// Renders the chart document.
#[must_use]
pub fn render(data: &ChartData) -> String {
    TEMPLATE
        .replace("@N@", &data.n.to_string())
        .replace("@X_VALUES@", &js_array(&data.xs))
        .replace("@EXACT@", &js_array(&data.exact))
        .replace("@LAGRANGE_UNIFORM@", &js_array(&data.lagrange_uniform))
        .replace("@LAGRANGE_CHEBYSHEV@", &js_array(&data.lagrange_chebyshev))
        .replace("@SPLINE@", &js_array(&data.spline))
        .replace(
            "@LAGRANGE_UNIFORM_ERRORS@",
            &js_array(&data.lagrange_uniform_errors),
        )
        .replace(
            "@LAGRANGE_CHEBYSHEV_ERRORS@",
            &js_array(&data.lagrange_chebyshev_errors),
        )
        .replace("@SPLINE_ERRORS@", &js_array(&data.spline_errors))
        .replace("@UNIFORM_NODES_X@", &js_array(&data.uniform_nodes_x))
        .replace("@UNIFORM_NODES_Y@", &js_array(&data.uniform_nodes_y))
        .replace("@CHEBYSHEV_NODES_X@", &js_array(&data.chebyshev_nodes_x))
        .replace("@CHEBYSHEV_NODES_Y@", &js_array(&data.chebyshev_nodes_y))
}

/// Renders and writes the chart document to `path`.
pub fn write<P: AsRef<Path>>(data: &ChartData, path: P) -> io::Result<()> {
    let path = path.as_ref();
    fs::write(path, render(data))?;
    info!("chart document written to {}", path.display());
    Ok(())
}

const TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Interpolation results</title>
    <script src="https://cdnjs.cloudflare.com/ajax/libs/Chart.js/3.9.1/chart.min.js"></script>
    <style>
        body {
            font-family: Arial, sans-serif;
            max-width: 1600px;
            margin: 0 auto;
            padding: 20px;
            background: #f5f5f5;
        }
        h1 {
            text-align: center;
            color: #333;
        }
        .charts-container {
            display: grid;
            grid-template-columns: 1fr 1fr;
            gap: 20px;
            margin-bottom: 20px;
        }
        .chart-container {
            background: white;
            padding: 20px;
            border-radius: 8px;
            box-shadow: 0 2px 4px rgba(0,0,0,0.1);
        }
        .full-width {
            grid-column: 1 / -1;
        }
        canvas {
            max-width: 100%;
            height: 400px !important;
        }
        h2 {
            margin-top: 0;
            color: #555;
        }
    </style>
</head>
<body>
    <h1>Interpolation results (N = @N@ nodes)</h1>

    <div class="charts-container">
        <div class="chart-container full-width">
            <h2>Method comparison</h2>
            <canvas id="interpolationChart"></canvas>
        </div>

        <div class="chart-container">
            <h2>Uniform nodes</h2>
            <canvas id="uniformNodesChart"></canvas>
        </div>

        <div class="chart-container">
            <h2>Chebyshev nodes</h2>
            <canvas id="chebyshevNodesChart"></canvas>
        </div>

        <div class="chart-container full-width">
            <h2>Interpolation error comparison</h2>
            <canvas id="errorChart"></canvas>
        </div>
    </div>

    <script>
        const ctx1 = document.getElementById('interpolationChart').getContext('2d');
        new Chart(ctx1, {
            type: 'line',
            data: {
                labels: @X_VALUES@,
                datasets: [{
                    label: 'Exact function',
                    data: @EXACT@,
                    borderColor: 'rgb(75, 192, 192)',
                    borderWidth: 3,
                    pointRadius: 0,
                    tension: 0.1
                }, {
                    label: 'Lagrange (uniform nodes)',
                    data: @LAGRANGE_UNIFORM@,
                    borderColor: 'rgb(255, 99, 132)',
                    borderWidth: 2,
                    borderDash: [5, 5],
                    pointRadius: 0,
                    tension: 0.1
                }, {
                    label: 'Lagrange (Chebyshev nodes)',
                    data: @LAGRANGE_CHEBYSHEV@,
                    borderColor: 'rgb(153, 102, 255)',
                    borderWidth: 2,
                    borderDash: [10, 5],
                    pointRadius: 0,
                    tension: 0.1
                }, {
                    label: 'Cubic spline',
                    data: @SPLINE@,
                    borderColor: 'rgb(54, 162, 235)',
                    borderWidth: 2,
                    borderDash: [2, 2],
                    pointRadius: 0,
                    tension: 0.1
                }]
            },
            options: {
                responsive: true,
                maintainAspectRatio: false,
                plugins: {
                    legend: { position: 'top' }
                },
                scales: {
                    x: { title: { display: true, text: 'x' } },
                    y: { title: { display: true, text: 'f(x)' } }
                }
            }
        });

        const ctx2 = document.getElementById('uniformNodesChart').getContext('2d');
        new Chart(ctx2, {
            type: 'scatter',
            data: {
                datasets: [{
                    label: 'Uniform nodes',
                    data: @UNIFORM_NODES_X@.map((x, i) => ({x: x, y: @UNIFORM_NODES_Y@[i]})),
                    borderColor: 'rgb(255, 99, 132)',
                    backgroundColor: 'rgba(255, 99, 132, 0.8)',
                    pointRadius: 6
                }]
            },
            options: {
                responsive: true,
                maintainAspectRatio: false,
                plugins: {
                    legend: { position: 'top' }
                },
                scales: {
                    x: { title: { display: true, text: 'x' } },
                    y: { title: { display: true, text: 'f(x)' } }
                }
            }
        });

        const ctx3 = document.getElementById('chebyshevNodesChart').getContext('2d');
        new Chart(ctx3, {
            type: 'scatter',
            data: {
                datasets: [{
                    label: 'Chebyshev nodes',
                    data: @CHEBYSHEV_NODES_X@.map((x, i) => ({x: x, y: @CHEBYSHEV_NODES_Y@[i]})),
                    borderColor: 'rgb(153, 102, 255)',
                    backgroundColor: 'rgba(153, 102, 255, 0.8)',
                    pointRadius: 6
                }]
            },
            options: {
                responsive: true,
                maintainAspectRatio: false,
                plugins: {
                    legend: { position: 'top' }
                },
                scales: {
                    x: { title: { display: true, text: 'x' } },
                    y: { title: { display: true, text: 'f(x)' } }
                }
            }
        });

        const ctx4 = document.getElementById('errorChart').getContext('2d');
        new Chart(ctx4, {
            type: 'line',
            data: {
                labels: @X_VALUES@,
                datasets: [{
                    label: 'Lagrange error (uniform)',
                    data: @LAGRANGE_UNIFORM_ERRORS@,
                    borderColor: 'rgb(255, 99, 132)',
                    borderWidth: 2,
                    pointRadius: 0,
                    tension: 0.1
                }, {
                    label: 'Lagrange error (Chebyshev)',
                    data: @LAGRANGE_CHEBYSHEV_ERRORS@,
                    borderColor: 'rgb(153, 102, 255)',
                    borderWidth: 2,
                    pointRadius: 0,
                    tension: 0.1
                }, {
                    label: 'Spline error',
                    data: @SPLINE_ERRORS@,
                    borderColor: 'rgb(54, 162, 235)',
                    borderWidth: 2,
                    pointRadius: 0,
                    tension: 0.1
                }]
            },
            options: {
                responsive: true,
                maintainAspectRatio: false,
                plugins: {
                    legend: { position: 'top' }
                },
                scales: {
                    x: { title: { display: true, text: 'x' } },
                    y: {
                        type: 'logarithmic',
                        title: { display: true, text: 'Error (log)' }
                    }
                }
            }
        });
    </script>
</body>
</html>
"#;
