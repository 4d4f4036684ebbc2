use std::error::Error;

use plotters::prelude::*;

use chebyshev_quadrature::catalog::runge;
use chebyshev_quadrature::integral::{ChebyshevQuadrature, Integral, NewtonCotesQuadrature};
use chebyshev_quadrature::quadrature::Rule;

const MAX_ORDER: usize = 64;
const MAX_NEWTON_COTES_ORDER: usize = 24;
const ERROR_FLOOR: f64 = 1e-16;
const ERROR_CEILING: f64 = 1e4;

fn error_series<I>(
    orders: impl Iterator<Item = usize>,
    integral: impl Fn(usize) -> I,
    f: fn(f64) -> f64,
    exact: f64,
) -> Result<Vec<(f64, f64)>, Box<dyn Error>>
where
    I: Integral,
{
    let mut series = Vec::new();
    for order in orders {
        let value = integral(order).integrate(f, (-1., 1.))?;
        let error = (value - exact).abs();

        if error.is_finite() {
            series.push((order as f64, error.clamp(ERROR_FLOOR, ERROR_CEILING)));
        } else {
            log::warn!("non-finite error at N={order}");
        }
    }

    Ok(series)
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let runge = runge();
    let (f, exact) = (runge.function(), runge.exact());

    let trapezoid = error_series(
        1..=MAX_ORDER,
        |order| ChebyshevQuadrature::new(order, Rule::Trapezoid),
        f,
        exact,
    )?;
    let clenshaw_curtis = error_series(
        1..=MAX_ORDER,
        |order| ChebyshevQuadrature::new(order, Rule::ClenshawCurtis),
        f,
        exact,
    )?;
    let newton_cotes = error_series(
        1..=MAX_NEWTON_COTES_ORDER,
        |n| NewtonCotesQuadrature { n },
        f,
        exact,
    )?;

    std::fs::create_dir_all("plots")?;
    let drawing_area = SVGBackend::new("plots/convergence.svg", (800, 600)).into_drawing_area();
    drawing_area.fill(&WHITE)?;

    let mut chart_builder = ChartBuilder::on(&drawing_area);

    let mut chart_context = chart_builder
        .caption(format!("|error|, ∫ {} dx", runge.label()), ("Arial", 20))
        .margin(40)
        .set_label_area_size(LabelAreaPosition::Left, 60)
        .set_label_area_size(LabelAreaPosition::Bottom, 40)
        .build_cartesian_2d(0f64..MAX_ORDER as f64, (ERROR_FLOOR..ERROR_CEILING).log_scale())?;

    chart_context
        .configure_mesh()
        .x_labels(16)
        .y_labels(20)
        .x_desc("N")
        .y_desc("|error|")
        .y_label_formatter(&|y| format!("{:.0e}", y))
        .axis_desc_style(("sans-serif", 15))
        .draw()?;

    for (series, label, color) in [
        (trapezoid, "Trapezoid", RED),
        (clenshaw_curtis, "Clenshaw-Curtis", BLUE),
        (newton_cotes, "Newton-Cotes", GREEN),
    ] {
        chart_context
            .draw_series(LineSeries::new(series, color.filled()))?
            .label(label)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
    }

    chart_context
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    drawing_area.present()?;
    log::info!("wrote plots/convergence.svg");

    Ok(())
}
