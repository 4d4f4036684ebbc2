use std::error::Error;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use chebyshev_quadrature::catalog::Catalog;
use chebyshev_quadrature::harness::{self, HarnessConfig, Report};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum CatalogChoice {
    Low,
    High,
    Smooth,
    All,
}

impl CatalogChoice {
    fn catalogs(self) -> Vec<Catalog> {
        match self {
            CatalogChoice::Low => vec![Catalog::low_order()],
            CatalogChoice::High => vec![Catalog::high_order()],
            CatalogChoice::Smooth => vec![Catalog::smooth()],
            CatalogChoice::All => vec![
                Catalog::low_order(),
                Catalog::high_order(),
                Catalog::smooth(),
            ],
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "verify-quadrature")]
#[command(about = "Checks the quadrature rules against polynomials with known integrals")]
struct Args {
    /// Rule order N, overriding the order of each catalog
    #[arg(short = 'n', long)]
    order: Option<usize>,

    /// Catalogs to run; low and high when omitted
    #[arg(short, long)]
    catalog: Option<CatalogChoice>,

    /// Write every result to a CSV file
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Fail when a rule exceeds its tolerance
    #[arg(long)]
    strict: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let args = Args::parse();
    let config = HarnessConfig::default();

    let catalogs = match args.catalog {
        Some(choice) => choice.catalogs(),
        None => vec![Catalog::low_order(), Catalog::high_order()],
    };

    let mut reports: Vec<Report> = Vec::with_capacity(catalogs.len());
    for catalog in &catalogs {
        let order = args.order.unwrap_or(catalog.order());
        let report = harness::verify_at(catalog, order, &config)?;

        println!("{report}");
        reports.push(report);
    }

    if let Some(path) = &args.csv {
        let mut writer = csv::Writer::from_path(path)?;
        for result in reports.iter().flat_map(|report| report.results()) {
            writer.serialize(result)?;
        }
        writer.flush()?;
        log::info!("wrote results to {}", path.display());
    }

    let violations = reports
        .iter()
        .flat_map(|report| report.violations())
        .count();
    if args.strict && violations > 0 {
        return Err(format!("{violations} results exceed their tolerance").into());
    }

    Ok(())
}
