use clap::Parser;
use scorecard::{ShockSpec, init_logging, report};
use scorecard_core::demo;
use scorecard_core::model::Period;

#[derive(Parser, Debug)]
#[command(name = "scorecard")]
#[command(about = "Simulate shock propagation through a balanced-scorecard causal model")]
struct Args {
    /// Period to display, e.g. 2024-03
    #[arg(short, long, default_value = "2024-01")]
    period: String,

    /// Shock to apply, as KEY=DELTA@PERIOD (repeatable), e.g. K001=+0.10@2024-01
    #[arg(short, long = "shock")]
    shocks: Vec<ShockSpec>,

    /// Relaxation sweep count
    #[arg(long, default_value_t = scorecard_core::DEFAULT_SWEEPS)]
    sweeps: usize,

    /// Also print the impact attribution views for the period
    #[arg(short, long)]
    impacts: bool,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    init_logging(&args.log_level)?;

    let mut card = demo::model();
    if args.sweeps != scorecard_core::DEFAULT_SWEEPS {
        card.set_sweeps(args.sweeps);
    }
    tracing::info!(
        metrics = card.metrics().len(),
        periods = card.periods().len(),
        edges = card.edges().len(),
        "loaded demo model"
    );

    for spec in &args.shocks {
        tracing::debug!(%spec.metric, %spec.period, delta = spec.delta, "applying shock");
        card.inputs_mut()
            .set(spec.period.clone(), spec.metric.clone(), spec.delta);
    }
    card.recompute();

    for issue in card.validate() {
        tracing::warn!("{issue}");
    }

    let period = Period::from(args.period.as_str());
    if card.periods().index_of(&period).is_none() {
        tracing::warn!(%period, "period is outside the model's sequence");
    }

    print!("{}", report::render_period(&card, &period));
    if args.impacts {
        print!(
            "{}",
            report::render_impacts(&card, "Direct impacts", &card.direct_impacts(&period))
        );
        print!(
            "{}",
            report::render_impacts(
                &card,
                "Lagged impacts arriving this period",
                &card.lagged_impacts(&period)
            )
        );
    }

    Ok(())
}
