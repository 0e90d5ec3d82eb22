use std::error::Error;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use rand::{rngs::StdRng, SeedableRng};
use tracing::info;

use fruit_nn::config::RunConfig;
use fruit_nn::data::{builtin_fruit, load_samples, normalized, split_examples};
use fruit_nn::logging::init_logging;
use fruit_nn::{Example, FeedforwardTrainer, Fruit, FruitSample, HiddenDerivative, OneVsRest};

#[derive(Parser)]
#[command(name = "fruit-nn", about = "Train small fruit classifiers")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// One-hidden-layer network trained by backpropagation
    Feedforward {
        #[command(flatten)]
        common: CommonArgs,
        #[arg(long, value_name = "INT")]
        hidden_size: Option<usize>,
        #[arg(long)]
        activation: Option<String>,
        #[arg(long, value_name = "INT")]
        max_epochs: Option<usize>,
        #[arg(long)]
        goal: Option<f64>,
        #[arg(long)]
        seed: Option<u64>,
        /// Evaluate the hidden-layer derivative at the raw inputs
        #[arg(long)]
        raw_input_derivative: bool,
    },
    /// One logistic-regression model per fruit, combined one-vs-rest
    OneVsRest {
        #[command(flatten)]
        common: CommonArgs,
        #[arg(long, value_name = "INT")]
        iterations: Option<usize>,
    },
}

#[derive(Args)]
struct CommonArgs {
    /// CSV (sweetness,color,fruit) or JSON dataset; defaults to a built-in set
    #[arg(short, long, value_name = "PATH")]
    data: Option<PathBuf>,
    /// JSON run configuration; flags override its values
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,
    #[arg(long)]
    learning_rate: Option<f64>,
    /// Scale features from 0-10 into 0-1 before training
    #[arg(long)]
    normalize: bool,
    /// Classify one "sweetness,color" pair after training
    #[arg(long, value_name = "S,C")]
    predict: Option<String>,
}

impl CommonArgs {
    fn samples(&self) -> Result<Vec<FruitSample>, Box<dyn Error>> {
        match &self.data {
            Some(path) => {
                let samples = load_samples(path)?;
                Ok(if self.normalize { normalized(&samples) } else { samples })
            }
            None => Ok(normalized(&builtin_fruit(20))),
        }
    }

    fn base_config(&self) -> Result<RunConfig, Box<dyn Error>> {
        Ok(match &self.config {
            Some(path) => RunConfig::load(path)?,
            None => RunConfig::default(),
        })
    }

    fn query(&self) -> Result<Option<Vec<f64>>, Box<dyn Error>> {
        let Some(raw) = &self.predict else { return Ok(None) };
        let values = raw.split(',')
            .map(|v| v.trim().parse::<f64>())
            .collect::<Result<Vec<_>, _>>()?;
        if values.len() != 2 {
            return Err(format!("--predict expects two values, got {}", values.len()).into());
        }
        let scale = if self.normalize || self.data.is_none() { 10.0 } else { 1.0 };
        Ok(Some(values.into_iter().map(|v| v / scale).collect()))
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    init_logging("info")?;
    let args = Cli::parse();

    match args.command {
        Command::Feedforward {
            common,
            hidden_size,
            activation,
            max_epochs,
            goal,
            seed,
            raw_input_derivative,
        } => {
            let overrides = RunConfig {
                hidden_size,
                activation,
                learning_rate: common.learning_rate,
                max_epochs,
                goal,
                seed,
                hidden_derivative: raw_input_derivative.then_some(HiddenDerivative::RawInput),
                ..RunConfig::default()
            };
            let config = common.base_config()?.merge(overrides);
            run_feedforward(&common, &config)
        }
        Command::OneVsRest { common, iterations } => {
            let overrides = RunConfig {
                learning_rate: common.learning_rate,
                iterations,
                ..RunConfig::default()
            };
            let config = common.base_config()?.merge(overrides);
            run_one_vs_rest(&common, &config)
        }
    }
}

fn run_feedforward(common: &CommonArgs, config: &RunConfig) -> Result<(), Box<dyn Error>> {
    let dataset: Vec<Example> = common.samples()?.into_iter().map(Example::from).collect();

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut trainer = FeedforwardTrainer::with_rng(
        config.hidden_size(),
        config.activation(),
        config.learning_rate(),
        &mut rng,
    )
    .with_hidden_derivative(config.hidden_derivative.unwrap_or_default());

    let train_config = config.train_config();
    info!(
        examples = dataset.len(),
        hidden = trainer.hidden_size(),
        max_epochs = train_config.max_epochs,
        goal = train_config.goal,
        "training feedforward network"
    );
    for stats in trainer.epochs(&dataset, train_config) {
        let stats = stats?;
        info!("Epoch {}/{}, mean loss {:.6}", stats.epoch, stats.total_epochs, stats.mean_loss);
    }

    println!("Accuracy: {:.2}%", trainer.evaluate(&dataset)?);

    if let Some(query) = common.query()? {
        let class = trainer.predict(&query)?;
        println!("Predicted fruit: {}", Fruit::from_index(class).map_or("unknown".to_string(), |f| f.to_string()));
    }
    Ok(())
}

fn run_one_vs_rest(common: &CommonArgs, config: &RunConfig) -> Result<(), Box<dyn Error>> {
    let examples: Vec<Example> = common.samples()?.into_iter().map(Example::from).collect();
    let (features, labels) = split_examples(&examples);

    let mut model = OneVsRest::new(Fruit::ALL.len())
        .with_step_direction(config.step_direction.unwrap_or_default());
    let linear = config.linear_config();
    info!(
        examples = features.len(),
        learning_rate = linear.learning_rate,
        iterations = linear.iterations,
        "training one-vs-rest linear models"
    );
    model.train(&features, &labels, linear)?;

    println!("Accuracy: {:.2}%", model.evaluate(&features, &labels)?);

    if let Some(query) = common.query()? {
        let probabilities = model.predict_probabilities(&[query.clone()]);
        for fruit in Fruit::ALL {
            println!("{fruit}: {:.4}", probabilities[0][fruit.index()]);
        }
        let class = model.predict(&[query])[0];
        println!("Predicted fruit: {}", Fruit::ALL[class]);
    }
    Ok(())
}
