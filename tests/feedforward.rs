use fruit_nn::data::{builtin_fruit, normalized};
use fruit_nn::network::INPUT_SIZE;
use fruit_nn::{Example, FeedforwardTrainer, HiddenDerivative, TrainConfig, TrainError, TrainerState};
use rand::{rngs::StdRng, SeedableRng};

fn fruit_examples() -> Vec<Example> {
    normalized(&builtin_fruit(20)).into_iter().map(Example::from).collect()
}

fn seeded(hidden: usize, lr: f64, seed: u64) -> FeedforwardTrainer {
    FeedforwardTrainer::with_rng(hidden, "sigmoid", lr, &mut StdRng::seed_from_u64(seed))
}

#[test]
fn respects_the_epoch_budget() {
    let data = fruit_examples();
    let mut trainer = seeded(4, 0.1, 3);
    let report = trainer.train(&data, 50, 0.01).unwrap();

    assert!(report.epochs_run() <= 50);
    assert!(report.epochs_run() >= 1);
    for (i, stats) in report.epochs.iter().enumerate() {
        assert_eq!(stats.epoch, i + 1);
        assert_eq!(stats.total_epochs, 50);
        assert!(stats.mean_loss >= 0.0);
    }
    // Only the last epoch may be the one that beat the goal.
    let early: Vec<_> = report.epochs.iter().rev().skip(1).collect();
    assert!(early.iter().all(|s| s.mean_loss >= 0.01 && !s.goal_reached));
    assert_eq!(report.converged, report.epochs_run() < 50 || report.epochs[49].mean_loss < 0.01);
}

#[test]
fn loss_trends_down_with_a_small_learning_rate() {
    let data = fruit_examples();
    for seed in 0..5 {
        let mut trainer = seeded(4, 0.1, seed);
        let report = trainer.train(&data, 200, 0.0).unwrap();
        assert_eq!(report.epochs_run(), 200);
        let first = report.epochs[0].mean_loss;
        let last = report.final_loss().unwrap();
        assert!(last < first, "seed {seed}: loss went from {first} to {last}");
    }
}

#[test]
fn epochs_are_exposed_as_a_lazy_sequence() {
    let data = fruit_examples();
    let mut trainer = seeded(3, 0.1, 9);

    let pairs: Vec<(usize, f64)> = trainer
        .epochs(&data, TrainConfig::new(10, 0.0))
        .map(|s| s.unwrap().as_pair())
        .collect();

    assert_eq!(pairs.iter().map(|p| p.0).collect::<Vec<_>>(), (1..=10).collect::<Vec<_>>());
    assert_eq!(trainer.state(), TrainerState::Trained);
}

#[test]
fn same_seed_same_run() {
    let data = fruit_examples();
    let mut a = seeded(5, 0.1, 11);
    let mut b = seeded(5, 0.1, 11);
    let ra = a.train(&data, 20, 0.0).unwrap();
    let rb = b.train(&data, 20, 0.0).unwrap();
    assert_eq!(ra, rb);
    assert_eq!(a.params(), b.params());
}

#[test]
fn evaluate_reports_a_percentage() {
    let data = fruit_examples();
    let mut trainer = seeded(4, 0.1, 5);
    trainer.train(&data, 30, 0.01).unwrap();
    let accuracy = trainer.evaluate(&data).unwrap();
    assert!((0.0..=100.0).contains(&accuracy));
}

#[test]
fn raw_input_policy_works_when_hidden_fits_inputs() {
    let data = fruit_examples();
    let mut trainer = seeded(INPUT_SIZE, 0.1, 2).with_hidden_derivative(HiddenDerivative::RawInput);
    let report = trainer.train(&data, 5, 0.0).unwrap();
    assert_eq!(report.epochs_run(), 5);

    let mut wide = seeded(4, 0.1, 2).with_hidden_derivative(HiddenDerivative::RawInput);
    assert_eq!(
        wide.train(&data, 5, 0.0),
        Err(TrainError::DimensionMismatch { expected: 4, got: INPUT_SIZE })
    );
}

#[test]
fn unsupported_activation_surfaces_from_training() {
    let data = fruit_examples();
    let mut trainer = FeedforwardTrainer::new(4, "softmax", 0.1);
    assert_eq!(trainer.activation_kind(), "softmax");
    let before = trainer.params().clone();
    assert_eq!(
        trainer.train(&data, 10, 0.01),
        Err(TrainError::UnsupportedActivation("softmax".into()))
    );
    assert_eq!(trainer.params(), &before);
    assert_eq!(trainer.evaluate(&data), Err(TrainError::UnsupportedActivation("softmax".into())));
}

#[test]
#[should_panic]
fn wrong_feature_width_is_a_precondition_violation() {
    let trainer = seeded(4, 0.1, 1);
    let _ = trainer.predict(&[1.0, 2.0, 3.0]);
}
