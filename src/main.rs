use bayes_regression::{
    BayesianLinearRegression, BayesianRegression, ClosedFormDistribution, Evaluator,
    IdentityDistanceMetric, LinearRegressionSettings, Metric, MultivariateGaussian,
    Vectorizable,
};
use ndarray::array;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Regression on house size (1000s of sq ft) with an intercept
    let settings = LinearRegressionSettings::new(1, 0.25)?.with_bias(true);
    let model = BayesianLinearRegression::new(settings);

    // Weights are [slope, intercept]
    let weights = array![150.0, 50.0];
    let conditional = model.create_conditional_distribution(&[1.5], &weights)?;
    println!(
        "Conditional for 1500 sq ft: mean {:.2}, variance {:.2}",
        conditional.mean(),
        conditional.variance()
    );

    let posterior = MultivariateGaussian::new(
        array![150.0, 50.0],
        array![[25.0, -10.0], [-10.0, 16.0]],
    )?;
    let predictive = model.create_predictive_distribution(&posterior)?;

    for size in [0.8, 1.5, 2.5] {
        let input: &dyn Vectorizable = &[size];
        let prediction = predictive.evaluate(input)?;
        println!(
            "Predictive for {:>4} sq ft: mean {:.2}, std dev {:.2}",
            size * 1000.0,
            prediction.mean(),
            prediction.std_dev()
        );
    }

    let metric = IdentityDistanceMetric::new();
    println!(
        "Identity distance: {} / {} / {}",
        metric.evaluate("x", "x"),
        metric.evaluate("x", "y"),
        metric.evaluate(&None::<&str>, &None)
    );

    Ok(())
}
