use labelentropy::{CrossEntropy, EntropyEngine, EntropyError, LocalValues, RelativeEntropy};

fn main() -> Result<(), EntropyError> {
    let engine = EntropyEngine::new();

    // Natural and generated labels, plus one outside the reference alphabet
    let labels = ["google", "stackoverflow", "xjq9z2kw", "kq8zxj0vq_w", "images.google"];

    for label in labels {
        match engine.calculate(label) {
            Ok(values) => {
                let mut rows: Vec<(&str, f64)> = values.iter().collect();
                rows.sort_by(|a, b| a.0.cmp(b.0));
                println!("{label}:");
                for (name, value) in rows {
                    println!("  {name:<8} {value:.4}");
                }
            }
            Err(err) => println!("{label}: skipped ({err})"),
        }
    }

    // Per-position log-ratios show which characters drive the divergence
    let estimator = RelativeEntropy::new("xjq9z2kw")?;
    println!("Local log-ratios for xjq9z2kw: {:?}", estimator.local_values());
    println!("Cross entropy: {:.4}", estimator.cross_entropy(&estimator.reference()));

    Ok(())
}
