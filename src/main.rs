// src/main.rs
// Prints a few reference evaluations of every loss.

use rlosses::{ArrayLike, LossError, l2_loss, likelihood, log_loss};

fn main() -> Result<(), LossError> {
    println!("=== rlosses ===\n");

    let predictions = ArrayLike::from_vec(vec![1.0f64, 2.0, 3.0]);
    let targets = ArrayLike::from_vec(vec![1.0f64, 1.0, 1.0]);
    let loss = l2_loss(&predictions, Some(&targets))?;
    println!("l2_loss([1, 2, 3], [1, 1, 1]) = {}", format_values(&loss));

    let predictions = ArrayLike::from_vec(vec![2.0f64]);
    let loss = l2_loss(&predictions, None)?;
    println!("l2_loss([2])                  = {}", format_values(&loss));

    let predictions = ArrayLike::from_vec(vec![1.0f64, 0.0, 0.5]);
    let targets = ArrayLike::from_vec(vec![1.0f64, 0.0, 1.0]);
    let values = likelihood(&predictions, &targets)?;
    println!("likelihood([1, 0, 0.5], [1, 0, 1]) = {}", format_values(&values));

    let predictions = ArrayLike::from_vec(vec![1.0f64, 0.5]);
    let targets = ArrayLike::from_vec(vec![1.0f64, 1.0]);
    let loss = log_loss(&predictions, &targets)?;
    println!("log_loss([1, 0.5], [1, 1])    = {}", format_values(&loss));

    let labels = ArrayLike::from_vec(vec![1i32, 0, 1]);
    match log_loss(&labels, &targets) {
        Ok(_) => println!("integer labels were accepted"),
        Err(e) => println!("\nlog_loss on int32 labels fails: {}", e),
    }

    Ok(())
}

fn format_values(array: &ArrayLike) -> String {
    let values: Vec<String> = array.to_f64().iter().map(|v| format!("{:.4}", v)).collect();
    format!("[{}]", values.join(", "))
}
