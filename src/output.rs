use crate::app::CompareOutcome;
use crate::evaluation::EvaluationReport;
use crate::model::ProviderKind;

pub fn print_menu() {
    println!();
    println!("=== Main Menu ===");
    for (index, provider) in ProviderKind::ALL.iter().enumerate() {
        println!("{}. Use {}", index + 1, provider.display_name());
    }
    println!("3. Compare latest responses");
    println!("4. Exit");
}

pub fn print_compare_outcome(outcome: &CompareOutcome) {
    match outcome {
        CompareOutcome::NotEnough { cached } => {
            tracing::debug!(cached, "comparison skipped");
            println!("At least two responses (one per model) are needed to compare!");
        }
        CompareOutcome::Compared(report) => {
            println!();
            println!("=== Response Comparison ===");
            print!("{}", render_report(report));
        }
    }
}

pub(crate) fn render_report(report: &EvaluationReport) -> String {
    let mut rendered = String::from("\nComparison results:\n");
    for (strategy, metrics) in report.iter() {
        rendered.push_str(&format!("\n{}:\n", strategy.to_uppercase()));
        for (name, value) in metrics.iter() {
            rendered.push_str(&format!("  {}: {}\n", name, value));
        }
    }
    rendered
}
