use crate::transform::CorrelationReport;

/// Console summary: the strongest `n` correlations of every platform
pub fn render_top_correlations(report: &CorrelationReport, n: usize) -> String {
    let mut out = String::new();

    for platform in &report.platforms {
        out.push_str(&format!("\nTop correlations for {}:\n", platform));
        out.push_str(&format!("  {:<14} {:>12}\n", "MFCC_Feature", "Correlation"));
        for record in report.top_correlations(platform, n) {
            out.push_str(&format!(
                "  {:<14} {:>12.6}\n",
                record.mfcc_feature, record.correlation
            ));
        }
    }

    out
}
