use museum_core::model::ModelStats;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConfidenceBarVm {
    pub label: String,
    pub percent: u32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct StatsVm {
    pub accuracy_label: String,
    pub progress_percent: u32,
    pub classified_label: String,
    /// `points` attribute for an SVG polyline in a 100x40 view box, or
    /// `None` when the curve has fewer than two samples.
    pub curve_points: Option<String>,
    pub confidence_bars: Vec<ConfidenceBarVm>,
}

#[must_use]
pub fn map_model_stats(stats: &ModelStats) -> StatsVm {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let progress_percent = (stats.progress_fraction() * 100.0).round() as u32;

    let curve_points = if stats.learning_curve.len() < 2 {
        None
    } else {
        let last = stats.learning_curve.len() - 1;
        #[allow(clippy::cast_precision_loss)]
        let points = stats
            .learning_curve
            .iter()
            .enumerate()
            .map(|(index, value)| {
                let x = index as f64 / last as f64 * 100.0;
                let y = 40.0 - value.clamp(0.0, 1.0) * 40.0;
                format!("{x:.1},{y:.1}")
            })
            .collect::<Vec<_>>()
            .join(" ");
        Some(points)
    };

    let confidence_bars = stats
        .confidence_distribution
        .iter()
        .map(|(label, value)| ConfidenceBarVm {
            label: label.clone(),
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            percent: (value.clamp(0.0, 1.0) * 100.0).round() as u32,
        })
        .collect();

    StatsVm {
        accuracy_label: format!("{}%", stats.accuracy_percent()),
        progress_percent,
        classified_label: format!("{} of {}", stats.classified_count, stats.total_count),
        curve_points,
        confidence_bars,
    }
}
