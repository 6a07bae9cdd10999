//! Simulation report generation.

use serde::Serialize;

/// How a single run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EndCause {
    /// Player hit an obstacle outside the gap.
    Collision,
    /// Run reached the step limit with the player still alive.
    StepLimit,
}

/// Statistics from one simulated run.
#[derive(Debug, Clone, Serialize)]
pub struct RunStats {
    pub steps_survived: u64,
    pub final_score: i64,
    pub obstacles_cleared: u32,
    /// Gap size the curve was presenting when the run ended.
    pub final_gap: i64,
    /// Day/night phase advances seen during the run.
    pub phases_seen: u32,
    pub end_cause: EndCause,
}

/// Aggregated results from multiple simulation runs.
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub num_runs: u32,
    pub runs_collided: u32,
    pub runs_survived: u32,
    pub survival_rate: f64,

    // Aggregated stats
    pub avg_steps_survived: f64,
    pub avg_final_score: f64,
    pub avg_obstacles_cleared: f64,
    pub avg_final_gap: f64,
    pub avg_phases_seen: f64,

    // Score spread
    pub min_score: i64,
    pub median_score: i64,
    pub max_score: i64,

    /// (score, run count) pairs, sorted by score.
    pub score_distribution: Vec<(i64, u32)>,

    // Individual run stats for detailed analysis
    pub run_stats: Vec<RunStats>,
}

impl SimReport {
    /// Create a new report from completed run stats.
    pub fn from_runs(runs: Vec<RunStats>) -> Self {
        let num_runs = runs.len() as u32;
        let denom = num_runs.max(1) as f64;

        let runs_collided = runs
            .iter()
            .filter(|r| r.end_cause == EndCause::Collision)
            .count() as u32;
        let runs_survived = num_runs - runs_collided;
        let survival_rate = runs_survived as f64 / denom;

        let avg_steps_survived =
            runs.iter().map(|r| r.steps_survived as f64).sum::<f64>() / denom;
        let avg_final_score = runs.iter().map(|r| r.final_score as f64).sum::<f64>() / denom;
        let avg_obstacles_cleared =
            runs.iter().map(|r| r.obstacles_cleared as f64).sum::<f64>() / denom;
        let avg_final_gap = runs.iter().map(|r| r.final_gap as f64).sum::<f64>() / denom;
        let avg_phases_seen = runs.iter().map(|r| r.phases_seen as f64).sum::<f64>() / denom;

        let mut scores: Vec<i64> = runs.iter().map(|r| r.final_score).collect();
        scores.sort_unstable();
        let min_score = scores.first().copied().unwrap_or(0);
        let max_score = scores.last().copied().unwrap_or(0);
        let median_score = scores.get(scores.len() / 2).copied().unwrap_or(0);

        let mut score_distribution: Vec<(i64, u32)> = Vec::new();
        for &score in &scores {
            match score_distribution.last_mut() {
                Some((s, count)) if *s == score => *count += 1,
                _ => score_distribution.push((score, 1)),
            }
        }

        Self {
            num_runs,
            runs_collided,
            runs_survived,
            survival_rate,
            avg_steps_survived,
            avg_final_score,
            avg_obstacles_cleared,
            avg_final_gap,
            avg_phases_seen,
            min_score,
            median_score,
            max_score,
            score_distribution,
            run_stats: runs,
        }
    }

    /// Generate a human-readable text report.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                    SIMULATION REPORT\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!(
            "Runs: {} total, {} collided, {} survived the step limit\n\n",
            self.num_runs, self.runs_collided, self.runs_survived
        ));

        report.push_str("── SURVIVAL ─────────────────────────────────────────────────────\n");
        report.push_str(&format!(
            "  Survival Rate:        {:.1}%\n",
            self.survival_rate * 100.0
        ));
        report.push_str(&format!(
            "  Avg Steps Survived:   {:.0}\n",
            self.avg_steps_survived
        ));
        report.push_str(&format!(
            "  Avg Obstacles Cleared: {:.1}\n\n",
            self.avg_obstacles_cleared
        ));

        report.push_str("── SCORING ──────────────────────────────────────────────────────\n");
        report.push_str(&format!(
            "  Avg Final Score:      {:.1}\n",
            self.avg_final_score
        ));
        report.push_str(&format!("  Min Score:            {}\n", self.min_score));
        report.push_str(&format!("  Median Score:         {}\n", self.median_score));
        report.push_str(&format!("  Max Score:            {}\n\n", self.max_score));

        report.push_str("── DIFFICULTY CURVE ─────────────────────────────────────────────\n");
        report.push_str(&format!(
            "  Avg Final Gap Size:   {:.1}\n",
            self.avg_final_gap
        ));
        report.push_str(&format!(
            "  Avg Phases Seen:      {:.1}\n\n",
            self.avg_phases_seen
        ));

        report.push_str("── BALANCE ASSESSMENT ───────────────────────────────────────────\n");
        let assessment = if self.survival_rate > 0.9 {
            "TOO EASY - Nearly every run outlasts the step limit"
        } else if self.avg_final_score < 3.0 {
            "TOO HARD - Most runs die within a few obstacles"
        } else {
            "GOOD - Runs die to the shrinking gap, not the opener"
        };
        report.push_str(&format!("  {}\n", assessment));

        report.push_str("\n═══════════════════════════════════════════════════════════════\n");

        report
    }

    /// Generate a JSON report for further analysis.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}
