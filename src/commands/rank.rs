use std::io::{self, Write};

use anyhow::{Context, Result};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{info, warn};

use crate::cli::RankArgs;
use crate::matching::{AttemptStatus, BenchmarkCohort, MatchRequest, run_matching};
use crate::report::RankingReport;
use crate::source::{EmployeeSource, OfflineSource, SqliteSource};
use crate::util::{vacancy_id, write_json_pretty};

pub fn run(args: RankArgs) -> Result<()> {
    let cohort = BenchmarkCohort::new(args.benchmarks.iter().map(String::as_str))
        .context("invalid benchmark selection")?;

    let source: Box<dyn EmployeeSource> = match SqliteSource::open_read_only(&args.db_path) {
        Ok(source) => Box::new(source),
        Err(err) => {
            warn!(
                path = %args.db_path.display(),
                error = %err,
                "employee database unavailable; continuing offline"
            );
            Box::new(OfflineSource::new(format!("{err:#}")))
        }
    };

    let population = match source.fetch_population() {
        Ok(population) => population,
        Err(err) => {
            warn!(error = %err, "population unavailable; heuristic level will be skipped");
            Vec::new()
        }
    };

    let request = MatchRequest::new(args.job_vacancy_id.unwrap_or_else(vacancy_id), cohort)
        .with_role(args.role_name, args.job_level)
        .with_ml_weights(!args.equal_weights)
        .with_population(population);

    info!(
        job_vacancy_id = %request.job_vacancy_id,
        benchmarks = %request.cohort.ids().join(","),
        use_ml_weights = request.use_ml_weights,
        seed = ?args.seed,
        "ranking requested"
    );

    let mut rng = match args.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };
    let outcome = run_matching(source.as_ref(), &request, &mut rng);
    let report = RankingReport::build(&request, outcome, args.limit);

    if let Some(report_path) = &args.report_path {
        write_json_pretty(report_path, &report)?;
        info!(path = %report_path.display(), "wrote ranking report");
    }

    if args.json {
        write_json_report(&report)
    } else {
        write_text_report(&report)
    }
}

fn write_json_report(report: &RankingReport) -> Result<()> {
    let mut output = io::BufWriter::new(io::stdout().lock());
    serde_json::to_writer_pretty(&mut output, report)
        .context("failed to serialize ranking json output")?;
    writeln!(output)?;
    output.flush()?;
    Ok(())
}

fn write_text_report(report: &RankingReport) -> Result<()> {
    let mut output = io::BufWriter::new(io::stdout().lock());

    writeln!(
        output,
        "Vacancy: {} role={} level={}",
        report.job_vacancy_id,
        display_or_dash(&report.role_name),
        display_or_dash(&report.job_level)
    )?;
    writeln!(output, "Benchmarks: {}", report.benchmark_ids.join(", "))?;
    writeln!(
        output,
        "Data level: {} ({}) degraded={}",
        report.data_level_ordinal,
        report.data_level.as_str(),
        report.degraded
    )?;
    for attempt in &report.attempts {
        let status = match attempt.status {
            AttemptStatus::Produced => "produced",
            AttemptStatus::Empty => "empty",
            AttemptStatus::Failed => "failed",
        };
        let level = attempt.level.as_str();
        match &attempt.detail {
            Some(detail) => writeln!(output, "\t{level}: {status} ({detail})")?,
            None => writeln!(output, "\t{level}: {status}")?,
        }
    }

    let weights = report
        .weights
        .entries()
        .into_iter()
        .map(|(dimension, weight)| format!("{}={weight:.3}", dimension.as_str()))
        .collect::<Vec<_>>()
        .join(" ");
    writeln!(output, "Weights: {} {weights}", report.weights.policy().as_str())?;

    if let Some(benchmark) = &report.benchmark {
        writeln!(
            output,
            "Benchmark: members={} competency={:.2} iq={:.1} gtq={:.1} work_efficiency={:.1} performance={:.2}",
            benchmark.member_count,
            benchmark.competency_avg,
            benchmark.iq_avg,
            benchmark.gtq_avg,
            benchmark.work_efficiency_avg,
            benchmark.performance_avg,
        )?;
    }

    writeln!(
        output,
        "Results: {} of {}",
        report.returned, report.summary.total_candidates
    )?;
    for candidate in &report.candidates {
        let profile = &candidate.profile;
        writeln!(
            output,
            "{}.\t{:.1}%\t{}\t{}\t{}",
            candidate.rank, candidate.match_rate, profile.name, profile.role, profile.job_level
        )?;
        writeln!(
            output,
            "\t{} / {} / {}",
            profile.directorate, profile.department, profile.division
        )?;
        writeln!(
            output,
            "\tcompetency={:.1} cognitive={:.1} work_efficiency={:.1} behavioral={:.1} experience={:.1}",
            candidate.scores.competency,
            candidate.scores.cognitive,
            candidate.scores.work_efficiency,
            candidate.scores.behavioral,
            candidate.scores.experience,
        )?;
    }

    let summary = &report.summary;
    writeln!(
        output,
        "Summary: average={:.1} max={:.1} min={:.1} std_dev={:.2} high_matches={} high_quality={:.1}%",
        summary.average_match_rate,
        summary.max_match_rate,
        summary.min_match_rate,
        summary.std_dev_match_rate,
        summary.high_matches,
        summary.high_quality_share,
    )?;
    for average in &summary.dimension_averages {
        writeln!(
            output,
            "\t{:<16}{:.1} (gap {:+.1})",
            average.dimension.label(),
            average.average,
            average.gap_to_target
        )?;
    }
    for (title, groups) in [
        ("Job level", &summary.by_job_level),
        ("Directorate", &summary.by_directorate),
        ("Department", &summary.by_department),
    ] {
        let rendered = groups
            .iter()
            .map(|group| {
                format!(
                    "{}={:.1} (n={})",
                    group.group, group.average_match_rate, group.candidates
                )
            })
            .collect::<Vec<_>>()
            .join(", ");
        writeln!(output, "{title}: {rendered}")?;
    }

    writeln!(output, "Insights:")?;
    for insight in &report.insights {
        writeln!(output, "\t- {insight}")?;
    }
    writeln!(output, "Digest: {}", report.ranking_digest)?;

    output.flush()?;
    Ok(())
}

fn display_or_dash(value: &str) -> &str {
    if value.trim().is_empty() { "-" } else { value }
}
