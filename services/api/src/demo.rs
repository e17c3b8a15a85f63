use clap::Args;
use pureskin::analysis::{
    radar, AnalysisEngine, AnalysisResult, AnswerSet, AnswerTag, CaptureAngle, CaptureSet,
    RiskLevel, LESION_CHANGE_QUESTION, SKIN_TYPE_QUESTION, SYMPTOM_QUESTION,
};
use pureskin::assessment::Questionnaire;
use pureskin::error::AppError;
use pureskin::intake::SessionIntake;
use std::collections::BTreeMap;
use std::path::PathBuf;

#[derive(Args, Debug, Default)]
pub(crate) struct AnalyzeArgs {
    /// Answer to the lesion change question (low_risk, medium_risk, high_risk)
    #[arg(long, value_parser = crate::infra::parse_answer_tag)]
    pub(crate) lesion_change: Option<AnswerTag>,
    /// Answer to the symptom question (clean, sensitive, inflammation)
    #[arg(long, value_parser = crate::infra::parse_answer_tag)]
    pub(crate) symptom: Option<AnswerTag>,
    /// Answer to the skin type question (dry, combination, oily)
    #[arg(long, value_parser = crate::infra::parse_answer_tag)]
    pub(crate) skin_type: Option<AnswerTag>,
    /// Capture angle that was photographed; repeat the flag for several angles
    #[arg(long = "capture", value_parser = crate::infra::parse_capture_angle)]
    pub(crate) captures: Vec<CaptureAngle>,
    /// Project the score polygon onto a radar chart of this radius
    #[arg(long)]
    pub(crate) radius: Option<f64>,
}

#[derive(Args, Debug)]
pub(crate) struct BatchArgs {
    /// Partner CSV export with one session per row
    pub(crate) path: PathBuf,
    /// Print each session's full recommendation list
    #[arg(long)]
    pub(crate) details: bool,
}

pub(crate) fn run_analyze(args: AnalyzeArgs) -> Result<(), AppError> {
    let questionnaire = Questionnaire::standard();
    let mut answers = AnswerSet::new();
    for (question, tag) in [
        (LESION_CHANGE_QUESTION, args.lesion_change),
        (SYMPTOM_QUESTION, args.symptom),
        (SKIN_TYPE_QUESTION, args.skin_type),
    ] {
        let Some(tag) = tag else { continue };
        if let Err(violation) = questionnaire.ensure_offered(question, tag) {
            println!("Answer rejected: {violation}");
            return Ok(());
        }
        answers.record(question, tag);
    }

    let mut captures = CaptureSet::new();
    for angle in args.captures {
        captures.record(angle);
    }

    let engine = AnalysisEngine::new();
    let result = engine.analyze(&answers, &captures);
    render_analysis(&engine, &result, args.radius);

    Ok(())
}

pub(crate) fn run_batch(args: BatchArgs) -> Result<(), AppError> {
    let sessions = SessionIntake::from_path(&args.path)?;
    if sessions.is_empty() {
        println!("No sessions found in {}", args.path.display());
        return Ok(());
    }

    let engine = AnalysisEngine::new();
    let mut tiers: BTreeMap<RiskLevel, usize> = BTreeMap::new();
    let mut referrals: Vec<String> = Vec::new();

    println!("Batch analysis of {}", args.path.display());
    for session in &sessions {
        let result = engine.analyze(&session.answers, &session.captures);
        println!(
            "- {} | index {} | {} | confidence {}%",
            session.session_id,
            result.index,
            result.risk.label(),
            result.confidence
        );
        if args.details {
            for recommendation in &result.recommendations {
                println!(
                    "    [{}] {}",
                    recommendation.kind.label(),
                    recommendation.title
                );
            }
        }
        if result.risk == RiskLevel::Warning {
            referrals.push(session.session_id.clone());
        }
        *tiers.entry(result.risk).or_insert(0) += 1;
    }

    println!("\nProcessed {} session(s)", sessions.len());
    for (risk, count) in &tiers {
        println!("- {}: {}", risk.label(), count);
    }

    if !referrals.is_empty() {
        println!("\nProfessional referral suggested for:");
        for session_id in &referrals {
            println!("- {session_id}");
        }
    }

    Ok(())
}

fn render_analysis(engine: &AnalysisEngine, result: &AnalysisResult, radius: Option<f64>) {
    println!("PureSkin analysis");
    println!("Risk tier: {}", result.risk.label());
    println!(
        "Health index: {} (confidence {}%)",
        result.index, result.confidence
    );

    println!("\nMetric scores");
    for (metric, score) in result.scores.iter() {
        let definition = engine.catalog().definition(metric);
        println!(
            "- {}: {} (weight {:.2})",
            definition.label, score, definition.weight
        );
    }

    println!("\nRecommendations");
    for recommendation in &result.recommendations {
        println!(
            "- [{}] {}: {}",
            recommendation.kind.label(),
            recommendation.title,
            recommendation.description
        );
    }

    if let Some(radius) = radius {
        let chart = radar::chart(&result.scores, radius);
        println!("\nRadar polygon (radius {radius})");
        for (definition, vertex) in engine.catalog().entries().iter().zip(chart.polygon.iter()) {
            println!("- {}: ({:.1}, {:.1})", definition.key, vertex.x, vertex.y);
        }
    }
}
