mod settings;

use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;

use faceshape_core::classification::domain::face_shape::FaceShape;
use faceshape_core::landmarks::infrastructure::json_landmark_reader::JsonLandmarkReader;
use faceshape_core::pipeline::analysis_executor::AnalysisExecutor;
use faceshape_core::pipeline::analysis_logger::StdoutAnalysisLogger;
use faceshape_core::pipeline::analysis_session::AnalysisSession;
use faceshape_core::pipeline::analyze_landmarks_use_case::{
    AnalysisReport, AnalyzeLandmarksUseCase, FrameCallback,
};
use faceshape_core::pipeline::frame_analysis::{FrameAnalysis, FrameStatus};
use faceshape_core::pipeline::infrastructure::sequential_analysis_executor::SequentialAnalysisExecutor;
use faceshape_core::pipeline::infrastructure::threaded_analysis_executor::ThreadedAnalysisExecutor;
use faceshape_core::pipeline::survey_dataset_use_case::{ShapeSurvey, SurveyDatasetUseCase};
use faceshape_core::recommendation::domain::recommendation_scorer::RecommendationScorer;
use faceshape_core::recommendation::infrastructure::json_catalog_loader;

use settings::Settings;

/// Face shape analysis and eyewear recommendation from facial landmarks.
#[derive(Parser)]
#[command(name = "faceshape")]
struct Cli {
    /// Landmark stream (JSON), or a dataset directory with --survey.
    input: PathBuf,

    /// Survey a labelled dataset (<dir>/<Shape>/*.json) instead of analyzing a stream.
    #[arg(long)]
    survey: bool,

    /// Eyewear catalog JSON (defaults to the built-in catalog).
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Read and measure frames on worker threads.
    #[arg(long)]
    threaded: bool,

    /// Max samples per shape folder when surveying.
    #[arg(long)]
    sample_limit: Option<usize>,

    /// Print one JSON line per frame to stdout.
    #[arg(long)]
    json: bool,
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let settings = Settings::load();
    validate(&cli)?;

    if cli.survey {
        let limit = cli.sample_limit.unwrap_or(settings.survey_sample_limit);
        run_survey(&cli.input, limit)
    } else {
        let catalog_path = cli.catalog.clone().or(settings.catalog.clone());
        let threaded = cli.threaded || settings.threaded;
        run_analysis(
            &cli.input,
            catalog_path.as_deref(),
            threaded,
            cli.json,
            settings.progress_every,
        )
    }
}

fn run_analysis(
    input: &Path,
    catalog_path: Option<&Path>,
    threaded: bool,
    json: bool,
    progress_every: usize,
) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = json_catalog_loader::load_or_default(catalog_path)?;
    let session = AnalysisSession::new(RecommendationScorer::new(catalog));
    let source = JsonLandmarkReader::open(input)?;

    let executor: Box<dyn AnalysisExecutor> = if threaded {
        Box::new(ThreadedAnalysisExecutor::new())
    } else {
        Box::new(SequentialAnalysisExecutor::new())
    };

    let on_frame: Option<FrameCallback> = if json {
        Some(Box::new(|analysis: &FrameAnalysis| {
            match serde_json::to_string(analysis) {
                Ok(line) => println!("{line}"),
                Err(e) => log::error!("Failed to serialize frame {}: {e}", analysis.index),
            }
            true
        }))
    } else {
        None
    };

    let mut use_case = AnalyzeLandmarksUseCase::new(
        executor,
        session,
        Box::new(StdoutAnalysisLogger::new(progress_every)),
        on_frame,
    );
    let report = use_case.execute(Box::new(source))?;

    if !json {
        print_report(&report);
    }
    Ok(())
}

fn print_report(report: &AnalysisReport) {
    let Some(analysis) = &report.last_stable else {
        println!("No stable face shape after {} frames", report.frames);
        return;
    };

    if let FrameStatus::Stable { shape } = analysis.status {
        println!("Face shape: {shape} (frame {})", analysis.index);
    }
    if let Some((face, chin, jaw, forehead)) = analysis.stats() {
        println!("  Length {face:.0}  Chin {chin:.0}°  Jaw {jaw:.0}  Forehead {forehead:.0}");
    }
    if let Some(best) = analysis.top_recommendation() {
        println!("  Best match: {}", best.name);
    }
    for (rank, style) in analysis.recommendations.iter().enumerate() {
        println!("  {}. {} [{}]", rank + 1, style.name, style.asset);
    }
}

fn run_survey(root: &Path, sample_limit: usize) -> Result<(), Box<dyn std::error::Error>> {
    let use_case = SurveyDatasetUseCase::new(
        sample_limit,
        Some(Box::new(|shape: FaceShape, count: usize| {
            eprint!("\rProcessed {count} {shape} samples...");
        })),
    );
    let results = use_case.execute(root)?;
    eprintln!();

    if results.is_empty() {
        log::warn!("No valid samples found under {}", root.display());
    }
    for survey in &results {
        print_survey(survey);
    }
    Ok(())
}

fn print_survey(survey: &ShapeSurvey) {
    println!("Results for: {} ({} samples)", survey.shape.name().to_uppercase(), survey.samples);
    println!("  > Face Ratio (Height):    {:.1}", survey.mean.face_ratio);
    println!("  > Jaw Ratio (Width):      {:.1}", survey.mean.jaw_ratio);
    println!("  > Forehead Ratio:         {:.1}", survey.mean.forehead_ratio);
    println!("  > Chin Angle:             {:.1}", survey.mean.chin_angle);
    println!("  > Classifier Agreement:   {:.0}%", survey.agreement * 100.0);
}

fn validate(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    if !cli.input.exists() {
        return Err(format!("Input not found: {}", cli.input.display()).into());
    }
    if cli.survey && !cli.input.is_dir() {
        return Err("--survey expects a dataset directory".into());
    }
    if !cli.survey && cli.input.is_dir() {
        return Err("Input must be a landmark stream file unless --survey is used".into());
    }
    if cli.survey && (cli.catalog.is_some() || cli.json || cli.threaded) {
        return Err("--catalog, --json and --threaded apply to stream analysis only".into());
    }
    if cli.sample_limit == Some(0) {
        return Err("Sample limit must be at least 1".into());
    }
    if let Some(ref catalog) = cli.catalog {
        if !catalog.is_file() {
            return Err(format!("Catalog file not found: {}", catalog.display()).into());
        }
    }
    Ok(())
}
