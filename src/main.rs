use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{info, warn};

use clinic_scribe::{
    detect_engine, Config, Consultation, DiagnoseOptions, Diagnosis, DiagnosisApi,
    DiagnosisClient, HistoryStore, SessionConfig, TranscriptionController,
};

#[derive(Parser)]
#[command(name = "clinic-scribe", about = "Consultation transcription assistant")]
struct Cli {
    /// Config file name (without extension)
    #[arg(long, default_value = "config/clinic-scribe")]
    config: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Capture a consultation transcript and request a diagnosis
    Record {
        /// Print the transcript without requesting a diagnosis
        #[arg(long)]
        no_diagnose: bool,
    },
    /// Manage the saved consultation history
    History {
        #[command(subcommand)]
        command: HistoryCommand,
    },
    /// Check whether the diagnosis API is reachable
    Health,
}

#[derive(Subcommand)]
enum HistoryCommand {
    /// List saved consultations
    List,
    /// Delete one consultation by id
    Delete { id: i64 },
    /// Clear the whole history
    Clear,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let cfg = Config::load(&cli.config)?;

    match cli.command {
        Command::Record { no_diagnose } => record(&cfg, no_diagnose).await,
        Command::History { command } => history(&cfg, command),
        Command::Health => health(&cfg).await,
    }
}

async fn record(cfg: &Config, no_diagnose: bool) -> Result<()> {
    let engine = detect_engine();
    let session_config = SessionConfig {
        language: cfg.speech.language.clone(),
        ..SessionConfig::default()
    };
    let mut controller = TranscriptionController::new(engine.as_deref(), session_config);

    let mut manual_entry = false;
    let mut transcript = if controller.is_supported() {
        capture(&mut controller).await
    } else {
        // Manual entry fallback: read the transcript from stdin.
        info!("Speech recognition unavailable, reading transcript from stdin");
        manual_entry = true;
        read_stdin_transcript()?
    };

    if transcript.trim().is_empty() {
        warn!("Empty transcript, nothing to do");
        return Ok(());
    }

    println!("Transcript:\n{}", transcript.trim());

    if no_diagnose {
        return Ok(());
    }

    let client = DiagnosisClient::new(cfg.api.base_url.clone(), cfg.speech.language.clone())?;

    if manual_entry {
        // Typed text goes through the backend normalizer first.
        match client.transcribe(&transcript).await {
            Ok(response) if response.success => transcript = response.transcript,
            Ok(_) => warn!("Transcription normalization rejected the text"),
            Err(e) => warn!("Transcription normalization failed: {}", e),
        }
    }

    let response = client
        .diagnose(&transcript, &DiagnoseOptions::default())
        .await?;
    let diagnosis: Diagnosis = response.into();
    print_diagnosis(&diagnosis);

    let mut store = HistoryStore::with_max_entries(&cfg.history.path, cfg.history.max_entries)?;
    store.save(Consultation::new(transcript, diagnosis))?;

    Ok(())
}

/// Run a live capture until the session ends or the user hits Ctrl-C.
async fn capture(controller: &mut TranscriptionController) -> String {
    controller.start();

    if controller.is_listening() {
        info!("Listening (Ctrl-C to stop)");

        loop {
            tokio::select! {
                more = controller.pump_next() => {
                    if let Some(error) = controller.take_error() {
                        warn!("Recognition failed: {}", error);
                    }
                    if !more || !controller.is_listening() {
                        break;
                    }
                }
                _ = tokio::signal::ctrl_c() => {
                    controller.stop();
                    controller.pump();
                    break;
                }
            }
        }

        let stats = controller.stats();
        info!(
            "Captured {} finalized segments in {:.1}s",
            stats.final_segments, stats.duration_secs
        );
    }

    controller.transcript().to_string()
}

fn read_stdin_transcript() -> Result<String> {
    use std::io::Read;

    let mut text = String::new();
    std::io::stdin()
        .read_to_string(&mut text)
        .context("Failed to read transcript from stdin")?;

    Ok(text.trim().to_string())
}

fn print_diagnosis(diagnosis: &Diagnosis) {
    println!("\nDiagnosis: {}", diagnosis.diagnosis);

    if !diagnosis.conditions.is_empty() {
        println!("Conditions: {}", diagnosis.conditions.join(", "));
    }
    if !diagnosis.exams.is_empty() {
        println!("Suggested exams: {}", diagnosis.exams.join(", "));
    }
    if !diagnosis.medications.is_empty() {
        println!("Medications: {}", diagnosis.medications.join(", "));
    }
    if !diagnosis.notes.is_empty() {
        println!("Notes: {}", diagnosis.notes);
    }
    if let Some(confidence) = diagnosis.confidence {
        println!("Confidence: {:.0}%", confidence * 100.0);
    }
}

fn history(cfg: &Config, command: HistoryCommand) -> Result<()> {
    let mut store = HistoryStore::with_max_entries(&cfg.history.path, cfg.history.max_entries)?;

    match command {
        HistoryCommand::List => {
            if store.consultations().is_empty() {
                println!("No saved consultations");
            }
            for consultation in store.consultations() {
                println!(
                    "{}  {}  {}",
                    consultation.id,
                    consultation.date.to_rfc3339(),
                    consultation.diagnosis.diagnosis
                );
            }
        }
        HistoryCommand::Delete { id } => store.delete(id)?,
        HistoryCommand::Clear => store.clear()?,
    }

    Ok(())
}

async fn health(cfg: &Config) -> Result<()> {
    let client = DiagnosisClient::new(cfg.api.base_url.clone(), cfg.speech.language.clone())?;

    if client.health().await {
        println!("Diagnosis API is healthy");
        Ok(())
    } else {
        println!("Diagnosis API is not responding");
        std::process::exit(1);
    }
}
