use clap::{Parser, Subcommand};

use driveguide::content::Section;
use driveguide::errors::DriveGuideError;
use driveguide::quiz::{AnswerSet, Budget, Capacity, Portability, PrimaryUse, recommend};
use driveguide::ui::guide::GuideApp;
use driveguide::ui::guide::config::AppConfig;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Open the buying guide window
    Guide {
        /// Section anchor to scroll to on open (e.g. "quiz")
        #[arg(short, long)]
        section: Option<String>,
    },
    /// Evaluate the quiz once from command-line answers
    Recommend {
        #[arg(long, value_enum)]
        budget: Option<Budget>,

        #[arg(long, value_enum)]
        primary_use: Option<PrimaryUse>,

        #[arg(long, value_enum)]
        capacity: Option<Capacity>,

        #[arg(long, value_enum)]
        portability: Option<Portability>,
    },
}

fn guide(section: Option<&str>) -> Result<(), DriveGuideError> {
    let start_section = match section {
        Some(anchor) => Some(Section::from_anchor(anchor).ok_or_else(|| {
            DriveGuideError::UnknownSection {
                anchor: anchor.to_string(),
            }
        })?),
        None => None,
    };

    let app_config = AppConfig::from_local_file().unwrap_or_default();

    let mut native_options = eframe::NativeOptions::default();
    native_options.viewport = native_options
        .viewport
        .with_inner_size(app_config.window_size());
    if let Some(position) = app_config.window_position.clone() {
        native_options.viewport = native_options.viewport.with_position(position);
    }

    eframe::run_native(
        "Driveguide",
        native_options,
        Box::new(move |cc| Ok(Box::new(GuideApp::new(app_config, start_section, cc)))),
    )
    .expect("could not start app");
    Ok(())
}

fn recommend_once(
    budget: Option<Budget>,
    primary_use: Option<PrimaryUse>,
    capacity: Option<Capacity>,
    portability: Option<Portability>,
) {
    let answers = AnswerSet {
        budget,
        primary_use,
        capacity,
        portability,
    };

    match recommend(&answers) {
        Some(recommendation) => {
            println!("{}", recommendation.title);
            println!("{}", recommendation.description);
        }
        None => {
            println!("Answer all four questions to get a recommendation. Still missing:");
            for question in answers.unanswered() {
                println!("  - {question}");
            }
        }
    }
}

fn main() {
    #[cfg(debug_assertions)]
    colog::init();

    let cli = Args::parse();
    ctrlc::set_handler(move || {
        println!("Exiting...");
        std::process::exit(0);
    })
    .expect("Could not set Ctrl-C handler");
    match &cli.command {
        Commands::Guide { section } => {
            guide(section.as_deref()).expect("Error while running the buying guide");
        }
        Commands::Recommend {
            budget,
            primary_use,
            capacity,
            portability,
        } => recommend_once(*budget, *primary_use, *capacity, *portability),
    };
}
